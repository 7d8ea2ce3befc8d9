// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Plan graph export
//!
//! Renders a description tree as a directed graph: one node per operator,
//! an edge from each operator to each of its inputs. The graph can be
//! walked directly or written out as a Graphviz DOT document.

use crate::builder::{describe_plan, PlanNode};
use crate::config::DescribeConfig;
use crate::description::PlanDescription;
use crate::error::{DescribeError, Result};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::fmt::Write as _;

/// Extension key shown as the node tooltip
pub const TOOLTIP_KEY: &str = "Query";
/// Extension key never shown in graphs
pub const HIDDEN_KEY: &str = "FieldQuery";

/// One operator in the plan graph
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphNode {
    pub label: String,
    pub attributes: Vec<String>,
    pub tooltip: Option<String>,
}

impl GraphNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn add_attribute(&mut self, attribute: impl Into<String>) {
        self.attributes.push(attribute.into());
    }

    pub fn add_tooltip(&mut self, tooltip: impl Into<String>) {
        self.tooltip = Some(tooltip.into());
    }
}

/// Directed plan graph; edges point from an operator to its inputs
#[derive(Debug, Clone)]
pub struct PlanGraph {
    name: String,
    graph: DiGraph<GraphNode, ()>,
    root: Option<NodeIndex>,
}

impl PlanGraph {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            graph: DiGraph::new(),
            root: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_node(&mut self, node: GraphNode) -> NodeIndex {
        self.graph.add_node(node)
    }

    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex) {
        self.graph.add_edge(from, to, ());
    }

    pub fn node(&self, idx: NodeIndex) -> Option<&GraphNode> {
        self.graph.node_weight(idx)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// The node of the described plan's root operator
    pub fn root(&self) -> Option<NodeIndex> {
        self.root
    }

    /// First node carrying `label`, in insertion order
    pub fn find(&self, label: &str) -> Option<NodeIndex> {
        self.graph
            .node_indices()
            .find(|&idx| self.graph[idx].label == label)
    }

    /// Inputs of `idx`, in the order the edges were added
    pub fn children(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut edges: Vec<_> = self
            .graph
            .edges(idx)
            .map(|edge| (edge.id(), edge.target()))
            .collect();
        edges.sort_by_key(|(id, _)| *id);
        edges.into_iter().map(|(_, target)| target).collect()
    }

    /// Graphviz DOT document for this graph
    pub fn to_dot(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "digraph \"{}\" {{", escape_dot(&self.name));
        out.push_str("  node [shape=box];\n");

        for idx in self.graph.node_indices() {
            let node = &self.graph[idx];
            let mut label = escape_dot(&node.label);
            for attribute in &node.attributes {
                label.push_str("\\n");
                label.push_str(&escape_dot(attribute));
            }
            let _ = write!(out, "  n{} [label=\"{}\"", idx.index(), label);
            if let Some(tooltip) = &node.tooltip {
                let _ = write!(out, " tooltip=\"{}\"", escape_dot(tooltip));
            }
            out.push_str("];\n");
        }

        for edge in self.graph.edge_references() {
            let _ = writeln!(
                out,
                "  n{} -> n{};",
                edge.source().index(),
                edge.target().index()
            );
        }

        out.push_str("}\n");
        out
    }
}

/// Render `description` into a new graph named after `config.graph_name`
pub fn export_graph(description: &PlanDescription, config: &DescribeConfig) -> Result<PlanGraph> {
    if description.depth() > config.max_depth {
        return Err(DescribeError::DepthExceeded {
            limit: config.max_depth,
        });
    }

    let mut graph = PlanGraph::new(config.graph_name.clone());
    let root = add_to_graph(description, &mut graph);
    graph.root = Some(root);
    log::debug!(
        "Exported plan graph '{}': {} nodes, {} edges",
        graph.name(),
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Describe `node` without statistics and export it as a graph
pub fn graphviz(node: &dyn PlanNode) -> Result<PlanGraph> {
    let description = describe_plan(node, None)?;
    export_graph(&description, &DescribeConfig::default())
}

/// Inputs are added before their parent so every edge targets an existing node
fn add_to_graph(description: &PlanDescription, graph: &mut PlanGraph) -> NodeIndex {
    let inputs: Vec<NodeIndex> = description
        .inputs
        .iter()
        .map(|input| add_to_graph(input, graph))
        .collect();

    let mut node = GraphNode::new(description.label());
    for (key, value) in &description.other {
        match key.as_str() {
            TOOLTIP_KEY => node.add_tooltip(value.to_string()),
            HIDDEN_KEY => {}
            _ => match value.as_str_list() {
                Some(items) => {
                    node.add_attribute(key.clone());
                    for item in items {
                        node.add_attribute(item.clone());
                    }
                }
                None => node.add_attribute(format!("{}:{}", key, value)),
            },
        }
    }

    let this = graph.add_node(node);
    for input in inputs {
        graph.add_edge(this, input);
    }
    this
}

fn escape_dot(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }
    escaped
}
