// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Plan description builder
//!
//! Walks a tree of `PlanNode`s and produces the mirrored `PlanDescription`
//! tree: each node describes itself, parents contribute per-child metadata,
//! and recorded row-count samples are attached when profiling.

use crate::config::DescribeConfig;
use crate::description::{InputInfo, PlanDescription};
use crate::error::{DescribeError, Result};
use crate::stats::PlanStats;

/// A node of an executable query plan
pub trait PlanNode {
    /// The node's own fields; `inputs` and `stats` are filled in by the builder
    fn describe(&self) -> PlanDescription;

    /// Ordered children, plus optional metadata with one entry per child.
    /// `None` disables metadata for every child of this node.
    fn inputs(&self) -> (Vec<&dyn PlanNode>, Option<Vec<InputInfo>>);

    /// Concrete type of the node; together with its address this identifies
    /// the node in `PlanStats`
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Builds description trees under a `DescribeConfig`
#[derive(Debug, Clone, Default)]
pub struct PlanDescriber {
    config: DescribeConfig,
}

impl PlanDescriber {
    pub fn new(config: DescribeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DescribeConfig {
        &self.config
    }

    /// Describe `node` and all of its inputs.
    ///
    /// When `stats` is given, every description gets the samples recorded
    /// for its node (empty if none were recorded).
    pub fn describe(
        &self,
        node: &dyn PlanNode,
        stats: Option<&PlanStats>,
    ) -> Result<PlanDescription> {
        let description = self.describe_at(node, stats, 1)?;
        log::debug!(
            "Described plan '{}': {} nodes, depth {}",
            description.label(),
            description.node_count(),
            description.depth()
        );
        Ok(description)
    }

    fn describe_at(
        &self,
        node: &dyn PlanNode,
        stats: Option<&PlanStats>,
        depth: usize,
    ) -> Result<PlanDescription> {
        if depth > self.config.max_depth {
            return Err(DescribeError::DepthExceeded {
                limit: self.config.max_depth,
            });
        }

        let mut this = node.describe();
        if let Some(stats) = stats {
            this.stats = stats.samples(node).to_vec();
        }

        let (inputs, infos) = node.inputs();
        if let Some(infos) = &infos {
            if infos.len() != inputs.len() {
                log::warn!(
                    "Operator '{}' supplied {} input infos for {} inputs",
                    this.label(),
                    infos.len(),
                    inputs.len()
                );
            }
        }

        this.inputs = Vec::with_capacity(inputs.len());
        for (idx, input) in inputs.into_iter().enumerate() {
            let mut child = self.describe_at(input, stats, depth + 1)?;
            if let Some(info) = infos.as_ref().and_then(|infos| infos.get(idx)) {
                apply_input_info(&mut child, info);
            }
            this.inputs.push(child);
        }

        Ok(this)
    }
}

/// Describe a plan with the default configuration
pub fn describe_plan(node: &dyn PlanNode, stats: Option<&PlanStats>) -> Result<PlanDescription> {
    PlanDescriber::default().describe(node, stats)
}

fn apply_input_info(child: &mut PlanDescription, info: &InputInfo) {
    if let Some(name) = &info.name {
        child.input_name = name.clone();
    }
    for (key, value) in &info.extras {
        child.other.insert(key.clone(), value.clone());
    }
}
