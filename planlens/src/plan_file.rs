// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Plans loaded from JSON files
//!
//! A plan file holds an already-planned operator tree, optionally with the
//! row counts recorded while profiling it:
//!
//! ```json
//! {
//!   "operatorType": "Join",
//!   "variant": "Join",
//!   "inputInfos": [{"InputName": "Outer"}, {"InputName": "Inner"}],
//!   "inputs": [
//!     {"operatorType": "Route", "variant": "Scatter", "samples": [10, 12]},
//!     {"operatorType": "Route", "variant": "EqualUnique"}
//!   ]
//! }
//! ```
//!
//! Plan files are held to the same `DescribeConfig::max_depth` as in-memory
//! plans. The nesting of the raw text is measured before deserializing, so
//! the parser never recurses deeper than the configured limit allows.

use crate::builder::PlanNode;
use crate::config::DescribeConfig;
use crate::description::{InputInfo, PlanDescription};
use crate::error::{DescribeError, Result};
use crate::stats::PlanStats;
use crate::target::{Destination, Keyspace, TabletType};
use crate::value::Extras;
use serde::Deserialize;
use std::path::Path;

/// Nesting allowed on top of the two containers each plan level needs (the
/// node object and its `inputs` array): keyspaces, metadata, extension values
const VALUE_NESTING_ALLOWANCE: usize = 64;

/// Operator node read from a plan file
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanFileNode {
    pub operator_type: String,
    #[serde(default)]
    pub variant: String,
    #[serde(default)]
    pub keyspace: Option<Keyspace>,
    #[serde(default)]
    pub target_destination: Option<Destination>,
    #[serde(default)]
    pub target_tablet_type: TabletType,
    #[serde(default)]
    pub other: Extras,
    #[serde(default)]
    pub inputs: Vec<PlanFileNode>,
    /// Untyped per-input metadata; `InputName` names the input's role
    #[serde(default)]
    pub input_infos: Option<Vec<Extras>>,
    /// Rows returned per call when the plan was profiled
    #[serde(default)]
    pub samples: Vec<u64>,
}

impl PlanFileNode {
    /// Collect the embedded samples of the whole tree, keyed by node identity
    pub fn collect_stats(&self) -> PlanStats {
        let mut stats = PlanStats::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if !node.samples.is_empty() {
                stats.set(node, node.samples.clone());
            }
            stack.extend(node.inputs.iter());
        }
        stats
    }

    /// Number of levels in the tree, counting `self`
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 1usize)];
        while let Some((node, level)) = stack.pop() {
            max = max.max(level);
            stack.extend(node.inputs.iter().map(|input| (input, level + 1)));
        }
        max
    }

    /// Whether any node in the tree carries samples
    pub fn is_profiled(&self) -> bool {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if !node.samples.is_empty() {
                return true;
            }
            stack.extend(node.inputs.iter());
        }
        false
    }
}

impl PlanNode for PlanFileNode {
    fn describe(&self) -> PlanDescription {
        PlanDescription {
            operator_type: self.operator_type.clone(),
            variant: self.variant.clone(),
            keyspace: self.keyspace.clone(),
            target_destination: self.target_destination.clone(),
            target_tablet_type: self.target_tablet_type,
            other: self.other.clone(),
            ..PlanDescription::default()
        }
    }

    fn inputs(&self) -> (Vec<&dyn PlanNode>, Option<Vec<InputInfo>>) {
        let inputs = self.inputs.iter().map(|input| input as &dyn PlanNode).collect();
        let infos = self.input_infos.as_ref().map(|infos| {
            infos
                .iter()
                .map(|entries| InputInfo::from_entries(entries.clone()))
                .collect()
        });
        (inputs, infos)
    }
}

/// Parse a plan from JSON text under the default configuration
pub fn parse_plan(text: &str) -> Result<PlanFileNode> {
    parse_plan_with(text, &DescribeConfig::default())
}

/// Parse a plan from JSON text, rejecting plans deeper than `config.max_depth`
pub fn parse_plan_with(text: &str, config: &DescribeConfig) -> Result<PlanFileNode> {
    let max_nesting = config
        .max_depth
        .saturating_mul(2)
        .saturating_add(VALUE_NESTING_ALLOWANCE);
    if json_nesting(text) > max_nesting {
        return Err(DescribeError::DepthExceeded {
            limit: config.max_depth,
        });
    }

    // bounded by the nesting check above
    let mut deserializer = serde_json::Deserializer::from_str(text);
    deserializer.disable_recursion_limit();
    let plan = PlanFileNode::deserialize(&mut deserializer).map_err(plan_file_error)?;
    deserializer.end().map_err(plan_file_error)?;

    if plan.depth() > config.max_depth {
        return Err(DescribeError::DepthExceeded {
            limit: config.max_depth,
        });
    }
    Ok(plan)
}

/// Read and parse a plan file under the default configuration
pub fn load_plan_file(path: impl AsRef<Path>) -> Result<PlanFileNode> {
    load_plan_file_with(path, &DescribeConfig::default())
}

/// Read and parse a plan file, rejecting plans deeper than `config.max_depth`
pub fn load_plan_file_with(path: impl AsRef<Path>, config: &DescribeConfig) -> Result<PlanFileNode> {
    let path = path.as_ref();
    log::debug!("Loading plan file {}", path.display());
    let text = std::fs::read_to_string(path)
        .map_err(|e| DescribeError::PlanFile(format!("{}: {}", path.display(), e)))?;
    parse_plan_with(&text, config)
}

fn plan_file_error(error: serde_json::Error) -> DescribeError {
    DescribeError::PlanFile(error.to_string())
}

/// Deepest `{`/`[` nesting outside string literals
fn json_nesting(text: &str) -> usize {
    let mut depth = 0usize;
    let mut max = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for b in text.bytes() {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' | b'[' => {
                depth += 1;
                max = max.max(depth);
            }
            b'}' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    max
}
