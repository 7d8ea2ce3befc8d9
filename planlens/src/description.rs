// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Plan descriptions
//!
//! A `PlanDescription` is the uniform, serializable mirror of one plan node.
//! Every operator reports itself through the same structure, so explain
//! output and graph export share one code path regardless of operator kind.

use crate::stats::{RowsReceived, StatsSummary};
use crate::target::{Destination, Keyspace, TabletType};
use crate::value::{ExtraValue, Extras};

/// Reserved metadata key naming the role of a child (e.g. `Outer`, `Inner`)
pub const INPUT_NAME_KEY: &str = "InputName";

/// Generic description of one plan node and its inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanDescription {
    pub operator_type: String,
    /// Empty when the operator has a single flavour
    pub variant: String,
    pub keyspace: Option<Keyspace>,
    pub target_destination: Option<Destination>,
    /// `Unknown` means no explicit tablet type
    pub target_tablet_type: TabletType,
    pub other: Extras,

    /// Role label assigned by the parent
    pub input_name: String,
    /// Explicit, possibly empty, once built by the describer
    pub inputs: Vec<PlanDescription>,

    /// Row counts per call; empty when the plan was not profiled
    pub stats: RowsReceived,
}

impl PlanDescription {
    pub fn new(operator_type: impl Into<String>) -> Self {
        Self {
            operator_type: operator_type.into(),
            ..Self::default()
        }
    }

    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = variant.into();
        self
    }

    pub fn with_keyspace(mut self, keyspace: Keyspace) -> Self {
        self.keyspace = Some(keyspace);
        self
    }

    pub fn with_destination(mut self, destination: Destination) -> Self {
        self.target_destination = Some(destination);
        self
    }

    pub fn with_tablet_type(mut self, tablet_type: TabletType) -> Self {
        self.target_tablet_type = tablet_type;
        self
    }

    /// Add one extension field, replacing any previous value for `key`
    pub fn with_other(mut self, key: impl Into<String>, value: impl Into<ExtraValue>) -> Self {
        self.other.insert(key.into(), value.into());
        self
    }

    /// `operatorType:variant`, or just the operator type without a variant
    pub fn label(&self) -> String {
        if self.variant.is_empty() {
            self.operator_type.clone()
        } else {
            format!("{}:{}", self.operator_type, self.variant)
        }
    }

    pub fn stats_summary(&self) -> Option<StatsSummary> {
        StatsSummary::from_samples(&self.stats)
    }

    /// Number of levels in this tree, computed without recursion
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 1usize)];
        while let Some((desc, level)) = stack.pop() {
            max = max.max(level);
            stack.extend(desc.inputs.iter().map(|input| (input, level + 1)));
        }
        max
    }

    /// Number of descriptions in this tree, including `self`
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(desc) = stack.pop() {
            count += 1;
            stack.extend(desc.inputs.iter());
        }
        count
    }
}

/// Per-child metadata supplied by a parent operator
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputInfo {
    /// Becomes the child's `input_name`
    pub name: Option<String>,
    /// Merged into the child's extension fields, winning over its own keys
    pub extras: Extras,
}

impl InputInfo {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            extras: Extras::new(),
        }
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<ExtraValue>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }

    /// Build from untyped key/value metadata, lifting the reserved
    /// `InputName` key into `name`.
    ///
    /// A non-string `InputName` is kept as an ordinary extra.
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, ExtraValue)>,
        K: Into<String>,
    {
        let mut info = InputInfo::default();
        for (key, value) in entries {
            let key = key.into();
            if key == INPUT_NAME_KEY {
                if let Some(name) = value.as_str() {
                    info.name = Some(name.to_string());
                    continue;
                }
            }
            info.extras.insert(key, value);
        }
        info
    }
}
