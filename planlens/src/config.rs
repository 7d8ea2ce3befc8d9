// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
// Describe/export configuration

use serde::{Deserialize, Serialize};

/// Default recursion limit for builder, serializer and graph exporter
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Configuration shared by the description builder and its outputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescribeConfig {
    /// Maximum plan depth walked before giving up with an error
    pub max_depth: usize,

    /// Name of the digraph emitted by the DOT renderer
    pub graph_name: String,
}

impl Default for DescribeConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            graph_name: "plan".to_string(),
        }
    }
}

impl DescribeConfig {
    /// Tight limits for interactive tooling
    pub fn shallow() -> Self {
        Self {
            max_depth: 32,
            ..Self::default()
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_graph_name(mut self, name: impl Into<String>) -> Self {
        self.graph_name = name.into();
        self
    }
}
