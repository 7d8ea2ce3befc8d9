// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Runtime row-count statistics for plan nodes
//!
//! The profiling layer records how many rows each plan node returned per
//! call. The description builder attaches those samples to the matching
//! description, and the serializer derives call count, mean and median
//! from them.

use crate::builder::PlanNode;
use std::collections::HashMap;

/// Historical row counts for one plan node, one entry per call
pub type RowsReceived = Vec<u64>;

/// Identity of a plan node inside one in-memory plan tree
///
/// Two references compare equal iff they point at the same node object of
/// the same concrete type. A wrapper holding its child inline starts at the
/// child's address, so the type name is part of the key.
///
/// Distinct zero-sized nodes of the same type may share an address and are
/// then indistinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeKey {
    addr: usize,
    type_name: &'static str,
}

impl NodeKey {
    pub fn of(node: &dyn PlanNode) -> Self {
        NodeKey {
            addr: node as *const _ as *const () as usize,
            type_name: node.type_name(),
        }
    }
}

/// Row-count samples keyed by node identity
#[derive(Debug, Clone, Default)]
pub struct PlanStats {
    samples: HashMap<NodeKey, RowsReceived>,
}

impl PlanStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one call's row count for `node`
    pub fn record(&mut self, node: &dyn PlanNode, rows: u64) {
        self.samples.entry(NodeKey::of(node)).or_default().push(rows);
    }

    /// Replace all samples for `node`
    pub fn set(&mut self, node: &dyn PlanNode, rows: RowsReceived) {
        self.samples.insert(NodeKey::of(node), rows);
    }

    /// Samples for `node`; empty when nothing was recorded
    pub fn samples(&self, node: &dyn PlanNode) -> &[u64] {
        self.samples
            .get(&NodeKey::of(node))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of nodes with at least one entry
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Arithmetic mean of the samples. Callers must not pass an empty slice.
pub fn mean(samples: &[u64]) -> f64 {
    let total: u128 = samples.iter().map(|&n| n as u128).sum();
    total as f64 / samples.len() as f64
}

/// Median of the samples, computed on a sorted copy.
///
/// Even counts average the two middle elements. Callers must not pass an
/// empty slice.
pub fn median(samples: &[u64]) -> f64 {
    let mut sorted = samples.to_vec();
    sorted.sort_unstable();

    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] as f64 + sorted[n / 2] as f64) / 2.0
    } else {
        sorted[n / 2] as f64
    }
}

/// Derived statistics emitted together in explain output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsSummary {
    pub calls: usize,
    pub mean: f64,
    pub median: f64,
}

impl StatsSummary {
    /// `None` when no samples were recorded
    pub fn from_samples(samples: &[u64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        Some(Self {
            calls: samples.len(),
            mean: mean(samples),
            median: median(samples),
        })
    }
}
