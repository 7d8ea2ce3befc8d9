// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Explain/profile JSON encoding
//!
//! Descriptions are written with a fixed field order, and fields holding
//! their "nothing to show" value are left out. Extension fields are written
//! inline, as if they were fields of the description itself:
//!
//! ```text
//! InputName, OperatorType, Variant, Keyspace, TargetDestination,
//! TargetTabletType, NoOfCalls, AvgNumberOfRows, MedianNumberOfRows,
//! <extension fields, sorted by key>, Inputs
//! ```

use crate::config::DescribeConfig;
use crate::description::{PlanDescription, INPUT_NAME_KEY};
use crate::error::{DescribeError, Result};
use serde::ser::{Serialize, SerializeMap, Serializer};

impl Serialize for PlanDescription {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;

        if !self.input_name.is_empty() {
            map.serialize_entry(INPUT_NAME_KEY, &self.input_name)?;
        }
        map.serialize_entry("OperatorType", &self.operator_type)?;
        if !self.variant.is_empty() {
            map.serialize_entry("Variant", &self.variant)?;
        }
        if let Some(keyspace) = &self.keyspace {
            map.serialize_entry("Keyspace", keyspace)?;
        }
        if let Some(destination) = &self.target_destination {
            map.serialize_entry("TargetDestination", &destination.short_name())?;
        }
        if !self.target_tablet_type.is_unknown() {
            map.serialize_entry("TargetTabletType", self.target_tablet_type.as_str())?;
        }
        if let Some(summary) = self.stats_summary() {
            map.serialize_entry("NoOfCalls", &summary.calls)?;
            map.serialize_entry("AvgNumberOfRows", &RowCount(summary.mean))?;
            map.serialize_entry("MedianNumberOfRows", &RowCount(summary.median))?;
        }
        for (key, value) in &self.other {
            if value.is_default() {
                continue;
            }
            map.serialize_entry(key, value)?;
        }
        if !self.inputs.is_empty() {
            map.serialize_entry("Inputs", &self.inputs)?;
        }

        map.end()
    }
}

/// Derived row count; whole numbers are written without a fraction (`1`, not `1.0`)
struct RowCount(f64);

impl Serialize for RowCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        const MAX_EXACT: f64 = 9_007_199_254_740_992.0; // 2^53
        if self.0.fract() == 0.0 && self.0.abs() <= MAX_EXACT {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

/// Compact JSON for `description` under the default configuration
pub fn to_json(description: &PlanDescription) -> Result<String> {
    encode(description, &DescribeConfig::default(), false)
}

/// Indented JSON for `description` under the default configuration
pub fn to_json_pretty(description: &PlanDescription) -> Result<String> {
    encode(description, &DescribeConfig::default(), true)
}

/// Encode `description`, enforcing the configured depth limit first.
///
/// Nothing is returned unless the whole tree encodes.
pub fn encode(description: &PlanDescription, config: &DescribeConfig, pretty: bool) -> Result<String> {
    let depth = description.depth();
    if depth > config.max_depth {
        return Err(DescribeError::DepthExceeded {
            limit: config.max_depth,
        });
    }

    let encoded = if pretty {
        serde_json::to_string_pretty(description)?
    } else {
        serde_json::to_string(description)?
    };
    log::trace!(
        "Encoded '{}' ({} levels) into {} bytes",
        description.label(),
        depth,
        encoded.len()
    );
    Ok(encoded)
}
