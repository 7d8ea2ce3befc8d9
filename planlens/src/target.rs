// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Routing descriptors carried by plan descriptions
//!
//! Keyspaces, destinations and tablet types are resolved by the planner;
//! descriptions only need their canonical serialized or textual form.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every canonical destination name starts with this prefix. The explain
/// output strips it, so `DestinationShard(-80)` is shown as `Shard(-80)`.
pub const DESTINATION_PREFIX: &str = "Destination";

/// Keyspace a plan node routes to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Keyspace {
    pub name: String,
    #[serde(default)]
    pub sharded: bool,
}

impl Keyspace {
    pub fn new(name: impl Into<String>, sharded: bool) -> Self {
        Self {
            name: name.into(),
            sharded,
        }
    }
}

/// Half-open keyspace-id range; empty bounds are unbounded
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeyRange {
    #[serde(default)]
    pub start: Vec<u8>,
    #[serde(default)]
    pub end: Vec<u8>,
}

impl fmt::Display for KeyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", hex::encode(&self.start), hex::encode(&self.end))
    }
}

/// Explicit target a query is sent to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Destination {
    Shard(String),
    Shards(Vec<String>),
    KeyspaceId(Vec<u8>),
    KeyspaceIds(Vec<Vec<u8>>),
    ExactKeyRange(KeyRange),
    KeyRange(KeyRange),
    AllShards,
    AnyShard,
    None,
}

impl Destination {
    /// Canonical text without the shared `Destination` prefix
    pub fn short_name(&self) -> String {
        let full = self.to_string();
        match full.strip_prefix(DESTINATION_PREFIX) {
            Some(rest) => rest.to_string(),
            None => full,
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(DESTINATION_PREFIX)?;
        match self {
            Destination::Shard(shard) => write!(f, "Shard({})", shard),
            Destination::Shards(shards) => write!(f, "Shards({})", shards.join(",")),
            Destination::KeyspaceId(id) => write!(f, "KeyspaceID({})", hex::encode(id)),
            Destination::KeyspaceIds(ids) => {
                let ids: Vec<String> = ids.iter().map(hex::encode).collect();
                write!(f, "KeyspaceIDs({})", ids.join(","))
            }
            Destination::ExactKeyRange(range) => write!(f, "ExactKeyRange({})", range),
            Destination::KeyRange(range) => write!(f, "KeyRange({})", range),
            Destination::AllShards => f.write_str("AllShards()"),
            Destination::AnyShard => f.write_str("AnyShard()"),
            Destination::None => f.write_str("None()"),
        }
    }
}

/// Tablet role a query is explicitly sent to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TabletType {
    #[default]
    Unknown,
    Primary,
    Replica,
    Rdonly,
    Spare,
    Experimental,
    Backup,
    Restore,
    Drained,
}

impl TabletType {
    pub fn is_unknown(&self) -> bool {
        *self == TabletType::Unknown
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TabletType::Unknown => "UNKNOWN",
            TabletType::Primary => "PRIMARY",
            TabletType::Replica => "REPLICA",
            TabletType::Rdonly => "RDONLY",
            TabletType::Spare => "SPARE",
            TabletType::Experimental => "EXPERIMENTAL",
            TabletType::Backup => "BACKUP",
            TabletType::Restore => "RESTORE",
            TabletType::Drained => "DRAINED",
        }
    }
}

impl fmt::Display for TabletType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
