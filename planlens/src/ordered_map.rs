// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Key-sorted view over a string→integer map
//!
//! `HashMap` iteration order is unspecified. Formatting code that needs
//! stable output (explain documents, log lines, test snapshots) builds an
//! `OrderedMap` first.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::fmt;

/// One key/value entry of an `OrderedMap`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyVal {
    pub key: String,
    pub val: i64,
}

/// Entries sorted by key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedMap(Vec<KeyVal>);

impl OrderedMap {
    pub fn from_map(input: &HashMap<String, i64>) -> Self {
        let mut map = OrderedMap(
            input
                .iter()
                .map(|(key, val)| KeyVal {
                    key: key.clone(),
                    val: *val,
                })
                .collect(),
        );
        map.0.sort_by(|a, b| a.key.cmp(&b.key));
        map
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether entry `i` sorts before entry `j`
    pub fn less(&self, i: usize, j: usize) -> bool {
        self.0[i].key < self.0[j].key
    }

    pub fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeyVal> {
        self.0.iter()
    }
}

impl Serialize for OrderedMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for kv in &self.0 {
            map.serialize_entry(&kv.key, &kv.val)?;
        }
        map.end()
    }
}

impl fmt::Display for OrderedMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, kv) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}:{}", kv.key, kv.val)?;
        }
        Ok(())
    }
}
