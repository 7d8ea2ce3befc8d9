// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Operator-specific extension values
//!
//! Each operator reports its own extra fields (a query string, a list of
//! columns, a row limit...). They are kept as typed values in a key-sorted
//! map so that every output walks them in the same order.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Error as _, Serialize, Serializer};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::fmt;

/// Extension fields of one plan description, sorted by key
pub type Extras = BTreeMap<String, ExtraValue>;

/// A single extension field value
#[derive(Debug, Clone, PartialEq)]
pub enum ExtraValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    StrList(Vec<String>),
    /// Anything else, kept in its JSON form
    Json(JsonValue),
}

impl ExtraValue {
    /// Whether the value is the default of its kind and must be left out of
    /// explain output: null, `false`, zero, or the empty string.
    ///
    /// Empty lists are not defaults.
    pub fn is_default(&self) -> bool {
        match self {
            ExtraValue::Null => true,
            ExtraValue::Bool(b) => !b,
            ExtraValue::Int(n) => *n == 0,
            ExtraValue::Float(f) => *f == 0.0,
            ExtraValue::Str(s) => s.is_empty(),
            ExtraValue::StrList(_) => false,
            ExtraValue::Json(value) => match value {
                JsonValue::Null => true,
                JsonValue::Bool(b) => !b,
                JsonValue::Number(n) => n.as_f64() == Some(0.0),
                JsonValue::String(s) => s.is_empty(),
                JsonValue::Array(_) | JsonValue::Object(_) => false,
            },
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ExtraValue::Str(s) => Some(s),
            ExtraValue::Json(JsonValue::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_str_list(&self) -> Option<&[String]> {
        match self {
            ExtraValue::StrList(items) => Some(items),
            _ => None,
        }
    }
}

impl Serialize for ExtraValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ExtraValue::Null => serializer.serialize_unit(),
            ExtraValue::Bool(b) => serializer.serialize_bool(*b),
            ExtraValue::Int(n) => serializer.serialize_i64(*n),
            ExtraValue::Float(f) if !f.is_finite() => Err(S::Error::custom(format!(
                "unsupported float value: {}",
                f
            ))),
            ExtraValue::Float(f) => serializer.serialize_f64(*f),
            ExtraValue::Str(s) => serializer.serialize_str(s),
            ExtraValue::StrList(items) => items.serialize(serializer),
            ExtraValue::Json(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ExtraValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        JsonValue::deserialize(deserializer).map(ExtraValue::from)
    }
}

impl fmt::Display for ExtraValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtraValue::Null => f.write_str("<nil>"),
            ExtraValue::Bool(b) => write!(f, "{}", b),
            ExtraValue::Int(n) => write!(f, "{}", n),
            ExtraValue::Float(x) => write!(f, "{}", x),
            ExtraValue::Str(s) => f.write_str(s),
            ExtraValue::StrList(items) => write!(f, "[{}]", items.join(" ")),
            ExtraValue::Json(JsonValue::String(s)) => f.write_str(s),
            ExtraValue::Json(value) => write!(f, "{}", value),
        }
    }
}

impl From<JsonValue> for ExtraValue {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => ExtraValue::Null,
            JsonValue::Bool(b) => ExtraValue::Bool(b),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    ExtraValue::Int(i)
                } else if n.is_f64() {
                    ExtraValue::Float(n.as_f64().unwrap_or_default())
                } else {
                    ExtraValue::Json(JsonValue::Number(n))
                }
            }
            JsonValue::String(s) => ExtraValue::Str(s),
            JsonValue::Array(items) if items.iter().all(JsonValue::is_string) => {
                ExtraValue::StrList(
                    items
                        .into_iter()
                        .filter_map(|item| match item {
                            JsonValue::String(s) => Some(s),
                            _ => None,
                        })
                        .collect(),
                )
            }
            other => ExtraValue::Json(other),
        }
    }
}

impl From<&str> for ExtraValue {
    fn from(s: &str) -> Self {
        ExtraValue::Str(s.to_string())
    }
}

impl From<String> for ExtraValue {
    fn from(s: String) -> Self {
        ExtraValue::Str(s)
    }
}

impl From<bool> for ExtraValue {
    fn from(b: bool) -> Self {
        ExtraValue::Bool(b)
    }
}

impl From<i64> for ExtraValue {
    fn from(n: i64) -> Self {
        ExtraValue::Int(n)
    }
}

impl From<i32> for ExtraValue {
    fn from(n: i32) -> Self {
        ExtraValue::Int(n as i64)
    }
}

impl From<u64> for ExtraValue {
    fn from(n: u64) -> Self {
        match i64::try_from(n) {
            Ok(i) => ExtraValue::Int(i),
            Err(_) => ExtraValue::Json(JsonValue::from(n)),
        }
    }
}

impl From<usize> for ExtraValue {
    fn from(n: usize) -> Self {
        ExtraValue::from(n as u64)
    }
}

impl From<f64> for ExtraValue {
    fn from(f: f64) -> Self {
        ExtraValue::Float(f)
    }
}

impl From<Vec<String>> for ExtraValue {
    fn from(items: Vec<String>) -> Self {
        ExtraValue::StrList(items)
    }
}

impl From<Vec<&str>> for ExtraValue {
    fn from(items: Vec<&str>) -> Self {
        ExtraValue::StrList(items.into_iter().map(str::to_string).collect())
    }
}

impl<T: Into<ExtraValue>> From<Option<T>> for ExtraValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(ExtraValue::Null)
    }
}
