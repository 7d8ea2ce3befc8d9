// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! PlanLens - explain and profile output for query execution plans
//!
//! PlanLens turns a tree of heterogeneous plan operators into a uniform
//! description tree, and renders that tree in two ways:
//!
//! - **Explain JSON**: a deterministic document with a fixed field order,
//!   default values left out, and per-operator call count, mean and median
//!   row counts when the plan was profiled
//! - **Plan graphs**: a directed graph of operators with labels, attributes
//!   and tooltips, exportable as Graphviz DOT
//!
//! # Usage
//!
//! ```ignore
//! use planlens::{describe_plan, graphviz, to_json_pretty};
//!
//! let description = describe_plan(&plan, Some(&stats))?;
//! println!("{}", to_json_pretty(&description)?);
//! println!("{}", graphviz(&plan)?.to_dot());
//! ```

pub mod builder;
pub mod config;
pub mod description;
pub mod error;
pub mod graph;
pub mod json;
pub mod ordered_map;
pub mod plan_file;
pub mod stats;
pub mod target;
pub mod value;

pub use builder::{describe_plan, PlanDescriber, PlanNode};
pub use config::DescribeConfig;
pub use description::{InputInfo, PlanDescription, INPUT_NAME_KEY};
pub use error::{DescribeError, Result};
pub use graph::{export_graph, graphviz, GraphNode, PlanGraph};
pub use json::{encode, to_json, to_json_pretty};
pub use ordered_map::OrderedMap;
pub use plan_file::{load_plan_file, load_plan_file_with, parse_plan, parse_plan_with, PlanFileNode};
pub use stats::{mean, median, PlanStats, RowsReceived, StatsSummary};
pub use target::{Destination, KeyRange, Keyspace, TabletType, DESTINATION_PREFIX};
pub use value::{ExtraValue, Extras};

/// PlanLens version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// PlanLens crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
