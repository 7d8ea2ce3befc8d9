// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI module for PlanLens
//!
//! Loads plan files and prints their explain JSON, Graphviz DOT, or an
//! operator table with profile columns.

pub mod commands;
pub mod explain;
pub mod output;

pub use commands::{Cli, Commands};
pub use explain::handle_explain;
