// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Error types for describing, serializing and exporting plans

use thiserror::Error;

/// Result alias used throughout planlens
pub type Result<T> = std::result::Result<T, DescribeError>;

/// Errors raised while turning a plan tree into its description or outputs
#[derive(Error, Debug)]
pub enum DescribeError {
    #[error("Encoding failed: {0}")]
    Encoding(String),

    #[error("Plan depth exceeded: limit is {limit} levels")]
    DepthExceeded { limit: usize },

    #[error("Plan file error: {0}")]
    PlanFile(String),
}

impl From<serde_json::Error> for DescribeError {
    fn from(error: serde_json::Error) -> Self {
        DescribeError::Encoding(error.to_string())
    }
}

impl From<std::io::Error> for DescribeError {
    fn from(error: std::io::Error) -> Self {
        DescribeError::PlanFile(error.to_string())
    }
}
