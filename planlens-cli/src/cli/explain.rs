// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Explain command handler

use colored::Colorize;
use std::path::{Path, PathBuf};

use super::commands::OutputFormat;
use super::output::PlanFormatter;
use planlens::{load_plan_file_with, DescribeConfig, PlanDescriber, PlanDescription};

/// Handle the explain command
pub fn handle_explain(
    plan: PathBuf,
    format: OutputFormat,
    compact: bool,
    max_depth: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = match max_depth {
        Some(depth) => DescribeConfig::default().with_max_depth(depth),
        None => DescribeConfig::default(),
    };

    match explain(&plan, &config, format, compact) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", format!("Error: {}", e).red());
            Err(e)
        }
    }
}

/// Load, describe and format one plan file
fn explain(
    path: &Path,
    config: &DescribeConfig,
    format: OutputFormat,
    compact: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    let description = describe_file(path, config)?;
    Ok(PlanFormatter::format(&description, config, format, compact)?)
}

fn describe_file(
    path: &Path,
    config: &DescribeConfig,
) -> Result<PlanDescription, Box<dyn std::error::Error>> {
    let plan = load_plan_file_with(path, config)?;
    let stats = if plan.is_profiled() {
        Some(plan.collect_stats())
    } else {
        None
    };
    log::info!(
        "Explaining {} ({})",
        path.display(),
        if stats.is_some() { "profiled" } else { "not profiled" }
    );

    let describer = PlanDescriber::new(config.clone());
    Ok(describer.describe(&plan, stats.as_ref())?)
}
