// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Plan formatting for CLI output

use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use planlens::{encode, export_graph, DescribeConfig, PlanDescription};

use super::commands::OutputFormat;

/// Plan formatter for the supported output formats
pub struct PlanFormatter;

impl PlanFormatter {
    /// Format a described plan in the requested format
    pub fn format(
        description: &PlanDescription,
        config: &DescribeConfig,
        format: OutputFormat,
        compact: bool,
    ) -> planlens::Result<String> {
        match format {
            OutputFormat::Json => encode(description, config, !compact),
            OutputFormat::Dot => Ok(export_graph(description, config)?.to_dot()),
            OutputFormat::Table => Ok(Self::format_table(description)),
        }
    }

    /// One row per operator, indented by depth, with profile columns
    fn format_table(description: &PlanDescription) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", "Query Plan".bold().green()));
        output.push_str(&format!("Operators: {}\n\n", description.node_count()));

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(
            ["Operator", "Input", "Keyspace", "Calls", "Avg Rows", "Median Rows"]
                .into_iter()
                .map(|col| Cell::new(col).fg(Color::Green)),
        );

        // depth-first, children in input order
        let mut stack = vec![(description, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            let summary = node.stats_summary();
            table.add_row(vec![
                Self::operator_cell(node, depth),
                node.input_name.clone(),
                node.keyspace
                    .as_ref()
                    .map(|ks| ks.name.clone())
                    .unwrap_or_default(),
                summary
                    .map(|s| s.calls.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                summary
                    .map(|s| Self::rows_to_string(s.mean))
                    .unwrap_or_else(|| "-".to_string()),
                summary
                    .map(|s| Self::rows_to_string(s.median))
                    .unwrap_or_else(|| "-".to_string()),
            ]);
            stack.extend(node.inputs.iter().rev().map(|input| (input, depth + 1)));
        }

        output.push_str(&table.to_string());
        output.push('\n');
        output
    }

    fn operator_cell(node: &PlanDescription, depth: usize) -> String {
        if depth == 0 {
            node.label()
        } else {
            format!("{}└─ {}", "   ".repeat(depth - 1), node.label())
        }
    }

    fn rows_to_string(rows: f64) -> String {
        if rows.fract() == 0.0 {
            format!("{}", rows as i64)
        } else {
            format!("{:.2}", rows)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planlens::Keyspace;

    fn profiled_plan() -> PlanDescription {
        let mut route = PlanDescription::new("Route")
            .with_variant("Scatter")
            .with_keyspace(Keyspace::new("user", true));
        route.input_name = "Outer".to_string();
        route.stats = vec![1, 2];

        let mut limit = PlanDescription::new("Limit").with_other("Count", 10i64);
        limit.stats = vec![3];
        limit.inputs.push(route);
        limit
    }

    #[test]
    fn test_table_rows() {
        let table = PlanFormatter::format(
            &profiled_plan(),
            &DescribeConfig::default(),
            OutputFormat::Table,
            false,
        )
        .unwrap();
        assert!(table.contains("Operators: 2"));
        assert!(table.contains("└─ Route:Scatter"));
        assert!(table.contains("Outer"));
        assert!(table.contains("user"));
        assert!(table.contains("1.50"));
    }

    #[test]
    fn test_json_compact_and_pretty() {
        let config = DescribeConfig::default();
        let compact =
            PlanFormatter::format(&profiled_plan(), &config, OutputFormat::Json, true).unwrap();
        assert!(!compact.contains('\n'));
        assert!(compact.starts_with(r#"{"OperatorType":"Limit","NoOfCalls":1"#));

        let pretty =
            PlanFormatter::format(&profiled_plan(), &config, OutputFormat::Json, false).unwrap();
        assert!(pretty.contains("\n  \"OperatorType\": \"Limit\""));
    }

    #[test]
    fn test_dot_output() {
        let config = DescribeConfig::default().with_graph_name("cli");
        let dot = PlanFormatter::format(&profiled_plan(), &config, OutputFormat::Dot, false).unwrap();
        assert!(dot.starts_with("digraph \"cli\" {"));
        assert!(dot.contains("n1 -> n0;"));
    }

    #[test]
    fn test_rows_to_string() {
        assert_eq!(PlanFormatter::rows_to_string(4.0), "4");
        assert_eq!(PlanFormatter::rows_to_string(2.0 / 3.0), "0.67");
    }
}
