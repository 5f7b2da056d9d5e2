//! Table rendering for terminal, CSV, and JSON output.

use std::str::FromStr;

use dual_core::types::ReportingMode;
use dual_payoff::ReturnTable;

use crate::{CliError, Result};

/// Output format for the `table` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned plain-text table
    #[default]
    Table,
    /// Comma-separated values with a header row
    Csv,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, csv, table",
                other
            ))),
        }
    }
}

/// Renders `table` in `format`.
pub fn render(table: &ReturnTable, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_text(table)),
        OutputFormat::Csv => render_csv(table),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(table)?),
    }
}

fn precision(mode: ReportingMode) -> usize {
    match mode {
        ReportingMode::Percentage => 3,
        ReportingMode::Absolute => 2,
    }
}

fn render_text(table: &ReturnTable) -> String {
    let headers = table.headers();
    let widths: Vec<usize> = headers.iter().map(|h| h.len().max(12)).collect();
    let places = precision(table.mode());

    let header_line: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{:>width$}", h, width = *w))
        .collect();
    let rule_len = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);

    let mut lines = vec![header_line.join("  "), "-".repeat(rule_len)];
    lines.extend(table.rows().map(|row| {
        let mut cells = vec![format!("{:>width$}", row.price, width = widths[0])];
        cells.extend(
            row.values
                .iter()
                .zip(&widths[1..])
                .map(|(v, w)| format!("{:>width$.prec$}", v, width = *w, prec = places)),
        );
        cells.join("  ")
    }));
    terminate_lines(lines)
}

fn render_csv(table: &ReturnTable) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(table.headers())?;
    for row in table.rows() {
        let mut record = vec![row.price.to_string()];
        record.extend(row.values.iter().map(|v| v.to_string()));
        writer.write_record(&record)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| CliError::Output(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CliError::Output(e.to_string()))
}

/// Lists, per strategy, the sweep prices whose return lies within `threshold` of zero.
pub fn render_break_even(table: &ReturnTable, threshold: f64) -> String {
    let mut lines = vec![format!("Break-even prices (|return| <= {}%):", threshold)];
    lines.extend(table.columns().iter().map(|column| {
        let prices = table
            .near_zero_prices(&column.label, threshold)
            .unwrap_or_default();
        if prices.is_empty() {
            format!("  {}: none in sweep", column.label)
        } else {
            let listed: Vec<String> = prices.iter().map(|p| p.to_string()).collect();
            format!("  {}: {}", column.label, listed.join(", "))
        }
    }));
    terminate_lines(lines)
}

fn terminate_lines(lines: Vec<String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}
