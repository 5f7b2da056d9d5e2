//! Table command implementation
//!
//! Builds the return table for the configured scenario and prints it.

use dual_core::types::ReportingMode;
use dual_payoff::build_return_table;
use tracing::info;

use crate::config::ScenarioConfig;
use crate::render::{render, render_break_even, OutputFormat};
use crate::Result;

/// Run the table command
pub fn run(config: &ScenarioConfig, format: OutputFormat, mode: Option<ReportingMode>) -> Result<()> {
    let output = build_output(config, format, mode)?;
    print!("{}", output);
    Ok(())
}

/// Builds the full command output without printing it
pub fn build_output(
    config: &ScenarioConfig,
    format: OutputFormat,
    mode: Option<ReportingMode>,
) -> Result<String> {
    config.validate()?;
    let mode = mode.unwrap_or(config.mode);

    let sweep = config.sweep.to_sweep()?;
    let strategies = config.strategies();
    let holding = config.holding.to_holding();

    info!("Building return table...");
    info!("  Prices: {}", sweep.len());
    info!("  Strategies: {}", strategies.len());
    info!(
        "  Holding: {} for {} {}",
        holding.amount(),
        holding.duration(),
        holding.unit()
    );
    info!("  Mode: {}", mode);

    let table = build_return_table(&sweep, &strategies, &holding, mode)?;
    let mut output = render(&table, format)?;

    if format == OutputFormat::Table && mode == ReportingMode::Percentage {
        output.push('\n');
        output.push_str(&render_break_even(&table, config.break_even_threshold));
    }

    info!("Return table complete");
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StrategyConfig;
    use crate::CliError;

    #[test]
    fn test_default_scenario_table() {
        let output =
            build_output(&ScenarioConfig::default(), OutputFormat::Table, None).unwrap();
        assert!(output.contains("99000 (APR 206%)"));
        assert!(output.contains("Break-even prices"));
    }

    #[test]
    fn test_mode_override() {
        let output = build_output(
            &ScenarioConfig::default(),
            OutputFormat::Csv,
            Some(ReportingMode::Absolute),
        )
        .unwrap();
        assert!(!output.contains("Break-even"));
        let last = output.lines().last().unwrap();
        assert!(last.starts_with("100000,"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = ScenarioConfig::default();
        config.strategies = vec![StrategyConfig::new(0.0, 100.0)];
        let err = build_output(&config, OutputFormat::Table, None).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}
