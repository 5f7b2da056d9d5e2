//! Check command implementation
//!
//! Validates the scenario configuration without building a table.

use tracing::info;

use crate::config::ScenarioConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &ScenarioConfig) -> Result<()> {
    info!("Checking scenario configuration...");
    config.validate()?;

    let sweep = config.sweep.to_sweep()?;
    println!("Scenario OK");
    println!("  Mode:       {}", config.mode);
    println!("  Prices:     {}", sweep.len());
    println!(
        "  Holding:    {} for {} {}",
        config.holding.amount, config.holding.duration, config.holding.unit
    );
    for strategy in &config.strategies {
        println!(
            "  Strategy:   {} [{}] target {} at {}% APR",
            strategy.display_label(),
            strategy.variant,
            strategy.target_price,
            strategy.apr_percent
        );
    }
    Ok(())
}
