//! Yield command implementation
//!
//! Computes the yield accrued by a single deposit.

use dual_core::types::AccrualUnit;
use dual_payoff::compute_yield;
use tracing::info;

use crate::{CliError, Result};

/// Run the yield command
pub fn run(amount: f64, apr_percent: f64, duration: f64, unit: AccrualUnit) -> Result<()> {
    let accrued = accrued_yield(amount, apr_percent, duration, unit)?;
    println!("{}", accrued);
    Ok(())
}

/// Yield of `amount` at `apr_percent` over `duration` periods of `unit`
pub fn accrued_yield(amount: f64, apr_percent: f64, duration: f64, unit: AccrualUnit) -> Result<f64> {
    for (name, value) in [("amount", amount), ("apr", apr_percent), ("duration", duration)] {
        if !value.is_finite() {
            return Err(CliError::InvalidArgument(format!(
                "{} must be finite, got {}",
                name, value
            )));
        }
    }

    let rate = unit.per_period_rate(AccrualUnit::annual_rate_from_percent(apr_percent));
    info!("Per-{} rate: {}", unit, rate);
    Ok(compute_yield(amount, rate, duration))
}
