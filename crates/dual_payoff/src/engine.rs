//! Return table assembly across a price sweep and a set of strategies.
//!
//! [`build_return_table`] validates its inputs, computes one accrued yield per
//! strategy, and then evaluates every (price, strategy) cell with the
//! strategy's settlement formula in the requested [`ReportingMode`].
//!
//! With the `parallel` feature, strategy columns are evaluated concurrently.
//! Column order always follows strategy order.

use std::collections::HashSet;

use dual_core::types::{PayoffError, ReportingMode};
use tracing::debug;

use crate::payoff::evaluate;
use crate::strategy::{Holding, Strategy};
use crate::sweep::PriceSweep;
use crate::table::{ReturnColumn, ReturnTable};

/// Builds the return table for `strategies` over `sweep`.
///
/// # Arguments
///
/// * `sweep` - Hypothetical settlement prices, in row order
/// * `strategies` - Strategies with unique labels, in column order
/// * `holding` - Principal (buy-low) or asset quantity (sell-high) and holding period
/// * `mode` - Percentage return rate or absolute settlement value
///
/// # Errors
///
/// - `PayoffError::InvalidStrategy` if a target price is non-positive or non-finite
/// - `PayoffError::DuplicateStrategy` if two strategies share a label
/// - `PayoffError::NonFiniteInput` if a price or the holding amount is NaN or infinite
/// - `PayoffError::DivisionByZero` if the holding amount is zero and any
///   strategy uses the buy-low formula
///
/// An empty sweep or an empty strategy set is not an error.
///
/// # Examples
///
/// ```
/// use dual_core::types::{AccrualUnit, ReportingMode};
/// use dual_payoff::{build_return_table, Holding, PriceSweep, Strategy};
///
/// let sweep = PriceSweep::stepped(98_000.0, 100_000.0, 500.0).unwrap();
/// let strategies = vec![
///     Strategy::from_apr_percent("99000", 99_000.0, 206.0),
///     Strategy::from_apr_percent("98500", 98_500.0, 160.0),
/// ];
/// let holding = Holding::new(10_000.0, 4.0, AccrualUnit::Days);
///
/// let table = build_return_table(&sweep, &strategies, &holding, ReportingMode::Percentage).unwrap();
/// assert_eq!(table.num_rows(), 5);
/// assert_eq!(table.num_columns(), 3);
/// assert_eq!(table.column("99000").unwrap().values[0], 1.247);
/// ```
pub fn build_return_table(
    sweep: &PriceSweep,
    strategies: &[Strategy],
    holding: &Holding,
    mode: ReportingMode,
) -> Result<ReturnTable, PayoffError> {
    validate_inputs(sweep, strategies, holding)?;

    #[cfg(feature = "parallel")]
    let columns: Vec<ReturnColumn> = {
        use rayon::prelude::*;
        strategies
            .par_iter()
            .map(|strategy| build_column(sweep, strategy, holding, mode))
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let columns: Vec<ReturnColumn> = strategies
        .iter()
        .map(|strategy| build_column(sweep, strategy, holding, mode))
        .collect();

    debug!(
        rows = sweep.len(),
        strategies = columns.len(),
        %mode,
        "Built return table"
    );

    Ok(ReturnTable::new(mode, sweep.as_slice().to_vec(), columns))
}

fn build_column(
    sweep: &PriceSweep,
    strategy: &Strategy,
    holding: &Holding,
    mode: ReportingMode,
) -> ReturnColumn {
    let yield_amount = strategy.accrued_yield(holding);
    debug!(
        label = strategy.label(),
        target_price = strategy.target_price(),
        variant = %strategy.variant(),
        yield_amount,
        "Accrued strategy yield"
    );

    let values = sweep
        .iter()
        .map(|&price| {
            evaluate(
                strategy.variant(),
                mode,
                holding.amount(),
                price,
                strategy.target_price(),
                yield_amount,
            )
        })
        .collect();

    ReturnColumn {
        label: strategy.label().to_string(),
        target_price: strategy.target_price(),
        variant: strategy.variant(),
        yield_amount,
        values,
    }
}

fn validate_inputs(
    sweep: &PriceSweep,
    strategies: &[Strategy],
    holding: &Holding,
) -> Result<(), PayoffError> {
    let mut labels = HashSet::with_capacity(strategies.len());
    for strategy in strategies {
        strategy.validate()?;
        if !labels.insert(strategy.label()) {
            return Err(PayoffError::DuplicateStrategy(strategy.label().to_string()));
        }
    }

    sweep.validate()?;

    let amount = holding.amount();
    if !amount.is_finite() {
        return Err(PayoffError::non_finite("holding amount", amount));
    }
    if !holding.duration().is_finite() {
        return Err(PayoffError::non_finite("holding duration", holding.duration()));
    }
    if amount == 0.0 && strategies.iter().any(|s| s.variant().divides_by_amount()) {
        return Err(PayoffError::DivisionByZero { amount });
    }
    Ok(())
}
