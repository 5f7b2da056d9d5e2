//! Error types for structured error handling.
//!
//! This module provides:
//! - `PayoffError`: Errors from strategy validation, price sweep construction,
//!   and return table assembly

use thiserror::Error;

/// Categorised payoff computation errors.
///
/// The single-cell payoff functions never fail; these errors are raised when
/// a full return table or price sweep is assembled from caller input.
///
/// # Variants
/// - `InvalidStrategy`: Target price is non-positive or non-finite
/// - `DuplicateStrategy`: Two strategies share the same label
/// - `DivisionByZero`: Zero principal where the buy-low formula divides by it
/// - `NonFiniteInput`: NaN or infinite price, annual rate, or holding amount
/// - `InvalidSweep`: Price sweep parameters cannot produce a grid
/// - `ParseError`: Unrecognised variant, mode, or unit name
///
/// # Examples
/// ```
/// use dual_core::types::PayoffError;
///
/// let err = PayoffError::InvalidStrategy {
///     label: "99000 (APR 206%)".to_string(),
///     target_price: -1.0,
/// };
/// assert_eq!(
///     format!("{}", err),
///     "Invalid strategy '99000 (APR 206%)': target price -1 must be positive"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PayoffError {
    /// Strategy target price is non-positive or non-finite.
    #[error("Invalid strategy '{label}': target price {target_price} must be positive")]
    InvalidStrategy {
        /// Display label of the offending strategy
        label: String,
        /// The rejected target price
        target_price: f64,
    },

    /// Strategy labels must be unique within one computation.
    #[error("Duplicate strategy label: {0}")]
    DuplicateStrategy(String),

    /// Principal or asset quantity is zero where a formula divides by it.
    #[error("Division by zero: holding amount is {amount}")]
    DivisionByZero {
        /// The zero holding amount
        amount: f64,
    },

    /// An input that must be a finite real is NaN or infinite.
    #[error("Non-finite input: {name} = {value}")]
    NonFiniteInput {
        /// Name of the offending input
        name: String,
        /// The rejected value
        value: f64,
    },

    /// Price sweep parameters are invalid.
    #[error("Invalid price sweep: {0}")]
    InvalidSweep(String),

    /// Failed to parse a variant, reporting mode, or accrual unit name.
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl PayoffError {
    /// Creates a `NonFiniteInput` error for the named input.
    pub fn non_finite(name: impl Into<String>, value: f64) -> Self {
        PayoffError::NonFiniteInput {
            name: name.into(),
            value,
        }
    }
}
