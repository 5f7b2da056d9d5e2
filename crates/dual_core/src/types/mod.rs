//! Core payoff-analysis types.
//!
//! This module provides:
//! - `error`: Structured error types for payoff and sweep construction
//! - `settlement`: Buy-low / sell-high settlement variants and reporting modes
//! - `accrual`: Hourly and daily accrual units
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`PayoffError`] from `error`
//! - [`SettlementVariant`], [`ReportingMode`] from `settlement`
//! - [`AccrualUnit`] from `accrual`

pub mod accrual;
pub mod error;
pub mod settlement;

pub use accrual::AccrualUnit;
pub use error::PayoffError;
pub use settlement::{ReportingMode, SettlementVariant};
