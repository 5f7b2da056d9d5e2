//! # dual_core: Foundation Types for Dual-Currency Investment Analysis
//!
//! ## Layer 1 (Foundation) Role
//!
//! dual_core is the bottom layer of the workspace, providing:
//! - Error taxonomy for payoff computations (`types::error`)
//! - Settlement variant and reporting mode (`types::settlement`)
//! - Accrual units for converting annual rates to per-period rates (`types::accrual`)
//! - Fixed-precision rounding for reported returns (`math::rounding`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other dual_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use dual_core::math::rounding::round_to;
//! use dual_core::types::{AccrualUnit, SettlementVariant};
//!
//! // 206% APR accrued daily
//! let daily = AccrualUnit::Days.per_period_rate(2.06_f64);
//! assert!((daily - 206.0 / 365.0 / 100.0).abs() < 1e-15);
//!
//! assert_eq!(SettlementVariant::BuyLow.to_string(), "buy-low");
//! assert_eq!(round_to(1.24743_f64, 3), 1.247);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for variants, units, and errors

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
