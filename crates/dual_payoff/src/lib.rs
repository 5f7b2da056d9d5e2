//! # dual_payoff: Dual-Currency Investment Payoff Engine
//!
//! ## Layer 2 (Engine) Role
//!
//! Pure, stateless evaluation of a dual-currency product over a sweep of
//! hypothetical settlement prices:
//! - Single-cell formulas for both settlement variants (`payoff`)
//! - Strategy and holding definitions (`strategy`)
//! - Price grids (`sweep`)
//! - Return tables and their queries (`table`)
//! - Validated table assembly (`engine`)
//!
//! ## Settlement Rules
//!
//! | Variant | Price vs target | Outcome |
//! |---------|-----------------|---------|
//! | buy-low | `price >= target` | principal + yield, in quote currency |
//! | buy-low | `price < target` | `principal / target` units of asset + yield |
//! | sell-high | `price <= target` | asset kept + yield |
//! | sell-high | `price > target` | asset sold at target + yield |
//!
//! ## Usage Examples
//!
//! ```rust
//! use dual_core::types::{AccrualUnit, ReportingMode};
//! use dual_payoff::{build_return_table, Holding, PriceSweep, Strategy};
//!
//! let sweep = PriceSweep::stepped(98_000.0, 100_000.0, 500.0).unwrap();
//! let strategies = vec![Strategy::from_apr_percent("99000 (APR 206%)", 99_000.0, 206.0)];
//! let holding = Holding::new(10_000.0, 4.0, AccrualUnit::Days);
//!
//! let table = build_return_table(&sweep, &strategies, &holding, ReportingMode::Percentage).unwrap();
//! for row in table.rows() {
//!     println!("{:>10.1} {:>8.3}", row.price, row.values[0]);
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` (default): Evaluate strategy columns with rayon
//! - `serde` (default): Enable serialisation for strategies, sweeps, and tables

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod engine;
pub mod payoff;
pub mod strategy;
pub mod sweep;
pub mod table;

pub use engine::build_return_table;
pub use payoff::{
    compute_absolute_return, compute_absolute_return_high_sell, compute_return_rate,
    compute_return_rate_high_sell, compute_yield,
};
pub use strategy::{Holding, Strategy};
pub use sweep::PriceSweep;
pub use table::{ReturnColumn, ReturnRow, ReturnTable, PRICE_COLUMN};
