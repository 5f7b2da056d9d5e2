//! Numeric helpers shared by the payoff engine.

pub mod rounding;

pub use rounding::{round_to, RETURN_DECIMALS};
