//! Settlement variants and reporting modes.
//!
//! A dual-currency product settles in one of two currencies depending on
//! where the settlement price lands relative to the target price. The two
//! variants are mirror images of each other:
//!
//! | Variant | Deposit | Settles into the other currency when |
//! |---------|---------|--------------------------------------|
//! | `BuyLow` | Principal in quote currency | `price < target` (asset bought at target) |
//! | `SellHigh` | Asset quantity in base currency | `price > target` (asset sold at target) |

use std::fmt;
use std::str::FromStr;

use super::error::PayoffError;

/// Which side of the dual-currency product is being held.
///
/// # Examples
/// ```
/// use dual_core::types::SettlementVariant;
///
/// let variant: SettlementVariant = "sell-high".parse().unwrap();
/// assert_eq!(variant, SettlementVariant::SellHigh);
/// assert!(!variant.divides_by_amount());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SettlementVariant {
    /// Principal deposited in the quote currency; converted into the asset
    /// at the target price when the settlement price finishes below it.
    #[default]
    BuyLow,
    /// Asset quantity deposited; sold at the target price when the settlement
    /// price finishes above it.
    SellHigh,
}

impl SettlementVariant {
    /// Returns the canonical name used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            SettlementVariant::BuyLow => "buy-low",
            SettlementVariant::SellHigh => "sell-high",
        }
    }

    /// Whether the percentage formula for this variant divides by the holding amount.
    #[inline]
    pub fn divides_by_amount(&self) -> bool {
        matches!(self, SettlementVariant::BuyLow)
    }
}

impl fmt::Display for SettlementVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettlementVariant {
    type Err = PayoffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "buy-low" | "buylow" => Ok(SettlementVariant::BuyLow),
            "sell-high" | "sellhigh" | "high-sell" => Ok(SettlementVariant::SellHigh),
            other => Err(PayoffError::ParseError(format!(
                "unknown settlement variant '{}'",
                other
            ))),
        }
    }
}

/// How a return table cell is reported.
///
/// # Examples
/// ```
/// use dual_core::types::ReportingMode;
///
/// assert_eq!("absolute".parse::<ReportingMode>().unwrap(), ReportingMode::Absolute);
/// assert_eq!(ReportingMode::default(), ReportingMode::Percentage);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ReportingMode {
    /// Return rate in percent, rounded to three decimals.
    #[default]
    Percentage,
    /// Settlement value in currency units, unrounded.
    Absolute,
}

impl ReportingMode {
    /// Returns the canonical name used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportingMode::Percentage => "percentage",
            ReportingMode::Absolute => "absolute",
        }
    }
}

impl fmt::Display for ReportingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportingMode {
    type Err = PayoffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "percentage" | "percent" | "pct" => Ok(ReportingMode::Percentage),
            "absolute" | "abs" => Ok(ReportingMode::Absolute),
            other => Err(PayoffError::ParseError(format!(
                "unknown reporting mode '{}'",
                other
            ))),
        }
    }
}
