//! Accrual units for yield computation.
//!
//! Dual-currency products quote an annual percentage rate, but the yield is
//! accrued over a holding period counted either in hours or in days. An
//! [`AccrualUnit`] converts the annual rate into a rate per counted period so
//! that `amount * per_period_rate * periods` is the accrued yield.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use super::error::PayoffError;

/// Hours in a 365-day year.
pub const HOURS_PER_YEAR: f64 = 365.0 * 24.0;

/// Days in a year for APR accrual.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Time unit in which a holding duration is counted.
///
/// # Examples
/// ```
/// use dual_core::types::AccrualUnit;
///
/// // 206% APR, quoted per hour
/// let hourly = AccrualUnit::Hours.per_period_rate(2.06_f64);
/// assert!((hourly - 206.0 / 365.0 / 24.0 / 100.0).abs() < 1e-15);
///
/// assert_eq!(AccrualUnit::Days.periods_per_year(), 365.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AccrualUnit {
    /// Duration counted in hours (8760 per year).
    Hours,
    /// Duration counted in days (365 per year).
    #[default]
    Days,
}

impl AccrualUnit {
    /// Number of accrual periods in one year.
    #[inline]
    pub fn periods_per_year(&self) -> f64 {
        match self {
            AccrualUnit::Hours => HOURS_PER_YEAR,
            AccrualUnit::Days => DAYS_PER_YEAR,
        }
    }

    /// Converts an annual rate fraction (2.06 for 206%) to a rate per period.
    #[inline]
    pub fn per_period_rate<T: Float>(&self, annual_rate: T) -> T {
        annual_rate / T::from(self.periods_per_year()).unwrap()
    }

    /// Converts an APR quoted in percent (206.0) to an annual rate fraction (2.06).
    #[inline]
    pub fn annual_rate_from_percent<T: Float>(apr_percent: T) -> T {
        apr_percent / T::from(100.0).unwrap()
    }

    /// Returns the canonical name used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccrualUnit::Hours => "hours",
            AccrualUnit::Days => "days",
        }
    }
}

impl fmt::Display for AccrualUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccrualUnit {
    type Err = PayoffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hours" | "hour" | "h" => Ok(AccrualUnit::Hours),
            "days" | "day" | "d" => Ok(AccrualUnit::Days),
            other => Err(PayoffError::ParseError(format!(
                "unknown accrual unit '{}'",
                other
            ))),
        }
    }
}
