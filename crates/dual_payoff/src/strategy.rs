//! Strategy and holding definitions.
//!
//! A [`Strategy`] is one dual-currency product offer: a target price and an
//! annual rate. Its label is purely cosmetic and identifies the strategy's
//! column in a return table. A [`Holding`] describes what is deposited and
//! for how long.

use dual_core::types::{AccrualUnit, PayoffError, SettlementVariant};

use crate::payoff::compute_yield;

/// A dual-currency product offer.
///
/// # Examples
/// ```
/// use dual_core::types::SettlementVariant;
/// use dual_payoff::Strategy;
///
/// let s = Strategy::from_apr_percent("99000 (APR 206%)", 99_000.0, 206.0);
/// assert_eq!(s.target_price(), 99_000.0);
/// assert!((s.annual_rate() - 2.06).abs() < 1e-12);
/// assert_eq!(s.variant(), SettlementVariant::BuyLow);
/// assert!(s.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Strategy {
    label: String,
    target_price: f64,
    annual_rate: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    variant: SettlementVariant,
}

impl Strategy {
    /// Creates a buy-low strategy with an annual rate fraction (2.06 for 206%).
    pub fn new(label: impl Into<String>, target_price: f64, annual_rate: f64) -> Self {
        Self {
            label: label.into(),
            target_price,
            annual_rate,
            variant: SettlementVariant::BuyLow,
        }
    }

    /// Creates a buy-low strategy from an APR quoted in percent (206.0).
    pub fn from_apr_percent(label: impl Into<String>, target_price: f64, apr_percent: f64) -> Self {
        Self::new(
            label,
            target_price,
            AccrualUnit::annual_rate_from_percent(apr_percent),
        )
    }

    /// Returns this strategy with a different settlement variant.
    pub fn with_variant(mut self, variant: SettlementVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Display label.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Target (strike) price.
    #[inline]
    pub fn target_price(&self) -> f64 {
        self.target_price
    }

    /// Annual rate as a fraction.
    #[inline]
    pub fn annual_rate(&self) -> f64 {
        self.annual_rate
    }

    /// Settlement variant.
    #[inline]
    pub fn variant(&self) -> SettlementVariant {
        self.variant
    }

    /// Checks that the target price is finite and positive and that the
    /// annual rate is finite.
    ///
    /// # Errors
    ///
    /// Returns `PayoffError::InvalidStrategy` for a bad target price and
    /// `PayoffError::NonFiniteInput` for a NaN or infinite rate.
    pub fn validate(&self) -> Result<(), PayoffError> {
        if !self.target_price.is_finite() || self.target_price <= 0.0 {
            return Err(PayoffError::InvalidStrategy {
                label: self.label.clone(),
                target_price: self.target_price,
            });
        }
        if !self.annual_rate.is_finite() {
            return Err(PayoffError::non_finite(
                format!("annual_rate of '{}'", self.label),
                self.annual_rate,
            ));
        }
        Ok(())
    }

    /// Accrued yield of this strategy for `holding`.
    ///
    /// Depends only on the holding amount, the annual rate, and the duration.
    pub fn accrued_yield(&self, holding: &Holding) -> f64 {
        compute_yield(
            holding.amount(),
            holding.unit().per_period_rate(self.annual_rate),
            holding.duration(),
        )
    }
}

/// Deposit amount and holding period.
///
/// `amount` is the principal in quote currency for buy-low strategies and the
/// asset quantity for sell-high strategies. `duration` is counted in `unit`.
///
/// # Examples
/// ```
/// use dual_core::types::AccrualUnit;
/// use dual_payoff::Holding;
///
/// let h = Holding::new(10_000.0, 4.0, AccrualUnit::Days);
/// assert_eq!(h.amount(), 10_000.0);
/// assert_eq!(h.duration(), 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Holding {
    amount: f64,
    duration: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    unit: AccrualUnit,
}

impl Holding {
    /// Creates a holding of `amount` for `duration` periods of `unit`.
    pub fn new(amount: f64, duration: f64, unit: AccrualUnit) -> Self {
        Self {
            amount,
            duration,
            unit,
        }
    }

    /// Principal or asset quantity.
    #[inline]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Holding period length in `unit`.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Unit in which `duration` is counted.
    #[inline]
    pub fn unit(&self) -> AccrualUnit {
        self.unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_defaults_to_buy_low() {
        let s = Strategy::new("0.95", 0.95, 2.06);
        assert_eq!(s.variant(), SettlementVariant::BuyLow);
        assert_eq!(s.label(), "0.95");
    }

    #[test]
    fn test_with_variant() {
        let s = Strategy::new("1.005", 1.005, 2.06).with_variant(SettlementVariant::SellHigh);
        assert_eq!(s.variant(), SettlementVariant::SellHigh);
    }

    #[test]
    fn test_label_is_not_parsed() {
        // label text disagrees with the structured target price
        let s = Strategy::new("99000 (APR 206%)", 98_500.0, 2.06);
        assert_eq!(s.target_price(), 98_500.0);
    }

    #[test]
    fn test_validate_rejects_non_positive_target() {
        for target in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let s = Strategy::new("bad", target, 1.0);
            assert!(
                matches!(s.validate(), Err(PayoffError::InvalidStrategy { .. })),
                "target {} should be rejected",
                target
            );
        }
    }

    #[test]
    fn test_validate_rejects_non_finite_rate() {
        for rate in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let s = Strategy::new("bad rate", 99_000.0, rate);
            assert!(
                matches!(
                    s.validate(),
                    Err(PayoffError::NonFiniteInput { ref name, .. }) if name.contains("annual_rate")
                ),
                "rate {} should be rejected",
                rate
            );
        }
        assert!(Strategy::new("zero rate", 99_000.0, 0.0).validate().is_ok());
    }

    #[test]
    fn test_accrued_yield_daily() {
        let s = Strategy::from_apr_percent("99000", 99_000.0, 206.0);
        let h = Holding::new(10_000.0, 4.0, AccrualUnit::Days);
        assert_relative_eq!(s.accrued_yield(&h), 10_000.0 * (206.0 / 36_500.0) * 4.0, epsilon = 1e-9);
    }

    #[test]
    fn test_accrued_yield_hourly() {
        let s = Strategy::from_apr_percent("1.005", 1.005, 206.0);
        let h = Holding::new(1.0, 24.0, AccrualUnit::Hours);
        assert_relative_eq!(s.accrued_yield(&h), 2.06 / 365.0, epsilon = 1e-15);
    }

    #[test]
    fn test_yield_independent_of_target() {
        let h = Holding::new(10_000.0, 4.0, AccrualUnit::Days);
        let a = Strategy::new("a", 98_000.0, 1.6).accrued_yield(&h);
        let b = Strategy::new("b", 99_000.0, 1.6).accrued_yield(&h);
        assert_eq!(a, b);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_strategy_deserialise_default_variant() {
        let s: Strategy =
            serde_json::from_str(r#"{"label":"x","target_price":1.0,"annual_rate":0.5}"#).unwrap();
        assert_eq!(s.variant(), SettlementVariant::BuyLow);
    }
}
