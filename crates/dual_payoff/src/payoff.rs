//! Single-cell payoff formulas.
//!
//! Each function evaluates one (settlement price, strategy) pair. None of them
//! validate their inputs: a zero principal in the buy-low formulas yields a
//! non-finite result. Use [`crate::engine::build_return_table`] for a
//! validated computation over a whole price sweep.
//!
//! | Function | Variant | Mode |
//! |----------|---------|------|
//! | [`compute_return_rate`] | buy-low | percentage |
//! | [`compute_return_rate_high_sell`] | sell-high | percentage |
//! | [`compute_absolute_return`] | buy-low | absolute |
//! | [`compute_absolute_return_high_sell`] | sell-high | absolute |

use dual_core::math::{round_to, RETURN_DECIMALS};
use dual_core::types::{ReportingMode, SettlementVariant};
use num_traits::Float;

/// Accrued yield over the holding period.
///
/// Pure multiplication: `rate` must already be expressed per unit of
/// `duration` (e.g. an hourly rate with a duration in hours). See
/// [`dual_core::types::AccrualUnit::per_period_rate`] for the conversion
/// from an annual rate.
///
/// # Examples
/// ```
/// use dual_payoff::payoff::compute_yield;
///
/// // 10,000 USDT at 206% APR, daily rate, held 4 days
/// let y = compute_yield(10_000.0_f64, 206.0 / 365.0 / 100.0, 4.0);
/// assert!((y - 225.753_424_657).abs() < 1e-6);
/// ```
#[inline]
pub fn compute_yield<T: Float>(quantity: T, rate: T, duration: T) -> T {
    quantity * rate * duration
}

/// Percentage return of a buy-low position at settlement.
///
/// - `price >= target_price`: principal stays in the quote currency and earns
///   the yield: `((principal + yield) / principal - 1) * 100`.
/// - `price < target_price`: principal is converted into
///   `principal / target_price` units of the asset, valued at `price`:
///   `((quantity * price + yield) / principal - 1) * 100`.
///
/// The result is rounded to three decimals.
///
/// # Examples
/// ```
/// use dual_payoff::payoff::compute_return_rate;
///
/// let yield_amount = 10_000.0 * 2.06 / 365.0 * 4.0;
/// assert_eq!(compute_return_rate(10_000.0_f64, 99_500.0, 99_000.0, yield_amount), 2.258);
/// assert_eq!(compute_return_rate(10_000.0_f64, 98_000.0, 99_000.0, yield_amount), 1.247);
/// ```
#[inline]
pub fn compute_return_rate<T: Float>(principal: T, price: T, target_price: T, yield_amount: T) -> T {
    let hundred = T::from(100.0).unwrap();
    let return_rate = if price >= target_price {
        ((principal + yield_amount) / principal - T::one()) * hundred
    } else {
        let asset_quantity = principal / target_price;
        ((asset_quantity * price + yield_amount) / principal - T::one()) * hundred
    };
    round_to(return_rate, RETURN_DECIMALS)
}

/// Reported return of a sell-high position at settlement.
///
/// - `price <= target_price`: the asset is kept:
///   `(quantity * price + yield - 1) * 100`.
/// - `price > target_price`: the asset is sold at the target, reported net of
///   the value forgone by not holding: `(target_price * quantity + yield - price * quantity) * 100`.
///
/// The constant `1` in the first branch is part of the quoted formula and is
/// not scaled by `quantity`; it only reads as a percentage for one unit of an
/// asset priced near 1.
///
/// The result is rounded to three decimals.
///
/// # Examples
/// ```
/// use dual_payoff::payoff::compute_return_rate_high_sell;
///
/// let yield_amount = 2.06 / 8760.0 * 24.0;
/// assert_eq!(compute_return_rate_high_sell(1.0_f64, 1.0, 1.005, yield_amount), 0.564);
/// assert_eq!(compute_return_rate_high_sell(1.0_f64, 1.01, 1.005, yield_amount), 0.064);
/// ```
#[inline]
pub fn compute_return_rate_high_sell<T: Float>(
    quantity: T,
    price: T,
    target_price: T,
    yield_amount: T,
) -> T {
    let hundred = T::from(100.0).unwrap();
    let value = if price <= target_price {
        (quantity * price + yield_amount - T::one()) * hundred
    } else {
        (target_price * quantity + yield_amount - price * quantity) * hundred
    };
    round_to(value, RETURN_DECIMALS)
}

/// Settlement value of a buy-low position, in quote currency.
///
/// - `price >= target_price`: `principal + yield`.
/// - `price < target_price`: `(principal / target_price) * price + yield`.
///
/// Not rounded.
#[inline]
pub fn compute_absolute_return<T: Float>(
    principal: T,
    price: T,
    target_price: T,
    yield_amount: T,
) -> T {
    if price >= target_price {
        principal + yield_amount
    } else {
        principal / target_price * price + yield_amount
    }
}

/// Settlement value of a sell-high position.
///
/// - `price <= target_price`: asset kept, `quantity * price + yield`.
/// - `price > target_price`: asset sold, `quantity * target_price + yield`.
///
/// Not rounded.
#[inline]
pub fn compute_absolute_return_high_sell<T: Float>(
    quantity: T,
    price: T,
    target_price: T,
    yield_amount: T,
) -> T {
    if price <= target_price {
        quantity * price + yield_amount
    } else {
        quantity * target_price + yield_amount
    }
}

/// Dispatches to the formula for `variant` in reporting `mode`.
#[inline]
pub fn evaluate<T: Float>(
    variant: SettlementVariant,
    mode: ReportingMode,
    amount: T,
    price: T,
    target_price: T,
    yield_amount: T,
) -> T {
    match (variant, mode) {
        (SettlementVariant::BuyLow, ReportingMode::Percentage) => {
            compute_return_rate(amount, price, target_price, yield_amount)
        }
        (SettlementVariant::SellHigh, ReportingMode::Percentage) => {
            compute_return_rate_high_sell(amount, price, target_price, yield_amount)
        }
        (SettlementVariant::BuyLow, ReportingMode::Absolute) => {
            compute_absolute_return(amount, price, target_price, yield_amount)
        }
        (SettlementVariant::SellHigh, ReportingMode::Absolute) => {
            compute_absolute_return_high_sell(amount, price, target_price, yield_amount)
        }
    }
}
