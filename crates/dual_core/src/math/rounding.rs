//! Fixed-precision rounding for reported return figures.
//!
//! Return rates are quoted to three decimal places. Rounding acts on the
//! exact binary value of the input, so `1.0005` (stored as 1.000499...)
//! rounds down, as Python's `round(x, 3)` does.

use num_traits::Float;

/// Number of decimal places used when reporting percentage returns.
pub const RETURN_DECIMALS: u32 = 3;

/// Rounds `value` to `decimals` decimal places.
///
/// The result is the nearest representable value to the correctly rounded
/// decimal. Scaling by `10^decimals` first would introduce a second rounding
/// step and push values such as `1.0005` across the half-way point.
/// Non-finite inputs are returned unchanged.
///
/// # Examples
/// ```
/// use dual_core::math::rounding::round_to;
///
/// assert_eq!(round_to(2.2575342_f64, 3), 2.258);
/// assert_eq!(round_to(-0.0643836_f64, 3), -0.064);
/// ```
pub fn round_to<T: Float>(value: T, decimals: u32) -> T {
    if !value.is_finite() {
        return value;
    }
    value
        .to_f64()
        .and_then(|v| format!("{:.*}", decimals as usize, v).parse::<f64>().ok())
        .and_then(|rounded| T::from(rounded))
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_round_to_three_places() {
        assert_relative_eq!(round_to(1.2474332_f64, 3), 1.247, epsilon = 1e-12);
        assert_relative_eq!(round_to(1.7524837_f64, 3), 1.752, epsilon = 1e-12);
    }

    #[test]
    fn test_rounds_stored_binary_value() {
        // 1.0005 and 2.675 are stored slightly below the written decimal
        assert_eq!(round_to(1.0005_f64, 3), 1.0);
        assert_eq!(round_to(2.675_f64, 2), 2.67);
        // 1.0015 is stored slightly above
        assert_eq!(round_to(1.0015_f64, 3), 1.002);
    }

    #[test]
    fn test_round_negative_values() {
        assert_eq!(round_to(-0.0643836_f64, 3), -0.064);
        assert_eq!(round_to(-1.2476_f64, 3), -1.248);
    }

    #[test]
    fn test_round_zero_decimals() {
        assert_eq!(round_to(98765.4_f64, 0), 98765.0);
    }

    #[test]
    fn test_non_finite_passthrough() {
        assert!(round_to(f64::NAN, 3).is_nan());
        assert_eq!(round_to(f64::INFINITY, 3), f64::INFINITY);
    }

    #[test]
    fn test_f32_compatibility() {
        let rounded = round_to(2.2575_f32, 2);
        assert!((rounded - 2.26_f32).abs() < 1e-6);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_rounding_error_bounded(value in -1.0e6_f64..1.0e6) {
                let rounded = round_to(value, RETURN_DECIMALS);
                prop_assert!((rounded - value).abs() <= 0.0005 + 1e-9);
            }

            #[test]
            fn test_rounding_idempotent(value in -1.0e6_f64..1.0e6) {
                let once = round_to(value, RETURN_DECIMALS);
                let twice = round_to(once, RETURN_DECIMALS);
                assert_relative_eq!(once, twice, epsilon = 1e-9);
            }
        }
    }
}
