//! Hypothetical settlement price grids.

use dual_core::types::PayoffError;

/// Upper bound on generated sweep length.
pub const MAX_SWEEP_POINTS: usize = 1_000_000;

/// Ordered sequence of hypothetical settlement prices.
///
/// Order is preserved in every table built from the sweep. Prices need not
/// be evenly spaced or sorted.
///
/// # Examples
/// ```
/// use dual_payoff::PriceSweep;
///
/// let sweep = PriceSweep::stepped(98_000.0, 100_000.0, 500.0).unwrap();
/// assert_eq!(sweep.as_slice(), &[98_000.0, 98_500.0, 99_000.0, 99_500.0, 100_000.0]);
///
/// let grid = PriceSweep::arange(0.9, 1.1, 0.001).unwrap();
/// assert_eq!(grid.len(), 201);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PriceSweep {
    prices: Vec<f64>,
}

impl PriceSweep {
    /// Wraps caller-supplied prices.
    pub fn new(prices: Vec<f64>) -> Self {
        Self { prices }
    }

    /// Grid `start, start + step, ...` with `ceil((stop - start) / step)`
    /// points, the same length `np.arange` produces.
    ///
    /// Nominally half-open, but when the quotient carries rounding error
    /// upward the count gains one point, which lands on `stop` (as in
    /// `np.arange(0.9, 1.1, 0.001)`, which has 201 points ending at 1.1).
    /// Use [`PriceSweep::stepped`] for an explicit inclusive end. An empty
    /// range yields an empty sweep.
    ///
    /// # Errors
    ///
    /// Returns `PayoffError::InvalidSweep` if any bound is non-finite, `step`
    /// is not positive, or the grid would exceed [`MAX_SWEEP_POINTS`].
    pub fn arange(start: f64, stop: f64, step: f64) -> Result<Self, PayoffError> {
        check_bounds(start, stop, step)?;
        let span = (stop - start) / step;
        let count = if span > 0.0 { span.ceil() } else { 0.0 };
        Self::generate(start, step, count)
    }

    /// Closed grid from `start` to `end` inclusive in increments of `step`.
    ///
    /// `end` is included when it lies on the grid to within a small
    /// tolerance; otherwise the last point is the largest grid value below it.
    ///
    /// # Errors
    ///
    /// Same conditions as [`PriceSweep::arange`].
    pub fn stepped(start: f64, end: f64, step: f64) -> Result<Self, PayoffError> {
        check_bounds(start, end, step)?;
        if end < start {
            return Ok(Self::default());
        }
        let count = ((end - start) / step + 1e-9).floor() + 1.0;
        Self::generate(start, step, count)
    }

    fn generate(start: f64, step: f64, count: f64) -> Result<Self, PayoffError> {
        if count > MAX_SWEEP_POINTS as f64 {
            return Err(PayoffError::InvalidSweep(format!(
                "{} points exceeds the limit of {}",
                count, MAX_SWEEP_POINTS
            )));
        }
        let prices = (0..count as usize)
            .map(|i| start + i as f64 * step)
            .collect();
        Ok(Self { prices })
    }

    /// Prices in sweep order.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.prices
    }

    /// Iterator over prices in sweep order.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.prices.iter()
    }

    /// Number of prices.
    #[inline]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Whether the sweep has no prices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Checks every price is finite.
    ///
    /// # Errors
    ///
    /// Returns `PayoffError::NonFiniteInput` naming the first offending index.
    pub fn validate(&self) -> Result<(), PayoffError> {
        match self.prices.iter().position(|p| !p.is_finite()) {
            Some(i) => Err(PayoffError::non_finite(
                format!("price[{}]", i),
                self.prices[i],
            )),
            None => Ok(()),
        }
    }
}

impl From<Vec<f64>> for PriceSweep {
    fn from(prices: Vec<f64>) -> Self {
        Self::new(prices)
    }
}

impl<'a> IntoIterator for &'a PriceSweep {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.prices.iter()
    }
}

fn check_bounds(start: f64, stop: f64, step: f64) -> Result<(), PayoffError> {
    if !start.is_finite() || !stop.is_finite() || !step.is_finite() {
        return Err(PayoffError::InvalidSweep(format!(
            "bounds must be finite (start = {}, stop = {}, step = {})",
            start, stop, step
        )));
    }
    if step <= 0.0 {
        return Err(PayoffError::InvalidSweep(format!(
            "step must be positive, got {}",
            step
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_arange_matches_integer_range() {
        // range(98000, 100001, 500)
        let sweep = PriceSweep::arange(98_000.0, 100_001.0, 500.0).unwrap();
        assert_eq!(
            sweep.as_slice(),
            &[98_000.0, 98_500.0, 99_000.0, 99_500.0, 100_000.0]
        );
    }

    #[test]
    fn test_arange_excludes_stop() {
        let sweep = PriceSweep::arange(0.0, 1.0, 0.25).unwrap();
        assert_eq!(sweep.as_slice(), &[0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_arange_fractional_grid() {
        // (1.1 - 0.9) / 0.001 is 200.00000000000006, so the count rounds up to 201
        let sweep = PriceSweep::arange(0.9, 1.1, 0.001).unwrap();
        assert_eq!(sweep.len(), 201);
        assert_relative_eq!(sweep.as_slice()[0], 0.9);
        assert_relative_eq!(sweep.as_slice()[199], 1.099, epsilon = 1e-12);
        assert_relative_eq!(sweep.as_slice()[200], 1.1, epsilon = 1e-12);
    }

    #[test]
    fn test_arange_empty_when_stop_before_start() {
        assert!(PriceSweep::arange(10.0, 5.0, 1.0).unwrap().is_empty());
        assert!(PriceSweep::arange(5.0, 5.0, 1.0).unwrap().is_empty());
    }

    #[test]
    fn test_stepped_includes_end() {
        let sweep = PriceSweep::stepped(0.9, 1.1, 0.05).unwrap();
        assert_eq!(sweep.len(), 5);
        assert_relative_eq!(sweep.as_slice()[4], 1.1, epsilon = 1e-12);
    }

    #[test]
    fn test_stepped_off_grid_end() {
        let sweep = PriceSweep::stepped(0.0, 1.0, 0.3).unwrap();
        assert_eq!(sweep.len(), 4);
    }

    #[test]
    fn test_invalid_step() {
        assert!(matches!(
            PriceSweep::arange(0.0, 1.0, 0.0),
            Err(PayoffError::InvalidSweep(_))
        ));
        assert!(matches!(
            PriceSweep::stepped(0.0, 1.0, -0.1),
            Err(PayoffError::InvalidSweep(_))
        ));
    }

    #[test]
    fn test_non_finite_bounds() {
        assert!(PriceSweep::arange(f64::NAN, 1.0, 0.1).is_err());
        assert!(PriceSweep::stepped(0.0, f64::INFINITY, 0.1).is_err());
    }

    #[test]
    fn test_too_many_points() {
        let err = PriceSweep::arange(0.0, 1.0, 1e-9).unwrap_err();
        assert!(format!("{}", err).contains("exceeds"));
    }

    #[test]
    fn test_validate_reports_first_bad_index() {
        let sweep = PriceSweep::from(vec![1.0, f64::NAN, f64::INFINITY]);
        match sweep.validate() {
            Err(PayoffError::NonFiniteInput { name, .. }) => assert_eq!(name, "price[1]"),
            other => panic!("Expected NonFiniteInput, got {:?}", other),
        }
    }

    #[test]
    fn test_unsorted_prices_preserved() {
        let sweep = PriceSweep::new(vec![3.0, 1.0, 2.0]);
        let collected: Vec<f64> = sweep.iter().copied().collect();
        assert_eq!(collected, vec![3.0, 1.0, 2.0]);
    }
}
