//! Return tables: one row per sweep price, one column per strategy.
//!
//! The price itself is the leading column, so a table over `n` strategies
//! has `n + 1` columns.

use dual_core::types::{ReportingMode, SettlementVariant};

/// Header of the leading price column.
pub const PRICE_COLUMN: &str = "Price";

/// Returns of one strategy across the sweep.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReturnColumn {
    /// Strategy display label
    pub label: String,
    /// Strategy target price
    pub target_price: f64,
    /// Strategy settlement variant
    pub variant: SettlementVariant,
    /// Yield accrued over the holding period, shared by every row
    pub yield_amount: f64,
    /// One value per sweep price, in sweep order
    pub values: Vec<f64>,
}

/// A single row of a [`ReturnTable`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnRow {
    /// Settlement price of the row
    pub price: f64,
    /// One value per strategy, in strategy order
    pub values: Vec<f64>,
}

/// Rectangular table of returns over a price sweep.
///
/// Built by [`crate::engine::build_return_table`]. Invariants:
/// `num_rows() == sweep.len()` and `num_columns() == strategies.len() + 1`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReturnTable {
    mode: ReportingMode,
    prices: Vec<f64>,
    columns: Vec<ReturnColumn>,
}

impl ReturnTable {
    pub(crate) fn new(mode: ReportingMode, prices: Vec<f64>, columns: Vec<ReturnColumn>) -> Self {
        debug_assert!(columns.iter().all(|c| c.values.len() == prices.len()));
        Self {
            mode,
            prices,
            columns,
        }
    }

    /// Reporting mode of every cell.
    #[inline]
    pub fn mode(&self) -> ReportingMode {
        self.mode
    }

    /// Sweep prices, in row order.
    #[inline]
    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    /// Strategy columns, in strategy order.
    #[inline]
    pub fn columns(&self) -> &[ReturnColumn] {
        &self.columns
    }

    /// Number of rows (sweep prices).
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.prices.len()
    }

    /// Number of columns, including the price column.
    #[inline]
    pub fn num_columns(&self) -> usize {
        self.columns.len() + 1
    }

    /// Column headers: the price column followed by strategy labels.
    pub fn headers(&self) -> Vec<&str> {
        std::iter::once(PRICE_COLUMN)
            .chain(self.columns.iter().map(|c| c.label.as_str()))
            .collect()
    }

    /// Column for the strategy labelled `label`.
    pub fn column(&self, label: &str) -> Option<&ReturnColumn> {
        self.columns.iter().find(|c| c.label == label)
    }

    /// Row at `index`.
    pub fn row(&self, index: usize) -> Option<ReturnRow> {
        let price = *self.prices.get(index)?;
        Some(ReturnRow {
            price,
            values: self.columns.iter().map(|c| c.values[index]).collect(),
        })
    }

    /// Iterator over rows in sweep order.
    pub fn rows(&self) -> impl Iterator<Item = ReturnRow> + '_ {
        (0..self.prices.len()).filter_map(move |i| self.row(i))
    }

    /// Sweep prices at which the strategy's return lies within `threshold` of zero.
    ///
    /// Returns `None` for an unknown label.
    pub fn near_zero_prices(&self, label: &str, threshold: f64) -> Option<Vec<f64>> {
        let column = self.column(label)?;
        Some(
            self.prices
                .iter()
                .zip(&column.values)
                .filter(|(_, v)| (-threshold..=threshold).contains(*v))
                .map(|(p, _)| *p)
                .collect(),
        )
    }
}
