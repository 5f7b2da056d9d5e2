//! Scenario configuration management.
//!
//! Loads a scenario (price sweep, holding, strategies) from a TOML file with
//! environment variable overrides. When no file exists the built-in default
//! scenario is used: 10,000 USDT held for 4 days against three BTC targets.
//!
//! ```toml
//! mode = "percentage"
//! log_level = "info"
//! break_even_threshold = 0.1
//!
//! [sweep]
//! start = 98000.0
//! end = 100000.0
//! step = 500.0
//!
//! [holding]
//! amount = 10000.0
//! duration = 4.0
//! unit = "days"
//!
//! [[strategies]]
//! target_price = 99000.0
//! apr_percent = 206.0
//! ```

use std::collections::HashSet;
use std::path::Path;

use dual_core::types::{AccrualUnit, PayoffError, ReportingMode, SettlementVariant};
use dual_payoff::{Holding, PriceSweep, Strategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error type
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Price grid definition.
///
/// Explicit `prices` take precedence over the `start`/`end`/`step` grid.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SweepConfig {
    /// First grid price
    pub start: f64,
    /// Last grid price (inclusive when on the grid)
    pub end: f64,
    /// Grid increment
    pub step: f64,
    /// Explicit prices, used instead of the grid when non-empty
    pub prices: Vec<f64>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start: 98_000.0,
            end: 100_000.0,
            step: 500.0,
            prices: Vec::new(),
        }
    }
}

impl SweepConfig {
    /// Builds the price sweep.
    pub fn to_sweep(&self) -> Result<PriceSweep, PayoffError> {
        if self.prices.is_empty() {
            PriceSweep::stepped(self.start, self.end, self.step)
        } else {
            Ok(PriceSweep::new(self.prices.clone()))
        }
    }
}

/// Deposit definition.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HoldingConfig {
    /// Principal (buy-low) or asset quantity (sell-high)
    pub amount: f64,
    /// Holding period length
    pub duration: f64,
    /// Unit of `duration`
    pub unit: AccrualUnit,
}

impl Default for HoldingConfig {
    fn default() -> Self {
        Self {
            amount: 10_000.0,
            duration: 4.0,
            unit: AccrualUnit::Days,
        }
    }
}

impl HoldingConfig {
    /// Builds the engine holding.
    pub fn to_holding(&self) -> Holding {
        Holding::new(self.amount, self.duration, self.unit)
    }
}

/// One strategy entry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StrategyConfig {
    /// Display label; derived from target and APR when omitted
    #[serde(default)]
    pub label: Option<String>,
    /// Target price
    pub target_price: f64,
    /// APR in percent (206.0 for 206%)
    pub apr_percent: f64,
    /// Settlement variant
    #[serde(default)]
    pub variant: SettlementVariant,
}

impl StrategyConfig {
    /// Creates a buy-low entry with a derived label.
    pub fn new(target_price: f64, apr_percent: f64) -> Self {
        Self {
            label: None,
            target_price,
            apr_percent,
            variant: SettlementVariant::BuyLow,
        }
    }

    /// Display label used as the table column header.
    pub fn display_label(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => format!("{} (APR {}%)", self.target_price, self.apr_percent),
        }
    }

    /// Builds the engine strategy.
    pub fn to_strategy(&self) -> Strategy {
        Strategy::from_apr_percent(self.display_label(), self.target_price, self.apr_percent)
            .with_variant(self.variant)
    }
}

/// Scenario configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Reporting mode
    pub mode: ReportingMode,
    /// Log level
    pub log_level: String,
    /// Percentage band around zero reported as break-even
    pub break_even_threshold: f64,
    /// Price grid
    pub sweep: SweepConfig,
    /// Deposit and period
    pub holding: HoldingConfig,
    /// Strategies, in column order
    pub strategies: Vec<StrategyConfig>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            mode: ReportingMode::Percentage,
            log_level: "info".to_string(),
            break_even_threshold: 0.1,
            sweep: SweepConfig::default(),
            holding: HoldingConfig::default(),
            strategies: vec![
                StrategyConfig::new(99_000.0, 206.0),
                StrategyConfig::new(98_500.0, 160.0),
                StrategyConfig::new(98_000.0, 103.0),
            ],
        }
    }
}

impl ScenarioConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or the default scenario if it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(mut self) -> Self {
        if let Ok(mode) = std::env::var("DUAL_INVEST_MODE") {
            if let Ok(mode) = mode.parse() {
                self.mode = mode;
            }
        }

        if let Ok(log_level) = std::env::var("DUAL_INVEST_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Ok(amount) = std::env::var("DUAL_INVEST_AMOUNT") {
            if let Ok(amount) = amount.parse() {
                self.holding.amount = amount;
            }
        }

        self
    }

    /// Validate the configuration, collecting every problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if !self.break_even_threshold.is_finite() || self.break_even_threshold < 0.0 {
            errors.push(format!(
                "break_even_threshold must be a non-negative number, got {}",
                self.break_even_threshold
            ));
        }

        if let Err(e) = self.sweep.to_sweep().and_then(|s| s.validate()) {
            errors.push(format!("sweep: {}", e));
        }

        if !self.holding.amount.is_finite() {
            errors.push(format!("holding.amount must be finite, got {}", self.holding.amount));
        } else if self.holding.amount == 0.0
            && self
                .strategies
                .iter()
                .any(|s| s.variant.divides_by_amount())
        {
            errors.push("holding.amount must be non-zero for buy-low strategies".to_string());
        }
        if !self.holding.duration.is_finite() || self.holding.duration < 0.0 {
            errors.push(format!(
                "holding.duration must be a non-negative number, got {}",
                self.holding.duration
            ));
        }

        if self.strategies.is_empty() {
            errors.push("at least one strategy is required".to_string());
        }
        let mut labels = HashSet::new();
        for strategy in &self.strategies {
            let label = strategy.display_label();
            if let Err(e) = strategy.to_strategy().validate() {
                errors.push(e.to_string());
            }
            if !labels.insert(label.clone()) {
                errors.push(format!("duplicate strategy label '{}'", label));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Engine strategies, in column order
    pub fn strategies(&self) -> Vec<Strategy> {
        self.strategies.iter().map(StrategyConfig::to_strategy).collect()
    }
}
