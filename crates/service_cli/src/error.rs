//! CLI error types.

use thiserror::Error;

use crate::config::ConfigError;
use dual_core::types::PayoffError;

/// Errors surfaced by `dual-invest` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Scenario configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The payoff engine rejected its inputs
    #[error("Payoff error: {0}")]
    Payoff(#[from] PayoffError),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Output serialisation failed
    #[error("Output error: {0}")]
    Output(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Output(err.to_string())
    }
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        CliError::Output(err.to_string())
    }
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payoff_error_conversion() {
        let err: CliError = PayoffError::DivisionByZero { amount: 0.0 }.into();
        assert_eq!(
            format!("{}", err),
            "Payoff error: Division by zero: holding amount is 0"
        );
    }

    #[test]
    fn test_config_error_conversion() {
        let err: CliError = ConfigError::Validation(vec!["bad".to_string()]).into();
        assert!(format!("{}", err).starts_with("Configuration error"));
    }
}
