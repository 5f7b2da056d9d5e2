//! dual-invest - Command Line Front End for Dual-Currency Investment Analysis
//!
//! # Commands
//!
//! - `dual-invest table` - Print the return table for a scenario
//! - `dual-invest yield --amount <A> --apr <P> --duration <D>` - Compute a single accrued yield
//! - `dual-invest check` - Validate the scenario configuration
//!
//! # Architecture
//!
//! As the service layer, this crate owns configuration, logging, and
//! presentation. All payoff logic lives in `dual_payoff`.

use std::path::Path;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod render;

pub use error::{CliError, Result};

use config::ScenarioConfig;
use dual_core::types::{AccrualUnit, ReportingMode};
use render::OutputFormat;

/// Dual-currency investment return tables
#[derive(Parser)]
#[command(name = "dual-invest")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Scenario file path (built-in scenario if absent)
    #[arg(short, long, global = true, default_value = "dual-invest.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the return table across the price sweep
    Table {
        /// Output format (table, csv, json)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Reporting mode (percentage, absolute); overrides the scenario
        #[arg(short, long)]
        mode: Option<String>,
    },

    /// Compute the yield accrued by a single deposit
    Yield {
        /// Principal or asset quantity
        #[arg(short, long)]
        amount: f64,

        /// Annual percentage rate (206 for 206%)
        #[arg(short = 'r', long)]
        apr: f64,

        /// Holding period length
        #[arg(short, long)]
        duration: f64,

        /// Unit of the holding period (hours, days)
        #[arg(short, long, default_value = "days")]
        unit: String,
    },

    /// Validate the scenario configuration
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let scenario = ScenarioConfig::load_or_default(Path::new(&cli.config))?.with_env_override();

    let default_level = if cli.verbose {
        "debug"
    } else {
        scenario.log_level.as_str()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    info!("Scenario source: {}", cli.config);

    match cli.command {
        Commands::Table { format, mode } => {
            let format = format.parse::<OutputFormat>()?;
            let mode = mode.map(|m| m.parse::<ReportingMode>()).transpose()?;
            commands::table::run(&scenario, format, mode)
        }
        Commands::Yield {
            amount,
            apr,
            duration,
            unit,
        } => commands::accrue::run(amount, apr, duration, unit.parse::<AccrualUnit>()?),
        Commands::Check => commands::check::run(&scenario),
    }
}
