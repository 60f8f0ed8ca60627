//! CLI interface for crash-tool
//!
//! Provides subcommands for:
//! - `analyze`: Classify a history and suggest bet schedules
//! - `schedule`: Bet schedules only
//! - `config`: Show the effective configuration

mod analyze;
mod schedule;

pub use analyze::AnalyzeArgs;
pub use schedule::ScheduleArgs;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Smallest accepted base bet
pub const MIN_BASE_BET: Decimal = dec!(0.01);

/// Smallest accepted bankroll
pub const MIN_BANKROLL: Decimal = dec!(0.1);

#[derive(Parser, Debug)]
#[command(name = "crash-tool")]
#[command(about = "Trend forecast and bet suggestions for crash game history")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "crash-tool.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a history and suggest bet schedules
    Analyze(AnalyzeArgs),
    /// Show bet schedules for a base bet
    Schedule(ScheduleArgs),
    /// Show the effective configuration
    Config,
}

/// Reject a numeric input below its form minimum
fn check_min(name: &str, value: Decimal, min: Decimal) -> anyhow::Result<Decimal> {
    if value < min {
        anyhow::bail!("{} must be at least {}, got {}", name, min, value);
    }
    Ok(value)
}
