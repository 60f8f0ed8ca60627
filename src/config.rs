//! Configuration types for crash-tool

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::report::Locale;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub trend: TrendConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Trend classification thresholds
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct TrendConfig {
    /// Number of trailing rounds used for counting (default: 10)
    #[serde(default = "default_long_window")]
    pub long_window: usize,

    /// Number of trailing rounds checked for a hot gray streak (default: 3)
    #[serde(default = "default_short_window")]
    pub short_window: usize,

    /// Values strictly below this are "low" rounds (default: 2.0)
    #[serde(default = "default_low_threshold")]
    pub low_threshold: Decimal,

    /// Values at or above this are "high" rounds (default: 2.5)
    #[serde(default = "default_high_threshold")]
    pub high_threshold: Decimal,

    /// Values at or above this are "bomb" rounds (default: 10.0)
    #[serde(default = "default_bomb_threshold")]
    pub bomb_threshold: Decimal,

    /// Minimum high rounds in the long window for a strong green (default: 5)
    #[serde(default = "default_min_high_count")]
    pub min_high_count: usize,

    /// Low ratio strictly above this is gray (default: 0.7)
    #[serde(default = "default_gray_ratio")]
    pub gray_ratio: Decimal,

    /// Low ratio strictly above this is neutral (default: 0.5)
    #[serde(default = "default_neutral_ratio")]
    pub neutral_ratio: Decimal,
}

fn default_long_window() -> usize {
    10
}
fn default_short_window() -> usize {
    3
}
fn default_low_threshold() -> Decimal {
    Decimal::new(20, 1) // 2.0
}
fn default_high_threshold() -> Decimal {
    Decimal::new(25, 1) // 2.5
}
fn default_bomb_threshold() -> Decimal {
    Decimal::new(100, 1) // 10.0
}
fn default_min_high_count() -> usize {
    5
}
fn default_gray_ratio() -> Decimal {
    Decimal::new(7, 1) // 0.7
}
fn default_neutral_ratio() -> Decimal {
    Decimal::new(5, 1) // 0.5
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            long_window: default_long_window(),
            short_window: default_short_window(),
            low_threshold: default_low_threshold(),
            high_threshold: default_high_threshold(),
            bomb_threshold: default_bomb_threshold(),
            min_high_count: default_min_high_count(),
            gray_ratio: default_gray_ratio(),
            neutral_ratio: default_neutral_ratio(),
        }
    }
}

/// Bet schedule shape
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ScheduleConfig {
    /// Number of flat bets in the fixed schedule (default: 5)
    #[serde(default = "default_fixed_rounds")]
    pub fixed_rounds: usize,

    /// Multiplier applied after each loss in the martingale schedule (default: 1.5)
    #[serde(default = "default_martingale_factor")]
    pub martingale_factor: Decimal,

    /// Cap on martingale rounds (default: 4)
    #[serde(default = "default_martingale_rounds")]
    pub martingale_rounds: usize,

    /// Step added per round as a fraction of the base bet (default: 0.2)
    #[serde(default = "default_increment_step")]
    pub increment_step: Decimal,

    /// Number of rounds in the incremental schedule (default: 4)
    #[serde(default = "default_increment_rounds")]
    pub increment_rounds: usize,

    /// Decimal places kept on every suggested bet (default: 2)
    #[serde(default = "default_precision")]
    pub precision: u32,
}

fn default_fixed_rounds() -> usize {
    5
}
fn default_martingale_factor() -> Decimal {
    Decimal::new(15, 1) // 1.5
}
fn default_martingale_rounds() -> usize {
    4
}
fn default_increment_step() -> Decimal {
    Decimal::new(2, 1) // 0.2
}
fn default_increment_rounds() -> usize {
    4
}
fn default_precision() -> u32 {
    2
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            fixed_rounds: default_fixed_rounds(),
            martingale_factor: default_martingale_factor(),
            martingale_rounds: default_martingale_rounds(),
            increment_step: default_increment_step(),
            increment_rounds: default_increment_rounds(),
            precision: default_precision(),
        }
    }
}

/// Defaults for a single analysis session
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SessionConfig {
    /// Desired cash-out multiplier (default: 2.0)
    #[serde(default = "default_target")]
    pub target: Decimal,

    /// Starting bet in dollars (default: 0.5)
    #[serde(default = "default_base_bet")]
    pub base_bet: Decimal,

    /// Available bankroll in dollars (default: 10.0)
    #[serde(default = "default_bankroll")]
    pub bankroll: Decimal,

    /// Fewest rounds accepted for an analysis (default: 5)
    #[serde(default = "default_min_history")]
    pub min_history: usize,

    /// Rounds plotted in the history chart (default: 20)
    #[serde(default = "default_chart_window")]
    pub chart_window: usize,

    /// File name used when exporting history (default: history_sample.txt)
    #[serde(default = "default_export_file")]
    pub export_file: String,

    /// Message language, "en" or "vi" (default: en)
    #[serde(default)]
    pub locale: Locale,
}

fn default_target() -> Decimal {
    Decimal::new(20, 1) // 2.0
}
fn default_base_bet() -> Decimal {
    Decimal::new(5, 1) // 0.5
}
fn default_bankroll() -> Decimal {
    Decimal::new(100, 1) // 10.0
}
fn default_min_history() -> usize {
    5
}
fn default_chart_window() -> usize {
    20
}
fn default_export_file() -> String {
    crate::history::DEFAULT_EXPORT_FILE.to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
            base_bet: default_base_bet(),
            bankroll: default_bankroll(),
            min_history: default_min_history(),
            chart_window: default_chart_window(),
            export_file: default_export_file(),
            locale: Locale::default(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as JSON lines instead of human-readable text
    #[serde(default)]
    pub json_logs: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
