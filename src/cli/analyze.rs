//! Analyze command implementation

use clap::Args;
use rust_decimal::Decimal;
use std::path::PathBuf;

use super::{check_min, MIN_BANKROLL, MIN_BASE_BET};
use crate::analysis::{AnalysisError, AnalysisRequest, Analyzer};
use crate::config::Config;
use crate::history::{write_history, History};
use crate::report::{messages, render_json, render_table, Locale, OutputFormat};

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Comma-separated multipliers, oldest first (e.g. "1.3, 1.8, 2.5")
    pub history: Option<String>,

    /// Read the history from a file instead
    #[arg(short, long, conflicts_with = "history")]
    pub file: Option<PathBuf>,

    /// Desired cash-out multiplier
    #[arg(long)]
    pub target: Option<Decimal>,

    /// Starting bet in dollars
    #[arg(long)]
    pub base_bet: Option<Decimal>,

    /// Available bankroll in dollars
    #[arg(long)]
    pub bankroll: Option<Decimal>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Message language
    #[arg(long, value_enum)]
    pub lang: Option<Locale>,

    /// Write the parsed history to this file (or directory)
    #[arg(long)]
    pub export: Option<PathBuf>,
}

impl AnalyzeArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let session = &config.session;
        let locale = self.lang.unwrap_or(session.locale);
        let target = self.target.unwrap_or(session.target);
        let base_bet = check_min(
            "base bet",
            self.base_bet.unwrap_or(session.base_bet),
            MIN_BASE_BET,
        )?;
        let bankroll = check_min(
            "bankroll",
            self.bankroll.unwrap_or(session.bankroll),
            MIN_BANKROLL,
        )?;

        let history = self
            .read_history()
            .map_err(|e| anyhow::anyhow!(messages::error_message(&e, locale)))?;

        let analyzer = Analyzer::new(config);
        let request = AnalysisRequest {
            history,
            target,
            base_bet,
            bankroll,
        };
        let report = analyzer
            .analyze(&request)
            .map_err(|e| anyhow::anyhow!(messages::error_message(&e, locale)))?;

        match self.format {
            OutputFormat::Table => {
                print!("{}", render_table(&report, locale, analyzer.min_history()))
            }
            OutputFormat::Json => println!("{}", render_json(&report, locale)?),
        }

        if let Some(ref path) = self.export {
            let written = write_history(path, &session.export_file, &request.history)?;
            eprintln!("History written to {}", written.display());
        }

        Ok(())
    }

    fn read_history(&self) -> Result<History, AnalysisError> {
        match (&self.history, &self.file) {
            (Some(text), _) => Ok(History::parse(text)?),
            (None, Some(path)) => Ok(History::from_file(path)?),
            (None, None) => Err(AnalysisError::InvalidInput(
                "provide a history argument or --file".to_string(),
            )),
        }
    }
}
