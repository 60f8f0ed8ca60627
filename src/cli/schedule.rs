//! Schedule command implementation

use clap::Args;
use rust_decimal::Decimal;

use super::{check_min, MIN_BANKROLL, MIN_BASE_BET};
use crate::config::Config;
use crate::report::{render_plan, Locale, OutputFormat};
use crate::schedule::BetScheduleGenerator;

#[derive(Args, Debug)]
pub struct ScheduleArgs {
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
}

impl ScheduleArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let session = &config.session;
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

        let plan =
            BetScheduleGenerator::from_config(&config.schedule).generate(bankroll, base_bet)?;

        match self.format {
            OutputFormat::Table => {
                print!("{}", render_plan(&plan, self.lang.unwrap_or(session.locale)))
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
        }

        Ok(())
    }
}
