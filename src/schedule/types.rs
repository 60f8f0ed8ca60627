//! Bet schedule types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bet sizing strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Same stake every round
    Fixed,
    /// Stake grows by a factor after each loss, capped in rounds
    MiniMartingale,
    /// Stake grows by a fixed fraction of the base bet each round
    Incremental,
}

impl Strategy {
    /// Display order of the three strategies
    pub const ALL: [Strategy; 3] = [
        Strategy::Fixed,
        Strategy::MiniMartingale,
        Strategy::Incremental,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Fixed => "fixed",
            Strategy::MiniMartingale => "mini_martingale",
            Strategy::Incremental => "incremental",
        }
    }
}

/// Errors from schedule generation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// A stake or schedule total does not fit in a Decimal
    #[error("{} schedule overflows for base bet {base_bet}", .strategy.as_str())]
    Overflow { strategy: Strategy, base_bet: Decimal },
}

/// Suggested stakes for one strategy, in betting order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetSchedule {
    pub strategy: Strategy,
    pub bets: Vec<Decimal>,
    /// Martingale factor or incremental step, none for flat stakes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth: Option<Decimal>,
}

impl BetSchedule {
    pub fn new(strategy: Strategy, bets: Vec<Decimal>) -> Self {
        Self {
            strategy,
            bets,
            growth: None,
        }
    }

    pub fn with_growth(mut self, growth: Option<Decimal>) -> Self {
        self.growth = growth;
        self
    }

    /// Total stake if every round in the schedule is played
    ///
    /// Saturates at `Decimal::MAX`. Generated schedules always have a
    /// representable total.
    pub fn total(&self) -> Decimal {
        self.checked_total().unwrap_or(Decimal::MAX)
    }

    /// Total stake, or `None` on overflow
    pub fn checked_total(&self) -> Option<Decimal> {
        self.bets
            .iter()
            .try_fold(Decimal::ZERO, |acc, bet| acc.checked_add(*bet))
    }

    pub fn len(&self) -> usize {
        self.bets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bets.is_empty()
    }
}

/// The three schedules proposed for a session, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetPlan {
    pub schedules: Vec<BetSchedule>,
}

impl BetPlan {
    /// Look up a schedule by strategy
    pub fn get(&self, strategy: Strategy) -> Option<&BetSchedule> {
        self.schedules.iter().find(|s| s.strategy == strategy)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BetSchedule> {
        self.schedules.iter()
    }
}
