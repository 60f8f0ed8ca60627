//! Bet schedule generation
//!
//! Three closed-form stake ladders built from a base bet. The bankroll is
//! accepted for the session but does not bound the ladders: no affordability
//! check is made against it. Stakes use checked arithmetic, so a base bet too
//! large for a ladder is an error rather than a panic.

use rust_decimal::{Decimal, RoundingStrategy};

use super::types::{BetPlan, BetSchedule, ScheduleError, Strategy};
use crate::config::ScheduleConfig;

/// Trait for stake ladder implementations
pub trait StakeLadder: Send + Sync {
    /// Unrounded stakes for each round, starting from the base bet
    ///
    /// Returns `None` if a stake does not fit in a Decimal.
    fn stakes(&self, base_bet: Decimal) -> Option<Vec<Decimal>>;

    /// Strategy this ladder implements
    fn strategy(&self) -> Strategy;

    /// Per-round growth parameter, if the ladder has one
    fn growth(&self) -> Option<Decimal> {
        None
    }
}

/// Flat stakes
#[derive(Debug, Clone)]
pub struct FixedLadder {
    pub rounds: usize,
}

impl StakeLadder for FixedLadder {
    fn stakes(&self, base_bet: Decimal) -> Option<Vec<Decimal>> {
        Some(vec![base_bet; self.rounds])
    }

    fn strategy(&self) -> Strategy {
        Strategy::Fixed
    }
}

/// Geometric stakes: `base_bet * factor^i`
#[derive(Debug, Clone)]
pub struct MartingaleLadder {
    pub factor: Decimal,
    /// Hard cap on rounds before the ladder is abandoned
    pub rounds: usize,
}

impl StakeLadder for MartingaleLadder {
    fn stakes(&self, base_bet: Decimal) -> Option<Vec<Decimal>> {
        let mut stakes = Vec::with_capacity(self.rounds);
        let mut stake = base_bet;
        for round in 0..self.rounds {
            if round > 0 {
                stake = stake.checked_mul(self.factor)?;
            }
            stakes.push(stake);
        }
        Some(stakes)
    }

    fn strategy(&self) -> Strategy {
        Strategy::MiniMartingale
    }

    fn growth(&self) -> Option<Decimal> {
        Some(self.factor)
    }
}

/// Linear stakes: `base_bet + i * step * base_bet`
#[derive(Debug, Clone)]
pub struct IncrementalLadder {
    pub step: Decimal,
    pub rounds: usize,
}

impl StakeLadder for IncrementalLadder {
    fn stakes(&self, base_bet: Decimal) -> Option<Vec<Decimal>> {
        (0..self.rounds)
            .map(|i| {
                Decimal::from(i)
                    .checked_mul(self.step)?
                    .checked_mul(base_bet)?
                    .checked_add(base_bet)
            })
            .collect()
    }

    fn strategy(&self) -> Strategy {
        Strategy::Incremental
    }

    fn growth(&self) -> Option<Decimal> {
        Some(self.step)
    }
}

/// Builds the fixed, mini-martingale and incremental schedules
pub struct BetScheduleGenerator {
    ladders: Vec<Box<dyn StakeLadder>>,
    precision: u32,
}

impl BetScheduleGenerator {
    /// Create from ScheduleConfig
    pub fn from_config(config: &ScheduleConfig) -> Self {
        let ladders: Vec<Box<dyn StakeLadder>> = vec![
            Box::new(FixedLadder {
                rounds: config.fixed_rounds,
            }),
            Box::new(MartingaleLadder {
                factor: config.martingale_factor,
                rounds: config.martingale_rounds,
            }),
            Box::new(IncrementalLadder {
                step: config.increment_step,
                rounds: config.increment_rounds,
            }),
        ];

        Self {
            ladders,
            precision: config.precision,
        }
    }

    /// Create a generator with the default ladder shapes
    pub fn with_defaults() -> Self {
        Self::from_config(&ScheduleConfig::default())
    }

    /// Generate all schedules for a base bet
    ///
    /// Each stake is rounded half away from zero, so 1.125 becomes 1.13, and
    /// trailing zeros are dropped. Fails if any stake or schedule total
    /// overflows.
    pub fn generate(
        &self,
        bankroll: Decimal,
        base_bet: Decimal,
    ) -> Result<BetPlan, ScheduleError> {
        tracing::debug!(%bankroll, %base_bet, "Generating bet schedules");

        let schedules = self
            .ladders
            .iter()
            .map(|ladder| self.schedule(ladder.as_ref(), base_bet))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BetPlan { schedules })
    }

    fn schedule(
        &self,
        ladder: &dyn StakeLadder,
        base_bet: Decimal,
    ) -> Result<BetSchedule, ScheduleError> {
        let overflow = || ScheduleError::Overflow {
            strategy: ladder.strategy(),
            base_bet,
        };

        let bets = ladder
            .stakes(base_bet)
            .ok_or_else(overflow)?
            .into_iter()
            .map(|stake| self.round(stake))
            .collect();
        let schedule = BetSchedule::new(ladder.strategy(), bets).with_growth(ladder.growth());

        if schedule.checked_total().is_none() {
            return Err(overflow());
        }
        Ok(schedule)
    }

    fn round(&self, stake: Decimal) -> Decimal {
        stake
            .round_dp_with_strategy(self.precision, RoundingStrategy::MidpointAwayFromZero)
            .normalize()
    }
}

impl Default for BetScheduleGenerator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Generate schedules with default ladder shapes
pub fn generate(bankroll: Decimal, base_bet: Decimal) -> Result<BetPlan, ScheduleError> {
    BetScheduleGenerator::with_defaults().generate(bankroll, base_bet)
}
