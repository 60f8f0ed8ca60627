//! Bet schedule module
//!
//! Suggested stake ladders for the fixed, mini-martingale and incremental
//! strategies.

mod generator;
mod types;

pub use generator::{
    generate, BetScheduleGenerator, FixedLadder, IncrementalLadder, MartingaleLadder, StakeLadder,
};
pub use types::{BetPlan, BetSchedule, ScheduleError, Strategy};
