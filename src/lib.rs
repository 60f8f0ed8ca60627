//! crash-tool: trend forecast and bet suggestions for crash game history
//!
//! This library provides the core components for:
//! - Parsing and exporting multiplier history
//! - Trend classification with a priority-ordered rule chain
//! - Fixed, mini-martingale and incremental bet schedules
//! - One-shot analysis with input validation
//! - Localized terminal and JSON reports
//! - Logging and counters

pub mod analysis;
pub mod cli;
pub mod config;
pub mod history;
pub mod report;
pub mod schedule;
pub mod telemetry;
pub mod trend;
