//! Analysis request, report and error types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::history::{History, InputError};
use crate::schedule::{BetPlan, ScheduleError};
use crate::trend::TrendResult;

/// Errors that end an analysis before anything is reported
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Too few rounds for a trustworthy classification
    #[error("At least {required} multipliers are required, got {got}")]
    InsufficientHistory { got: usize, required: usize },
    /// History text could not be parsed
    #[error("Failed to process history: {0}")]
    Parse(#[from] InputError),
    /// A numeric session input is out of range
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The base bet is too large for a stake ladder
    #[error("Failed to build bet schedules: {0}")]
    Schedule(#[from] ScheduleError),
}

impl AnalysisError {
    /// Short label for logs and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::InsufficientHistory { .. } => "insufficient_history",
            AnalysisError::Parse(_) => "parse",
            AnalysisError::InvalidInput(_) => "invalid_input",
            AnalysisError::Schedule(_) => "schedule",
        }
    }
}

/// Inputs for a single analysis
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub history: History,
    pub target: Decimal,
    pub base_bet: Decimal,
    /// Carried into the report, not used to bound schedules
    pub bankroll: Decimal,
}

/// Everything produced by one analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub trend: TrendResult,
    pub plan: BetPlan,
    /// Most recent rounds for the history chart, oldest first
    pub chart_window: Vec<Decimal>,
    pub target: Decimal,
    pub base_bet: Decimal,
    pub bankroll: Decimal,
    pub history_len: usize,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnalysisError::InsufficientHistory {
            got: 4,
            required: 5,
        };
        assert_eq!(err.to_string(), "At least 5 multipliers are required, got 4");
        assert_eq!(err.kind(), "insufficient_history");
    }

    #[test]
    fn test_parse_error_wraps_source() {
        let source = crate::history::parse_multipliers("abc").unwrap_err();
        let err = AnalysisError::from(source);
        assert!(err.to_string().starts_with("Failed to process history:"));
        assert!(err.to_string().contains("abc"));
        assert_eq!(err.kind(), "parse");
    }
}
