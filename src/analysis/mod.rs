//! Analysis module
//!
//! Ties history validation, trend classification and bet schedules into a
//! single report.

mod analyzer;
mod types;

pub use analyzer::Analyzer;
pub use types::{AnalysisError, AnalysisReport, AnalysisRequest};
