//! One-shot analysis
//!
//! Gates on history length, then runs the classifier and the schedule
//! generator. Any error ends the analysis with no partial report.

use chrono::Utc;
use rust_decimal::Decimal;

use super::types::{AnalysisError, AnalysisReport, AnalysisRequest};
use crate::config::Config;
use crate::history::History;
use crate::schedule::BetScheduleGenerator;
use crate::telemetry::{increment_counter, CounterMetric};
use crate::trend::TrendClassifier;

/// Runs classification and schedule generation for a request
pub struct Analyzer {
    classifier: TrendClassifier,
    generator: BetScheduleGenerator,
    min_history: usize,
    chart_window: usize,
}

impl Analyzer {
    pub fn new(config: &Config) -> Self {
        Self {
            classifier: TrendClassifier::new(config.trend.clone()),
            generator: BetScheduleGenerator::from_config(&config.schedule),
            min_history: config.session.min_history,
            chart_window: config.session.chart_window,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(&Config::default())
    }

    pub fn min_history(&self) -> usize {
        self.min_history
    }

    /// Analyze an already parsed history
    pub fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisReport, AnalysisError> {
        self.run(request).inspect_err(|e| {
            tracing::warn!(kind = e.kind(), error = %e, "Analysis rejected");
            increment_counter(CounterMetric::AnalysisRejected, e.kind());
        })
    }

    fn run(&self, request: &AnalysisRequest) -> Result<AnalysisReport, AnalysisError> {
        self.validate(request)?;

        let history = request.history.values();
        let trend = self.classifier.classify(history, request.target);
        let plan = self.generator.generate(request.bankroll, request.base_bet)?;

        tracing::info!(
            rounds = history.len(),
            trend = trend.label.as_str(),
            reason = trend.reason.as_str(),
            "Analysis complete"
        );

        Ok(AnalysisReport {
            trend,
            plan,
            chart_window: request.history.tail(self.chart_window).to_vec(),
            target: request.target,
            base_bet: request.base_bet,
            bankroll: request.bankroll,
            history_len: history.len(),
            generated_at: Utc::now(),
        })
    }

    /// Parse comma-separated history text, then analyze it
    pub fn analyze_text(
        &self,
        input: &str,
        target: Decimal,
        base_bet: Decimal,
        bankroll: Decimal,
    ) -> Result<AnalysisReport, AnalysisError> {
        let history = History::parse(input).inspect_err(|e| {
            tracing::warn!(error = %e, "History parse failed");
            increment_counter(CounterMetric::AnalysisRejected, "parse");
        })?;

        self.analyze(&AnalysisRequest {
            history,
            target,
            base_bet,
            bankroll,
        })
    }

    fn validate(&self, request: &AnalysisRequest) -> Result<(), AnalysisError> {
        let got = request.history.len();
        if got < self.min_history {
            return Err(AnalysisError::InsufficientHistory {
                got,
                required: self.min_history,
            });
        }
        if request.target <= Decimal::ZERO {
            return Err(AnalysisError::InvalidInput(format!(
                "target must be positive, got {}",
                request.target
            )));
        }
        if request.base_bet <= Decimal::ZERO {
            return Err(AnalysisError::InvalidInput(format!(
                "base bet must be positive, got {}",
                request.base_bet
            )));
        }
        if request.bankroll <= Decimal::ZERO {
            return Err(AnalysisError::InvalidInput(format!(
                "bankroll must be positive, got {}",
                request.bankroll
            )));
        }
        Ok(())
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::with_defaults()
    }
}
