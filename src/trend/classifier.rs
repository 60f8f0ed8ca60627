//! Trend classifier
//!
//! Runs the rule chain over the trailing windows of a multiplier history.
//! The classifier has no length floor: callers decide how much history is
//! enough to trust the result.

use rust_decimal::Decimal;

use super::rules::{TrendRule, DEFAULT_RULES, LOW_RISK_RATIO};
use super::types::{TrendResult, WindowStats};
use crate::config::TrendConfig;
use crate::telemetry::{increment_counter, CounterMetric};

/// Priority-ordered trend classifier
#[derive(Debug, Clone)]
pub struct TrendClassifier {
    config: TrendConfig,
    rules: Vec<TrendRule>,
}

impl TrendClassifier {
    /// Create a classifier with the default rule chain
    pub fn new(config: TrendConfig) -> Self {
        Self {
            config,
            rules: DEFAULT_RULES.to_vec(),
        }
    }

    /// Create a classifier with default thresholds
    pub fn with_defaults() -> Self {
        Self::new(TrendConfig::default())
    }

    pub fn config(&self) -> &TrendConfig {
        &self.config
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[TrendRule] {
        &self.rules
    }

    /// Find the first rule matching the given window stats
    pub fn first_match(&self, stats: &WindowStats) -> TrendRule {
        self.rules
            .iter()
            .find(|rule| rule.matches(stats, &self.config))
            .copied()
            .unwrap_or(LOW_RISK_RATIO)
    }

    /// Classify a chronological history (oldest first)
    pub fn classify(&self, history: &[Decimal], target: Decimal) -> TrendResult {
        let stats = WindowStats::compute(history, &self.config);
        let rule = self.first_match(&stats);

        tracing::debug!(
            rule = rule.name,
            label = rule.label.as_str(),
            window_len = stats.window_len,
            low_count = stats.low_count,
            high_count = stats.high_count,
            "Trend classified"
        );
        increment_counter(CounterMetric::Classification, rule.label.as_str());

        TrendResult {
            label: rule.label,
            reason: rule.reason,
            stats,
            threshold: rule.reason.threshold(&self.config),
            target,
        }
    }
}

impl Default for TrendClassifier {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Classify with default thresholds
pub fn classify(history: &[Decimal], target: Decimal) -> TrendResult {
    TrendClassifier::with_defaults().classify(history, target)
}
