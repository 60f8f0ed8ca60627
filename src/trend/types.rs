//! Trend classification types
//!
//! A classification carries a label, a machine-readable reason code and the
//! counts needed to phrase it. Wording lives in `report::messages`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::TrendConfig;

/// Qualitative trend state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendLabel {
    /// Favourable run, entering at the target looks reasonable
    Green,
    /// Mixed signals, waiting is suggested
    Neutral,
    /// Low-multiplier streak likely, sit out or reduce bets
    Gray,
}

impl TrendLabel {
    /// Stable lowercase name, used for logs and metric labels
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendLabel::Green => "green",
            TrendLabel::Neutral => "neutral",
            TrendLabel::Gray => "gray",
        }
    }
}

impl std::fmt::Display for TrendLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which rule produced the classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendReason {
    /// Every round in the short window crashed below the low threshold
    HotGrayStreak,
    /// A bomb-sized multiplier appeared in the long window
    RecentBomb,
    /// Enough high rounds in the long window
    StrongGreen,
    /// Low-round ratio above the gray ratio
    HighRiskRatio,
    /// Low-round ratio above the neutral ratio
    ElevatedRiskRatio,
    /// Low-round ratio at or below the neutral ratio
    LowRiskRatio,
}

impl TrendReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendReason::HotGrayStreak => "hot_gray_streak",
            TrendReason::RecentBomb => "recent_bomb",
            TrendReason::StrongGreen => "strong_green",
            TrendReason::HighRiskRatio => "high_risk_ratio",
            TrendReason::ElevatedRiskRatio => "elevated_risk_ratio",
            TrendReason::LowRiskRatio => "low_risk_ratio",
        }
    }

    /// The threshold this reason compares rounds against
    pub fn threshold(&self, config: &TrendConfig) -> Decimal {
        match self {
            TrendReason::RecentBomb => config.bomb_threshold,
            TrendReason::StrongGreen => config.high_threshold,
            _ => config.low_threshold,
        }
    }
}

/// Counts over the trailing windows of a history
///
/// Computed once per classification and shared by every rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowStats {
    /// Rounds in the long window (at most `long_window`)
    pub window_len: usize,
    /// Rounds in the long window strictly below the low threshold
    pub low_count: usize,
    /// Rounds in the long window at or above the high threshold
    pub high_count: usize,
    /// Whether any round in the long window reached the bomb threshold
    pub has_bomb: bool,
    /// Rounds in the short window (at most `short_window`)
    pub streak_len: usize,
    /// Whether every round in the short window is low
    pub streak_all_low: bool,
}

impl WindowStats {
    /// Collect window statistics from a chronological history (oldest first)
    pub fn compute(history: &[Decimal], config: &TrendConfig) -> Self {
        let long = tail(history, config.long_window);
        let short = tail(history, config.short_window);

        Self {
            window_len: long.len(),
            low_count: long.iter().filter(|x| **x < config.low_threshold).count(),
            high_count: long.iter().filter(|x| **x >= config.high_threshold).count(),
            has_bomb: long.iter().any(|x| *x >= config.bomb_threshold),
            streak_len: short.len(),
            streak_all_low: short.iter().all(|x| *x < config.low_threshold),
        }
    }

    /// Share of low rounds in the long window, zero for an empty window
    pub fn risk_ratio(&self) -> Decimal {
        if self.window_len == 0 {
            return Decimal::ZERO;
        }
        Decimal::from(self.low_count) / Decimal::from(self.window_len)
    }
}

fn tail(values: &[Decimal], n: usize) -> &[Decimal] {
    &values[values.len().saturating_sub(n)..]
}

/// Result of a single classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendResult {
    pub label: TrendLabel,
    pub reason: TrendReason,
    /// Window counts the rule was evaluated against
    pub stats: WindowStats,
    /// Multiplier threshold behind the reason (low, high or bomb)
    pub threshold: Decimal,
    /// Cash-out target, only used when phrasing the result
    pub target: Decimal,
}

impl TrendResult {
    pub fn risk_ratio(&self) -> Decimal {
        self.stats.risk_ratio()
    }
}
