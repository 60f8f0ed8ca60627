//! Ordered trend rules
//!
//! Rules are evaluated top to bottom and the first match wins. Earlier rules
//! are the stronger signals: hot gray > recent bomb > strong green > ratio.

use super::types::{TrendLabel, TrendReason, WindowStats};
use crate::config::TrendConfig;

type Predicate = fn(&WindowStats, &TrendConfig) -> bool;

/// A named predicate paired with the result it produces
#[derive(Clone, Copy)]
pub struct TrendRule {
    pub name: &'static str,
    pub label: TrendLabel,
    pub reason: TrendReason,
    predicate: Predicate,
}

impl TrendRule {
    const fn new(
        name: &'static str,
        label: TrendLabel,
        reason: TrendReason,
        predicate: Predicate,
    ) -> Self {
        Self {
            name,
            label,
            reason,
            predicate,
        }
    }

    /// Check whether this rule fires for the given window
    pub fn matches(&self, stats: &WindowStats, config: &TrendConfig) -> bool {
        (self.predicate)(stats, config)
    }
}

impl std::fmt::Debug for TrendRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrendRule")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("reason", &self.reason)
            .finish()
    }
}

/// Full short window, all below the low threshold
pub const HOT_GRAY: TrendRule = TrendRule::new(
    "hot_gray",
    TrendLabel::Gray,
    TrendReason::HotGrayStreak,
    |stats, config| {
        config.short_window > 0 && stats.streak_len == config.short_window && stats.streak_all_low
    },
);

/// A bomb in the long window tends to precede a gray run
pub const RECENT_BOMB: TrendRule = TrendRule::new(
    "recent_bomb",
    TrendLabel::Neutral,
    TrendReason::RecentBomb,
    |stats, _| stats.has_bomb,
);

pub const STRONG_GREEN: TrendRule = TrendRule::new(
    "strong_green",
    TrendLabel::Green,
    TrendReason::StrongGreen,
    |stats, config| stats.high_count >= config.min_high_count,
);

pub const HIGH_RISK_RATIO: TrendRule = TrendRule::new(
    "high_risk_ratio",
    TrendLabel::Gray,
    TrendReason::HighRiskRatio,
    |stats, config| stats.risk_ratio() > config.gray_ratio,
);

pub const ELEVATED_RISK_RATIO: TrendRule = TrendRule::new(
    "elevated_risk_ratio",
    TrendLabel::Neutral,
    TrendReason::ElevatedRiskRatio,
    |stats, config| stats.risk_ratio() > config.neutral_ratio,
);

/// Catch-all, always matches
pub const LOW_RISK_RATIO: TrendRule = TrendRule::new(
    "low_risk_ratio",
    TrendLabel::Green,
    TrendReason::LowRiskRatio,
    |_, _| true,
);

/// Default rule chain in priority order
pub const DEFAULT_RULES: [TrendRule; 6] = [
    HOT_GRAY,
    RECENT_BOMB,
    STRONG_GREEN,
    HIGH_RISK_RATIO,
    ELEVATED_RISK_RATIO,
    LOW_RISK_RATIO,
];
