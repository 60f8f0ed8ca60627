//! Report module
//!
//! Presentation of an analysis: severity styling, localized text, the
//! history chart and table/JSON output.

pub mod chart;
pub mod messages;
mod render;

pub use messages::Locale;
pub use render::{render_json, render_plan, render_table, JsonReport, OutputFormat};

use serde::{Deserialize, Serialize};

use crate::trend::TrendLabel;

/// Visual severity of a trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Success => "✅",
            Severity::Warning => "⚠",
            Severity::Error => "🚫",
        }
    }
}

impl From<TrendLabel> for Severity {
    fn from(label: TrendLabel) -> Self {
        match label {
            TrendLabel::Green => Severity::Success,
            TrendLabel::Neutral => Severity::Warning,
            TrendLabel::Gray => Severity::Error,
        }
    }
}
