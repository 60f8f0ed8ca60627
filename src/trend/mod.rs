//! Trend detection module
//!
//! Classifies recent momentum of a crash multiplier history into green,
//! neutral or gray using a fixed chain of threshold rules.

mod classifier;
pub mod rules;
mod types;

pub use classifier::{classify, TrendClassifier};
pub use rules::TrendRule;
pub use types::{TrendLabel, TrendReason, TrendResult, WindowStats};
