//! Localized report text
//!
//! Turns reason codes and schedule parameters into user-facing sentences.
//! Nothing in the decision logic depends on this module.

use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisError;
use crate::schedule::{BetSchedule, Strategy};
use crate::trend::{TrendReason, TrendResult};

/// Display language
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Vi,
}

/// Fixed headings used by the renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Title,
    Suggestions,
    Total,
    Chart,
    Tips,
}

pub fn heading(heading: Heading, locale: Locale) -> &'static str {
    match (locale, heading) {
        (Locale::En, Heading::Title) => "Crash Game Tool - trend forecast & bet suggestions",
        (Locale::En, Heading::Suggestions) => "Bet suggestions for 3 strategies",
        (Locale::En, Heading::Total) => "Total if played out",
        (Locale::En, Heading::Chart) => "Recent rounds (oldest left, newest right)",
        (Locale::En, Heading::Tips) => "Quick guide",
        (Locale::Vi, Heading::Title) => "Crash Game Tool - Dự báo chuỗi & Gợi ý cược",
        (Locale::Vi, Heading::Suggestions) => "Gợi ý số tiền cược cho 3 chiến lược",
        (Locale::Vi, Heading::Total) => "Tổng gồng",
        (Locale::Vi, Heading::Chart) => "Lịch sử các ván gần nhất (trái → mới nhất bên phải)",
        (Locale::Vi, Heading::Tips) => "Hướng dẫn nhanh",
    }
}

/// Explanation for a trend result
pub fn rationale(result: &TrendResult, locale: Locale) -> String {
    let s = &result.stats;
    let t = result.threshold;

    match (locale, result.reason) {
        (Locale::En, TrendReason::HotGrayStreak) => format!(
            "High risk: the last {} rounds all crashed below x{}. The gray streak may continue.",
            s.streak_len, t
        ),
        (Locale::En, TrendReason::RecentBomb) => format!(
            "A very high round (x{}+) just appeared. A gray streak may follow, consider waiting.",
            t
        ),
        (Locale::En, TrendReason::StrongGreen) => format!(
            "Green trend: {}/{} recent rounds reached x{} or more. Good opportunity.",
            s.high_count, s.window_len, t
        ),
        (Locale::En, TrendReason::HighRiskRatio) => format!(
            "Very high gray streak risk ({}/{} rounds below x{}).",
            s.low_count, s.window_len, t
        ),
        (Locale::En, TrendReason::ElevatedRiskRatio) => format!(
            "Moderately high risk ({}/{} rounds below x{}).",
            s.low_count, s.window_len, t
        ),
        (Locale::En, TrendReason::LowRiskRatio) => format!(
            "Relatively safe ({}/{} rounds below x{}). Consider cashing out at x{}.",
            s.low_count, s.window_len, t, result.target
        ),
        (Locale::Vi, TrendReason::HotGrayStreak) => format!(
            "Rủi ro cao: {} ván gần nhất < x{} → Chuỗi xám có thể tiếp tục.",
            s.streak_len, t
        ),
        (Locale::Vi, TrendReason::RecentBomb) => format!(
            "Vừa có ván rất cao (x{}+). Có thể xuất hiện chuỗi xám. Đề nghị đợi.",
            t
        ),
        (Locale::Vi, TrendReason::StrongGreen) => format!(
            "Xu hướng xanh: {}/{} ván >= x{} gần nhất → Cơ hội tốt.",
            s.high_count, s.window_len, t
        ),
        (Locale::Vi, TrendReason::HighRiskRatio) => format!(
            "Nguy cơ chuỗi xám rất cao ({}/{} ván < x{}).",
            s.low_count, s.window_len, t
        ),
        (Locale::Vi, TrendReason::ElevatedRiskRatio) => format!(
            "Rủi ro trung bình cao ({}/{} ván < x{}).",
            s.low_count, s.window_len, t
        ),
        (Locale::Vi, TrendReason::LowRiskRatio) => format!(
            "Tương đối an toàn ({}/{} ván < x{}). Có thể cân nhắc vào x{}.",
            s.low_count, s.window_len, t, result.target
        ),
    }
}

/// Display name of a schedule
pub fn strategy_name(schedule: &BetSchedule, locale: Locale) -> String {
    let rounds = schedule.len();
    let growth = schedule.growth.unwrap_or_default();

    match (locale, schedule.strategy) {
        (_, Strategy::Fixed) => "Fixed Bet (safe)".to_string(),
        (Locale::En, Strategy::MiniMartingale) => {
            format!("Mini Martingale (x{growth}), at most {rounds} rounds")
        }
        (Locale::Vi, Strategy::MiniMartingale) => {
            format!("Mini Martingale (x{growth}) - gồng tối đa {rounds} ván")
        }
        (Locale::En, Strategy::Incremental) => "Incremental Safe (light escalation)".to_string(),
        (Locale::Vi, Strategy::Incremental) => "Incremental Safe (tăng dần nhẹ)".to_string(),
    }
}

/// One-line guidance under each schedule
pub fn strategy_caption(schedule: &BetSchedule, locale: Locale) -> String {
    let rounds = schedule.len();
    let growth = schedule.growth.unwrap_or_default();

    match (locale, schedule.strategy) {
        (Locale::En, Strategy::Fixed) => {
            "Same stake every round, safe for a small bankroll.".to_string()
        }
        (Locale::En, Strategy::MiniMartingale) => {
            format!("Raise the stake x{growth} after each loss, stop after {rounds} rounds.")
        }
        (Locale::En, Strategy::Incremental) => {
            "Raise the stake slightly each round, less risky than martingale.".to_string()
        }
        (Locale::Vi, Strategy::Fixed) => "Cược đều mỗi ván, an toàn cho vốn nhỏ.".to_string(),
        (Locale::Vi, Strategy::MiniMartingale) => {
            format!("Gấp nhẹ {growth}x sau mỗi thua, giới hạn gồng {rounds} ván.")
        }
        (Locale::Vi, Strategy::Incremental) => {
            "Tăng dần nhẹ, giảm rủi ro so với martingale.".to_string()
        }
    }
}

/// Usage tips shown under the report
pub fn tips(min_history: usize, locale: Locale) -> Vec<String> {
    match locale {
        Locale::En => vec![
            format!("Enter at least {min_history} rounds for a reliable forecast."),
            "On a gray streak warning, wait or lower your stake.".to_string(),
            "On a green trend, pick a sensible cash-out and split your bankroll safely."
                .to_string(),
        ],
        Locale::Vi => vec![
            format!("Nhập ít nhất {min_history} ván để có dự báo đáng tin."),
            "Nếu cảnh báo chuỗi xám → nên đợi hoặc giảm cược.".to_string(),
            "Khi chuỗi xanh xuất hiện → cân nhắc mức cash out hợp lý và chia vốn an toàn."
                .to_string(),
        ],
    }
}

/// User-facing text for an analysis failure
pub fn error_message(error: &AnalysisError, locale: Locale) -> String {
    match (locale, error) {
        (Locale::En, AnalysisError::InsufficientHistory { required, got }) => format!(
            "Please enter at least {required} crash multipliers to analyze (got {got})."
        ),
        (Locale::Vi, AnalysisError::InsufficientHistory { required, got }) => format!(
            "Vui lòng nhập ít nhất {required} giá trị hệ số Crash để phân tích (hiện có {got})."
        ),
        (Locale::En, AnalysisError::Parse(e)) => format!("Error while processing data: {e}"),
        (Locale::Vi, AnalysisError::Parse(e)) => format!("Lỗi khi xử lý dữ liệu: {e}"),
        (_, AnalysisError::InvalidInput(_)) => error.to_string(),
        (Locale::En, AnalysisError::Schedule(e)) => {
            format!("Base bet is too large to build bet schedules ({e}).")
        }
        (Locale::Vi, AnalysisError::Schedule(e)) => {
            format!("Số tiền cược quá lớn để tính lịch cược ({e}).")
        }
    }
}
