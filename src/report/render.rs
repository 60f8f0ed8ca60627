//! Report rendering for the terminal and JSON

use serde::Serialize;
use std::fmt::Write;

use super::chart::{self, CHART_HEIGHT};
use super::messages::{self, Heading, Locale};
use super::Severity;
use crate::analysis::AnalysisReport;
use crate::schedule::{BetPlan, BetSchedule};

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Report as emitted by `--format json`
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub severity: Severity,
    pub message: String,
    #[serde(flatten)]
    pub report: &'a AnalysisReport,
}

/// Render a full analysis for the terminal
pub fn render_table(report: &AnalysisReport, locale: Locale, min_history: usize) -> String {
    let severity = Severity::from(report.trend.label);
    let mut out = String::new();

    let _ = writeln!(out, "{}", messages::heading(Heading::Title, locale));
    let _ = writeln!(out, "{}", "=".repeat(54));
    let _ = writeln!(
        out,
        "{} {}",
        severity.icon(),
        messages::rationale(&report.trend, locale)
    );
    let _ = writeln!(out);

    out.push_str(&render_plan(&report.plan, locale));
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "{} ({})",
        messages::heading(Heading::Chart, locale),
        report.chart_window.len()
    );
    out.push_str(&chart::render(
        &report.chart_window,
        report.target,
        CHART_HEIGHT,
    ));
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", messages::heading(Heading::Tips, locale));
    for tip in messages::tips(min_history, locale) {
        let _ = writeln!(out, "- {tip}");
    }

    out
}

/// Render the three bet schedules with their totals
pub fn render_plan(plan: &BetPlan, locale: Locale) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", messages::heading(Heading::Suggestions, locale));
    let _ = writeln!(out, "{}", "-".repeat(54));

    for schedule in plan.iter() {
        let _ = writeln!(
            out,
            "{}: [{}]  {}: ${:.2}",
            messages::strategy_name(schedule, locale),
            format_bets(schedule),
            messages::heading(Heading::Total, locale),
            schedule.total()
        );
        let _ = writeln!(out, "    {}", messages::strategy_caption(schedule, locale));
    }

    out
}

fn format_bets(schedule: &BetSchedule) -> String {
    schedule
        .bets
        .iter()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render a full analysis as pretty JSON
pub fn render_json(report: &AnalysisReport, locale: Locale) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        severity: Severity::from(report.trend.label),
        message: messages::rationale(&report.trend, locale),
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Analyzer;
    use crate::schedule::generate;
    use rust_decimal_macros::dec;

    fn sample_report() -> AnalysisReport {
        Analyzer::with_defaults()
            .analyze_text(
                "1.3, 1.4, 2.1, 1.8, 3.2, 1.5, 2.7, 1.2, 1.6, 2.8",
                dec!(2.0),
                dec!(0.5),
                dec!(10.0),
            )
            .unwrap()
    }

    #[test]
    fn test_render_plan_lists_totals() {
        let text = render_plan(&generate(dec!(10.0), dec!(0.5)).unwrap(), Locale::En);

        assert!(text.contains(
            "Fixed Bet (safe): [0.5, 0.5, 0.5, 0.5, 0.5]  Total if played out: $2.50"
        ));
        assert!(text.contains("[0.5, 0.75, 1.13, 1.69]"));
        assert!(text.contains("$4.07"));
        assert!(text.contains("[0.5, 0.6, 0.7, 0.8]"));
        assert!(text.contains("$2.60"));
    }

    #[test]
    fn test_render_table_sections() {
        let text = render_table(&sample_report(), Locale::En, 5);

        assert!(text.contains("⚠ Moderately high risk (6/10 rounds below x2.0)."));
        assert!(text.contains("Bet suggestions for 3 strategies"));
        assert!(text.contains("Recent rounds"));
        assert!(text.contains("Enter at least 5 rounds"));
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&sample_report(), Locale::En).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["severity"], "warning");
        assert_eq!(value["trend"]["label"], "neutral");
        assert_eq!(value["trend"]["reason"], "elevated_risk_ratio");
        assert_eq!(value["plan"]["schedules"].as_array().unwrap().len(), 3);
        assert_eq!(value["history_len"], 10);
    }
}
