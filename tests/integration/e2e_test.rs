//! End-to-end integration tests

use crash_tool::analysis::{AnalysisError, Analyzer};
use crash_tool::config::Config;
use crash_tool::history::{write_history, History, DEFAULT_EXPORT_FILE};
use crash_tool::report::{render_json, render_table, Locale};
use crash_tool::trend::TrendLabel;
use rust_decimal_macros::dec;

const SAMPLE: &str = "1.3, 1.4, 2.1, 1.8, 3.2, 1.5, 2.7, 1.2, 1.6, 2.8";

#[test]
fn test_config_drives_analysis() {
    let toml = r#"
        [trend]
        neutral_ratio = 0.6

        [session]
        min_history = 10
    "#;
    let config: Config = toml::from_str(toml).unwrap();
    let analyzer = Analyzer::new(&config);

    // 6/10 low rounds is no longer above the neutral ratio
    let report = analyzer
        .analyze_text(SAMPLE, dec!(2.0), dec!(0.5), dec!(10.0))
        .unwrap();
    assert_eq!(report.trend.label, TrendLabel::Green);

    let err = analyzer
        .analyze_text("1.3, 1.4, 2.1, 1.8, 3.2", dec!(2.0), dec!(0.5), dec!(10.0))
        .unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::InsufficientHistory {
            got: 5,
            required: 10
        }
    ));
}

#[test]
fn test_full_report_vietnamese() {
    let report = Analyzer::with_defaults()
        .analyze_text(SAMPLE, dec!(2.0), dec!(0.5), dec!(10.0))
        .unwrap();
    let text = render_table(&report, Locale::Vi, 5);

    assert!(text.contains("Rủi ro trung bình cao (6/10 ván < x2.0)."));
    assert!(text.contains(
        "Mini Martingale (x1.5) - gồng tối đa 4 ván: [0.5, 0.75, 1.13, 1.69]"
    ));
    assert!(text.contains("Tổng gồng: $4.07"));
}

#[test]
fn test_json_report_is_machine_readable() {
    let report = Analyzer::with_defaults()
        .analyze_text("1.1, 1.1, 1.1, 1.1, 1.1", dec!(2.0), dec!(0.5), dec!(10.0))
        .unwrap();
    let json = render_json(&report, Locale::En).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["severity"], "error");
    assert_eq!(value["trend"]["reason"], "hot_gray_streak");
    assert_eq!(value["bankroll"], "10.0");
}

#[test]
fn test_export_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let history = History::parse(SAMPLE).unwrap();

    let path = write_history(dir.path(), DEFAULT_EXPORT_FILE, &history).unwrap();
    assert!(path.ends_with("history_sample.txt"));

    let reloaded = History::from_file(&path).unwrap();
    assert_eq!(reloaded, history);

    let report = Analyzer::with_defaults()
        .analyze(&crash_tool::analysis::AnalysisRequest {
            history: reloaded,
            target: dec!(2.0),
            base_bet: dec!(0.5),
            bankroll: dec!(10.0),
        })
        .unwrap();
    assert_eq!(report.trend.label, TrendLabel::Neutral);
}

#[test]
fn test_parse_failure_is_terminal() {
    let err = Analyzer::with_defaults()
        .analyze_text("1.3, 1.4, two, 1.8, 3.2", dec!(2.0), dec!(0.5), dec!(10.0))
        .unwrap_err();

    assert!(matches!(err, AnalysisError::Parse(_)));
    assert!(err.to_string().contains("two"));
}

#[test]
fn test_example_config_loads() {
    let config: Config = toml::from_str(include_str!("../../crash-tool.toml.example")).unwrap();
    assert_eq!(config.trend.bomb_threshold, dec!(10.0));
    assert_eq!(config.schedule.martingale_factor, dec!(1.5));
    assert_eq!(config.session.export_file, "history_sample.txt");
    assert_eq!(config.session.locale, Locale::En);
}
