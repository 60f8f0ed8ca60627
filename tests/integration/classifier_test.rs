//! Integration tests for trend classification

use crash_tool::history::History;
use crash_tool::trend::{classify, TrendClassifier, TrendLabel, TrendReason};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn history(text: &str) -> History {
    History::parse(text).unwrap()
}

#[test]
fn test_hot_gray_regardless_of_earlier_rounds() {
    let prefixes = [
        "",
        "50.0, 3.0, 3.0, 3.0, 3.0, 3.0,",
        "2.5, 2.5, 2.5, 2.5, 2.5, 2.5, 2.5,",
        "1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0,",
        "12.0,",
    ];

    for prefix in prefixes {
        let h = history(&format!("{prefix} 1.99, 1.01, 1.5"));
        let result = classify(h.values(), dec!(2.0));
        assert_eq!(result.label, TrendLabel::Gray, "prefix: {prefix:?}");
        assert_eq!(result.reason, TrendReason::HotGrayStreak, "prefix: {prefix:?}");
    }
}

#[test]
fn test_bomb_rule_silent_without_bomb_in_window() {
    let cases = [
        "1.3, 1.4, 2.1, 1.8, 3.2",
        "9.99, 9.99, 9.99, 2.0, 2.0, 2.0",
        // Bomb eleven rounds back is outside the window
        "10.0, 2.1, 2.1, 2.1, 2.1, 2.1, 2.1, 2.1, 2.1, 2.1, 2.1",
        "1.1, 1.2, 1.3, 1.4, 1.5, 2.6, 2.7, 2.8",
    ];

    for case in cases {
        let result = classify(history(case).values(), dec!(2.0));
        assert_ne!(result.reason, TrendReason::RecentBomb, "case: {case}");
    }
}

#[test]
fn test_scenario_a() {
    let h = history("1.3, 1.4, 2.1, 1.8, 3.2, 1.5, 2.7, 1.2, 1.6, 2.8");
    let result = classify(h.values(), dec!(2.0));

    assert_eq!(result.label, TrendLabel::Neutral);
    assert_eq!(result.stats.high_count, 2);
    assert_eq!(result.stats.low_count, 6);
    assert_eq!(result.risk_ratio(), dec!(0.6));
}

#[test]
fn test_scenario_b() {
    let h = history("1.1, 1.2, 1.3, 1.4, 1.5, 1.6, 1.7, 1.8, 1.1, 1.2");
    let result = classify(h.values(), dec!(2.0));

    assert_eq!(result.label, TrendLabel::Gray);
    assert_eq!(result.risk_ratio(), Decimal::ONE);
}

#[test]
fn test_scenario_c() {
    let result = classify(history("1.1, 1.1, 1.1").values(), dec!(2.0));
    assert_eq!(result.label, TrendLabel::Gray);
    assert_eq!(result.reason, TrendReason::HotGrayStreak);
}

#[test]
fn test_idempotent() {
    let classifier = TrendClassifier::with_defaults();
    let h = history("3.0, 2.6, 1.2, 2.9, 4.4, 1.7, 2.5, 5.0");

    let a = classifier.classify(h.values(), dec!(2.0));
    let b = classifier.classify(h.values(), dec!(2.0));
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn test_each_label_reachable() {
    let green = classify(history("3.0, 2.6, 1.2, 2.9, 4.4, 1.7, 2.5, 5.0").values(), dec!(2.0));
    assert_eq!(green.reason, TrendReason::StrongGreen);

    let neutral = classify(history("2.1, 2.1, 15.0, 2.1, 2.1").values(), dec!(2.0));
    assert_eq!(neutral.reason, TrendReason::RecentBomb);

    let gray = classify(
        history("1.1, 1.2, 1.3, 1.4, 1.5, 1.6, 1.7, 1.8, 2.2, 1.2").values(),
        dec!(2.0),
    );
    assert_eq!(gray.reason, TrendReason::HighRiskRatio);
}
