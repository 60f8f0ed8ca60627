//! Integration tests for bet schedules

use crash_tool::schedule::{generate, ScheduleError, Strategy};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_scenario_d() {
    let plan = generate(dec!(10.0), dec!(0.5)).unwrap();
    let bets: Vec<_> = plan.iter().map(|s| (s.strategy, s.bets.clone())).collect();

    assert_eq!(
        bets,
        vec![
            (Strategy::Fixed, vec![dec!(0.5); 5]),
            (
                Strategy::MiniMartingale,
                vec![dec!(0.5), dec!(0.75), dec!(1.13), dec!(1.69)]
            ),
            (
                Strategy::Incremental,
                vec![dec!(0.5), dec!(0.6), dec!(0.7), dec!(0.8)]
            ),
        ]
    );
}

#[test]
fn test_shape_holds_for_various_base_bets() {
    for base in [dec!(0.01), dec!(0.33), dec!(1), dec!(7.77), dec!(250)] {
        let plan = generate(dec!(10.0), base).unwrap();
        let lengths: Vec<_> = plan.iter().map(|s| s.len()).collect();
        assert_eq!(lengths, vec![5, 4, 4]);

        let fixed = plan.get(Strategy::Fixed).unwrap();
        assert!(fixed.bets.iter().all(|b| *b == base.round_dp(2)));

        for schedule in plan.iter() {
            assert!(schedule.bets.iter().all(|b| b.scale() <= 2));
        }
    }
}

#[test]
fn test_totals() {
    let plan = generate(dec!(10.0), dec!(0.5)).unwrap();
    assert_eq!(plan.get(Strategy::Fixed).unwrap().total(), dec!(2.5));
    assert_eq!(plan.get(Strategy::MiniMartingale).unwrap().total(), dec!(4.07));
    assert_eq!(plan.get(Strategy::Incremental).unwrap().total(), dec!(2.6));
}

#[test]
fn test_oversized_base_bet_errors_without_panic() {
    let bases = [
        Decimal::MAX,
        Decimal::MAX / dec!(3),
        Decimal::from_i128_with_scale(10_i128.pow(28), 0),
    ];
    for base in bases {
        let err = generate(dec!(10.0), base).unwrap_err();
        assert!(matches!(err, ScheduleError::Overflow { .. }), "{base}");
    }
}
