//! Property-based tests for report invariants
//!
//! - Percentages stay within [0, 100]
//! - No NaN or infinity ever reaches a report
//! - The longest consistent streak does not depend on game order
//! - Play distribution shares sum to 100 when any play was called

use gp_core::{
    ConsistencyReportBuilder, DefenseEfficiencyCalculator, GameStatRecord, MetricStatsCalculator,
    OffenseEfficiencyCalculator,
};
use proptest::prelude::*;

fn maybe(range: std::ops::Range<f64>) -> impl Strategy<Value = Option<f64>> {
    prop_oneof![1 => Just(None), 4 => range.prop_map(Some)]
}

fn game_strategy() -> impl Strategy<Value = GameStatRecord> {
    (
        maybe(0.0..600.0),
        maybe(0.0..60.0),
        maybe(0.0..16.0),
        maybe(0.0..6.0),
        maybe(0.0..90.0),
        maybe(0.0..45.0),
        maybe(0.0..10.0),
    )
        .prop_map(|(yards, points, drives, three_and_outs, plays, attempts, sacks)| {
            GameStatRecord {
                total_yards: yards,
                points_scored: points,
                total_drives: drives,
                three_and_outs,
                total_plays: plays,
                rushing_attempts: attempts,
                passing_attempts: attempts.map(|a| 45.0 - a),
                opponent_passing_attempts: attempts,
                sacks,
                ..Default::default()
            }
        })
}

fn all_finite(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Number(n) => n.as_f64().is_some_and(f64::is_finite),
        serde_json::Value::Array(items) => items.iter().all(all_finite),
        serde_json::Value::Object(map) => map.values().all(all_finite),
        _ => true,
    }
}

proptest! {
    #[test]
    fn prop_percentage_above_bounded(values in prop::collection::vec(-1e4f64..1e4, 1..40)) {
        let sample: Vec<Option<f64>> = values.into_iter().map(Some).collect();
        let stats = MetricStatsCalculator::default().calculate(&sample);
        prop_assert!((0.0..=100.0).contains(&stats.baseline_performance.percentage_above));
        prop_assert!(stats.coefficient_of_variation >= 0.0);
    }

    #[test]
    fn prop_reports_are_finite(games in prop::collection::vec(game_strategy(), 0..20)) {
        let consistency = serde_json::to_value(ConsistencyReportBuilder::default().build(&games)).unwrap();
        let offense = serde_json::to_value(OffenseEfficiencyCalculator::new().calculate(&games)).unwrap();
        let defense = serde_json::to_value(DefenseEfficiencyCalculator::new().calculate(&games)).unwrap();
        prop_assert!(all_finite(&consistency));
        prop_assert!(all_finite(&offense));
        prop_assert!(all_finite(&defense));
    }

    #[test]
    fn prop_longest_streak_ignores_order(games in prop::collection::vec(game_strategy(), 0..20)) {
        let mut reversed = games.clone();
        reversed.reverse();
        let builder = ConsistencyReportBuilder::default();
        let forward = builder.build(&games).performance_reliability.streak_analysis;
        let backward = builder.build(&reversed).performance_reliability.streak_analysis;
        prop_assert_eq!(forward.longest_consistent_streak, backward.longest_consistent_streak);
    }

    #[test]
    fn prop_play_distribution_sums_to_hundred(games in prop::collection::vec(game_strategy(), 1..20)) {
        let split = OffenseEfficiencyCalculator::new().calculate(&games).play_distribution;
        // compare in whole tenths so float representation cannot mask a 0.1 drift
        let tenths = |v: f64| (v * 10.0).round() as i64;
        let total = tenths(split.rushing_percentage) + tenths(split.passing_percentage);
        prop_assert!(total == 0 || total == 1000, "split {:?}", split);
    }
}
