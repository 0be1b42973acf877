//! # Consistency Report
//!
//! Composes yardage statistics, scoring consistency, game control and streaks
//! into one report with a composite 0-100 consistency score:
//!
//! ```text
//! score = (100 - yards_cv) * 0.4 + (100 - points_cv) * 0.4 + yards_baseline_pct * 0.2
//! ```
//!
//! The weights come from [`crate::config::CompositeWeights`]. When only one
//! of total yards and points has known values, its terms are divided by
//! their own weight and scaled back to the full weight.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::game_control::{GameControl, GameControlAnalyzer};
use super::metric_stats::{MetricStats, MetricStatsCalculator};
use super::scoring::{ScoringConsistency, ScoringConsistencyAnalyzer};
use super::stats::{column, count_where, guarded_ratio, present, round1};
use super::streak::{StreakAnalysis, StreakAnalyzer};
use crate::config::{default_config, AnalyticsConfig};
use crate::models::GameStatRecord;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YardageConsistency {
    pub total_yards: MetricStats,
    pub rushing_yards: MetricStats,
    pub passing_yards: MetricStats,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceBaseline {
    pub games_300_plus: u32,
    pub games_400_plus: u32,
    pub games_under_200: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReliability {
    pub consistency_score: f64,
    pub performance_baseline: PerformanceBaseline,
    pub streak_analysis: StreakAnalysis,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyReport {
    pub games_analyzed: u32,
    pub yardage: YardageConsistency,
    pub scoring: ScoringConsistency,
    pub game_control: GameControl,
    pub performance_reliability: PerformanceReliability,
}

#[derive(Debug, Clone, Copy)]
pub struct ConsistencyReportBuilder<'a> {
    config: &'a AnalyticsConfig,
}

impl Default for ConsistencyReportBuilder<'static> {
    fn default() -> Self {
        Self::new(default_config())
    }
}

impl<'a> ConsistencyReportBuilder<'a> {
    pub fn new(config: &'a AnalyticsConfig) -> Self {
        Self { config }
    }

    /// Build the report for `games`, most recent first.
    pub fn build(&self, games: &[GameStatRecord]) -> ConsistencyReport {
        debug!("Building consistency report for {} games", games.len());
        let metric = MetricStatsCalculator::new(self.config);

        let yardage = YardageConsistency {
            total_yards: metric.calculate_field(games, |g| g.total_yards),
            rushing_yards: metric.calculate_field(games, |g| g.rushing_yards),
            passing_yards: metric.calculate_field(games, |g| g.passing_yards),
        };
        let points = metric.calculate_field(games, |g| g.points_scored);

        let scoring =
            ScoringConsistencyAnalyzer::new(self.config).analyze_with_points(games, points.spread());
        let game_control = GameControlAnalyzer::new(self.config).analyze(games);

        let performance_reliability = PerformanceReliability {
            consistency_score: self.consistency_score(&yardage.total_yards, &points),
            performance_baseline: self.performance_baseline(games),
            streak_analysis: StreakAnalyzer::new(self.config).analyze(games),
        };

        ConsistencyReport {
            games_analyzed: games.len() as u32,
            yardage,
            scoring,
            game_control,
            performance_reliability,
        }
    }

    /// Composite score from already computed yardage and points statistics.
    ///
    /// A metric with no known values drops out and the remaining terms are
    /// rescaled to the full weight. Zero when neither metric has data.
    pub fn consistency_score(&self, total_yards: &MetricStats, points: &MetricStats) -> f64 {
        let weights = &self.config.weights;
        let yards_weight = weights.yards_stability + weights.baseline_hit_rate;
        let total_weight = yards_weight + weights.points_stability;

        let yards_part = (100.0 - total_yards.coefficient_of_variation) * weights.yards_stability
            + total_yards.baseline_performance.percentage_above * weights.baseline_hit_rate;
        let points_part = (100.0 - points.coefficient_of_variation) * weights.points_stability;

        let score = match (total_yards.is_available(), points.is_available()) {
            (true, true) => yards_part + points_part,
            (true, false) => guarded_ratio(yards_part, yards_weight) * total_weight,
            (false, true) => guarded_ratio(points_part, weights.points_stability) * total_weight,
            (false, false) => 0.0,
        };
        round1(score)
    }

    fn performance_baseline(&self, games: &[GameStatRecord]) -> PerformanceBaseline {
        let thresholds = &self.config.yardage;
        let yards = present(&column(games, |g| g.total_yards));
        PerformanceBaseline {
            games_300_plus: count_where(&yards, |y| y >= thresholds.solid),
            games_400_plus: count_where(&yards, |y| y >= thresholds.explosive),
            games_under_200: count_where(&yards, |y| y < thresholds.poor),
        }
    }
}
