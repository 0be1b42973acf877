//! Points and quarter-level scoring consistency.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::metric_stats::{MetricStatsCalculator, SpreadStats};
use super::stats::{column, count_where, guarded_rate, mean, present, round1, sum_coalesced};
use crate::config::{default_config, AnalyticsConfig};
use crate::models::GameStatRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringDistribution {
    pub games_20_plus: u32,
    pub games_30_plus: u32,
    pub games_40_plus: u32,
    pub games_under_10: u32,
    /// Sum of scoreless quarters over every game (unknown counts as 0)
    pub total_scoreless_quarters: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct QuarterStats {
    pub mean: f64,
    pub std_dev: f64,
    pub coefficient_of_variation: f64,
    pub scoreless_games: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct QuarterConsistency {
    pub q1: QuarterStats,
    pub q2: QuarterStats,
    pub q3: QuarterStats,
    pub q4: QuarterStats,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringReliability {
    pub games_within_10_of_mean: u32,
    pub games_within_7_of_mean: u32,
    pub consistency_percentage: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringConsistency {
    pub points_per_game: SpreadStats,
    pub scoring_distribution: ScoringDistribution,
    pub quarter_consistency: QuarterConsistency,
    pub scoring_reliability: ScoringReliability,
}

#[derive(Debug, Clone, Copy)]
pub struct ScoringConsistencyAnalyzer<'a> {
    config: &'a AnalyticsConfig,
}

impl Default for ScoringConsistencyAnalyzer<'static> {
    fn default() -> Self {
        Self::new(default_config())
    }
}

impl<'a> ScoringConsistencyAnalyzer<'a> {
    pub fn new(config: &'a AnalyticsConfig) -> Self {
        Self { config }
    }

    pub fn analyze(&self, games: &[GameStatRecord]) -> ScoringConsistency {
        let points =
            MetricStatsCalculator::new(self.config).calculate_field(games, |g| g.points_scored);
        self.analyze_with_points(games, points.spread())
    }

    /// Same as [`analyze`](Self::analyze) but reuses already computed points statistics.
    pub fn analyze_with_points(
        &self,
        games: &[GameStatRecord],
        points_per_game: SpreadStats,
    ) -> ScoringConsistency {
        let points = present(&column(games, |g| g.points_scored));
        debug!("Scoring consistency over {} games ({} with points)", games.len(), points.len());

        ScoringConsistency {
            points_per_game,
            scoring_distribution: self.distribution(games, &points),
            quarter_consistency: self.quarters(games),
            scoring_reliability: self.reliability(&points),
        }
    }

    fn distribution(&self, games: &[GameStatRecord], points: &[f64]) -> ScoringDistribution {
        let thresholds = &self.config.scoring;
        let [twenty, thirty, forty] = thresholds.high_scoring;

        ScoringDistribution {
            games_20_plus: count_where(points, |p| p >= twenty),
            games_30_plus: count_where(points, |p| p >= thirty),
            games_40_plus: count_where(points, |p| p >= forty),
            games_under_10: count_where(points, |p| p < thresholds.low_scoring),
            total_scoreless_quarters: sum_coalesced(games, |g| g.scoreless_quarters)
                .max(0.0)
                .round() as u32,
        }
    }

    fn quarters(&self, games: &[GameStatRecord]) -> QuarterConsistency {
        QuarterConsistency {
            q1: self.quarter(games, |g| g.q1_points),
            q2: self.quarter(games, |g| g.q2_points),
            q3: self.quarter(games, |g| g.q3_points),
            q4: self.quarter(games, |g| g.q4_points),
        }
    }

    fn quarter<F>(&self, games: &[GameStatRecord], field: F) -> QuarterStats
    where
        F: Fn(&GameStatRecord) -> Option<f64>,
    {
        let values = column(games, field);
        let spread = MetricStatsCalculator::new(self.config).calculate(&values).spread();
        QuarterStats {
            mean: spread.mean,
            std_dev: spread.std_dev,
            coefficient_of_variation: spread.coefficient_of_variation,
            scoreless_games: count_where(&present(&values), |q| q == 0.0),
        }
    }

    fn reliability(&self, points: &[f64]) -> ScoringReliability {
        let thresholds = &self.config.scoring;
        let avg = mean(points);

        let games_within_10_of_mean =
            count_where(points, |p| (p - avg).abs() <= thresholds.wide_window);
        let games_within_7_of_mean =
            count_where(points, |p| (p - avg).abs() <= thresholds.narrow_window);

        ScoringReliability {
            games_within_10_of_mean,
            games_within_7_of_mean,
            consistency_percentage: round1(guarded_rate(
                games_within_10_of_mean as f64,
                points.len() as f64,
            )),
        }
    }
}
