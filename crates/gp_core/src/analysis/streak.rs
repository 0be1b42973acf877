//! # Streak Detection
//!
//! Baseline-relative streaks in total yardage.
//!
//! ## Ordering contract
//!
//! Games must be supplied **most recent first** (descending by date). The
//! current streak is read from the front of the slice. The longest consistent
//! streak is the longest run anywhere in the slice, so it does not depend on
//! direction. Use [`crate::models::order_most_recent_first`] when the caller
//! cannot guarantee the order.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

use super::stats::{column, mean, present};
use crate::config::{default_config, AnalyticsConfig};
use crate::models::{is_most_recent_first, GameStatRecord};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakType {
    AboveBaseline,
    BelowBaseline,
    Average,
    #[default]
    None,
}

impl StreakType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StreakType::AboveBaseline => "above_baseline",
            StreakType::BelowBaseline => "below_baseline",
            StreakType::Average => "average",
            StreakType::None => "none",
        }
    }
}

impl fmt::Display for StreakType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StreakAnalysis {
    pub current_streak_type: StreakType,
    pub current_streak_length: u32,
    pub longest_consistent_streak: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct StreakAnalyzer<'a> {
    config: &'a AnalyticsConfig,
}

impl Default for StreakAnalyzer<'static> {
    fn default() -> Self {
        Self::new(default_config())
    }
}

impl<'a> StreakAnalyzer<'a> {
    pub fn new(config: &'a AnalyticsConfig) -> Self {
        Self { config }
    }

    /// Analyze `games`, most recent first.
    pub fn analyze(&self, games: &[GameStatRecord]) -> StreakAnalysis {
        if !is_most_recent_first(games) {
            warn!("Streak analysis received games in ascending date order; current streak reads the oldest game");
        }

        let yards = column(games, |g| g.total_yards);
        let known = present(&yards);
        if known.is_empty() {
            return StreakAnalysis::default();
        }

        let avg = mean(&known);
        let current_streak_type = self.classify(yards.first().copied().flatten(), avg);
        let current_streak_length = match current_streak_type {
            StreakType::AboveBaseline | StreakType::BelowBaseline => yards
                .iter()
                .take_while(|y| self.classify(**y, avg) == current_streak_type)
                .count() as u32,
            StreakType::Average | StreakType::None => 0,
        };

        let consistent_floor = avg * self.config.baseline.consistent_ratio;
        let longest_consistent_streak = longest_run(&yards, |y| y >= consistent_floor);

        debug!(
            "Streak: {} x{} (longest consistent {})",
            current_streak_type, current_streak_length, longest_consistent_streak
        );

        StreakAnalysis { current_streak_type, current_streak_length, longest_consistent_streak }
    }

    fn classify(&self, yards: Option<f64>, avg: f64) -> StreakType {
        let Some(yards) = yards else {
            return StreakType::None;
        };
        let baseline = &self.config.baseline;
        if yards >= avg * baseline.streak_above_ratio {
            StreakType::AboveBaseline
        } else if yards <= avg * baseline.streak_below_ratio {
            StreakType::BelowBaseline
        } else {
            StreakType::Average
        }
    }
}

/// Longest run of consecutive known values satisfying `predicate`.
fn longest_run<P>(values: &[Option<f64>], predicate: P) -> u32
where
    P: Fn(f64) -> bool,
{
    let mut current = 0u32;
    let mut longest = 0u32;
    for value in values {
        if value.is_some_and(&predicate) {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yards(values: &[Option<f64>]) -> Vec<GameStatRecord> {
        values
            .iter()
            .map(|&y| GameStatRecord { total_yards: y, ..Default::default() })
            .collect()
    }

    #[test]
    fn test_empty_is_none() {
        let streak = StreakAnalyzer::default().analyze(&[]);
        assert_eq!(streak.current_streak_type, StreakType::None);
        assert_eq!(streak.current_streak_length, 0);
        assert_eq!(streak.longest_consistent_streak, 0);
    }

    #[test]
    fn test_above_baseline_streak() {
        // mean 350: above >= 315, below <= 245, consistent >= 280
        let games = yards(&[Some(420.0), Some(380.0), Some(300.0), Some(400.0), Some(250.0)]);
        let streak = StreakAnalyzer::default().analyze(&games);
        assert_eq!(streak.current_streak_type, StreakType::AboveBaseline);
        assert_eq!(streak.current_streak_length, 2);
        assert_eq!(streak.longest_consistent_streak, 4);
    }

    #[test]
    fn test_below_baseline_streak() {
        // mean 300: below <= 210
        let games = yards(&[Some(200.0), Some(150.0), Some(400.0), Some(450.0)]);
        let streak = StreakAnalyzer::default().analyze(&games);
        assert_eq!(streak.current_streak_type, StreakType::BelowBaseline);
        assert_eq!(streak.current_streak_length, 2);
        assert_eq!(streak.longest_consistent_streak, 2);
    }

    #[test]
    fn test_average_streak_is_not_accumulated() {
        // mean 300: 250 sits between 210 and 270
        let games = yards(&[Some(250.0), Some(260.0), Some(390.0)]);
        let streak = StreakAnalyzer::default().analyze(&games);
        assert_eq!(streak.current_streak_type, StreakType::Average);
        assert_eq!(streak.current_streak_length, 0);
        assert_eq!(streak.longest_consistent_streak, 3);
    }

    #[test]
    fn test_unknown_yardage_breaks_streaks() {
        let games = yards(&[Some(400.0), None, Some(400.0), Some(400.0)]);
        let streak = StreakAnalyzer::default().analyze(&games);
        assert_eq!(streak.current_streak_type, StreakType::AboveBaseline);
        assert_eq!(streak.current_streak_length, 1);
        assert_eq!(streak.longest_consistent_streak, 2);

        let games = yards(&[None, Some(400.0)]);
        let streak = StreakAnalyzer::default().analyze(&games);
        assert_eq!(streak.current_streak_type, StreakType::None);
        assert_eq!(streak.current_streak_length, 0);
        assert_eq!(streak.longest_consistent_streak, 1);
    }

    #[test]
    fn test_longest_streak_ignores_direction() {
        let forward = yards(&[Some(100.0), Some(400.0), Some(410.0), Some(90.0), Some(390.0)]);
        let mut backward = forward.clone();
        backward.reverse();
        let analyzer = StreakAnalyzer::default();
        assert_eq!(
            analyzer.analyze(&forward).longest_consistent_streak,
            analyzer.analyze(&backward).longest_consistent_streak
        );
    }

    #[test]
    fn test_streak_type_serializes_snake_case() {
        let json = serde_json::to_string(&StreakType::AboveBaseline).unwrap();
        assert_eq!(json, "\"above_baseline\"");
        assert_eq!(StreakType::None.to_string(), "none");
    }
}
