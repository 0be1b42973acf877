//! # gp_core - Deterministic Team Consistency Analytics
//!
//! Computes consistency and efficiency reports from per-game team records.
//!
//! ## Features
//! - Per-metric mean, median, population std dev, CV and volatility rating
//! - Scoring, game control and yardage streak analysis
//! - Composite 0-100 consistency score
//! - Offensive and defensive season efficiency rates
//! - JSON API with versioned request/response envelopes
//!
//! Every calculator is pure: the same games and configuration always produce
//! the same report, down to the serialized bytes.
//!
//! ```rust
//! use gp_core::{ConsistencyReportBuilder, GameStatRecord};
//!
//! let games: Vec<GameStatRecord> = [350.0, 300.0, 400.0]
//!     .into_iter()
//!     .map(|y| GameStatRecord { total_yards: Some(y), ..Default::default() })
//!     .collect();
//! let report = ConsistencyReportBuilder::default().build(&games);
//! assert_eq!(report.yardage.total_yards.mean, 350.0);
//! ```

// Struct initialization pattern used intentionally
#![allow(clippy::field_reassign_with_default)]

pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod models;


pub use analysis::{
    ConsistencyReport, ConsistencyReportBuilder, DefenseEfficiencyCalculator, DefenseReport,
    GameControlAnalyzer, MetricStats, MetricStatsCalculator, OffenseEfficiencyCalculator,
    OffenseReport, ScoringConsistencyAnalyzer, StreakAnalyzer, StreakType, VolatilityRating,
};
pub use api::{
    analyze_teams, batch_team_analytics_json, consistency_report_json, defense_report_json,
    offense_report_json, team_analytics_json, ApiError, ApiResponse, TeamAnalytics, TeamGames,
    SCHEMA_VERSION,
};
pub use config::AnalyticsConfig;
pub use error::{AnalyticsError, Result};
pub use models::{decode_rows, order_most_recent_first, GameStatRecord, RawGameRow};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_reports_are_deterministic() {
        let games: Vec<GameStatRecord> = (0..12)
            .map(|i| GameStatRecord {
                total_yards: Some(280.0 + (i * 37 % 150) as f64),
                points_scored: Some(10.0 + (i * 7 % 25) as f64),
                total_drives: Some(11.0),
                three_and_outs: Some((i % 4) as f64),
                ..Default::default()
            })
            .collect();

        let first = serde_json::to_string(&ConsistencyReportBuilder::default().build(&games)).unwrap();
        let second = serde_json::to_string(&ConsistencyReportBuilder::default().build(&games)).unwrap();
        assert_eq!(first, second);
    }
}
