//! # Analysis Module
//!
//! Consistency and efficiency calculators over per-game team records.
//!
//! ## Submodules
//!
//! - `stats` - Shared statistics primitives (mean, median, std dev, CV, guarded ratios)
//! - `metric_stats` - Per-metric statistics and volatility rating
//! - `scoring` - Points distribution, quarter and reliability analysis
//! - `game_control` - Possession, lead time and drive success
//! - `streak` - Baseline-relative yardage streaks
//! - `consistency` - Composite consistency report
//! - `offense` / `defense` - Season efficiency rates
//!
//! Every calculator is a pure function of its input slice and an immutable
//! [`crate::config::AnalyticsConfig`].

pub mod consistency;
pub mod defense;
pub mod game_control;
pub mod metric_stats;
pub mod offense;
pub mod scoring;
pub mod stats;
pub mod streak;

pub use consistency::{
    ConsistencyReport, ConsistencyReportBuilder, PerformanceBaseline, PerformanceReliability,
    YardageConsistency,
};
pub use defense::{passer_rating, DefenseEfficiencyCalculator, DefenseReport, PassingLine};
pub use game_control::{GameControl, GameControlAnalyzer};
pub use metric_stats::{MetricStats, MetricStatsCalculator, SpreadStats, VolatilityRating};
pub use offense::{OffenseEfficiencyCalculator, OffenseReport};
pub use scoring::{ScoringConsistency, ScoringConsistencyAnalyzer};
pub use streak::{StreakAnalysis, StreakAnalyzer, StreakType};
