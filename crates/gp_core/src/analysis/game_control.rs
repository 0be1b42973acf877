//! Possession, lead time and drive success.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::metric_stats::MetricStatsCalculator;
use super::stats::{column, count_where, guarded_rate, present, round1, sum_coalesced};
use crate::config::{default_config, AnalyticsConfig};
use crate::models::GameStatRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PossessionStats {
    pub mean: f64,
    pub std_dev: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadStats {
    pub mean: f64,
    pub games_leading_half: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DriveSuccess {
    pub three_and_out_percentage: f64,
    pub scoring_drive_percentage: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GameControl {
    pub time_of_possession: PossessionStats,
    pub lead_percentage: LeadStats,
    pub drive_success: DriveSuccess,
}

#[derive(Debug, Clone, Copy)]
pub struct GameControlAnalyzer<'a> {
    config: &'a AnalyticsConfig,
}

impl Default for GameControlAnalyzer<'static> {
    fn default() -> Self {
        Self::new(default_config())
    }
}

impl<'a> GameControlAnalyzer<'a> {
    pub fn new(config: &'a AnalyticsConfig) -> Self {
        Self { config }
    }

    pub fn analyze(&self, games: &[GameStatRecord]) -> GameControl {
        debug!("Game control over {} games", games.len());
        let metric = MetricStatsCalculator::new(self.config);

        let possession = metric.calculate_field(games, |g| g.time_of_possession);

        let lead_values = column(games, |g| g.time_with_lead_percentage);
        let lead = metric.calculate(&lead_values);
        let leading_half = self.config.control.leading_half_percentage;

        // Drive rates are season totals over season totals, not per-game averages
        let drives = sum_coalesced(games, |g| g.total_drives);
        let three_and_outs = sum_coalesced(games, |g| g.three_and_outs);
        let scoring_drives = sum_coalesced(games, |g| g.scoring_drives);

        GameControl {
            time_of_possession: PossessionStats {
                mean: possession.mean,
                std_dev: possession.std_dev,
            },
            lead_percentage: LeadStats {
                mean: lead.mean,
                games_leading_half: count_where(&present(&lead_values), |v| v >= leading_half),
            },
            drive_success: DriveSuccess {
                three_and_out_percentage: round1(guarded_rate(three_and_outs, drives)),
                scoring_drive_percentage: round1(guarded_rate(scoring_drives, drives)),
            },
        }
    }
}
