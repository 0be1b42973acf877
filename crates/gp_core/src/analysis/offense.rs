//! # Offensive Efficiency
//!
//! Season-level offensive rates. Every figure aggregates first and divides
//! second: `Σyards / Σplays`, never the mean of per-game yards-per-play.
//! Unknown fields count as zero and per-game figures divide by the number of
//! games supplied.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::stats::{guarded_rate, guarded_ratio, per_game, round1, sum_coalesced};
use crate::models::GameStatRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct YardsPerGame {
    pub total: f64,
    pub rushing: f64,
    pub passing: f64,
    pub first_downs: f64,
    /// Red-zone trips per game
    pub red_zone: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OffensiveEfficiency {
    pub yards_per_play: f64,
    pub rushing_yards_per_attempt: f64,
    pub passing_yards_per_attempt: f64,
    pub first_down_rate: f64,
    pub third_down_rate: f64,
    pub red_zone_rate: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayDistribution {
    pub rushing_percentage: f64,
    pub passing_percentage: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OffensiveScoring {
    pub points_per_game: f64,
    pub touchdowns_per_game: f64,
    pub field_goals_per_game: f64,
    pub points_per_drive: f64,
    pub red_zone_touchdown_rate: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DriveMetrics {
    pub avg_drive_time: f64,
    pub avg_plays_per_drive: f64,
    pub avg_yards_per_drive: f64,
    pub three_and_out_rate: f64,
    pub turnover_rate: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Explosiveness {
    pub plays_20_plus_yards: f64,
    pub plays_40_plus_yards: f64,
    pub explosive_play_rate: f64,
    pub avg_yards_per_completion: f64,
    pub big_play_touchdown_rate: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OffenseReport {
    pub yards_per_game: YardsPerGame,
    pub efficiency: OffensiveEfficiency,
    pub play_distribution: PlayDistribution,
    pub scoring: OffensiveScoring,
    pub drive_metrics: DriveMetrics,
    pub explosiveness: Explosiveness,
}

/// Season sums, unknown values counted as zero.
#[derive(Debug, Clone, Copy, Default)]
struct OffenseTotals {
    games: usize,
    total_yards: f64,
    rushing_yards: f64,
    passing_yards: f64,
    points: f64,
    first_downs: f64,
    total_plays: f64,
    rushing_attempts: f64,
    passing_attempts: f64,
    completions: f64,
    third_down_attempts: f64,
    third_down_conversions: f64,
    red_zone_attempts: f64,
    red_zone_scores: f64,
    red_zone_touchdowns: f64,
    touchdowns: f64,
    field_goals: f64,
    drives: f64,
    time_of_possession: f64,
    three_and_outs: f64,
    turnovers: f64,
    plays_20_plus: f64,
    plays_40_plus: f64,
    big_play_touchdowns: f64,
}

impl OffenseTotals {
    fn collect(games: &[GameStatRecord]) -> Self {
        Self {
            games: games.len(),
            total_yards: sum_coalesced(games, |g| g.total_yards),
            rushing_yards: sum_coalesced(games, |g| g.rushing_yards),
            passing_yards: sum_coalesced(games, |g| g.passing_yards),
            points: sum_coalesced(games, |g| g.points_scored),
            first_downs: sum_coalesced(games, |g| g.first_downs),
            total_plays: sum_coalesced(games, |g| g.total_plays),
            rushing_attempts: sum_coalesced(games, |g| g.rushing_attempts),
            passing_attempts: sum_coalesced(games, |g| g.passing_attempts),
            completions: sum_coalesced(games, |g| g.completions),
            third_down_attempts: sum_coalesced(games, |g| g.third_down_attempts),
            third_down_conversions: sum_coalesced(games, |g| g.third_down_conversions),
            red_zone_attempts: sum_coalesced(games, |g| g.red_zone_attempts),
            red_zone_scores: sum_coalesced(games, |g| g.red_zone_scores),
            red_zone_touchdowns: sum_coalesced(games, |g| g.red_zone_touchdowns),
            touchdowns: sum_coalesced(games, |g| g.touchdowns),
            field_goals: sum_coalesced(games, |g| g.field_goals),
            drives: sum_coalesced(games, |g| g.total_drives),
            time_of_possession: sum_coalesced(games, |g| g.time_of_possession),
            three_and_outs: sum_coalesced(games, |g| g.three_and_outs),
            turnovers: sum_coalesced(games, |g| g.turnovers),
            plays_20_plus: sum_coalesced(games, |g| g.plays_20_plus_yards),
            plays_40_plus: sum_coalesced(games, |g| g.plays_40_plus_yards),
            big_play_touchdowns: sum_coalesced(games, |g| g.big_play_touchdowns),
        }
    }

    fn per_game(&self, total: f64) -> f64 {
        round1(per_game(total, self.games))
    }
}

/// Stateless; offensive rates have no tunable thresholds.
#[derive(Debug, Clone, Copy, Default)]
pub struct OffenseEfficiencyCalculator;

impl OffenseEfficiencyCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate(&self, games: &[GameStatRecord]) -> OffenseReport {
        debug!("Offensive efficiency over {} games", games.len());
        let t = OffenseTotals::collect(games);

        OffenseReport {
            yards_per_game: YardsPerGame {
                total: t.per_game(t.total_yards),
                rushing: t.per_game(t.rushing_yards),
                passing: t.per_game(t.passing_yards),
                first_downs: t.per_game(t.first_downs),
                red_zone: t.per_game(t.red_zone_attempts),
            },
            efficiency: OffensiveEfficiency {
                yards_per_play: round1(guarded_ratio(t.total_yards, t.total_plays)),
                rushing_yards_per_attempt: round1(guarded_ratio(t.rushing_yards, t.rushing_attempts)),
                passing_yards_per_attempt: round1(guarded_ratio(t.passing_yards, t.passing_attempts)),
                first_down_rate: round1(guarded_rate(t.first_downs, t.total_plays)),
                third_down_rate: round1(guarded_rate(t.third_down_conversions, t.third_down_attempts)),
                red_zone_rate: round1(guarded_rate(t.red_zone_scores, t.red_zone_attempts)),
            },
            play_distribution: play_distribution(t.rushing_attempts, t.passing_attempts),
            scoring: OffensiveScoring {
                points_per_game: t.per_game(t.points),
                touchdowns_per_game: t.per_game(t.touchdowns),
                field_goals_per_game: t.per_game(t.field_goals),
                points_per_drive: round1(guarded_ratio(t.points, t.drives)),
                red_zone_touchdown_rate: round1(guarded_rate(t.red_zone_touchdowns, t.red_zone_attempts)),
            },
            drive_metrics: DriveMetrics {
                avg_drive_time: round1(guarded_ratio(t.time_of_possession, t.drives)),
                avg_plays_per_drive: round1(guarded_ratio(t.total_plays, t.drives)),
                avg_yards_per_drive: round1(guarded_ratio(t.total_yards, t.drives)),
                three_and_out_rate: round1(guarded_rate(t.three_and_outs, t.drives)),
                turnover_rate: round1(guarded_rate(t.turnovers, t.drives)),
            },
            explosiveness: Explosiveness {
                plays_20_plus_yards: round1(t.plays_20_plus),
                plays_40_plus_yards: round1(t.plays_40_plus),
                explosive_play_rate: round1(guarded_rate(t.plays_20_plus, t.total_plays)),
                avg_yards_per_completion: round1(guarded_ratio(t.passing_yards, t.completions)),
                big_play_touchdown_rate: round1(guarded_rate(t.big_play_touchdowns, t.touchdowns)),
            },
        }
    }
}

/// Rushing and passing shares of called plays. The two shares always sum to
/// 100 unless no plays were called.
fn play_distribution(rushing_attempts: f64, passing_attempts: f64) -> PlayDistribution {
    let called = rushing_attempts + passing_attempts;
    if called <= 0.0 {
        return PlayDistribution::default();
    }
    // Round once so the passing share is derived from the published rushing share
    let rushing = round1(guarded_rate(rushing_attempts, called));
    PlayDistribution { rushing_percentage: rushing, passing_percentage: round1(100.0 - rushing) }
}
