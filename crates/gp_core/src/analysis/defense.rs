//! # Defensive Efficiency
//!
//! Mirrors [`super::offense`] from the opponent's side of each game record.
//! Same aggregate-then-divide policy with unknown values counted as zero.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::stats::{
    column, count_where, guarded_rate, guarded_ratio, per_game, present, round1, sum_coalesced,
};
use crate::models::GameStatRecord;

/// Upper clamp of each passer-rating component.
const PASSER_RATING_COMPONENT_MAX: f64 = 2.375;

/// Opponent score a defense has to stay below to count as a strong outing.
const HOLD_UNDER_POINTS: f64 = 20.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct YardsAllowed {
    pub total_per_game: f64,
    pub rushing_per_game: f64,
    pub passing_per_game: f64,
    pub first_downs_per_game: f64,
    pub yards_per_play: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringDefense {
    pub points_per_game: f64,
    pub touchdowns_allowed: f64,
    pub field_goals_allowed: f64,
    pub safeties: f64,
    pub shutouts: u32,
    pub games_under_20_points: u32,
    pub red_zone_touchdown_rate: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PressureStats {
    pub sacks_per_game: f64,
    pub qb_hits_per_game: f64,
    pub tackles_for_loss: f64,
    pub pressure_rate: f64,
    pub blitz_rate: f64,
    pub hurry_rate: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TurnoverStats {
    pub interceptions_per_game: f64,
    pub fumbles_forced_per_game: f64,
    pub fumbles_recovered_per_game: f64,
    pub total_takeaways: f64,
    pub turnover_rate: f64,
    pub points_off_turnovers_per_game: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SituationalStats {
    pub third_down_stop_rate: f64,
    pub fourth_down_stop_rate: f64,
    pub red_zone_stop_rate: f64,
    pub goal_line_stop_rate: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DefensiveEfficiency {
    pub yards_per_rush_allowed: f64,
    pub yards_per_pass_allowed: f64,
    pub qb_rating_allowed: f64,
    pub completion_percentage_allowed: f64,
    pub big_plays_allowed: f64,
    pub three_and_out_forced_rate: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DefenseReport {
    pub yards_allowed: YardsAllowed,
    pub scoring_defense: ScoringDefense,
    pub pressure_stats: PressureStats,
    pub turnover_stats: TurnoverStats,
    pub situational_stats: SituationalStats,
    pub efficiency_metrics: DefensiveEfficiency,
}

/// Aggregate opponent passing line for [`passer_rating`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PassingLine {
    pub attempts: f64,
    pub completions: f64,
    pub yards: f64,
    pub touchdowns: f64,
    pub interceptions: f64,
}

/// NFL passer rating (0 to 158.3), unrounded. Zero attempts rate 0.
pub fn passer_rating(line: &PassingLine) -> f64 {
    if line.attempts <= 0.0 {
        return 0.0;
    }
    let clamp = |v: f64| v.clamp(0.0, PASSER_RATING_COMPONENT_MAX);
    let att = line.attempts;

    let a = clamp((line.completions / att - 0.3) * 5.0);
    let b = clamp((line.yards / att - 3.0) * 0.25);
    let c = clamp(line.touchdowns / att * 20.0);
    let d = clamp(PASSER_RATING_COMPONENT_MAX - line.interceptions / att * 25.0);

    (a + b + c + d) / 6.0 * 100.0
}

/// Share of attempts the defense stopped, as a percentage.
fn stop_rate(attempts: f64, successes: f64) -> f64 {
    guarded_rate(attempts - successes, attempts)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefenseEfficiencyCalculator;

impl DefenseEfficiencyCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate(&self, games: &[GameStatRecord]) -> DefenseReport {
        debug!("Defensive efficiency over {} games", games.len());
        let n = games.len();
        let sum = |field: fn(&GameStatRecord) -> Option<f64>| sum_coalesced(games, field);
        let per = |field: fn(&GameStatRecord) -> Option<f64>| round1(per_game(sum(field), n));

        let opp_total_yards = sum(|g| g.opponent_total_yards);
        let opp_rushing_yards = sum(|g| g.opponent_rushing_yards);
        let opp_passing_yards = sum(|g| g.opponent_passing_yards);
        let opp_total_plays = sum(|g| g.opponent_total_plays);
        let opp_drives = sum(|g| g.opponent_drives);
        let opp_rushing_attempts = sum(|g| g.opponent_rushing_attempts);
        let opp_passing_attempts = sum(|g| g.opponent_passing_attempts);
        let opp_completions = sum(|g| g.opponent_completions);
        let opp_red_zone_attempts = sum(|g| g.opponent_red_zone_attempts);

        let sacks = sum(|g| g.sacks);
        let interceptions = sum(|g| g.interceptions);
        let fumbles_recovered = sum(|g| g.fumbles_recovered);
        let dropbacks = opp_passing_attempts + sacks;
        let takeaways = interceptions + fumbles_recovered;

        let opponent_points = present(&column(games, |g| g.opponent_points));

        let passing_line = PassingLine {
            attempts: opp_passing_attempts,
            completions: opp_completions,
            yards: opp_passing_yards,
            touchdowns: sum(|g| g.opponent_passing_touchdowns),
            interceptions,
        };

        DefenseReport {
            yards_allowed: YardsAllowed {
                total_per_game: round1(per_game(opp_total_yards, n)),
                rushing_per_game: round1(per_game(opp_rushing_yards, n)),
                passing_per_game: round1(per_game(opp_passing_yards, n)),
                first_downs_per_game: per(|g| g.opponent_first_downs),
                yards_per_play: round1(guarded_ratio(opp_total_yards, opp_total_plays)),
            },
            scoring_defense: ScoringDefense {
                points_per_game: per(|g| g.opponent_points),
                touchdowns_allowed: round1(sum(|g| g.opponent_touchdowns)),
                field_goals_allowed: round1(sum(|g| g.opponent_field_goals)),
                safeties: round1(sum(|g| g.safeties)),
                shutouts: count_where(&opponent_points, |p| p == 0.0),
                games_under_20_points: count_where(&opponent_points, |p| p < HOLD_UNDER_POINTS),
                red_zone_touchdown_rate: round1(guarded_rate(
                    sum(|g| g.opponent_red_zone_touchdowns),
                    opp_red_zone_attempts,
                )),
            },
            pressure_stats: PressureStats {
                sacks_per_game: round1(per_game(sacks, n)),
                qb_hits_per_game: per(|g| g.qb_hits),
                tackles_for_loss: round1(sum(|g| g.tackles_for_loss)),
                pressure_rate: round1(guarded_rate(sum(|g| g.pressures), dropbacks)),
                blitz_rate: round1(guarded_rate(sum(|g| g.blitzes), dropbacks)),
                hurry_rate: round1(guarded_rate(sum(|g| g.hurries), dropbacks)),
            },
            turnover_stats: TurnoverStats {
                interceptions_per_game: round1(per_game(interceptions, n)),
                fumbles_forced_per_game: per(|g| g.fumbles_forced),
                fumbles_recovered_per_game: round1(per_game(fumbles_recovered, n)),
                total_takeaways: round1(takeaways),
                turnover_rate: round1(guarded_rate(takeaways, opp_drives)),
                points_off_turnovers_per_game: per(|g| g.points_off_turnovers),
            },
            situational_stats: SituationalStats {
                third_down_stop_rate: round1(stop_rate(
                    sum(|g| g.opponent_third_down_attempts),
                    sum(|g| g.opponent_third_down_conversions),
                )),
                fourth_down_stop_rate: round1(stop_rate(
                    sum(|g| g.opponent_fourth_down_attempts),
                    sum(|g| g.opponent_fourth_down_conversions),
                )),
                red_zone_stop_rate: round1(stop_rate(
                    opp_red_zone_attempts,
                    sum(|g| g.opponent_red_zone_scores),
                )),
                goal_line_stop_rate: round1(stop_rate(
                    sum(|g| g.opponent_goal_line_attempts),
                    sum(|g| g.opponent_goal_line_scores),
                )),
            },
            efficiency_metrics: DefensiveEfficiency {
                yards_per_rush_allowed: round1(guarded_ratio(opp_rushing_yards, opp_rushing_attempts)),
                yards_per_pass_allowed: round1(guarded_ratio(opp_passing_yards, opp_passing_attempts)),
                qb_rating_allowed: round1(passer_rating(&passing_line)),
                completion_percentage_allowed: round1(guarded_rate(opp_completions, opp_passing_attempts)),
                big_plays_allowed: round1(sum(|g| g.opponent_plays_20_plus_yards)),
                three_and_out_forced_rate: round1(guarded_rate(
                    sum(|g| g.opponent_three_and_outs),
                    opp_drives,
                )),
            },
        }
    }
}
