//! Per-game team statistics as handed to the calculators.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One team's numbers for one game.
///
/// Every counter is optional: `None` means the value is unknown, which is not
/// the same thing as a recorded zero. Records are read-only inputs; nothing in
/// the engine mutates them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameStatRecord {
    pub game_id: Option<String>,
    /// Kickoff date, used only to check or establish the most-recent-first order
    pub played_on: Option<NaiveDate>,

    // Yardage and scoring
    pub total_yards: Option<f64>,
    pub rushing_yards: Option<f64>,
    pub passing_yards: Option<f64>,
    pub points_scored: Option<f64>,
    pub q1_points: Option<f64>,
    pub q2_points: Option<f64>,
    pub q3_points: Option<f64>,
    pub q4_points: Option<f64>,
    pub scoreless_quarters: Option<f64>,

    // Game control
    /// Minutes of possession
    pub time_of_possession: Option<f64>,
    /// Share of game clock spent leading, 0-100
    pub time_with_lead_percentage: Option<f64>,
    pub total_drives: Option<f64>,
    pub three_and_outs: Option<f64>,
    pub scoring_drives: Option<f64>,

    // Offense counters
    pub first_downs: Option<f64>,
    pub total_plays: Option<f64>,
    pub rushing_attempts: Option<f64>,
    pub passing_attempts: Option<f64>,
    pub completions: Option<f64>,
    pub third_down_attempts: Option<f64>,
    pub third_down_conversions: Option<f64>,
    pub red_zone_attempts: Option<f64>,
    pub red_zone_scores: Option<f64>,
    pub red_zone_touchdowns: Option<f64>,
    pub touchdowns: Option<f64>,
    pub field_goals: Option<f64>,
    pub turnovers: Option<f64>,
    pub plays_20_plus_yards: Option<f64>,
    pub plays_40_plus_yards: Option<f64>,
    /// Touchdowns scored on plays of 20+ yards
    pub big_play_touchdowns: Option<f64>,

    // Defense counters (what the opponent did against this team)
    pub opponent_total_yards: Option<f64>,
    pub opponent_rushing_yards: Option<f64>,
    pub opponent_passing_yards: Option<f64>,
    pub opponent_first_downs: Option<f64>,
    pub opponent_total_plays: Option<f64>,
    pub opponent_points: Option<f64>,
    pub opponent_touchdowns: Option<f64>,
    pub opponent_field_goals: Option<f64>,
    pub opponent_drives: Option<f64>,
    pub opponent_three_and_outs: Option<f64>,
    pub opponent_third_down_attempts: Option<f64>,
    pub opponent_third_down_conversions: Option<f64>,
    pub opponent_fourth_down_attempts: Option<f64>,
    pub opponent_fourth_down_conversions: Option<f64>,
    pub opponent_red_zone_attempts: Option<f64>,
    pub opponent_red_zone_scores: Option<f64>,
    pub opponent_red_zone_touchdowns: Option<f64>,
    pub opponent_goal_line_attempts: Option<f64>,
    pub opponent_goal_line_scores: Option<f64>,
    pub opponent_rushing_attempts: Option<f64>,
    pub opponent_passing_attempts: Option<f64>,
    pub opponent_completions: Option<f64>,
    pub opponent_passing_touchdowns: Option<f64>,
    pub opponent_plays_20_plus_yards: Option<f64>,

    // Defensive production
    pub safeties: Option<f64>,
    pub sacks: Option<f64>,
    pub qb_hits: Option<f64>,
    pub tackles_for_loss: Option<f64>,
    pub pressures: Option<f64>,
    pub blitzes: Option<f64>,
    pub hurries: Option<f64>,
    /// Interceptions made by this defense
    pub interceptions: Option<f64>,
    pub fumbles_forced: Option<f64>,
    pub fumbles_recovered: Option<f64>,
    pub points_off_turnovers: Option<f64>,
}

/// Sort games so the most recent is first.
///
/// Dated games come first in descending date order; undated games keep their
/// relative order after them.
pub fn order_most_recent_first(games: &mut [GameStatRecord]) {
    games.sort_by(|a, b| match (a.played_on, b.played_on) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// Whether the dated games in `games` never go forward in time.
///
/// Undated games are ignored, so a slice with fewer than two dates is always
/// considered ordered.
pub fn is_most_recent_first(games: &[GameStatRecord]) -> bool {
    let dates: Vec<NaiveDate> = games.iter().filter_map(|g| g.played_on).collect();
    dates.windows(2).all(|pair| pair[0] >= pair[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dated(id: &str, date: Option<(i32, u32, u32)>) -> GameStatRecord {
        GameStatRecord {
            game_id: Some(id.to_string()),
            played_on: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            ..Default::default()
        }
    }

    #[test]
    fn test_order_most_recent_first() {
        let mut games = vec![
            dated("week1", Some((2024, 9, 8))),
            dated("unknown", None),
            dated("week3", Some((2024, 9, 22))),
            dated("week2", Some((2024, 9, 15))),
        ];
        assert!(!is_most_recent_first(&games));

        order_most_recent_first(&mut games);
        let ids: Vec<&str> = games.iter().filter_map(|g| g.game_id.as_deref()).collect();
        assert_eq!(ids, vec!["week3", "week2", "week1", "unknown"]);
        assert!(is_most_recent_first(&games));
    }

    #[test]
    fn test_undated_games_are_ordered() {
        let games = vec![dated("a", None), dated("b", None)];
        assert!(is_most_recent_first(&games));
        assert!(is_most_recent_first(&[]));
    }

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let record: GameStatRecord =
            serde_json::from_str(r#"{"total_yards": 0, "played_on": "2024-10-06"}"#).unwrap();
        assert_eq!(record.total_yards, Some(0.0));
        assert_eq!(record.points_scored, None);
        assert_eq!(record.played_on, NaiveDate::from_ymd_opt(2024, 10, 6));
    }
}
