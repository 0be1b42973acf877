//! Batch evaluation of several teams.
//!
//! Small batches run sequentially; larger ones fan out over rayon. Output
//! order always matches input order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::{
    ConsistencyReport, ConsistencyReportBuilder, DefenseEfficiencyCalculator, DefenseReport,
    OffenseEfficiencyCalculator, OffenseReport,
};
use crate::config::AnalyticsConfig;
use crate::models::GameStatRecord;

/// Batches at or below this size skip the thread pool.
pub const PARALLEL_BATCH_THRESHOLD: usize = 8;

/// One team's games, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamGames {
    pub team: String,
    #[serde(default)]
    pub games: Vec<GameStatRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamAnalytics {
    pub team: String,
    pub consistency: ConsistencyReport,
    pub offense: OffenseReport,
    pub defense: DefenseReport,
}

/// All three reports for a single team.
pub fn analyze_team(team: &str, games: &[GameStatRecord], config: &AnalyticsConfig) -> TeamAnalytics {
    TeamAnalytics {
        team: team.to_string(),
        consistency: ConsistencyReportBuilder::new(config).build(games),
        offense: OffenseEfficiencyCalculator::new().calculate(games),
        defense: DefenseEfficiencyCalculator::new().calculate(games),
    }
}

pub fn analyze_teams(teams: &[TeamGames], config: &AnalyticsConfig) -> Vec<TeamAnalytics> {
    if teams.len() > PARALLEL_BATCH_THRESHOLD {
        debug!("Analyzing {} teams in parallel", teams.len());
        teams.par_iter().map(|t| analyze_team(&t.team, &t.games, config)).collect()
    } else {
        teams.iter().map(|t| analyze_team(&t.team, &t.games, config)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(name: &str, yards: f64) -> TeamGames {
        TeamGames {
            team: name.to_string(),
            games: vec![
                GameStatRecord {
                    total_yards: Some(yards),
                    points_scored: Some(21.0),
                    ..Default::default()
                },
                GameStatRecord {
                    total_yards: Some(yards + 50.0),
                    points_scored: Some(27.0),
                    ..Default::default()
                },
            ],
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let config = AnalyticsConfig::default();
        let teams: Vec<TeamGames> =
            (0..20).map(|i| team(&format!("team-{i}"), 250.0 + i as f64 * 10.0)).collect();
        assert!(teams.len() > PARALLEL_BATCH_THRESHOLD);

        let batch = analyze_teams(&teams, &config);
        let sequential: Vec<TeamAnalytics> =
            teams.iter().map(|t| analyze_team(&t.team, &t.games, &config)).collect();

        assert_eq!(batch, sequential);
        let names: Vec<&str> = batch.iter().map(|a| a.team.as_str()).collect();
        assert_eq!(names[0], "team-0");
        assert_eq!(names[19], "team-19");
    }

    #[test]
    fn test_small_batch() {
        let config = AnalyticsConfig::default();
        let result = analyze_teams(&[team("home", 300.0)], &config);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].offense.yards_per_game.total, 325.0);
        assert_eq!(result[0].consistency.games_analyzed, 2);
        assert!(analyze_teams(&[], &config).is_empty());
    }
}
