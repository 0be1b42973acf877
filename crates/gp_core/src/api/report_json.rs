//! JSON API for report generation
//!
//! Every entry point takes a JSON request string and returns a JSON
//! `ApiResponse` string. Failures come back as coded errors inside the
//! envelope; nothing here panics.

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use super::batch::{analyze_team, analyze_teams, TeamAnalytics, TeamGames};
use crate::analysis::{
    ConsistencyReport, ConsistencyReportBuilder, DefenseEfficiencyCalculator, DefenseReport,
    OffenseEfficiencyCalculator, OffenseReport,
};
use crate::config::AnalyticsConfig;
use crate::error::{AnalyticsError, Result};
use crate::models::{decode_rows, order_most_recent_first, GameStatRecord, RawGameRow};

/// Request/response schema version
pub const SCHEMA_VERSION: u8 = 1;

/// Standard API response wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub schema_version: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: &str, message: &str) -> Self {
        Self { code: code.to_string(), message: message.to_string() }
    }
}

impl From<&AnalyticsError> for ApiError {
    fn from(err: &AnalyticsError) -> Self {
        Self::new(err.code(), &err.to_string())
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self { success: true, data: Some(data), error: None, schema_version: SCHEMA_VERSION }
    }

    pub fn error(error: ApiError) -> Self {
        Self { success: false, data: None, error: Some(error), schema_version: SCHEMA_VERSION }
    }
}

/// Single-team report request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    pub schema_version: u8,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub games: Vec<RawGameRow>,
    /// "default", "conservative" or "sensitive"; falls back to the environment
    #[serde(default)]
    pub profile: Option<String>,
}

/// One team's stored rows inside a [`BatchReportRequest`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamRows {
    pub team: String,
    #[serde(default)]
    pub games: Vec<RawGameRow>,
}

/// Multi-team request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReportRequest {
    pub schema_version: u8,
    #[serde(default)]
    pub teams: Vec<TeamRows>,
    #[serde(default)]
    pub profile: Option<String>,
}

fn check_schema(found: u8) -> Result<()> {
    if found != SCHEMA_VERSION {
        return Err(AnalyticsError::UnsupportedSchema { found, expected: SCHEMA_VERSION });
    }
    Ok(())
}

fn resolve_config(profile: Option<&str>) -> AnalyticsConfig {
    match profile {
        Some(name) => AnalyticsConfig::from_profile(name),
        None => AnalyticsConfig::from_env_or_default(),
    }
}

/// Parsed and decoded single-team request.
struct PreparedRequest {
    team: String,
    games: Vec<GameStatRecord>,
    config: AnalyticsConfig,
}

/// Decode stored rows and put them most recent first.
fn decode_games(rows: Vec<RawGameRow>) -> Result<Vec<GameStatRecord>> {
    let mut games = decode_rows(rows)?;
    order_most_recent_first(&mut games);
    Ok(games)
}

fn prepare(request_json: &str) -> Result<PreparedRequest> {
    let request: ReportRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let config = resolve_config(request.profile.as_deref());
    let games = decode_games(request.games)?;

    Ok(PreparedRequest { team: request.team.unwrap_or_default(), games, config })
}

fn prepare_batch(request_json: &str) -> Result<(Vec<TeamGames>, AnalyticsConfig)> {
    let request: BatchReportRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let config = resolve_config(request.profile.as_deref());
    let teams = request
        .teams
        .into_iter()
        .map(|rows| -> Result<TeamGames> {
            Ok(TeamGames { team: rows.team, games: decode_games(rows.games)? })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((teams, config))
}

fn to_json<T: Serialize>(response: &ApiResponse<T>) -> String {
    serde_json::to_string(response).unwrap_or_else(|_| "{}".to_string())
}

fn rejected<T: Serialize>(kind: &str, err: &AnalyticsError) -> String {
    match err {
        AnalyticsError::InvalidJson(e) => error!("Failed to parse {} request: {}", kind, e),
        other => warn!("{} request rejected: {}", kind, other),
    }
    to_json(&ApiResponse::<T>::error(ApiError::from(err)))
}

fn respond<T, F>(kind: &str, request_json: &str, build: F) -> String
where
    T: Serialize,
    F: FnOnce(&PreparedRequest) -> T,
{
    info!("Processing {} request", kind);
    match prepare(request_json) {
        Ok(prepared) => {
            let data = build(&prepared);
            info!("Built {} report over {} games", kind, prepared.games.len());
            to_json(&ApiResponse::success(data))
        }
        Err(err) => rejected::<T>(kind, &err),
    }
}

/// Consistency report from a JSON request string
///
/// # Returns
/// JSON string containing `ApiResponse<ConsistencyReport>`
pub fn consistency_report_json(request_json: &str) -> String {
    respond::<ConsistencyReport, _>("consistency", request_json, |req| {
        ConsistencyReportBuilder::new(&req.config).build(&req.games)
    })
}

/// JSON string containing `ApiResponse<OffenseReport>`
pub fn offense_report_json(request_json: &str) -> String {
    respond::<OffenseReport, _>("offense", request_json, |req| {
        OffenseEfficiencyCalculator::new().calculate(&req.games)
    })
}

/// JSON string containing `ApiResponse<DefenseReport>`
pub fn defense_report_json(request_json: &str) -> String {
    respond::<DefenseReport, _>("defense", request_json, |req| {
        DefenseEfficiencyCalculator::new().calculate(&req.games)
    })
}

/// All three reports for one team
///
/// # Returns
/// JSON string containing `ApiResponse<TeamAnalytics>`
pub fn team_analytics_json(request_json: &str) -> String {
    respond::<TeamAnalytics, _>("team analytics", request_json, |req| {
        analyze_team(&req.team, &req.games, &req.config)
    })
}

/// All three reports for every team of a [`BatchReportRequest`]
///
/// # Returns
/// JSON string containing `ApiResponse<Vec<TeamAnalytics>>`
pub fn batch_team_analytics_json(request_json: &str) -> String {
    info!("Processing batch team analytics request");

    let (teams, config) = match prepare_batch(request_json) {
        Ok(prepared) => prepared,
        Err(err) => return rejected::<Vec<TeamAnalytics>>("batch", &err),
    };

    let results = analyze_teams(&teams, &config);
    info!("Batch complete: {} teams analyzed", results.len());
    to_json(&ApiResponse::success(results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn parse(json: &str) -> Value {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_consistency_report_success() {
        let request = r#"{
            "schema_version": 1,
            "games": [
                {"total_yards": 350, "points_scored": 24},
                {"total_yards": 300, "points_scored": 31},
                {"total_yards": 400, "points_scored": 17}
            ]
        }"#;
        let response = parse(&consistency_report_json(request));
        assert_eq!(response["success"], true);
        assert_eq!(response["schema_version"], 1);
        assert!(response["error"].is_null());

        let total = &response["data"]["yardage"]["total_yards"];
        assert_eq!(total["mean"], 350.0);
        assert_eq!(total["volatility_rating"], "Stable");
        assert_eq!(response["data"]["games_analyzed"], 3);
    }

    #[test]
    fn test_invalid_json() {
        let response = parse(&offense_report_json("{not json"));
        assert_eq!(response["success"], false);
        assert_eq!(response["error"]["code"], "INVALID_JSON");
        assert!(response["data"].is_null());
    }

    #[test]
    fn test_unsupported_schema() {
        let response = parse(&defense_report_json(r#"{"schema_version": 9, "games": []}"#));
        assert_eq!(response["success"], false);
        assert_eq!(response["error"]["code"], "UNSUPPORTED_SCHEMA");
    }

    #[test]
    fn test_malformed_category_blob() {
        let request = r#"{"schema_version": 1, "games": [{"rushing": "{broken"}]}"#;
        let response = parse(&consistency_report_json(request));
        assert_eq!(response["error"]["code"], "MALFORMED_CATEGORY");
    }

    #[test]
    fn test_dated_games_are_reordered() {
        // oldest first on the wire; streak must read the 2024-09-22 game
        let request = r#"{
            "schema_version": 1,
            "games": [
                {"played_on": "2024-09-08", "total_yards": 200},
                {"played_on": "2024-09-15", "total_yards": 420},
                {"played_on": "2024-09-22", "total_yards": 430}
            ]
        }"#;
        let response = parse(&consistency_report_json(request));
        let streak = &response["data"]["performance_reliability"]["streak_analysis"];
        assert_eq!(streak["current_streak_type"], "above_baseline");
        assert_eq!(streak["current_streak_length"], 2);
    }

    #[test]
    fn test_profile_selection() {
        // CV 8.3: Very Stable by default, Stable under the conservative bands
        let games = r#"[{"total_yards": 100}, {"total_yards": 118}]"#;
        let default = parse(&consistency_report_json(&format!(
            r#"{{"schema_version": 1, "profile": "default", "games": {games}}}"#
        )));
        let conservative = parse(&consistency_report_json(&format!(
            r#"{{"schema_version": 1, "profile": "conservative", "games": {games}}}"#
        )));
        assert_eq!(default["data"]["yardage"]["total_yards"]["volatility_rating"], "Very Stable");
        assert_eq!(conservative["data"]["yardage"]["total_yards"]["volatility_rating"], "Stable");
    }

    #[test]
    fn test_team_analytics_and_batch() {
        let single = parse(&team_analytics_json(
            r#"{"schema_version": 1, "team": "Hawks", "profile": "default",
                "games": [{"total_yards": 300, "total_plays": 60}]}"#,
        ));
        assert_eq!(single["data"]["team"], "Hawks");
        assert_eq!(single["data"]["offense"]["efficiency"]["yards_per_play"], 5.0);

        let batch = parse(&batch_team_analytics_json(
            r#"{"schema_version": 1, "profile": "default", "teams": [
                {"team": "Hawks", "games": [{"points_scored": 21}]},
                {"team": "Owls", "games": []}
            ]}"#,
        ));
        assert_eq!(batch["success"], true);
        assert_eq!(batch["data"][0]["team"], "Hawks");
        assert_eq!(batch["data"][1]["consistency"]["games_analyzed"], 0);

        let bad = parse(&batch_team_analytics_json(r#"{"schema_version": 2, "teams": []}"#));
        assert_eq!(bad["error"]["code"], "UNSUPPORTED_SCHEMA");

        let bad = parse(&batch_team_analytics_json(
            r#"{"schema_version": 1, "teams": [{"team": "Hawks", "games": [{"receiving": "{oops"}]}]}"#,
        ));
        assert_eq!(bad["success"], false);
        assert_eq!(bad["error"]["code"], "MALFORMED_CATEGORY");
    }
}
