pub mod batch;
pub mod report_json;

pub use batch::{analyze_team, analyze_teams, TeamAnalytics, TeamGames, PARALLEL_BATCH_THRESHOLD};
pub use report_json::{
    batch_team_analytics_json, consistency_report_json, defense_report_json, offense_report_json,
    team_analytics_json, ApiError, ApiResponse, BatchReportRequest, ReportRequest, TeamRows,
    SCHEMA_VERSION,
};
