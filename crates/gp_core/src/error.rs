use thiserror::Error;

/// Errors raised at the edges of the engine.
///
/// The calculators themselves are infallible; these only come out of request
/// parsing, boundary decoding and configuration loading.
#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Malformed {category} category data: {source}")]
    MalformedCategory {
        category: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    UnsupportedSchema { found: u8, expected: u8 },
}

impl AnalyticsError {
    /// Stable error code used in JSON API envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            AnalyticsError::InvalidJson(_) => "INVALID_JSON",
            AnalyticsError::MalformedCategory { .. } => "MALFORMED_CATEGORY",
            AnalyticsError::InvalidConfig(_) | AnalyticsError::ConfigParse(_) => "INVALID_CONFIG",
            AnalyticsError::UnsupportedSchema { .. } => "UNSUPPORTED_SCHEMA",
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;
