//! # Analytics Configuration
//!
//! All tuning constants of the engine in one serde-friendly structure.
//!
//! ## Usage
//! ```rust
//! use gp_core::config::AnalyticsConfig;
//!
//! let config = AnalyticsConfig::default();
//! let strict = AnalyticsConfig::conservative();
//! let from_env = AnalyticsConfig::from_env_or_default();
//! assert!(config.validate().is_ok());
//! # let _ = (strict, from_env);
//! ```
//!
//! ## Environment Variables
//!
//! - `GP_ANALYTICS_PROFILE`: Select preset (default, conservative, sensitive)

mod thresholds_config;

pub use thresholds_config::{
    BaselineThresholds, CompositeWeights, ControlThresholds, ScoringThresholds, VolatilityBand,
    VolatilityBands, YardageThresholds,
};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::{debug, warn};

use crate::error::{AnalyticsError, Result};

/// Environment variable selecting the threshold profile
pub const PROFILE_ENV_VAR: &str = "GP_ANALYTICS_PROFILE";

static DEFAULT_CONFIG: Lazy<AnalyticsConfig> = Lazy::new(AnalyticsConfig::default);

/// Shared default configuration used by the `Default` calculators.
pub fn default_config() -> &'static AnalyticsConfig {
    &DEFAULT_CONFIG
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AnalyticsConfig {
    #[serde(default)]
    pub volatility: VolatilityBands,
    #[serde(default)]
    pub baseline: BaselineThresholds,
    #[serde(default)]
    pub scoring: ScoringThresholds,
    #[serde(default)]
    pub control: ControlThresholds,
    #[serde(default)]
    pub yardage: YardageThresholds,
    #[serde(default)]
    pub weights: CompositeWeights,
}

impl AnalyticsConfig {
    /// Tighter volatility bands: a team has to be steadier to rate as stable.
    pub fn conservative() -> Self {
        Self {
            volatility: VolatilityBands::from_limits([8.0, 15.0, 25.0, 35.0]),
            ..Self::default()
        }
    }

    /// Looser volatility bands for small samples early in a season.
    pub fn sensitive() -> Self {
        Self {
            volatility: VolatilityBands::from_limits([12.0, 24.0, 36.0, 48.0]),
            ..Self::default()
        }
    }

    /// Resolve a preset by name. Unknown names fall back to the default profile.
    pub fn from_profile(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "conservative" => Self::conservative(),
            "sensitive" => Self::sensitive(),
            "" | "default" => Self::default(),
            other => {
                warn!("Unknown analytics profile '{}', using default", other);
                Self::default()
            }
        }
    }

    /// Load from environment variable GP_ANALYTICS_PROFILE or use default
    pub fn from_env_or_default() -> Self {
        let profile = env::var(PROFILE_ENV_VAR).unwrap_or_default();
        debug!("Analytics profile from env: '{}'", profile);
        Self::from_profile(&profile)
    }

    /// Parse a YAML document and validate it. Missing sections keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let mut previous = f64::NEG_INFINITY;
        for band in &self.volatility.bands {
            if !band.max_cv.is_finite() || band.max_cv < 0.0 {
                return Err(AnalyticsError::InvalidConfig(format!(
                    "volatility band limit must be finite and non-negative, got {}",
                    band.max_cv
                )));
            }
            if band.max_cv <= previous {
                return Err(AnalyticsError::InvalidConfig(format!(
                    "volatility bands must be strictly ascending ({} after {})",
                    band.max_cv, previous
                )));
            }
            previous = band.max_cv;
        }

        let ratios = [
            ("baseline_ratio", self.baseline.baseline_ratio),
            ("streak_above_ratio", self.baseline.streak_above_ratio),
            ("streak_below_ratio", self.baseline.streak_below_ratio),
            ("consistent_ratio", self.baseline.consistent_ratio),
        ];
        for (name, value) in ratios {
            if !value.is_finite() || value <= 0.0 {
                return Err(AnalyticsError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if self.baseline.streak_below_ratio >= self.baseline.streak_above_ratio {
            return Err(AnalyticsError::InvalidConfig(format!(
                "streak_below_ratio ({}) must be below streak_above_ratio ({})",
                self.baseline.streak_below_ratio, self.baseline.streak_above_ratio
            )));
        }

        let weights = [
            self.weights.yards_stability,
            self.weights.points_stability,
            self.weights.baseline_hit_rate,
        ];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(AnalyticsError::InvalidConfig(
                "composite weights must be finite and non-negative".to_string(),
            ));
        }

        Ok(())
    }
}
