//! Threshold tables used by the calculators.
//!
//! Every label bucket and multiplier in the engine lives here instead of in
//! inline conditionals, so a profile can retune them without touching the
//! calculation code.
//!
//! | Table | Used by |
//! |-------|---------|
//! | [`VolatilityBands`] | MetricStats volatility rating |
//! | [`BaselineThresholds`] | baseline performance, streak detection |
//! | [`ScoringThresholds`] | scoring distribution, scoring reliability |
//! | [`ControlThresholds`] | game control lead counts |
//! | [`YardageThresholds`] | performance baseline buckets |
//! | [`CompositeWeights`] | composite consistency score |

use serde::{Deserialize, Serialize};

use crate::analysis::metric_stats::VolatilityRating;

/// One row of the volatility lookup: every CV `<= max_cv` gets `rating`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolatilityBand {
    pub max_cv: f64,
    pub rating: VolatilityRating,
}

/// Ordered CV → rating lookup. First matching band wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolatilityBands {
    pub bands: Vec<VolatilityBand>,
    /// Rating for a CV above every band
    pub fallback: VolatilityRating,
}

impl Default for VolatilityBands {
    fn default() -> Self {
        Self::from_limits([10.0, 20.0, 30.0, 40.0])
    }
}

impl VolatilityBands {
    /// Build the standard five-tier table from four ascending CV limits.
    pub fn from_limits(limits: [f64; 4]) -> Self {
        let ratings = [
            VolatilityRating::VeryStable,
            VolatilityRating::Stable,
            VolatilityRating::Moderate,
            VolatilityRating::Volatile,
        ];
        Self {
            bands: limits
                .iter()
                .zip(ratings)
                .map(|(&max_cv, rating)| VolatilityBand { max_cv, rating })
                .collect(),
            fallback: VolatilityRating::HighlyVolatile,
        }
    }

    /// Look up the rating for a coefficient of variation.
    pub fn rate(&self, cv: f64) -> VolatilityRating {
        self.bands
            .iter()
            .find(|band| cv <= band.max_cv)
            .map(|band| band.rating)
            .unwrap_or(self.fallback)
    }
}

/// Multipliers of a metric's mean used as "acceptable game" baselines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaselineThresholds {
    /// Baseline performance value = mean * ratio
    pub baseline_ratio: f64,
    /// Most recent game at or above mean * ratio starts an above-baseline streak
    pub streak_above_ratio: f64,
    /// Most recent game at or below mean * ratio starts a below-baseline streak
    pub streak_below_ratio: f64,
    /// Games at or above mean * ratio extend the longest consistent streak
    pub consistent_ratio: f64,
}

impl Default for BaselineThresholds {
    fn default() -> Self {
        Self {
            baseline_ratio: 0.8,
            streak_above_ratio: 0.9,
            streak_below_ratio: 0.7,
            consistent_ratio: 0.8,
        }
    }
}

/// Point buckets and reliability windows for scoring consistency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringThresholds {
    /// `games_20_plus`, `games_30_plus`, `games_40_plus` (points >= value)
    pub high_scoring: [f64; 3],
    /// `games_under_10` (points < value)
    pub low_scoring: f64,
    /// Wide reliability window around the mean
    pub wide_window: f64,
    /// Narrow reliability window around the mean
    pub narrow_window: f64,
}

impl Default for ScoringThresholds {
    fn default() -> Self {
        Self {
            high_scoring: [20.0, 30.0, 40.0],
            low_scoring: 10.0,
            wide_window: 10.0,
            narrow_window: 7.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlThresholds {
    /// Lead percentage at which a game counts as "led at least half the game"
    pub leading_half_percentage: f64,
}

impl Default for ControlThresholds {
    fn default() -> Self {
        Self { leading_half_percentage: 50.0 }
    }
}

/// Total-yardage buckets reported in the performance baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct YardageThresholds {
    pub solid: f64,
    pub explosive: f64,
    pub poor: f64,
}

impl Default for YardageThresholds {
    fn default() -> Self {
        Self { solid: 300.0, explosive: 400.0, poor: 200.0 }
    }
}

/// Weights of the composite consistency score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositeWeights {
    pub yards_stability: f64,
    pub points_stability: f64,
    pub baseline_hit_rate: f64,
}

impl Default for CompositeWeights {
    fn default() -> Self {
        Self { yards_stability: 0.4, points_stability: 0.4, baseline_hit_rate: 0.2 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_volatility_lookup() {
        let bands = VolatilityBands::default();
        assert_eq!(bands.rate(0.0), VolatilityRating::VeryStable);
        assert_eq!(bands.rate(5.0), VolatilityRating::VeryStable);
        assert_eq!(bands.rate(10.0), VolatilityRating::VeryStable);
        assert_eq!(bands.rate(10.1), VolatilityRating::Stable);
        assert_eq!(bands.rate(25.0), VolatilityRating::Moderate);
        assert_eq!(bands.rate(40.0), VolatilityRating::Volatile);
        assert_eq!(bands.rate(100.0), VolatilityRating::HighlyVolatile);
    }

    #[test]
    fn test_empty_bands_use_fallback() {
        let bands = VolatilityBands { bands: vec![], fallback: VolatilityRating::Moderate };
        assert_eq!(bands.rate(0.0), VolatilityRating::Moderate);
    }
}
