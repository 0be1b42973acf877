//! # Metric Statistics
//!
//! Descriptive statistics for one numeric metric across a set of games, plus
//! a volatility label derived from the coefficient of variation.
//!
//! ## Volatility bands (default profile)
//!
//! | CV (%) | Rating |
//! |--------|--------|
//! | ≤ 10 | Very Stable |
//! | ≤ 20 | Stable |
//! | ≤ 30 | Moderate |
//! | ≤ 40 | Volatile |
//! | > 40 | Highly Volatile |
//!
//! An empty sample is rated "Not Available" and every number is zero.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::stats::{
    coefficient_of_variation, column, count_where, guarded_rate, mean, median, population_std_dev,
    present, round1,
};
use crate::config::{default_config, AnalyticsConfig};
use crate::models::GameStatRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VolatilityRating {
    #[serde(rename = "Very Stable")]
    VeryStable,
    #[serde(rename = "Stable")]
    Stable,
    #[serde(rename = "Moderate")]
    Moderate,
    #[serde(rename = "Volatile")]
    Volatile,
    #[serde(rename = "Highly Volatile")]
    HighlyVolatile,
    #[serde(rename = "Not Available")]
    NotAvailable,
}

impl VolatilityRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            VolatilityRating::VeryStable => "Very Stable",
            VolatilityRating::Stable => "Stable",
            VolatilityRating::Moderate => "Moderate",
            VolatilityRating::Volatile => "Volatile",
            VolatilityRating::HighlyVolatile => "Highly Volatile",
            VolatilityRating::NotAvailable => "Not Available",
        }
    }
}

impl fmt::Display for VolatilityRating {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Observed extremes, unrounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
    pub spread: f64,
}

/// How many games cleared `mean * baseline_ratio`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BaselinePerformance {
    pub value: f64,
    pub games_above: u32,
    pub percentage_above: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricStats {
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub coefficient_of_variation: f64,
    pub range: ValueRange,
    pub baseline_performance: BaselinePerformance,
    pub volatility_rating: VolatilityRating,
    /// Number of games with a known value
    pub sample_size: u32,
}

impl Default for MetricStats {
    fn default() -> Self {
        Self::not_available()
    }
}

impl MetricStats {
    /// All-zero stats for a metric with no known values.
    pub fn not_available() -> Self {
        Self {
            mean: 0.0,
            median: 0.0,
            std_dev: 0.0,
            coefficient_of_variation: 0.0,
            range: ValueRange::default(),
            baseline_performance: BaselinePerformance::default(),
            volatility_rating: VolatilityRating::NotAvailable,
            sample_size: 0,
        }
    }

    pub fn is_available(&self) -> bool {
        self.sample_size > 0
    }

    /// The mean / std-dev / CV projection used by the scoring sections.
    pub fn spread(&self) -> SpreadStats {
        SpreadStats {
            mean: self.mean,
            std_dev: self.std_dev,
            coefficient_of_variation: self.coefficient_of_variation,
        }
    }
}

/// Reduced projection of [`MetricStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SpreadStats {
    pub mean: f64,
    pub std_dev: f64,
    pub coefficient_of_variation: f64,
}

/// Computes [`MetricStats`] for a single metric.
///
/// This is the one place CV, baseline and volatility logic lives; every other
/// analyzer calls into it.
#[derive(Debug, Clone, Copy)]
pub struct MetricStatsCalculator<'a> {
    config: &'a AnalyticsConfig,
}

impl Default for MetricStatsCalculator<'static> {
    fn default() -> Self {
        Self::new(default_config())
    }
}

impl<'a> MetricStatsCalculator<'a> {
    pub fn new(config: &'a AnalyticsConfig) -> Self {
        Self { config }
    }

    /// Statistics over the known values of `values`; unknown entries are skipped.
    pub fn calculate(&self, values: &[Option<f64>]) -> MetricStats {
        let sample = present(values);
        if sample.is_empty() {
            return MetricStats::not_available();
        }

        let n = sample.len();
        let raw_mean = mean(&sample);
        let raw_std_dev = population_std_dev(&sample);
        let cv = round1(coefficient_of_variation(raw_std_dev, raw_mean));

        let min = sample.iter().copied().fold(f64::INFINITY, f64::min);
        let max = sample.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let baseline = raw_mean * self.config.baseline.baseline_ratio;
        let games_above = count_where(&sample, |v| v >= baseline);

        MetricStats {
            mean: round1(raw_mean),
            median: round1(median(&sample)),
            std_dev: round1(raw_std_dev),
            coefficient_of_variation: cv,
            range: ValueRange { min, max, spread: max - min },
            baseline_performance: BaselinePerformance {
                value: round1(baseline),
                games_above,
                percentage_above: round1(guarded_rate(games_above as f64, n as f64)),
            },
            volatility_rating: self.config.volatility.rate(cv),
            sample_size: n as u32,
        }
    }

    /// Statistics for one field of every game.
    pub fn calculate_field<F>(&self, games: &[GameStatRecord], field: F) -> MetricStats
    where
        F: Fn(&GameStatRecord) -> Option<f64>,
    {
        self.calculate(&column(games, field))
    }
}
