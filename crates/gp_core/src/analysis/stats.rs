//! # Shared Statistics Primitives
//!
//! Pure helpers used by every calculator in [`crate::analysis`]. Two sample
//! policies are supported and each call site picks one explicitly:
//!
//! - **filter**: [`present`] drops unknown values, so they do not count toward `N`.
//!   Used for per-metric consistency statistics.
//! - **coalesce**: [`sum_coalesced`] treats unknown values as zero. Used for the
//!   aggregate sums that feed rates and per-game figures.
//!
//! Every ratio goes through [`guarded_ratio`], which returns `0.0` instead of
//! dividing by zero, so no report ever carries `NaN` or infinity.

use crate::models::GameStatRecord;

/// Pull one optional field out of every game, keeping game order.
pub fn column<F>(games: &[GameStatRecord], field: F) -> Vec<Option<f64>>
where
    F: Fn(&GameStatRecord) -> Option<f64>,
{
    games.iter().map(field).collect()
}

/// Known values only (filter policy).
pub fn present(values: &[Option<f64>]) -> Vec<f64> {
    values.iter().flatten().copied().collect()
}

/// Sum of one field across games with unknown values counted as zero (coalesce policy).
pub fn sum_coalesced<F>(games: &[GameStatRecord], field: F) -> f64
where
    F: Fn(&GameStatRecord) -> Option<f64>,
{
    games.iter().map(|g| field(g).unwrap_or(0.0)).sum()
}

/// Arithmetic mean, `0.0` for an empty sample.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Statistical median (mean of the two middle values for even counts).
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Population standard deviation (divides by `N`, not `N - 1`).
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }

    // Welford's online algorithm
    let mut mean = 0.0;
    let mut m2 = 0.0;

    for (i, &value) in values.iter().enumerate() {
        let delta = value - mean;
        mean += delta / (i + 1) as f64;
        let delta2 = value - mean;
        m2 += delta * delta2;
    }

    (m2 / values.len() as f64).sqrt()
}

/// Coefficient of variation as a percentage; `0.0` unless the mean is positive.
pub fn coefficient_of_variation(std_dev: f64, mean: f64) -> f64 {
    if mean > 0.0 {
        guarded_ratio(std_dev, mean) * 100.0
    } else {
        0.0
    }
}

/// `numerator / denominator`, or `0.0` when that is not a finite number.
pub fn guarded_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    let ratio = numerator / denominator;
    if ratio.is_finite() {
        ratio
    } else {
        0.0
    }
}

/// [`guarded_ratio`] scaled to a percentage.
pub fn guarded_rate(numerator: f64, denominator: f64) -> f64 {
    guarded_ratio(numerator, denominator) * 100.0
}

/// Average of a season total over the number of games supplied.
pub fn per_game(total: f64, games: usize) -> f64 {
    guarded_ratio(total, games as f64)
}

/// Round half away from zero to one decimal place.
pub fn round1(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value * 10.0).round() / 10.0
}

/// Number of values satisfying `predicate`.
pub fn count_where<P>(values: &[f64], predicate: P) -> u32
where
    P: Fn(f64) -> bool,
{
    values.iter().filter(|&&v| predicate(v)).count() as u32
}
