//! Benchmarks for report generation over a season and over a league batch.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gp_core::{
    analyze_teams, AnalyticsConfig, ConsistencyReportBuilder, DefenseEfficiencyCalculator,
    GameStatRecord, OffenseEfficiencyCalculator, TeamGames,
};
use std::hint::black_box;

fn season(games: usize, seed: usize) -> Vec<GameStatRecord> {
    (0..games)
        .map(|i| {
            let k = i + seed;
            GameStatRecord {
                total_yards: Some(250.0 + (k * 53 % 200) as f64),
                rushing_yards: Some(80.0 + (k * 29 % 90) as f64),
                passing_yards: Some(160.0 + (k * 41 % 140) as f64),
                points_scored: Some(6.0 + (k * 13 % 35) as f64),
                q1_points: Some((k % 3) as f64 * 7.0),
                q2_points: Some((k % 4) as f64 * 3.0),
                total_plays: Some(55.0 + (k % 15) as f64),
                total_drives: Some(10.0 + (k % 4) as f64),
                three_and_outs: Some((k % 5) as f64),
                scoring_drives: Some((k % 4) as f64 + 1.0),
                opponent_points: Some(10.0 + (k * 7 % 24) as f64),
                opponent_passing_attempts: Some(32.0),
                opponent_completions: Some(20.0),
                opponent_passing_yards: Some(230.0),
                ..Default::default()
            }
        })
        .collect()
}

fn bench_single_team(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_team");
    for games in [17, 170] {
        let data = season(games, 0);
        group.throughput(Throughput::Elements(games as u64));
        group.bench_with_input(BenchmarkId::new("consistency", games), &data, |b, data| {
            b.iter(|| ConsistencyReportBuilder::default().build(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("offense_defense", games), &data, |b, data| {
            b.iter(|| {
                (
                    OffenseEfficiencyCalculator::new().calculate(black_box(data)),
                    DefenseEfficiencyCalculator::new().calculate(black_box(data)),
                )
            })
        });
    }
    group.finish();
}

fn bench_league_batch(c: &mut Criterion) {
    let config = AnalyticsConfig::default();
    let mut group = c.benchmark_group("league_batch");
    for teams in [4, 32] {
        let batch: Vec<TeamGames> = (0..teams)
            .map(|i| TeamGames { team: format!("team-{i}"), games: season(17, i) })
            .collect();
        group.throughput(Throughput::Elements(teams as u64));
        group.bench_with_input(BenchmarkId::from_parameter(teams), &batch, |b, batch| {
            b.iter(|| analyze_teams(black_box(batch), &config))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_team, bench_league_batch);
criterion_main!(benches);
