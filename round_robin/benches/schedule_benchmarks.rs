use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use round_robin::{League, ScheduleConfig, ScheduleGenerator, TeamName};
use std::hint::black_box;

/// Helper to create N distinct team names
fn team_names(n: usize) -> Vec<TeamName> {
    (0..n)
        .filter_map(|i| TeamName::new(format!("Team {i}")))
        .collect()
}

/// Benchmark schedule generation across every default-valid roster size
fn bench_generate_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_schedule");
    let generator = ScheduleGenerator::new();

    for n in 3..=10 {
        let teams = team_names(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &teams, |b, teams| {
            b.iter(|| generator.generate(black_box(teams)));
        });
    }

    group.finish();
}

/// Benchmark a large roster with relaxed bounds
fn bench_generate_large(c: &mut Criterion) {
    let generator = ScheduleGenerator::with_config(ScheduleConfig::new(2, 512));
    let teams = team_names(257);

    c.bench_function("generate_schedule_257_teams", |b| {
        b.iter(|| generator.generate(black_box(&teams)));
    });
}

/// Benchmark text rendering of a full schedule
fn bench_render_text(c: &mut Criterion) {
    let mut league = League::new();
    for team in team_names(10) {
        league.add_team(team.as_str()).unwrap();
    }
    let schedule = league
        .generate_schedule()
        .expect("ten teams are within the default bounds");

    c.bench_function("render_schedule_text", |b| {
        b.iter(|| black_box(&schedule).to_string());
    });
}

/// Benchmark roster mutations (add, rename, delete)
fn bench_roster_edits(c: &mut Criterion) {
    c.bench_function("roster_add_update_delete", |b| {
        b.iter(|| {
            let mut league = League::new();
            for i in 0..10 {
                league.add_team(format!("Team {i}")).unwrap();
            }
            league.update_team(black_box(5), "Renamed").unwrap();
            league.delete_team(black_box(1)).unwrap();
            league
        });
    });
}

criterion_group!(
    benches,
    bench_generate_by_size,
    bench_generate_large,
    bench_render_text,
    bench_roster_edits
);
criterion_main!(benches);
