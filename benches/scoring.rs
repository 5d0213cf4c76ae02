//! Scoring benchmark: single reading and a full history of data-log rows.

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pdm_monitor::risk::{score, RiskEngine};
use pdm_monitor::telemetry::{RollingHistory, SensorReading, TelemetrySimulator};

fn bench_score_single(c: &mut Criterion) {
    let reading = SensorReading::new(Utc::now(), 298.0, 312.0, 1650.0, 46.0, 210.0);

    c.bench_function("score_single_reading", |b| b.iter(|| score(black_box(&reading))));
}

fn bench_assess_history(c: &mut Criterion) {
    let mut sim = TelemetrySimulator::seeded(4);
    let mut history = RollingHistory::default();
    for _ in 0..20 {
        sim.tick(&mut history);
    }
    let engine = RiskEngine::default();

    c.bench_function("assess_full_history", |b| {
        b.iter(|| {
            history
                .iter()
                .map(|r| engine.assess(black_box(r)).probability)
                .sum::<f64>()
        })
    });
}

criterion_group!(benches, bench_score_single, bench_assess_history);
criterion_main!(benches);
