use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use ssm2044_dsp::ladder::{DriveSettings, LadderFilter};

fn bench_ladder(c: &mut Criterion) {
    let input: Vec<f64> = (0..512)
        .map(|n| (core::f64::consts::TAU * 440.0 * n as f64 / 44_100.0).sin())
        .collect();
    let drive = DriveSettings::default();

    c.bench_function("ladder 512 frames", |b| {
        let mut filter = LadderFilter::new(44_100.0);
        b.iter(|| {
            let mut acc = 0.0;
            for &sample in &input {
                acc += filter.process_sample(black_box(sample), 1_000.0, 2.0, 1.0, &drive);
            }
            black_box(acc)
        })
    });

    c.bench_function("ladder 512 frames modulated", |b| {
        let mut filter = LadderFilter::new(44_100.0);
        b.iter(|| {
            let mut acc = 0.0;
            for (n, &sample) in input.iter().enumerate() {
                let cutoff = 500.0 + 10.0 * n as f64;
                acc += filter.process_sample(black_box(sample), cutoff, 2.0, 1.0, &drive);
            }
            black_box(acc)
        })
    });
}

criterion_group!(benches, bench_ladder);
criterion_main!(benches);
