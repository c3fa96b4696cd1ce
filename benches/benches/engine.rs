use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};
use ssm2044_engine::{ControlInput, Ssm2044Engine};

fn filter_blocks(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");
    group.measurement_time(Duration::from_secs(10));

    let input: Vec<f64> = (0..512)
        .map(|n| (core::f64::consts::TAU * 440.0 * n as f64 / 48_000.0).sin())
        .collect();
    let cutoff_sweep: Vec<f64> = (0..512).map(|n| 200.0 + 30.0 * n as f64).collect();

    group.bench_function("held_params_48k_block512", |b| {
        let mut engine = Ssm2044Engine::new(48_000.0).expect("engine");
        let mut output = vec![0.0; 512];
        b.iter(|| {
            engine.process_block(
                black_box(&input),
                &mut output,
                ControlInput::Scalar(1_000.0),
                ControlInput::Scalar(2.0),
                ControlInput::Scalar(1.0),
            )
        });
    });

    group.bench_function("audio_rate_cutoff_48k_block512", |b| {
        let mut engine = Ssm2044Engine::new(48_000.0).expect("engine");
        let mut output = vec![0.0; 512];
        b.iter(|| {
            engine.process_block(
                black_box(&input),
                &mut output,
                ControlInput::Stream(&cutoff_sweep),
                ControlInput::Scalar(2.0),
                ControlInput::Scalar(1.0),
            )
        });
    });

    group.finish();
}

criterion_group!(benches, filter_blocks);
criterion_main!(benches);
