use criterion::{black_box, criterion_group, criterion_main, Criterion};
use footprint_estimator::{compute_emissions, estimate_batch, LifestyleInput};

fn bench_single(c: &mut Criterion) {
    let input = LifestyleInput::default();
    c.bench_function("compute_emissions_default", |b| {
        b.iter(|| compute_emissions(black_box(&input)))
    });
}

fn bench_batch(c: &mut Criterion) {
    let inputs: Vec<LifestyleInput> = (0..10_000)
        .map(|i| {
            let mut input = LifestyleInput::default();
            input.transportation.weekly_distance_km = (i % 300) as f64;
            input
        })
        .collect();

    c.bench_function("estimate_batch_10k", |b| {
        b.iter(|| estimate_batch(black_box(&inputs)))
    });
}

criterion_group!(benches, bench_single, bench_batch);
criterion_main!(benches);
