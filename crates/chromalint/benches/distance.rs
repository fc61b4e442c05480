use std::hint::black_box;

use chromalint::{validate_color_distinction, DeltaE, DistinctionOptions, Lab, Rgb};
use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_colors(count: usize) -> Vec<Rgb> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..count)
        .map(|_| Rgb::new(rng.random(), rng.random(), rng.random()))
        .collect()
}

pub fn run_benchmarks(c: &mut Criterion) {
    let colors = random_colors(2);
    let lab1 = Lab::from(colors[0]);
    let lab2 = Lab::from(colors[1]);

    let mut group = c.benchmark_group("delta-e");
    for algorithm in DeltaE::ALL {
        group.bench_function(algorithm.name(), |b| {
            b.iter(|| algorithm.distance(black_box(&lab1), black_box(&lab2)))
        });
    }
    group.finish();

    let palette: Vec<String> = random_colors(32).iter().map(Rgb::to_hex).collect();
    let options = DistinctionOptions::default();

    let mut group = c.benchmark_group("distinction");
    group.bench_function("8-colors", |b| {
        b.iter(|| validate_color_distinction(black_box(&palette[..8]), &options))
    });
    group.bench_function("32-colors", |b| {
        b.iter(|| validate_color_distinction(black_box(palette.as_slice()), &options))
    });
    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
