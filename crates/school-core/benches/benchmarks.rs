use criterion::{criterion_group, criterion_main, Criterion};
use school_core::prelude::*;
use std::hint::black_box;

fn directory(n: usize) -> Vec<School> {
    (0..n)
        .map(|i| {
            let lat = (i % 180) as f64 - 90.0;
            let lon = ((i * 7) % 360) as f64 - 180.0;
            School::new(
                i as i64,
                format!("University {i:05} of Somewhere"),
                "County",
                Some(Coordinates::new(lat, lon)),
            )
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let d = directory(5_000);
    c.bench_function("filter 5k by substring", |b| {
        b.iter(|| filter(black_box(&d), black_box("0042")))
    });
}

fn bench_order(c: &mut Criterion) {
    let d = directory(5_000);
    let near = OrderPolicy::Proximity(Coordinates::new(37.77, -122.42));
    c.bench_function("order 5k alphabetically", |b| {
        b.iter(|| OrderPolicy::Alphabetical.apply(black_box(&d)))
    });
    c.bench_function("order 5k by distance", |b| {
        b.iter(|| near.apply(black_box(&d)))
    });
}

criterion_group!(benches, bench_filter, bench_order);
criterion_main!(benches);
