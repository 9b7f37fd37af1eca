use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use keyveil::hash::hash53;
use keyveil::pipeline::{convert, derive_token, ConvertOptions};

static INPUTS: &[(&str, &str)] = &[
    ("short", "amazon"),
    ("medium", "correct horse battery staple"),
    (
        "long",
        "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.",
    ),
];

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline/convert");
    for &(label, input) in INPUTS {
        group.bench_with_input(BenchmarkId::new(label, input.len()), &input, |b, &input| {
            b.iter(|| convert(input, ConvertOptions::default()));
        });
    }
    group.finish();
}

fn bench_hash53(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline/hash53");
    for &(label, input) in INPUTS {
        group.bench_with_input(BenchmarkId::new(label, input.len()), &input, |b, &input| {
            b.iter(|| hash53(input));
        });
    }
    group.finish();
}

fn bench_derive_token(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline/derive_token");
    for &(label, input) in INPUTS {
        group.bench_with_input(BenchmarkId::new(label, input.len()), &input, |b, &input| {
            b.iter(|| derive_token(input, 0));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_convert, bench_hash53, bench_derive_token);
criterion_main!(benches);
