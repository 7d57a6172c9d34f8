use braille_core::{decode, encode};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

const SAMPLES: &[(&str, &str)] = &[
    ("word", "hello"),
    ("sentence", "Nice to meet you! My name is Ada, I am 36 (thirty-six)."),
    ("digits", "0123456789 9876543210 1234567890"),
    ("unmapped", "naïve café @ 10:30 — 🙂"),
];

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for &(name, text) in SAMPLES {
        group.bench_with_input(BenchmarkId::from_parameter(name), text, |b, text| {
            b.iter(|| encode(text))
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for &(name, text) in SAMPLES {
        let braille = encode(text);
        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            braille.as_str(),
            |b, braille| b.iter(|| decode(braille)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
