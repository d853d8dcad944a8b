use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mediatype::*;

// Benchmark media type parsing
fn bench_parse_media_type(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_media_type");

    let test_cases = vec![
        ("simple", "text/html"),
        ("with_charset", "text/html; charset=utf-8"),
        ("quoted", "text/plain; name=\"quarterly report (final).txt\""),
        ("complex", "multipart/form-data; boundary=----WebKitFormBoundary7MA4YWxkTrZu0gW"),
        ("rfc2231", "text/plain; title*0*=utf-8'en'caf%C3%A9; title*1=\" au lait\""),
    ];

    for (name, input) in test_cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, &input| {
            b.iter(|| MediaType::parse(black_box(input)));
        });
    }

    group.finish();
}

// Benchmark media type formatting
fn bench_format_media_type(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_media_type");

    let mut params = std::collections::HashMap::new();
    params.insert("charset".to_string(), "utf-8".to_string());
    params.insert("boundary".to_string(), "----boundary".to_string());

    group.bench_function("with_params", |b| {
        b.iter(|| format_media_type(black_box("multipart/form-data"), black_box(&params)));
    });

    let encoded = MediaType::parse("text/plain; title*=utf-8''caf%C3%A9%20au%20lait").unwrap();
    group.bench_function("rfc2231", |b| {
        b.iter(|| black_box(&encoded).to_string());
    });

    group.finish();
}

// Benchmark equality and subtype decomposition
fn bench_model(c: &mut Criterion) {
    let mut group = c.benchmark_group("model");

    let a = MediaType::parse("image/svg+xml; charset=utf-8").unwrap();
    let b = MediaType::parse("image/svg+xml").unwrap();

    group.bench_function("equal", |bench| {
        bench.iter(|| black_box(&a) == black_box(&b));
    });

    group.bench_function("suffix", |bench| {
        bench.iter(|| black_box(a.subtype()).suffix());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_media_type,
    bench_format_media_type,
    bench_model
);

criterion_main!(benches);
