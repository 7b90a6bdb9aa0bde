use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::Serialize;

use hron::{from_str, to_string_compact, to_value, HronValue};

#[derive(Serialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

fn make_users(count: usize) -> Vec<User> {
    (0..count)
        .map(|i| User {
            id: i as u32,
            name: format!("user{}", i),
            email: format!("user{}@example.com", i),
            active: i % 2 == 0,
        })
        .collect()
}

fn make_table(count: usize) -> HronValue {
    let mut root = hron::HronMap::new();
    root.insert(
        "users".to_string(),
        to_value(&make_users(count)).unwrap(),
    );
    HronValue::Object(root)
}

fn benchmark_encode_simple(c: &mut Criterion) {
    let value = make_table(1);
    c.bench_function("encode_simple", |b| {
        b.iter(|| to_string_compact(black_box(&value)))
    });
}

fn benchmark_decode_simple(c: &mut Criterion) {
    let text = to_string_compact(&make_table(1)).unwrap();
    c.bench_function("decode_simple", |b| {
        b.iter(|| from_str(black_box(&text)))
    });
}

fn benchmark_encode_tabular(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_tabular");
    for size in [10, 100, 1000].iter() {
        let value = make_table(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &value, |b, value| {
            b.iter(|| to_string_compact(black_box(value)))
        });
    }
    group.finish();
}

fn benchmark_decode_tabular(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_tabular");
    for size in [10, 100, 1000].iter() {
        let text = to_string_compact(&make_table(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| from_str(black_box(text)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_encode_simple,
    benchmark_decode_simple,
    benchmark_encode_tabular,
    benchmark_decode_tabular
);
criterion_main!(benches);
