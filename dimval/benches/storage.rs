use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dimval::{LengthVector, StorageType, METER};

fn sample(len: usize, fill: usize) -> Vec<f64> {
    (0..len)
        .map(|i| if i % fill == 0 { i as f64 + 0.5 } else { 0.0 })
        .collect()
}

fn bench_element_wise_plus(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector_plus");
    for &len in &[100usize, 10_000, 100_000] {
        let values = sample(len, 10);
        for storage_type in [StorageType::Dense, StorageType::Sparse] {
            let a = LengthVector::new(&values, &METER, storage_type).unwrap();
            let b = LengthVector::new(&values, &METER, storage_type).unwrap();
            group.bench_with_input(
                BenchmarkId::new(storage_type.to_string(), len),
                &(a, b),
                |bench, (a, b)| bench.iter(|| black_box(a.plus(b).unwrap())),
            );
        }
    }
    group.finish();
}

fn bench_unit_conversion(c: &mut Criterion) {
    let values = sample(100_000, 1);
    c.bench_function("vector_new_dense_100k", |b| {
        b.iter(|| LengthVector::new(black_box(&values), &METER, StorageType::Dense).unwrap())
    });
}

criterion_group!(benches, bench_element_wise_plus, bench_unit_conversion);
criterion_main!(benches);
