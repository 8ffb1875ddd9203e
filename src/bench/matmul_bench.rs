use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use matbench::{Matrix, Strategy};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

fn random_square(size: usize, seed: u64) -> Matrix<f64> {
    let mut m = Matrix::new(size, size);
    m.randomize_with(&mut StdRng::seed_from_u64(seed), 0.0, 100.0)
        .expect("non-empty range");
    m
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");
    group.sample_size(10);

    for size in [64, 128, 256] {
        let a = random_square(size, 1);
        let b = random_square(size, 2);
        group.throughput(Throughput::Elements((2 * size * size * size) as u64));

        for strategy in Strategy::ALL {
            group.bench_with_input(
                BenchmarkId::new(strategy.name(), size),
                &(&a, &b),
                |bench, &(a, b)| bench.iter(|| black_box(strategy.multiply(a, b).unwrap())),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
