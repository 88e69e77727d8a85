use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use life_engine::{Dimensions, Grid, LifeEngine, LifeRng};

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");
    for size in [8usize, 64, 256] {
        let grid = Grid::random(Dimensions { rows: size, cols: size }, &mut LifeRng::new(42));
        group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, grid| {
            b.iter(|| black_box(grid).step());
        });
    }
    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    c.bench_function("resolve_100_random_64", |b| {
        b.iter(|| {
            let mut engine = LifeEngine::random(64, 64, Some(7)).unwrap();
            black_box(engine.resolve(100).unwrap())
        });
    });

    c.bench_function("resolve_memoized", |b| {
        let mut engine = LifeEngine::random(64, 64, Some(7)).unwrap();
        engine.resolve(100).unwrap();
        b.iter(|| black_box(engine.resolve(black_box(50)).unwrap()));
    });
}

criterion_group!(benches, bench_step, bench_resolve);
criterion_main!(benches);
