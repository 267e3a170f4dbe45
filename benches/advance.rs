use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_nbody::consts::TIME_STEP;
use rust_nbody::model::NBodySystem;

fn bench_advance(c: &mut Criterion) {
    c.bench_function("advance", |b| {
        let mut system = NBodySystem::new();
        b.iter(|| system.advance(black_box(TIME_STEP)));
    });

    c.bench_function("energy", |b| {
        let system = NBodySystem::new();
        b.iter(|| black_box(&system).energy());
    });
}

fn bench_many_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_many");
    for &steps in [1_000u64, 10_000].iter() {
        group.throughput(Throughput::Elements(steps));
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &steps| {
            b.iter(|| {
                let mut system = NBodySystem::new();
                system.advance_many(steps, TIME_STEP);
                black_box(system.energy())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_advance, bench_many_steps);
criterion_main!(benches);
