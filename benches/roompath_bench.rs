//! Criterion benchmarks for the room-ordering GA.
//!
//! Measures one short seeded run per crossover and per mutation operator on
//! the classroom dataset.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_roompath::ga::{Crossover, GaConfig, GaRunner, Mutation};
use u_roompath::rooms::{CostMatrix, RoomProblem};

fn config() -> GaConfig {
    GaConfig::default()
        .with_population_size(50)
        .with_max_generations(50)
        .with_seed(42)
}

fn bench_crossover(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_crossover");
    group.sample_size(10);

    for op in Crossover::ALL {
        let problem = RoomProblem::new(CostMatrix::classroom()).with_crossover(op);
        group.bench_with_input(
            BenchmarkId::from_parameter(op.name()),
            &(problem, config()),
            |b, (p, c)| {
                b.iter(|| {
                    let result = GaRunner::run(black_box(p), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_mutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_mutation");
    group.sample_size(10);

    for op in Mutation::ALL {
        let problem = RoomProblem::new(CostMatrix::classroom()).with_mutation(op);
        let config = config().with_mutation_rate(0.5);
        group.bench_with_input(
            BenchmarkId::from_parameter(op.name()),
            &(problem, config),
            |b, (p, c)| {
                b.iter(|| {
                    let result = GaRunner::run(black_box(p), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_crossover, bench_mutation);
criterion_main!(benches);
