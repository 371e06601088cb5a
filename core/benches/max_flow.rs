//! Benchmarks for Ford-Fulkerson on random and chain networks

use augment_core::generators::{random_graph, worst_case_graph, RandomGraphParams, SINK, SOURCE};
use augment_core::max_flow;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn benchmark_random_networks(c: &mut Criterion) {
    let mut group = c.benchmark_group("random");

    for nodes in [10usize, 40, 160] {
        let params = RandomGraphParams {
            nodes,
            edge_probability: 0.3,
            min_capacity: 1,
            max_capacity: 20,
        };
        let template = random_graph(&params, &mut StdRng::seed_from_u64(42)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(nodes), &template, |b, template| {
            b.iter_batched(
                || template.clone(),
                |mut network| black_box(max_flow(&mut network, SOURCE, SINK)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn benchmark_chains(c: &mut Criterion) {
    let mut group = c.benchmark_group("worst_case_chain");

    for layers in [10usize, 100, 400] {
        let template = worst_case_graph(layers, 1000).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(layers), &template, |b, template| {
            b.iter_batched(
                || template.clone(),
                |mut network| black_box(max_flow(&mut network, SOURCE, SINK)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_random_networks, benchmark_chains);
criterion_main!(benches);
