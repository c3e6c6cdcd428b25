use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ladder_paths::algorithm::ShortestPathAlgorithm;
use ladder_paths::graph::generators::generate_random;
use ladder_paths::ladder::{Dictionary, NeighborStrategy};
use ladder_paths::Dijkstra;

fn bench_neighbor_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbors");
    for &size in &[1_000usize, 10_000] {
        let dictionary = Dictionary::random(size, 5, 10, 7);
        let probe = dictionary.iter().next().unwrap_or("aaaaa").to_string();

        for strategy in [
            NeighborStrategy::General,
            NeighborStrategy::SubstitutionOnly,
            NeighborStrategy::BruteForce,
        ] {
            group.bench_with_input(BenchmarkId::new(strategy.name(), size), &size, |b, _| {
                b.iter(|| strategy.neighbors(black_box(&probe), &dictionary))
            });
        }
    }
    group.finish();
}

fn bench_dijkstra(c: &mut Criterion) {
    let graph = generate_random(10_000, 40_000, 3);
    let dijkstra = Dijkstra::new();
    c.bench_function("dijkstra_10k", |b| {
        b.iter(|| dijkstra.compute_shortest_paths(black_box(&graph), 0))
    });
}

criterion_group!(benches, bench_neighbor_strategies, bench_dijkstra);
criterion_main!(benches);
