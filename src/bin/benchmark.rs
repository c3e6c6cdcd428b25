use std::time::{Duration, Instant};

use ladder_paths::algorithm::ShortestPathAlgorithm;
use ladder_paths::graph::generators::generate_random;
use ladder_paths::graph::Graph;
use ladder_paths::ladder::{Dictionary, LadderConfig, NeighborStrategy, NullSink, WordLadder};
use ladder_paths::Dijkstra;

// Time every ladder query of a batch under one neighbor strategy
fn benchmark_strategy(
    strategy: NeighborStrategy,
    dictionary: &Dictionary,
    queries: &[(String, String)],
) -> (Duration, usize) {
    let search = match WordLadder::new(dictionary, LadderConfig::with_strategy(strategy)) {
        Ok(search) => search,
        Err(err) => {
            println!("  - {} skipped: {}", strategy.name(), err);
            return (Duration::ZERO, 0);
        }
    };

    let start = Instant::now();
    let found = queries
        .iter()
        .filter(|(begin, end)| !search.generate(begin, end, &NullSink).is_empty())
        .count();
    (start.elapsed(), found)
}

fn main() {
    env_logger::init();

    println!("=====================================================");
    println!("Benchmark: neighbor strategies for word ladders");
    println!("=====================================================");

    let strategies = [
        NeighborStrategy::General,
        NeighborStrategy::SubstitutionOnly,
        NeighborStrategy::BruteForce,
    ];

    println!(
        "{:<10} | {:<15} | {:<15} | {:<15} | {:<8}",
        "Words", "General (ms)", "Subst. (ms)", "Brute (ms)", "Found"
    );
    println!("-----------------------------------------------------");

    for &size in &[500usize, 2_000, 8_000] {
        let dictionary = Dictionary::random(size, 4, 8, size as u64);
        let mut words: Vec<&str> = dictionary.iter().collect();
        words.sort_unstable();
        let queries: Vec<(String, String)> = words
            .iter()
            .zip(words.iter().rev())
            .take(20)
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect();

        let timings: Vec<(Duration, usize)> = strategies
            .iter()
            .map(|&strategy| benchmark_strategy(strategy, &dictionary, &queries))
            .collect();

        println!(
            "{:<10} | {:<15.2} | {:<15.2} | {:<15.2} | {:<8}",
            size,
            timings[0].0.as_secs_f64() * 1000.0,
            timings[1].0.as_secs_f64() * 1000.0,
            timings[2].0.as_secs_f64() * 1000.0,
            timings[0].1
        );
    }

    println!("\n=====================================================");
    println!("Benchmark: Dijkstra on random graphs");
    println!("=====================================================");

    let dijkstra = Dijkstra::new();
    for &size in &[1_000usize, 10_000, 100_000] {
        let graph = generate_random(size, size * 2, 42);
        let start = Instant::now();
        match dijkstra.compute_shortest_paths(&graph, 0) {
            Ok(result) => println!(
                "{:<10} vertices, {:<10} edges: {} reachable in {:?}",
                graph.vertex_count(),
                graph.edge_count(),
                result.reachable_count(),
                start.elapsed()
            ),
            Err(err) => println!("{:<10} vertices: failed: {}", size, err),
        }
    }
}
