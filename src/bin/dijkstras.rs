use std::env;

use ladder_paths::algorithm::{extract_path, ShortestPathAlgorithm};
use ladder_paths::graph::{load_graph, DirectedGraph, Graph};
use ladder_paths::output::format_path;
use ladder_paths::Dijkstra;
use ordered_float::OrderedFloat;

// The four-vertex sample route used when no graph file is given
fn sample_graph() -> ladder_paths::Result<DirectedGraph<OrderedFloat<f64>>> {
    DirectedGraph::from_edges(
        4,
        [
            (0, 1, OrderedFloat(1.0)),
            (0, 2, OrderedFloat(4.0)),
            (1, 2, OrderedFloat(2.0)),
            (1, 3, OrderedFloat(5.0)),
            (2, 3, OrderedFloat(1.0)),
        ],
    )
}

fn parse_vertex(arg: Option<&String>, default: usize) -> Result<usize, Box<dyn std::error::Error>> {
    match arg {
        Some(raw) => Ok(raw.parse()?),
        None => Ok(default),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Usage: dijkstras [graph-file] [source] [destination]
    let args: Vec<String> = env::args().collect();
    let graph = match args.get(1) {
        Some(path) => load_graph(path)?,
        None => sample_graph()?,
    };

    let source = parse_vertex(args.get(2), 0)?;
    let destination = parse_vertex(args.get(3), graph.vertex_count().saturating_sub(1))?;

    let dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, source)?;
    let path = extract_path(&result, destination);
    let total = result
        .distance(destination)
        .map(OrderedFloat::into_inner)
        .unwrap_or(f64::INFINITY);

    println!("{}", format_path(&path, total));
    Ok(())
}
