use std::fmt::Debug;
use num_traits::{Float, Zero};
use crate::graph::Graph;
use crate::Result;

/// Result of a shortest path algorithm execution
///
/// `distances` and `predecessors` are parallel vectors indexed by vertex.
/// `None` in `distances` stands for an infinite distance, `None` in
/// `predecessors` for "no predecessor" (the source and unreached vertices).
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distances from source to each vertex
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distance to `vertex`, or `None` when it is unreachable or unknown
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.distances.get(vertex).copied().flatten()
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Number of vertices reached from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices.
    /// Empty when the target is unreachable.
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Vec<usize> {
        extract_path(result, target)
    }
}

/// Reconstructs the route from the source to `destination` by walking the
/// predecessor map backwards.
///
/// Returns an empty vector when `destination` was not reached (or does not
/// exist), and `[source]` when `destination` is the source itself.
pub fn extract_path<W>(result: &ShortestPathResult<W>, destination: usize) -> Vec<usize>
where
    W: Float + Zero + Debug + Copy,
{
    if !result.is_reachable(destination) {
        return Vec::new();
    }

    let mut path = vec![destination];
    let mut current = destination;

    while current != result.source {
        match result.predecessors.get(current).copied().flatten() {
            Some(pred) => {
                path.push(pred);
                current = pred;
            }
            None => {
                log::warn!(
                    "vertex {} has a distance but no predecessor; predecessor map is broken",
                    current
                );
                return Vec::new();
            }
        }

        // A shortest path visits each vertex at most once
        if path.len() > result.predecessors.len() {
            log::warn!("predecessor map contains a cycle reaching vertex {}", destination);
            return Vec::new();
        }
    }

    path.reverse();
    path
}

/// Sums the weights along `path`, taking the cheapest edge for every hop.
///
/// Returns `None` for an empty path or when some hop is not an edge of `graph`.
pub fn path_cost<W, G>(graph: &G, path: &[usize]) -> Option<W>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    if path.is_empty() || !path.iter().all(|&v| graph.has_vertex(v)) {
        return None;
    }

    path.windows(2).try_fold(W::zero(), |total, hop| {
        graph.get_edge_weight(hop[0], hop[1]).map(|w| total + w)
    })
}
