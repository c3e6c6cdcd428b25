use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::MinQueue;
use crate::graph::Graph;
use crate::{Error, Result};

/// Single-source shortest paths for non-negative weights
///
/// Vertices are settled in order of distance from a [`MinQueue`]. A vertex may
/// be queued several times; only the copy matching its best distance is
/// expanded.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    pub fn new() -> Self {
        Dijkstra
    }
}

/// Working state of one query
struct Search<W> {
    distances: Vec<Option<W>>,
    predecessors: Vec<Option<usize>>,
    frontier: MinQueue<usize, W>,
    source: usize,
    settled: usize,
    stale: usize,
}

impl<W> Search<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    fn start(vertex_count: usize, source: usize) -> Self {
        let mut search = Search {
            distances: vec![None; vertex_count],
            predecessors: vec![None; vertex_count],
            frontier: MinQueue::new(),
            source,
            settled: 0,
            stale: 0,
        };
        search.distances[source] = Some(W::zero());
        search.frontier.push(source, W::zero());
        search
    }

    /// Next vertex to expand with its final distance
    fn next_settled(&mut self) -> Option<(usize, W)> {
        let distances = &self.distances;
        let (next, skipped) = self
            .frontier
            .pop_current(|vertex, reached| distances[vertex].map_or(true, |best| reached <= best));
        self.stale += skipped;
        if next.is_some() {
            self.settled += 1;
        }
        next
    }

    fn relax(&mut self, from: usize, to: usize, candidate: W) {
        let improves = self.distances[to].map_or(true, |best| candidate < best);
        if improves {
            self.distances[to] = Some(candidate);
            self.predecessors[to] = Some(from);
            self.frontier.push(to, candidate);
        }
    }

    fn finish(self) -> ShortestPathResult<W> {
        log::debug!(
            "dijkstra from {}: {} of {} vertices settled, {} stale entries skipped",
            self.source,
            self.settled,
            self.distances.len(),
            self.stale
        );
        ShortestPathResult {
            distances: self.distances,
            predecessors: self.predecessors,
            source: self.source,
        }
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let mut search = Search::start(graph.vertex_count(), source);
        while let Some((vertex, reached)) = search.next_settled() {
            for (next, weight) in graph.outgoing_edges(vertex) {
                search.relax(vertex, next, reached + weight);
            }
        }
        Ok(search.finish())
    }
}
