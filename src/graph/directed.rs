use crate::graph::traits::{Graph, MutableGraph};
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// A weighted directed edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W> {
    pub source: usize,
    pub destination: usize,
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(source: usize, destination: usize, weight: W) -> Self {
        Edge {
            source,
            destination,
            weight,
        }
    }
}

/// A directed graph implementation using adjacency lists
///
/// Vertex `v` owns `adjacency[v]`, its outgoing edges in insertion order.
/// Parallel edges are kept as given.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    adjacency: Vec<Vec<Edge<W>>>,
}

impl<W> DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            adjacency: Vec::new(),
        }
    }

    /// Creates a new directed graph with the specified number of vertices
    pub fn with_vertices(vertices: usize) -> Self {
        DirectedGraph {
            adjacency: vec![Vec::new(); vertices],
        }
    }

    /// Builds a graph with `vertices` vertices from `(source, destination, weight)` triples.
    ///
    /// Fails on the first edge with a missing endpoint or a negative weight.
    pub fn from_edges<I>(vertices: usize, edges: I) -> crate::Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::with_vertices(vertices);
        for (from, to, weight) in edges {
            if !graph.has_vertex(from) || !graph.has_vertex(to) {
                return Err(crate::Error::InvalidEdge(from, to));
            }
            if weight < W::zero() || weight.is_nan() {
                return Err(crate::Error::NegativeWeight(weight.to_f64().unwrap_or(f64::NAN)));
            }
            graph.add_edge(from, to, weight);
        }
        Ok(graph)
    }

    /// The outgoing edges owned by a vertex; empty for unknown vertices
    pub fn edges_from(&self, vertex: usize) -> &[Edge<W>] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates over every edge, grouped by source vertex
    pub fn edges(&self) -> impl Iterator<Item = &Edge<W>> + '_ {
        self.adjacency.iter().flatten()
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.edges().all(|edge| edge.weight >= W::zero())
    }
}

impl<W> Default for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|edges| edges.len()).sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        Box::new(
            self.edges_from(vertex)
                .iter()
                .map(|edge| (edge.destination, edge.weight)),
        )
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.adjacency.len()
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn add_vertex(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) || weight < W::zero() || weight.is_nan() {
            return false;
        }

        self.adjacency[from].push(Edge::new(from, to, weight));
        true
    }
}
