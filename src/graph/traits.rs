use std::fmt::Debug;
use num_traits::{Float, Zero};

/// Trait representing a weighted directed graph
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex as `(destination, weight)`
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.outgoing_edges(from).any(|(target, _)| target == to)
    }

    /// Gets the weight of the cheapest edge between two vertices, if any
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges(from)
            .filter(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
            .fold(None, |best, weight| match best {
                Some(current) if current <= weight => Some(current),
                _ => Some(weight),
            })
    }
}

/// Trait for building a graph up
///
/// Graphs are built once and then only read by the algorithms, so there is no removal.
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Adds a vertex to the graph and returns its ID
    fn add_vertex(&mut self) -> usize;

    /// Appends a directed edge to the source vertex's edge list.
    ///
    /// Returns false when either endpoint is missing or the weight is negative.
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool;
}
