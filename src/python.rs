use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{extract_path, ShortestPathAlgorithm};
use crate::graph::directed::DirectedGraph;
use crate::graph::MutableGraph;
use crate::ladder::{self, Dictionary, LadderConfig, NeighborStrategy, NullSink, WordLadder};
use ordered_float::OrderedFloat;
use pyo3::prelude::*;

#[pyclass]
pub struct PyGraph {
    graph: DirectedGraph<OrderedFloat<f64>>,
}

#[pymethods]
impl PyGraph {
    #[new]
    fn new(num_vertices: usize) -> Self {
        PyGraph {
            graph: DirectedGraph::with_vertices(num_vertices),
        }
    }

    fn add_vertex(&mut self) -> usize {
        self.graph.add_vertex()
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: f64) -> bool {
        self.graph.add_edge(from, to, OrderedFloat(weight))
    }
}

#[pyclass]
pub struct PyDijkstra {
    inner: Dijkstra,
}

#[pymethods]
impl PyDijkstra {
    #[new]
    fn new() -> Self {
        PyDijkstra {
            inner: Dijkstra::new(),
        }
    }

    /// Returns `(distances, predecessors)`; `None` marks unreachable vertices
    fn compute_shortest_paths(
        &self,
        graph: &PyGraph,
        source: usize,
    ) -> PyResult<(Vec<Option<f64>>, Vec<Option<usize>>)> {
        let result = self
            .inner
            .compute_shortest_paths(&graph.graph, source)
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))?;
        let distances = result
            .distances
            .into_iter()
            .map(|d| d.map(|v| v.0))
            .collect();
        Ok((distances, result.predecessors))
    }

    /// Returns `(path, cost)`; the path is empty when unreachable
    fn shortest_path(
        &self,
        graph: &PyGraph,
        source: usize,
        destination: usize,
    ) -> PyResult<(Vec<usize>, Option<f64>)> {
        let result = self
            .inner
            .compute_shortest_paths(&graph.graph, source)
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))?;
        let cost = result.distance(destination).map(|d| d.0);
        Ok((extract_path(&result, destination), cost))
    }
}

#[pyfunction]
#[pyo3(signature = (begin_word, end_word, words, strategy = "general", ignore_case = false))]
fn generate_ladder(
    begin_word: &str,
    end_word: &str,
    words: Vec<String>,
    strategy: &str,
    ignore_case: bool,
) -> PyResult<Vec<String>> {
    let strategy: NeighborStrategy = strategy
        .parse()
        .map_err(pyo3::exceptions::PyValueError::new_err)?;
    let dictionary = Dictionary::from_words(&words);
    let config = LadderConfig {
        strategy,
        ignore_case,
    };
    let search = WordLadder::new(&dictionary, config)
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))?;
    Ok(search.generate(begin_word, end_word, &NullSink))
}

#[pyfunction]
fn is_adjacent(word1: &str, word2: &str) -> bool {
    ladder::is_adjacent(word1, word2)
}

#[pymodule]
fn ladder_paths_py(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyGraph>()?;
    m.add_class::<PyDijkstra>()?;
    m.add_function(wrap_pyfunction!(generate_ladder, m)?)?;
    m.add_function(wrap_pyfunction!(is_adjacent, m)?)?;
    Ok(())
}
