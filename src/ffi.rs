use crate::algorithm::{extract_path, ShortestPathAlgorithm};
use crate::algorithm::dijkstra::Dijkstra;
use crate::graph::directed::DirectedGraph;
use crate::graph::MutableGraph;
use crate::ladder::{Dictionary, LadderConfig, NullSink, WordLadder};
use libc::c_char;
use ordered_float::OrderedFloat;
use std::ffi::{CStr, CString};

#[repr(C)]
pub struct FfiGraph {
    graph: DirectedGraph<OrderedFloat<f64>>,
}

#[no_mangle]
pub extern "C" fn lp_graph_new(num_vertices: usize) -> *mut FfiGraph {
    Box::into_raw(Box::new(FfiGraph {
        graph: DirectedGraph::with_vertices(num_vertices),
    }))
}

#[no_mangle]
pub extern "C" fn lp_graph_add_edge(g: *mut FfiGraph, from: usize, to: usize, weight: f64) -> bool {
    if g.is_null() {
        return false;
    }
    unsafe { &mut *g }.graph.add_edge(from, to, OrderedFloat(weight))
}

#[no_mangle]
pub extern "C" fn lp_graph_free(g: *mut FfiGraph) {
    if !g.is_null() {
        unsafe {
            drop(Box::from_raw(g));
        }
    }
}

/// A vertex path; `len == 0` when the destination is unreachable
#[repr(C)]
pub struct FfiPath {
    vertices: *mut usize,
    len: usize,
    cost: f64,
}

#[no_mangle]
pub extern "C" fn lp_shortest_path(g: *const FfiGraph, source: usize, destination: usize) -> *mut FfiPath {
    if g.is_null() {
        return std::ptr::null_mut();
    }
    let graph = unsafe { &(*g).graph };
    let result = match Dijkstra::new().compute_shortest_paths(graph, source) {
        Ok(result) => result,
        Err(_) => return std::ptr::null_mut(),
    };

    let cost = result
        .distance(destination)
        .map(|d| d.0)
        .unwrap_or(f64::INFINITY);
    let mut path = extract_path(&result, destination).into_boxed_slice();
    let len = path.len();
    let vertices = path.as_mut_ptr();
    std::mem::forget(path);

    Box::into_raw(Box::new(FfiPath { vertices, len, cost }))
}

#[no_mangle]
pub extern "C" fn lp_path_free(path: *mut FfiPath) {
    if !path.is_null() {
        unsafe {
            let path = Box::from_raw(path);
            drop(Box::from_raw(std::ptr::slice_from_raw_parts_mut(path.vertices, path.len)));
        }
    }
}

/// Searches a ladder over `count` NUL-terminated words.
///
/// Returns the ladder as space-separated words, or an empty string when none
/// exists. Free the result with `lp_string_free`.
#[no_mangle]
pub extern "C" fn lp_word_ladder(
    words: *const *const c_char,
    count: usize,
    begin: *const c_char,
    end: *const c_char,
) -> *mut c_char {
    if begin.is_null() || end.is_null() || (words.is_null() && count > 0) {
        return std::ptr::null_mut();
    }

    let mut dictionary = Dictionary::new();
    for i in 0..count {
        let word = unsafe { *words.add(i) };
        if !word.is_null() {
            dictionary.insert(&unsafe { CStr::from_ptr(word) }.to_string_lossy());
        }
    }
    let begin = unsafe { CStr::from_ptr(begin) }.to_string_lossy();
    let end = unsafe { CStr::from_ptr(end) }.to_string_lossy();

    let ladder = match WordLadder::new(&dictionary, LadderConfig::default()) {
        Ok(search) => search.generate(&begin, &end, &NullSink),
        Err(_) => Vec::new(),
    };

    CString::new(ladder.join(" "))
        .map(CString::into_raw)
        .unwrap_or(std::ptr::null_mut())
}

#[no_mangle]
pub extern "C" fn lp_string_free(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            drop(CString::from_raw(s));
        }
    }
}
