//! Graph structure test helpers.
//!
//! Construction only checks what a walker needs to stay valid. These
//! helpers check the properties preset graphs are expected to have on
//! top of that: undirected edges and a single connected component.

use crate::graph::Graph;
use std::collections::VecDeque;

/// Assert that `j in neighbours(i)` implies `i in neighbours(j)`.
pub fn assert_adjacency_symmetric(graph: &Graph) {
    for i in 0..graph.len() {
        for &j in graph.neighbours(i) {
            assert!(
                graph.neighbours(j).contains(&i),
                "edge {i}->{j} has no reverse edge; neighbours({j}) = {:?}",
                graph.neighbours(j)
            );
        }
    }
}

/// Assert that every vertex is reachable from vertex 0.
pub fn assert_connected(graph: &Graph) {
    let mut seen = vec![false; graph.len()];
    let mut queue = VecDeque::from([0usize]);
    seen[0] = true;
    while let Some(v) = queue.pop_front() {
        for &nb in graph.neighbours(v) {
            if !seen[nb] {
                seen[nb] = true;
                queue.push_back(nb);
            }
        }
    }
    let unreached: Vec<usize> = (0..graph.len()).filter(|&v| !seen[v]).collect();
    assert!(
        unreached.is_empty(),
        "vertices {unreached:?} unreachable from 0"
    );
}
