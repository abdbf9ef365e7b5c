use bitvec::prelude::*;

use crate::cs::graph::random_graph::Graph;

/// Result of a depth-first search: visit order plus each vertex's discoverer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfsTraversal {
    root: usize,
    order: Vec<usize>,
    predecessors: Vec<Option<usize>>,
    visited: BitVec,
}

impl DfsTraversal {
    pub fn root(&self) -> usize {
        self.root
    }

    /// Vertices in the order they were first reached.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// The vertex that discovered `vertex`; `None` for the root and for unreached vertices.
    pub fn predecessor(&self, vertex: usize) -> Option<usize> {
        self.predecessors.get(vertex).copied().flatten()
    }

    pub fn visited(&self, vertex: usize) -> bool {
        self.visited.get(vertex).is_some_and(|bit| *bit)
    }

    /// `(vertex, predecessor)` pairs in visit order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, Option<usize>)> + '_ {
        self.order.iter().map(|&v| (v, self.predecessors[v]))
    }

    /// True when every vertex was reached from the root.
    pub fn is_connected(&self) -> bool {
        self.order.len() == self.predecessors.len()
    }
}

/// Depth-first search over the adjacency list from `root`.
///
/// Neighbors are explored in list order, so the visit order and predecessors
/// match the textbook recursive formulation. An explicit stack keeps deep
/// paths off the call stack.
///
/// # Panics
/// - if `root >= graph.vertex_count()`.
pub fn depth_first_search(graph: &Graph, root: usize) -> DfsTraversal {
    let n = graph.vertex_count();
    assert!(root < n, "root {root} out of range for {n} vertices");

    let mut visited = bitvec![0; n];
    let mut predecessors = vec![None; n];
    let mut order = Vec::with_capacity(n);
    // (vertex, index of the next neighbor to try)
    let mut stack: Vec<(usize, usize)> = vec![(root, 0)];
    visited.set(root, true);
    order.push(root);

    while let Some(frame) = stack.last_mut() {
        let (v, next) = *frame;
        match graph.neighbors(v).get(next) {
            Some(&(u, _)) => {
                frame.1 += 1;
                if !visited[u] {
                    visited.set(u, true);
                    predecessors[u] = Some(v);
                    order.push(u);
                    stack.push((u, 0));
                }
            }
            None => {
                stack.pop();
            }
        }
    }

    DfsTraversal {
        root,
        order,
        predecessors,
        visited,
    }
}
