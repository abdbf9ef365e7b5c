use log::{debug, trace};
use std::cmp::Ordering;

use crate::cs::error::{Error, Result};
use crate::cs::graph::edge::Edge;
use crate::cs::graph::kruskal::SpanningTree;
use crate::cs::graph::priority_queue::PriorityQueue;

/// Frontier entry for Prim's algorithm: the cheapest known way to attach `vertex`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct FrontierEntry {
    /// Weight of the best connecting edge; `None` while unreached.
    key: Option<u32>,
    vertex: usize,
    parent: Option<usize>,
}

/// Reached vertices before unreached ones, then by key, then by vertex index.
fn frontier_order(a: &FrontierEntry, b: &FrontierEntry) -> Ordering {
    let by_key = match (a.key, b.key) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_key.then(a.vertex.cmp(&b.vertex))
}

/// Computes the minimum spanning tree (MST) of an undirected graph using Prim's algorithm.
///
/// # Arguments
/// * `edges` - The graph's edges, in any order
/// * `num_nodes` - Number of vertices, labeled `0..num_nodes`
///
/// The tree grows from vertex 0. Every vertex starts in the heap, the root
/// keyed 0 and the rest unreached. Each round extracts the cheapest frontier
/// vertex, adds it and its connecting edge to the tree, then lowers the key of
/// every neighbor still in the heap when the new edge is cheaper.
///
/// # Returns
/// * `Ok(SpanningTree)` - The MST edges in the order they were added, with the total weight
///
/// # Errors
/// * `DisconnectedGraph` if some vertex is unreachable from vertex 0
///
/// # Complexity
/// * Time: O((V + E) log V)
/// * Space: O(V + E)
///
/// # Panics
/// - if an edge endpoint is `>= num_nodes`.
pub fn prim(edges: &[Edge], num_nodes: usize) -> Result<SpanningTree> {
    if num_nodes == 0 {
        return Ok(SpanningTree::default());
    }

    let mut adjacency: Vec<Vec<(usize, u32)>> = vec![Vec::new(); num_nodes];
    for edge in edges {
        let (a, b) = edge.endpoints();
        adjacency[a].push((b, edge.weight()));
        adjacency[b].push((a, edge.weight()));
    }

    let required = num_nodes - 1;
    let entries = (0..num_nodes).map(|vertex| {
        let key = if vertex == 0 { Some(0) } else { None };
        (
            vertex,
            FrontierEntry {
                key,
                vertex,
                parent: None,
            },
        )
    });
    let mut frontier = PriorityQueue::from_entries(entries, frontier_order);
    let mut mst = Vec::with_capacity(required);

    while let Some((vertex, entry)) = frontier.pop() {
        let Some(key) = entry.key else {
            return Err(Error::DisconnectedGraph {
                accepted: mst.len(),
                required,
            });
        };
        if let Some(parent) = entry.parent {
            mst.push(Edge::new(parent, vertex, key));
        }

        for &(neighbor, weight) in &adjacency[vertex] {
            let improves = match frontier.get(neighbor) {
                Some(current) => match current.key {
                    Some(k) => weight < k,
                    None => true,
                },
                None => false,
            };
            if improves {
                trace!("prim: {neighbor} now reachable from {vertex} at {weight}");
                frontier.update(
                    neighbor,
                    FrontierEntry {
                        key: Some(weight),
                        vertex: neighbor,
                        parent: Some(vertex),
                    },
                );
            }
        }
    }

    let tree = SpanningTree::from_edges(mst);
    debug!(
        "prim: {} edges, total weight {}",
        tree.len(),
        tree.total_weight
    );
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prim_simple_mst() {
        let edges = [Edge::new(0, 1, 1), Edge::new(1, 2, 2), Edge::new(0, 2, 3)];
        let mst = prim(&edges, 3).unwrap();
        assert_eq!(mst.total_weight, 3);
        assert_eq!(mst.edges, vec![Edge::new(0, 1, 1), Edge::new(1, 2, 2)]);
    }

    #[test]
    fn test_prim_disconnected_graph() {
        let edges = [Edge::new(0, 1, 1)];
        assert_eq!(
            prim(&edges, 3),
            Err(Error::DisconnectedGraph {
                accepted: 1,
                required: 2
            })
        );
    }

    #[test]
    fn test_prim_complex_graph() {
        let edges = [
            Edge::new(0, 1, 4),
            Edge::new(0, 2, 2),
            Edge::new(1, 2, 1),
            Edge::new(1, 3, 3),
            Edge::new(2, 3, 5),
        ];
        let mst = prim(&edges, 4).unwrap();
        assert_eq!(mst.total_weight, 6);
        assert_eq!(mst.len(), 3);
    }

    #[test]
    fn test_prim_decrease_key() {
        // 3 is first seen through the heavy edge from 0, then relaxed via 2.
        let edges = [
            Edge::new(0, 3, 9),
            Edge::new(0, 1, 1),
            Edge::new(1, 2, 1),
            Edge::new(2, 3, 1),
        ];
        let mst = prim(&edges, 4).unwrap();
        assert_eq!(mst.total_weight, 3);
        assert!(mst.edges.contains(&Edge::new(2, 3, 1)));
        assert!(!mst.edges.contains(&Edge::new(0, 3, 9)));
    }

    #[test]
    fn test_prim_parallel_edges() {
        let edges = [Edge::new(0, 1, 2), Edge::new(0, 1, 1)];
        let mst = prim(&edges, 2).unwrap();
        assert_eq!(mst.total_weight, 1); // Should use the lower weight edge
        assert_eq!(mst.len(), 1);
    }

    #[test]
    fn test_prim_single_and_empty() {
        assert!(prim(&[], 0).unwrap().is_empty());
        assert!(prim(&[], 1).unwrap().is_empty());
    }

    #[test]
    fn test_prim_large_graph() {
        // Create a circular graph with 1000 vertices
        let mut edges: Vec<Edge> = (0..999).map(|i| Edge::new(i, i + 1, 1)).collect();
        edges.push(Edge::new(999, 0, 1));
        let mst = prim(&edges, 1000).unwrap();
        assert_eq!(mst.total_weight, 999);
        assert_eq!(mst.len(), 999);
    }

    #[test]
    fn test_frontier_order() {
        let reached = FrontierEntry {
            key: Some(50),
            vertex: 3,
            parent: Some(0),
        };
        let unreached = FrontierEntry {
            key: None,
            vertex: 1,
            parent: None,
        };
        assert_eq!(frontier_order(&reached, &unreached), Ordering::Less);
        assert_eq!(frontier_order(&unreached, &reached), Ordering::Greater);
    }
}
