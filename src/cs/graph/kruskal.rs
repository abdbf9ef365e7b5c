use log::{debug, trace};

use crate::cs::error::{Error, Result};
use crate::cs::graph::edge::{total_weight, Edge};
use crate::cs::graph::union_find::UnionFind;

/// A spanning tree and its total weight.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpanningTree {
    pub edges: Vec<Edge>,
    pub total_weight: u64,
}

impl SpanningTree {
    pub(crate) fn from_edges(edges: Vec<Edge>) -> Self {
        let total_weight = total_weight(&edges);
        Self {
            edges,
            total_weight,
        }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Kruskal's algorithm over an edge list already sorted by ascending weight.
///
/// - `sorted_edges` must be ordered by weight; ties may be in any order.
/// - `num_nodes` is the number of vertices (labeled `0..num_nodes`).
///
/// Edges are accepted while they join two different components; the scan
/// stops as soon as `num_nodes - 1` edges are in the tree.
///
/// # Errors
/// * `DisconnectedGraph` if the edges run out before the tree spans every vertex
///
/// # Panics
/// - if an edge endpoint is `>= num_nodes`.
pub fn kruskal(sorted_edges: &[Edge], num_nodes: usize) -> Result<SpanningTree> {
    debug_assert!(
        sorted_edges.windows(2).all(|w| w[0].weight() <= w[1].weight()),
        "kruskal expects edges sorted by weight"
    );

    let required = num_nodes.saturating_sub(1);
    let mut uf = UnionFind::new(num_nodes);
    let mut mst = Vec::with_capacity(required);

    for edge in sorted_edges {
        if mst.len() == required {
            break;
        }
        let (a, b) = edge.endpoints();
        if uf.union(a, b) {
            trace!("kruskal: accepted {edge}");
            mst.push(*edge);
        } else {
            trace!("kruskal: skipped {edge}, endpoints already joined");
        }
    }

    if mst.len() < required {
        return Err(Error::DisconnectedGraph {
            accepted: mst.len(),
            required,
        });
    }

    let tree = SpanningTree::from_edges(mst);
    debug!(
        "kruskal: {} edges, total weight {}",
        tree.len(),
        tree.total_weight
    );
    Ok(tree)
}
