use std::fmt;

use crate::cs::graph::edge::Edge;
use crate::cs::graph::random_graph::Graph;

/// Which representation an edge list was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    Matrix,
    List,
}

impl Representation {
    pub const ALL: [Representation; 2] = [Representation::Matrix, Representation::List];

    pub fn name(&self) -> &'static str {
        match self {
            Representation::Matrix => "MATRIX",
            Representation::List => "LIST",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Flattens the chosen representation into a deduplicated edge list.
pub fn extract(graph: &Graph, representation: Representation) -> Vec<Edge> {
    match representation {
        Representation::Matrix => matrix_edges(graph),
        Representation::List => list_edges(graph),
    }
}

/// Reads the upper triangle of the matrix column by column.
pub fn matrix_edges(graph: &Graph) -> Vec<Edge> {
    let n = graph.vertex_count();
    let matrix = graph.matrix();
    let mut edges = Vec::with_capacity(graph.edge_count());
    for column in 0..n {
        for row in (column + 1)..n {
            let weight = matrix[[column, row]];
            if weight != 0 {
                edges.push(Edge::new(column, row, weight));
            }
        }
    }
    edges
}

/// Walks the lists in vertex order, keeping each pair once (`vertex < neighbor`).
pub fn list_edges(graph: &Graph) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(graph.edge_count());
    for (vertex, neighbors) in graph.adjacency().iter().enumerate() {
        for &(neighbor, weight) in neighbors {
            if vertex < neighbor {
                edges.push(Edge::new(vertex, neighbor, weight));
            }
        }
    }
    edges
}
