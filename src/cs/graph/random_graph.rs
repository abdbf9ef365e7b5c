//! Random connected graphs held as both an adjacency matrix and an adjacency list.
//!
//! Generation is rejection sampling: every vertex pair `(i, j)`, `i < j`, is
//! joined with probability `p` and a weight in `[1, n]`; the whole graph is
//! thrown away and redrawn until a depth-first search from vertex 0 reaches
//! every vertex. The random streams keep advancing across attempts, so a
//! seed still determines the accepted graph.
//!
//! # Limitations
//!
//! With `p = 0` and `n > 1` no attempt can succeed; generation always ends in
//! [`Error::GenerationExhausted`].

use log::{debug, info, warn};
use ndarray::Array2;
use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::cs::error::{Error, Result};
use crate::cs::graph::config::GeneratorConfig;
use crate::cs::graph::dfs::{depth_first_search, DfsTraversal};
use crate::cs::graph::edge::Edge;
use crate::cs::randomized::RandomStreams;

/// An undirected weighted graph without self-loops.
///
/// The matrix and the list always describe the same edges; `0` in the matrix
/// means "no edge". There are no public mutators.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    vertices: usize,
    matrix: Array2<u32>,
    adjacency: Vec<Vec<(usize, u32)>>,
}

impl Graph {
    fn empty(vertices: usize) -> Self {
        Self {
            vertices,
            matrix: Array2::zeros((vertices, vertices)),
            adjacency: vec![Vec::new(); vertices],
        }
    }

    /// Adds `{a, b}` to both representations. Callers guarantee `a != b` and `weight > 0`.
    fn insert_edge(&mut self, a: usize, b: usize, weight: u32) {
        debug_assert_ne!(a, b);
        debug_assert!(weight > 0);
        self.matrix[[a, b]] = weight;
        self.matrix[[b, a]] = weight;
        self.adjacency[a].push((b, weight));
        self.adjacency[b].push((a, weight));
    }

    /// Builds a graph from an explicit edge list, in the given order.
    ///
    /// Used for fixtures that random generation cannot produce. Weights share
    /// the generator's domain `[1, n]`.
    ///
    /// # Errors
    /// * `InvalidParameter` for zero vertices, an out-of-range endpoint, a
    ///   self-loop, a weight outside `[1, vertices]` or a duplicate pair
    pub fn from_edges(vertices: usize, edges: &[Edge]) -> Result<Self> {
        if vertices == 0 {
            return Err(Error::invalid_parameter("graph needs at least one vertex"));
        }
        let max_weight = u32::try_from(vertices).unwrap_or(u32::MAX);
        let mut graph = Self::empty(vertices);
        let mut seen = HashSet::with_capacity(edges.len());
        for edge in edges {
            let (a, b) = edge.endpoints();
            if b >= vertices {
                return Err(Error::invalid_parameter(format!(
                    "edge ({a}, {b}) is out of range for {vertices} vertices"
                )));
            }
            if edge.is_self_loop() {
                return Err(Error::invalid_parameter(format!("self-loop at vertex {a}")));
            }
            if edge.weight() == 0 || edge.weight() > max_weight {
                return Err(Error::invalid_parameter(format!(
                    "edge ({a}, {b}) has weight {} outside [1, {vertices}]",
                    edge.weight()
                )));
            }
            if !seen.insert((a, b)) {
                return Err(Error::invalid_parameter(format!(
                    "duplicate edge ({a}, {b})"
                )));
            }
            graph.insert_edge(a, b, edge.weight());
        }
        Ok(graph)
    }

    /// Generates a connected random graph. See [`GraphGenerator::generate`].
    pub fn generate(config: &GeneratorConfig) -> Result<Generation> {
        GraphGenerator::new(config.clone())?.generate()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// The `n x n` symmetric weight matrix.
    pub fn matrix(&self) -> &Array2<u32> {
        &self.matrix
    }

    /// Per-vertex `(neighbor, weight)` lists, in insertion order.
    pub fn adjacency(&self) -> &[Vec<(usize, u32)>] {
        &self.adjacency
    }

    /// # Panics
    /// - if `vertex >= vertex_count()`.
    pub fn neighbors(&self, vertex: usize) -> &[(usize, u32)] {
        &self.adjacency[vertex]
    }

    /// Weight of `{a, b}` according to the matrix, if present.
    pub fn weight(&self, a: usize, b: usize) -> Option<u32> {
        match self.matrix.get([a, b]) {
            Some(&w) if w > 0 => Some(w),
            _ => None,
        }
    }
}

/// A successfully generated graph plus the facts gathered while producing it.
#[derive(Debug, Clone)]
pub struct Generation {
    pub graph: Graph,
    /// The DFS from vertex 0 that accepted the graph.
    pub traversal: DfsTraversal,
    /// Number of graphs drawn, including the accepted one.
    pub attempts: usize,
    /// Wall time across all attempts.
    pub elapsed: Duration,
}

/// Owns the random streams for one generation run.
#[derive(Debug, Clone)]
pub struct GraphGenerator {
    config: GeneratorConfig,
    streams: RandomStreams,
}

impl GraphGenerator {
    /// Validates `config` and seeds the streams.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let streams = RandomStreams::new(config.seed);
        Ok(Self { config, streams })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Draws graphs until one is connected or the attempt budget runs out.
    ///
    /// # Errors
    /// * `GenerationExhausted` if `max_attempts` graphs were drawn and none was connected
    pub fn generate(&mut self) -> Result<Generation> {
        let start = Instant::now();
        for attempt in 1..=self.config.max_attempts {
            let graph = self.sample();
            let traversal = depth_first_search(&graph, 0);
            if traversal.is_connected() {
                let elapsed = start.elapsed();
                info!(
                    "generated connected graph: n={} edges={} attempts={} in {:?}",
                    graph.vertex_count(),
                    graph.edge_count(),
                    attempt,
                    elapsed
                );
                return Ok(Generation {
                    graph,
                    traversal,
                    attempts: attempt,
                    elapsed,
                });
            }
            debug!(
                "attempt {}: reached {} of {} vertices, redrawing",
                attempt,
                traversal.order().len(),
                graph.vertex_count()
            );
        }
        warn!(
            "no connected graph after {} attempts (n={}, p={})",
            self.config.max_attempts, self.config.vertices, self.config.probability
        );
        Err(Error::GenerationExhausted {
            attempts: self.config.max_attempts,
        })
    }

    /// One pass over all pairs, column-major, never touching the diagonal.
    fn sample(&mut self) -> Graph {
        let n = self.config.vertices;
        // validate() guarantees n fits in u32
        let max_weight = u32::try_from(n).unwrap_or(u32::MAX);
        let mut graph = Graph::empty(n);
        for column in 0..n {
            for row in (column + 1)..n {
                if self.streams.edge_draw() <= self.config.probability {
                    let weight = self.streams.weight_draw(max_weight);
                    graph.insert_edge(column, row, weight);
                }
            }
        }
        graph
    }
}
