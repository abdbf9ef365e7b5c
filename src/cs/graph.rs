//! Graph algorithms.
//!
//! This module provides:
//! - Random connected graph generation (adjacency matrix + adjacency list)
//! - Depth-first search connectivity checking
//! - Edge extraction from either representation
//! - Union-find and an addressable binary heap
//! - Kruskal's and Prim's minimum spanning tree algorithms
//! - An analysis pipeline comparing all of the above
//!
//! # Examples
//!
//! ```rust
//! use mst_lab::cs::graph::{kruskal, list_edges, prim, GeneratorConfig, Graph};
//! use mst_lab::cs::sort::quicksort;
//!
//! let generation = Graph::generate(&GeneratorConfig::new(6, 42, 0.5)).unwrap();
//! let mut edges = list_edges(&generation.graph);
//! quicksort(&mut edges);
//!
//! let by_kruskal = kruskal(&edges, 6).unwrap();
//! let by_prim = prim(&edges, 6).unwrap();
//! assert_eq!(by_kruskal.total_weight, by_prim.total_weight);
//! ```

pub mod analysis;
pub mod config;
pub mod dfs;
pub mod edge;
pub mod extract;
pub mod kruskal;
pub mod prim;
pub mod priority_queue;
pub mod random_graph;
pub mod union_find;

pub use analysis::{analyze, analyze_generation, Analysis, MstMethod, MstRun, SortRun};
pub use config::{GeneratorConfig, DEFAULT_MAX_ATTEMPTS};
pub use dfs::{depth_first_search, DfsTraversal};
pub use edge::{total_weight, Edge};
pub use extract::{extract, list_edges, matrix_edges, Representation};
pub use kruskal::{kruskal, SpanningTree};
pub use prim::prim;
pub use priority_queue::PriorityQueue;
pub use random_graph::{Generation, Graph, GraphGenerator};
pub use union_find::UnionFind;
