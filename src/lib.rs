//! Random connected graphs and minimum spanning trees.
//!
//! A graph is generated once from `(n, seed, p)` and then analyzed many ways:
//! edges are extracted from its adjacency matrix and adjacency list, ordered by
//! insertion sort, counting sort and quicksort, and fed to Kruskal's
//! algorithm; Prim's algorithm cross-checks the result.

pub mod cs;

pub use cs::{error, graph, randomized, sort};
pub use error::{Error, Result};
