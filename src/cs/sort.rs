//! Sorting algorithms.
//!
//! Three interchangeable sorts used to order edges for Kruskal's algorithm:
//! - Insertion sort
//! - Counting sort (edges only; keys are bounded integers)
//! - Quicksort with Hoare partitioning
//!
//! All three produce the order defined by [`Edge`]'s `Ord` impl: weight,
//! then source, then destination.
//!
//! # Examples
//!
//! ```rust
//! use mst_lab::cs::graph::Edge;
//! use mst_lab::cs::sort::SortAlgorithm;
//!
//! let mut edges = vec![Edge::new(0, 1, 3), Edge::new(1, 2, 1)];
//! SortAlgorithm::Counting.sort(&mut edges);
//! assert_eq!(edges[0], Edge::new(1, 2, 1));
//! ```

use std::fmt;

use crate::cs::graph::Edge;

pub mod counting_sort;
pub mod insertion_sort;
pub mod quicksort;

pub use counting_sort::counting_sort;
pub use insertion_sort::insertion_sort;
pub use quicksort::quicksort;

/// Selects one of the edge sorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    Insertion,
    Counting,
    Quick,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 3] = [
        SortAlgorithm::Insertion,
        SortAlgorithm::Counting,
        SortAlgorithm::Quick,
    ];

    /// Sorts `edges` in place with this algorithm.
    pub fn sort(&self, edges: &mut [Edge]) {
        match self {
            SortAlgorithm::Insertion => insertion_sort(edges),
            SortAlgorithm::Counting => counting_sort(edges),
            SortAlgorithm::Quick => quicksort(edges),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SortAlgorithm::Insertion => "INSERTION SORT",
            SortAlgorithm::Counting => "COUNT SORT",
            SortAlgorithm::Quick => "QUICKSORT",
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
