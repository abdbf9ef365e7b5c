use std::cmp::Ordering;
use std::fmt;

/// An undirected, weighted edge.
///
/// Endpoints are stored normalized (`source <= destination`), so `(a, b, w)`
/// and `(b, a, w)` compare, hash and order identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    source: usize,
    destination: usize,
    weight: u32,
}

impl Edge {
    /// Creates the edge `{a, b}` with the given weight.
    pub fn new(a: usize, b: usize, weight: u32) -> Self {
        Self {
            source: a.min(b),
            destination: a.max(b),
            weight,
        }
    }

    /// The smaller endpoint.
    pub fn source(&self) -> usize {
        self.source
    }

    /// The larger endpoint.
    pub fn destination(&self) -> usize {
        self.destination
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Both endpoints as `(source, destination)`.
    pub fn endpoints(&self) -> (usize, usize) {
        (self.source, self.destination)
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.destination
    }
}

/// Weight ascending, then source ascending, then destination ascending.
impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then(self.source.cmp(&other.source))
            .then(self.destination.cmp(&other.destination))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} weight = {}",
            self.source, self.destination, self.weight
        )
    }
}

/// Sum of the weights in `edges`.
pub fn total_weight(edges: &[Edge]) -> u64 {
    edges.iter().map(|e| u64::from(e.weight)).sum()
}
