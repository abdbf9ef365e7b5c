/// Disjoint-set (union-find) over vertices `0..n`, union by rank.
///
/// Vertices live in one arena; a vertex refers to its parent by index and a
/// root is its own parent. Copying the structure is a flat copy of two vectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl UnionFind {
    /// Initializes `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            sets: n,
        }
    }

    /// Finds the representative (root) of the set containing `x`.
    /// Uses path compression.
    ///
    /// # Panics
    /// - if `x >= len()`.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Unites the sets containing `x` and `y`.
    /// Returns `true` if a union actually occurred (i.e., they were disjoint).
    ///
    /// The lower-rank root goes under the higher-rank one; on a tie `y`'s root
    /// goes under `x`'s and that root's rank grows by one.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let rx = self.find(x);
        let ry = self.find(y);
        if rx == ry {
            return false;
        }
        match self.rank[rx].cmp(&self.rank[ry]) {
            std::cmp::Ordering::Less => self.parent[rx] = ry,
            std::cmp::Ordering::Greater => self.parent[ry] = rx,
            std::cmp::Ordering::Equal => {
                self.parent[ry] = rx;
                self.rank[rx] += 1;
            }
        }
        self.sets -= 1;
        true
    }

    /// True when `x` and `y` share a representative.
    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    pub fn rank(&self, x: usize) -> u8 {
        self.rank[x]
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets remaining.
    pub fn set_count(&self) -> usize {
        self.sets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let mut uf = UnionFind::new(4);
        assert_eq!(uf.len(), 4);
        assert_eq!(uf.set_count(), 4);
        for v in 0..4 {
            assert_eq!(uf.find(v), v);
            assert_eq!(uf.rank(v), 0);
        }
    }

    #[test]
    fn test_union_by_rank() {
        let mut uf = UnionFind::new(4);
        assert!(uf.union(0, 1));
        // equal ranks: 1 goes under 0, 0's rank grows
        assert_eq!(uf.find(1), 0);
        assert_eq!(uf.rank(0), 1);

        // singleton 2 (rank 0) goes under root 0 (rank 1)
        assert!(uf.union(2, 1));
        assert_eq!(uf.find(2), 0);
        assert_eq!(uf.rank(0), 1);
        assert_eq!(uf.set_count(), 2);
    }

    #[test]
    fn test_union_same_set_is_noop() {
        let mut uf = UnionFind::new(3);
        uf.union(0, 1);
        let before = uf.clone();
        assert!(!uf.union(1, 0));
        assert_eq!(uf, before);
        assert!(uf.connected(0, 1));
        assert!(!uf.connected(0, 2));
    }

    #[test]
    fn test_deep_chain_terminates() {
        let n = 200_000;
        let mut uf = UnionFind::new(n);
        for v in 1..n {
            uf.union(0, v);
        }
        assert_eq!(uf.set_count(), 1);
        assert_eq!(uf.find(n - 1), uf.find(0));
    }

    #[test]
    fn test_empty() {
        let uf = UnionFind::new(0);
        assert!(uf.is_empty());
        assert_eq!(uf.set_count(), 0);
    }
}
