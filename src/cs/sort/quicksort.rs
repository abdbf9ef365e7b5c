/// Sorts `arr` in place with Hoare-partition quicksort.
///
/// The pivot is the first element of each subrange. Equal keys stop both
/// scans and get swapped, so runs of duplicates still split near the middle
/// and every partition makes progress.
///
/// # Complexity
/// * Time: O(n log n) expected, O(n^2) on already-sorted input
/// * Space: O(log n) stack, since only the smaller side is recursed into
pub fn quicksort<T: Ord + Clone>(arr: &mut [T]) {
    if arr.len() <= 1 {
        return;
    }
    sort_range(arr, 0, arr.len() - 1);
}

/// Sorts the inclusive range `[lo, hi]`.
fn sort_range<T: Ord + Clone>(arr: &mut [T], mut lo: usize, mut hi: usize) {
    while lo < hi {
        let split = partition(arr, lo, hi);
        // [lo, split] and [split + 1, hi] are both non-empty
        if split - lo < hi - split {
            sort_range(arr, lo, split);
            lo = split + 1;
        } else {
            sort_range(arr, split + 1, hi);
            hi = split;
        }
    }
}

/// Hoare partition of `[lo, hi]` around `arr[lo]`.
///
/// Returns `j` in `[lo, hi)` such that every element of `[lo, j]` is `<=` every
/// element of `[j + 1, hi]`.
fn partition<T: Ord + Clone>(arr: &mut [T], lo: usize, hi: usize) -> usize {
    let pivot = arr[lo].clone();
    let mut i = lo;
    let mut j = hi;
    loop {
        while arr[i] < pivot {
            i += 1;
        }
        while arr[j] > pivot {
            j -= 1;
        }
        if i >= j {
            return j;
        }
        arr.swap(i, j);
        i += 1;
        j -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::graph::Edge;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_quicksort() {
        let mut arr = vec![3, 6, 2, 7, 1, 8, 5, 4];
        quicksort(&mut arr);
        assert_eq!(arr, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_quicksort_trivial() {
        let mut empty: Vec<i32> = vec![];
        quicksort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![9];
        quicksort(&mut one);
        assert_eq!(one, vec![9]);

        let mut two = vec![2, 1];
        quicksort(&mut two);
        assert_eq!(two, vec![1, 2]);
    }

    #[test]
    fn test_quicksort_all_equal() {
        let mut arr = vec![5; 10_000];
        quicksort(&mut arr);
        assert!(arr.iter().all(|&x| x == 5));
    }

    #[test]
    fn test_quicksort_equal_weights_edges() {
        // Same weight everywhere; tie-breaks decide the order.
        let mut edges: Vec<Edge> = (0..40)
            .rev()
            .flat_map(|a| ((a + 1)..41).map(move |b| Edge::new(a, b, 3)))
            .collect();
        let mut expected = edges.clone();
        expected.sort();
        quicksort(&mut edges);
        assert_eq!(edges, expected);
    }

    #[test]
    fn test_quicksort_sorted_and_reversed() {
        let mut ascending: Vec<u32> = (0..5_000).collect();
        quicksort(&mut ascending);
        assert!(ascending.windows(2).all(|w| w[0] <= w[1]));

        let mut descending: Vec<u32> = (0..5_000).rev().collect();
        quicksort(&mut descending);
        assert_eq!(descending, (0..5_000).collect::<Vec<_>>());
    }

    #[test]
    fn test_quicksort_matches_std() {
        let mut rng = StdRng::seed_from_u64(17);
        for len in [3, 10, 257, 1_000] {
            let mut arr: Vec<u8> = (0..len).map(|_| rng.gen_range(0..4)).collect();
            let mut expected = arr.clone();
            expected.sort();
            quicksort(&mut arr);
            assert_eq!(arr, expected);
        }
    }
}
