/// Sorts `arr` in place by insertion.
///
/// Each element is shifted left past every larger predecessor. Stable.
///
/// # Complexity
/// * Time: O(n^2) worst case, O(n) on sorted input
/// * Space: O(1)
pub fn insertion_sort<T: Ord>(arr: &mut [T]) {
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && arr[j - 1] > arr[j] {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::graph::Edge;

    #[test]
    fn test_insertion_sort() {
        let mut arr = vec![5, 2, 9, 1, 5, 6];
        insertion_sort(&mut arr);
        assert_eq!(arr, vec![1, 2, 5, 5, 6, 9]);
    }

    #[test]
    fn test_insertion_sort_trivial() {
        let mut empty: Vec<u32> = vec![];
        insertion_sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![1];
        insertion_sort(&mut one);
        assert_eq!(one, vec![1]);
    }

    #[test]
    fn test_insertion_sort_edges_tie_breaks() {
        let mut edges = vec![
            Edge::new(1, 2, 4),
            Edge::new(0, 3, 2),
            Edge::new(0, 2, 2),
            Edge::new(3, 1, 2),
            Edge::new(0, 1, 1),
        ];
        insertion_sort(&mut edges);
        assert_eq!(
            edges,
            vec![
                Edge::new(0, 1, 1),
                Edge::new(0, 2, 2),
                Edge::new(0, 3, 2),
                Edge::new(1, 3, 2),
                Edge::new(1, 2, 4),
            ]
        );
    }

    #[test]
    fn test_insertion_sort_reversed() {
        let mut arr: Vec<i64> = (0..200).rev().collect();
        insertion_sort(&mut arr);
        assert_eq!(arr, (0..200).collect::<Vec<_>>());
    }
}
