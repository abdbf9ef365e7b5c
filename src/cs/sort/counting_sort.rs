use crate::cs::graph::Edge;

/// Sorts edges by weight, then source, then destination, using counting sort.
///
/// Bucketing by weight alone only orders the weights; ties would keep their
/// input order. To honor the full edge order regardless of input, three
/// stable counting passes run from the least significant key up
/// (destination, source, weight), the way LSD radix sort does.
///
/// # Complexity
/// * Time: O(n + w + v) where w is the largest weight and v the largest vertex index
/// * Space: O(n + w + v)
pub fn counting_sort(edges: &mut [Edge]) {
    if edges.len() <= 1 {
        return;
    }
    let max_destination = edges.iter().map(Edge::destination).max().unwrap_or(0);
    let max_source = edges.iter().map(Edge::source).max().unwrap_or(0);
    let max_weight = edges.iter().map(|e| e.weight() as usize).max().unwrap_or(0);

    counting_pass(edges, max_destination, Edge::destination);
    counting_pass(edges, max_source, Edge::source);
    counting_pass(edges, max_weight, |e| e.weight() as usize);
}

/// One stable counting pass over keys in `[0, max_key]`.
fn counting_pass<F>(edges: &mut [Edge], max_key: usize, key: F)
where
    F: Fn(&Edge) -> usize,
{
    let mut counts = vec![0usize; max_key + 1];
    for edge in edges.iter() {
        counts[key(edge)] += 1;
    }
    // counts[k] becomes the number of edges with key <= k
    for k in 1..counts.len() {
        counts[k] += counts[k - 1];
    }

    let mut output = edges.to_vec();
    // Walking backwards keeps equal keys in their input order.
    for edge in edges.iter().rev() {
        let k = key(edge);
        counts[k] -= 1;
        output[counts[k]] = *edge;
    }
    edges.copy_from_slice(&output);
}
