use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use mst_lab::cs::graph::{list_edges, Edge, GeneratorConfig, Graph};
use mst_lab::cs::sort::SortAlgorithm;

const SEED: u64 = 42;
const VERTEX_COUNTS: &[usize] = &[20, 60, 120];

fn shuffled_edges(n: usize) -> Vec<Edge> {
    let generation = Graph::generate(&GeneratorConfig::new(n, SEED, 0.5))
        .unwrap_or_else(|err| panic!("benchmark graph generation failed: {err}"));
    let mut edges = list_edges(&generation.graph);
    edges.shuffle(&mut StdRng::seed_from_u64(SEED));
    edges
}

fn bench_edge_sorts(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_sorts");
    for &n in VERTEX_COUNTS {
        let edges = shuffled_edges(n);
        for algorithm in SortAlgorithm::ALL {
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), edges.len()),
                &edges,
                |b, edges| {
                    b.iter(|| {
                        let mut data = edges.clone();
                        algorithm.sort(black_box(&mut data));
                        data
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_equal_weights(c: &mut Criterion) {
    // Worst case for partition schemes that stall on duplicate keys.
    let edges: Vec<Edge> = (0..100)
        .flat_map(|a| ((a + 1)..100).map(move |b| Edge::new(a, b, 1)))
        .rev()
        .collect();
    let mut group = c.benchmark_group("equal_weights");
    for algorithm in [SortAlgorithm::Counting, SortAlgorithm::Quick] {
        group.bench_function(algorithm.name(), |b| {
            b.iter(|| {
                let mut data = edges.clone();
                algorithm.sort(black_box(&mut data));
                data
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_edge_sorts, bench_equal_weights);
criterion_main!(benches);
