//! End-to-end comparison run: generate once, then extract, sort and build
//! spanning trees for every representation and sort algorithm.
//!
//! Every phase is timed. Rendering the results is left to the caller (see
//! the `mst-report` binary).

use log::{error, info};
use std::time::{Duration, Instant};

use crate::cs::error::Result;
use crate::cs::graph::config::GeneratorConfig;
use crate::cs::graph::edge::{total_weight, Edge};
use crate::cs::graph::extract::{extract, Representation};
use crate::cs::graph::kruskal::{kruskal, SpanningTree};
use crate::cs::graph::prim::prim;
use crate::cs::graph::random_graph::{Generation, Graph};
use crate::cs::sort::SortAlgorithm;

/// One extracted-and-sorted edge list.
#[derive(Debug, Clone)]
pub struct SortRun {
    pub representation: Representation,
    pub algorithm: SortAlgorithm,
    pub edges: Vec<Edge>,
    pub elapsed: Duration,
}

impl SortRun {
    pub fn total_weight(&self) -> u64 {
        total_weight(&self.edges)
    }
}

/// Which builder produced an [`MstRun`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MstMethod {
    Kruskal(Representation, SortAlgorithm),
    Prim(Representation),
}

#[derive(Debug, Clone)]
pub struct MstRun {
    pub method: MstMethod,
    pub tree: SpanningTree,
    pub elapsed: Duration,
}

/// Everything computed for one `(n, seed, p)`.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub generation: Generation,
    pub sort_runs: Vec<SortRun>,
    pub kruskal_runs: Vec<MstRun>,
    pub prim: MstRun,
}

impl Analysis {
    pub fn graph(&self) -> &Graph {
        &self.generation.graph
    }

    /// Prim's MST weight. Kruskal runs are checked against it in debug builds only.
    pub fn mst_weight(&self) -> u64 {
        self.prim.tree.total_weight
    }
}

/// Generates a graph from `config` and analyzes it.
///
/// # Errors
/// * `InvalidParameter` if `config` fails validation
/// * `GenerationExhausted` if no connected graph was drawn within the budget
pub fn analyze(config: &GeneratorConfig) -> Result<Analysis> {
    let generation = Graph::generate(config)?;
    analyze_generation(generation)
}

/// Runs every sort and spanning-tree builder over an already generated graph.
///
/// # Errors
/// * `DisconnectedGraph` if the graph is not connected
pub fn analyze_generation(generation: Generation) -> Result<Analysis> {
    let graph = &generation.graph;
    let n = graph.vertex_count();

    let mut sort_runs = Vec::with_capacity(Representation::ALL.len() * SortAlgorithm::ALL.len());
    for representation in Representation::ALL {
        for algorithm in SortAlgorithm::ALL {
            let start = Instant::now();
            let mut edges = extract(graph, representation);
            algorithm.sort(&mut edges);
            let elapsed = start.elapsed();
            info!("{algorithm} with {representation}: {} edges in {elapsed:?}", edges.len());
            sort_runs.push(SortRun {
                representation,
                algorithm,
                edges,
                elapsed,
            });
        }
    }

    let mut kruskal_runs = Vec::with_capacity(sort_runs.len());
    for run in &sort_runs {
        let start = Instant::now();
        let tree = kruskal(&run.edges, n)?;
        kruskal_runs.push(MstRun {
            method: MstMethod::Kruskal(run.representation, run.algorithm),
            tree,
            elapsed: start.elapsed(),
        });
    }

    let edges = extract(graph, Representation::List);
    let start = Instant::now();
    let tree = prim(&edges, n)?;
    let prim = MstRun {
        method: MstMethod::Prim(Representation::List),
        tree,
        elapsed: start.elapsed(),
    };

    for run in &kruskal_runs {
        if run.tree.total_weight != prim.tree.total_weight {
            error!(
                "{:?} weight {} disagrees with Prim weight {}",
                run.method, run.tree.total_weight, prim.tree.total_weight
            );
        }
        debug_assert_eq!(run.tree.total_weight, prim.tree.total_weight);
    }

    Ok(Analysis {
        generation,
        sort_runs,
        kruskal_runs,
        prim,
    })
}
