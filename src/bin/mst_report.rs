//! Prints a full analysis for one random graph.
//!
//! `mst-report -n 6 -s 42 -p 0.5` shows the adjacency matrix and list, the
//! DFS table, every sorted edge list and every spanning tree. Set `RUST_LOG`
//! for library logging.

use clap::{value_parser, Arg, Command};
use std::process::ExitCode;
use std::time::Duration;

use mst_lab::cs::graph::{analyze, Analysis, GeneratorConfig, MstMethod, DEFAULT_MAX_ATTEMPTS};
use mst_lab::cs::graph::{Edge, Graph};

fn make_options_parser() -> Command {
    Command::new("mst-report")
        .about("Generates a random connected graph and compares MST pipelines")
        .arg(
            Arg::new("vertices")
                .short('n')
                .long("vertices")
                .help("Number of vertices (at least 2)")
                .required(true)
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .help("Seed for the edge stream; the weight stream uses twice this")
                .required(true)
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("probability")
                .short('p')
                .long("probability")
                .help("Probability in [0, 1] that two vertices are joined")
                .required(true)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(f64)),
        )
        .arg(
            Arg::new("max-attempts")
                .long("max-attempts")
                .help("Give up after this many disconnected graphs [default: 10000]")
                .value_parser(value_parser!(usize)),
        )
}

fn parse_config() -> Result<GeneratorConfig, clap::Error> {
    let matches = make_options_parser().try_get_matches()?;
    // required args are always present once parsing succeeds
    let vertices = matches.get_one::<usize>("vertices").copied().unwrap_or(0);
    let seed = matches.get_one::<u64>("seed").copied().unwrap_or(0);
    let probability = matches.get_one::<f64>("probability").copied().unwrap_or(f64::NAN);
    let max_attempts = matches
        .get_one::<usize>("max-attempts")
        .copied()
        .unwrap_or(DEFAULT_MAX_ATTEMPTS);
    Ok(GeneratorConfig::new(vertices, seed, probability).with_max_attempts(max_attempts))
}

fn millis(elapsed: Duration) -> u128 {
    elapsed.as_millis()
}

fn print_matrix(graph: &Graph) {
    println!("\nThe graph as an adjacency matrix:\n");
    for row in graph.matrix().rows() {
        let cells: Vec<String> = row.iter().map(|w| w.to_string()).collect();
        println!(" {}\n", cells.join("   "));
    }
}

fn print_list(graph: &Graph) {
    println!("The graph as an adjacency list:");
    for (vertex, neighbors) in graph.adjacency().iter().enumerate() {
        let cells: Vec<String> = neighbors
            .iter()
            .map(|(neighbor, weight)| format!("{neighbor}({weight})"))
            .collect();
        println!("{vertex}-> {}", cells.join(" "));
    }
    println!();
}

fn print_dfs(analysis: &Analysis) {
    let traversal = &analysis.generation.traversal;
    let (vertices, predecessors): (Vec<String>, Vec<String>) = traversal
        .entries()
        .map(|(v, p)| {
            let p = p.map_or_else(|| "-1".to_string(), |p| p.to_string());
            (v.to_string(), p)
        })
        .unzip();
    println!("Depth-First Search:");
    println!("Vertices:");
    println!(" {}", vertices.join(" "));
    println!("Predecessors:");
    println!("{}", predecessors.join(" "));
    println!();
}

fn print_edges(edges: &[Edge]) {
    for edge in edges {
        println!("{edge}");
    }
}

fn print_report(analysis: &Analysis) {
    let generation = &analysis.generation;
    println!(
        "Time to generate the graph: {} milliseconds ({} attempts)",
        millis(generation.elapsed),
        generation.attempts
    );
    print_matrix(&generation.graph);
    print_list(&generation.graph);
    print_dfs(analysis);

    for run in &analysis.sort_runs {
        println!("===================================");
        println!(
            "SORTED EDGES WITH {} USING {}",
            run.representation, run.algorithm
        );
        print_edges(&run.edges);
        println!("Total weight = {}", run.total_weight());
        println!("Runtime: {} milliseconds\n", millis(run.elapsed));
    }

    for run in analysis.kruskal_runs.iter().chain(std::iter::once(&analysis.prim)) {
        println!("===================================");
        match run.method {
            MstMethod::Kruskal(representation, algorithm) => println!(
                "KRUSKAL WITH {representation} USING {algorithm}"
            ),
            MstMethod::Prim(representation) => println!("PRIM WITH {representation}"),
        }
        print_edges(&run.tree.edges);
        println!("Total weight of MST = {}", run.tree.total_weight);
        println!("Runtime: {} milliseconds\n", millis(run.elapsed));
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let config = match parse_config() {
        Ok(config) => config,
        Err(err) => err.exit(),
    };

    match analyze(&config) {
        Ok(analysis) => {
            print_report(&analysis);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
