use std::time::{Duration, Instant};

use clap::Parser;
use indexed_paths::{
    graphs::graph_functions::validate_path,
    heap::HeapKind,
    utility::{get_progressbar, random_graph, random_requests},
    Graph, UndirectedGraph,
};
use indicatif::ProgressIterator;
use rand::{rngs::StdRng, SeedableRng};

/// Compares the binary and the array heap on a random graph.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of vertices
    #[arg(short, long, default_value_t = 1_000)]
    vertices: u32,
    /// Number of edges
    #[arg(short, long, default_value_t = 5_000)]
    edges: u32,
    /// Number of queries per heap
    #[arg(short, long, default_value_t = 100)]
    queries: u32,
    /// Largest edge weight
    #[arg(long, default_value_t = 100)]
    max_weight: u32,
    /// Seed of the random graph and queries
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn benchmark(
    graph: &UndirectedGraph<u32>,
    requests: &[(u32, u32)],
    heap_kind: HeapKind,
) -> indexed_paths::Result<Duration> {
    let bar = get_progressbar(&format!("{:?} heap", heap_kind), requests.len() as u64);

    let mut total = Duration::ZERO;
    for &(source, target) in requests.iter().progress_with(bar) {
        let start = Instant::now();
        let path = graph.dijkstra_ids(source, target, heap_kind)?;
        total += start.elapsed();

        if let Err(err) = validate_path(graph, &path) {
            log::error!("{:?} heap returned a wrong path: {}", heap_kind, err);
        }
    }

    Ok(total / requests.len().max(1) as u32)
}

fn main() -> indexed_paths::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut rng = StdRng::seed_from_u64(args.seed);
    let graph = random_graph(&mut rng, args.vertices, args.edges, args.max_weight);
    let requests = random_requests(&mut rng, graph.number_of_vertices(), args.queries);
    println!(
        "random graph with {} vertices and {} edges, preferred heap {:?}",
        graph.number_of_vertices(),
        graph.number_of_edges(),
        graph.preferred_heap()
    );

    for heap_kind in [HeapKind::Binary, HeapKind::Array] {
        let average_duration = benchmark(&graph, &requests, heap_kind)?;
        println!("average {:?} heap duration was {:?}", heap_kind, average_duration);
    }

    Ok(())
}
