use std::path::PathBuf;

use clap::Parser;
use indexed_paths::{
    graphs::graph_reader::{read_graph, FileType},
    heap::HeapKind,
    ElementPath,
};
use itertools::Itertools;

/// Computes a shortest path between two vertices of a graph.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file
    #[arg(short, long)]
    graph: PathBuf,
    /// Type of the input file
    #[arg(short = 't', long, value_enum, default_value = "fmi")]
    file_type: FileType,
    /// Name of the origin vertex
    #[arg(short, long)]
    source: String,
    /// Name of the destination vertex
    #[arg(short = 'd', long)]
    target: String,
    /// Heap used by Dijkstra's algorithm, chosen by density if not given
    #[arg(long, value_enum)]
    heap: Option<HeapKind>,
    /// Count edges instead of adding up their weights
    #[arg(short, long)]
    unweighted: bool,
    /// Print the path as json
    #[arg(long)]
    json: bool,
}

fn main() -> indexed_paths::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let graph = read_graph(&args.graph, args.file_type)?;

    let path: ElementPath<String> = if args.unweighted {
        graph.unweighted_path(&args.source, &args.target)?
    } else {
        let heap = args.heap.unwrap_or_else(|| graph.preferred_heap());
        graph.dijkstra_with(&args.source, &args.target, heap)?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&path)?);
    } else if path.is_empty() {
        println!("{} is not reachable from {}", args.target, args.source);
    } else {
        println!("{}", path.elements.iter().join(" -> "));
        println!("distance {}", path.distance);
    }

    Ok(())
}
