use std::path::PathBuf;

use clap::Parser;
use indexed_paths::{
    graphs::graph_reader::{read_graph, FileType},
    TraversalOrder,
};

/// Prints the vertices of a graph in BFS or DFS order.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file
    #[arg(short, long)]
    graph: PathBuf,
    /// Type of the input file
    #[arg(short = 't', long, value_enum, default_value = "fmi")]
    file_type: FileType,
    /// Name of the vertex the traversal starts at
    #[arg(short, long)]
    origin: String,
    /// Traversal order
    #[arg(long, value_enum, default_value = "bfs")]
    order: TraversalOrder,
}

fn main() -> indexed_paths::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let graph = read_graph(&args.graph, args.file_type)?;

    graph.traverse(&args.origin, args.order, |vertex| {
        println!("{} (degree {})", vertex.get(), vertex.degree());
    })?;
    println!("graph is connected: {}", graph.is_connected());

    Ok(())
}
