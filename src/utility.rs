use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::*;

use crate::graphs::{undirected_graph::UndirectedGraph, VertexId, Weight};

pub fn get_progressbar(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    if let Ok(style) =
        ProgressStyle::with_template(" {msg} {wide_bar} estimated remaining: {eta_precise}")
    {
        bar.set_style(style);
    }
    bar
}

/// Random connected graph on `number_of_vertices` vertices.
///
/// A random spanning tree guarantees connectivity, then random extra edges
/// are added until `number_of_edges` is reached or the graph is complete.
pub fn random_graph<R: Rng>(
    rng: &mut R,
    number_of_vertices: u32,
    number_of_edges: u32,
    max_weight: Weight,
) -> UndirectedGraph<u32> {
    let mut graph = UndirectedGraph::new();
    for vertex in 0..number_of_vertices {
        // Fresh elements can not collide.
        let _ = graph.insert_vertex(vertex);
    }

    let max_weight = max_weight.max(1);
    let connect = |graph: &mut UndirectedGraph<u32>, rng: &mut R, tail: VertexId, head| {
        graph
            .connect_ids(tail, head, rng.gen_range(1..=max_weight))
            .is_ok()
    };

    let mut edges = 0;
    for head in 1..number_of_vertices {
        let tail = rng.gen_range(0..head);
        if connect(&mut graph, &mut *rng, tail, head) {
            edges += 1;
        }
    }

    let complete = number_of_vertices as u64 * (number_of_vertices as u64).saturating_sub(1) / 2;
    let target = (number_of_edges as u64).min(complete);
    while (edges as u64) < target {
        let tail = rng.gen_range(0..number_of_vertices);
        let head = rng.gen_range(0..number_of_vertices);
        if connect(&mut graph, &mut *rng, tail, head) {
            edges += 1;
        }
    }

    graph
}

/// Random pairs of distinct vertices.
pub fn random_requests<R: Rng>(
    rng: &mut R,
    number_of_vertices: u32,
    number_of_requests: u32,
) -> Vec<(VertexId, VertexId)> {
    if number_of_vertices <= 1 {
        // not enough vertices to get a request with source != target
        return Vec::new();
    }

    (0..number_of_requests)
        .map(|_| {
            // guarantee that source != target
            let source = rng.gen_range(0..number_of_vertices);
            let mut target = rng.gen_range(0..number_of_vertices - 1);
            if target >= source {
                target += 1;
            }
            (source, target)
        })
        .collect()
}
