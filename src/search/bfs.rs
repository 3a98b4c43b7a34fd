use std::collections::VecDeque;

use log::debug;

use super::{reconstruct_path, search_data::SearchData, Distance, Path};
use crate::{
    error::Result,
    graphs::{check_vertex, Graph, VertexId},
};

/// Shortest path by number of edges.
///
/// Distances are assigned layer by layer, every vertex getting its parent's
/// distance plus one the first time it is reached. The path is then read
/// backwards from `destination` by stepping to any neighbor one layer closer.
pub fn unweighted_path(graph: &dyn Graph, origin: VertexId, destination: VertexId) -> Result<Path> {
    check_vertex(graph, origin)?;
    check_vertex(graph, destination)?;

    if origin == destination {
        return Ok(Path {
            vertices: vec![origin],
            distance: Distance::ZERO,
        });
    }

    let data = SearchData::new(graph);
    data.set_distance(origin, Distance::ZERO);

    let mut queue = VecDeque::from([origin]);
    while let Some(tail) = queue.pop_front() {
        let distance_tail = data.get_distance(tail);
        for edge in graph.edges(tail) {
            if !data.get_distance(edge.head).is_reached() {
                data.set_distance(edge.head, distance_tail + 1);
                queue.push_back(edge.head);
            }
        }
    }

    let distance = data.get_distance(destination);
    if !distance.is_reached() {
        debug!("{} is not reachable from {}", destination, origin);
        return Ok(Path::unreachable());
    }

    let vertices = reconstruct_path(
        graph,
        &|vertex: VertexId| data.get_distance(vertex),
        origin,
        destination,
        |current, _, neighbor| neighbor + 1 == current,
    );

    Ok(Path { vertices, distance })
}
