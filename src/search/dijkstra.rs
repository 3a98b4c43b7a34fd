use log::debug;

use super::{
    reconstruct_path,
    search_data::{SearchData, VertexEntry},
    Distance, Path,
};
use crate::{
    error::Result,
    graphs::{check_vertex, Graph, VertexId},
    heap::{array_heap::ArrayHeap, min_heap::MinHeap, DijkstraHeap, HeapKind},
};

/// Shortest path by total edge weight.
///
/// The heap is built over all vertices at once and drained completely, there
/// is no early exit at `destination`. The path is read backwards from
/// `destination` by stepping to a neighbor whose distance plus the weight of
/// the connecting edge equals the current distance.
pub fn dijkstra(
    graph: &dyn Graph,
    origin: VertexId,
    destination: VertexId,
    heap_kind: HeapKind,
) -> Result<Path> {
    check_vertex(graph, origin)?;
    check_vertex(graph, destination)?;

    let data = SearchData::new(graph);
    data.set_distance(origin, Distance::ZERO);

    let entries = graph.vertices().map(|vertex| data.entry(vertex));
    let settled = match heap_kind {
        HeapKind::Binary => settle_all(graph, &data, MinHeap::from_elements(entries)),
        HeapKind::Array => settle_all(graph, &data, ArrayHeap::from_elements(entries)),
    };

    let distance = data.get_distance(destination);
    debug!(
        "dijkstra ({:?}) from {} to {}: {} vertices settled, distance {}",
        heap_kind, origin, destination, settled, distance
    );
    if !distance.is_reached() {
        return Ok(Path::unreachable());
    }

    let vertices = reconstruct_path(
        graph,
        &|vertex: VertexId| data.get_distance(vertex),
        origin,
        destination,
        |current, edge, neighbor| neighbor + edge.weight == current,
    );

    Ok(Path { vertices, distance })
}

/// Extracts vertices until the heap is empty, relaxing every edge out of the
/// extracted vertex. Returns the number of vertices that were reached.
fn settle_all<'a, H>(graph: &dyn Graph, data: &'a SearchData, mut heap: H) -> usize
where
    H: DijkstraHeap<VertexEntry<'a>>,
{
    let mut settled = 0;

    while let Ok(entry) = heap.extract_min() {
        let distance_tail = entry.distance();
        if distance_tail.is_reached() {
            settled += 1;
        }

        for edge in graph.edges(entry.vertex) {
            let alternative_distance_head = distance_tail + edge.weight;
            if alternative_distance_head < data.get_distance(edge.head) {
                data.set_distance(edge.head, alternative_distance_head);
                heap.reorder(&data.entry(edge.head));
            }
        }
    }

    settled
}
