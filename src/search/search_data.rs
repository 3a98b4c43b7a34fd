use std::{cell::Cell, cmp::Ordering};

use super::Distance;
use crate::{
    graphs::{vertex::Color, Graph, VertexId},
    heap::IndexTracking,
};

/// Scratch state of a single traversal or search, indexed by vertex id.
///
/// A fresh table is built at the start of every call and dropped when the
/// call returns, so the graph itself never holds traversal state. Distances
/// and heap positions sit in cells because the heap entries of Dijkstra's
/// algorithm read them while the search updates them.
pub struct SearchData {
    colors: Vec<Color>,
    distances: Vec<Cell<Distance>>,
    positions: Vec<Cell<Option<usize>>>,
}

impl SearchData {
    /// Every vertex starts unvisited, unreached and outside of any heap.
    pub fn new(graph: &dyn Graph) -> Self {
        let number_of_vertices = graph.number_of_vertices() as usize;
        SearchData {
            colors: vec![Color::Unvisited; number_of_vertices],
            distances: vec![Cell::new(Distance::Unreached); number_of_vertices],
            positions: vec![Cell::new(None); number_of_vertices],
        }
    }

    pub fn color(&self, vertex: VertexId) -> Color {
        self.colors[vertex as usize]
    }

    pub fn set_color(&mut self, vertex: VertexId, color: Color) {
        self.colors[vertex as usize] = color;
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn get_distance(&self, vertex: VertexId) -> Distance {
        self.distances[vertex as usize].get()
    }

    pub fn set_distance(&self, vertex: VertexId, distance: Distance) {
        self.distances[vertex as usize].set(distance);
    }

    /// Heap entry whose key is the distance of `vertex` in this table.
    pub fn entry(&self, vertex: VertexId) -> VertexEntry<'_> {
        VertexEntry {
            vertex,
            distance: &self.distances[vertex as usize],
            position: &self.positions[vertex as usize],
        }
    }
}

/// Handle of a vertex inside a Dijkstra heap.
///
/// Key and position live in the [`SearchData`] the entry was created from, so
/// any entry for the same vertex observes the current position and an update
/// of the distance is immediately visible to the heap.
#[derive(Clone, Copy, Debug)]
pub struct VertexEntry<'a> {
    pub vertex: VertexId,
    distance: &'a Cell<Distance>,
    position: &'a Cell<Option<usize>>,
}

impl VertexEntry<'_> {
    pub fn distance(&self) -> Distance {
        self.distance.get()
    }
}

impl IndexTracking for VertexEntry<'_> {
    fn position(&self) -> Option<usize> {
        self.position.get()
    }

    fn set_position(&mut self, position: Option<usize>) {
        self.position.set(position);
    }
}

// Ties on the distance are broken by vertex id to keep `Ord` consistent with
// `Eq`.
impl Ord for VertexEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance()
            .cmp(&other.distance())
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for VertexEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for VertexEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for VertexEntry<'_> {}

#[cfg(test)]
mod tests {
    use super::SearchData;
    use crate::{
        graphs::{undirected_graph::UndirectedGraph, vertex::Color},
        heap::{min_heap::MinHeap, IndexTracking},
        search::Distance,
    };

    fn three_vertices() -> UndirectedGraph<u8> {
        let mut graph = UndirectedGraph::new();
        for vertex in 0..3 {
            graph.insert_vertex(vertex).unwrap();
        }
        graph
    }

    #[test]
    fn starts_neutral_for_searches() {
        let graph = three_vertices();
        let data = SearchData::new(&graph);

        assert!(data.colors().iter().all(|&color| color == Color::Unvisited));
        assert_eq!(data.get_distance(2), Distance::Unreached);
        assert_eq!(data.entry(1).position(), None);
    }

    #[test]
    fn decrease_key_through_shared_cells() {
        let graph = three_vertices();
        let data = SearchData::new(&graph);
        data.set_distance(0, Distance::ZERO);

        let mut heap = MinHeap::from_elements((0..3).map(|vertex| data.entry(vertex)));
        assert_eq!(heap.peek().map(|entry| entry.vertex), Some(0));

        let root = heap.extract_min().unwrap();
        assert_eq!(root.position(), None);
        assert_eq!(data.entry(0).position(), None);

        data.set_distance(2, Distance::Finite(1));
        heap.reorder(&data.entry(2));
        assert_eq!(heap.peek().map(|entry| entry.vertex), Some(2));
        assert_eq!(data.entry(2).position(), Some(0));
        assert!(heap.contains(&data.entry(1)));
    }
}
