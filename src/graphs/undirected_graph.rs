use std::{
    fmt::{self, Display},
    hash::Hash,
};

use ahash::{HashMap, HashMapExt};
use log::trace;

use super::{
    edge::{Edge, TaillessEdge, WeightedEdge},
    check_vertex,
    vertex::{Color, TraversalOrder, VertexView},
    Graph, VertexId, Weight, DEFAULT_WEIGHT,
};
use crate::{
    error::{Error, Result},
    heap::HeapKind,
    search::{self, ElementPath, Path},
};

/// Weighted undirected graph over user elements.
///
/// Every element is stored once and identified by a dense [`VertexId`] given
/// in insertion order. Each edge is stored as two neighbor records, one in
/// the adjacency list of either endpoint, and the lists are kept sorted by
/// head. The graph carries no traversal state; searches keep their scratch
/// data in a table of their own.
#[derive(Clone, Debug)]
pub struct UndirectedGraph<T> {
    elements: Vec<T>,
    index: HashMap<T, VertexId>,
    edges: Vec<Vec<TaillessEdge>>,
    number_of_edges: u32,
}

impl<T> UndirectedGraph<T> {
    pub(crate) fn elements_slice(&self) -> &[T] {
        &self.elements
    }

    pub(crate) fn adjacency(&self, vertex: VertexId) -> &[TaillessEdge] {
        &self.edges[vertex as usize]
    }

    pub fn element(&self, vertex: VertexId) -> Option<&T> {
        self.elements.get(vertex as usize)
    }

    /// Elements in insertion order.
    pub fn elements(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.elements.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn clear(&mut self) {
        self.elements.clear();
        self.index.clear();
        self.edges.clear();
        self.number_of_edges = 0;
    }

    /// Calls `visitor` on every vertex in insertion order.
    pub fn for_each_vertex<F>(&self, mut visitor: F)
    where
        F: FnMut(&VertexView<'_, T>),
    {
        for vertex in 0..self.elements.len() as VertexId {
            visitor(&VertexView::new(self, vertex, None));
        }
    }

    fn edge_index(&self, tail: VertexId, head: VertexId) -> std::result::Result<usize, usize> {
        self.edges[tail as usize].binary_search_by_key(&head, |edge| edge.head)
    }

    /// Connects two vertices given by id. All preconditions are checked
    /// before either adjacency list is touched.
    pub fn connect_ids(&mut self, tail: VertexId, head: VertexId, weight: Weight) -> Result<()> {
        if tail == head {
            return Err(Error::SelfLoop);
        }
        if weight == 0 {
            return Err(Error::NonPositiveWeight);
        }
        check_vertex(self, tail)?;
        check_vertex(self, head)?;

        let tail_index = match self.edge_index(tail, head) {
            Ok(_) => return Err(Error::AlreadyConnected(tail, head)),
            Err(index) => index,
        };
        let head_index = match self.edge_index(head, tail) {
            Ok(_) => return Err(Error::AlreadyConnected(tail, head)),
            Err(index) => index,
        };

        self.edges[tail as usize].insert(tail_index, TaillessEdge { head, weight });
        self.edges[head as usize].insert(head_index, TaillessEdge { head: tail, weight });
        self.number_of_edges += 1;
        trace!("connected {} and {} with weight {}", tail, head, weight);

        Ok(())
    }

    pub fn disconnect_ids(&mut self, tail: VertexId, head: VertexId) -> Result<()> {
        check_vertex(self, tail)?;
        check_vertex(self, head)?;

        let (Ok(tail_index), Ok(head_index)) =
            (self.edge_index(tail, head), self.edge_index(head, tail))
        else {
            return Err(Error::NotConnected(tail, head));
        };

        self.edges[tail as usize].remove(tail_index);
        self.edges[head as usize].remove(head_index);
        self.number_of_edges -= 1;
        trace!("disconnected {} and {}", tail, head);

        Ok(())
    }

    /// Shortest path from `origin` to `destination` by number of edges.
    pub fn unweighted_path_ids(&self, origin: VertexId, destination: VertexId) -> Result<Path> {
        search::bfs::unweighted_path(self, origin, destination)
    }

    /// Shortest path from `origin` to `destination` by total edge weight.
    pub fn dijkstra_ids(
        &self,
        origin: VertexId,
        destination: VertexId,
        heap_kind: HeapKind,
    ) -> Result<Path> {
        search::dijkstra::dijkstra(self, origin, destination, heap_kind)
    }
}

impl<T: Eq + Hash + Clone> Default for UndirectedGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> UndirectedGraph<T> {
    pub fn new() -> UndirectedGraph<T> {
        UndirectedGraph {
            elements: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            number_of_edges: 0,
        }
    }

    /// Builds a graph from its elements and edges between their positions.
    pub fn from_edges(elements: Vec<T>, edges: &[WeightedEdge]) -> Result<UndirectedGraph<T>> {
        let mut graph = UndirectedGraph::new();
        for element in elements {
            graph.insert_vertex(element)?;
        }
        for edge in edges {
            graph.connect_ids(edge.tail, edge.head, edge.weight)?;
        }
        Ok(graph)
    }

    pub fn contains(&self, element: &T) -> bool {
        self.index.contains_key(element)
    }

    pub fn vertex_id(&self, element: &T) -> Result<VertexId> {
        self.index
            .get(element)
            .copied()
            .ok_or(Error::VertexNotFound)
    }

    pub fn vertex(&self, element: &T) -> Result<VertexView<'_, T>> {
        let vertex = self.vertex_id(element)?;
        Ok(VertexView::new(self, vertex, None))
    }

    pub fn insert_vertex(&mut self, element: T) -> Result<VertexId> {
        if self.index.contains_key(&element) {
            return Err(Error::DuplicateVertex);
        }

        let vertex = self.elements.len() as VertexId;
        self.index.insert(element.clone(), vertex);
        self.elements.push(element);
        self.edges.push(Vec::new());
        trace!("inserted vertex {}", vertex);

        Ok(vertex)
    }

    /// Removes a vertex together with all its edges. Vertices inserted after
    /// it move down by one id.
    pub fn remove_vertex(&mut self, element: &T) -> Result<T> {
        let removed = self.vertex_id(element)?;

        let incident = std::mem::take(&mut self.edges[removed as usize]);
        for edge in incident.iter() {
            if let Ok(index) = self.edge_index(edge.head, removed) {
                self.edges[edge.head as usize].remove(index);
            }
        }
        self.number_of_edges -= incident.len() as u32;

        self.edges.remove(removed as usize);
        let element = self.elements.remove(removed as usize);
        self.index.remove(&element);

        // Shifting keeps every adjacency list sorted.
        for list in self.edges.iter_mut() {
            for edge in list.iter_mut().filter(|edge| edge.head > removed) {
                edge.head -= 1;
            }
        }
        for vertex in self.index.values_mut().filter(|vertex| **vertex > removed) {
            *vertex -= 1;
        }
        trace!("removed vertex {} and {} edges", removed, incident.len());

        Ok(element)
    }

    pub fn connect(&mut self, a: &T, b: &T, weight: Weight) -> Result<()> {
        if a == b {
            return Err(Error::SelfLoop);
        }
        if weight == 0 {
            return Err(Error::NonPositiveWeight);
        }
        let tail = self.vertex_id(a)?;
        let head = self.vertex_id(b)?;
        self.connect_ids(tail, head, weight)
    }

    /// Connects `a` and `b` with an edge of weight [`DEFAULT_WEIGHT`].
    pub fn connect_default(&mut self, a: &T, b: &T) -> Result<()> {
        self.connect(a, b, DEFAULT_WEIGHT)
    }

    pub fn disconnect(&mut self, a: &T, b: &T) -> Result<()> {
        let tail = self.vertex_id(a)?;
        let head = self.vertex_id(b)?;
        self.disconnect_ids(tail, head)
    }

    pub fn are_neighbors(&self, a: &T, b: &T) -> Result<bool> {
        let tail = self.vertex_id(a)?;
        let head = self.vertex_id(b)?;
        Ok(self.edge_index(tail, head).is_ok())
    }

    pub fn degree_of(&self, element: &T) -> Result<usize> {
        let vertex = self.vertex_id(element)?;
        Ok(self.edges[vertex as usize].len())
    }

    pub fn get_weight(&self, a: &T, b: &T) -> Result<Weight> {
        let tail = self.vertex_id(a)?;
        let head = self.vertex_id(b)?;
        Graph::get_weight(self, &Edge::new(tail, head)).ok_or(Error::NotConnected(tail, head))
    }

    pub fn set_weight(&mut self, a: &T, b: &T, weight: Weight) -> Result<()> {
        if weight == 0 {
            return Err(Error::NonPositiveWeight);
        }
        let tail = self.vertex_id(a)?;
        let head = self.vertex_id(b)?;

        let (Ok(tail_index), Ok(head_index)) =
            (self.edge_index(tail, head), self.edge_index(head, tail))
        else {
            return Err(Error::NotConnected(tail, head));
        };

        self.edges[tail as usize][tail_index].weight = weight;
        self.edges[head as usize][head_index].weight = weight;

        Ok(())
    }

    /// True iff every vertex can be reached from every other one. The empty
    /// graph is connected.
    pub fn is_connected(&self) -> bool {
        search::traversal::is_connected(self)
    }

    /// Visits every vertex reachable from `origin` exactly once, in the given
    /// order. While the visitor runs, vertices report their traversal color.
    pub fn traverse<F>(&self, origin: &T, order: TraversalOrder, mut visitor: F) -> Result<()>
    where
        F: FnMut(&VertexView<'_, T>),
    {
        let origin = self.vertex_id(origin)?;
        search::traversal::traverse(self, origin, order, |vertex, colors: &[Color]| {
            visitor(&VertexView::new(self, vertex, Some(colors)))
        })
    }

    pub fn bfs<F>(&self, origin: &T, visitor: F) -> Result<()>
    where
        F: FnMut(&VertexView<'_, T>),
    {
        self.traverse(origin, TraversalOrder::Bfs, visitor)
    }

    pub fn dfs<F>(&self, origin: &T, visitor: F) -> Result<()>
    where
        F: FnMut(&VertexView<'_, T>),
    {
        self.traverse(origin, TraversalOrder::Dfs, visitor)
    }

    /// Path with the least number of edges. Empty if `destination` can not be
    /// reached.
    pub fn unweighted_path(&self, origin: &T, destination: &T) -> Result<ElementPath<'_, T>> {
        let origin = self.vertex_id(origin)?;
        let destination = self.vertex_id(destination)?;
        let path = self.unweighted_path_ids(origin, destination)?;
        Ok(self.resolve(path))
    }

    /// Path of least total weight, computed with a binary heap. Empty if
    /// `destination` can not be reached.
    pub fn dijkstra(&self, origin: &T, destination: &T) -> Result<ElementPath<'_, T>> {
        self.dijkstra_with(origin, destination, HeapKind::Binary)
    }

    pub fn dijkstra_with(
        &self,
        origin: &T,
        destination: &T,
        heap_kind: HeapKind,
    ) -> Result<ElementPath<'_, T>> {
        let origin = self.vertex_id(origin)?;
        let destination = self.vertex_id(destination)?;
        let path = self.dijkstra_ids(origin, destination, heap_kind)?;
        Ok(self.resolve(path))
    }

    /// The heap that suits the density of this graph.
    pub fn preferred_heap(&self) -> HeapKind {
        let n = self.elements.len() as u64;
        let dense = (n * n.saturating_sub(1) / 2).saturating_sub(n);
        if n > 1 && self.number_of_edges as u64 > dense {
            HeapKind::Array
        } else {
            HeapKind::Binary
        }
    }

    fn resolve(&self, path: Path) -> ElementPath<'_, T> {
        let elements = path
            .vertices
            .iter()
            .map(|&vertex| &self.elements[vertex as usize])
            .collect();
        ElementPath {
            elements,
            distance: path.distance,
        }
    }
}

impl<T> Graph for UndirectedGraph<T> {
    fn number_of_vertices(&self) -> u32 {
        self.elements.len() as u32
    }

    fn number_of_edges(&self) -> u32 {
        self.number_of_edges
    }

    fn edges(&self, tail: VertexId) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + '_> {
        // Define a struct for iterating over edges with the same tail. Struct is needed
        // as tail would otherwise not live enough.
        struct EdgeIterator<'a> {
            edge_iter: std::slice::Iter<'a, TaillessEdge>,
            tail: VertexId,
        }

        impl<'a> Iterator for EdgeIterator<'a> {
            type Item = WeightedEdge;

            fn next(&mut self) -> Option<Self::Item> {
                self.edge_iter
                    .next()
                    .map(|tailless_edge| tailless_edge.set_tail(self.tail))
            }
        }

        impl<'a> ExactSizeIterator for EdgeIterator<'a> {
            fn len(&self) -> usize {
                self.edge_iter.len()
            }
        }

        Box::new(EdgeIterator {
            edge_iter: self.edges[tail as usize].iter(),
            tail,
        })
    }

    fn get_weight(&self, edge: &Edge) -> Option<Weight> {
        let edges_sharing_tail = self.edges.get(edge.tail as usize)?;

        let edge_index = edges_sharing_tail
            .binary_search_by_key(&edge.head, |tailless_edge| tailless_edge.head)
            .ok()?;

        Some(edges_sharing_tail[edge_index].weight)
    }
}

impl<T: Eq + Hash + Clone> PartialEq for UndirectedGraph<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.elements.len() != other.elements.len()
            || self.number_of_edges != other.number_of_edges
        {
            return false;
        }

        self.vertices().all(|tail| {
            let Ok(other_tail) = other.vertex_id(&self.elements[tail as usize]) else {
                return false;
            };
            self.edges(tail).all(|edge| {
                other
                    .vertex_id(&self.elements[edge.head as usize])
                    .ok()
                    .and_then(|other_head| {
                        Graph::get_weight(other, &Edge::new(other_tail, other_head))
                    })
                    == Some(edge.weight)
            })
        })
    }
}

impl<T: Eq + Hash + Clone> Eq for UndirectedGraph<T> {}

impl<T: Display> Display for UndirectedGraph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for element in self.elements.iter() {
            write!(f, "{}, ", element)?;
        }
        write!(f, "}}, {{")?;
        for (tail, list) in self.edges.iter().enumerate() {
            for edge in list.iter().filter(|edge| edge.head as usize > tail) {
                write!(
                    f,
                    "({}, {}), ",
                    self.elements[tail], self.elements[edge.head as usize]
                )?;
            }
        }
        write!(f, "}}")
    }
}
