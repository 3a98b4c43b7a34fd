use clap::ValueEnum;

use super::{edge::TaillessEdge, undirected_graph::UndirectedGraph, VertexId, Weight};

/// Marking used while a traversal is in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// Not reached yet by the running traversal.
    Unvisited,
    /// Discovered by the running traversal.
    Visited,
    /// No traversal is running.
    Neutral,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TraversalOrder {
    Bfs,
    Dfs,
}

/// What a visitor gets to see of a vertex: its element, degree, color and
/// weighted neighbors.
pub struct VertexView<'a, T> {
    graph: &'a UndirectedGraph<T>,
    id: VertexId,
    colors: Option<&'a [Color]>,
}

impl<T> Clone for VertexView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for VertexView<'_, T> {}

impl<'a, T> VertexView<'a, T> {
    pub(crate) fn new(
        graph: &'a UndirectedGraph<T>,
        id: VertexId,
        colors: Option<&'a [Color]>,
    ) -> VertexView<'a, T> {
        VertexView { graph, id, colors }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn get(&self) -> &'a T {
        &self.graph.elements_slice()[self.id as usize]
    }

    pub fn degree(&self) -> usize {
        self.graph.adjacency(self.id).len()
    }

    pub fn color(&self) -> Color {
        self.colors
            .and_then(|colors| colors.get(self.id as usize).copied())
            .unwrap_or(Color::Neutral)
    }

    /// Neighbors together with the weight of the connecting edge, ordered by
    /// vertex id.
    pub fn neighbors(&self) -> impl ExactSizeIterator<Item = (VertexView<'a, T>, Weight)> + 'a {
        let graph = self.graph;
        let colors = self.colors;
        graph
            .adjacency(self.id)
            .iter()
            .map(move |&TaillessEdge { head, weight }| {
                (VertexView::new(graph, head, colors), weight)
            })
    }
}
