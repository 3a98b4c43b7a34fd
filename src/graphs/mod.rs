use std::ops::Range;

use edge::{Edge, WeightedEdge};

use crate::error::{Error, Result};

pub mod edge;
pub mod graph_functions;
pub mod graph_reader;
pub mod undirected_graph;
pub mod vertex;

pub type VertexId = u32;
pub type Weight = u32;

/// Weight used by [`undirected_graph::UndirectedGraph::connect_default`].
pub const DEFAULT_WEIGHT: Weight = 1;

/// Read-only view of a graph whose vertices are the ids
/// `0..number_of_vertices()`. The search algorithms only need this.
pub trait Graph {
    fn number_of_vertices(&self) -> u32;

    /// Number of undirected edges, each counted once.
    fn number_of_edges(&self) -> u32 {
        let adjacency_records = (0..self.number_of_vertices())
            .map(|vertex| self.edges(vertex).len() as u32)
            .sum::<u32>();
        adjacency_records / 2
    }

    fn vertices(&self) -> Range<VertexId> {
        0..self.number_of_vertices()
    }

    fn edges(&self, tail: VertexId) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + '_>;

    fn get_weight(&self, edge: &Edge) -> Option<Weight>;
}

/// Fails with [`Error::VertexNotFound`] unless `vertex` is an id of `graph`.
pub(crate) fn check_vertex(graph: &dyn Graph, vertex: VertexId) -> Result<()> {
    if vertex < graph.number_of_vertices() {
        Ok(())
    } else {
        Err(Error::VertexNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::{check_vertex, edge::Edge, edge::WeightedEdge, Graph, VertexId, Weight};
    use crate::error::Error;

    /// Bare adjacency lists relying on the provided `Graph` methods.
    struct AdjacencyLists(Vec<Vec<(VertexId, Weight)>>);

    impl Graph for AdjacencyLists {
        fn number_of_vertices(&self) -> u32 {
            self.0.len() as u32
        }

        fn edges(&self, tail: VertexId) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + '_> {
            Box::new(
                self.0[tail as usize]
                    .iter()
                    .map(move |&(head, weight)| WeightedEdge::new(tail, head, weight)),
            )
        }

        fn get_weight(&self, edge: &Edge) -> Option<Weight> {
            self.0[edge.tail as usize]
                .iter()
                .find(|(head, _)| *head == edge.head)
                .map(|&(_, weight)| weight)
        }
    }

    // 0 - 1 - 2, both edges stored in either direction
    fn line() -> AdjacencyLists {
        AdjacencyLists(vec![vec![(1, 3)], vec![(0, 3), (2, 4)], vec![(1, 4)]])
    }

    #[test]
    fn default_edge_count_counts_each_edge_once() {
        assert_eq!(line().number_of_edges(), 2);
        assert_eq!(AdjacencyLists(Vec::new()).number_of_edges(), 0);
    }

    #[test]
    fn check_vertex_bounds() {
        let graph = line();
        assert!(check_vertex(&graph, 2).is_ok());
        assert!(matches!(check_vertex(&graph, 3), Err(Error::VertexNotFound)));
    }
}
