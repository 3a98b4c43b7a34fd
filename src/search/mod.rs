use std::{
    fmt::{self, Display},
    ops::Add,
};

use serde_derive::Serialize;

use crate::graphs::{edge::WeightedEdge, Graph, VertexId, Weight};

pub mod bfs;
pub mod dijkstra;
pub mod search_data;
pub mod traversal;

/// Length of a path. Wide enough to sum `u32::MAX` edges of weight
/// `Weight::MAX` without overflowing.
pub type PathLength = u64;

/// Tentative length of a path.
///
/// `Unreached` orders after every finite distance and absorbs additions, so
/// relaxing an edge out of an unreached vertex never improves anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Distance {
    Finite(PathLength),
    Unreached,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0);

    pub fn finite(self) -> Option<PathLength> {
        match self {
            Distance::Finite(distance) => Some(distance),
            Distance::Unreached => None,
        }
    }

    pub fn is_reached(self) -> bool {
        self != Distance::Unreached
    }
}

impl Add<Weight> for Distance {
    type Output = Distance;

    fn add(self, weight: Weight) -> Distance {
        match self {
            Distance::Finite(distance) => {
                Distance::Finite(distance.saturating_add(PathLength::from(weight)))
            }
            Distance::Unreached => Distance::Unreached,
        }
    }
}

impl Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(distance) => write!(f, "{}", distance),
            Distance::Unreached => write!(f, "unreached"),
        }
    }
}

/// A path given by vertex ids, from origin to destination.
///
/// An unreachable destination yields an empty path with distance
/// `Unreached`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Path {
    pub vertices: Vec<VertexId>,
    pub distance: Distance,
}

impl Path {
    pub fn unreachable() -> Path {
        Path {
            vertices: Vec::new(),
            distance: Distance::Unreached,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// A [`Path`] resolved to the elements of the graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ElementPath<'a, T> {
    pub elements: Vec<&'a T>,
    pub distance: Distance,
}

impl<'a, T> ElementPath<'a, T> {
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }
}

/// Walks back from `destination` to `origin` following, at every vertex, the
/// first edge for which `follows(current_distance, edge, neighbor_distance)`
/// holds, and returns the vertices in origin to destination order.
///
/// Only neighbors strictly closer to the origin are offered to `follows`, so
/// the walk always ends. Returns an empty vector if it gets stuck.
pub(crate) fn reconstruct_path<F>(
    graph: &dyn Graph,
    distances: &dyn Fn(VertexId) -> Distance,
    origin: VertexId,
    destination: VertexId,
    follows: F,
) -> Vec<VertexId>
where
    F: Fn(Distance, &WeightedEdge, Distance) -> bool,
{
    let mut vertices = vec![destination];
    let mut current = destination;

    while current != origin {
        let current_distance = distances(current);
        let Some(edge) = graph.edges(current).find(|edge| {
            let neighbor_distance = distances(edge.head);
            neighbor_distance < current_distance
                && follows(current_distance, edge, neighbor_distance)
        }) else {
            return Vec::new();
        };
        current = edge.head;
        vertices.push(current);
    }

    vertices.reverse();
    vertices
}

#[cfg(test)]
mod tests {
    use super::{reconstruct_path, Distance};
    use crate::graphs::{undirected_graph::UndirectedGraph, VertexId};

    #[test]
    fn unreached_is_greater_than_every_finite_distance() {
        assert!(Distance::Finite(u64::MAX) < Distance::Unreached);
        assert!(Distance::ZERO < Distance::Finite(1));
        assert_eq!(
            [Distance::Unreached, Distance::Finite(3), Distance::ZERO]
                .into_iter()
                .min(),
            Some(Distance::ZERO)
        );
    }

    #[test]
    fn unreached_absorbs_additions() {
        assert_eq!(Distance::Unreached + 5, Distance::Unreached);
        assert_eq!(Distance::Finite(2) + 5, Distance::Finite(7));
        assert_eq!(
            Distance::Finite(u64::from(u32::MAX)) + u32::MAX,
            Distance::Finite(2 * u64::from(u32::MAX))
        );
        assert_eq!(Distance::Finite(u64::MAX) + 1, Distance::Finite(u64::MAX));
    }

    #[test]
    fn walk_never_steps_to_an_equal_distance() {
        let mut graph = UndirectedGraph::new();
        for vertex in 0..3u8 {
            graph.insert_vertex(vertex).unwrap();
        }
        graph.connect(&0, &1, 1).unwrap();
        graph.connect(&1, &2, 1).unwrap();

        // Vertices 1 and 2 claim the same distance, so no edge leads closer.
        let distances = [Distance::ZERO, Distance::Finite(5), Distance::Finite(5)];
        let vertices = reconstruct_path(
            &graph,
            &|vertex: VertexId| distances[vertex as usize],
            0,
            2,
            |_, _, _| true,
        );
        assert!(vertices.is_empty());
    }

    #[test]
    fn display() {
        assert_eq!(Distance::Finite(4).to_string(), "4");
        assert_eq!(Distance::Unreached.to_string(), "unreached");
    }
}
