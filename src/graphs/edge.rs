use serde_derive::{Deserialize, Serialize};

use super::{VertexId, Weight};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub tail: VertexId,
    pub head: VertexId,
}

impl Edge {
    pub fn new(tail: VertexId, head: VertexId) -> Edge {
        Edge { tail, head }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub tail: VertexId,
    pub head: VertexId,
    pub weight: Weight,
}

impl WeightedEdge {
    pub fn new(tail: VertexId, head: VertexId, weight: Weight) -> WeightedEdge {
        WeightedEdge { tail, head, weight }
    }
}

/// The neighbor record stored in an adjacency list. The tail is the vertex
/// owning the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaillessEdge {
    pub head: VertexId,
    pub weight: Weight,
}

impl TaillessEdge {
    pub fn set_tail(&self, tail: VertexId) -> WeightedEdge {
        WeightedEdge {
            tail,
            head: self.head,
            weight: self.weight,
        }
    }
}
