//! Weighted undirected graphs with traversal and shortest path queries, built
//! on a binary min-heap whose elements track their own slot.

pub mod error;
pub mod graphs;
pub mod heap;
pub mod search;
pub mod utility;

pub use error::{Error, Result};
pub use graphs::{
    undirected_graph::UndirectedGraph,
    vertex::{Color, TraversalOrder, VertexView},
    Graph, VertexId, Weight,
};
pub use heap::{adapter::heap_sort, min_heap::MinHeap, HeapKind, IndexTracking};
pub use search::{Distance, ElementPath, Path, PathLength};
