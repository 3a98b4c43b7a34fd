use thiserror::Error;

use crate::graphs::VertexId;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the graph, the heaps and the graph readers.
///
/// Every graph and heap error is a precondition violation that is detected
/// before anything is mutated, so a failed call leaves the structure as it
/// was.
#[derive(Debug, Error)]
pub enum Error {
    #[error("vertex not found in graph")]
    VertexNotFound,

    #[error("index {index} out of bounds for heap of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("vertex already present in graph")]
    DuplicateVertex,

    #[error("an edge can not connect a vertex with itself")]
    SelfLoop,

    #[error("vertices {0} and {1} are already connected")]
    AlreadyConnected(VertexId, VertexId),

    #[error("vertices {0} and {1} are not connected")]
    NotConnected(VertexId, VertexId),

    #[error("edge weight must be positive")]
    NonPositiveWeight,

    #[error("heap is empty")]
    EmptyHeap,

    #[error("unable to parse line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True for the "referenced thing is absent" family.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::VertexNotFound | Error::IndexOutOfBounds { .. })
    }

    /// True for the "argument violates a precondition" family.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::DuplicateVertex
                | Error::SelfLoop
                | Error::AlreadyConnected(..)
                | Error::NotConnected(..)
                | Error::NonPositiveWeight
        )
    }
}
