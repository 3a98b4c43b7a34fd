use clap::ValueEnum;

use crate::error::Result;

pub mod adapter;
pub mod array_heap;
pub mod min_heap;

/// Contract for elements stored in a [`DijkstraHeap`].
///
/// The heap owns the slots and tells every element where it currently lives
/// through `set_position`. Outside of a heap the position is `None`.
pub trait IndexTracking: Ord {
    fn position(&self) -> Option<usize>;

    fn set_position(&mut self, position: Option<usize>);
}

/// A priority queue with a decrease key operation as needed by Dijkstra's
/// algorithm. The key of an element is changed by the caller in place, then
/// `reorder` restores the order of the queue.
pub trait DijkstraHeap<T: IndexTracking> {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes and returns the minimum element. Fails with
    /// [`crate::error::Error::EmptyHeap`] if there is none.
    fn extract_min(&mut self) -> Result<T>;

    /// Restores the order after the key of `element` changed.
    fn reorder(&mut self, element: &T);

    fn get(&self, index: usize) -> Result<&T>;
}

/// Selects the heap used by Dijkstra's algorithm.
#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeapKind {
    /// Binary min-heap, O(log n) per operation.
    #[default]
    Binary,
    /// Unordered array, O(n) extraction but O(1) reorder. Faster on dense
    /// graphs.
    Array,
}

/// Left child, right child and parent of a slot in an implicit binary tree.
pub(crate) fn left_child(index: usize) -> usize {
    2 * index + 1
}

pub(crate) fn right_child(index: usize) -> usize {
    2 * index + 2
}

pub(crate) fn parent(index: usize) -> usize {
    index.saturating_sub(1) / 2
}
