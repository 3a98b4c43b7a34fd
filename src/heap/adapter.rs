use std::{
    cmp::Ordering,
    fmt::{self, Display},
};

use super::{min_heap::MinHeap, IndexTracking};

/// Wraps any comparable value so it can live in a [`MinHeap`] without
/// carrying a position field itself.
#[derive(Clone, Debug)]
pub struct Adapter<T: Ord> {
    element: T,
    position: Option<usize>,
}

impl<T: Ord> Adapter<T> {
    pub fn new(element: T) -> Adapter<T> {
        Adapter {
            element,
            position: None,
        }
    }

    pub fn get(&self) -> &T {
        &self.element
    }

    pub fn into_inner(self) -> T {
        self.element
    }
}

impl<T: Ord> IndexTracking for Adapter<T> {
    fn position(&self) -> Option<usize> {
        self.position
    }

    fn set_position(&mut self, position: Option<usize>) {
        self.position = position;
    }
}

// Only the wrapped value takes part in comparisons, the position is
// bookkeeping of the heap.
impl<T: Ord> PartialEq for Adapter<T> {
    fn eq(&self, other: &Self) -> bool {
        self.element == other.element
    }
}

impl<T: Ord> Eq for Adapter<T> {}

impl<T: Ord> Ord for Adapter<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.element.cmp(&other.element)
    }
}

impl<T: Ord> PartialOrd for Adapter<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord + Display> Display for Adapter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.element.fmt(f)
    }
}

/// Sorts the elements in non-decreasing order by building a heap over them in
/// O(n) and extracting the minimum until the heap is empty.
pub fn heap_sort<T: Ord>(elements: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut heap: MinHeap<Adapter<T>> = elements.into_iter().map(Adapter::new).collect();

    let mut sorted = Vec::with_capacity(heap.len());
    while let Ok(adapter) = heap.extract_min() {
        sorted.push(adapter.into_inner());
    }
    sorted
}
