use super::{DijkstraHeap, IndexTracking};
use crate::error::{Error, Result};

/// Dijkstra heap backed by an unordered array.
///
/// Elements keep the slot they were given at construction, so `reorder` has
/// nothing to do and `extract_min` scans all slots. On dense graphs, where
/// the number of reorders dominates, this beats a binary heap.
#[derive(Clone, Debug)]
pub struct ArrayHeap<T: IndexTracking> {
    slots: Vec<Option<T>>,
    len: usize,
}

impl<T: IndexTracking> ArrayHeap<T> {
    pub fn from_elements(elements: impl IntoIterator<Item = T>) -> ArrayHeap<T> {
        let slots: Vec<Option<T>> = elements
            .into_iter()
            .enumerate()
            .map(|(index, mut element)| {
                element.set_position(Some(index));
                Some(element)
            })
            .collect();
        let len = slots.len();

        ArrayHeap { slots, len }
    }

    fn min_slot(&self) -> Option<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|element| (index, element)))
            .min_by(|(_, a), (_, b)| a.cmp(b))
            .map(|(index, _)| index)
    }
}

impl<T: IndexTracking> FromIterator<T> for ArrayHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ArrayHeap::from_elements(iter)
    }
}

impl<T: IndexTracking> DijkstraHeap<T> for ArrayHeap<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn extract_min(&mut self) -> Result<T> {
        let index = self.min_slot().ok_or(Error::EmptyHeap)?;
        let mut min = self.slots[index].take().ok_or(Error::EmptyHeap)?;
        min.set_position(None);
        self.len -= 1;
        Ok(min)
    }

    fn reorder(&mut self, _element: &T) {}

    fn get(&self, index: usize) -> Result<&T> {
        self.slots
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(Error::IndexOutOfBounds {
                index,
                len: self.slots.len(),
            })
    }
}
