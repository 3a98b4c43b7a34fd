use std::fmt::{self, Display};

use itertools::Itertools;

use super::{left_child, parent, right_child, DijkstraHeap, IndexTracking};
use crate::error::{Error, Result};

/// Array backed binary min-heap whose elements track their own slot.
///
/// After every public operation `slots[i].position() == Some(i)` holds for
/// every slot, which makes `contains`, `delete` and `reorder` independent of
/// the heap size.
#[derive(Clone, Debug)]
pub struct MinHeap<T: IndexTracking> {
    slots: Vec<T>,
}

impl<T: IndexTracking> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: IndexTracking> MinHeap<T> {
    pub fn new() -> MinHeap<T> {
        MinHeap { slots: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> MinHeap<T> {
        MinHeap {
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Builds a heap from all elements at once in O(n). This is cheaper than
    /// inserting them one by one, which takes O(n log n).
    pub fn from_elements(elements: impl IntoIterator<Item = T>) -> MinHeap<T> {
        let mut slots: Vec<T> = elements.into_iter().collect();
        for (index, element) in slots.iter_mut().enumerate() {
            element.set_position(Some(index));
        }

        let mut heap = MinHeap { slots };
        for index in (0..heap.slots.len() / 2).rev() {
            heap.sift_down(index);
        }
        heap
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn peek(&self) -> Option<&T> {
        self.slots.first()
    }

    pub fn insert(&mut self, mut element: T) {
        let index = self.slots.len();
        element.set_position(Some(index));
        self.slots.push(element);
        self.sift_up(index);
    }

    pub fn extract_min(&mut self) -> Result<T> {
        let last = self.slots.len().checked_sub(1).ok_or(Error::EmptyHeap)?;
        self.swap(0, last);
        let mut min = self.slots.pop().ok_or(Error::EmptyHeap)?;
        min.set_position(None);
        self.sift_down(0);
        Ok(min)
    }

    /// Removes `element` using its cached position.
    ///
    /// An element whose position is missing, out of range or stale (the slot
    /// holds a different element) is treated as absent and nothing happens.
    pub fn delete(&mut self, element: &T) -> Option<T> {
        let index = self.slot_of(element)?;
        let last = self.slots.len() - 1;
        self.swap(index, last);
        let mut removed = self.slots.pop()?;
        removed.set_position(None);
        if index < self.slots.len() {
            self.reorder_at(index);
        }
        Some(removed)
    }

    pub fn contains(&self, element: &T) -> bool {
        self.slot_of(element).is_some()
    }

    /// Restores heap order after the key of `element` was changed in place.
    /// Elements that are not in the heap are ignored.
    pub fn reorder(&mut self, element: &T) {
        if let Some(index) = self.slot_of(element) {
            self.reorder_at(index);
        }
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.slots.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.slots.len(),
        })
    }

    /// Slots in level order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.slots.iter()
    }

    pub fn clear(&mut self) {
        for element in self.slots.iter_mut() {
            element.set_position(None);
        }
        self.slots.clear();
    }

    fn slot_of(&self, element: &T) -> Option<usize> {
        let index = element.position()?;
        let slot = self.slots.get(index)?;
        (slot == element).then_some(index)
    }

    fn reorder_at(&mut self, index: usize) {
        if index > 0 && self.slots[index] < self.slots[parent(index)] {
            self.sift_up(index);
        } else {
            self.sift_down(index);
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent(index);
            if self.slots[parent] <= self.slots[index] {
                break;
            }
            self.swap(parent, index);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.slots.len();
        loop {
            let left = left_child(index);
            let right = right_child(index);

            let mut smallest = index;
            if left < len && self.slots[left] < self.slots[smallest] {
                smallest = left;
            }
            if right < len && self.slots[right] < self.slots[smallest] {
                smallest = right;
            }

            if smallest == index {
                break;
            }
            self.swap(index, smallest);
            index = smallest;
        }
    }

    fn swap(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        self.slots.swap(i, j);
        self.slots[i].set_position(Some(i));
        self.slots[j].set_position(Some(j));
    }
}

impl<T: IndexTracking> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        MinHeap::from_elements(iter)
    }
}

impl<T: IndexTracking> DijkstraHeap<T> for MinHeap<T> {
    fn len(&self) -> usize {
        self.slots.len()
    }

    fn extract_min(&mut self) -> Result<T> {
        MinHeap::extract_min(self)
    }

    fn reorder(&mut self, element: &T) {
        MinHeap::reorder(self, element)
    }

    fn get(&self, index: usize) -> Result<&T> {
        MinHeap::get(self, index)
    }
}

impl<T: IndexTracking> PartialEq for MinHeap<T> {
    fn eq(&self, other: &Self) -> bool {
        self.slots == other.slots
    }
}

impl<T: IndexTracking + Display> Display for MinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slots.iter().join(", "))
    }
}
