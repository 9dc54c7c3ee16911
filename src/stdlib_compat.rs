//! Standard library compatibility layer
//!
//! Implements the collection traits `std::collections::BinaryHeap` users
//! reach for, so a [`DaryHeap`] can be built with `collect()`, grown with
//! `extend()`, and drained with a `for` loop.
//!
//! # Differences from BinaryHeap
//!
//! - **Min-heap by default**: `BinaryHeap` is a max-heap. Use
//!   [`MaxFirst`](crate::priority::MaxFirst) to get max-heap behavior.
//! - **Ordered iteration**: `BinaryHeap::into_iter` yields elements in
//!   arbitrary order. [`IntoIter`] yields them in extraction order, like
//!   `BinaryHeap::into_iter_sorted`.
//!
//! # Example
//!
//! ```rust
//! use dary_heaps::{DaryHeap, Heap, MaxFirst};
//!
//! let mut heap: DaryHeap<i32, MaxFirst> = vec![4, 1, 7].into_iter().collect();
//! heap.extend([3, 9]);
//! assert_eq!(heap.peek(), Some(&9));
//!
//! let drained: Vec<i32> = heap.into_iter().collect();
//! assert_eq!(drained, vec![9, 7, 4, 3, 1]);
//! ```

use std::iter::FusedIterator;

use crate::dary::{DaryHeap, DEFAULT_ARITY};
use crate::priority::Priority;
use crate::traits::Heap;

impl<T, C: Priority<T> + Default> From<Vec<T>> for DaryHeap<T, C> {
    /// Heapifies `vec` in place as a binary heap
    fn from(vec: Vec<T>) -> Self {
        let mut heap = DaryHeap::from_parts(DEFAULT_ARITY, vec, C::default());
        heap.heapify();
        heap
    }
}

impl<T, C: Priority<T> + Default> FromIterator<T> for DaryHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T, C: Priority<T>> Extend<T> for DaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

/// Owning iterator yielding elements in extraction order
///
/// Created by [`DaryHeap::into_iter`]. Each step is a `pop`, so a full
/// drain costs O(n d log_d n).
#[derive(Debug, Clone)]
pub struct IntoIter<T, C> {
    heap: DaryHeap<T, C>,
}

impl<T, C: Priority<T>> Iterator for IntoIter<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, C: Priority<T>> ExactSizeIterator for IntoIter<T, C> {}

impl<T, C: Priority<T>> FusedIterator for IntoIter<T, C> {}

impl<T, C: Priority<T>> IntoIterator for DaryHeap<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T, C>;

    fn into_iter(self) -> IntoIter<T, C> {
        IntoIter { heap: self }
    }
}
