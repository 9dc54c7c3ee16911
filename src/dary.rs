//! d-ary Heap implementation
//!
//! An array-backed heap in which every node has up to `arity` children. The
//! tree is stored in level order inside a single `Vec`, so parent and child
//! links are pure index arithmetic:
//!
//! - parent of `i` is `(i - 1) / arity`
//! - children of `i` are `arity * i + 1 ..= arity * i + arity`
//!
//! Which element sits on top is decided by a [`Priority`] relation fixed at
//! construction. The default, [`MinFirst`], gives a min-heap; [`MaxFirst`]
//! gives a max-heap.
//!
//! Wider trees are shallower, so `push` gets cheaper as the arity grows while
//! `pop` has to scan more children per level.
//!
//! # Time Complexity
//!
//! | Operation | Complexity          |
//! |-----------|---------------------|
//! | `push`    | O(log_d n)          |
//! | `pop`     | O(d log_d n)        |
//! | `top`     | O(1)                |
//! | `merge`   | O(m log_d (n + m))  |
//! | `from_vec`| O(n)                |
//!
//! # Example
//!
//! ```rust
//! use dary_heaps::{DaryHeap, Heap, MaxFirst};
//!
//! let mut heap = DaryHeap::with_arity_and_comparator(4, MaxFirst).unwrap();
//! for value in [5, 3, 8, 1, 9, 2, 7] {
//!     heap.push(value);
//! }
//!
//! assert_eq!(heap.top(), Ok(&9));
//! assert_eq!(heap.into_sorted_vec(), vec![9, 8, 7, 5, 3, 2, 1]);
//! ```

use log::{debug, trace};

use crate::priority::{MinFirst, Priority};
use crate::traits::{Heap, HeapError, MergeableHeap};

/// Branching factor used when none is given
pub const DEFAULT_ARITY: usize = 2;

/// A d-ary heap ordered by a [`Priority`] relation
///
/// Elements are owned by value. Only the current top is ever exposed by
/// reference, and that reference lives until the next mutation.
#[derive(Debug, Clone)]
pub struct DaryHeap<T, C = MinFirst> {
    /// Level-order storage; index 0 is the root
    data: Vec<T>,
    arity: usize,
    comparator: C,
}

impl<T> DaryHeap<T, MinFirst> {
    /// Creates an empty binary min-heap
    pub fn new() -> Self {
        Self::from_parts(DEFAULT_ARITY, Vec::new(), MinFirst)
    }

    /// Creates an empty min-heap with the given branching factor
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArity`] if `arity` is zero.
    pub fn with_arity(arity: usize) -> Result<Self, HeapError> {
        Self::with_arity_and_comparator(arity, MinFirst)
    }
}

impl<T, C> DaryHeap<T, C> {
    /// Creates an empty binary heap ordered by `comparator`
    pub fn with_comparator(comparator: C) -> Self {
        Self::from_parts(DEFAULT_ARITY, Vec::new(), comparator)
    }

    /// Creates an empty heap with the given branching factor and ordering
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArity`] if `arity` is zero.
    pub fn with_arity_and_comparator(arity: usize, comparator: C) -> Result<Self, HeapError> {
        Self::with_arity_and_capacity(arity, 0, comparator)
    }

    /// Creates an empty heap that can hold `capacity` elements without
    /// reallocating
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArity`] if `arity` is zero.
    pub fn with_arity_and_capacity(
        arity: usize,
        capacity: usize,
        comparator: C,
    ) -> Result<Self, HeapError> {
        check_arity(arity)?;
        Ok(Self::from_parts(arity, Vec::with_capacity(capacity), comparator))
    }

    pub(crate) fn from_parts(arity: usize, data: Vec<T>, comparator: C) -> Self {
        trace!(
            "creating {}-ary heap with {} elements (capacity {})",
            arity,
            data.len(),
            data.capacity()
        );
        Self {
            data,
            arity,
            comparator,
        }
    }

    /// Returns the branching factor
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Returns the priority relation ordering this heap
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves room for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Returns the underlying storage in level order
    ///
    /// Index 0 is the top; beyond that the order is only partially sorted.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Removes every element, keeping the allocation
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T, C: Priority<T>> DaryHeap<T, C> {
    /// Builds a heap from an arbitrary vector in O(n)
    ///
    /// Uses bottom-up heapify, so the resulting layout may differ from
    /// pushing the same elements one at a time. Extraction order is the same
    /// up to ties.
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArity`] if `arity` is zero.
    pub fn from_vec(arity: usize, data: Vec<T>, comparator: C) -> Result<Self, HeapError> {
        check_arity(arity)?;
        let mut heap = Self::from_parts(arity, data, comparator);
        heap.heapify();
        Ok(heap)
    }

    /// Consumes the heap, returning its elements in extraction order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    /// Returns true if no child strictly outranks its parent
    pub fn is_valid(&self) -> bool {
        (1..self.data.len()).all(|i| {
            let parent = (i - 1) / self.arity;
            !self
                .comparator
                .higher_priority(&self.data[i], &self.data[parent])
        })
    }

    /// Index of the first child of `index`, if it exists
    fn first_child(&self, index: usize) -> Option<usize> {
        self.arity
            .checked_mul(index)
            .and_then(|i| i.checked_add(1))
            .filter(|&child| child < self.data.len())
    }

    /// Move element at index up until its parent has priority over it
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / self.arity;
            if self
                .comparator
                .higher_priority(&self.data[parent], &self.data[index])
            {
                break;
            }
            self.data.swap(index, parent);
            index = parent;
        }
    }

    /// Move element at index down while its best child strictly outranks it
    ///
    /// Among equal children the lowest index wins: a later child only
    /// replaces the candidate when it has strictly higher priority.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        while let Some(first) = self.first_child(index) {
            let end = first.saturating_add(self.arity).min(len);

            let mut best = first;
            for child in first + 1..end {
                if self
                    .comparator
                    .higher_priority(&self.data[child], &self.data[best])
                {
                    best = child;
                }
            }

            if !self
                .comparator
                .higher_priority(&self.data[best], &self.data[index])
            {
                break;
            }
            self.data.swap(index, best);
            index = best;
        }
    }

    pub(crate) fn heapify(&mut self) {
        let len = self.data.len();
        if len < 2 {
            return;
        }
        let last_parent = (len - 2) / self.arity;
        trace!("heapifying {} elements from index {}", len, last_parent);
        for index in (0..=last_parent).rev() {
            self.sift_down(index);
        }
    }
}

fn check_arity(arity: usize) -> Result<(), HeapError> {
    if arity == 0 {
        debug!("rejecting heap arity 0");
        return Err(HeapError::InvalidArity(arity));
    }
    Ok(())
}

impl<T, C: Priority<T>> Heap<T> for DaryHeap<T, C> {
    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    fn top(&self) -> Result<&T, HeapError> {
        match self.data.first() {
            Some(item) => Ok(item),
            None => {
                trace!("top called on empty heap");
                Err(HeapError::Underflow)
            }
        }
    }

    fn pop(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            trace!("pop called on empty heap");
            return Err(HeapError::Underflow);
        }

        // Moves the last element into the root slot
        let result = self.data.swap_remove(0);

        if self.data.len() > 1 {
            self.sift_down(0);
        }

        Ok(result)
    }
}

impl<T, C: Priority<T>> MergeableHeap<T> for DaryHeap<T, C> {
    fn merge(&mut self, other: Self) {
        // Elements are re-sifted under this heap's comparator; the other
        // heap's ordering is discarded
        self.data.reserve(other.data.len());
        for item in other.data {
            self.push(item);
        }
    }
}

impl<T, C: Default> Default for DaryHeap<T, C> {
    fn default() -> Self {
        Self::from_parts(DEFAULT_ARITY, Vec::new(), C::default())
    }
}
