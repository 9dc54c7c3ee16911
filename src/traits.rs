//! Common traits for heap data structures
//!
//! This module provides the trait surface shared by the heaps in this crate:
//!
//! - [`Heap`]: Base trait for priority queues ordered by a [`Priority`] relation
//! - [`MergeableHeap`]: Extension trait for heaps that can absorb another heap
//!
//! Unlike `std::collections::BinaryHeap`, `top` and `pop` report an empty heap
//! as an explicit [`HeapError::Underflow`] instead of returning `None`.
//! [`Heap::peek`] is the `Option`-returning companion for callers that prefer it.
//!
//! [`Priority`]: crate::priority::Priority

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `top` or `pop` was called on an empty heap
    Underflow,
    /// The requested branching factor cannot form a tree
    InvalidArity(usize),
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Underflow => write!(f, "heap is empty"),
            HeapError::InvalidArity(arity) => {
                write!(f, "invalid heap arity {arity}: every node needs at least one child slot")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for heap/priority queue data structures
///
/// The element with the highest priority (as decided by the heap's comparator)
/// is always available at the top.
///
/// # Example
///
/// ```rust
/// use dary_heaps::{DaryHeap, Heap, HeapError};
///
/// let mut heap = DaryHeap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.top(), Ok(&1));
/// assert_eq!(heap.pop(), Ok(1));
/// assert_eq!(heap.len(), 2);
///
/// heap.pop().unwrap();
/// heap.pop().unwrap();
/// assert_eq!(heap.pop(), Err(HeapError::Underflow));
/// ```
pub trait Heap<T> {
    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n) comparisons for array-backed heaps.
    fn push(&mut self, item: T);

    /// Returns the highest-priority element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Underflow`] if the heap is empty.
    ///
    /// # Time Complexity
    /// O(1)
    fn top(&self) -> Result<&T, HeapError>;

    /// Removes and returns the highest-priority element
    ///
    /// # Errors
    /// Returns [`HeapError::Underflow`] if the heap is empty. The heap is
    /// left untouched in that case.
    fn pop(&mut self) -> Result<T, HeapError>;

    /// Returns the highest-priority element, or `None` if the heap is empty
    fn peek(&self) -> Option<&T> {
        self.top().ok()
    }
}

/// Heaps that can absorb all elements of another heap of the same type
pub trait MergeableHeap<T>: Heap<T> {
    /// Merges another heap into this one, consuming the other heap
    fn merge(&mut self, other: Self);
}
