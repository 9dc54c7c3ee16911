//! d-ary Heap Priority Queues for Rust
//!
//! This crate provides an array-backed d-ary (m-ary) heap whose ordering is
//! supplied by the caller. The same structure serves as a min-heap, a
//! max-heap, or any custom priority queue, with the branching factor chosen
//! at construction.
//!
//! # Features
//!
//! - **d-ary layout**: any arity from 1 up; arity 2 is a classic binary heap
//! - **Pluggable priority**: [`MinFirst`], [`MaxFirst`], or a closure via [`FnPriority`]
//! - **Typed underflow**: `top` and `pop` on an empty heap return [`HeapError::Underflow`]
//! - **Std interop**: `collect`, `extend`, and sorted draining through `into_iter`
//!
//! # Example
//!
//! ```rust
//! use dary_heaps::{DaryHeap, Heap, HeapError};
//!
//! let mut heap = DaryHeap::with_arity(3).unwrap();
//! heap.push(5);
//! heap.push(3);
//! heap.push(8);
//!
//! assert_eq!(heap.top(), Ok(&3));
//! assert_eq!(heap.pop(), Ok(3));
//! assert_eq!(heap.len(), 2);
//!
//! let mut empty: DaryHeap<i32> = DaryHeap::new();
//! assert_eq!(empty.pop(), Err(HeapError::Underflow));
//! ```

pub mod dary;
pub mod priority;
pub mod stdlib_compat;
pub mod traits;

// Re-export the main types for convenience
pub use dary::{DaryHeap, DEFAULT_ARITY};
pub use priority::{FnPriority, MaxFirst, MinFirst, Priority};
pub use traits::{Heap, HeapError, MergeableHeap};
