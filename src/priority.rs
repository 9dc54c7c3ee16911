//! Priority relations
//!
//! A heap does not order its elements with [`Ord`] directly. It asks a
//! [`Priority`] implementation whether one element must sit above another.
//! The relation must be strict: `higher_priority(a, a)` is false, and it must
//! be transitive for the heap order to be meaningful.
//!
//! | Relation         | Top of the heap      |
//! |------------------|----------------------|
//! | [`MinFirst`]     | smallest element     |
//! | [`MaxFirst`]     | largest element      |
//! | [`FnPriority`]   | caller-defined       |

/// Decides which of two elements belongs closer to the root
pub trait Priority<T> {
    /// Returns true iff `a` must appear above `b` in the heap
    fn higher_priority(&self, a: &T, b: &T) -> bool;
}

/// Natural "less than" ordering, producing a min-heap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinFirst;

impl<T: PartialOrd> Priority<T> for MinFirst {
    #[inline]
    fn higher_priority(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Natural "greater than" ordering, producing a max-heap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxFirst;

impl<T: PartialOrd> Priority<T> for MaxFirst {
    #[inline]
    fn higher_priority(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Adapts a closure `Fn(&T, &T) -> bool` into a [`Priority`]
///
/// ```rust
/// use dary_heaps::{DaryHeap, FnPriority, Heap};
///
/// // Order words by length, shortest first
/// let by_len = FnPriority::new(|a: &&str, b: &&str| a.len() < b.len());
/// let mut heap = DaryHeap::with_comparator(by_len);
/// heap.push("three");
/// heap.push("a");
/// heap.push("to");
/// assert_eq!(heap.pop(), Ok("a"));
/// ```
#[derive(Clone, Copy)]
pub struct FnPriority<F>(F);

impl<F> FnPriority<F> {
    /// Wraps `f`, which must return true iff its first argument has priority
    pub fn new(f: F) -> Self {
        FnPriority(f)
    }
}

impl<T, F> Priority<T> for FnPriority<F>
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn higher_priority(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

impl<F> std::fmt::Debug for FnPriority<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnPriority(..)")
    }
}
