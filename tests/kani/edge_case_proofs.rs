//! Edge case proofs for bug finding

#[cfg(kani)]
use dary_heaps::{DaryHeap, Heap, HeapError, MaxFirst};

/// Proof: top and pop on an empty heap report underflow and mutate nothing
#[cfg(kani)]
#[kani::proof]
fn verify_empty_underflow() {
    let arity: usize = kani::any();
    kani::assume(arity >= 1 && arity <= 8);

    let mut heap: DaryHeap<u32> = DaryHeap::with_arity(arity).unwrap();
    assert!(heap.top() == Err(HeapError::Underflow));
    assert!(heap.pop() == Err(HeapError::Underflow));
    assert!(heap.len() == 0);
}

/// Proof: a single pushed element is returned by top and pop, then the heap
/// underflows again
#[cfg(kani)]
#[kani::proof]
fn verify_single_element_lifecycle() {
    let arity: usize = kani::any();
    kani::assume(arity >= 1 && arity <= 8);
    let value: u32 = kani::any();

    let mut heap = DaryHeap::with_arity_and_comparator(arity, MaxFirst).unwrap();
    heap.push(value);
    assert!(heap.top() == Ok(&value));
    assert!(heap.pop() == Ok(value));
    assert!(heap.is_empty());
    assert!(heap.pop() == Err(HeapError::Underflow));
}

/// Proof: arity zero is always rejected
#[cfg(kani)]
#[kani::proof]
fn verify_zero_arity_rejected() {
    let result = DaryHeap::<u32>::with_arity(0);
    assert!(matches!(result, Err(HeapError::InvalidArity(0))));
}
