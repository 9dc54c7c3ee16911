//! Heap order proofs over bounded operation sequences

#[cfg(kani)]
use dary_heaps::{DaryHeap, Heap};

/// Proof: any short sequence of pushes and pops keeps the heap valid and the
/// length equal to pushes minus successful pops
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_order_invariant_bounded() {
    let arity: usize = kani::any();
    kani::assume(arity >= 1 && arity <= 4);

    let mut heap: DaryHeap<u8> = DaryHeap::with_arity(arity).unwrap();
    let mut expected_len = 0usize;

    for _ in 0..5 {
        if kani::any() {
            heap.push(kani::any());
            expected_len += 1;
        } else if heap.pop().is_ok() {
            expected_len -= 1;
        }
        assert!(heap.is_valid());
        assert!(heap.len() == expected_len);
    }
}

/// Proof: the top is never outranked by any stored element
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_top_is_minimum() {
    let mut heap: DaryHeap<u8> = DaryHeap::with_arity(3).unwrap();
    for _ in 0..4 {
        heap.push(kani::any());
    }
    let top = *heap.top().unwrap();
    for value in heap.as_slice() {
        assert!(top <= *value);
    }
}
