//! Kani proof harnesses
//!
//! - `edge_case_proofs.rs`: underflow and single-element lifecycle
//! - `invariant_proofs.rs`: heap order after bounded operation sequences

#[cfg(kani)]
#[path = "edge_case_proofs.rs"]
mod edge_case_proofs;
#[cfg(kani)]
#[path = "invariant_proofs.rs"]
mod invariant_proofs;
