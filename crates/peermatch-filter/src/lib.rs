//! # peermatch-filter
//!
//! **Pure deterministic order-matching filter for peermatch.**
//!
//! Given the public book and the order a maker is drafting, the filter
//! returns the existing orders that already satisfy the draft, so the maker
//! can take one instead of posting a duplicate. It has:
//!
//! - **Zero side effects**: no I/O, no locks, no state between calls
//! - **Deterministic output**: same input -> same output, in book order
//! - **Total**: no error path; an empty result is a valid answer
//! - **Submit gate**: the "submit anyway" confirmation that consumes the result

pub mod amount;
pub mod determinism;
pub mod filter;
pub mod gate;
pub mod predicates;

pub use amount::amounts_compatible;
pub use determinism::{compute_match_root, verify_match_root};
pub use filter::{match_orders, matches_candidate};
pub use gate::{GateDecision, GateState, SubmitGate};
