//! Match-root digest for determinism checks.
//!
//! Two calls with the same book and candidate must return the same orders
//! in the same order. The match root is a SHA-256 over the ordered order
//! IDs, so results can be compared (or logged) without the full payload.

use peermatch_types::PublicOrder;
use sha2::{Digest, Sha256};

/// Compute the match root over an ordered result set.
///
/// Depends on the number of orders and their IDs, in order.
#[must_use]
pub fn compute_match_root(matches: &[PublicOrder]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(b"peermatch:match_root:v1:");
    hasher.update((matches.len() as u64).to_le_bytes());

    for order in matches {
        hasher.update(order.id.to_le_bytes());
    }

    let result = hasher.finalize();
    let mut root = [0u8; 32];
    root.copy_from_slice(&result);
    root
}

/// Recompute the root from `matches` and compare with `expected_root`.
#[must_use]
pub fn verify_match_root(matches: &[PublicOrder], expected_root: &[u8; 32]) -> bool {
    compute_match_root(matches) == *expected_root
}
