//! The composed order-matching filter.
//!
//! ```text
//! match_orders(&[PublicOrder], &CandidateSpec) -> Vec<PublicOrder>
//! ```
//!
//! An order is kept iff its currency equals the candidate's, it sits on the
//! complementary side, it shares a payment method, and its amount is
//! compatible (see [`crate::amount`]). Book order is preserved; there is no
//! ranking.
//!
//! ## Malformed input
//!
//! [`Amount`] variants are public, so a caller can
//! hand-build an inverted or negative range. Such an order is logged and
//! excluded; a candidate with such an amount matches nothing. The filter
//! never fails.

use peermatch_types::{Amount, CandidateSpec, PublicOrder};

use crate::{
    amount::amounts_compatible,
    determinism::compute_match_root,
    predicates::{currency_matches, shares_payment_method, side_complements},
};

/// Whether a single order satisfies the candidate.
#[must_use]
pub fn matches_candidate(order: &PublicOrder, candidate: &CandidateSpec) -> bool {
    currency_matches(order, candidate)
        && side_complements(order, candidate)
        && shares_payment_method(order, candidate)
        && order_amount_is_sane(order)
        && amounts_compatible(&order.amount, candidate.amount.as_ref(), candidate.threshold)
}

/// Filter the book down to the orders that already satisfy `candidate`.
///
/// The result is a subsequence of `book` in the same relative order.
#[must_use]
pub fn match_orders(book: &[PublicOrder], candidate: &CandidateSpec) -> Vec<PublicOrder> {
    if let Some(Err(err)) = candidate.amount.as_ref().map(Amount::validate) {
        tracing::warn!(error = %err, "Candidate amount is malformed; no orders match");
        return Vec::new();
    }

    let matches: Vec<PublicOrder> = book
        .iter()
        .filter(|order| matches_candidate(order, candidate))
        .cloned()
        .collect();

    tracing::debug!(
        book = book.len(),
        matches = matches.len(),
        currency = %candidate.currency,
        match_root = hex::encode(compute_match_root(&matches)),
        "Order matching complete"
    );

    matches
}

fn order_amount_is_sane(order: &PublicOrder) -> bool {
    match order.amount.validate() {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(order = %order.id, error = %err, "Skipping malformed book order");
            false
        }
    }
}
