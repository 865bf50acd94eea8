//! Amount compatibility between a book order and the candidate.
//!
//! The threshold only widens a side that stated a single amount:
//!
//! ```text
//! candidate   order     test
//! Exact(a)    Exact(o)  a*(1-t) <= o <= a*(1+t)
//! Range       Exact(o)  cmin <= o <= cmax
//! Exact(a)    Range     omin*(1-t) <= a <= omax*(1+t)
//! Range       Range     [cmin, cmax] and [omin, omax] intersect
//! ```
//!
//! A candidate with no amount is unconstrained.

use peermatch_types::{Amount, Threshold};
use rust_decimal::Decimal;

/// Whether `order` satisfies the candidate's amount intent.
#[must_use]
pub fn amounts_compatible(order: &Amount, candidate: Option<&Amount>, threshold: Threshold) -> bool {
    let Some(candidate) = candidate else {
        return true;
    };
    match (*candidate, *order) {
        (Amount::Exact(target), Amount::Exact(value)) => {
            within(value, threshold.lower(target), threshold.upper(target))
        }
        (Amount::Range { min, max }, Amount::Exact(value)) => within(value, min, max),
        (Amount::Exact(target), Amount::Range { min, max }) => {
            within(target, threshold.lower(min), threshold.upper(max))
        }
        (Amount::Range { .. }, Amount::Range { .. }) => {
            let (cmin, cmax) = candidate.bounds();
            let (omin, omax) = order.bounds();
            cmin.max(omin) <= cmax.min(omax)
        }
    }
}

fn within(value: Decimal, low: Decimal, high: Decimal) -> bool {
    low <= value && value <= high
}
