//! The non-amount predicates: currency, side, payment method.

use peermatch_types::{CandidateSpec, PublicOrder};

/// Exact currency equality. The candidate's currency is always concrete.
#[must_use]
pub fn currency_matches(order: &PublicOrder, candidate: &CandidateSpec) -> bool {
    order.currency == candidate.currency
}

/// The order sits on the side a counterparty to the candidate would take.
///
/// A candidate with no side accepts both.
#[must_use]
pub fn side_complements(order: &PublicOrder, candidate: &CandidateSpec) -> bool {
    candidate
        .side
        .is_none_or(|side| order.side == side.opposite())
}

/// At least one payment method in common, by exact string equality.
#[must_use]
pub fn shares_payment_method(order: &PublicOrder, candidate: &CandidateSpec) -> bool {
    order.accepts_any(&candidate.payment_methods)
}

#[cfg(test)]
mod tests {
    use peermatch_types::{CurrencyCode, OrderSide, Threshold};
    use rust_decimal::Decimal;

    use super::*;

    fn order(side: OrderSide) -> PublicOrder {
        PublicOrder::dummy_exact(1, side, Decimal::new(100, 0), &["SEPA", "Revolut"])
    }

    fn candidate() -> CandidateSpec {
        CandidateSpec::new(CurrencyCode::DEFAULT, Threshold::default()).with_methods(["SEPA"])
    }

    #[test]
    fn currency_is_exact() {
        assert!(currency_matches(&order(OrderSide::Buy), &candidate()));
        assert!(!currency_matches(
            &order(OrderSide::Buy).in_currency(2),
            &candidate()
        ));
    }

    #[test]
    fn side_is_complementary() {
        let buyer = candidate().with_side(OrderSide::Buy);
        assert!(side_complements(&order(OrderSide::Sell), &buyer));
        assert!(!side_complements(&order(OrderSide::Buy), &buyer));

        let seller = candidate().with_side(OrderSide::Sell);
        assert!(side_complements(&order(OrderSide::Buy), &seller));
        assert!(!side_complements(&order(OrderSide::Sell), &seller));
    }

    #[test]
    fn unset_side_accepts_both() {
        assert!(side_complements(&order(OrderSide::Buy), &candidate()));
        assert!(side_complements(&order(OrderSide::Sell), &candidate()));
    }

    #[test]
    fn payment_methods_need_overlap() {
        assert!(shares_payment_method(&order(OrderSide::Buy), &candidate()));
        let zelle = candidate().with_methods(["Zelle"]);
        assert!(!shares_payment_method(&order(OrderSide::Buy), &zelle));
        let no_methods = candidate().with_methods(Vec::<String>::new());
        assert!(!shares_payment_method(&order(OrderSide::Buy), &no_methods));
    }

    #[test]
    fn payment_methods_are_case_sensitive() {
        let lower = candidate().with_methods(["sepa", "revolut "]);
        assert!(!shares_payment_method(&order(OrderSide::Buy), &lower));
    }
}
