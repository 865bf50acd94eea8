//! Book boundary: the coordinator's wire shape for public orders.
//!
//! The coordinator sends amounts as nullable fields (`amount` for single
//! orders, `min_amount`/`max_amount` for ranged ones) and the side as a
//! numeric `type`. [`PublicOrder::try_from`] enforces the exclusivity
//! invariant; [`parse_book`] applies it to a whole book, logging and
//! skipping entries that fail.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Amount, CurrencyCode, OrderId, OrderSide, PeermatchError, PublicOrder, Result};

/// One entry of the public book as deserialized from the coordinator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBookEntry {
    pub id: u64,
    /// `0` = BUY, `1` = SELL.
    #[serde(rename = "type")]
    pub side: u8,
    pub currency: u32,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub min_amount: Option<Decimal>,
    #[serde(default)]
    pub max_amount: Option<Decimal>,
    #[serde(default)]
    pub payment_methods: Vec<String>,
}

impl TryFrom<RawBookEntry> for PublicOrder {
    type Error = PeermatchError;

    fn try_from(raw: RawBookEntry) -> Result<Self> {
        let id = OrderId(raw.id);
        let amount = match (raw.amount, raw.min_amount, raw.max_amount) {
            (Some(value), None, None) => Amount::exact(value)?,
            (None, Some(min), Some(max)) => Amount::range(min, max)?,
            (Some(_), _, _) => return Err(PeermatchError::AmbiguousAmount(id)),
            (None, _, _) => return Err(PeermatchError::MissingAmount(id)),
        };
        Ok(Self {
            id,
            side: OrderSide::from_wire(raw.side)?,
            currency: CurrencyCode::new(raw.currency)?,
            amount,
            payment_methods: raw.payment_methods.into_iter().collect(),
        })
    }
}

/// Convert a deserialized book, dropping malformed entries.
///
/// Relative order of the surviving entries is preserved.
pub fn parse_book(entries: impl IntoIterator<Item = RawBookEntry>) -> Vec<PublicOrder> {
    entries
        .into_iter()
        .filter_map(|raw| {
            let id = raw.id;
            match PublicOrder::try_from(raw) {
                Ok(order) => Some(order),
                Err(err) => {
                    tracing::warn!(order = id, error = %err, "Skipping malformed book entry");
                    None
                }
            }
        })
        .collect()
}

/// Parse a JSON array of book entries.
///
/// A document that is not a JSON array is an error; individual entries that
/// fail to deserialize or validate are logged and skipped.
pub fn parse_book_json(input: &str) -> Result<Vec<PublicOrder>> {
    let values: Vec<serde_json::Value> = serde_json::from_str(input)?;
    let entries = values.into_iter().enumerate().filter_map(|(index, value)| {
        match serde_json::from_value::<RawBookEntry>(value) {
            Ok(raw) => Some(raw),
            Err(err) => {
                tracing::warn!(index, error = %err, "Skipping undecodable book entry");
                None
            }
        }
    });
    Ok(parse_book(entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(n: i64) -> Decimal {
        Decimal::new(n, 0)
    }

    fn raw(id: u64) -> RawBookEntry {
        RawBookEntry {
            id,
            side: 0,
            currency: 1,
            amount: Some(dec(100)),
            min_amount: None,
            max_amount: None,
            payment_methods: vec!["SEPA".into()],
        }
    }

    #[test]
    fn exact_entry_converts() {
        let order = PublicOrder::try_from(raw(1)).unwrap();
        assert_eq!(order.id, OrderId(1));
        assert_eq!(order.side, OrderSide::Buy);
        assert_eq!(order.amount, Amount::Exact(dec(100)));
        assert!(order.payment_methods.contains("SEPA"));
    }

    #[test]
    fn range_entry_converts() {
        let entry = RawBookEntry {
            side: 1,
            amount: None,
            min_amount: Some(dec(80)),
            max_amount: Some(dec(120)),
            ..raw(2)
        };
        let order = PublicOrder::try_from(entry).unwrap();
        assert_eq!(order.side, OrderSide::Sell);
        assert_eq!(
            order.amount,
            Amount::Range {
                min: dec(80),
                max: dec(120)
            }
        );
    }

    #[test]
    fn both_amount_and_range_is_rejected() {
        let entry = RawBookEntry {
            min_amount: Some(dec(80)),
            max_amount: Some(dec(120)),
            ..raw(3)
        };
        assert!(matches!(
            PublicOrder::try_from(entry),
            Err(PeermatchError::AmbiguousAmount(OrderId(3)))
        ));
    }

    #[test]
    fn neither_amount_nor_range_is_rejected() {
        let entry = RawBookEntry {
            amount: None,
            min_amount: Some(dec(80)),
            ..raw(4)
        };
        assert!(matches!(
            PublicOrder::try_from(entry),
            Err(PeermatchError::MissingAmount(OrderId(4)))
        ));
    }

    #[test]
    fn bad_side_and_currency_are_rejected() {
        let entry = RawBookEntry { side: 9, ..raw(5) };
        assert!(PublicOrder::try_from(entry).is_err());
        let entry = RawBookEntry { currency: 0, ..raw(6) };
        assert!(matches!(
            PublicOrder::try_from(entry),
            Err(PeermatchError::InvalidCurrency(0))
        ));
    }

    #[test]
    fn parse_book_skips_malformed_and_keeps_order() {
        let entries = vec![
            raw(10),
            RawBookEntry { amount: None, ..raw(11) },
            raw(12),
            RawBookEntry { side: 4, ..raw(13) },
            raw(14),
        ];
        let ids: Vec<u64> = parse_book(entries).iter().map(|o| o.id.0).collect();
        assert_eq!(ids, vec![10, 12, 14]);
    }

    #[test]
    fn parse_book_json_wire_shape() {
        let json = r#"[
            {"id": 1, "type": 0, "currency": 1, "amount": "100.00", "payment_methods": ["SEPA"]},
            {"id": 2, "type": 1, "currency": 2, "amount": null, "min_amount": "80", "max_amount": "120",
             "payment_methods": ["Revolut", "Zelle"]},
            {"id": "garbage"},
            {"id": 4, "type": 1, "currency": 1}
        ]"#;
        let book = parse_book_json(json).unwrap();
        assert_eq!(book.len(), 2);
        assert_eq!(book[0].amount, Amount::Exact(Decimal::new(10000, 2)));
        assert!(book[1].amount.is_range());
        assert_eq!(book[1].payment_methods.len(), 2);
    }

    #[test]
    fn parse_book_json_rejects_non_array() {
        let err = parse_book_json(r#"{"orders": []}"#).unwrap_err();
        assert!(format!("{err}").starts_with("PM_ERR_901"));
    }
}
