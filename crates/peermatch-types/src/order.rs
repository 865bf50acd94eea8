//! Public order model.
//!
//! A [`PublicOrder`] is an open order in the coordinator's book. Its amount
//! is either a single value or an inclusive range, never both and never
//! neither; [`Amount`] makes that exclusivity a property of the type.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{CurrencyCode, OrderId, PeermatchError, Result, constants};

/// Which side of the book this order is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    /// The side a counterparty takes against this one.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }

    /// Decode the coordinator's numeric `type` field.
    pub fn from_wire(code: u8) -> Result<Self> {
        match code {
            constants::WIRE_TYPE_BUY => Ok(Self::Buy),
            constants::WIRE_TYPE_SELL => Ok(Self::Sell),
            other => Err(PeermatchError::UnknownOrderSide(other)),
        }
    }
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
        }
    }
}

/// Fiat amount of an order: one value or an inclusive `[min, max]` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Amount {
    Exact(Decimal),
    Range { min: Decimal, max: Decimal },
}

impl Amount {
    /// A validated single amount.
    pub fn exact(value: Decimal) -> Result<Self> {
        let amount = Self::Exact(value);
        amount.validate()?;
        Ok(amount)
    }

    /// A validated inclusive range.
    pub fn range(min: Decimal, max: Decimal) -> Result<Self> {
        let amount = Self::Range { min, max };
        amount.validate()?;
        Ok(amount)
    }

    /// Check the non-negative and `min <= max` constraints.
    ///
    /// The variants are public, so a value built by hand can violate them.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::Exact(value) => {
                if value < Decimal::ZERO {
                    return Err(PeermatchError::NegativeAmount(value));
                }
            }
            Self::Range { min, max } => {
                for bound in [min, max] {
                    if bound < Decimal::ZERO {
                        return Err(PeermatchError::NegativeAmount(bound));
                    }
                }
                if min > max {
                    return Err(PeermatchError::InvalidRange { min, max });
                }
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn is_range(&self) -> bool {
        matches!(self, Self::Range { .. })
    }

    /// Lowest and highest acceptable value. `Exact(v)` yields `(v, v)`.
    #[must_use]
    pub fn bounds(&self) -> (Decimal, Decimal) {
        match *self {
            Self::Exact(value) => (value, value),
            Self::Range { min, max } => (min, max),
        }
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(value) => write!(f, "{value}"),
            Self::Range { min, max } => write!(f, "{min}-{max}"),
        }
    }
}

/// An open order in the public book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicOrder {
    pub id: OrderId,
    pub side: OrderSide,
    pub currency: CurrencyCode,
    pub amount: Amount,
    /// Settlement rails the maker accepts, compared by exact string equality.
    pub payment_methods: BTreeSet<String>,
}

impl PublicOrder {
    /// Whether this order accepts at least one of `methods`.
    #[must_use]
    pub fn accepts_any(&self, methods: &BTreeSet<String>) -> bool {
        // Iterate the smaller set.
        let (small, large) = if self.payment_methods.len() <= methods.len() {
            (&self.payment_methods, methods)
        } else {
            (methods, &self.payment_methods)
        };
        small.iter().any(|m| large.contains(m))
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl PublicOrder {
    pub fn dummy_exact(id: u64, side: OrderSide, amount: Decimal, methods: &[&str]) -> Self {
        Self {
            id: OrderId(id),
            side,
            currency: CurrencyCode::DEFAULT,
            amount: Amount::Exact(amount),
            payment_methods: methods.iter().map(|m| (*m).to_string()).collect(),
        }
    }

    pub fn dummy_range(
        id: u64,
        side: OrderSide,
        min: Decimal,
        max: Decimal,
        methods: &[&str],
    ) -> Self {
        Self {
            amount: Amount::Range { min, max },
            ..Self::dummy_exact(id, side, min, methods)
        }
    }

    #[must_use]
    pub fn in_currency(mut self, code: u32) -> Self {
        self.currency = CurrencyCode::new(code).expect("test currency is non-zero");
        self
    }
}
