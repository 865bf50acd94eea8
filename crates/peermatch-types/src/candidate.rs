//! The candidate order: what the maker is about to create.
//!
//! [`MakerDraft`] mirrors the in-progress maker form, including the
//! "any currency" selection and half-filled amount fields. The filter never
//! sees a draft; it sees the [`CandidateSpec`] that
//! [`MakerDraft::to_candidate`] derives from it.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Amount, CurrencyCode, CurrencySelection, FilterConfig, OrderSide, PeermatchError, Result};

// ---------------------------------------------------------------------------
// Threshold
// ---------------------------------------------------------------------------

/// Fractional tolerance in `[0, 1]` that widens an exact amount into a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Threshold(Decimal);

impl Threshold {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self> {
        if value < Decimal::ZERO || value > Decimal::ONE {
            return Err(PeermatchError::InvalidThreshold(value));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn get(self) -> Decimal {
        self.0
    }

    /// `value * (1 - t)`, saturating at `Decimal::MIN`.
    #[must_use]
    pub fn lower(self, value: Decimal) -> Decimal {
        value
            .checked_mul(Decimal::ONE - self.0)
            .unwrap_or(Decimal::MIN)
    }

    /// `value * (1 + t)`, saturating at `Decimal::MAX`.
    #[must_use]
    pub fn upper(self, value: Decimal) -> Decimal {
        value
            .checked_mul(Decimal::ONE + self.0)
            .unwrap_or(Decimal::MAX)
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(crate::constants::DEFAULT_MATCH_THRESHOLD)
    }
}

impl TryFrom<Decimal> for Threshold {
    type Error = PeermatchError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Threshold> for Decimal {
    fn from(threshold: Threshold) -> Self {
        threshold.0
    }
}

impl std::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// CandidateSpec
// ---------------------------------------------------------------------------

/// The order the user is about to create, with the currency already concrete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSpec {
    pub currency: CurrencyCode,
    /// `None` accepts counterparties on either side.
    pub side: Option<OrderSide>,
    pub payment_methods: BTreeSet<String>,
    /// `None` leaves the amount unconstrained.
    pub amount: Option<Amount>,
    pub threshold: Threshold,
}

impl CandidateSpec {
    #[must_use]
    pub fn new(currency: CurrencyCode, threshold: Threshold) -> Self {
        Self {
            currency,
            side: None,
            payment_methods: BTreeSet::new(),
            amount: None,
            threshold,
        }
    }

    #[must_use]
    pub fn with_side(mut self, side: OrderSide) -> Self {
        self.side = Some(side);
        self
    }

    #[must_use]
    pub fn with_amount(mut self, amount: Amount) -> Self {
        self.amount = Some(amount);
        self
    }

    #[must_use]
    pub fn with_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.payment_methods = methods.into_iter().map(Into::into).collect();
        self
    }
}

// ---------------------------------------------------------------------------
// MakerDraft
// ---------------------------------------------------------------------------

/// State of the maker form while the user is still typing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakerDraft {
    pub currency: CurrencySelection,
    pub side: Option<OrderSide>,
    pub payment_methods: BTreeSet<String>,
    /// Whether the form is in range mode (min/max) rather than single-amount mode.
    pub range_enabled: bool,
    pub amount: Option<Decimal>,
    pub min_amount: Option<Decimal>,
    pub max_amount: Option<Decimal>,
}

impl MakerDraft {
    /// The amount constraint the form currently expresses, if any.
    ///
    /// Incomplete or invalid entries (a range with one bound, an inverted
    /// range, a negative value) impose no constraint.
    #[must_use]
    pub fn amount_constraint(&self) -> Option<Amount> {
        let candidate = if self.range_enabled {
            Amount::range(self.min_amount?, self.max_amount?)
        } else {
            Amount::exact(self.amount?)
        };
        match candidate {
            Ok(amount) => Some(amount),
            Err(err) => {
                tracing::debug!(error = %err, "Ignoring unusable amount in maker draft");
                None
            }
        }
    }

    /// Resolve wildcards and produce the filter input.
    #[must_use]
    pub fn to_candidate(&self, config: &FilterConfig) -> CandidateSpec {
        CandidateSpec {
            currency: self.currency.resolve(config.default_currency),
            side: self.side,
            payment_methods: self.payment_methods.clone(),
            amount: self.amount_constraint(),
            threshold: config.threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(n: i64) -> Decimal {
        Decimal::new(n, 0)
    }

    #[test]
    fn threshold_bounds() {
        assert!(Threshold::new(Decimal::ZERO).is_ok());
        assert!(Threshold::new(Decimal::ONE).is_ok());
        assert!(Threshold::new(Decimal::new(7, 1)).is_ok());
        assert!(matches!(
            Threshold::new(Decimal::new(11, 1)),
            Err(PeermatchError::InvalidThreshold(_))
        ));
        assert!(Threshold::new(Decimal::new(-1, 2)).is_err());
    }

    #[test]
    fn threshold_default_is_point_seven() {
        assert_eq!(Threshold::default().get(), Decimal::new(7, 1));
    }

    #[test]
    fn threshold_band_is_exact() {
        let t = Threshold::new(Decimal::new(7, 1)).unwrap();
        assert_eq!(t.upper(dec(100)), dec(170));
        assert_eq!(t.lower(dec(100)), dec(30));
    }

    #[test]
    fn threshold_band_saturates_at_decimal_limits() {
        let t = Threshold::new(Decimal::new(7, 1)).unwrap();
        assert_eq!(t.upper(Decimal::MAX), Decimal::MAX);
        assert_eq!(Threshold::new(Decimal::ONE).unwrap().upper(Decimal::MAX), Decimal::MAX);
        assert!(t.lower(Decimal::MAX) < Decimal::MAX);
        assert_eq!(Threshold::ZERO.upper(Decimal::MAX), Decimal::MAX);
    }

    #[test]
    fn threshold_serde_rejects_out_of_range() {
        assert!(serde_json::from_str::<Threshold>("\"0.2\"").is_ok());
        assert!(serde_json::from_str::<Threshold>("\"1.5\"").is_err());
    }

    #[test]
    fn draft_any_currency_resolves_to_default() {
        let config = FilterConfig::default();
        let draft = MakerDraft::default();
        let candidate = draft.to_candidate(&config);
        assert_eq!(candidate.currency, config.default_currency);
        assert_eq!(candidate.threshold, config.threshold);
        assert!(candidate.amount.is_none());
    }

    #[test]
    fn draft_concrete_currency_is_kept() {
        let eur = CurrencyCode::new(2).unwrap();
        let draft = MakerDraft {
            currency: CurrencySelection::Code(eur),
            ..MakerDraft::default()
        };
        assert_eq!(draft.to_candidate(&FilterConfig::default()).currency, eur);
    }

    #[test]
    fn draft_single_amount_mode() {
        let draft = MakerDraft {
            amount: Some(dec(100)),
            min_amount: Some(dec(10)),
            max_amount: Some(dec(20)),
            ..MakerDraft::default()
        };
        assert_eq!(draft.amount_constraint(), Some(Amount::Exact(dec(100))));
    }

    #[test]
    fn draft_range_mode() {
        let draft = MakerDraft {
            range_enabled: true,
            amount: Some(dec(100)),
            min_amount: Some(dec(50)),
            max_amount: Some(dec(150)),
            ..MakerDraft::default()
        };
        assert_eq!(
            draft.amount_constraint(),
            Some(Amount::Range {
                min: dec(50),
                max: dec(150)
            })
        );
    }

    #[test]
    fn draft_incomplete_or_inverted_range_is_unconstrained() {
        let half = MakerDraft {
            range_enabled: true,
            min_amount: Some(dec(50)),
            ..MakerDraft::default()
        };
        assert_eq!(half.amount_constraint(), None);

        let inverted = MakerDraft {
            range_enabled: true,
            min_amount: Some(dec(150)),
            max_amount: Some(dec(50)),
            ..MakerDraft::default()
        };
        assert_eq!(inverted.amount_constraint(), None);
    }

    #[test]
    fn candidate_builder() {
        let usd = CurrencyCode::new(1).unwrap();
        let candidate = CandidateSpec::new(usd, Threshold::default())
            .with_side(OrderSide::Sell)
            .with_amount(Amount::Exact(dec(100)))
            .with_methods(["SEPA", "Revolut"]);
        assert_eq!(candidate.side, Some(OrderSide::Sell));
        assert_eq!(candidate.payment_methods.len(), 2);
        assert!(candidate.payment_methods.contains("Revolut"));
    }
}
