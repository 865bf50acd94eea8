//! Identifiers used throughout peermatch.
//!
//! Order IDs are issued by the coordinator and are plain integers.
//! Currencies are positive integer codes; "any currency" is modelled as
//! [`CurrencySelection::Any`] rather than a numeric sentinel.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{PeermatchError, Result, constants};

// ---------------------------------------------------------------------------
// OrderId
// ---------------------------------------------------------------------------

/// Identifier of a public order, as issued by the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl OrderId {
    #[must_use]
    pub fn to_le_bytes(self) -> [u8; 8] {
        self.0.to_le_bytes()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "order:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// CurrencyCode
// ---------------------------------------------------------------------------

/// A concrete fiat currency code. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CurrencyCode(u32);

impl CurrencyCode {
    /// Substituted for an "any currency" selection unless configured otherwise.
    pub const DEFAULT: Self = Self(constants::DEFAULT_CURRENCY);

    /// Build a currency code, rejecting the "any currency" sentinel.
    pub fn new(code: u32) -> Result<Self> {
        if code == constants::ANY_CURRENCY_SENTINEL {
            return Err(PeermatchError::InvalidCurrency(code));
        }
        Ok(Self(code))
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for CurrencyCode {
    type Error = PeermatchError;

    fn try_from(code: u32) -> Result<Self> {
        Self::new(code)
    }
}

impl From<CurrencyCode> for u32 {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "currency:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// CurrencySelection
// ---------------------------------------------------------------------------

/// The currency chosen in the maker form: a concrete code or "any".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurrencySelection {
    #[default]
    Any,
    Code(CurrencyCode),
}

impl CurrencySelection {
    /// Map a legacy wire code, where `0` means "any currency".
    #[must_use]
    pub fn from_code(code: u32) -> Self {
        CurrencyCode::new(code).map_or(Self::Any, Self::Code)
    }

    /// Collapse the selection to a concrete code, substituting `default` for `Any`.
    #[must_use]
    pub fn resolve(self, default: CurrencyCode) -> CurrencyCode {
        match self {
            Self::Any => default,
            Self::Code(code) => code,
        }
    }
}

impl fmt::Display for CurrencySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "currency:any"),
            Self::Code(code) => write!(f, "{code}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
