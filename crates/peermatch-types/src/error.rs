//! Error types for peermatch.
//!
//! All errors use the `PM_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Book entry / order errors
//! - 2xx: Candidate errors
//! - 9xx: General / configuration errors
//!
//! The filter itself never fails. These errors surface only at the
//! boundaries that build its inputs.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::OrderId;

/// Central error enum for all peermatch boundary conversions.
#[derive(Debug, Error)]
pub enum PeermatchError {
    // =================================================================
    // Book Entry Errors (1xx)
    // =================================================================
    /// The entry has neither an exact amount nor a complete range.
    #[error("PM_ERR_100: Order {0} has no amount and no range")]
    MissingAmount(OrderId),

    /// The entry carries both an exact amount and range bounds.
    #[error("PM_ERR_101: Order {0} has both an amount and a range")]
    AmbiguousAmount(OrderId),

    /// The range lower bound exceeds the upper bound.
    #[error("PM_ERR_102: Invalid range: min {min} > max {max}")]
    InvalidRange { min: Decimal, max: Decimal },

    /// An amount or bound is negative.
    #[error("PM_ERR_103: Negative amount: {0}")]
    NegativeAmount(Decimal),

    /// The wire side code is neither BUY nor SELL.
    #[error("PM_ERR_104: Unknown order side code: {0}")]
    UnknownOrderSide(u8),

    /// The currency code is the "any currency" sentinel or otherwise unusable.
    #[error("PM_ERR_105: Invalid currency code: {0}")]
    InvalidCurrency(u32),

    // =================================================================
    // Candidate Errors (2xx)
    // =================================================================
    /// Threshold outside the closed interval [0, 1].
    #[error("PM_ERR_200: Threshold {0} outside [0, 1]")]
    InvalidThreshold(Decimal),

    // =================================================================
    // General (9xx)
    // =================================================================
    /// Serialization / deserialization error.
    #[error("PM_ERR_901: Serialization error: {0}")]
    Serialization(String),

    /// Configuration error (invalid config document, bad defaults, etc.).
    #[error("PM_ERR_902: Configuration error: {0}")]
    Configuration(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, PeermatchError>;

impl From<serde_json::Error> for PeermatchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
