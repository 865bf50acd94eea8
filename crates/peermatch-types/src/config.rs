//! Configuration for the order-matching filter.

use serde::{Deserialize, Serialize};

use crate::{CurrencyCode, PeermatchError, Result, Threshold};

/// Settings the maker page applies when turning a draft into a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Tolerance applied to exact-amount comparisons.
    pub threshold: Threshold,
    /// Currency substituted for an "any currency" selection.
    pub default_currency: CurrencyCode,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            threshold: Threshold::default(),
            default_currency: CurrencyCode::DEFAULT,
        }
    }
}

impl FilterConfig {
    /// Parse a JSON config document. Missing fields take their defaults;
    /// an out-of-range threshold or a zero currency is rejected.
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|err| PeermatchError::Configuration(err.to_string()))
    }
}
