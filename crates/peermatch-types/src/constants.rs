//! System-wide constants for the peermatch filter.

use rust_decimal::Decimal;

/// Default fractional tolerance applied to exact-amount comparisons (0.7).
pub const DEFAULT_MATCH_THRESHOLD: Decimal = Decimal::from_parts(7, 0, 0, false, 1);

/// Currency substituted when the maker selects "any currency" (1 = USD).
pub const DEFAULT_CURRENCY: u32 = 1;

/// Legacy wire sentinel for "any currency".
pub const ANY_CURRENCY_SENTINEL: u32 = 0;

/// Wire code of a BUY order in the public book.
pub const WIRE_TYPE_BUY: u8 = 0;

/// Wire code of a SELL order in the public book.
pub const WIRE_TYPE_SELL: u8 = 1;
