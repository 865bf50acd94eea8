//! # peermatch-types
//!
//! Shared types, errors, and configuration for the **peermatch** order
//! filter.
//!
//! This crate is the leaf dependency of the workspace. It defines:
//!
//! - **Identifiers**: [`OrderId`], [`CurrencyCode`], [`CurrencySelection`]
//! - **Order model**: [`PublicOrder`], [`OrderSide`], [`Amount`]
//! - **Candidate model**: [`CandidateSpec`], [`MakerDraft`], [`Threshold`]
//! - **Book boundary**: [`RawBookEntry`], [`parse_book`]
//! - **Configuration**: [`FilterConfig`]
//! - **Errors**: [`PeermatchError`] with `PM_ERR_` prefix codes
//! - **Constants**: defaults shared by the filter and its callers

pub mod book;
pub mod candidate;
pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod order;

// Re-export all primary types at crate root for ergonomic imports:
//   use peermatch_types::{PublicOrder, CandidateSpec, Amount, ...};

pub use book::*;
pub use candidate::*;
pub use config::*;
pub use error::*;
pub use ids::*;
pub use order::*;

// Constants are accessed via `peermatch_types::constants::FOO`
// (not re-exported to avoid name collisions).
