//! Unit-economics core for marketplace sellers: a deterministic calculation
//! engine and a layered product-commission catalog.
//!
//! The crate has two independent halves, composed only by the caller:
//!
//! - [`economics`] — pure per-unit and aggregate profitability calculations
//!   under three fixed tax scenarios.
//! - [`catalog`] — loading, normalizing, persisting and searching the
//!   product → commission lookup table.

pub mod error;
pub mod format;
pub mod types;

#[cfg(feature = "economics")]
pub mod economics;

#[cfg(feature = "catalog")]
pub mod catalog;

pub use error::SellerEconError;
pub use types::*;

/// Standard result type for all seller-econ operations
pub type SellerEconResult<T> = Result<T, SellerEconError>;
