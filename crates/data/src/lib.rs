//! TA Data
//!
//! Candle sourcing, cached-response loading, validation and return-series
//! views.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]

/// Data-layer error types.
pub mod error;
/// Cached-response loading and staleness checks.
pub mod loader;
/// Candle sourcing trait and in-memory store.
pub mod source;
/// Candle validation rules.
pub mod validation;
/// Return-series and group views.
pub mod views;

/// Re-export: data-layer error type.
pub use error::DataError;
/// Re-export: cache staleness check.
pub use loader::ensure_fresh;
/// Re-export: load candles from a cached JSON response.
pub use loader::load_candles;
/// Re-export: load and validate candles.
pub use loader::load_and_validate;
/// Re-export: resolve a cached-response path.
pub use loader::resolve_cache_path;
/// Re-export: resolve a cached-response path under an explicit root.
pub use loader::resolve_cache_path_under;
/// Re-export: candle sourcing seam.
pub use source::CandleSource;
/// Re-export: in-memory candle store.
pub use source::CandleStore;
/// Re-export: candle validation.
pub use validation::validate_candles;
/// Re-export: compounded cumulative returns.
pub use views::cumulative_returns;
/// Re-export: partial-failure-tolerant group view.
pub use views::group_candles;
/// Re-export: per-instrument cumulative returns view.
pub use views::instrument_cumulative_returns;
/// Re-export: per-instrument returns view.
pub use views::instrument_returns;
/// Re-export: simple close-to-close returns.
pub use views::simple_returns;
