//! Renko error types.

use ta_data::DataError;
use thiserror::Error;

/// Errors that abort Renko series construction.
///
/// All of these are unrecoverable for the requested (symbol, span, brick
/// size) configuration: no partial series is ever returned, and retrying
/// without changing the configuration cannot succeed.
#[derive(Debug, Error)]
pub enum RenkoError {
    /// The candle sequence is empty, so no seed brick can be derived.
    #[error("empty candle sequence: no seed brick available")]
    EmptyCandles,

    /// The ATR reference series is too short for the requested period.
    #[error("ATR undefined: period {period} needs more than {candles} candles")]
    AtrUnavailable {
        /// Requested ATR period.
        period: usize,
        /// Candles available in the reference series.
        candles: usize,
    },

    /// The resolved brick size is not a positive number.
    #[error("invalid brick size: {0} (must be positive)")]
    InvalidBrickSize(i64),

    /// Fetching candles through the source failed.
    #[error("data error: {0}")]
    Data(#[from] DataError),
}
