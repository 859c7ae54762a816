//! Data-layer error types.

use thiserror::Error;

/// Errors that can occur while sourcing or validating candle data.
#[derive(Debug, Error)]
pub enum DataError {
    /// A required file was not found on disk.
    #[error("File not found: {0} ({1})")]
    FileNotFound(String, String),

    /// JSON parsing or decoding failed.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// No candles are available for the requested symbol/span.
    #[error("No {span} candles for symbol {symbol}")]
    UnknownInstrument {
        /// Requested symbol.
        symbol: String,
        /// Requested candle span.
        span: String,
    },

    /// No rows were loaded after reading data.
    #[error("Empty data")]
    EmptyData,

    /// A cached response is older than the staleness threshold.
    #[error("Stale cache for {path}: age {age_secs}s exceeds {max_age_secs}s")]
    StaleCache {
        /// Offending cache file.
        path: String,
        /// Observed age in seconds.
        age_secs: u64,
        /// Configured threshold in seconds.
        max_age_secs: u64,
    },

    /// Data violated a validation rule.
    #[error("Corrupt data: {0}")]
    CorruptData(String),

    /// Every symbol of a group request failed.
    #[error("No data for any of the requested symbols: {0:?}")]
    AllSymbolsFailed(Vec<String>),
}
