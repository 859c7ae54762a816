//! Candle sourcing seam and the in-memory store.

use std::collections::HashMap;

use crate::error::DataError;
use crate::validation::validate_candles;
use ta_types::{Candle, CandleSpan};

/// The seam between the analysis layers and whatever provides candles.
///
/// Implementations must return candles ascending by timestamp and
/// deduplicated; consumers (the Renko engine in particular) do not re-sort.
/// HTTP providers live behind this trait and are out of scope here.
pub trait CandleSource {
    /// Returns the full candle history for `symbol` at `span`.
    ///
    /// # Errors
    /// - [`DataError::UnknownInstrument`] when the symbol/span has no data.
    fn candles(&self, symbol: &str, span: CandleSpan) -> Result<Vec<Candle>, DataError>;
}

/// In-memory candle store keyed by (symbol, span).
///
/// Backs tests and replay of cached API responses loaded from disk.
#[derive(Debug, Clone, Default)]
pub struct CandleStore {
    series: HashMap<(String, CandleSpan), Vec<Candle>>,
}

impl CandleStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and inserts a candle series, replacing any existing one.
    ///
    /// # Errors
    /// Propagates [`validate_candles`] failures; nothing is inserted then.
    pub fn insert(
        &mut self,
        symbol: impl Into<String>,
        span: CandleSpan,
        candles: Vec<Candle>,
    ) -> Result<(), DataError> {
        validate_candles(&candles)?;
        self.series.insert((symbol.into(), span), candles);
        Ok(())
    }

    /// Number of stored (symbol, span) series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Returns `true` when the store holds no series.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

impl CandleSource for CandleStore {
    fn candles(&self, symbol: &str, span: CandleSpan) -> Result<Vec<Candle>, DataError> {
        self.series
            .get(&(symbol.to_string(), span))
            .cloned()
            .ok_or_else(|| DataError::UnknownInstrument {
                symbol: symbol.to_string(),
                span: span.as_str().to_string(),
            })
    }
}
