//! Return-series views over candle data.
//!
//! These are the derived series the KPI layer consumes: simple returns from
//! closes and compounded cumulative returns, plus group views that tolerate
//! partial failures across symbols.

use std::collections::HashMap;

use crate::error::DataError;
use crate::source::CandleSource;
use ta_types::{Candle, CandleSpan};

/// Simple period-over-period returns from a candle series' closes.
///
/// The first observation has no predecessor and is dropped, so the result
/// has `candles.len() - 1` entries.
#[must_use]
pub fn simple_returns(candles: &[Candle]) -> Vec<f64> {
    candles
        .windows(2)
        .map(|w| w[1].close / w[0].close - 1.0)
        .collect()
}

/// Compounded cumulative returns: `initial * prod(1 + r)` per step.
#[must_use]
pub fn cumulative_returns(returns: &[f64], initial: f64) -> Vec<f64> {
    let mut acc = initial;
    returns
        .iter()
        .map(|r| {
            acc *= 1.0 + r;
            acc
        })
        .collect()
}

/// Returns view for one instrument.
///
/// # Errors
/// Propagates source failures; [`DataError::EmptyData`] when the series is
/// too short to form a single return.
pub fn instrument_returns(
    source: &dyn CandleSource,
    symbol: &str,
    span: CandleSpan,
) -> Result<Vec<f64>, DataError> {
    let candles = source.candles(symbol, span)?;
    if candles.len() < 2 {
        return Err(DataError::EmptyData);
    }
    Ok(simple_returns(&candles))
}

/// Cumulative-returns view for one instrument.
///
/// # Errors
/// Same failure modes as [`instrument_returns`].
pub fn instrument_cumulative_returns(
    source: &dyn CandleSource,
    symbol: &str,
    span: CandleSpan,
    initial: f64,
) -> Result<Vec<f64>, DataError> {
    let returns = instrument_returns(source, symbol, span)?;
    Ok(cumulative_returns(&returns, initial))
}

/// Candle view for a group of instruments.
///
/// Symbols that fail to load are skipped with a warning; the call only
/// errors when every symbol failed.
///
/// # Errors
/// - [`DataError::AllSymbolsFailed`] when no symbol produced data.
pub fn group_candles(
    source: &dyn CandleSource,
    symbols: &[&str],
    span: CandleSpan,
) -> Result<HashMap<String, Vec<Candle>>, DataError> {
    let mut result = HashMap::new();

    for &symbol in symbols {
        match source.candles(symbol, span) {
            Ok(candles) => {
                result.insert(symbol.to_string(), candles);
            }
            Err(err) => {
                tracing::warn!("skipping {symbol}: {err}");
            }
        }
    }

    if result.is_empty() {
        return Err(DataError::AllSymbolsFailed(
            symbols.iter().map(|s| (*s).to_string()).collect(),
        ));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::CandleStore;

    fn candles_from_closes(closes: &[f64]) -> Vec<Candle> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| Candle {
                timestamp_ns: (i as i64 + 1) * 86_400_000_000_000,
                open: close,
                high: close + 1.0,
                low: close - 1.0,
                close,
                volume: 1.0,
            })
            .collect()
    }

    #[test]
    fn test_simple_returns() {
        let candles = candles_from_closes(&[100.0, 110.0, 99.0]);
        let returns = simple_returns(&candles);

        assert_eq!(returns.len(), 2);
        assert!((returns[0] - 0.10).abs() < 1e-12);
        assert!((returns[1] - (99.0 / 110.0 - 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_cumulative_returns_compound() {
        let cumulative = cumulative_returns(&[0.10, -0.10], 1.0);
        assert!((cumulative[0] - 1.10).abs() < 1e-12);
        assert!((cumulative[1] - 0.99).abs() < 1e-12);
    }

    #[test]
    fn test_instrument_returns_too_short() {
        let mut store = CandleStore::new();
        store
            .insert("X", CandleSpan::Daily, candles_from_closes(&[100.0]))
            .unwrap();

        let err = instrument_returns(&store, "X", CandleSpan::Daily).unwrap_err();
        assert!(matches!(err, DataError::EmptyData));
    }

    #[test]
    fn test_group_candles_skips_failures() {
        let mut store = CandleStore::new();
        store
            .insert("GOOD", CandleSpan::Daily, candles_from_closes(&[1.0, 2.0]))
            .unwrap();

        let group = group_candles(&store, &["GOOD", "MISSING"], CandleSpan::Daily).unwrap();
        assert_eq!(group.len(), 1);
        assert!(group.contains_key("GOOD"));
    }

    #[test]
    fn test_group_candles_all_failed() {
        let store = CandleStore::new();
        let err = group_candles(&store, &["A", "B"], CandleSpan::Daily).unwrap_err();
        assert!(matches!(err, DataError::AllSymbolsFailed(_)));
    }
}
