//! Candle validation rules.

use crate::error::DataError;
use ta_types::Candle;

/// Validates a candle series before it enters the store.
///
/// # Errors
/// - [`DataError::EmptyData`] when `candles` is empty.
/// - [`DataError::CorruptData`] on NaN/Inf fields, negative volume,
///   low/high envelope violations or non-ascending timestamps.
pub fn validate_candles(candles: &[Candle]) -> Result<(), DataError> {
    if candles.is_empty() {
        return Err(DataError::EmptyData);
    }

    for (i, candle) in candles.iter().enumerate() {
        if !candle.is_finite() {
            return Err(DataError::CorruptData(format!(
                "NaN/Inf at index {i}: {candle:?}"
            )));
        }

        if candle.volume < 0.0 {
            return Err(DataError::CorruptData(format!(
                "Negative volume at index {i}: {}",
                candle.volume
            )));
        }

        if candle.low > candle.open
            || candle.low > candle.close
            || candle.high < candle.open
            || candle.high < candle.close
            || candle.low > candle.high
        {
            return Err(DataError::CorruptData(format!(
                "Invalid OHLC at index {i}: low={}, high={}, open={}, close={}",
                candle.low, candle.high, candle.open, candle.close
            )));
        }

        if i > 0 && candle.timestamp_ns <= candles[i - 1].timestamp_ns {
            return Err(DataError::CorruptData(format!(
                "Non-monotonic timestamp at index {i}: {} <= {}",
                candle.timestamp_ns,
                candles[i - 1].timestamp_ns
            )));
        }
    }

    Ok(())
}
