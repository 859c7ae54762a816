//! Indicator traits.
//!
//! Defines the core traits implemented by all indicators. Indicators are
//! computed over a full candle series and return values aligned to it; the
//! candle series may just as well be a Renko brick series re-exposed as
//! OHLC data.

use ta_types::Candle;

/// Trait for single-output indicators.
///
/// All indicators compute over the full candle series and return a `Vec<f64>`
/// of the same length. Values before the warmup period are NaN.
pub trait Indicator: Send + Sync {
    /// Computes the indicator for all candles.
    ///
    /// Returns `Vec<f64>` with the same length as `candles`.
    /// Values at indices < `warmup_periods()` are `f64::NAN`.
    fn compute(&self, candles: &[Candle]) -> Vec<f64>;

    /// Name of the indicator (e.g., "EMA", "ATR").
    fn name(&self) -> &str;

    /// Minimum number of bars required for valid output.
    fn warmup_periods(&self) -> usize;
}

/// Trait for multi-output indicators like MACD or Bollinger Bands.
///
/// These indicators produce multiple series (e.g., macd, signal, histogram)
/// that are computed together for efficiency.
pub trait MultiOutputIndicator: Send + Sync {
    /// Type of the output structure
    type Output: IntoMultiVecs;

    /// Computes all outputs at once.
    fn compute_all(&self, candles: &[Candle]) -> Self::Output;

    /// Name of the indicator.
    fn name(&self) -> &str;

    /// Minimum number of bars for valid output.
    fn warmup_periods(&self) -> usize;

    /// List of output names, in the order `into_vecs` returns them.
    fn output_names(&self) -> &'static [&'static str];
}

/// Trait for converting multi-output results into a vector of vectors.
pub trait IntoMultiVecs {
    /// Converts the output structure into a vector of value vectors.
    fn into_vecs(self) -> Vec<Vec<f64>>;
}
