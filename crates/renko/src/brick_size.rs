//! Brick-size resolution.

use crate::error::RenkoError;
use ta_data::CandleSource;
use ta_indicators::{Indicator, ATR};
use ta_types::CandleSpan;

/// How the brick size of a Renko series is determined.
///
/// The two modes are mutually exclusive by construction; the spec is
/// resolved exactly once when the series is built and a different spec
/// means building a new series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrickSizeSpec {
    /// Use this size as-is.
    Fixed(u32),
    /// Derive the size from ATR over a reference candle series:
    /// `3 * round(last ATR value)`.
    FromAtr {
        /// Candle span of the reference series (need not match the span the
        /// bricks are built from).
        span: CandleSpan,
        /// ATR period; the reference series must reach past its warm-up.
        period: usize,
    },
}

impl BrickSizeSpec {
    /// Resolves the spec to a concrete brick size.
    ///
    /// `FromAtr` fetches the reference series through `source` — the only
    /// I/O in Renko construction — and reads the last ATR value.
    ///
    /// # Errors
    /// - [`RenkoError::Data`] when the reference fetch fails.
    /// - [`RenkoError::AtrUnavailable`] when the reference series does not
    ///   cover the ATR warm-up (last value NaN).
    /// - [`RenkoError::InvalidBrickSize`] when the resolved size is not
    ///   positive (fixed size 0, or an ATR small enough to round to 0).
    pub fn resolve(&self, source: &dyn CandleSource, symbol: &str) -> Result<u32, RenkoError> {
        match *self {
            BrickSizeSpec::Fixed(size) => {
                if size == 0 {
                    return Err(RenkoError::InvalidBrickSize(0));
                }
                Ok(size)
            }
            BrickSizeSpec::FromAtr { span, period } => {
                let candles = source.candles(symbol, span)?;
                let atr = ATR::new(period).compute(&candles);

                let last = atr.last().copied().unwrap_or(f64::NAN);
                if !last.is_finite() {
                    return Err(RenkoError::AtrUnavailable {
                        period,
                        candles: candles.len(),
                    });
                }

                // Ties round to even.
                let size = 3.0 * last.round_ties_even();
                if size <= 0.0 {
                    return Err(RenkoError::InvalidBrickSize(size as i64));
                }

                Ok(size as u32)
            }
        }
    }
}
