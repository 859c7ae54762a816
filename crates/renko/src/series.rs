//! A fully-synthesized Renko series for one instrument.

use crate::brick_size::BrickSizeSpec;
use crate::error::RenkoError;
use crate::synthesizer::RenkoSynthesizer;
use ta_data::CandleSource;
use ta_types::{Brick, Candle, CandleSpan};

/// Bricks synthesized for one `(symbol, span)` pair at a resolved brick size.
///
/// Construction is all-or-nothing: any failure while resolving the brick
/// size, fetching candles or seeding the series yields an error and no
/// partial series.
#[derive(Debug, Clone)]
pub struct RenkoSeries {
    symbol: String,
    span: CandleSpan,
    brick_size: u32,
    bricks: Vec<Brick>,
}

impl RenkoSeries {
    /// Builds the series: resolves `spec` to a concrete brick size, fetches
    /// the candles for `(symbol, span)` and runs the synthesizer over them.
    ///
    /// # Errors
    /// Any [`RenkoError`] from brick-size resolution, the candle fetch, or
    /// synthesis of the seed brick.
    pub fn build(
        source: &dyn CandleSource,
        symbol: &str,
        span: CandleSpan,
        spec: &BrickSizeSpec,
    ) -> Result<Self, RenkoError> {
        let brick_size = spec.resolve(source, symbol)?;
        let candles = source.candles(symbol, span)?;
        let bricks = RenkoSynthesizer::new(brick_size)?.synthesize(&candles)?;

        Ok(Self {
            symbol: symbol.to_owned(),
            span,
            brick_size,
            bricks,
        })
    }

    /// Instrument symbol the series was built for.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Candle span of the underlying series.
    #[must_use]
    pub fn span(&self) -> CandleSpan {
        self.span
    }

    /// The resolved brick size.
    #[must_use]
    pub fn brick_size(&self) -> u32 {
        self.brick_size
    }

    /// All bricks in emission order, seed first.
    #[must_use]
    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    /// Re-expresses the bricks as OHLC candles so indicator and KPI code can
    /// run on brick series unchanged. Bricks carry no volume, so every
    /// candle reports 0.
    #[must_use]
    pub fn to_candles(&self) -> Vec<Candle> {
        self.bricks
            .iter()
            .map(|b| Candle {
                timestamp_ns: b.timestamp_ns,
                open: b.open,
                high: b.high,
                low: b.low,
                close: b.close,
                volume: 0.0,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ta_data::CandleStore;

    fn candle(i: i64, close: f64) -> Candle {
        Candle {
            timestamp_ns: i * 86_400_000_000_000,
            open: close,
            high: close + 3.0,
            low: close - 3.0,
            close,
            volume: 1_000.0,
        }
    }

    #[test]
    fn test_build_with_fixed_size() {
        let mut store = CandleStore::new();
        let candles: Vec<Candle> = [107.0, 125.0, 95.0]
            .iter()
            .enumerate()
            .map(|(i, &c)| candle(i as i64, c))
            .collect();
        store.insert("REL", CandleSpan::Daily, candles).unwrap();

        let series = RenkoSeries::build(
            &store,
            "REL",
            CandleSpan::Daily,
            &BrickSizeSpec::Fixed(10),
        )
        .unwrap();

        assert_eq!(series.symbol(), "REL");
        assert_eq!(series.span(), CandleSpan::Daily);
        assert_eq!(series.brick_size(), 10);
        assert!(!series.bricks().is_empty());
    }

    #[test]
    fn test_unknown_symbol_fails() {
        let store = CandleStore::new();
        let result = RenkoSeries::build(
            &store,
            "NOPE",
            CandleSpan::Daily,
            &BrickSizeSpec::Fixed(10),
        );
        assert!(matches!(result, Err(RenkoError::Data(_))));
    }

    #[test]
    fn test_to_candles_zero_volume() {
        let mut store = CandleStore::new();
        let candles: Vec<Candle> = (0..10).map(|i| candle(i, 100.0 + 7.0 * i as f64)).collect();
        store.insert("REL", CandleSpan::Daily, candles).unwrap();

        let series = RenkoSeries::build(
            &store,
            "REL",
            CandleSpan::Daily,
            &BrickSizeSpec::Fixed(10),
        )
        .unwrap();

        let as_candles = series.to_candles();
        assert_eq!(as_candles.len(), series.bricks().len());
        for (c, b) in as_candles.iter().zip(series.bricks()) {
            assert_eq!(c.timestamp_ns, b.timestamp_ns);
            assert!((c.open - b.open).abs() < 1e-12);
            assert!((c.close - b.close).abs() < 1e-12);
            assert!(c.volume == 0.0);
        }
    }
}
