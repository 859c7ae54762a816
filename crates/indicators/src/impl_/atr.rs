//! Average True Range (ATR) indicator with span-EWM smoothing

use crate::ewm::{alpha_from_span, ewm_mean_adjusted};
use crate::traits::Indicator;
use ta_types::Candle;

/// Average True Range
///
/// TR = max(High - Low, |High - Prev_Close|, |Low - Prev_Close|), smoothed
/// with an adjusted exponentially weighted mean over `span = period`. The
/// first candle has no previous close, so its TR is undefined and the first
/// valid ATR value lands at index `period` (not `period - 1`).
#[derive(Debug, Clone)]
pub struct ATR {
    /// Number of periods for ATR calculation
    pub period: usize,
}

impl ATR {
    /// Creates a new ATR indicator with the given period.
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Calculates True Range for a candle given the previous close.
    ///
    /// TR = max(High - Low, |High - Prev_Close|, |Low - Prev_Close|)
    #[inline]
    fn true_range(candle: &Candle, prev_close: f64) -> f64 {
        let hl = candle.high - candle.low;
        let hc = (candle.high - prev_close).abs();
        let lc = (candle.low - prev_close).abs();
        hl.max(hc).max(lc)
    }
}

impl Indicator for ATR {
    fn compute(&self, candles: &[Candle]) -> Vec<f64> {
        let len = candles.len();

        if self.period == 0 || len == 0 {
            return vec![f64::NAN; len];
        }

        let mut tr = vec![f64::NAN; len];
        for i in 1..len {
            tr[i] = Self::true_range(&candles[i], candles[i - 1].close);
        }

        ewm_mean_adjusted(&tr, alpha_from_span(self.period), self.period)
    }

    fn name(&self) -> &str {
        "ATR"
    }

    fn warmup_periods(&self) -> usize {
        // One extra bar because TR needs a previous close
        self.period + 1
    }
}
