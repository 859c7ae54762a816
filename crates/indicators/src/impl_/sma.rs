//! Simple Moving Average (SMA) indicator

use crate::rolling::rolling_mean;
use crate::traits::Indicator;
use ta_types::Candle;

/// Simple Moving Average
///
/// Rolling arithmetic mean of the last N close prices. Shares the rolling
/// kernel with Bollinger Bands, whose middle band is this same mean.
#[derive(Debug, Clone)]
pub struct SMA {
    /// Number of periods for the moving average
    pub period: usize,
}

impl SMA {
    /// Creates a new SMA indicator with the given period.
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for SMA {
    fn compute(&self, candles: &[Candle]) -> Vec<f64> {
        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
        rolling_mean(&closes, self.period)
    }

    fn name(&self) -> &str {
        "SMA"
    }

    fn warmup_periods(&self) -> usize {
        self.period
    }
}
