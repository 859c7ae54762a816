//! Exponential Moving Average (EMA) indicator

use crate::ewm::{alpha_from_span, ewm_mean_recursive};
use crate::traits::Indicator;
use ta_types::Candle;

/// Exponential Moving Average
///
/// Recursive smoothing of close prices with multiplier `2 / (period + 1)`,
/// seeded by the first close.
#[derive(Debug, Clone)]
pub struct EMA {
    /// Number of periods for the EMA
    pub period: usize,
}

impl EMA {
    /// Creates a new EMA indicator with the given period.
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for EMA {
    fn compute(&self, candles: &[Candle]) -> Vec<f64> {
        let len = candles.len();
        if self.period == 0 || len == 0 {
            return vec![f64::NAN; len];
        }

        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
        ewm_mean_recursive(&closes, alpha_from_span(self.period), 1)
    }

    fn name(&self) -> &str {
        "EMA"
    }

    fn warmup_periods(&self) -> usize {
        1
    }
}
