//! Relative Strength Index (RSI) indicator

use crate::ewm::ewm_mean_adjusted;
use crate::traits::Indicator;
use ta_types::Candle;

/// Relative Strength Index
///
/// Close-to-close changes are split into gains and losses, both smoothed
/// with an adjusted EWM at `alpha = 1 / period`. RSI = 100 - 100/(1 + RS)
/// with RS = avg_gain / avg_loss; an all-gain window saturates at 100 and
/// an all-loss window at 0. The first bar has no change and counts as a
/// zero gain and zero loss, so the first finite value lands at index
/// `period - 1`.
#[derive(Debug, Clone)]
pub struct RSI {
    /// Number of periods for the smoothing
    pub period: usize,
}

impl RSI {
    /// Creates a new RSI indicator with the given period.
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for RSI {
    fn compute(&self, candles: &[Candle]) -> Vec<f64> {
        let len = candles.len();
        if self.period == 0 || len == 0 {
            return vec![f64::NAN; len];
        }

        let mut gains = vec![0.0_f64; len];
        let mut losses = vec![0.0_f64; len];
        for i in 1..len {
            let change = candles[i].close - candles[i - 1].close;
            gains[i] = if change >= 0.0 { change } else { 0.0 };
            losses[i] = if change < 0.0 { -change } else { 0.0 };
        }

        let alpha = 1.0 / self.period as f64;
        let avg_gain = ewm_mean_adjusted(&gains, alpha, self.period);
        let avg_loss = ewm_mean_adjusted(&losses, alpha, self.period);

        let mut result = vec![f64::NAN; len];
        for i in 0..len {
            if avg_gain[i].is_finite() && avg_loss[i].is_finite() {
                // avg_loss == 0 gives rs = inf and RSI saturates at 100
                let rs = avg_gain[i] / avg_loss[i];
                result[i] = 100.0 - 100.0 / (1.0 + rs);
            }
        }

        result
    }

    fn name(&self) -> &str {
        "RSI"
    }

    fn warmup_periods(&self) -> usize {
        self.period
    }
}
