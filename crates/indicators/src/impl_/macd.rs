//! MACD (Moving Average Convergence Divergence) indicator

use crate::error::IndicatorError;
use crate::ewm::{alpha_from_span, ewm_mean_adjusted, ewm_mean_recursive};
use crate::traits::{IntoMultiVecs, MultiOutputIndicator};
use ta_types::Candle;

/// MACD result containing MACD line, signal line, and histogram.
#[derive(Debug, Clone)]
pub struct MacdResult {
    /// MACD Line (fast_ema - slow_ema)
    pub macd: Vec<f64>,
    /// Signal Line (EWM of MACD)
    pub signal: Vec<f64>,
    /// Histogram (MACD - Signal)
    pub histogram: Vec<f64>,
}

impl IntoMultiVecs for MacdResult {
    fn into_vecs(self) -> Vec<Vec<f64>> {
        vec![self.macd, self.signal, self.histogram]
    }
}

/// MACD
///
/// Fast and slow EMAs are recursive with `min_periods` equal to their spans;
/// the signal line is an adjusted EWM of the MACD line. The MACD line is NaN
/// until the slow EMA is warm, and the signal line needs `signal_span`
/// finite MACD values on top of that.
#[derive(Debug, Clone)]
pub struct Macd {
    /// Fast EMA span (typically 12)
    pub fast_span: usize,
    /// Slow EMA span (typically 26)
    pub slow_span: usize,
    /// Signal line span (typically 9)
    pub signal_span: usize,
}

impl Macd {
    /// Creates a MACD indicator after validating the spans.
    ///
    /// # Errors
    ///
    /// Returns `IndicatorError::InvalidParams` when any span is 0 or
    /// `fast_span >= slow_span`.
    pub fn new(fast_span: usize, slow_span: usize, signal_span: usize) -> Result<Self, IndicatorError> {
        if fast_span == 0 || slow_span == 0 || signal_span == 0 {
            return Err(IndicatorError::invalid_params("all spans must be greater than 0"));
        }
        if fast_span >= slow_span {
            return Err(IndicatorError::invalid_params(format!(
                "fast_span ({fast_span}) must be less than slow_span ({slow_span})"
            )));
        }

        Ok(Self {
            fast_span,
            slow_span,
            signal_span,
        })
    }

    /// The conventional 12/26/9 parameterization.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            fast_span: 12,
            slow_span: 26,
            signal_span: 9,
        }
    }
}

impl MultiOutputIndicator for Macd {
    type Output = MacdResult;

    fn compute_all(&self, candles: &[Candle]) -> Self::Output {
        let len = candles.len();
        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();

        let fast = ewm_mean_recursive(&closes, alpha_from_span(self.fast_span), self.fast_span);
        let slow = ewm_mean_recursive(&closes, alpha_from_span(self.slow_span), self.slow_span);

        let mut macd = vec![f64::NAN; len];
        for i in 0..len {
            if fast[i].is_finite() && slow[i].is_finite() {
                macd[i] = fast[i] - slow[i];
            }
        }

        let signal = ewm_mean_adjusted(&macd, alpha_from_span(self.signal_span), self.signal_span);

        let mut histogram = vec![f64::NAN; len];
        for i in 0..len {
            if macd[i].is_finite() && signal[i].is_finite() {
                histogram[i] = macd[i] - signal[i];
            }
        }

        MacdResult {
            macd,
            signal,
            histogram,
        }
    }

    fn name(&self) -> &str {
        "MACD"
    }

    fn warmup_periods(&self) -> usize {
        self.slow_span + self.signal_span
    }

    fn output_names(&self) -> &'static [&'static str] {
        &["macd", "signal", "histogram"]
    }
}
