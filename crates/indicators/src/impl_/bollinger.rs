//! Bollinger Bands indicator

use crate::rolling::rolling_mean_std;
use crate::traits::{IntoMultiVecs, MultiOutputIndicator};
use ta_types::Candle;

/// Bollinger Bands result containing the bands and the band width.
#[derive(Debug, Clone)]
pub struct BollingerResult {
    /// Upper band = SMA + std_factor * std
    pub upper: Vec<f64>,
    /// Middle band = SMA
    pub middle: Vec<f64>,
    /// Lower band = SMA - std_factor * std
    pub lower: Vec<f64>,
    /// Band width = upper - lower
    pub width: Vec<f64>,
}

impl IntoMultiVecs for BollingerResult {
    fn into_vecs(self) -> Vec<Vec<f64>> {
        vec![self.upper, self.middle, self.lower, self.width]
    }
}

/// Bollinger Bands
///
/// Standard-deviation bands around a simple moving average of closes:
/// - Upper Band = SMA + (std_factor * StdDev)
/// - Middle Band = SMA
/// - Lower Band = SMA - (std_factor * StdDev)
/// - Width = Upper - Lower
///
/// Uses population standard deviation (n, not n-1).
#[derive(Debug, Clone)]
pub struct BollingerBands {
    /// Period for the SMA and standard deviation
    pub period: usize,
    /// Multiplier for standard deviation (typically 2.0)
    pub std_factor: f64,
}

impl BollingerBands {
    /// Creates new Bollinger Bands with the given parameters.
    pub fn new(period: usize, std_factor: f64) -> Self {
        Self { period, std_factor }
    }

    /// The conventional 20-period, 2-sigma parameterization.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(20, 2.0)
    }
}

impl MultiOutputIndicator for BollingerBands {
    type Output = BollingerResult;

    fn compute_all(&self, candles: &[Candle]) -> Self::Output {
        let len = candles.len();
        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
        let (middle, std) = rolling_mean_std(&closes, self.period);

        let mut upper = vec![f64::NAN; len];
        let mut lower = vec![f64::NAN; len];
        let mut width = vec![f64::NAN; len];

        for i in 0..len {
            if middle[i].is_finite() {
                upper[i] = middle[i] + self.std_factor * std[i];
                lower[i] = middle[i] - self.std_factor * std[i];
                width[i] = upper[i] - lower[i];
            }
        }

        BollingerResult {
            upper,
            middle,
            lower,
            width,
        }
    }

    fn name(&self) -> &str {
        "BOLLINGER"
    }

    fn warmup_periods(&self) -> usize {
        self.period
    }

    fn output_names(&self) -> &'static [&'static str] {
        &["upper", "middle", "lower", "width"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_candle(close: f64) -> Candle {
        Candle {
            timestamp_ns: 0,
            open: close,
            high: close,
            low: close,
            close,
            volume: 0.0,
        }
    }

    #[test]
    fn test_bollinger_basic() {
        let candles: Vec<Candle> = vec![1.0, 2.0, 3.0, 4.0, 5.0]
            .into_iter()
            .map(make_candle)
            .collect();

        let bb = BollingerBands::new(3, 2.0);
        let result = bb.compute_all(&candles);

        assert!(result.middle[0].is_nan());
        assert!(result.middle[1].is_nan());

        // At index 2: window = [1, 2, 3], SMA = 2, std = sqrt(2/3)
        let expected_sma = 2.0;
        let expected_std = (2.0_f64 / 3.0).sqrt();

        assert!((result.middle[2] - expected_sma).abs() < 1e-10);
        assert!((result.upper[2] - (expected_sma + 2.0 * expected_std)).abs() < 1e-10);
        assert!((result.lower[2] - (expected_sma - 2.0 * expected_std)).abs() < 1e-10);
        assert!((result.width[2] - 4.0 * expected_std).abs() < 1e-10);
    }

    #[test]
    fn test_bollinger_constant_input() {
        let candles: Vec<Candle> = vec![100.0; 10].into_iter().map(make_candle).collect();

        let bb = BollingerBands::new(5, 2.0);
        let result = bb.compute_all(&candles);

        for i in 4..10 {
            assert!((result.middle[i] - 100.0).abs() < 1e-10);
            assert!((result.upper[i] - 100.0).abs() < 1e-10); // std = 0
            assert!((result.lower[i] - 100.0).abs() < 1e-10);
            assert!(result.width[i].abs() < 1e-10);
        }
    }

    #[test]
    fn test_bollinger_symmetry() {
        let candles: Vec<Candle> = vec![1.0, 2.0, 3.0, 4.0, 5.0, 4.0, 3.0, 2.0, 1.0, 2.0]
            .into_iter()
            .map(make_candle)
            .collect();

        let bb = BollingerBands::new(3, 2.0);
        let result = bb.compute_all(&candles);

        for i in 2..candles.len() {
            let mid = result.middle[i];
            let upper_dist = result.upper[i] - mid;
            let lower_dist = mid - result.lower[i];
            assert!(
                (upper_dist - lower_dist).abs() < 1e-10,
                "Bands not symmetric at index {}",
                i
            );
        }
    }

    #[test]
    fn test_bollinger_insufficient_data() {
        let candles: Vec<Candle> = vec![1.0, 2.0].into_iter().map(make_candle).collect();

        let bb = BollingerBands::standard();
        let result = bb.compute_all(&candles);

        assert!(result.upper.iter().all(|v| v.is_nan()));
        assert!(result.middle.iter().all(|v| v.is_nan()));
        assert!(result.lower.iter().all(|v| v.is_nan()));
    }
}
