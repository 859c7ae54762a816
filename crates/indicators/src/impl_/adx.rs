//! Average Directional Index (ADX) indicator

use crate::ewm::ewm_mean_adjusted;
use crate::impl_::atr::ATR;
use crate::traits::Indicator;
use ta_types::Candle;

/// Average Directional Index
///
/// Directional movement is taken from consecutive high/low deltas:
/// `+DM = max(high - prev_high, 0)` when it exceeds the down move, `-DM`
/// symmetric. DI+/DI- normalize smoothed DM by ATR, DX is their relative
/// spread and ADX smooths DX. All smoothing uses the adjusted EWM at
/// `alpha = 1 / period`.
#[derive(Debug, Clone)]
pub struct ADX {
    /// Number of periods for DM/DX smoothing and the underlying ATR
    pub period: usize,
}

impl ADX {
    /// Creates a new ADX indicator with the given period.
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for ADX {
    fn compute(&self, candles: &[Candle]) -> Vec<f64> {
        let len = candles.len();
        if self.period == 0 || len == 0 {
            return vec![f64::NAN; len];
        }

        let atr = ATR::new(self.period).compute(candles);

        let mut dm_up = vec![0.0_f64; len];
        let mut dm_down = vec![0.0_f64; len];
        for i in 1..len {
            let hh = candles[i].high - candles[i - 1].high;
            let ll = candles[i - 1].low - candles[i].low;
            if hh > ll {
                dm_up[i] = hh.max(0.0);
            } else if ll > hh {
                dm_down[i] = ll.max(0.0);
            }
        }

        let alpha = 1.0 / self.period as f64;
        let smooth_up = ewm_mean_adjusted(&dm_up, alpha, self.period);
        let smooth_down = ewm_mean_adjusted(&dm_down, alpha, self.period);

        let mut dx = vec![f64::NAN; len];
        for i in 0..len {
            if !atr[i].is_finite() || atr[i] == 0.0 {
                continue;
            }
            let di_up = 100.0 / atr[i] * smooth_up[i];
            let di_down = 100.0 / atr[i] * smooth_down[i];
            let di_sum = di_up + di_down;
            if di_up.is_finite() && di_down.is_finite() && di_sum != 0.0 {
                dx[i] = ((di_up - di_down) / di_sum).abs();
            }
        }

        let adx = ewm_mean_adjusted(&dx, alpha, self.period);
        adx.into_iter().map(|v| 100.0 * v).collect()
    }

    fn name(&self) -> &str {
        "ADX"
    }

    fn warmup_periods(&self) -> usize {
        // ATR warmup plus another period of finite DX values
        2 * self.period + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_candle(open: f64, high: f64, low: f64, close: f64) -> Candle {
        Candle {
            timestamp_ns: 0,
            open,
            high,
            low,
            close,
            volume: 0.0,
        }
    }

    fn trending_up(n: usize) -> Vec<Candle> {
        (0..n)
            .map(|i| {
                let base = 100.0 + 2.0 * i as f64;
                make_candle(base, base + 1.5, base - 1.0, base + 1.0)
            })
            .collect()
    }

    #[test]
    fn test_adx_strong_trend_is_high() {
        let candles = trending_up(40);

        let adx = ADX::new(5);
        let result = adx.compute(&candles);

        // A one-way trend has DX = 1 everywhere, so ADX approaches 100.
        let last = result[39];
        assert!(last.is_finite());
        assert!(last > 90.0, "adx = {last}");
    }

    #[test]
    fn test_adx_bounded() {
        let closes = [
            10.0, 10.5, 10.2, 11.0, 10.8, 11.5, 11.2, 12.0, 11.0, 11.8, 12.5, 12.0, 13.0, 12.2,
            13.5, 13.0, 14.0, 13.2, 14.5, 14.0,
        ];
        let candles: Vec<Candle> = closes
            .iter()
            .map(|&c| make_candle(c, c + 0.5, c - 0.5, c))
            .collect();

        let adx = ADX::new(4);
        let result = adx.compute(&candles);

        for value in result.iter().filter(|v| v.is_finite()) {
            assert!((0.0..=100.0).contains(value), "adx = {value}");
        }
        assert!(result[19].is_finite());
    }

    #[test]
    fn test_adx_warmup_is_nan() {
        let candles = trending_up(40);

        let adx = ADX::new(5);
        let result = adx.compute(&candles);

        // ATR is NaN through index 4, DX starts at 5 and ADX needs
        // 5 finite DX values, so index 9 is the first finite one.
        for i in 0..9 {
            assert!(result[i].is_nan(), "adx[{i}] should be NaN");
        }
    }
}
