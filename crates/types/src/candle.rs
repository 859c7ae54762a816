/// One OHLCV observation for a fixed candle span.
/// `timestamp_ns` is the open time of the span, UTC epoch nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Candle {
    /// Unix epoch nanoseconds UTC (open time)
    pub timestamp_ns: i64,
    /// Open price
    pub open: f64,
    /// High price
    pub high: f64,
    /// Low price
    pub low: f64,
    /// Close price
    pub close: f64,
    /// Volume
    pub volume: f64,
}

impl Candle {
    /// Returns true when all OHLCV fields are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.open.is_finite()
            && self.high.is_finite()
            && self.low.is_finite()
            && self.close.is_finite()
            && self.volume.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candle_serde_roundtrip() {
        let candle = Candle {
            timestamp_ns: 1_234_567_890_000_000_000,
            open: 101.5,
            high: 104.0,
            low: 99.25,
            close: 103.75,
            volume: 250_000.0,
        };

        let json = serde_json::to_string(&candle).unwrap();
        let deserialized: Candle = serde_json::from_str(&json).unwrap();

        assert_eq!(candle, deserialized);
    }

    #[test]
    fn test_candle_is_finite() {
        let mut candle = Candle {
            timestamp_ns: 0,
            open: 100.0,
            high: 101.0,
            low: 99.0,
            close: 100.5,
            volume: 1.0,
        };
        assert!(candle.is_finite());

        candle.low = f64::NAN;
        assert!(!candle.is_finite());
    }
}
