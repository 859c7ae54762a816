//! Renko brick data model.

/// One Renko brick: a fixed amount of price movement, irrespective of time.
///
/// `timestamp_ns` is the open time of the candle that produced the brick, so
/// brick time is irregular: several bricks may share one timestamp and long
/// stretches of candles may produce none.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Brick {
    /// Unix epoch nanoseconds UTC of the producing candle
    pub timestamp_ns: i64,
    /// Open price of the brick body
    pub open: f64,
    /// High watermark (clamped candle high for down bricks, body top otherwise)
    pub high: f64,
    /// Low watermark (clamped candle low for up bricks, body bottom otherwise)
    pub low: f64,
    /// Close price of the brick body
    pub close: f64,
    /// True for an up brick (`close == open + brick_size`)
    pub uptrend: bool,
}

impl Brick {
    /// Absolute body height; equals the brick size for every emitted brick.
    #[must_use]
    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }
}
