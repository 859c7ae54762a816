//! The Renko brick-synthesis state machine.
//!
//! Candles are consumed strictly in chronological order; each candle's
//! emission depends on the trend state left by the previous one, so there is
//! no parallelism across candles. The machine carries three pieces of state:
//! the previous brick's open, its close, and the trend direction.

use crate::error::RenkoError;
use ta_types::{Brick, Candle};

/// Trend state threaded through the candle fold.
#[derive(Debug, Clone, Copy)]
struct TrendState {
    prev_open: f64,
    prev_close: f64,
    uptrend: bool,
}

impl TrendState {
    fn from_brick(brick: &Brick) -> Self {
        Self {
            prev_open: brick.open,
            prev_close: brick.close,
            uptrend: brick.uptrend,
        }
    }
}

/// Renko synthesizer for a fixed brick size.
#[derive(Debug, Clone)]
pub struct RenkoSynthesizer {
    brick_size: f64,
}

impl RenkoSynthesizer {
    /// Creates a synthesizer.
    ///
    /// # Errors
    /// [`RenkoError::InvalidBrickSize`] when `brick_size` is 0; the brick
    /// count per candle divides by the brick size, so a zero size would be
    /// degenerate.
    pub fn new(brick_size: u32) -> Result<Self, RenkoError> {
        if brick_size == 0 {
            return Err(RenkoError::InvalidBrickSize(0));
        }
        Ok(Self {
            brick_size: f64::from(brick_size),
        })
    }

    /// Runs the state machine over the full candle sequence.
    ///
    /// The first candle only seeds the series; every later candle emits zero
    /// or more bricks. The same input always produces the same output.
    ///
    /// # Errors
    /// [`RenkoError::EmptyCandles`] when there is no candle to seed from.
    pub fn synthesize(&self, candles: &[Candle]) -> Result<Vec<Brick>, RenkoError> {
        let first = candles.first().ok_or(RenkoError::EmptyCandles)?;

        let seed = self.seed_brick(first);
        let mut state = TrendState::from_brick(&seed);
        let mut bricks = vec![seed];

        for candle in &candles[1..] {
            let emitted = self.next_bricks(candle, state);
            if let Some(last) = emitted.last() {
                state = TrendState::from_brick(last);
            }
            bricks.extend(emitted);
        }

        Ok(bricks)
    }

    /// Synthetic initial brick derived from the first candle.
    ///
    /// The close snaps down to the brick grid and the brick is always marked
    /// as an uptrend, regardless of the candle's actual direction — the seed
    /// is an anchor, not a signal.
    fn seed_brick(&self, first: &Candle) -> Brick {
        let close = (first.close / self.brick_size).floor() * self.brick_size;
        let open = close - self.brick_size;

        Brick {
            timestamp_ns: first.timestamp_ns,
            open,
            high: close,
            low: first.low.min(open),
            close,
            uptrend: true,
        }
    }

    /// Signed whole-brick distance between a candle close and the previous
    /// brick close. Truncates toward zero: a move of -1.9 bricks counts as
    /// -1, not -2, which shifts reversal thresholds relative to floored
    /// division and must stay this way.
    fn signed_brick_count(&self, candle_close: f64, prev_brick_close: f64) -> i64 {
        ((candle_close - prev_brick_close) / self.brick_size).trunc() as i64
    }

    /// Applies the one transition rule matching `(uptrend, signed_bricks)`.
    fn next_bricks(&self, candle: &Candle, state: TrendState) -> Vec<Brick> {
        let signed = self.signed_brick_count(candle.close, state.prev_close);

        if state.uptrend && signed >= 1 {
            self.continue_uptrend(candle, state, signed.unsigned_abs())
        } else if state.uptrend && signed <= -2 {
            // First brick-equivalent is spent confirming the reversal.
            self.reverse_to_downtrend(candle, state, (signed + 1).unsigned_abs())
        } else if !state.uptrend && signed <= -1 {
            self.continue_downtrend(candle, state, signed.unsigned_abs())
        } else if !state.uptrend && signed >= 2 {
            self.reverse_to_uptrend(candle, state, (signed - 1).unsigned_abs())
        } else {
            // Includes a single-unit move against the trend: not enough for
            // the double-brick reversal rule, so no brick at all.
            Vec::new()
        }
    }

    fn continue_uptrend(&self, candle: &Candle, state: TrendState, count: u64) -> Vec<Brick> {
        let mut prev_open = state.prev_open;
        let mut prev_close = state.prev_close;
        let mut bricks = Vec::with_capacity(count as usize);

        for _ in 0..count {
            let close = prev_close + self.brick_size;
            let low = candle.low.max(prev_open - self.brick_size).min(prev_close);

            bricks.push(Brick {
                timestamp_ns: candle.timestamp_ns,
                open: prev_close,
                high: close,
                low,
                close,
                uptrend: true,
            });

            prev_close += self.brick_size;
            prev_open += self.brick_size;
        }

        bricks
    }

    fn reverse_to_downtrend(&self, candle: &Candle, state: TrendState, count: u64) -> Vec<Brick> {
        let mut prev_open = state.prev_open;
        let mut prev_close = state.prev_close;
        let mut bricks = Vec::with_capacity(count as usize);

        for _ in 0..count {
            let high = candle.high.min(prev_close + self.brick_size).max(prev_open);
            let close = prev_open - self.brick_size;

            // The reversal brick opens at the previous OPEN, leaving the
            // one-brick confirmation gap in the chain.
            bricks.push(Brick {
                timestamp_ns: candle.timestamp_ns,
                open: prev_open,
                high,
                low: close,
                close,
                uptrend: false,
            });

            prev_close -= self.brick_size;
            prev_open -= self.brick_size;
        }

        bricks
    }

    fn continue_downtrend(&self, candle: &Candle, state: TrendState, count: u64) -> Vec<Brick> {
        let mut prev_open = state.prev_open;
        let mut prev_close = state.prev_close;
        let mut bricks = Vec::with_capacity(count as usize);

        for _ in 0..count {
            let high = candle.high.min(prev_open + self.brick_size).max(prev_close);
            let close = prev_close - self.brick_size;

            bricks.push(Brick {
                timestamp_ns: candle.timestamp_ns,
                open: prev_close,
                high,
                low: close,
                close,
                uptrend: false,
            });

            prev_close -= self.brick_size;
            prev_open -= self.brick_size;
        }

        bricks
    }

    fn reverse_to_uptrend(&self, candle: &Candle, state: TrendState, count: u64) -> Vec<Brick> {
        let mut prev_open = state.prev_open;
        let mut prev_close = state.prev_close;
        let mut bricks = Vec::with_capacity(count as usize);

        for _ in 0..count {
            let close = prev_open + self.brick_size;
            let low = candle.low.max(prev_close - self.brick_size).min(prev_open);

            bricks.push(Brick {
                timestamp_ns: candle.timestamp_ns,
                open: prev_open,
                high: close,
                low,
                close,
                uptrend: true,
            });

            prev_close += self.brick_size;
            prev_open += self.brick_size;
        }

        bricks
    }
}
