//! TA Types
//!
//! Core data structures for the technical-analysis toolkit:
//! candles, Renko bricks and candle spans.

#![deny(clippy::all)]

pub mod brick;
pub mod candle;
pub mod candle_span;

// Re-export main types for convenience
pub use brick::Brick;
pub use candle::Candle;
pub use candle_span::{CandleSpan, ParseCandleSpanError};
