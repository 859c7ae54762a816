//! Renko brick synthesis.
//!
//! Turns an OHLC candle series into a series of fixed-size Renko bricks.
//! Bricks ignore time and volume and advance only when price moves a full
//! brick with the trend, or two full bricks against it. The brick size is
//! either given directly or derived from ATR through [`BrickSizeSpec`].
//!
//! [`RenkoSeries::build`] is the entry point; [`RenkoSynthesizer`] exposes
//! the bare state machine for callers that already hold candles.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]

mod brick_size;
mod error;
mod series;
mod synthesizer;

pub use brick_size::BrickSizeSpec;
pub use error::RenkoError;
pub use series::RenkoSeries;
pub use synthesizer::RenkoSynthesizer;
