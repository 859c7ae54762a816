//! TA Indicators
//!
//! Technical indicator engine for the technical-analysis toolkit.
//! All indicators run over any OHLC sequence, including Renko brick series
//! re-exposed as candles.
//!
//! # Features
//! - Indicator trait with vectorized computation
//! - Multi-output indicators (MACD, Bollinger Bands)
//! - Shared exponentially-weighted-mean and rolling-window kernels
//!
//! # Available Indicators
//! - SMA: Simple Moving Average
//! - EMA: Exponential Moving Average
//! - ATR: Average True Range (span-EWM smoothing)
//! - MACD: macd / signal / histogram
//! - RSI: Relative Strength Index
//! - Bollinger Bands: upper, middle, lower, width
//! - ADX: Average Directional Index

pub mod error;
pub mod ewm;
pub mod impl_;
pub mod rolling;
pub mod traits;

// Re-export main types
pub use error::IndicatorError;
pub use traits::{Indicator, IntoMultiVecs, MultiOutputIndicator};

// Re-export indicator implementations
pub use impl_::{
    adx::ADX,
    atr::ATR,
    bollinger::{BollingerBands, BollingerResult},
    ema::EMA,
    macd::{Macd, MacdResult},
    rsi::RSI,
    sma::SMA,
};
