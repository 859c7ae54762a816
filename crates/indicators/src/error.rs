//! Indicator error types.

use thiserror::Error;

/// Errors that can occur when configuring or computing indicators.
#[derive(Debug, Error)]
pub enum IndicatorError {
    /// Invalid parameters for the indicator
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// Insufficient data for computation
    #[error("insufficient data: need {required} candles, got {actual}")]
    InsufficientData {
        /// Required number of candles.
        required: usize,
        /// Actual number of candles provided.
        actual: usize,
    },

    /// Computation error (e.g., division by zero, invalid state)
    #[error("computation error: {0}")]
    ComputationError(String),
}

impl IndicatorError {
    /// Creates an `InvalidParams` error with a message.
    #[must_use]
    pub fn invalid_params(msg: impl Into<String>) -> Self {
        IndicatorError::InvalidParams(msg.into())
    }
}
