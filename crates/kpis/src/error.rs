//! KPI error types.

use ta_data::DataError;
use thiserror::Error;

/// Errors raised while computing KPIs.
#[derive(Debug, Error)]
pub enum KpiError {
    /// CAGR is undefined for non-positive start or end prices.
    #[error("CAGR undefined for non-positive prices: start {start}, end {end}")]
    InvalidPrices {
        /// Price at the start of the window.
        start: f64,
        /// Price at the end of the window.
        end: f64,
    },

    /// CAGR is undefined over a non-positive number of years.
    #[error("CAGR undefined over {0} years")]
    NonPositiveYears(f64),

    /// Fetching candles through the source failed.
    #[error("data error: {0}")]
    Data(#[from] DataError),
}
