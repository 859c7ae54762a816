//! Performance KPIs.
//!
//! Scalar calculators in [`ratios`] (CAGR, volatility, Sharpe, Sortino,
//! maximum drawdown, Calmar) and a per-instrument rollup in [`KpiReport`]
//! that fetches the candle series, derives returns and annualizes the
//! figures to the series' candle span.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]

mod error;
pub mod ratios;
mod report;

pub use error::KpiError;
pub use report::KpiReport;
