//! Per-instrument KPI reports.

use serde::Serialize;

use crate::error::KpiError;
use crate::ratios::{self, calmar_ratio, max_drawdown, sharpe_ratio, sortino_ratio, volatility};
use ta_data::{cumulative_returns, simple_returns, CandleSource, DataError};
use ta_types::CandleSpan;

const DAY_NS: f64 = 86_400_000_000_000.0;

/// The full KPI set for one `(symbol, span)` pair.
///
/// Volatilities and ratios are annualized; `max_drawdown` is a fraction of
/// the running peak. `sortino` and `calmar` can be infinite when their risk
/// denominator is zero, which serializes as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct KpiReport {
    /// Instrument symbol.
    pub symbol: String,
    /// Candle span of the underlying series.
    pub span: CandleSpan,
    /// Risk-free rate the ratios were computed against.
    pub risk_free_rate: f64,
    /// Compound annual growth rate.
    pub cagr: f64,
    /// Annualized volatility of simple returns.
    pub annualized_volatility: f64,
    /// Annualized volatility of negative returns only.
    pub downside_volatility: f64,
    /// Sharpe ratio on the annualized figures.
    pub sharpe: f64,
    /// Sortino ratio on the annualized figures.
    pub sortino: f64,
    /// Maximum fractional drawdown of the cumulative-returns curve.
    pub max_drawdown: f64,
    /// CAGR over maximum drawdown.
    pub calmar: f64,
}

impl KpiReport {
    /// Computes the report from the instrument's candle series.
    ///
    /// Annualization uses the span's trading-period count; the CAGR horizon
    /// comes from the calendar distance between the first and last candle.
    ///
    /// # Errors
    /// - [`KpiError::Data`] when the fetch fails or fewer than two candles
    ///   are available.
    /// - CAGR errors when prices are non-positive or the series covers no
    ///   measurable time.
    pub fn for_instrument(
        source: &dyn CandleSource,
        symbol: &str,
        span: CandleSpan,
        risk_free_rate: f64,
    ) -> Result<Self, KpiError> {
        let candles = source.candles(symbol, span)?;
        let (first, last) = match (candles.first(), candles.last()) {
            (Some(first), Some(last)) if candles.len() >= 2 => (first, last),
            _ => return Err(KpiError::Data(DataError::EmptyData)),
        };

        let returns = simple_returns(&candles);
        let cumulative = cumulative_returns(&returns, 1.0);

        let days = (last.timestamp_ns - first.timestamp_ns) as f64 / DAY_NS;
        let years = span.trading_years(days);
        let cagr = ratios::cagr(first.close, last.close, years)?;

        let annualizer = span.periods_per_year().sqrt();
        let annualized_volatility = volatility(&returns, false) * annualizer;
        let downside_volatility = volatility(&returns, true) * annualizer;

        let max_dd = max_drawdown(&cumulative);

        Ok(Self {
            symbol: symbol.to_owned(),
            span,
            risk_free_rate,
            cagr,
            annualized_volatility,
            downside_volatility,
            sharpe: sharpe_ratio(cagr, risk_free_rate, annualized_volatility),
            sortino: sortino_ratio(cagr, risk_free_rate, downside_volatility),
            max_drawdown: max_dd,
            calmar: calmar_ratio(cagr, max_dd),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ta_data::CandleStore;
    use ta_types::Candle;

    fn daily_candles(closes: &[f64]) -> Vec<Candle> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| Candle {
                timestamp_ns: (i as i64 + 1) * 86_400_000_000_000,
                open: close,
                high: close + 1.0,
                low: (close - 1.0).max(0.1),
                close,
                volume: 1_000.0,
            })
            .collect()
    }

    fn store_with(symbol: &str, closes: &[f64]) -> CandleStore {
        let mut store = CandleStore::new();
        store
            .insert(symbol, CandleSpan::Daily, daily_candles(closes))
            .unwrap();
        store
    }

    #[test]
    fn test_report_for_rising_instrument() {
        // 253 closes one calendar day apart: 252 days, exactly one trading
        // year, price doubles.
        let closes: Vec<f64> = (0..253)
            .map(|i| 100.0 * 2.0f64.powf(i as f64 / 252.0))
            .collect();
        let store = store_with("UP", &closes);

        let report =
            KpiReport::for_instrument(&store, "UP", CandleSpan::Daily, 0.02).unwrap();

        assert!((report.cagr - 1.0).abs() < 1e-9);
        // Monotone rise: no drawdown, no downside volatility.
        assert_eq!(report.max_drawdown, 0.0);
        assert_eq!(report.downside_volatility, 0.0);
        assert!(report.sortino.is_infinite());
        assert!(report.calmar.is_infinite());
        assert!(report.sharpe > 0.0);
    }

    #[test]
    fn test_report_with_drawdown() {
        let mut closes: Vec<f64> = (0..200).map(|i| 100.0 + 0.5 * i as f64).collect();
        closes.extend((0..100).map(|i| 199.5 - 0.8 * i as f64));
        let store = store_with("CHOP", &closes);

        let report =
            KpiReport::for_instrument(&store, "CHOP", CandleSpan::Daily, 0.02).unwrap();

        assert!(report.max_drawdown > 0.0);
        assert!(report.calmar.is_finite());
        assert!(report.sortino.is_finite());
        assert!(report.downside_volatility > 0.0);
    }

    #[test]
    fn test_report_needs_two_candles() {
        let store = store_with("SHORT", &[100.0]);
        assert!(matches!(
            KpiReport::for_instrument(&store, "SHORT", CandleSpan::Daily, 0.0),
            Err(KpiError::Data(DataError::EmptyData))
        ));
    }

    #[test]
    fn test_report_unknown_symbol() {
        let store = CandleStore::new();
        assert!(matches!(
            KpiReport::for_instrument(&store, "NOPE", CandleSpan::Daily, 0.0),
            Err(KpiError::Data(_))
        ));
    }

    #[test]
    fn test_report_serializes() {
        let mut closes: Vec<f64> = (0..150).map(|i| 100.0 + 0.3 * i as f64).collect();
        closes.extend((0..50).map(|i| 144.7 - 0.4 * i as f64));
        let store = store_with("SER", &closes);

        let report =
            KpiReport::for_instrument(&store, "SER", CandleSpan::Daily, 0.01).unwrap();
        let json = serde_json::to_string(&report).unwrap();

        assert!(json.contains("\"symbol\":\"SER\""));
        assert!(json.contains("\"cagr\""));
    }
}
