//! Scalar KPI calculators.
//!
//! These take plain slices and floats; the windowing and annualization
//! conventions live in [`crate::report`].

use crate::error::KpiError;

/// Compound annual growth rate over `years` years.
///
/// # Errors
/// - [`KpiError::InvalidPrices`] when either price is not strictly positive.
/// - [`KpiError::NonPositiveYears`] when `years <= 0`.
pub fn cagr(start_price: f64, end_price: f64, years: f64) -> Result<f64, KpiError> {
    if start_price <= 0.0 || end_price <= 0.0 {
        return Err(KpiError::InvalidPrices {
            start: start_price,
            end: end_price,
        });
    }
    if years <= 0.0 {
        return Err(KpiError::NonPositiveYears(years));
    }

    Ok((end_price / start_price).powf(1.0 / years) - 1.0)
}

/// Per-period volatility of a returns series as population standard
/// deviation.
///
/// With `downside` set, only negative returns enter the calculation; a
/// series without any negative return has zero downside volatility.
#[must_use]
pub fn volatility(returns: &[f64], downside: bool) -> f64 {
    let filtered: Vec<f64> = if downside {
        returns.iter().copied().filter(|r| *r < 0.0).collect()
    } else {
        returns.to_vec()
    };

    if filtered.is_empty() {
        return 0.0;
    }

    let n = filtered.len() as f64;
    let mean = filtered.iter().sum::<f64>() / n;
    let variance = filtered.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

/// Sharpe ratio. Zero when volatility is zero.
#[must_use]
pub fn sharpe_ratio(expected_return: f64, risk_free_rate: f64, volatility: f64) -> f64 {
    if volatility == 0.0 {
        0.0
    } else {
        (expected_return - risk_free_rate) / volatility
    }
}

/// Sortino ratio. Infinite when there is no downside volatility.
#[must_use]
pub fn sortino_ratio(expected_return: f64, risk_free_rate: f64, downside_volatility: f64) -> f64 {
    if downside_volatility == 0.0 {
        f64::INFINITY
    } else {
        (expected_return - risk_free_rate) / downside_volatility
    }
}

/// Maximum fractional drawdown of a cumulative-returns series: the largest
/// peak-to-trough decline relative to the running peak.
#[must_use]
pub fn max_drawdown(cumulative_returns: &[f64]) -> f64 {
    let mut peak = f64::NEG_INFINITY;
    let mut max_dd: f64 = 0.0;

    for &value in cumulative_returns {
        peak = peak.max(value);
        if peak > 0.0 {
            max_dd = max_dd.max((peak - value) / peak);
        }
    }

    max_dd
}

/// Calmar ratio. Infinite when the drawdown is zero.
#[must_use]
pub fn calmar_ratio(annual_return: f64, max_drawdown: f64) -> f64 {
    if max_drawdown == 0.0 {
        f64::INFINITY
    } else {
        annual_return / max_drawdown
    }
}
