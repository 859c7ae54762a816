//! Exponentially weighted mean kernels.
//!
//! Shared smoothing kernels for the indicator set: weights decay by
//! *position*, so NaN entries consume decay without
//! contributing an observation, and output stays NaN until `min_periods`
//! non-NaN observations have been seen.

/// Smoothing factor for a span-parameterized EWM: `alpha = 2 / (span + 1)`.
#[must_use]
pub fn alpha_from_span(span: usize) -> f64 {
    2.0 / (span as f64 + 1.0)
}

/// Adjusted (weighted-history) exponentially weighted mean.
///
/// Output at position `t` is `sum_i w_i * x_i / sum_i w_i` over all non-NaN
/// `x_i` with `i <= t`, where `w_i = (1 - alpha)^(t - i)`.
#[must_use]
pub fn ewm_mean_adjusted(values: &[f64], alpha: f64, min_periods: usize) -> Vec<f64> {
    let mut result = vec![f64::NAN; values.len()];
    if !(0.0..=1.0).contains(&alpha) || alpha == 0.0 {
        return result;
    }

    let decay = 1.0 - alpha;
    let mut num = 0.0_f64;
    let mut den = 0.0_f64;
    let mut observations = 0usize;

    for (i, &value) in values.iter().enumerate() {
        num *= decay;
        den *= decay;

        if value.is_finite() {
            num += value;
            den += 1.0;
            observations += 1;
        }

        if observations >= min_periods.max(1) && den > 0.0 {
            result[i] = num / den;
        }
    }

    result
}

/// Recursive (non-adjusted) exponentially weighted mean:
/// `y = alpha * x + (1 - alpha) * y`, seeded by the first non-NaN value.
///
/// NaN entries carry the previous smoothed value forward without counting
/// toward `min_periods`.
#[must_use]
pub fn ewm_mean_recursive(values: &[f64], alpha: f64, min_periods: usize) -> Vec<f64> {
    let mut result = vec![f64::NAN; values.len()];
    if !(0.0..=1.0).contains(&alpha) || alpha == 0.0 {
        return result;
    }

    let mut prev = f64::NAN;
    let mut observations = 0usize;

    for (i, &value) in values.iter().enumerate() {
        if value.is_finite() {
            if prev.is_finite() {
                prev = alpha * value + (1.0 - alpha) * prev;
            } else {
                prev = value;
            }
            observations += 1;
        }

        if observations >= min_periods.max(1) && prev.is_finite() {
            result[i] = prev;
        }
    }

    result
}
