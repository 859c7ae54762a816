//! Rolling-window kernels shared by the windowed indicators.

/// Rolling arithmetic mean over `window` values, via a running sum.
///
/// Output is NaN until the window fills; the first finite value lands at
/// index `window - 1`.
#[must_use]
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    let len = values.len();
    let mut result = vec![f64::NAN; len];
    if window == 0 || len < window {
        return result;
    }

    let mut sum: f64 = values[..window].iter().sum();
    result[window - 1] = sum / window as f64;

    for i in window..len {
        sum += values[i] - values[i - window];
        result[i] = sum / window as f64;
    }

    result
}

/// Rolling mean and population standard deviation computed together.
///
/// Each window's variance is taken against that window's own mean, not a
/// running sum of squares.
#[must_use]
pub fn rolling_mean_std(values: &[f64], window: usize) -> (Vec<f64>, Vec<f64>) {
    let len = values.len();
    let mean = rolling_mean(values, window);
    let mut std = vec![f64::NAN; len];
    if window == 0 || len < window {
        return (mean, std);
    }

    for i in (window - 1)..len {
        let start = i + 1 - window;
        let m = mean[i];
        let variance =
            values[start..=i].iter().map(|x| (x - m).powi(2)).sum::<f64>() / window as f64;
        std[i] = variance.sqrt();
    }

    (mean, std)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rolling_mean_basic() {
        let out = rolling_mean(&[1.0, 2.0, 3.0, 4.0, 5.0], 3);

        assert!(out[0].is_nan());
        assert!(out[1].is_nan());
        assert!((out[2] - 2.0).abs() < 1e-10);
        assert!((out[3] - 3.0).abs() < 1e-10);
        assert!((out[4] - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_rolling_mean_window_larger_than_input() {
        let out = rolling_mean(&[1.0, 2.0], 5);
        assert!(out.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_rolling_mean_window_zero() {
        let out = rolling_mean(&[1.0, 2.0], 0);
        assert!(out.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_rolling_mean_std_population() {
        let (mean, std) = rolling_mean_std(&[1.0, 2.0, 3.0], 3);

        assert!((mean[2] - 2.0).abs() < 1e-10);
        // Population std of [1, 2, 3] is sqrt(2/3).
        assert!((std[2] - (2.0_f64 / 3.0).sqrt()).abs() < 1e-10);
    }

    #[test]
    fn test_rolling_mean_std_constant_input() {
        let (mean, std) = rolling_mean_std(&[7.0; 6], 4);

        for i in 3..6 {
            assert!((mean[i] - 7.0).abs() < 1e-10);
            assert!(std[i].abs() < 1e-10);
        }
    }
}
