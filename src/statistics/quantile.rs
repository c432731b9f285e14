//! Quantile computation using Type 2 quantiles (inverse empirical CDF with
//! averaging at discontinuities).
//!
//! **Type 2 formula** (for sorted sample x of size n at probability p):
//! ```text
//! h = n * p + 0.5
//! q = (x[floor(h)] + x[ceil(h)]) / 2
//! ```
//!
//! # Reference
//!
//! Hyndman, R. J. & Fan, Y. (1996). "Sample quantiles in statistical
//! packages." The American Statistician 50(4):361-365.

use super::DrawSummary;

/// Compute the Type 2 quantile at probability `p` from pre-sorted data.
///
/// # Panics
///
/// Panics if `sorted` is empty or `p` lies outside [0, 1]. The caller must
/// ensure the data is sorted ascending; no verification is performed.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    assert!(!sorted.is_empty(), "cannot compute quantile of empty slice");
    assert!(
        (0.0..=1.0).contains(&p),
        "quantile probability must be in [0, 1]"
    );

    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    // Type 2 quantile: h = n * p + 0.5, 1-based indices.
    let h = n as f64 * p + 0.5;
    let floor_idx = (h.floor() as usize).saturating_sub(1).min(n - 1);
    let ceil_idx = (h.ceil() as usize).saturating_sub(1).min(n - 1);

    (sorted[floor_idx] + sorted[ceil_idx]) / 2.0
}

/// Posterior median of a set of draws.
pub fn median(draws: &[f64]) -> f64 {
    let mut sorted = draws.to_vec();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));
    quantile_sorted(&sorted, 0.5)
}

/// Equal-tailed credible interval at probability mass `level`.
pub fn credible_interval(draws: &[f64], level: f64) -> (f64, f64) {
    assert!(
        level > 0.0 && level < 1.0,
        "credible level must be in (0, 1)"
    );

    let mut sorted = draws.to_vec();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));

    let tail = (1.0 - level) / 2.0;
    (
        quantile_sorted(&sorted, tail),
        quantile_sorted(&sorted, 1.0 - tail),
    )
}

/// Median plus equal-tailed credible interval, sorting once.
pub fn summarize_draws(draws: &[f64], level: f64) -> DrawSummary {
    assert!(
        level > 0.0 && level < 1.0,
        "credible level must be in (0, 1)"
    );

    let mut sorted = draws.to_vec();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));

    let tail = (1.0 - level) / 2.0;
    DrawSummary {
        lower: quantile_sorted(&sorted, tail),
        median: quantile_sorted(&sorted, 0.5),
        upper: quantile_sorted(&sorted, 1.0 - tail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_odd_count() {
        // Type 2: h = 5 * 0.5 + 0.5 = 3.0, both indices point at x[2].
        assert!((median(&[1.0, 2.0, 3.0, 4.0, 5.0]) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_median_even_count() {
        // h = 4 * 0.5 + 0.5 = 2.5, average of x[1] and x[2].
        assert!((median(&[1.0, 2.0, 3.0, 4.0]) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_median_unsorted_input() {
        assert!((median(&[5.0, 1.0, 3.0, 2.0, 4.0]) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_quantile_extremes_clamped() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert!((quantile_sorted(&sorted, 0.0) - 1.0).abs() < 1e-12);
        assert!((quantile_sorted(&sorted, 1.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_credible_interval_bounds_ordered() {
        let draws: Vec<f64> = (0..1000).map(|i| i as f64 / 100.0).collect();
        let (lo, hi) = credible_interval(&draws, 0.95);
        assert!(lo < hi);
        // 2.5% and 97.5% of a uniform grid on [0, 10).
        assert!((lo - 0.25).abs() < 0.05, "lower was {}", lo);
        assert!((hi - 9.74).abs() < 0.05, "upper was {}", hi);
    }

    #[test]
    fn test_summarize_matches_separate_calls() {
        let draws: Vec<f64> = (0..200).map(|i| ((i * 37) % 101) as f64).collect();
        let summary = summarize_draws(&draws, 0.9);
        let (lo, hi) = credible_interval(&draws, 0.9);
        assert_eq!(summary.lower, lo);
        assert_eq!(summary.upper, hi);
        assert_eq!(summary.median, median(&draws));
    }

    #[test]
    fn test_single_draw() {
        let summary = summarize_draws(&[0.42], 0.95);
        assert_eq!(summary.lower, 0.42);
        assert_eq!(summary.median, 0.42);
        assert_eq!(summary.upper, 0.42);
    }

    #[test]
    #[should_panic(expected = "empty slice")]
    fn test_empty_slice_panics() {
        quantile_sorted(&[], 0.5);
    }
}
