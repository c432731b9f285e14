//! Posterior summary statistics.

mod quantile;

pub use quantile::{credible_interval, median, quantile_sorted, summarize_draws};

/// Point estimate and credible-interval bounds for one category's draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawSummary {
    /// Lower bound of the credible interval.
    pub lower: f64,
    /// Posterior median.
    pub median: f64,
    /// Upper bound of the credible interval.
    pub upper: f64,
}
