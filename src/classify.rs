//! Qualitative trend classification from credible-interval bounds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Asymmetric thresholds delimiting the ecologically negligible band.
///
/// `decline` is negative, `increase` positive, both on the same scale as
/// the interval bounds they are compared against (proportional change by
/// default, e.g. -0.20 / +0.25).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Lower (negative) threshold.
    pub decline: f64,
    /// Upper (positive) threshold.
    pub increase: f64,
}

impl Thresholds {
    /// Create a threshold pair.
    ///
    /// # Panics
    ///
    /// Panics unless `decline < 0 < increase`.
    pub fn new(decline: f64, increase: f64) -> Self {
        assert!(decline < 0.0, "decline threshold must be negative");
        assert!(increase > 0.0, "increase threshold must be positive");
        Self { decline, increase }
    }
}

/// Fine-grained trend label for one category's change index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FineLabel {
    /// The whole interval lies above the increase threshold.
    StrongIncrease,
    /// The interval lies above zero, its lower bound within the band.
    Increase,
    /// Interval above zero and entirely within the negligible band.
    ModerateIncrease,
    /// Interval below zero and entirely within the negligible band.
    ModerateDecrease,
    /// Interval spans zero and stays inside the negligible band.
    Stable,
    /// The whole interval lies below the decline threshold.
    StrongDecrease,
    /// The interval lies below zero, its upper bound within the band.
    Decrease,
    /// Interval too wide to support any of the above.
    Uncertain,
}

/// Coarsened 4-level trend label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoarseLabel {
    /// Any of the increase labels.
    Increase,
    /// Within the negligible band, spanning zero.
    Stable,
    /// Any of the decrease labels.
    Decrease,
    /// No direction supported.
    Uncertain,
}

/// Classify a credible interval against the thresholds.
///
/// The rules are checked in a fixed order and the first match wins;
/// boundary values satisfy the inclusive comparison of whichever rule is
/// reached first. Do not reorder: the reachable label set depends on it.
/// Any interval matching no explicit rule falls back to
/// [`FineLabel::Uncertain`] by design, never an error.
pub fn classify(lower: f64, upper: f64, thresholds: Thresholds) -> FineLabel {
    let min_t = thresholds.decline;
    let max_t = thresholds.increase;

    if lower > max_t {
        FineLabel::StrongIncrease
    } else if lower > 0.0 && lower <= max_t {
        FineLabel::Increase
    } else if lower > 0.0 && upper <= max_t {
        FineLabel::ModerateIncrease
    } else if upper < 0.0 && lower >= min_t {
        FineLabel::ModerateDecrease
    } else if lower >= min_t && upper <= max_t && lower <= 0.0 && upper >= 0.0 {
        FineLabel::Stable
    } else if upper < min_t {
        FineLabel::StrongDecrease
    } else if upper < 0.0 && upper >= min_t {
        FineLabel::Decrease
    } else {
        FineLabel::Uncertain
    }
}

/// Coarsen a fine label to the 4-level scheme.
///
/// Total: every fine label maps to exactly one coarse label.
pub fn coarsen(fine: FineLabel) -> CoarseLabel {
    match fine {
        FineLabel::StrongIncrease | FineLabel::Increase | FineLabel::ModerateIncrease => {
            CoarseLabel::Increase
        }
        FineLabel::StrongDecrease | FineLabel::Decrease | FineLabel::ModerateDecrease => {
            CoarseLabel::Decrease
        }
        FineLabel::Stable => CoarseLabel::Stable,
        FineLabel::Uncertain => CoarseLabel::Uncertain,
    }
}

impl FineLabel {
    /// Whether the posterior supports a definite direction or stability.
    pub fn is_certain(self) -> bool {
        self != FineLabel::Uncertain
    }

    /// All eight labels, in decreasing-trend order.
    pub const ALL: [FineLabel; 8] = [
        FineLabel::StrongIncrease,
        FineLabel::Increase,
        FineLabel::ModerateIncrease,
        FineLabel::Stable,
        FineLabel::ModerateDecrease,
        FineLabel::Decrease,
        FineLabel::StrongDecrease,
        FineLabel::Uncertain,
    ];
}

impl fmt::Display for FineLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FineLabel::StrongIncrease => "strong increase",
            FineLabel::Increase => "increase",
            FineLabel::ModerateIncrease => "moderate increase",
            FineLabel::ModerateDecrease => "moderate decrease",
            FineLabel::Stable => "stable",
            FineLabel::StrongDecrease => "strong decrease",
            FineLabel::Decrease => "decrease",
            FineLabel::Uncertain => "uncertain",
        };
        f.write_str(s)
    }
}

impl fmt::Display for CoarseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CoarseLabel::Increase => "increase",
            CoarseLabel::Stable => "stable",
            CoarseLabel::Decrease => "decrease",
            CoarseLabel::Uncertain => "uncertain",
        };
        f.write_str(s)
    }
}
