//! Error taxonomy for the trend-index core.
//!
//! Everything here is a synchronous, caller-facing failure. There is no
//! retry or partial-failure concept: a trait combination either transforms
//! successfully or fails atomically, and one combination's failure never
//! blocks the others (see `pipeline::analyze_all`).

use thiserror::Error;

/// Fatal errors surfaced by the transformation pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrendError {
    /// The draw matrix's column count does not match the contrast matrix.
    ///
    /// Proceeding would silently produce plausible-looking but wrong
    /// numbers, so this is always fatal.
    #[error("draw matrix has {actual} coefficient columns but the contrast expects {expected}")]
    DimensionMismatch {
        /// Columns the contrast matrix was built for.
        expected: usize,
        /// Columns actually present in the draw matrix.
        actual: usize,
    },

    /// The supplied per-cell species counts do not cover every cell.
    #[error("{actual} species counts supplied for {expected} cells")]
    CountMismatch {
        /// Number of cells in the trait combination.
        expected: usize,
        /// Number of counts supplied.
        actual: usize,
    },

    /// The posterior draw matrix has no retained samples.
    #[error("posterior draw matrix for '{key}' has no rows")]
    EmptyDraws {
        /// Trait-combination identifier.
        key: String,
    },

    /// A factor was supplied with no category levels at all.
    #[error("factor '{name}' has no category levels")]
    EmptyFactor {
        /// Factor name.
        name: String,
    },

    /// The analysis configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
