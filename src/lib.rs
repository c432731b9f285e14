//! # msci
//!
//! Multi-species change indices for two-period abundance trends.
//!
//! This crate turns fitted Bayesian regression output into interpretable
//! trend indices for moth species trait groups. The fitting engine reports
//! period effects on a log scale with treatment coding: every coefficient
//! is a deviation from an arbitrarily chosen reference category. The work
//! done here is the contrast-matrix construction and posterior-draw
//! transformation that converts those relative coefficients into absolute
//! per-category (and per-category-pair) change indices, classifies the
//! resulting credible intervals into qualitative trend labels, and produces
//! the draw and summary tables consumed by downstream reporting.
//!
//! ## Pipeline
//!
//! ```text
//! (levels, draw matrix, counts)
//!     -> contrast matrix        (contrast::build_contrast /
//!                                contrast::build_interaction_contrast)
//!     -> change-index draws     (transform::transform, log + proportional)
//!     -> summaries + labels     (statistics, classify)
//!     -> ordering + filtering   (ordering)
//!     -> TraitResult            (keyed per combination)
//! ```
//!
//! ## Column-ordering invariant
//!
//! The single most bug-prone point in this system is silent misalignment
//! between draw-matrix columns and factor levels: a transposed or shifted
//! contrast produces plausible-looking but wrong numbers with no crash.
//! The expected column conventions are documented on the contrast builders,
//! [`TraitCombination::cell_labels`] exposes the canonical cell order, and
//! the transform step fails loudly on any column-count mismatch.
//!
//! ## Quick start
//!
//! ```
//! use msci::{analyze_combination, Config, Factor, TraitCombination, TraitInput};
//! use nalgebra::DMatrix;
//!
//! // Three diet categories; "Polyphagous" is the reference. Two
//! // treatment-coded coefficient columns, one row per posterior sample.
//! let input = TraitInput {
//!     combination: TraitCombination::single(Factor::new(
//!         "Diet",
//!         vec!["Polyphagous".into(), "Monophagous".into(), "Oligophagous".into()],
//!     )),
//!     draws: DMatrix::from_fn(400, 2, |_, c| if c == 0 { -0.25 } else { 0.05 }),
//!     counts: vec![310, 42, 95],
//! };
//!
//! let result = analyze_combination(&input, &Config::default()).unwrap();
//! assert_eq!(result.summary.len(), 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod error;
mod result;
mod types;

pub mod classify;
pub mod contrast;
pub mod ordering;
pub mod output;
pub mod pipeline;
pub mod statistics;
pub mod transform;

pub use classify::{classify, coarsen, CoarseLabel, FineLabel, Thresholds};
pub use config::Config;
pub use contrast::{build_contrast, build_interaction_contrast};
pub use error::TrendError;
pub use pipeline::{analyze_all, analyze_combination, TraitInput};
pub use result::{AnalysisReport, DrawRecord, SummaryRow, TraitResult};
pub use statistics::DrawSummary;
pub use transform::transform;
pub use types::{Factor, TraitCombination};
