//! Output schema: long-form draw tables and classified summaries.
//!
//! These types carry everything the downstream exporter needs (serialized
//! keyed collections for figures, flat delimited summaries for publication)
//! without recomputation. Column naming and file layout stay caller
//! concerns.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::classify::{CoarseLabel, FineLabel};
use crate::error::TrendError;

/// One row of the long-form table: a single posterior draw for a single
/// category or category pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawRecord {
    /// Level of factor A.
    pub level_a: String,
    /// Level of factor B, for pair combinations.
    pub level_b: Option<String>,
    /// Index of the posterior sample (order carries no meaning).
    pub draw: usize,
    /// Change index on the log scale.
    pub log_change: f64,
    /// Proportional change, `exp(log_change) - 1`.
    pub prop_change: f64,
    /// Supporting species count for this cell.
    pub n_species: u64,
}

/// One row of the summary table: a classified reduction over all draws of
/// one category or category pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    /// Level of factor A.
    pub level_a: String,
    /// Level of factor B, for pair combinations.
    pub level_b: Option<String>,
    /// Posterior median of the proportional change.
    pub median: f64,
    /// Lower credible-interval bound (proportional scale).
    pub lower: f64,
    /// Upper credible-interval bound (proportional scale).
    pub upper: f64,
    /// Fine 8-level trend label.
    pub fine: FineLabel,
    /// Coarse 4-level trend label.
    pub coarse: CoarseLabel,
    /// Whether the posterior supports a definite direction or stability.
    pub certain: bool,
    /// Supporting species count for this cell.
    pub n_species: u64,
}

/// Self-contained result for one trait combination.
#[derive(Debug, Clone, Serialize)]
pub struct TraitResult {
    /// Trait-combination identifier ("A" or "A:B").
    pub key: String,
    /// Credible level the interval bounds were computed at.
    pub credible_level: f64,
    /// Summary table, in display order, small cells removed.
    pub summary: Vec<SummaryRow>,
    /// Long-form draw table, small cells removed.
    pub draws: Vec<DrawRecord>,
}

/// Results of a batch run over many trait combinations.
///
/// Each combination's pipeline run is independent; failures are collected
/// alongside successes instead of aborting the batch.
#[derive(Debug, Clone, Default)]
pub struct AnalysisReport {
    /// Successful results, keyed by combination identifier.
    pub results: BTreeMap<String, TraitResult>,
    /// Failed combinations and the error each one surfaced.
    pub failures: BTreeMap<String, TrendError>,
}

impl AnalysisReport {
    /// True when every combination transformed successfully.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
