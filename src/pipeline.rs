//! Per-combination analysis pipeline and batch orchestration.
//!
//! Each trait combination runs as an independent, stateless pipeline:
//! validate dimensions, build the contrast, transform the posterior draws on
//! both scales, summarize and classify each cell, order for display, and
//! drop sparsely supported cells. `analyze_all` fans the combinations out
//! across worker threads and collects self-contained results into a keyed
//! map; there is no shared mutable state between combinations, so one
//! failure never corrupts or blocks the rest.


use nalgebra::DMatrix;
use rayon::prelude::*;
use tracing::debug;

use crate::classify::{classify, coarsen, Thresholds};
use crate::config::Config;
use crate::contrast::{build_contrast, build_interaction_contrast};
use crate::error::TrendError;
use crate::ordering::{filter_small_cells, sort_summary};
use crate::result::{AnalysisReport, DrawRecord, SummaryRow, TraitResult};
use crate::statistics::summarize_draws;
use crate::transform::transform;
use crate::types::TraitCombination;

/// Immutable inputs for one trait combination, as produced by the external
/// model-fitting step.
#[derive(Debug, Clone)]
pub struct TraitInput {
    /// The factor or factor pair this draw matrix belongs to.
    pub combination: TraitCombination,
    /// Posterior draw matrix: rows are retained MCMC samples, columns are
    /// the treatment-coded period-effect coefficients in the column order
    /// documented on the contrast builders.
    pub draws: DMatrix<f64>,
    /// Supporting species count per cell, aligned with
    /// [`TraitCombination::cell_labels`] order.
    pub counts: Vec<u64>,
}

/// Run the full pipeline for a single trait combination.
///
/// # Errors
///
/// Returns a [`TrendError`] when the inputs are inconsistent: an empty
/// factor, an empty draw matrix, a count vector not covering every cell, a
/// draw matrix whose column count does not match the contrast built from
/// the factor cardinalities, or an invalid configuration.
pub fn analyze_combination(
    input: &TraitInput,
    config: &Config,
) -> Result<TraitResult, TrendError> {
    config.validate().map_err(TrendError::InvalidConfig)?;

    let combination = &input.combination;
    let key = combination.key();

    if combination.factor_a.cardinality() == 0 {
        return Err(TrendError::EmptyFactor {
            name: combination.factor_a.name.clone(),
        });
    }
    if let Some(b) = &combination.factor_b {
        if b.cardinality() == 0 {
            return Err(TrendError::EmptyFactor {
                name: b.name.clone(),
            });
        }
    }
    if input.draws.nrows() == 0 {
        return Err(TrendError::EmptyDraws { key });
    }

    let n_cells = combination.n_cells();
    if input.counts.len() != n_cells {
        return Err(TrendError::CountMismatch {
            expected: n_cells,
            actual: input.counts.len(),
        });
    }

    let contrast = match &combination.factor_b {
        None => build_contrast(combination.factor_a.cardinality()),
        Some(b) => {
            build_interaction_contrast(combination.factor_a.cardinality(), b.cardinality())
        }
    };

    // The single most bug-prone point in the system: a draw matrix whose
    // columns do not line up with the factor levels would produce
    // plausible-looking but wrong numbers. The transform checks the column
    // count and fails loudly.
    let log_changes = transform(&contrast, &input.draws, false)?;
    let prop_changes = transform(&contrast, &input.draws, true)?;

    let thresholds = Thresholds::new(config.decline_threshold, config.increase_threshold);
    let cells = combination.cell_labels();
    let n_draws = input.draws.nrows();

    let mut summary = Vec::with_capacity(n_cells);
    let mut draws = Vec::with_capacity(n_cells * n_draws);

    for (cell, (level_a, level_b)) in cells.into_iter().enumerate() {
        let n_species = input.counts[cell];
        let prop_column: Vec<f64> = prop_changes.column(cell).iter().copied().collect();

        let stats = summarize_draws(&prop_column, config.credible_level);
        let fine = classify(stats.lower, stats.upper, thresholds);
        summary.push(SummaryRow {
            level_a: level_a.clone(),
            level_b: level_b.clone(),
            median: stats.median,
            lower: stats.lower,
            upper: stats.upper,
            fine,
            coarse: coarsen(fine),
            certain: fine.is_certain(),
            n_species,
        });

        for draw in 0..n_draws {
            draws.push(DrawRecord {
                level_a: level_a.clone(),
                level_b: level_b.clone(),
                draw,
                log_change: log_changes[(draw, cell)],
                prop_change: prop_changes[(draw, cell)],
                n_species,
            });
        }
    }

    sort_summary(&mut summary, combination, config);

    let mut result = TraitResult {
        key: combination.key(),
        credible_level: config.credible_level,
        summary,
        draws,
    };
    filter_small_cells(&mut result, config.min_group_size);

    debug!(
        key = %result.key,
        cells = result.summary.len(),
        draws_per_cell = n_draws,
        "trait combination transformed"
    );
    Ok(result)
}

/// Analyze a batch of trait combinations in parallel.
///
/// Combinations are independent (contrast and draw matrices are per
/// combination, never shared), so they are processed with stateless worker
/// invocations. Per-combination failures are collected into the report
/// rather than aborting the batch.
///
/// # Errors
///
/// Returns [`TrendError::InvalidConfig`] when the shared configuration is
/// invalid; nothing is processed in that case.
pub fn analyze_all(
    inputs: &[TraitInput],
    config: &Config,
) -> Result<AnalysisReport, TrendError> {
    config.validate().map_err(TrendError::InvalidConfig)?;

    let outcomes: Vec<(String, Result<TraitResult, TrendError>)> = inputs
        .par_iter()
        .map(|input| (input.combination.key(), analyze_combination(input, config)))
        .collect();

    let mut report = AnalysisReport::default();
    for (key, outcome) in outcomes {
        match outcome {
            Ok(result) => {
                report.results.insert(key, result);
            }
            Err(err) => {
                report.failures.insert(key, err);
            }
        }
    }
    Ok(report)
}
