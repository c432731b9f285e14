//! Category display ordering and small-group filtering.
//!
//! Ordering is a display concern only: it never touches the model-order
//! invariant that ties draw-matrix columns to factor levels. Filtering
//! happens in two distinct stages with the same comparator
//! (`count <= min_group_size`): a pre-fit margin filter over individual
//! factor levels, and a post-fit cell filter over the joint summary rows.
//! The stages are separate because fitting needs larger per-level margins
//! than the per-cell counts available only after crossing two factors.

use std::collections::BTreeMap;

use tracing::warn;

use crate::config::Config;
use crate::result::{DrawRecord, SummaryRow, TraitResult};
use crate::types::{Factor, TraitCombination};

/// Compute the display order for a set of category levels.
///
/// With a `natural` order configured, levels follow it (levels missing from
/// the natural list are appended, name-ascending). Without one, levels are
/// sorted by descending posterior median, ties broken by name ascending for
/// determinism.
pub fn order_levels(
    levels: &[String],
    natural: Option<&[String]>,
    medians: &BTreeMap<String, f64>,
) -> Vec<String> {
    match natural {
        Some(natural) => {
            let mut ordered: Vec<String> = natural
                .iter()
                .filter(|l| levels.contains(l))
                .cloned()
                .collect();
            let mut rest: Vec<String> = levels
                .iter()
                .filter(|l| !natural.contains(l))
                .cloned()
                .collect();
            rest.sort();
            ordered.extend(rest);
            ordered
        }
        None => {
            let mut ordered = levels.to_vec();
            ordered.sort_by(|a, b| {
                let ma = medians.get(a).copied().unwrap_or(f64::NEG_INFINITY);
                let mb = medians.get(b).copied().unwrap_or(f64::NEG_INFINITY);
                mb.total_cmp(&ma).then_with(|| a.cmp(b))
            });
            ordered
        }
    }
}

/// Sort summary rows into display order.
///
/// Single factor: natural order when configured, effect order otherwise.
/// Pair: when exactly one factor has a natural order, only the unordered
/// one is effect-sorted (by descending marginal median, the mean of its
/// cells' medians); when both or neither have natural orders there is no
/// effect-based reordering (both natural, or both name-ascending).
pub fn sort_summary(rows: &mut [SummaryRow], combination: &TraitCombination, config: &Config) {
    let natural_a = config
        .natural_orders
        .get(&combination.factor_a.name)
        .map(Vec::as_slice);
    let natural_b = combination
        .factor_b
        .as_ref()
        .and_then(|b| config.natural_orders.get(&b.name))
        .map(Vec::as_slice);

    let medians_a = marginal_medians(rows, |r| r.level_a.as_str());
    let order_a = match (&combination.factor_b, natural_a, natural_b) {
        // Single factor: natural or effect order.
        (None, natural, _) => order_levels(&combination.factor_a.levels, natural, &medians_a),
        // Pair with only A unordered: effect-sort A.
        (Some(_), None, Some(_)) => {
            order_levels(&combination.factor_a.levels, None, &medians_a)
        }
        // Pair with A ordered: keep the natural order.
        (Some(_), Some(natural), _) => {
            order_levels(&combination.factor_a.levels, Some(natural), &medians_a)
        }
        // Pair with neither ordered: name-ascending, no effect sort.
        (Some(_), None, None) => sorted_by_name(&combination.factor_a.levels),
    };

    let order_b = combination.factor_b.as_ref().map(|b| {
        let medians_b =
            marginal_medians(rows, |r| r.level_b.as_deref().unwrap_or_default());
        match (natural_a, natural_b) {
            (_, Some(natural)) => order_levels(&b.levels, Some(natural), &medians_b),
            // Only B unordered: effect-sort B.
            (Some(_), None) => order_levels(&b.levels, None, &medians_b),
            // Neither ordered: name-ascending.
            (None, None) => sorted_by_name(&b.levels),
        }
    });

    let pos = |order: &[String], level: &str| {
        order
            .iter()
            .position(|l| l.as_str() == level)
            .unwrap_or(order.len())
    };

    rows.sort_by(|x, y| {
        let bx = order_b
            .as_ref()
            .map(|o| pos(o, x.level_b.as_deref().unwrap_or_default()))
            .unwrap_or(0);
        let by = order_b
            .as_ref()
            .map(|o| pos(o, y.level_b.as_deref().unwrap_or_default()))
            .unwrap_or(0);
        bx.cmp(&by)
            .then_with(|| pos(&order_a, &x.level_a).cmp(&pos(&order_a, &y.level_a)))
    });
}

fn sorted_by_name(levels: &[String]) -> Vec<String> {
    let mut out = levels.to_vec();
    out.sort();
    out
}

fn marginal_medians<'a>(
    rows: &'a [SummaryRow],
    level_of: impl Fn(&'a SummaryRow) -> &'a str,
) -> BTreeMap<String, f64> {
    let mut sums: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for row in rows {
        let entry = sums.entry(level_of(row).to_string()).or_insert((0.0, 0));
        entry.0 += row.median;
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(level, (sum, n))| (level, sum / n as f64))
        .collect()
}

/// Pre-fit margin filter: drop factor levels whose supporting species count
/// is at or below the threshold.
///
/// Runs before model fitting on individual factor margins, so joint cells
/// of a later pair analysis may still fall at or below the threshold and be
/// caught by [`filter_small_cells`]. Levels absent from `counts` are
/// treated as count zero. Dropped levels are logged so they remain
/// distinguishable from levels that never existed.
pub fn filter_factor_levels(
    factor: &Factor,
    counts: &BTreeMap<String, u64>,
    min_group_size: u64,
) -> Factor {
    let mut kept = Vec::with_capacity(factor.levels.len());
    for level in &factor.levels {
        let count = counts.get(level).copied().unwrap_or(0);
        if count <= min_group_size {
            warn!(
                factor = %factor.name,
                level = %level,
                count,
                min_group_size,
                "dropping sparsely supported factor level before fitting"
            );
        } else {
            kept.push(level.clone());
        }
    }
    Factor::new(factor.name.clone(), kept)
}

/// Post-fit cell filter: drop summary rows and exported draws for cells
/// whose species count is at or below the threshold.
///
/// Applied at the final-results stage only; the cells' counts stay visible
/// in upstream diagnostics. Idempotent: a second pass with the same
/// threshold removes nothing further.
pub fn filter_small_cells(result: &mut TraitResult, min_group_size: u64) {
    let dropped: Vec<(String, Option<String>, u64)> = result
        .summary
        .iter()
        .filter(|row| row.n_species <= min_group_size)
        .map(|row| (row.level_a.clone(), row.level_b.clone(), row.n_species))
        .collect();

    for (level_a, level_b, count) in &dropped {
        warn!(
            key = %result.key,
            level_a = %level_a,
            level_b = level_b.as_deref().unwrap_or("-"),
            count,
            min_group_size,
            "dropping sparsely supported cell from final results"
        );
    }

    result
        .summary
        .retain(|row| row.n_species > min_group_size);
    result
        .draws
        .retain(|rec: &DrawRecord| rec.n_species > min_group_size);
}
