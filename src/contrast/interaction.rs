//! Two-factor interaction contrast matrix.

use nalgebra::DMatrix;

/// Build the `(n1*n2) x (n1*n2 - 1)` contrast matrix for two crossed
/// factors with cardinalities `n1` (factor A) and `n2` (factor B).
///
/// The draw matrix's coefficient columns are expected in this order:
///
/// 1. `n1 - 1` main-effect deviations for A (levels 2..n1),
/// 2. `n2 - 1` main-effect deviations for B (levels 2..n2),
/// 3. `(n2 - 1)` interaction slices of `n1 - 1` columns each, one slice per
///    non-reference B level, within a slice ordered by A level.
///
/// Rows are grouped by B level (reference B first) and within each group
/// ordered by A level (reference A first), matching
/// [`TraitCombination::cell_labels`](crate::TraitCombination::cell_labels).
///
/// Treatment coding bakes in an asymmetry between reference and
/// non-reference levels, which the blocks reconstruct explicitly:
///
/// - cell (ref A, ref B) is all zeros (pure baseline);
/// - cells in the reference-B block inherit only the A main-effect
///   structure, zero-padded across all B and interaction columns;
/// - cells in a non-reference-B block combine the A main effect, an
///   all-ones indicator on that B level's deviation column, and that
///   level's interaction slice (for non-reference A only).
///
/// If either cardinality is 1 the construction degenerates to the
/// single-factor contrast for the other factor: the empty factor
/// contributes zero-width column groups and single-row blocks, so the
/// result equals [`build_contrast`](super::build_contrast) of the
/// surviving cardinality.
///
/// The composer does not check the caller's draw matrix; the column-count
/// validation (`n1*n2 - 1`) belongs to the transform step.
///
/// # Panics
///
/// Panics if either cardinality is zero.
pub fn build_interaction_contrast(n1: usize, n2: usize) -> DMatrix<f64> {
    assert!(n1 >= 1, "cannot build a contrast for zero A categories");
    assert!(n2 >= 1, "cannot build a contrast for zero B categories");

    let cells = n1 * n2;
    let a_width = n1 - 1;
    let b_width = n2 - 1;
    let mut contrast = DMatrix::zeros(cells, cells - 1);

    for b in 0..n2 {
        for a in 0..n1 {
            let row = b * n1 + a;
            if a > 0 {
                // A main-effect deviation.
                contrast[(row, a - 1)] = 1.0;
            }
            if b > 0 {
                // B main-effect deviation: all-ones indicator down the block.
                contrast[(row, a_width + (b - 1))] = 1.0;
                if a > 0 {
                    // This B level's interaction slice.
                    let slice = a_width + b_width + (b - 1) * a_width;
                    contrast[(row, slice + (a - 1))] = 1.0;
                }
            }
        }
    }

    contrast
}
