//! Single-factor treatment-contrast matrix.

use nalgebra::DMatrix;

/// Build the `n x (n-1)` contrast matrix for a single factor with `n`
/// category levels.
///
/// Row 0 is the reference category and is all zeros: its period effect is
/// carried entirely by the shared baseline coefficient, which is not part of
/// the draw matrix. Row `i` (for `i >= 1`) selects the `i`-th treatment
/// coefficient, reconstructing that category's deviation from the reference.
/// Stacked against an intercept column this is the standard `[1 | C]`
/// treatment-coded model matrix; only the contrast block `C` is returned
/// because the baseline is absorbed upstream.
///
/// Column `k` corresponds to the draw-matrix column for category `k + 1` in
/// the factor's level order (reference first, others in sorted order). The
/// matrix depends only on `n`, never on draw values.
///
/// # Panics
///
/// Panics if `n == 0`; category counts must come from real data with at
/// least one observed category. `n == 1` is valid and returns a `1x0`
/// matrix (a single category has no contrast).
pub fn build_contrast(n: usize) -> DMatrix<f64> {
    assert!(n >= 1, "cannot build a contrast for zero categories");

    let mut contrast = DMatrix::zeros(n, n - 1);
    for i in 1..n {
        contrast[(i, i - 1)] = 1.0;
    }
    contrast
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::DVector;

    #[test]
    fn test_dimensions() {
        for n in 1..=8 {
            let c = build_contrast(n);
            assert_eq!(c.nrows(), n);
            assert_eq!(c.ncols(), n - 1);
        }
    }

    #[test]
    fn test_reference_row_is_zero() {
        let c = build_contrast(5);
        for j in 0..4 {
            assert_eq!(c[(0, j)], 0.0);
        }
    }

    #[test]
    fn test_rows_reproduce_reference_relative_deviations() {
        // n=3 with coefficients [0.1, -0.2]: rows must yield 0, 0.1, -0.2.
        let c = build_contrast(3);
        let coef = DVector::from_row_slice(&[0.1, -0.2]);
        let effects = &c * &coef;
        assert!((effects[0] - 0.0).abs() < 1e-12);
        assert!((effects[1] - 0.1).abs() < 1e-12);
        assert!((effects[2] - (-0.2)).abs() < 1e-12);
    }

    #[test]
    fn test_zero_coefficients_round_trip() {
        // All-zero coefficients reconstruct zero deviation for every
        // category, the reference included.
        for n in 2..=6 {
            let c = build_contrast(n);
            let coef = DVector::zeros(n - 1);
            let effects = &c * &coef;
            for i in 0..n {
                assert_eq!(effects[i], 0.0, "category {} of n={}", i, n);
            }
        }
    }

    #[test]
    fn test_trivial_single_category() {
        let c = build_contrast(1);
        assert_eq!(c.nrows(), 1);
        assert_eq!(c.ncols(), 0);
    }

    #[test]
    #[should_panic(expected = "zero categories")]
    fn test_zero_categories_panics() {
        build_contrast(0);
    }
}
