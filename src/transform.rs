//! Posterior-draw transformation: contrast application and scale change.

use nalgebra::DMatrix;

use crate::error::TrendError;

/// Apply a contrast matrix to a matrix of posterior coefficient draws.
///
/// Computes `draws * contrast^T`: one output row per posterior draw, one
/// column per category (or category pair). With `exponentiate` set, the
/// result is mapped through `exp(x) - 1` elementwise, turning log-scale
/// change into proportional change.
///
/// Deterministic, stateless dense algebra. The coefficient scale here is
/// log count ratios, small and bounded well away from overflow, so no
/// numerical stabilization is applied.
///
/// # Errors
///
/// Returns [`TrendError::DimensionMismatch`] when the draw matrix's column
/// count differs from the contrast's. Misaligned dimensions would otherwise
/// produce plausible-looking but wrong numbers, so this is checked here
/// rather than left to the caller's discipline.
pub fn transform(
    contrast: &DMatrix<f64>,
    draws: &DMatrix<f64>,
    exponentiate: bool,
) -> Result<DMatrix<f64>, TrendError> {
    if draws.ncols() != contrast.ncols() {
        return Err(TrendError::DimensionMismatch {
            expected: contrast.ncols(),
            actual: draws.ncols(),
        });
    }

    let mut out = draws * contrast.transpose();
    if exponentiate {
        out.apply(|x| *x = x.exp() - 1.0);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::build_contrast;

    #[test]
    fn test_transform_shape() {
        let contrast = build_contrast(4);
        let draws = DMatrix::from_element(10, 3, 0.1);
        let out = transform(&contrast, &draws, false).unwrap();
        assert_eq!(out.nrows(), 10);
        assert_eq!(out.ncols(), 4);
    }

    #[test]
    fn test_log_scale_passthrough() {
        let contrast = build_contrast(3);
        let draws = DMatrix::from_row_slice(2, 2, &[0.1, -0.2, 0.3, 0.4]);
        let out = transform(&contrast, &draws, false).unwrap();

        // Reference column is identically zero, others pass through.
        assert_eq!(out[(0, 0)], 0.0);
        assert_eq!(out[(1, 0)], 0.0);
        assert!((out[(0, 1)] - 0.1).abs() < 1e-12);
        assert!((out[(0, 2)] - (-0.2)).abs() < 1e-12);
        assert!((out[(1, 1)] - 0.3).abs() < 1e-12);
        assert!((out[(1, 2)] - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_exponentiated_scale() {
        let contrast = build_contrast(2);
        let draws = DMatrix::from_row_slice(1, 1, &[0.5_f64.ln_1p()]);
        let out = transform(&contrast, &draws, true).unwrap();

        // exp(log(1.5)) - 1 = 0.5, and exp(0) - 1 = 0 for the reference.
        assert!((out[(0, 0)] - 0.0).abs() < 1e-12);
        assert!((out[(0, 1)] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_linearity_on_log_scale() {
        let contrast = build_contrast(3);
        let draws = DMatrix::from_row_slice(2, 2, &[0.1, -0.2, 0.05, 0.3]);
        let doubled = &draws * 2.0;

        let out = transform(&contrast, &draws, false).unwrap();
        let out_doubled = transform(&contrast, &doubled, false).unwrap();

        for i in 0..out.nrows() {
            for j in 0..out.ncols() {
                assert!(
                    (out_doubled[(i, j)] - 2.0 * out[(i, j)]).abs() < 1e-12,
                    "({}, {}): {} vs {}",
                    i,
                    j,
                    out_doubled[(i, j)],
                    out[(i, j)]
                );
            }
        }
    }

    #[test]
    fn test_dimension_mismatch_is_fatal() {
        let contrast = build_contrast(4);
        let draws = DMatrix::from_element(10, 2, 0.1);
        let err = transform(&contrast, &draws, false).unwrap_err();
        assert_eq!(
            err,
            TrendError::DimensionMismatch {
                expected: 3,
                actual: 2
            }
        );
    }
}
