//! Min-max normalization to `[0, 1]`.

use serde::{Deserialize, Serialize};

use crate::api::DitherError;
use crate::matrix::Matrix;

/// What to do with an image whose samples are all equal.
///
/// Min-max scaling is undefined when `max == min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegeneratePolicy {
    /// Map every sample to `0.0`, so the dithered result is all black.
    #[default]
    Black,
    /// Fail with [`DitherError::DegenerateInput`].
    Reject,
}

/// Rescale samples to `[0, 1]` with `(v - min) / (max - min)`.
///
/// Consumes the matrix and rewrites it in place. Fails with
/// [`DitherError::NonFiniteSample`] on NaN or infinite samples. A constant
/// matrix is handled according to `policy`.
///
/// # Example
///
/// ```
/// use mono_dither::{normalize, DegeneratePolicy, Matrix};
///
/// let m = Matrix::from_rows(vec![vec![10.0, 20.0, 30.0]]).unwrap();
/// let n = normalize(m, DegeneratePolicy::Black).unwrap();
/// assert_eq!(n.as_slice(), &[0.0, 0.5, 1.0]);
/// ```
pub fn normalize(mut matrix: Matrix, policy: DegeneratePolicy) -> Result<Matrix, DitherError> {
    let cols = matrix.cols();
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for (idx, &v) in matrix.as_slice().iter().enumerate() {
        if !v.is_finite() {
            return Err(DitherError::NonFiniteSample {
                row: idx / cols,
                col: idx % cols,
            });
        }
        lo = lo.min(v);
        hi = hi.max(v);
    }

    let range = hi - lo;
    if range == 0.0 {
        tracing::debug!(value = lo, ?policy, "Degenerate input: zero dynamic range");
        return match policy {
            DegeneratePolicy::Black => {
                matrix.as_mut_slice().fill(0.0);
                Ok(matrix)
            }
            DegeneratePolicy::Reject => Err(DitherError::DegenerateInput),
        };
    }

    if range.is_finite() {
        for v in matrix.as_mut_slice() {
            *v = (*v - lo) / range;
        }
    } else {
        // hi - lo overflowed; halving keeps every difference finite.
        let (lo, range) = (lo / 2.0, hi / 2.0 - lo / 2.0);
        for v in matrix.as_mut_slice() {
            *v = (*v / 2.0 - lo) / range;
        }
    }
    Ok(matrix)
}
