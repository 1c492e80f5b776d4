//! Border extension and cropping.
//!
//! [`pad`] surrounds a matrix with a band of replicated edge samples so the
//! diffusion scan can write to any kernel offset without bounds checks.
//! [`crop`] removes that band again.

use crate::matrix::Matrix;

/// Pad `matrix` by `radius` cells on every side.
///
/// Border cells take the value of the nearest edge cell (constant
/// extrapolation); corner bands take the corner value. The result has shape
/// `(rows + 2 * radius, cols + 2 * radius)`.
///
/// # Example
///
/// ```
/// use mono_dither::{pad, Matrix};
///
/// let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// let p = pad(&m, 1);
/// assert_eq!(p.to_rows(), vec![
///     vec![1.0, 1.0, 2.0, 2.0],
///     vec![1.0, 1.0, 2.0, 2.0],
///     vec![3.0, 3.0, 4.0, 4.0],
///     vec![3.0, 3.0, 4.0, 4.0],
/// ]);
/// ```
pub fn pad(matrix: &Matrix, radius: usize) -> Matrix {
    let (rows, cols) = matrix.shape();
    let out_rows = rows + 2 * radius;
    let out_cols = cols + 2 * radius;

    let samples = matrix.as_slice();
    let mut data = Vec::with_capacity(out_rows * out_cols);
    for i in 0..out_rows {
        let src_row = i.saturating_sub(radius).min(rows - 1);
        let src = &samples[src_row * cols..(src_row + 1) * cols];
        data.extend(std::iter::repeat(src[0]).take(radius));
        data.extend_from_slice(src);
        data.extend(std::iter::repeat(src[cols - 1]).take(radius));
    }

    Matrix::from_parts(data, out_rows, out_cols)
}

/// Extract the interior of a padded matrix, dropping `radius` cells per side.
///
/// Panics if the matrix is not larger than `2 * radius` in both dimensions;
/// inputs come from [`pad`] with the same radius.
pub fn crop(padded: &Matrix, radius: usize) -> Matrix {
    let (rows, cols) = padded.shape();
    assert!(
        rows > 2 * radius && cols > 2 * radius,
        "cannot crop {radius} from a {rows}x{cols} matrix"
    );
    let out_rows = rows - 2 * radius;
    let out_cols = cols - 2 * radius;

    let data: Vec<f64> = padded
        .row_slices()
        .skip(radius)
        .take(out_rows)
        .flat_map(|row| row[radius..radius + out_cols].iter().copied())
        .collect();

    Matrix::from_parts(data, out_rows, out_cols)
}
