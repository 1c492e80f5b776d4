//! Owned row-major sample buffer.
//!
//! [`Matrix`] is the single buffer type that flows through the pipeline.
//! Each stage takes it by value or by unique reference, so the buffer is
//! never aliased while the diffusion scan mutates it.

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::api::DitherError;

/// A 2D matrix of `f64` samples in row-major order.
///
/// Shapes are always non-empty: both `rows` and `cols` are at least 1.
///
/// # Example
///
/// ```
/// use mono_dither::Matrix;
///
/// let m = Matrix::from_rows(vec![vec![0.0, 1.0], vec![2.0, 3.0]]).unwrap();
/// assert_eq!(m.rows(), 2);
/// assert_eq!(m.cols(), 2);
/// assert_eq!(m.get(1, 0), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Create a matrix from a flat row-major buffer.
    ///
    /// Fails with [`DitherError::EmptyImage`] if either dimension is zero and
    /// with [`DitherError::ShapeMismatch`] if `data.len() != rows * cols` or
    /// the product does not fit in `usize`.
    pub fn new(data: Vec<f64>, rows: usize, cols: usize) -> Result<Self, DitherError> {
        if rows == 0 || cols == 0 {
            return Err(DitherError::EmptyImage);
        }
        let expected = element_count(rows, cols, data.len())?;
        if data.len() != expected {
            return Err(DitherError::ShapeMismatch {
                expected,
                found: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Build from parts already known to be consistent.
    pub(crate) fn from_parts(data: Vec<f64>, rows: usize, cols: usize) -> Self {
        debug_assert!(rows > 0 && cols > 0, "empty shape {rows}x{cols}");
        debug_assert_eq!(
            data.len(),
            rows * cols,
            "data length ({}) must match rows * cols ({}x{})",
            data.len(),
            rows,
            cols,
        );
        Self { data, rows, cols }
    }

    /// Create a matrix from nested rows.
    ///
    /// Every row must have the same length as the first one.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, DitherError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if cols == 0 {
            return Err(DitherError::EmptyImage);
        }
        let height = rows.len();
        let mut data = Vec::with_capacity(height * cols);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != cols {
                return Err(DitherError::RaggedRows {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            data.extend(values);
        }
        Ok(Self {
            data,
            rows: height,
            cols,
        })
    }

    /// Create a matrix of 8-bit samples, e.g. a decoded luma plane.
    pub fn from_u8(pixels: &[u8], rows: usize, cols: usize) -> Result<Self, DitherError> {
        Self::new(pixels.iter().map(|&p| f64::from(p)).collect(), rows, cols)
    }

    /// Create a matrix with every sample set to `value`.
    pub fn filled(value: f64, rows: usize, cols: usize) -> Result<Self, DitherError> {
        let len = element_count(rows, cols, 0)?;
        Self::new(vec![value; len], rows, cols)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Sample at `(row, col)`. Panics when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Overwrite the sample at `(row, col)`. Panics when out of bounds.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    /// Flat row-major view of all samples.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Iterate over rows as slices.
    pub fn row_slices(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.cols)
    }

    /// Copy out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.row_slices().map(<[f64]>::to_vec).collect()
    }

    /// Consume the matrix, returning the flat buffer.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }
}

/// Serializes as nested arrays, one inner array per row.
/// `rows * cols`, or `ShapeMismatch` saturated at `usize::MAX` on overflow.
fn element_count(rows: usize, cols: usize, found: usize) -> Result<usize, DitherError> {
    rows.checked_mul(cols).ok_or(DitherError::ShapeMismatch {
        expected: usize::MAX,
        found,
    })
}

impl Serialize for Matrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows))?;
        for row in self.row_slices() {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_shape() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            DitherError::RaggedRows {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(Matrix::from_rows(vec![]), Err(DitherError::EmptyImage));
        assert_eq!(Matrix::from_rows(vec![vec![]]), Err(DitherError::EmptyImage));
        assert_eq!(Matrix::new(vec![], 0, 3), Err(DitherError::EmptyImage));
    }

    #[test]
    fn test_new_length_mismatch() {
        let err = Matrix::new(vec![0.0; 5], 2, 3).unwrap_err();
        assert_eq!(
            err,
            DitherError::ShapeMismatch {
                expected: 6,
                found: 5
            }
        );
    }

    #[test]
    fn test_shape_overflow_rejected() {
        assert_eq!(
            Matrix::new(vec![0.0; 4], usize::MAX, 2),
            Err(DitherError::ShapeMismatch {
                expected: usize::MAX,
                found: 4,
            })
        );
        assert!(matches!(
            Matrix::filled(0.5, usize::MAX, 3),
            Err(DitherError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_from_u8() {
        let m = Matrix::from_u8(&[0, 128, 255, 7], 2, 2).unwrap();
        assert_eq!(m.get(0, 1), 128.0);
        assert_eq!(m.get(1, 0), 255.0);
    }

    #[test]
    fn test_set_and_to_rows() {
        let mut m = Matrix::filled(0.0, 2, 2).unwrap();
        m.set(1, 1, 1.0);
        assert_eq!(m.to_rows(), vec![vec![0.0, 0.0], vec![0.0, 1.0]]);
    }

    #[test]
    fn test_serialize_nested_arrays() {
        let m = Matrix::from_rows(vec![vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[[1.0,0.0],[0.0,1.0]]");
    }
}
