//! DitheredImage: the binary result of a dither invocation.

use crate::dither::Method;
use crate::matrix::Matrix;

/// The canonical output of the dithering pipeline.
///
/// Every sample of the wrapped matrix is exactly `0.0` or `1.0`, and the
/// shape equals the shape of the input.
///
/// # Example
///
/// ```
/// use mono_dither::{Ditherer, Matrix, Method};
///
/// let input = Matrix::from_rows(vec![vec![0.0, 255.0], vec![255.0, 0.0]]).unwrap();
/// let image = Ditherer::new().method(Method::Simple2D).dither(input).unwrap();
///
/// assert_eq!(image.rows(), 2);
/// assert_eq!(image.to_gray_bytes(), vec![0, 255, 255, 0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DitheredImage {
    matrix: Matrix,
    method: Method,
}

impl DitheredImage {
    pub(crate) fn new(matrix: Matrix, method: Method) -> Self {
        debug_assert!(
            matrix.as_slice().iter().all(|&v| v == 0.0 || v == 1.0),
            "dithered output must be binary"
        );
        Self { matrix, method }
    }

    /// The binary matrix.
    #[inline]
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Consume the image, returning the binary matrix.
    pub fn into_matrix(self) -> Matrix {
        self.matrix
    }

    /// Method that produced this image.
    #[inline]
    pub fn method(&self) -> Method {
        self.method
    }

    /// Height in pixels.
    #[inline]
    pub fn rows(&self) -> usize {
        self.matrix.rows()
    }

    /// Width in pixels.
    #[inline]
    pub fn cols(&self) -> usize {
        self.matrix.cols()
    }

    /// Number of white (`1.0`) pixels.
    pub fn white_count(&self) -> usize {
        self.matrix.as_slice().iter().filter(|&&v| v == 1.0).count()
    }

    /// Row-major 8-bit grayscale, each sample scaled by 255.
    pub fn to_gray_bytes(&self) -> Vec<u8> {
        self.matrix
            .as_slice()
            .iter()
            .map(|&v| if v == 1.0 { 255 } else { 0 })
            .collect()
    }
}
