//! The raster-order quantize-and-diffuse sweep.

use crate::api::DitherError;
use crate::matrix::Matrix;

use super::Kernel;

/// Quantization threshold. Values strictly above it become white.
const THRESHOLD: f64 = 0.5;

/// Dither a padded matrix in place.
///
/// Visits every interior cell (everything except the `kernel.radius` wide
/// border band) top-to-bottom, left-to-right. Each cell is quantized to
/// `0.0` or `1.0` using its current accumulated value, and the residual
/// `value - quantized` is added to the kernel's neighbors.
///
/// Because every kernel offset points forward in raster order, a cell's
/// value is final once visited and all error it receives arrives before its
/// own turn. The border band only absorbs error and is left holding
/// unspecified values; crop it away before use.
///
/// Fails with [`DitherError::ShapeMismatch`] without touching the matrix if
/// it is too small to hold the border band.
///
/// # Example
///
/// ```
/// use mono_dither::{crop, diffuse, pad, Matrix, FLOYD_STEINBERG};
///
/// let image = Matrix::filled(0.6, 4, 4).unwrap();
/// let mut padded = pad(&image, FLOYD_STEINBERG.radius);
/// diffuse(&mut padded, &FLOYD_STEINBERG).unwrap();
/// let out = crop(&padded, FLOYD_STEINBERG.radius);
///
/// assert!(out.as_slice().iter().all(|&v| v == 0.0 || v == 1.0));
/// ```
pub fn diffuse(padded: &mut Matrix, kernel: &Kernel) -> Result<(), DitherError> {
    let r = kernel.radius;
    let (rows, cols) = padded.shape();
    if rows <= 2 * r || cols <= 2 * r {
        return Err(DitherError::ShapeMismatch {
            expected: 2 * r + 1,
            found: rows.min(cols),
        });
    }

    // Offsets as flat-index deltas; radius padding keeps every target in range.
    let stride = cols as isize;
    let taps: Vec<(isize, f64)> = kernel
        .weights()
        .map(|(dr, dc, w)| (dr as isize * stride + dc as isize, w))
        .collect();

    let data = padded.as_mut_slice();
    for i in r..rows - r {
        for j in r..cols - r {
            let idx = i * cols + j;
            let value = data[idx];
            let quantized = if value > THRESHOLD { 1.0 } else { 0.0 };
            let err = value - quantized;
            data[idx] = quantized;

            for &(delta, weight) in &taps {
                let target = (idx as isize + delta) as usize;
                data[target] += weight * err;
            }
        }
    }

    Ok(())
}
