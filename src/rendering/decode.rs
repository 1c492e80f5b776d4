//! Image file decoding to a grayscale sample matrix.

use std::path::Path;

use mono_dither::Matrix;

use crate::error::AppError;

/// Open an image file and reduce it to 8-bit luma.
///
/// Supports the formats enabled on the `image` dependency (PNG, JPEG, BMP,
/// GIF). Color images are converted with the standard luma weights; the
/// returned matrix holds samples in `0..=255`, one per pixel, row-major.
pub fn load_grayscale(path: &Path) -> Result<Matrix, AppError> {
    let img = image::open(path).map_err(|source| AppError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let luma = img.to_luma8();
    let (width, height) = luma.dimensions();
    tracing::debug!(path = %path.display(), width, height, "Decoded image");

    Ok(Matrix::from_u8(
        luma.as_raw(),
        height as usize,
        width as usize,
    )?)
}
