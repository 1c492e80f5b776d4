//! Serialization of dithered results: JSON matrix and PNG preview.
//!
//! The `encode_*` functions work in memory; `write_*` encode and write a
//! single file.

use std::io::Cursor;
use std::path::Path;

use mono_dither::{DitheredImage, Matrix};

use crate::error::AppError;

/// Encode a matrix as nested JSON arrays of floats, `[[1.0,0.0],...]`.
pub fn encode_json(matrix: &Matrix) -> Result<Vec<u8>, AppError> {
    Ok(serde_json::to_vec(matrix)?)
}

/// Encode a dithered image as an 8-bit grayscale PNG (sample x 255).
pub fn encode_png(image: &DitheredImage) -> Result<Vec<u8>, AppError> {
    let width = u32::try_from(image.cols())
        .map_err(|_| AppError::PngEncode(format!("width {} too large", image.cols())))?;
    let height = u32::try_from(image.rows())
        .map_err(|_| AppError::PngEncode(format!("height {} too large", image.rows())))?;

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| AppError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&image.to_gray_bytes())
            .map_err(|e| AppError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Write the JSON matrix to `path`.
pub fn write_json(matrix: &Matrix, path: &Path) -> Result<(), AppError> {
    let bytes = encode_json(matrix)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Write the PNG preview to `path`.
pub fn write_png(image: &DitheredImage, path: &Path) -> Result<(), AppError> {
    let bytes = encode_png(image)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mono_dither::{Ditherer, Method};
    use pretty_assertions::assert_eq;

    fn sample() -> DitheredImage {
        let input = Matrix::from_rows(vec![vec![0.0, 255.0, 0.0], vec![255.0, 0.0, 255.0]]).unwrap();
        Ditherer::new().method(Method::Simple2D).dither(input).unwrap()
    }

    #[test]
    fn test_json_nested_arrays() {
        let json = encode_json(sample().matrix()).unwrap();
        assert_eq!(
            String::from_utf8(json).unwrap(),
            "[[0.0,1.0,0.0],[1.0,0.0,1.0]]"
        );
    }

    #[test]
    fn test_png_decodes_back_to_0_and_255() {
        let bytes = encode_png(&sample()).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&bytes).unwrap().to_luma8();
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.as_raw(), &vec![0u8, 255, 0, 255, 0, 255]);
    }

    #[test]
    fn test_write_files() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("out.json");
        let png_path = dir.path().join("out.png");
        let image = sample();

        write_json(image.matrix(), &json_path).unwrap();
        write_png(&image, &png_path).unwrap();

        let parsed: Vec<Vec<f64>> =
            serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(parsed, image.matrix().to_rows());
        assert!(std::fs::metadata(&png_path).unwrap().len() > 0);
    }

    #[test]
    fn test_write_into_missing_dir_is_io_error() {
        let err = write_json(sample().matrix(), Path::new("/nonexistent/dir/out.json")).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
