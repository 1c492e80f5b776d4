//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use std::path::Path;

/// Read a JSON matrix file and assert it is binary with the given shape.
pub fn assert_binary_json(path: &Path, rows: usize, cols: usize) -> Vec<Vec<f64>> {
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Expected JSON output at {}: {e}", path.display()));
    let matrix: Vec<Vec<f64>> = serde_json::from_str(&text).expect("JSON should be nested arrays");

    assert_eq!(matrix.len(), rows, "row count");
    for (i, row) in matrix.iter().enumerate() {
        assert_eq!(row.len(), cols, "column count of row {i}");
        assert!(
            row.iter().all(|&v| v == 0.0 || v == 1.0),
            "row {i} is not binary: {row:?}"
        );
    }
    matrix
}

/// Assert the file is an 8-bit grayscale PNG holding only 0 and 255.
pub fn assert_binary_png(path: &Path, width: u32, height: u32) -> Vec<u8> {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected PNG output at {}: {e}", path.display()));
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n", "PNG signature");

    let img = image::load_from_memory(&bytes).unwrap();
    assert_eq!(img.color(), image::ColorType::L8);
    let luma = img.to_luma8();
    assert_eq!(luma.dimensions(), (width, height));
    assert!(luma.as_raw().iter().all(|&p| p == 0 || p == 255));
    luma.into_raw()
}

/// JSON matrix scaled to the bytes a PNG preview must hold.
pub fn json_as_png_bytes(matrix: &[Vec<f64>]) -> Vec<u8> {
    matrix
        .iter()
        .flatten()
        .map(|&v| (v * 255.0) as u8)
        .collect()
}
