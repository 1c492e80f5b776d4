//! Test fixtures: small grayscale images written to disk.

use image::{GrayImage, Luma, Rgb, RgbImage};
use std::path::{Path, PathBuf};

/// 8x6 horizontal ramp, 0 on the left to 224 on the right.
pub fn write_ramp(dir: &Path) -> PathBuf {
    let path = dir.join("ramp.png");
    GrayImage::from_fn(8, 6, |x, _| Luma([(x * 32) as u8]))
        .save(&path)
        .unwrap();
    path
}

/// 4x4 image where every pixel is 128.
pub fn write_constant(dir: &Path) -> PathBuf {
    let path = dir.join("constant.png");
    GrayImage::from_pixel(4, 4, Luma([128])).save(&path).unwrap();
    path
}

/// 2x2 grayscale PNG with samples 0, 64 / 128, 255.
pub fn write_quad(dir: &Path) -> PathBuf {
    let path = dir.join("quad.png");
    GrayImage::from_raw(2, 2, vec![0, 64, 128, 255])
        .unwrap()
        .save(&path)
        .unwrap();
    path
}

/// 3x2 color BMP: black column, mid column, white column.
pub fn write_color_bmp(dir: &Path) -> PathBuf {
    let path = dir.join("color.bmp");
    RgbImage::from_fn(3, 2, |x, _| match x {
        0 => Rgb([0, 0, 0]),
        1 => Rgb([40, 200, 90]),
        _ => Rgb([255, 255, 255]),
    })
    .save(&path)
    .unwrap();
    path
}
