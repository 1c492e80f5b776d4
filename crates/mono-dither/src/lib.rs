//! mono-dither: error-diffusion dithering to black and white
//!
//! This library turns a grayscale matrix of any numeric range into a binary
//! (`0.0` / `1.0`) matrix of the same shape, preserving local tone by pushing
//! each pixel's quantization error onto neighbors the scan has not reached.
//!
//! # Quick Start
//!
//! The [`Ditherer`] builder is the primary entry point:
//!
//! ```
//! use mono_dither::{Ditherer, Matrix, Method};
//!
//! let pixels = Matrix::from_u8(&[0, 60, 120, 180, 240, 255], 2, 3).unwrap();
//! let result = Ditherer::new()
//!     .method(Method::FloydSteinberg)
//!     .dither(pixels)
//!     .unwrap();
//!
//! assert_eq!(result.rows(), 2);
//! assert_eq!(result.cols(), 3);
//! ```
//!
//! When the method arrives as a string (command line, config file), use
//! [`dither()`], which rejects unknown names before doing any work:
//!
//! ```
//! use mono_dither::{dither, Matrix};
//!
//! let pixels = Matrix::from_u8(&[10, 200, 30, 220], 2, 2).unwrap();
//! let binary = dither(pixels, "jarvis-judice-ninke").unwrap();
//! assert!(binary.as_slice().iter().all(|&v| v == 0.0 || v == 1.0));
//! ```
//!
//! # Pipeline
//!
//! 1. [`normalize`]: min-max scale to `[0, 1]`
//! 2. [`pad`]: replicate edges outward by the kernel radius
//! 3. [`diffuse`]: one raster-order quantize-and-diffuse sweep, in place
//! 4. [`crop`]: remove the padding
//!
//! The sweep is inherently sequential: every decision depends on error
//! deposited by earlier pixels.
//!
//! # Dithering Methods
//!
//! | Identifier | Kernel | Radius |
//! |---|---|---|
//! | `simple2D` | [`SIMPLE_2D`] | 1 |
//! | `floyd-steinberg` (default) | [`FLOYD_STEINBERG`] | 1 |
//! | `jarvis-judice-ninke` | [`JARVIS_JUDICE_NINKE`] | 2 |
//!
//! # Constant Images
//!
//! Min-max scaling is undefined for an image without dynamic range. By
//! default such an image normalizes to all `0.0` and dithers to black;
//! [`DegeneratePolicy::Reject`] turns it into [`DitherError::DegenerateInput`].

pub mod api;
pub mod dither;
pub mod matrix;
pub mod output;
pub mod preprocess;


pub use api::{dither, DitherError, Ditherer};
pub use dither::{
    diffuse, lookup, Kernel, Method, FLOYD_STEINBERG, JARVIS_JUDICE_NINKE, SIMPLE_2D,
};
pub use matrix::Matrix;
pub use output::DitheredImage;
pub use preprocess::{crop, normalize, pad, DegeneratePolicy};
