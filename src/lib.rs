//! Monodither - error-diffusion dithering of grayscale images
//!
//! Command line front end for the `mono-dither` crate: decodes an image
//! file, dithers it to black and white, and writes the result as a JSON
//! matrix and optionally a PNG preview.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
