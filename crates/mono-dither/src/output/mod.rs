//! Output types for the dithering pipeline.
//!
//! [`DitheredImage`] is the canonical output of [`Ditherer::dither`]: the
//! binary matrix plus the method that produced it.
//!
//! [`Ditherer::dither`]: crate::Ditherer::dither

mod dithered_image;

pub use dithered_image::DitheredImage;
