//! Public API for the mono-dither crate.
//!
//! This module provides the high-level API: [`Ditherer`] builder, the
//! string-keyed [`dither`] entry point and the [`DitherError`] type.

mod builder;
mod error;

pub use builder::{dither, Ditherer};
pub use error::DitherError;
