pub mod dither_pipeline;

pub use dither_pipeline::{DitherPipeline, DitherResult};
