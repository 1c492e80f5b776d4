use std::path::PathBuf;

use mono_dither::DitherError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to decode image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Dither error: {0}")]
    Dither(#[from] DitherError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
