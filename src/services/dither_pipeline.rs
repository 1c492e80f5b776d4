use std::path::{Path, PathBuf};

use mono_dither::{DitheredImage, Ditherer, Method};

use crate::error::AppError;
use crate::models::AppConfig;
use crate::rendering::{load_grayscale, write_json, write_png};

/// Result from running the dither pipeline
pub struct DitherResult {
    /// The binary image
    pub image: DitheredImage,
    /// Where the JSON matrix was written
    pub json_path: PathBuf,
    /// Where the PNG preview was written, if requested
    pub png_path: Option<PathBuf>,
}

/// Pipeline that orchestrates decode → dither → export
#[derive(Debug, Clone)]
pub struct DitherPipeline {
    ditherer: Ditherer,
    json_path: PathBuf,
    png_path: Option<PathBuf>,
}

impl DitherPipeline {
    /// Build a pipeline from resolved configuration.
    ///
    /// The method name is validated here, before any file is read or written.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let method: Method = config.method.parse()?;
        let ditherer = Ditherer::new()
            .method(method)
            .degenerate(config.degenerate);

        Ok(Self {
            ditherer,
            json_path: config.output.clone(),
            png_path: config.save_image.then(|| config.image_output.clone()),
        })
    }

    pub fn method(&self) -> Method {
        self.ditherer.selected_method()
    }

    /// Dither the image at `image_path` and write the configured outputs.
    ///
    /// Nothing is written unless dithering succeeds. If the PNG cannot be
    /// written, the JSON written just before it is removed again, so a failed
    /// run leaves no artifact behind.
    pub fn run(&self, image_path: &Path) -> Result<DitherResult, AppError> {
        let matrix = load_grayscale(image_path)?;
        let image = self.ditherer.dither(matrix)?;

        tracing::debug!(
            image = %image_path.display(),
            method = %image.method(),
            white = image.white_count(),
            "Image dithered"
        );

        write_json(image.matrix(), &self.json_path)?;
        tracing::info!(path = %self.json_path.display(), "Wrote JSON matrix");

        if let Some(path) = &self.png_path {
            if let Err(e) = write_png(&image, path) {
                discard(&self.json_path);
                return Err(e);
            }
            tracing::info!(path = %path.display(), "Wrote PNG preview");
        }

        Ok(DitherResult {
            image,
            json_path: self.json_path.clone(),
            png_path: self.png_path.clone(),
        })
    }
}

/// Remove an artifact of a failed run.
fn discard(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => tracing::debug!(path = %path.display(), "Removed partial output"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!(path = %path.display(), %e, "Failed to remove partial output"),
    }
}
