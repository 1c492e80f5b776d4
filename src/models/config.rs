use mono_dither::{DegeneratePolicy, Method};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "CONFIG_FILE";

/// Application configuration loaded from a YAML file.
///
/// Every field is optional in the file; command line flags override the
/// values found here.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Dithering method identifier
    #[serde(default = "default_method")]
    pub method: String,

    /// Path of the JSON matrix output
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Also write a PNG preview
    #[serde(default)]
    pub save_image: bool,

    /// Path of the PNG preview
    #[serde(default = "default_image_output")]
    pub image_output: PathBuf,

    /// Handling of constant (zero dynamic range) images
    #[serde(default)]
    pub degenerate: DegeneratePolicy,
}

fn default_method() -> String {
    Method::default().as_str().to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("dithered.json")
}

fn default_image_output() -> PathBuf {
    PathBuf::from("dithered2.png")
}

impl AppConfig {
    /// Parse configuration from YAML text. Empty text yields the defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self, AppError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Load configuration from `path`, or the defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let Some(path) = path else {
            tracing::debug!("No config file, using defaults");
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            method = %config.method,
            save_image = config.save_image,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Pick the config file: the explicit path if given, else `CONFIG_FILE`.
    ///
    /// A `CONFIG_FILE` that does not exist is ignored with a warning; an
    /// explicit path is returned as is so that a missing file is an error.
    pub fn locate(explicit: Option<PathBuf>) -> Option<PathBuf> {
        if explicit.is_some() {
            return explicit;
        }
        let path = PathBuf::from(std::env::var_os(CONFIG_ENV)?);
        if path.exists() {
            Some(path)
        } else {
            tracing::warn!(path = %path.display(), "{CONFIG_ENV} does not exist, using defaults");
            None
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            method: default_method(),
            output: default_output(),
            save_image: false,
            image_output: default_image_output(),
            degenerate: DegeneratePolicy::default(),
        }
    }
}
