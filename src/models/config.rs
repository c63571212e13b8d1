use crate::error::ExtractError;
use crate::models::options::{parse_ignore, ExtractOptions, DEFAULT_IGNORE, DEFAULT_SCALE};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Hex colors excluded from counting
    #[serde(default = "default_ignore")]
    pub ignore: Vec<String>,

    /// Downsampling ratio applied before counting
    #[serde(default = "default_scale")]
    pub scale: f64,

    /// File extensions picked up by batch runs (without the dot)
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Where batch runs write their JSON mapping
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Concurrent extractions in batch runs (defaults to available cores)
    #[serde(default)]
    pub jobs: Option<usize>,
}

fn default_ignore() -> Vec<String> {
    DEFAULT_IGNORE.iter().map(|s| s.to_string()).collect()
}

fn default_scale() -> f64 {
    DEFAULT_SCALE
}

fn default_extensions() -> Vec<String> {
    vec!["png".to_string()]
}

fn default_output() -> PathBuf {
    PathBuf::from("bg-colors.json")
}

impl AppConfig {
    /// Load configuration from an optional YAML file.
    ///
    /// A missing, unreadable or invalid file falls back to defaults with a
    /// warning.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        ignore = config.ignore.len(),
                        scale = config.scale,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as unit, not as an empty map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Extraction options described by this configuration.
    pub fn extract_options(&self) -> Result<ExtractOptions, ExtractError> {
        Ok(ExtractOptions {
            ignore: parse_ignore(&self.ignore)?,
            scale: self.scale,
        })
    }

    /// Concurrent batch jobs, at least one.
    pub fn jobs(&self) -> usize {
        self.jobs
            .unwrap_or_else(|| {
                std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(1)
            })
            .max(1)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ignore: default_ignore(),
            scale: default_scale(),
            extensions: default_extensions(),
            output: default_output(),
            jobs: None,
        }
    }
}
