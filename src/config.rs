//! Configuration file handling for glyphgrid.
//!
//! Loads defaults from `<config dir>/glyphgrid/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::glyph::Interpolation;

/// Contents written by `glyphgrid config init`.
pub const DEFAULT_CONFIG: &str = r#"# glyphgrid configuration

[render]
# Invert glyph polarity (for light terminal themes)
reverse = false
# Interpolation: nearest, bilinear, bicubic, lanczos2, lanczos3, mitchell
interpolation = "bicubic"
# Horizontal stretch compensating for tall character cells
aspect_correction = 1.5
# Print nothing (instead of failing) when the scaled image has no area
allow_empty = true
"#;

/// Configuration file structure for glyphgrid.
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct RenderConfig {
    #[serde(default)]
    pub reverse: bool,
    #[serde(default)]
    pub interpolation: Option<Interpolation>,
    #[serde(default)]
    pub aspect_correction: Option<f64>,
    #[serde(default = "default_true")]
    pub allow_empty: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            reverse: false,
            interpolation: None,
            aspect_correction: None,
            allow_empty: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from the default path.
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = default_path();
        if path.exists() {
            Self::load_from_explicit(path)
        } else {
            log::debug!("No config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Load configuration from a path the user asked for.
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from_explicit(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::parse(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Errors that can occur when loading or creating configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    AlreadyExists(PathBuf),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::AlreadyExists(path) => {
                write!(
                    f,
                    "Config file already exists: {}\nUse 'glyphgrid config show' to view current settings.",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            ConfigError::AlreadyExists(_) => None,
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("glyphgrid").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/glyphgrid/config.toml")
        })
}
