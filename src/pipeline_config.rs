//! Settings for a single image-to-glyph conversion.

use std::path::{Path, PathBuf};

use crate::error::ConvertError;
use crate::glyph::{Interpolation, DEFAULT_ASPECT_CORRECTION};

/// Path value that selects standard input as the source.
pub const STDIN_PATH: &str = "-";

/// Configuration for one conversion run.
///
/// Built once from command-line and config-file input. Construction
/// validates every field, so a `PipelineConfig` in hand is always usable.
/// The only later change is [`analyze_options`](Self::analyze_options),
/// which derives `reverse` and `interpolation` from the raw option tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    source_path: PathBuf,
    scale_factor: f64,
    reverse: bool,
    interpolation: Interpolation,
    aspect_correction: f64,
    /// When false, a zero-area resize is an error instead of empty output
    allow_empty: bool,
    /// Raw option tokens, kept in the order given
    options: Vec<String>,
}

impl PipelineConfig {
    /// Create a configuration for `source_path` scaled by `scale_factor`.
    ///
    /// Fails with [`ConvertError::InvalidConfiguration`] if the path is
    /// empty or the scale factor is zero, negative, or not finite.
    pub fn new(source_path: impl Into<PathBuf>, scale_factor: f64) -> Result<Self, ConvertError> {
        let config = Self {
            source_path: source_path.into(),
            scale_factor,
            reverse: false,
            interpolation: Interpolation::default(),
            aspect_correction: DEFAULT_ASPECT_CORRECTION,
            allow_empty: true,
            options: Vec::new(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Override the horizontal aspect correction. Must be positive and finite.
    pub fn with_aspect_correction(mut self, aspect_correction: f64) -> Result<Self, ConvertError> {
        self.aspect_correction = aspect_correction;
        self.validate()?;
        Ok(self)
    }

    pub fn with_allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = allow_empty;
        self
    }

    /// Attach raw option tokens, to be interpreted by `analyze_options`.
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Apply the raw option tokens in order and return the unrecognized ones.
    ///
    /// `-r`/`--reverse` enables reverse polarity; `--nn`, `--bl`, `--bc`,
    /// `--l2`, `--l3` and `--mn` select the interpolation kernel, with the
    /// last one winning.
    pub fn analyze_options(&mut self) -> Vec<String> {
        let mut unrecognized = Vec::new();

        for option in &self.options {
            match option.trim() {
                "-r" | "--reverse" => self.reverse = true,
                flag => match interpolation_flag(flag) {
                    Some(interpolation) => self.interpolation = interpolation,
                    None => unrecognized.push(option.clone()),
                },
            }
        }

        unrecognized
    }

    /// Check every invariant the pipeline relies on.
    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.source_path.as_os_str().is_empty() {
            return Err(ConvertError::InvalidConfiguration(
                "no path specified".to_string(),
            ));
        }
        if !self.scale_factor.is_finite() || self.scale_factor <= 0.0 {
            return Err(ConvertError::InvalidConfiguration(format!(
                "resize factor must be a positive number, got {}",
                self.scale_factor
            )));
        }
        if !self.aspect_correction.is_finite() || self.aspect_correction <= 0.0 {
            return Err(ConvertError::InvalidConfiguration(format!(
                "aspect correction must be a positive number, got {}",
                self.aspect_correction
            )));
        }
        Ok(())
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// True when the source is standard input (`-`).
    pub fn reads_stdin(&self) -> bool {
        self.source_path.as_os_str() == STDIN_PATH
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn reverse(&self) -> bool {
        self.reverse
    }

    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    pub fn aspect_correction(&self) -> f64 {
        self.aspect_correction
    }

    pub fn allow_empty(&self) -> bool {
        self.allow_empty
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }
}

/// Interpolation selected by a `--nn` style flag.
fn interpolation_flag(flag: &str) -> Option<Interpolation> {
    let name = flag.strip_prefix("--")?;
    Interpolation::ALL
        .into_iter()
        .find(|i| i.short_name() == name)
}
