//! CLI argument parsing with clap.

use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

use super::enums::Filter;
use crate::config::Config;
use crate::error::ConvertError;
use crate::glyph::{Interpolation, DEFAULT_ASPECT_CORRECTION};
use crate::pipeline_config::PipelineConfig;

/// Render a PNG, JPEG or GIF image as a grid of block glyphs
#[derive(Parser, Debug)]
#[command(name = "glyphgrid")]
#[command(version, about = "Render an image as a grid of block glyphs", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(group(
    ArgGroup::new("interpolation")
        .args(["nearest", "bilinear", "bicubic", "lanczos2", "lanczos3", "mitchell", "filter"])
))]
#[command(after_help = "EXAMPLES:
    glyphgrid photo.jpg 0.1
    glyphgrid --reverse --l3 logo.png 0.5
    cat anim.gif | glyphgrid - 0.25")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Image to convert (PNG, JPEG or GIF), or - for stdin
    pub path: Option<PathBuf>,

    /// Resize factor applied to the image (must be greater than 0)
    #[arg(allow_negative_numbers = true)]
    pub scale: Option<f64>,

    /// Reverse glyph polarity (for light terminals)
    #[arg(short, long, overrides_with = "no_reverse")]
    pub reverse: bool,

    /// Keep normal polarity even if the config file enables reverse
    #[arg(long, overrides_with = "reverse")]
    pub no_reverse: bool,

    /// Use nearest-neighbor interpolation
    #[arg(long = "nn")]
    pub nearest: bool,

    /// Use bilinear interpolation
    #[arg(long = "bl")]
    pub bilinear: bool,

    /// Use bicubic interpolation (default)
    #[arg(long = "bc")]
    pub bicubic: bool,

    /// Use Lanczos2 interpolation
    #[arg(long = "l2")]
    pub lanczos2: bool,

    /// Use Lanczos3 interpolation
    #[arg(long = "l3")]
    pub lanczos3: bool,

    /// Use Mitchell-Netravali interpolation
    #[arg(long = "mn")]
    pub mitchell: bool,

    /// Interpolation kernel by name
    #[arg(short, long, value_enum)]
    pub filter: Option<Filter>,

    /// Horizontal stretch for character cells (default: 1.5)
    #[arg(long)]
    pub aspect: Option<f64>,

    /// Fail instead of printing nothing when the scaled image has no area
    #[arg(long)]
    pub strict: bool,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

impl Args {
    /// Interpolation chosen on the command line, if any.
    pub fn interpolation(&self) -> Option<Interpolation> {
        let flags = [
            (self.nearest, Interpolation::NearestNeighbor),
            (self.bilinear, Interpolation::Bilinear),
            (self.bicubic, Interpolation::Bicubic),
            (self.lanczos2, Interpolation::Lanczos2),
            (self.lanczos3, Interpolation::Lanczos3),
            (self.mitchell, Interpolation::MitchellNetravali),
        ];
        flags
            .into_iter()
            .find_map(|(set, interpolation)| set.then_some(interpolation))
            .or(self.filter.map(Interpolation::from))
    }

    /// The rendering flags as raw option tokens (`--reverse`, `--l3`, ...).
    pub fn option_tokens(&self) -> Vec<String> {
        let mut tokens = Vec::new();
        if self.reverse {
            tokens.push("--reverse".to_string());
        }
        if let Some(interpolation) = self.interpolation() {
            tokens.push(format!("--{}", interpolation.short_name()));
        }
        tokens
    }

    /// Build the conversion settings.
    ///
    /// Command-line flags take precedence over the config file, which takes
    /// precedence over built-in defaults.
    pub fn pipeline_config(&self, file: &Config) -> Result<PipelineConfig, ConvertError> {
        let path = self
            .path
            .clone()
            .ok_or_else(|| ConvertError::InvalidConfiguration("no path specified".to_string()))?;
        let scale = self.scale.ok_or_else(|| {
            ConvertError::InvalidConfiguration("no resize factor specified".to_string())
        })?;

        let render = &file.render;
        let aspect = self
            .aspect
            .or(render.aspect_correction)
            .unwrap_or(DEFAULT_ASPECT_CORRECTION);

        let mut config = PipelineConfig::new(path, scale)?
            .with_reverse(render.reverse && !self.no_reverse)
            .with_interpolation(render.interpolation.unwrap_or_default())
            .with_aspect_correction(aspect)?
            .with_allow_empty(render.allow_empty && !self.strict)
            .with_options(self.option_tokens());

        // Tokens come from flags clap already accepted
        let ignored = config.analyze_options();
        debug_assert!(ignored.is_empty(), "unknown option tokens: {:?}", ignored);

        Ok(config)
    }
}
