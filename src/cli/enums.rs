//! CLI enum types for the interpolation option.

use clap::ValueEnum;

use crate::glyph::Interpolation;

/// Interpolation kernel used when resizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Filter {
    Nearest,
    Bilinear,
    #[default]
    Bicubic,
    #[value(name = "lanczos2")]
    Lanczos2,
    #[value(name = "lanczos3")]
    Lanczos3,
    Mitchell,
}

impl From<Filter> for Interpolation {
    fn from(f: Filter) -> Self {
        match f {
            Filter::Nearest => Interpolation::NearestNeighbor,
            Filter::Bilinear => Interpolation::Bilinear,
            Filter::Bicubic => Interpolation::Bicubic,
            Filter::Lanczos2 => Interpolation::Lanczos2,
            Filter::Lanczos3 => Interpolation::Lanczos3,
            Filter::Mitchell => Interpolation::MitchellNetravali,
        }
    }
}
