//! Aspect-corrected resizing through `fast_image_resize`.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use fast_image_resize as fr;
use image::{DynamicImage, RgbImage};
use serde::Deserialize;

use super::decode::DecodedImage;
use super::dimensions::target_dimensions_with_aspect;
use crate::error::ConvertError;

/// Resampling kernel used when resizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Interpolation {
    /// Nearest-neighbour sampling
    #[serde(rename = "nearest", alias = "nn")]
    NearestNeighbor,
    /// Linear (triangle) filter
    #[serde(rename = "bilinear", alias = "bl")]
    Bilinear,
    /// Catmull-Rom cubic filter
    #[default]
    #[serde(rename = "bicubic", alias = "bc")]
    Bicubic,
    /// Lanczos windowed sinc, a = 2
    #[serde(rename = "lanczos2", alias = "l2")]
    Lanczos2,
    /// Lanczos windowed sinc, a = 3
    #[serde(rename = "lanczos3", alias = "l3")]
    Lanczos3,
    /// Mitchell-Netravali cubic, B = C = 1/3
    #[serde(rename = "mitchell", alias = "mn")]
    MitchellNetravali,
}

/// Largest RGB buffer `resize` will allocate, matching `image`'s default
/// `Limits::max_alloc`.
pub const MAX_RESIZE_BYTES: u64 = 512 * 1024 * 1024;

impl Interpolation {
    pub const ALL: [Interpolation; 6] = [
        Interpolation::NearestNeighbor,
        Interpolation::Bilinear,
        Interpolation::Bicubic,
        Interpolation::Lanczos2,
        Interpolation::Lanczos3,
        Interpolation::MitchellNetravali,
    ];

    /// Canonical name, as accepted in config files.
    pub fn name(&self) -> &'static str {
        match self {
            Interpolation::NearestNeighbor => "nearest",
            Interpolation::Bilinear => "bilinear",
            Interpolation::Bicubic => "bicubic",
            Interpolation::Lanczos2 => "lanczos2",
            Interpolation::Lanczos3 => "lanczos3",
            Interpolation::MitchellNetravali => "mitchell",
        }
    }

    /// Short name, matching the `--nn`, `--bl`, ... command-line flags.
    pub fn short_name(&self) -> &'static str {
        match self {
            Interpolation::NearestNeighbor => "nn",
            Interpolation::Bilinear => "bl",
            Interpolation::Bicubic => "bc",
            Interpolation::Lanczos2 => "l2",
            Interpolation::Lanczos3 => "l3",
            Interpolation::MitchellNetravali => "mn",
        }
    }

    fn resize_alg(&self) -> Result<fr::ResizeAlg, ConvertError> {
        let filter = match self {
            Interpolation::NearestNeighbor => return Ok(fr::ResizeAlg::Nearest),
            Interpolation::Bilinear => fr::FilterType::Bilinear,
            Interpolation::Bicubic => fr::FilterType::CatmullRom,
            Interpolation::Lanczos2 => {
                let filter = fr::Filter::new("Lanczos2", lanczos2, 2.0)
                    .map_err(|_| ConvertError::Resize("invalid Lanczos2 support".to_string()))?;
                fr::FilterType::Custom(filter)
            }
            Interpolation::Lanczos3 => fr::FilterType::Lanczos3,
            Interpolation::MitchellNetravali => fr::FilterType::Mitchell,
        };
        Ok(fr::ResizeAlg::Convolution(filter))
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Interpolation {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Interpolation::ALL
            .into_iter()
            .find(|i| i.name() == s || i.short_name() == s)
            .ok_or_else(|| {
                ConvertError::InvalidConfiguration(format!("unknown interpolation '{}'", s))
            })
    }
}

fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        let a = x * PI;
        a.sin() / a
    }
}

fn lanczos2(x: f64) -> f64 {
    if x.abs() < 2.0 {
        sinc(x) * sinc(x / 2.0)
    } else {
        0.0
    }
}

/// Resize an image by `scale_factor`, stretching the width by
/// `aspect_correction`.
///
/// Consumes the input and returns a new buffer. Alpha is dropped before
/// resampling. A zero target dimension yields an empty image instead of an
/// error. A target whose RGB buffer would exceed [`MAX_RESIZE_BYTES`] fails
/// with [`ConvertError::Resize`] before anything is allocated.
pub fn resize(
    image: DecodedImage,
    scale_factor: f64,
    interpolation: Interpolation,
    aspect_correction: f64,
) -> Result<DecodedImage, ConvertError> {
    let kind = image.kind();
    let (width, height) = target_dimensions_with_aspect(
        image.width(),
        image.height(),
        scale_factor,
        aspect_correction,
    );

    log::debug!(
        "Resizing {}x{} -> {}x{} ({})",
        image.width(),
        image.height(),
        width,
        height,
        interpolation
    );

    if width == 0 || height == 0 || image.is_empty() {
        return Ok(DecodedImage::new(DynamicImage::new_rgb8(width, height), kind));
    }

    let bytes = (width as u64)
        .checked_mul(height as u64)
        .and_then(|pixels| pixels.checked_mul(3));
    match bytes {
        Some(bytes) if bytes <= MAX_RESIZE_BYTES => {}
        _ => {
            return Err(ConvertError::Resize(format!(
                "target {}x{} exceeds the {} MiB buffer limit",
                width,
                height,
                MAX_RESIZE_BYTES / (1024 * 1024)
            )))
        }
    }

    let src = image.into_image().to_rgb8();
    let (src_width, src_height) = src.dimensions();

    let src_image =
        fr::images::Image::from_vec_u8(src_width, src_height, src.into_raw(), fr::PixelType::U8x3)
            .map_err(|e| ConvertError::Resize(e.to_string()))?;
    let mut dst_image = fr::images::Image::new(width, height, fr::PixelType::U8x3);

    let options = fr::ResizeOptions::new().resize_alg(interpolation.resize_alg()?);
    let mut resizer = fr::Resizer::new();
    resizer
        .resize(&src_image, &mut dst_image, Some(&options))
        .map_err(|e| ConvertError::Resize(e.to_string()))?;

    let rgb = RgbImage::from_raw(width, height, dst_image.into_vec())
        .ok_or_else(|| ConvertError::Resize("resized buffer has wrong length".to_string()))?;

    Ok(DecodedImage::new(DynamicImage::ImageRgb8(rgb), kind))
}
