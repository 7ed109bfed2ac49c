//! Intensity to glyph quantization.

use rayon::prelude::*;

use super::grayscale::GrayscaleImage;
use super::palette::{Glyph, LEVELS};

/// Width of each intensity bin for 8-bit samples (256 / 8).
pub const BIN_WIDTH: u16 = 256 / LEVELS as u16;

/// Map an 8-bit intensity to a glyph.
///
/// The 0-255 range is split into eight bins of [`BIN_WIDTH`]. A value that
/// lands exactly on a bin edge belongs to the lighter bin, and the last bin
/// includes 255. With `reverse`, the intensity is mirrored first, so
/// `quantize(v, true) == quantize(255 - v, false)` for every `v`.
///
/// # Example
/// ```
/// use glyphgrid::glyph::quantize;
///
/// assert_eq!(quantize(0, false).as_char(), ' ');
/// assert_eq!(quantize(255, false).as_char(), '■');
/// assert_eq!(quantize(255, true).as_char(), ' ');
/// ```
#[inline]
pub fn quantize(intensity: u8, reverse: bool) -> Glyph {
    let v = if reverse { u8::MAX - intensity } else { intensity };
    let index = v as u16 / BIN_WIDTH;
    // v <= 255, so index <= 7
    Glyph::from_index(index as usize).unwrap_or(Glyph::LIGHTEST)
}

/// Quantize every pixel of a grayscale image, one `Vec` per row.
///
/// Rows are processed in parallel; the output keeps row and column order.
pub fn quantize_rows(gray: &GrayscaleImage, reverse: bool) -> Vec<Vec<Glyph>> {
    if gray.is_empty() {
        return Vec::new();
    }

    gray.as_raw()
        .par_chunks(gray.width() as usize)
        .map(|row| row.iter().map(|&v| quantize(v, reverse)).collect())
        .collect()
}
