//! Target size calculation with terminal aspect-ratio correction.

/// Default horizontal stretch applied to compensate for character cells.
///
/// Terminal cells are roughly twice as tall as they are wide, and a 1.5x
/// horizontal stretch makes a square source render as a visually square
/// block of glyphs in common monospace fonts.
pub const DEFAULT_ASPECT_CORRECTION: f64 = 1.5;

/// Calculate the resized dimensions for a scale factor, using
/// [`DEFAULT_ASPECT_CORRECTION`].
///
/// # Example
/// ```
/// use glyphgrid::glyph::target_dimensions;
///
/// assert_eq!(target_dimensions(100, 100, 1.0), (150, 100));
/// ```
pub fn target_dimensions(width: u32, height: u32, scale_factor: f64) -> (u32, u32) {
    target_dimensions_with_aspect(width, height, scale_factor, DEFAULT_ASPECT_CORRECTION)
}

/// Calculate the resized dimensions with a custom aspect correction.
///
/// Width is `width * scale * aspect`, height is `height * scale`, each
/// rounded to the nearest integer. Either may come out as zero; callers
/// treat that as an empty image rather than an error.
///
/// # Arguments
/// * `width` - Source width in pixels
/// * `height` - Source height in pixels
/// * `scale_factor` - Positive scale applied to both axes
/// * `aspect_correction` - Extra horizontal stretch for character cells
///
/// # Returns
/// A tuple of (width, height) in glyphs.
pub fn target_dimensions_with_aspect(
    width: u32,
    height: u32,
    scale_factor: f64,
    aspect_correction: f64,
) -> (u32, u32) {
    let target_width = round_dimension(width as f64 * scale_factor * aspect_correction);
    let target_height = round_dimension(height as f64 * scale_factor);
    (target_width, target_height)
}

fn round_dimension(value: f64) -> u32 {
    // `as` saturates, so huge products clamp to u32::MAX and NaN becomes 0
    value.round().max(0.0) as u32
}
