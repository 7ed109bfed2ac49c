//! Image-to-glyph conversion stages.
//!
//! The stages run in order, each producing a fresh value:
//!
//! 1. **Sniffing** - identify PNG, JPEG or GIF from the leading bytes
//! 2. **Decoding** - dispatch to the registered decoder for that format
//! 3. **Resizing** - scale with terminal aspect-ratio correction
//! 4. **Grayscale** - reduce to a single intensity channel
//! 5. **Quantization** - map intensity to one of eight glyphs
//! 6. **Rendering** - emit the grid as text lines
//!
//! # Palette
//!
//! The eight glyphs, darkest to lightest, are ` □▧▥▩▦▣■`. Reverse mode
//! mirrors the mapping for light terminal backgrounds.

mod decode;
mod dimensions;
mod grayscale;
mod mapping;
mod palette;
mod render;
mod resize;
mod sniff;

pub use decode::{decode, DecodeFn, DecodedImage, DecoderRegistry};
pub use dimensions::{target_dimensions, target_dimensions_with_aspect, DEFAULT_ASPECT_CORRECTION};
pub use grayscale::{to_grayscale, GrayscaleImage};
pub use mapping::{quantize, quantize_rows, BIN_WIDTH};
pub use palette::{Glyph, LEVELS, PALETTE};
pub use render::GlyphGrid;
pub use resize::{resize, Interpolation, MAX_RESIZE_BYTES};
pub use sniff::{
    sniff, sniff_reader, ImageKind, GIF87A_SIGNATURE, GIF89A_SIGNATURE, JPEG_SIGNATURE,
    PNG_SIGNATURE, SNIFF_LEN,
};
