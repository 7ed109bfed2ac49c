//! Decoder registry and dispatch from a sniffed format to a pixel buffer.

use std::collections::HashMap;

use image::{DynamicImage, GenericImageView, ImageFormat, ImageResult};

use super::sniff::ImageKind;
use crate::error::ConvertError;

/// Function that turns encoded bytes of one format into pixels.
pub type DecodeFn = fn(&[u8]) -> ImageResult<DynamicImage>;

/// Read-only mapping from image format to its decoder.
///
/// Built once at startup and passed by reference into [`decode`].
#[derive(Clone)]
pub struct DecoderRegistry {
    decoders: HashMap<ImageKind, DecodeFn>,
}

impl DecoderRegistry {
    /// A registry with no decoders installed.
    pub fn empty() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }

    /// Install `decoder` for `kind`, replacing any previous one.
    pub fn with_decoder(mut self, kind: ImageKind, decoder: DecodeFn) -> Self {
        self.decoders.insert(kind, decoder);
        self
    }

    /// Look up the decoder for a format.
    pub fn get(&self, kind: ImageKind) -> Option<DecodeFn> {
        self.decoders.get(&kind).copied()
    }

    pub fn supports(&self, kind: ImageKind) -> bool {
        self.decoders.contains_key(&kind)
    }
}

impl Default for DecoderRegistry {
    /// PNG, JPEG and GIF decoders from the `image` crate.
    fn default() -> Self {
        Self::empty()
            .with_decoder(ImageKind::Png, decode_png)
            .with_decoder(ImageKind::Jpeg, decode_jpeg)
            .with_decoder(ImageKind::Gif, decode_gif)
    }
}

impl std::fmt::Debug for DecoderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<&'static str> = self.decoders.keys().map(|k| k.name()).collect();
        kinds.sort_unstable();
        f.debug_struct("DecoderRegistry")
            .field("formats", &kinds)
            .finish()
    }
}

fn decode_png(bytes: &[u8]) -> ImageResult<DynamicImage> {
    image::load_from_memory_with_format(bytes, ImageFormat::Png)
}

fn decode_jpeg(bytes: &[u8]) -> ImageResult<DynamicImage> {
    image::load_from_memory_with_format(bytes, ImageFormat::Jpeg)
}

/// Decodes the first frame only; later animation frames are ignored.
fn decode_gif(bytes: &[u8]) -> ImageResult<DynamicImage> {
    image::load_from_memory_with_format(bytes, ImageFormat::Gif)
}

/// A decoded pixel buffer together with its size and source format.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    image: DynamicImage,
    width: u32,
    height: u32,
    kind: ImageKind,
}

impl DecodedImage {
    /// Wrap a pixel buffer, taking the dimensions from the buffer itself.
    pub fn new(image: DynamicImage, kind: ImageKind) -> Self {
        let (width, height) = image.dimensions();
        Self {
            image,
            width,
            height,
            kind,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Format the pixels were originally decoded from.
    pub fn kind(&self) -> ImageKind {
        self.kind
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn into_image(self) -> DynamicImage {
        self.image
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Decode `bytes` with the registry's decoder for `kind`.
///
/// A matching signature does not guarantee valid content, so a decoder
/// failure is reported as [`ConvertError::CorruptImage`].
pub fn decode(
    bytes: &[u8],
    kind: ImageKind,
    registry: &DecoderRegistry,
) -> Result<DecodedImage, ConvertError> {
    let decoder = registry.get(kind).ok_or(ConvertError::UnsupportedFormat)?;

    let image = decoder(bytes).map_err(|e| ConvertError::CorruptImage {
        format: kind,
        cause: e.to_string(),
    })?;

    let decoded = DecodedImage::new(image, kind);
    log::debug!(
        "Decoded {} image: {}x{}",
        kind,
        decoded.width(),
        decoded.height()
    );
    Ok(decoded)
}
