//! End-to-end conversion from an image source to rendered glyphs.
//!
//! Each stage finishes before the next starts, and nothing is written to
//! the output until the whole grid has been built.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::error::ConvertError;
use crate::glyph::{
    decode, resize, sniff, sniff_reader, to_grayscale, DecoderRegistry, GlyphGrid, ImageKind,
};
use crate::pipeline_config::PipelineConfig;

/// Read the configured source, returning its sniffed format and full bytes.
///
/// The format is checked after reading only the signature prefix, so an
/// unsupported file is rejected without reading the rest of it.
pub fn read_source(config: &PipelineConfig) -> Result<(ImageKind, Vec<u8>), ConvertError> {
    let path = config.source_path();
    if config.reads_stdin() {
        read_sniffed(io::stdin().lock(), path)
    } else {
        let file = File::open(path).map_err(|source| ConvertError::UnreadableSource {
            path: path.to_path_buf(),
            source,
        })?;
        read_sniffed(file, path)
    }
}

fn read_sniffed<R: Read>(reader: R, path: &Path) -> Result<(ImageKind, Vec<u8>), ConvertError> {
    let unreadable = |source: io::Error| ConvertError::UnreadableSource {
        path: path.to_path_buf(),
        source,
    };

    let (kind, mut reader) = sniff_reader(reader).map_err(unreadable)?;
    let kind = kind.ok_or(ConvertError::UnsupportedFormat)?;

    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(unreadable)?;
    Ok((kind, bytes))
}

/// Convert in-memory image bytes to a glyph grid.
pub fn convert_bytes(
    bytes: &[u8],
    config: &PipelineConfig,
    registry: &DecoderRegistry,
) -> Result<GlyphGrid, ConvertError> {
    config.validate()?;
    let kind = sniff(bytes).ok_or(ConvertError::UnsupportedFormat)?;
    convert_sniffed(bytes, kind, config, registry)
}

fn convert_sniffed(
    bytes: &[u8],
    kind: ImageKind,
    config: &PipelineConfig,
    registry: &DecoderRegistry,
) -> Result<GlyphGrid, ConvertError> {
    let decoded = decode(bytes, kind, registry)?;
    let resized = resize(
        decoded,
        config.scale_factor(),
        config.interpolation(),
        config.aspect_correction(),
    )?;

    if resized.is_empty() {
        if !config.allow_empty() {
            return Err(ConvertError::DegenerateOutput {
                width: resized.width(),
                height: resized.height(),
            });
        }
        log::debug!(
            "Resized image is {}x{}, rendering nothing",
            resized.width(),
            resized.height()
        );
    }

    let gray = to_grayscale(&resized);
    Ok(GlyphGrid::from_grayscale(&gray, config.reverse()))
}

/// Read, decode and convert the configured source to a glyph grid.
///
/// The configuration is validated before the source is touched.
pub fn convert(
    config: &PipelineConfig,
    registry: &DecoderRegistry,
) -> Result<GlyphGrid, ConvertError> {
    config.validate()?;
    let (kind, bytes) = read_source(config)?;
    log::debug!(
        "Read {} bytes of {} from {}",
        bytes.len(),
        kind,
        config.source_path().display()
    );
    convert_sniffed(&bytes, kind, config, registry)
}

/// Convert the configured source and write the glyph text to `out`.
///
/// Output is written only after the conversion has fully succeeded.
pub fn run<W: Write>(
    config: &PipelineConfig,
    registry: &DecoderRegistry,
    out: &mut W,
) -> Result<GlyphGrid, ConvertError> {
    let grid = convert(config, registry)?;
    grid.render(out)?;
    out.flush()?;
    Ok(grid)
}
