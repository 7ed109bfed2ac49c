//! Error type shared by every conversion stage.

use std::path::PathBuf;

use crate::glyph::ImageKind;

/// Errors that can occur while converting an image to glyphs.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The input could not be opened or read
    #[error("Cannot read '{}': {source}", path.display())]
    UnreadableSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The leading bytes match none of PNG, JPEG or GIF
    #[error("Unsupported image format (expected PNG, JPEG or GIF)")]
    UnsupportedFormat,

    /// The signature matched but the decoder rejected the content
    #[error("Corrupt {format} image: {cause}")]
    CorruptImage { format: ImageKind, cause: String },

    /// The conversion settings are unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The resized image has no area
    #[error("Resized image is {width}x{height}, nothing to render")]
    DegenerateOutput { width: u32, height: u32 },

    /// The resampler rejected its buffers
    #[error("Resize failed: {0}")]
    Resize(String),

    /// Writing the rendered grid failed
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreadable_source_display() {
        let err = ConvertError::UnreadableSource {
            path: PathBuf::from("/tmp/missing.png"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/missing.png"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_corrupt_image_display() {
        let err = ConvertError::CorruptImage {
            format: ImageKind::Jpeg,
            cause: "unexpected EOF".to_string(),
        };
        assert_eq!(err.to_string(), "Corrupt jpeg image: unexpected EOF");
    }

    #[test]
    fn test_degenerate_output_display() {
        let err = ConvertError::DegenerateOutput {
            width: 0,
            height: 3,
        };
        assert!(err.to_string().contains("0x3"));
    }
}
