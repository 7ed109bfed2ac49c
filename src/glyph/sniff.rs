//! Content-based image format detection.

use std::fmt;
use std::io::{self, Cursor, Read};

/// PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// JPEG start-of-image marker.
pub const JPEG_SIGNATURE: [u8; 2] = [0xFF, 0xD8];

/// GIF signatures (1989 and 1987 revisions).
pub const GIF89A_SIGNATURE: &[u8; 6] = b"GIF89a";
pub const GIF87A_SIGNATURE: &[u8; 6] = b"GIF87a";

/// Number of leading bytes needed to classify any supported format.
pub const SNIFF_LEN: usize = 8;

/// Image container formats the pipeline can decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageKind {
    Png,
    Jpeg,
    Gif,
}

impl ImageKind {
    /// Human-readable name of the format.
    pub fn name(&self) -> &'static str {
        match self {
            ImageKind::Png => "png",
            ImageKind::Jpeg => "jpeg",
            ImageKind::Gif => "gif",
        }
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify image bytes by their leading signature.
///
/// Only the first [`SNIFF_LEN`] bytes are inspected. Returns `None` when the
/// prefix matches none of PNG, JPEG or GIF, including when it is too short
/// to hold a full signature.
pub fn sniff(bytes: &[u8]) -> Option<ImageKind> {
    if bytes.starts_with(&PNG_SIGNATURE) {
        Some(ImageKind::Png)
    } else if bytes.starts_with(&JPEG_SIGNATURE) {
        Some(ImageKind::Jpeg)
    } else if bytes.starts_with(GIF89A_SIGNATURE) || bytes.starts_with(GIF87A_SIGNATURE) {
        Some(ImageKind::Gif)
    } else {
        None
    }
}

/// Sniff the format of a stream without losing the bytes read.
///
/// Reads up to [`SNIFF_LEN`] bytes, classifies them, and returns a reader
/// that yields those same bytes followed by the rest of the stream. Works
/// for sources that cannot seek, such as stdin.
pub fn sniff_reader<R: Read>(
    mut reader: R,
) -> io::Result<(Option<ImageKind>, io::Chain<Cursor<Vec<u8>>, R>)> {
    let mut prefix = Vec::with_capacity(SNIFF_LEN);
    (&mut reader)
        .take(SNIFF_LEN as u64)
        .read_to_end(&mut prefix)?;

    let kind = sniff(&prefix);
    Ok((kind, Cursor::new(prefix).chain(reader)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_png() {
        let mut bytes = PNG_SIGNATURE.to_vec();
        bytes.extend_from_slice(b"\0\0\0\rIHDR");
        assert_eq!(sniff(&bytes), Some(ImageKind::Png));
    }

    #[test]
    fn test_sniff_jpeg_needs_only_two_bytes() {
        assert_eq!(sniff(&[0xFF, 0xD8]), Some(ImageKind::Jpeg));
        assert_eq!(sniff(&[0xFF, 0xD8, 0xFF, 0xE0]), Some(ImageKind::Jpeg));
    }

    #[test]
    fn test_sniff_gif_both_revisions() {
        assert_eq!(sniff(b"GIF89a\x01\x00"), Some(ImageKind::Gif));
        assert_eq!(sniff(b"GIF87a\x01\x00"), Some(ImageKind::Gif));
    }

    #[test]
    fn test_sniff_truncated_signatures() {
        assert_eq!(sniff(&PNG_SIGNATURE[..7]), None);
        assert_eq!(sniff(&[0xFF]), None);
        assert_eq!(sniff(b"GIF89"), None);
        assert_eq!(sniff(&[]), None);
    }

    #[test]
    fn test_sniff_rejects_other_formats() {
        assert_eq!(sniff(b"BM\x00\x00\x00\x00"), None);
        assert_eq!(sniff(b"RIFF\x00\x00\x00\x00WEBP"), None);
        assert_eq!(sniff(b"GIF88a"), None);
        assert_eq!(sniff(&[0xD8, 0xFF]), None);
    }

    #[test]
    fn test_sniff_reader_replays_prefix() {
        let mut data = PNG_SIGNATURE.to_vec();
        data.extend_from_slice(b"rest of the file");

        let (kind, mut reader) = sniff_reader(Cursor::new(data.clone())).unwrap();
        assert_eq!(kind, Some(ImageKind::Png));

        let mut replayed = Vec::new();
        reader.read_to_end(&mut replayed).unwrap();
        assert_eq!(replayed, data);
    }

    #[test]
    fn test_sniff_reader_short_stream() {
        let (kind, mut reader) = sniff_reader(Cursor::new(vec![0xFF, 0xD8, 0x00])).unwrap();
        assert_eq!(kind, Some(ImageKind::Jpeg));

        let mut replayed = Vec::new();
        reader.read_to_end(&mut replayed).unwrap();
        assert_eq!(replayed, vec![0xFF, 0xD8, 0x00]);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ImageKind::Png.to_string(), "png");
        assert_eq!(ImageKind::Jpeg.to_string(), "jpeg");
        assert_eq!(ImageKind::Gif.to_string(), "gif");
    }
}
