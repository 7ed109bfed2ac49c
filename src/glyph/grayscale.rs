//! Reduction of a color image to a single intensity channel.

use image::{GrayImage, Rgba};

use super::decode::DecodedImage;

/// Single-channel intensity image derived from a [`DecodedImage`].
///
/// Viewed as RGBA, every pixel has equal red, green and blue channels.
#[derive(Debug, Clone)]
pub struct GrayscaleImage {
    pixels: GrayImage,
}

impl GrayscaleImage {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Intensity (0-255) at the given coordinate.
    ///
    /// # Panics
    /// If `(x, y)` is out of bounds.
    pub fn intensity(&self, x: u32, y: u32) -> u8 {
        self.pixels.get_pixel(x, y).0[0]
    }

    /// The pixel at `(x, y)` as an opaque RGBA color with r == g == b.
    pub fn rgba(&self, x: u32, y: u32) -> Rgba<u8> {
        let v = self.intensity(x, y);
        Rgba([v, v, v, u8::MAX])
    }

    /// Row-major intensity values.
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

impl From<GrayImage> for GrayscaleImage {
    fn from(pixels: GrayImage) -> Self {
        Self { pixels }
    }
}

/// Convert an image to grayscale using the `image` crate's luma conversion.
///
/// Produces a new buffer; the input is only borrowed. Alpha, if any, is
/// ignored.
pub fn to_grayscale(image: &DecodedImage) -> GrayscaleImage {
    let gray = image.image().to_luma8();
    log::debug!("Reduced to grayscale: {}x{}", gray.width(), gray.height());
    GrayscaleImage::from(gray)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::ImageKind;
    use image::{DynamicImage, Rgb, RgbImage};

    fn decoded(img: RgbImage) -> DecodedImage {
        DecodedImage::new(DynamicImage::ImageRgb8(img), ImageKind::Png)
    }

    #[test]
    fn test_grayscale_white_and_black() {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([255, 255, 255]));
        img.put_pixel(1, 0, Rgb([0, 0, 0]));

        let gray = to_grayscale(&decoded(img));
        assert_eq!(gray.intensity(0, 0), 255);
        assert_eq!(gray.intensity(1, 0), 0);
    }

    #[test]
    fn test_grayscale_keeps_dimensions() {
        let gray = to_grayscale(&decoded(RgbImage::new(7, 3)));
        assert_eq!((gray.width(), gray.height()), (7, 3));
        assert_eq!(gray.as_raw().len(), 21);
    }

    #[test]
    fn test_grayscale_channels_equal() {
        let mut img = RgbImage::new(3, 1);
        img.put_pixel(0, 0, Rgb([255, 0, 0]));
        img.put_pixel(1, 0, Rgb([0, 255, 0]));
        img.put_pixel(2, 0, Rgb([12, 200, 99]));

        let gray = to_grayscale(&decoded(img));
        for x in 0..3 {
            let [r, g, b, _] = gray.rgba(x, 0).0;
            assert_eq!(r, g);
            assert_eq!(g, b);
        }
    }

    #[test]
    fn test_grayscale_green_brighter_than_red_and_blue() {
        let mut img = RgbImage::new(3, 1);
        img.put_pixel(0, 0, Rgb([255, 0, 0]));
        img.put_pixel(1, 0, Rgb([0, 255, 0]));
        img.put_pixel(2, 0, Rgb([0, 0, 255]));

        let gray = to_grayscale(&decoded(img));
        let (r, g, b) = (gray.intensity(0, 0), gray.intensity(1, 0), gray.intensity(2, 0));
        assert!(g > r, "green ({}) should be brighter than red ({})", g, r);
        assert!(r > b, "red ({}) should be brighter than blue ({})", r, b);
    }

    #[test]
    fn test_grayscale_empty() {
        let gray = to_grayscale(&decoded(RgbImage::new(0, 0)));
        assert!(gray.is_empty());
    }
}
