//! Text emission of a quantized glyph grid.

use std::fmt;
use std::io::{self, Write};

use super::grayscale::GrayscaleImage;
use super::mapping::quantize_rows;
use super::palette::Glyph;

/// A row-major grid of glyphs ready to print.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlyphGrid {
    rows: Vec<Vec<Glyph>>,
}

impl GlyphGrid {
    /// Quantize every pixel of `gray` into a glyph.
    pub fn from_grayscale(gray: &GrayscaleImage, reverse: bool) -> Self {
        Self {
            rows: quantize_rows(gray, reverse),
        }
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0
    }

    pub fn rows(&self) -> &[Vec<Glyph>] {
        &self.rows
    }

    /// Iterate over every glyph in row-major order.
    pub fn glyphs(&self) -> impl Iterator<Item = Glyph> + '_ {
        self.rows.iter().flatten().copied()
    }

    /// Write the grid as text, one line per row.
    ///
    /// Each row is terminated by `\n`. An empty grid writes nothing.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.is_empty() {
            return Ok(());
        }

        // Four bytes covers the widest UTF-8 glyph plus headroom for '\n'
        let mut line = String::with_capacity(self.width() * 4 + 1);
        for row in &self.rows {
            line.clear();
            line.extend(row.iter().map(Glyph::as_char));
            line.push('\n');
            out.write_all(line.as_bytes())?;
        }
        Ok(())
    }
}

impl fmt::Display for GlyphGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        for row in &self.rows {
            for glyph in row {
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl From<Vec<Vec<Glyph>>> for GlyphGrid {
    fn from(rows: Vec<Vec<Glyph>>) -> Self {
        Self { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    #[test]
    fn test_render_rows_and_line_breaks() {
        let mut img = GrayImage::new(2, 2);
        img.put_pixel(0, 0, Luma([0]));
        img.put_pixel(1, 0, Luma([255]));
        img.put_pixel(0, 1, Luma([255]));
        img.put_pixel(1, 1, Luma([0]));

        let grid = GlyphGrid::from_grayscale(&GrayscaleImage::from(img), false);
        let mut out = Vec::new();
        grid.render(&mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), " ■\n■ \n");
    }

    #[test]
    fn test_render_matches_display() {
        let img = GrayImage::from_pixel(3, 2, Luma([130]));
        let grid = GlyphGrid::from_grayscale(&GrayscaleImage::from(img), true);

        let mut out = Vec::new();
        grid.render(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), grid.to_string());
    }

    #[test]
    fn test_render_empty_grid_writes_nothing() {
        let mut out = Vec::new();
        GlyphGrid::default().render(&mut out).unwrap();
        assert!(out.is_empty());

        // Rows with no columns still produce no output
        let grid = GlyphGrid::from(vec![Vec::new(), Vec::new()]);
        assert!(grid.is_empty());
        assert_eq!(grid.to_string(), "");
    }

    #[test]
    fn test_grid_dimensions() {
        let img = GrayImage::from_pixel(4, 3, Luma([0]));
        let grid = GlyphGrid::from_grayscale(&GrayscaleImage::from(img), false);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.glyphs().count(), 12);
    }
}
