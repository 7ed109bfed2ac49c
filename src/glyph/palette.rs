//! The fixed eight-level glyph palette.

use std::fmt;

/// Glyphs ordered from darkest to lightest.
pub const PALETTE: [char; 8] = [' ', '□', '▧', '▥', '▩', '▦', '▣', '■'];

/// Number of intensity levels in [`PALETTE`].
pub const LEVELS: usize = PALETTE.len();

/// One palette entry, identified by its index (0 = darkest, 7 = lightest).
///
/// Ordering follows the palette, so comparing two glyphs compares how light
/// they look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Glyph(u8);

impl Glyph {
    pub const DARKEST: Glyph = Glyph(0);
    pub const LIGHTEST: Glyph = Glyph(LEVELS as u8 - 1);

    /// Glyph at `index`, or `None` if it is outside the palette.
    pub fn from_index(index: usize) -> Option<Glyph> {
        (index < LEVELS).then_some(Glyph(index as u8))
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// The character printed for this glyph.
    pub fn as_char(&self) -> char {
        PALETTE[self.index()]
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_extremes() {
        assert_eq!(Glyph::DARKEST.as_char(), ' ');
        assert_eq!(Glyph::LIGHTEST.as_char(), '■');
    }

    #[test]
    fn test_from_index_bounds() {
        assert_eq!(Glyph::from_index(3).map(|g| g.as_char()), Some('▥'));
        assert_eq!(Glyph::from_index(7), Some(Glyph::LIGHTEST));
        assert_eq!(Glyph::from_index(8), None);
    }

    #[test]
    fn test_glyph_ordering_follows_palette() {
        let glyphs: Vec<Glyph> = (0..LEVELS).filter_map(Glyph::from_index).collect();
        assert!(glyphs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_palette_glyphs_are_distinct() {
        let mut chars = PALETTE.to_vec();
        chars.sort_unstable();
        chars.dedup();
        assert_eq!(chars.len(), LEVELS);
    }
}
