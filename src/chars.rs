//! Glyph classification for ASCII figures.

/// Empty cell
pub const BLANK: char = ' ';

/// The three line-drawing characters a figure is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    /// Rectangle vertex (`+`)
    pub corner: char,
    /// Top and bottom edges (`-`)
    pub horizontal: char,
    /// Left and right edges (`|`)
    pub vertical: char,
}

impl Glyphs {
    pub const fn new(corner: char, horizontal: char, vertical: char) -> Self {
        Self {
            corner,
            horizontal,
            vertical,
        }
    }

    pub fn is_corner(&self, c: char) -> bool {
        c == self.corner
    }

    /// Cells allowed along a top or bottom edge
    pub fn is_h_edge(&self, c: char) -> bool {
        c == self.horizontal || c == self.corner
    }

    /// Cells allowed along a left or right edge
    pub fn is_v_edge(&self, c: char) -> bool {
        c == self.vertical || c == self.corner
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::new('+', '-', '|')
    }
}

pub fn is_blank(c: char) -> bool {
    c == BLANK
}
