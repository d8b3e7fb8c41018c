//! Figure decomposition entry point and its options.

use crate::chars::Glyphs;
use crate::error::GridError;
use crate::finder::find_rectangles;
use crate::grid::Grid;
use crate::rect::{Rectangle, RectangleSet};

/// Options for decomposing ASCII figures.
///
/// # Example
///
/// ```rust
/// use asciikata::{decompose_figure_with, DecomposeOptions};
///
/// let figure = "#==#\n!  !\n#==#";
/// let options = DecomposeOptions::new()
///     .with_corner('#')
///     .with_horizontal('=')
///     .with_vertical('!');
/// let parts: Vec<String> = decompose_figure_with(figure, &options).unwrap().collect();
/// assert_eq!(parts, vec!["#==#\n!  !\n#==#\n"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DecomposeOptions {
    /// Characters the figure is drawn with. Output uses the same set.
    pub glyphs: Glyphs,
}

impl DecomposeOptions {
    pub fn new() -> Self {
        Self {
            glyphs: Glyphs::default(),
        }
    }

    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn with_corner(mut self, corner: char) -> Self {
        self.glyphs.corner = corner;
        self
    }

    pub fn with_horizontal(mut self, horizontal: char) -> Self {
        self.glyphs.horizontal = horizontal;
        self
    }

    pub fn with_vertical(mut self, vertical: char) -> Self {
        self.glyphs.vertical = vertical;
        self
    }
}

/// Lazily rendered rectangles of a decomposed figure.
///
/// Order follows discovery (top edges in row-major order) and carries no
/// meaning; treat the output as a set.
#[derive(Debug)]
pub struct Rectangles {
    inner: std::vec::IntoIter<Rectangle>,
    glyphs: Glyphs,
}

impl Rectangles {
    /// The remaining rectangles as geometry instead of text
    pub fn into_shapes(self) -> Vec<Rectangle> {
        self.inner.collect()
    }
}

impl Iterator for Rectangles {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.inner.next().map(|r| r.render(&self.glyphs))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Rectangles {}

/// Decompose `figure` with custom options
pub fn decompose_figure_with(
    figure: &str,
    options: &DecomposeOptions,
) -> Result<Rectangles, GridError> {
    let grid = Grid::parse(figure)?;
    let mut rects = RectangleSet::new();
    find_rectangles(&grid, &options.glyphs, &mut rects);
    Ok(Rectangles {
        inner: rects.into_iter(),
        glyphs: options.glyphs,
    })
}
