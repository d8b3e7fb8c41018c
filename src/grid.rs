//! Rectangular character grid.
//!
//! Coordinates are `(x, y)` with `x` the column and `y` the row, origin at
//! the top-left cell. Lookups take signed coordinates so that callers can
//! look at neighbours without checking bounds first.

use std::fmt;

use crate::chars::BLANK;
use crate::error::GridError;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    cells: Vec<Vec<char>>,
    pub width: usize,
    pub height: usize,
}

impl Grid {
    /// Parse newline-separated text.
    ///
    /// A single trailing newline is ignored, so figures written one
    /// `"...\n"` line at a time parse the same as their joined form.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let text = text.strip_suffix('\n').unwrap_or(text);
        if text.is_empty() {
            return Ok(Self::default());
        }
        Self::from_rows(text.split('\n'))
    }

    /// Build a grid from individual rows. Every row must have the same
    /// number of characters.
    pub fn from_rows<I, S>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let cells: Vec<Vec<char>> = rows
            .into_iter()
            .map(|row| row.as_ref().chars().collect())
            .collect();

        let width = cells.first().map_or(0, Vec::len);
        if let Some((row, line)) = cells.iter().enumerate().find(|(_, l)| l.len() != width) {
            return Err(GridError::Ragged {
                row,
                expected: width,
                found: line.len(),
            });
        }

        let height = cells.len();
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Cell at `(x, y)`, or `None` outside the grid
    pub fn cell(&self, x: i32, y: i32) -> Option<char> {
        if x < 0 || y < 0 {
            return None;
        }
        self.cells
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
    }

    /// Cell at `(x, y)`; blank outside the grid
    pub fn get(&self, x: i32, y: i32) -> char {
        self.cell(x, y).unwrap_or(BLANK)
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Row-major iterator over `(x, y, char)`
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, char)> + '_ {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &c)| (x as i32, y as i32, c))
        })
    }

    /// Row-major index of an in-bounds cell
    pub(crate) fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width + x as usize
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for c in row {
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
