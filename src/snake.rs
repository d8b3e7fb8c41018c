//! Snaking word search.
//!
//! A word is found when its characters can be read along a path that moves
//! right, left, up or down one cell at a time and never visits a cell twice.

use crate::grid::Grid;

/// Neighbour offsets in search order: right, left, up, down
const STEPS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, -1), (0, 1)];

/// Cells already on the current path
struct Visited {
    marks: Vec<bool>,
}

impl Visited {
    fn new(grid: &Grid) -> Self {
        Self {
            marks: vec![false; grid.width * grid.height],
        }
    }
}

/// One cell on the current path and the next step to try from it
struct Frame {
    x: i32,
    y: i32,
    step: usize,
}

/// Depth-first search state for one word
struct Search<'a> {
    grid: &'a Grid,
    word: &'a [char],
    visited: Visited,
}

impl<'a> Search<'a> {
    /// Look for a path starting at `(x, y)`, which must hold `word[0]`.
    ///
    /// The path lives on an explicit stack so its length is bounded by the
    /// grid size rather than the call stack. Every cell is unmarked again
    /// before returning.
    fn start_at(&mut self, x: i32, y: i32) -> bool {
        if self.word.len() == 1 {
            return true;
        }

        let mut path = vec![Frame { x, y, step: 0 }];
        self.visited.marks[self.grid.index(x, y)] = true;

        while let Some(top) = path.last_mut() {
            let Some(&(dx, dy)) = STEPS.get(top.step) else {
                // Every neighbour tried: step back
                self.visited.marks[self.grid.index(top.x, top.y)] = false;
                path.pop();
                continue;
            };
            top.step += 1;
            let (nx, ny) = (top.x + dx, top.y + dy);

            // `path` spells `word[..path.len()]`
            let next = self.word[path.len()];
            if self.grid.cell(nx, ny) != Some(next)
                || self.visited.marks[self.grid.index(nx, ny)]
            {
                continue;
            }

            if path.len() + 1 == self.word.len() {
                for frame in &path {
                    self.visited.marks[self.grid.index(frame.x, frame.y)] = false;
                }
                return true;
            }

            self.visited.marks[self.grid.index(nx, ny)] = true;
            path.push(Frame { x: nx, y: ny, step: 0 });
        }

        false
    }
}

impl Grid {
    /// True if `word` can be traced through the grid as a self-avoiding
    /// path of horizontally or vertically adjacent cells.
    ///
    /// Matching is case-sensitive and does not wrap around the edges. The
    /// empty word is never found.
    pub fn contains_snaking_word(&self, word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();
        let Some(&first) = chars.first() else {
            return false;
        };
        if chars.len() > self.width * self.height {
            return false;
        }

        let mut search = Search {
            grid: self,
            word: &chars,
            visited: Visited::new(self),
        };

        let found = self
            .iter()
            .filter(|&(_, _, c)| c == first)
            .any(|(x, y, _)| search.start_at(x, y));

        tracing::debug!(word, found, "snaking search");
        found
    }
}
