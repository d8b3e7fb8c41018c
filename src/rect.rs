//! Geometry of decomposed figures: junctions, edges and rectangles.
//!
//! All coordinates are grid cells, with `y` growing downwards.

use std::collections::HashSet;
use std::fmt::Write;

use crate::chars::{Glyphs, BLANK};

/// A corner marker position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Junction {
    pub x: i32,
    pub y: i32,
}

impl Junction {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Two junctions on the same row joined by an unbroken horizontal run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HorizontalEdge {
    pub left: Junction,
    pub right: Junction,
}

impl HorizontalEdge {
    pub fn new(left: Junction, right: Junction) -> Self {
        debug_assert_eq!(left.y, right.y);
        debug_assert!(left.x < right.x);
        Self { left, right }
    }

    pub fn y(&self) -> i32 {
        self.left.y
    }

    /// True if `other` spans exactly the same columns
    pub fn is_aligned_with(&self, other: &HorizontalEdge) -> bool {
        self.left.x == other.left.x && self.right.x == other.right.x
    }
}

/// A rectangle bounded by a top and a bottom edge.
///
/// Width and height count the border cells, so the smallest possible
/// rectangle (`++` over `++`) is 2×2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    pub top: HorizontalEdge,
    pub bottom: HorizontalEdge,
}

impl Rectangle {
    pub fn new(top: HorizontalEdge, bottom: HorizontalEdge) -> Self {
        debug_assert!(top.y() < bottom.y());
        debug_assert!(top.is_aligned_with(&bottom));
        Self { top, bottom }
    }

    pub fn left(&self) -> i32 {
        self.top.left.x
    }

    pub fn right(&self) -> i32 {
        self.top.right.x
    }

    pub fn top_y(&self) -> i32 {
        self.top.y()
    }

    pub fn bottom_y(&self) -> i32 {
        self.bottom.y()
    }

    pub fn width(&self) -> usize {
        (self.right() - self.left() + 1) as usize
    }

    pub fn height(&self) -> usize {
        (self.bottom_y() - self.top_y() + 1) as usize
    }

    /// Draw the rectangle on its own, every line terminated by `\n`
    pub fn render(&self, glyphs: &Glyphs) -> String {
        let inner = self.width() - 2;

        let mut border = String::with_capacity(self.width() + 1);
        border.push(glyphs.corner);
        border.extend(std::iter::repeat(glyphs.horizontal).take(inner));
        border.push(glyphs.corner);
        border.push('\n');

        let mut side = String::with_capacity(self.width() + 1);
        side.push(glyphs.vertical);
        side.extend(std::iter::repeat(BLANK).take(inner));
        side.push(glyphs.vertical);
        side.push('\n');

        let mut result = String::with_capacity(border.len() * self.height());
        result.push_str(&border);
        for _ in 0..self.height() - 2 {
            result.push_str(&side);
        }
        result.push_str(&border);
        result
    }
}

/// Rectangles in discovery order
#[derive(Debug, Default)]
pub struct RectangleSet {
    rects: Vec<Rectangle>,
    seen: HashSet<Rectangle>,
}

impl RectangleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `rect` unless an identical rectangle is already in the set
    pub fn insert(&mut self, rect: Rectangle) {
        if self.seen.insert(rect) {
            self.rects.push(rect);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rectangle> {
        self.rects.iter()
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Human-readable listing, one `x,y WxH` line per rectangle
    pub fn summary(&self) -> String {
        let mut result = String::new();
        for r in &self.rects {
            let _ = writeln!(
                result,
                "{},{} {}x{}",
                r.left(),
                r.top_y(),
                r.width(),
                r.height()
            );
        }
        result
    }
}

impl IntoIterator for RectangleSet {
    type Item = Rectangle;
    type IntoIter = std::vec::IntoIter<Rectangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.rects.into_iter()
    }
}
