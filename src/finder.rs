//! Rectangle finding.
//!
//! The scan runs in three passes over the grid: collect corner markers,
//! join corners on the same row into horizontal edges, then pair vertically
//! aligned edges into rectangles whose border and interior check out.

use std::collections::HashMap;

use crate::chars::{is_blank, Glyphs};
use crate::grid::Grid;
use crate::rect::*;

/// Find every elementary rectangle in the grid
pub fn find_rectangles(grid: &Grid, glyphs: &Glyphs, rects: &mut RectangleSet) {
    let junctions = find_junctions(grid, glyphs);
    let edges = find_horizontal_edges(grid, glyphs, &junctions);

    tracing::debug!(
        junctions = junctions.iter().map(Vec::len).sum::<usize>(),
        edges = edges.len(),
        "scanned figure"
    );

    pair_edges(grid, glyphs, &edges, rects);

    tracing::debug!(rectangles = rects.len(), "decomposed figure");
}

// ============================================================================
// Junctions and edges
// ============================================================================

/// Corner markers grouped by row, each row ordered left to right
pub fn find_junctions(grid: &Grid, glyphs: &Glyphs) -> Vec<Vec<Junction>> {
    let mut rows = vec![Vec::new(); grid.height];
    for (x, y, c) in grid.iter() {
        if glyphs.is_corner(c) {
            rows[y as usize].push(Junction::new(x, y));
        }
    }
    rows
}

/// Check that every cell from `left` to `right` on their row belongs to a
/// horizontal edge
fn is_h_run(grid: &Grid, glyphs: &Glyphs, left: Junction, right: Junction) -> bool {
    (left.x..=right.x).all(|x| glyphs.is_h_edge(grid.get(x, left.y)))
}

/// Every pair of same-row junctions joined by an unbroken horizontal run.
///
/// Edges come out in row-major order of their left junction, then of their
/// right junction.
pub fn find_horizontal_edges(
    grid: &Grid,
    glyphs: &Glyphs,
    junctions: &[Vec<Junction>],
) -> Vec<HorizontalEdge> {
    let mut edges = Vec::new();
    for row in junctions {
        for (i, &left) in row.iter().enumerate() {
            for &right in &row[i + 1..] {
                if is_h_run(grid, glyphs, left, right) {
                    edges.push(HorizontalEdge::new(left, right));
                }
            }
        }
    }
    edges
}

// ============================================================================
// Rectangles
// ============================================================================

fn pair_edges(
    grid: &Grid,
    glyphs: &Glyphs,
    edges: &[HorizontalEdge],
    rects: &mut RectangleSet,
) {
    // Only edges spanning the same columns can bound a rectangle
    let mut by_span: HashMap<(i32, i32), Vec<HorizontalEdge>> = HashMap::new();
    for edge in edges {
        by_span
            .entry((edge.left.x, edge.right.x))
            .or_default()
            .push(*edge);
    }

    for top in edges {
        let Some(column) = by_span.get(&(top.left.x, top.right.x)) else {
            continue;
        };
        for bottom in column.iter().filter(|b| b.y() > top.y()) {
            if is_rectangle(grid, glyphs, top, bottom) {
                rects.insert(Rectangle::new(*top, *bottom));
            } else {
                tracing::trace!(
                    x = top.left.x,
                    top = top.y(),
                    bottom = bottom.y(),
                    "rejected candidate"
                );
            }
        }
    }
}

/// Acceptance test for a candidate bounded by two aligned edges
fn is_rectangle(
    grid: &Grid,
    glyphs: &Glyphs,
    top: &HorizontalEdge,
    bottom: &HorizontalEdge,
) -> bool {
    if !top.is_aligned_with(bottom) {
        return false;
    }

    let left_x = top.left.x;
    let right_x = top.right.x;
    let top_y = top.y();
    let bottom_y = bottom.y();

    // A column with corners on both edges is a divider unless a gap breaks it
    for x in left_x + 1..right_x {
        if glyphs.is_corner(grid.get(x, top_y))
            && glyphs.is_corner(grid.get(x, bottom_y))
            && !(top_y + 1..bottom_y).any(|y| is_blank(grid.get(x, y)))
        {
            return false;
        }
    }

    for y in top_y + 1..bottom_y {
        let left = grid.get(left_x, y);
        let right = grid.get(right_x, y);
        if !glyphs.is_v_edge(left) || !glyphs.is_v_edge(right) {
            return false;
        }
        if !(left_x + 1..right_x).all(|x| is_blank(grid.get(x, y))) {
            return false;
        }
    }

    true
}
