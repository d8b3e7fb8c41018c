use std::collections::HashSet;

use asciikata::{decompose_figure, permutations, wrap_text, zigzag_matrix, Glyphs, Grid, Rectangle};
use proptest::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

/// Draw a table with the given column widths and row heights (both
/// measured between borders, border excluded)
fn draw_table(widths: &[usize], heights: &[usize]) -> String {
    let mut border = String::from("+");
    let mut side = String::from("|");
    for &w in widths {
        border.push_str(&"-".repeat(w));
        border.push('+');
        side.push_str(&" ".repeat(w));
        side.push('|');
    }

    let mut figure = border.clone();
    figure.push('\n');
    for &h in heights {
        for _ in 0..h {
            figure.push_str(&side);
            figure.push('\n');
        }
        figure.push_str(&border);
        figure.push('\n');
    }
    figure
}

/// Overlay rectangles onto a blank canvas; corners win over edges
fn recompose(shapes: &[Rectangle], width: usize, height: usize) -> String {
    let mut canvas = vec![vec![' '; width]; height];
    for shape in shapes {
        let drawing = shape.render(&Glyphs::default());
        for (dy, line) in drawing.lines().enumerate() {
            for (dx, c) in line.chars().enumerate() {
                let cell = &mut canvas[shape.top_y() as usize + dy][shape.left() as usize + dx];
                if c != ' ' && *cell != '+' {
                    *cell = c;
                }
            }
        }
    }
    let mut out = String::new();
    for row in canvas {
        out.extend(row);
        out.push('\n');
    }
    out
}

/// Reference search: enumerate simple paths with an explicit visited set
fn brute_force_contains(rows: &[String], word: &str) -> bool {
    fn walk(
        cells: &[Vec<char>],
        word: &[char],
        pos: (usize, usize),
        visited: &mut HashSet<(usize, usize)>,
    ) -> bool {
        if visited.len() == word.len() {
            return true;
        }
        let (x, y) = pos;
        let mut neighbours = Vec::new();
        if x + 1 < cells[0].len() {
            neighbours.push((x + 1, y));
        }
        if x > 0 {
            neighbours.push((x - 1, y));
        }
        if y > 0 {
            neighbours.push((x, y - 1));
        }
        if y + 1 < cells.len() {
            neighbours.push((x, y + 1));
        }
        for n in neighbours {
            if !visited.contains(&n) && cells[n.1][n.0] == word[visited.len()] {
                visited.insert(n);
                if walk(cells, word, n, visited) {
                    return true;
                }
                visited.remove(&n);
            }
        }
        false
    }

    let cells: Vec<Vec<char>> = rows.iter().map(|r| r.chars().collect()).collect();
    let word: Vec<char> = word.chars().collect();
    if word.is_empty() {
        return false;
    }
    for (y, row) in cells.iter().enumerate() {
        for (x, &c) in row.iter().enumerate() {
            if c == word[0] {
                let mut visited = HashSet::from([(x, y)]);
                if walk(&cells, &word, (x, y), &mut visited) {
                    return true;
                }
            }
        }
    }
    false
}

fn small_grid() -> impl Strategy<Value = Vec<String>> {
    (1usize..=4, 1usize..=4).prop_flat_map(|(w, h)| {
        prop::collection::vec(
            prop::collection::vec(prop::sample::select(vec!['A', 'B', 'C']), w)
                .prop_map(|row| row.into_iter().collect::<String>()),
            h,
        )
    })
}

/// Decompose `figure`, check the shape count and that drawing the shapes
/// back over each other gives the figure again
fn assert_recomposes(figure: &str, count: usize) {
    init_tracing();
    let shapes = decompose_figure(figure).unwrap().into_shapes();
    assert_eq!(shapes.len(), count);
    let width = figure.lines().next().map_or(0, str::len);
    let height = figure.lines().count();
    assert_eq!(recompose(&shapes, width, height), figure);
}

#[test]
fn test_table_reconstructs() {
    assert_recomposes(&draw_table(&[3, 1, 5], &[2, 1]), 6);
}

#[test]
fn test_box_on_top_reconstructs() {
    let figure = concat!(
        "   +-----+     \n",
        "   |     |     \n",
        "+--+-----+----+\n",
        "|             |\n",
        "|             |\n",
        "+-------------+\n",
    );
    assert_recomposes(figure, 2);
}

#[test]
fn test_uneven_split_reconstructs() {
    let figure = concat!(
        "+------------+\n",
        "|            |\n",
        "+------+-----+\n",
        "|      |     |\n",
        "+------+-----+\n",
    );
    assert_recomposes(figure, 3);
}

#[test]
fn test_offset_columns_reconstruct() {
    // Column splits of the two bands do not line up
    let figure = concat!(
        "+---+------+\n",
        "|   |      |\n",
        "+---+--+---+\n",
        "|      |   |\n",
        "+------+---+\n",
    );
    assert_recomposes(figure, 4);
}

proptest! {
    #[test]
    fn single_rectangle_is_found_once(
        w in 2usize..12,
        h in 2usize..10,
        left in 0usize..4,
        top in 0usize..4,
        right in 0usize..4,
        bottom in 0usize..4,
    ) {
        let inner = "+".to_string() + &"-".repeat(w - 2) + "+";
        let side = "|".to_string() + &" ".repeat(w - 2) + "|";
        let total = left + w + right;
        let pad = |s: &str| format!("{}{}{}", " ".repeat(left), s, " ".repeat(right));

        let mut rows = vec![" ".repeat(total); top];
        rows.push(pad(&inner));
        rows.extend(std::iter::repeat(pad(&side)).take(h - 2));
        rows.push(pad(&inner));
        rows.extend(std::iter::repeat(" ".repeat(total)).take(bottom));

        let parts: Vec<String> = decompose_figure(&rows.join("\n")).unwrap().collect();
        prop_assert_eq!(parts.len(), 1);
        let lines: Vec<&str> = parts[0].lines().collect();
        prop_assert_eq!(lines.len(), h);
        prop_assert!(lines.iter().all(|l| l.len() == w));
    }

    #[test]
    fn figures_without_corners_are_empty(
        rows in (1usize..8).prop_flat_map(|w| prop::collection::vec(
            prop::collection::vec(prop::sample::select(vec!['-', '|', ' ']), w)
                .prop_map(|r| r.into_iter().collect::<String>()),
            1..8,
        ))
    ) {
        prop_assert_eq!(decompose_figure(&rows.join("\n")).unwrap().count(), 0);
    }

    #[test]
    fn tables_decompose_into_cells(
        widths in prop::collection::vec(1usize..5, 1..4),
        heights in prop::collection::vec(1usize..4, 1..4),
    ) {
        let figure = draw_table(&widths, &heights);
        let shapes = decompose_figure(&figure).unwrap().into_shapes();
        prop_assert_eq!(shapes.len(), widths.len() * heights.len());

        let width = figure.lines().next().map_or(0, str::len);
        let height = figure.lines().count();
        prop_assert_eq!(recompose(&shapes, width, height), figure);
    }

    #[test]
    fn snaking_search_matches_reference(
        rows in small_grid(),
        word in "[ABC]{1,6}",
    ) {
        let grid = Grid::from_rows(&rows).unwrap();
        let before = grid.clone();
        prop_assert_eq!(
            grid.contains_snaking_word(&word),
            brute_force_contains(&rows, &word)
        );
        prop_assert_eq!(grid, before);
    }

    #[test]
    fn permutation_count_is_factorial(n in 0usize..7) {
        let chars: String = ('a'..='z').take(n).collect();
        let all: HashSet<String> = permutations(&chars).collect();
        let factorial: usize = (1..=n).product();
        prop_assert_eq!(all.len(), factorial);
    }

    #[test]
    fn zigzag_covers_every_index(n in 0usize..12) {
        let mut seen: Vec<usize> = zigzag_matrix(n).into_iter().flatten().collect();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..n * n).collect::<Vec<_>>());
    }

    #[test]
    fn wrapped_lines_fit(
        words in prop::collection::vec("[a-z]{1,8}", 0..20),
        columns in 1usize..30,
    ) {
        let text = words.join(" ");
        let lines: Vec<String> = wrap_text(&text, columns).collect();
        for line in &lines {
            prop_assert!(line.len() <= columns || !line.contains(' '));
        }
        let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split(' ')).collect();
        prop_assert_eq!(rejoined, words.iter().map(String::as_str).collect::<Vec<_>>());
    }
}
