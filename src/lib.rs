//! Small puzzles over text and character grids.
//!
//! The two main entry points work on ASCII grids:
//!
//! - [`decompose_figure`] breaks a figure drawn with `+`, `-` and `|` into
//!   the elementary rectangles it is made of.
//! - [`word_exists_in_snaking_grid`] checks whether a word can be read along
//!   a self-avoiding path of horizontally or vertically adjacent cells.
//!
//! Both reject grids whose rows differ in length with a [`GridError`].
//!
//! # Example
//!
//! ```rust
//! let figure = "+---+--+\n|   |  |\n+---+--+";
//! let mut parts: Vec<String> = asciikata::decompose_figure(figure).unwrap().collect();
//! parts.sort();
//! assert_eq!(parts, vec!["+--+\n|  |\n+--+\n", "+---+\n|   |\n+---+\n"]);
//!
//! let grid = ["ANGULAR", "REDNCAE", "RFIDTCL", "AGNEGSA", "YTIRTSP"];
//! assert!(asciikata::word_exists_in_snaking_grid(grid, "REACT").unwrap());
//! ```
//!
//! The crate also carries a handful of smaller text katas: brace
//! expansion, zig-zag matrices, seven-segment account numbers, word
//! wrapping, poker hands and permutations.

mod braces;
mod chars;
mod decompose;
mod error;
mod finder;
mod grid;
mod ocr;
mod permute;
mod poker;
mod rect;
mod snake;
mod wrap;
mod zigzag;

pub use braces::{expand_braces, BraceExpansion};
pub use chars::Glyphs;
pub use decompose::{decompose_figure_with, DecomposeOptions, Rectangles};
pub use error::GridError;
pub use finder::find_rectangles;
pub use grid::Grid;
pub use ocr::{parse_bank_account, OcrError, ACCOUNT_DIGITS};
pub use permute::{permutations, Permutations};
pub use poker::{poker_hand_rank, Card, CardError, PokerRank, Suit};
pub use rect::{HorizontalEdge, Junction, Rectangle, RectangleSet};
pub use wrap::{wrap_text, WrapText};
pub use zigzag::zigzag_matrix;

/// Break an ASCII figure into its elementary rectangles.
///
/// Each item is one rectangle redrawn on its own. The order carries no
/// meaning. A figure without corner markers yields nothing.
pub fn decompose_figure(figure: &str) -> Result<Rectangles, GridError> {
    decompose_figure_with(figure, &DecomposeOptions::default())
}

/// Check whether `word` can be traced through `rows` as a snake.
///
/// See [`Grid::contains_snaking_word`] for the matching rules.
pub fn word_exists_in_snaking_grid<I, S>(rows: I, word: &str) -> Result<bool, GridError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let grid = Grid::from_rows(rows)?;
    Ok(grid.contains_snaking_word(word))
}
