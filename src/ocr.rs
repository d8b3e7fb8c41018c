//! Bank account numbers drawn as seven-segment digits.
//!
//! Each account is three lines of 27 columns holding nine 3×3 digits made of
//! pipes and underscores:
//!
//! ```text
//!     _  _     _  _  _  _  _
//!   | _| _||_||_ |_   ||_||_|
//!   ||_  _|  | _||_|  ||_| _|
//! ```

use thiserror::Error;

/// Digits in an account number
pub const ACCOUNT_DIGITS: usize = 9;

/// Width of one digit cell
const DIGIT_WIDTH: usize = 3;

/// Digit glyphs, top row then middle row then bottom row, indexed by value
const DIGITS: [&str; 10] = [
    " _ | ||_|",
    "     |  |",
    " _  _||_ ",
    " _  _| _|",
    "   |_|  |",
    " _ |_  _|",
    " _ |_ |_|",
    " _   |  |",
    " _ |_||_|",
    " _ |_| _|",
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OcrError {
    #[error("expected 3 lines of at least {width} columns")]
    Shape { width: usize },

    #[error("unrecognised digit at position {position}")]
    Digit { position: usize },
}

/// Parse a scanned account number
pub fn parse_bank_account(scan: &str) -> Result<u32, OcrError> {
    let width = ACCOUNT_DIGITS * DIGIT_WIDTH;
    let lines: Vec<Vec<char>> = scan.lines().take(3).map(|l| l.chars().collect()).collect();
    if lines.len() < 3 || lines.iter().any(|l| l.len() < width) {
        return Err(OcrError::Shape { width });
    }

    let mut account = 0u32;
    for position in 0..ACCOUNT_DIGITS {
        let x = position * DIGIT_WIDTH;
        let glyph: String = lines
            .iter()
            .flat_map(|l| l[x..x + DIGIT_WIDTH].iter())
            .collect();
        let digit = DIGITS
            .iter()
            .position(|d| *d == glyph)
            .ok_or(OcrError::Digit { position })?;
        account = account * 10 + digit as u32;
    }
    Ok(account)
}
