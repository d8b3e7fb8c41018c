//! Greedy word wrapping.

use std::iter::Peekable;
use std::str::SplitWhitespace;

/// Lines of wrapped text, produced on demand
#[derive(Debug, Clone)]
pub struct WrapText<'a> {
    words: Peekable<SplitWhitespace<'a>>,
    columns: usize,
}

impl<'a> Iterator for WrapText<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let first = self.words.next()?;
        let mut line = first.to_string();
        let mut len = first.chars().count();

        while let Some(word) = self.words.peek() {
            let word_len = word.chars().count();
            if len + 1 + word_len > self.columns {
                break;
            }
            line.push(' ');
            line.push_str(word);
            len += 1 + word_len;
            self.words.next();
        }
        Some(line)
    }
}

/// Break `text` at whitespace so that no line is longer than `columns`.
///
/// Runs of whitespace collapse to one space. A word longer than `columns`
/// gets a line of its own rather than being split.
pub fn wrap_text(text: &str, columns: usize) -> WrapText<'_> {
    WrapText {
        words: text.split_whitespace().peekable(),
        columns,
    }
}
