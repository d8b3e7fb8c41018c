//! Shell-style brace expansion.
//!
//! `a{b,c}d` expands to `abd` and `acd`. Groups nest, and an empty
//! alternative is allowed (`file{,.bak}`). A `{` without a closing `}` is
//! kept as literal text.

/// Lazy expansion of every brace group in a string.
///
/// Alternatives are produced depth-first, leftmost alternative first, so
/// `{a,b}{1,2}` yields `a1 a2 b1 b2`. Duplicates are kept.
#[derive(Debug, Clone)]
pub struct BraceExpansion {
    pending: Vec<String>,
}

impl Iterator for BraceExpansion {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some(s) = self.pending.pop() {
            let Some((open, close)) = first_group(&s) else {
                return Some(s);
            };
            let (head, tail) = (&s[..open], &s[close + 1..]);
            let alternatives = split_top_level(&s[open + 1..close]);
            // Reversed so the leftmost alternative is popped first
            for alt in alternatives.into_iter().rev() {
                self.pending.push(format!("{head}{alt}{tail}"));
            }
        }
        None
    }
}

/// Expand all brace groups in `s`
pub fn expand_braces(s: &str) -> BraceExpansion {
    BraceExpansion {
        pending: vec![s.to_string()],
    }
}

/// Byte offsets of the first `{` that has a matching `}`, and of that `}`.
///
/// A `{` that is never closed is skipped and stays in the output as text.
fn first_group(s: &str) -> Option<(usize, usize)> {
    s.match_indices('{')
        .find_map(|(open, _)| matching_close(s, open).map(|close| (open, close)))
}

/// Byte offset of the `}` closing the `{` at `open`
fn matching_close(s: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in s[open + 1..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' if depth == 0 => return Some(open + 1 + i),
            '}' => depth -= 1,
            _ => {}
        }
    }
    None
}

/// Split on commas that are not inside a nested group
fn split_top_level(body: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in body.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&body[start..]);
    parts
}
