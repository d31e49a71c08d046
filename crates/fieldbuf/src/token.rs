//! Generic separator-delimited tokenizer.
//!
//! Stateful iteration in the shape of `strtok`: runs of separators collapse,
//! leading separators are skipped, and the cursor survives across calls
//! until a mutation restarts it. Tokens borrow the buffer; the sequence for
//! a given content epoch is finite and non-restartable.

use alloc::string::String;

use crate::{buffer::FieldBuffer, numeric};

impl FieldBuffer {
    /// Installs the default separator set used by [`next_token`](Self::next_token).
    pub fn set_separator(&mut self, separators: &str) {
        self.separator = Some(String::from(separators));
    }

    /// Returns the next token, splitting on the stored separator preference,
    /// or on a single space when none is set. `None` once the content is
    /// exhausted, and on every later call until a mutation.
    pub fn next_token(&mut self) -> Option<&str> {
        let from = self.tok_cursor.unwrap_or(0);
        let separators = self.separator.as_deref().unwrap_or(" ");
        let (start, end, next) = scan(&self.content, from, separators)?;
        self.tok_cursor = Some(next);
        Some(&self.content[start..end])
    }

    /// Returns the next token, splitting on the given separator set for this
    /// call only.
    pub fn next_token_with(&mut self, separators: &str) -> Option<&str> {
        let from = self.tok_cursor.unwrap_or(0);
        let (start, end, next) = scan(&self.content, from, separators)?;
        self.tok_cursor = Some(next);
        Some(&self.content[start..end])
    }

    /// Takes the next token and parses its leading digits as an integer.
    /// `None` when no token remains or the token does not begin with an
    /// integer literal.
    pub fn read_token_int(&mut self) -> Option<i32> {
        let token = self.next_token()?;
        numeric::parse_int_prefix(token)
    }

    /// Takes the next token and parses its leading characters as a real.
    /// With `skip_if_trailing_comment`, a token beginning `//` produces
    /// `None` so callers can stop at an end-of-line comment.
    pub fn read_token_real(&mut self, skip_if_trailing_comment: bool) -> Option<f64> {
        let token = self.next_token()?;
        if skip_if_trailing_comment && token.starts_with("//") {
            return None;
        }
        numeric::parse_real_prefix(token)
    }
}

/// Token bounds from `from` under the given separator set: `(start, end,
/// next_cursor)`. Separators are single ASCII bytes, so the bounds always
/// land on character boundaries.
fn scan(content: &str, from: usize, separators: &str) -> Option<(usize, usize, usize)> {
    let bytes = content.as_bytes();
    let seps = separators.as_bytes();
    let is_sep = |b: u8| seps.contains(&b);

    let mut start = from;
    while start < bytes.len() && is_sep(bytes[start]) {
        start += 1;
    }
    if start >= bytes.len() {
        return None;
    }
    let mut end = start;
    while end < bytes.len() && !is_sep(bytes[end]) {
        end += 1;
    }
    // Step past the terminating separator, as strtok does.
    let next = if end < bytes.len() { end + 1 } else { end };
    Some((start, end, next))
}
