//! Owned line buffer and its mutators.
//!
//! Every mutator restarts the generic tokenizer; `assign` and `clear` also
//! rewind the column cursor and demote the field width, since both are
//! per-record state.

use alloc::string::String;
use core::fmt;

use crate::bulk::{FieldDialect, FieldWidth};

/// One line of an input deck, tokenized in place.
#[derive(Debug, Clone, Default)]
pub struct FieldBuffer {
    pub(crate) content: String,
    /// Generic-tokenizer cursor. `None` means fresh: no token has been taken
    /// from this content since the last mutation.
    pub(crate) tok_cursor: Option<usize>,
    pub(crate) separator: Option<String>,
    pub(crate) column_cursor: usize,
    pub(crate) width: FieldWidth,
    pub(crate) dialect: FieldDialect,
    /// Reusable accumulator for column-dialect fields; the comma dialect
    /// consumes the region a field came from, so fields are materialized
    /// here before being handed out.
    pub(crate) scratch: String,
}

impl FieldBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Replaces the content with `text` and restarts all tokenization state.
    pub fn assign(&mut self, text: &str) {
        self.content.clear();
        self.content.push_str(text);
        self.reset_record_state();
    }

    /// Replaces the content with the first `count` bytes of `text`, clamped
    /// to the source length and to a character boundary.
    pub fn assign_prefix(&mut self, text: &str, count: usize) {
        let end = floor_boundary(text, count);
        self.content.clear();
        self.content.push_str(&text[..end]);
        self.reset_record_state();
    }

    /// Concatenates `text` onto the content. On an empty buffer this is
    /// exactly [`assign`](Self::assign). The prior content is preserved
    /// byte-for-byte.
    pub fn append(&mut self, text: &str) {
        if self.content.is_empty() {
            self.assign(text);
            return;
        }
        self.content.push_str(text);
        self.tok_cursor = None;
    }

    /// Concatenates the first `count` bytes of `text`.
    pub fn append_prefix(&mut self, text: &str, count: usize) {
        let end = floor_boundary(text, count);
        self.append(&text[..end]);
    }

    /// Releases the content and resets all tokenization state.
    pub fn clear(&mut self) {
        self.content = String::new();
        self.reset_record_state();
    }

    /// Cuts the content to its first `at` bytes, clamped to a character
    /// boundary. Restarts the generic tokenizer.
    pub fn truncate(&mut self, at: usize) {
        let at = floor_boundary(&self.content, at);
        self.content.truncate(at);
        self.tok_cursor = None;
    }

    fn reset_record_state(&mut self) {
        self.tok_cursor = None;
        self.column_cursor = 0;
        self.width = FieldWidth::Single;
    }
}

impl From<&str> for FieldBuffer {
    fn from(text: &str) -> Self {
        let mut buf = Self::new();
        buf.assign(text);
        buf
    }
}

impl fmt::Display for FieldBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

impl PartialEq<&str> for FieldBuffer {
    fn eq(&self, other: &&str) -> bool {
        self.content == *other
    }
}

/// Largest character boundary not exceeding `at`. Bulk-data records are
/// ASCII, where this is the identity; a mid-character offset from other
/// input degrades to the previous boundary instead of panicking.
pub(crate) fn floor_boundary(s: &str, at: usize) -> usize {
    if at >= s.len() {
        return s.len();
    }
    let mut at = at;
    while at > 0 && !s.is_char_boundary(at) {
        at -= 1;
    }
    at
}
