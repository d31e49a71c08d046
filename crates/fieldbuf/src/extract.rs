//! Substring extraction.

use crate::buffer::{FieldBuffer, floor_boundary};

impl FieldBuffer {
    /// The first `n` bytes, clamped to the content length and to a
    /// character boundary.
    pub fn prefix(&self, n: usize) -> &str {
        &self.content[..floor_boundary(&self.content, n)]
    }

    /// Everything from byte offset `n` to the end, clamped likewise.
    pub fn suffix(&self, n: usize) -> &str {
        &self.content[floor_boundary(&self.content, n)..]
    }

    /// Everything strictly left of the first occurrence of `c`, or `None`
    /// when `c` is absent.
    pub fn left_of_first(&self, c: char) -> Option<&str> {
        self.content.find(c).map(|i| &self.content[..i])
    }

    /// Everything strictly left of the last occurrence of `c`.
    pub fn left_of_last(&self, c: char) -> Option<&str> {
        self.content.rfind(c).map(|i| &self.content[..i])
    }

    /// Everything strictly right of the last occurrence of `c`.
    pub fn right_of_last(&self, c: char) -> Option<&str> {
        self.content
            .rfind(c)
            .map(|i| &self.content[i + c.len_utf8()..])
    }

    /// The 1-based byte position of the first occurrence of `c`, or `None`
    /// when absent.
    pub fn first_occurrence(&self, c: char) -> Option<usize> {
        self.content.find(c).map(|i| i + 1)
    }
}
