//! Comparisons and line classification.
//!
//! Prefix comparisons work on bytes with a `strncmp`-shaped contract: the
//! first `n` bytes must match, and a limit longer than either operand
//! degrades to whole-string equality. An empty buffer compares equal only to
//! the empty string.

use crate::buffer::FieldBuffer;

impl FieldBuffer {
    /// Whole-content equality, ignoring ASCII case.
    pub fn eq_ignore_case(&self, other: &str) -> bool {
        if self.content.is_empty() {
            return other.is_empty();
        }
        self.content.eq_ignore_ascii_case(other)
    }

    /// First-`n`-bytes equality, ignoring ASCII case.
    pub fn eq_ignore_case_prefix(&self, other: &str, n: usize) -> bool {
        if self.content.is_empty() {
            return other.is_empty();
        }
        let a = self.content.as_bytes();
        let b = other.as_bytes();
        if a.len() >= n && b.len() >= n {
            a[..n].eq_ignore_ascii_case(&b[..n])
        } else {
            a.eq_ignore_ascii_case(b)
        }
    }

    /// Whole-content equality, case-sensitive.
    pub fn eq_case(&self, other: &str) -> bool {
        if self.content.is_empty() {
            return other.is_empty();
        }
        self.content == other
    }

    /// First-`n`-bytes equality, case-sensitive.
    pub fn eq_case_prefix(&self, other: &str, n: usize) -> bool {
        if self.content.is_empty() {
            return other.is_empty();
        }
        let a = self.content.as_bytes();
        let b = other.as_bytes();
        if a.len() >= n && b.len() >= n {
            a[..n] == b[..n]
        } else {
            a == b
        }
    }

    /// Does the buffer start with `other`, ignoring ASCII case? The prefix
    /// length is taken from `other`, so trailing buffer content is ignored.
    pub fn starts_with_ignore_case(&self, other: &str) -> bool {
        if self.content.is_empty() {
            return other.is_empty();
        }
        if other.is_empty() {
            return false;
        }
        let n = other.len();
        let a = self.content.as_bytes();
        a.len() >= n && a[..n].eq_ignore_ascii_case(other.as_bytes())
    }

    /// Like [`starts_with_ignore_case`](Self::starts_with_ignore_case), but
    /// the buffer's leading spaces are skipped first.
    pub fn starts_with_after_blanks(&self, other: &str) -> bool {
        let rest = self.content.trim_start_matches(' ');
        let n = other.len();
        rest.len() >= n && rest.as_bytes()[..n].eq_ignore_ascii_case(other.as_bytes())
    }

    /// Is this line empty or a comment? Comment lines begin with `\` or
    /// `//`; with `skip_continuation`, a `#` continuation line also counts.
    pub fn is_comment_or_blank(&self, skip_continuation: bool) -> bool {
        self.content.is_empty()
            || self.starts_with_ignore_case("\\")
            || self.starts_with_ignore_case("//")
            || (skip_continuation && self.starts_with_ignore_case("#"))
    }

    /// Is every character a space? Vacuously true when empty.
    pub fn is_all_blank(&self) -> bool {
        self.content.bytes().all(|b| b == b' ')
    }
}
