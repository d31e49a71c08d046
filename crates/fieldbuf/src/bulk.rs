//! Column-dialect tokenizer for bulk-data records.
//!
//! A bulk-data record carries its fields either in fixed-width columns or
//! comma-delimited. The two dialects share one entry point, [`FieldBuffer::next_field`],
//! and differ in how they consume the record:
//!
//! - **Fixed width**: fields are 8 columns, or 16 after a record is promoted
//!   to the large-field form by a `*` in its leading columns. The first
//!   field is always 8 wide regardless of promotion. The column cursor
//!   advances by the full width even when the record ends mid-field, so a
//!   record of length `L` yields `ceil(L / w)` fields with a short last one.
//! - **Comma delimited**: each field runs up to the next comma, and field
//!   plus comma are removed from the record as it is taken. `,,` yields an
//!   empty field; a record with no remaining comma yields its tail once and
//!   is then exhausted.
//!
//! Fields are materialized in the scratch buffer because the comma dialect
//! destroys the region they came from.

use alloc::string::String;

use bstr::ByteSlice;

use crate::{
    buffer::{FieldBuffer, floor_boundary},
    numeric,
};

/// How a bulk-data record carries its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldDialect {
    #[default]
    FixedWidth,
    CommaDelimited,
}

/// Column width of a fixed-width field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldWidth {
    /// Small-field form, 8 columns.
    #[default]
    Single,
    /// Large-field form, 16 columns.
    Large,
}

impl FieldWidth {
    pub fn columns(self) -> usize {
        match self {
            Self::Single => 8,
            Self::Large => 16,
        }
    }
}

impl FieldBuffer {
    /// Selects the dialect for this record.
    pub fn set_dialect(&mut self, dialect: FieldDialect) {
        self.dialect = dialect;
    }

    pub fn dialect(&self) -> FieldDialect {
        self.dialect
    }

    pub fn field_width(&self) -> FieldWidth {
        self.width
    }

    /// Promotes this record to the large-field form when a `*` marker
    /// appears in its leading columns. One-shot and one-way: once promoted,
    /// the record stays promoted. Only fields after the first widen.
    ///
    /// The marker position is the 1-based result of
    /// [`first_occurrence`](Self::first_occurrence), and a marker in the
    /// eighth column does not promote.
    pub fn check_large_field(&mut self) {
        if let Some(position) = self.first_occurrence('*') {
            if position < 8 {
                self.width = FieldWidth::Large;
            }
        }
    }

    /// Width of the field at the current column cursor. The first field of
    /// a record is always 8 columns, even after promotion.
    fn current_width(&self) -> usize {
        if self.column_cursor > 7 {
            self.width.columns()
        } else {
            8
        }
    }

    /// Returns the next bulk-data field under the selected dialect, or
    /// `None` once the record is exhausted.
    pub fn next_field(&mut self) -> Option<&str> {
        match self.dialect {
            FieldDialect::FixedWidth => self.next_fixed_field(),
            FieldDialect::CommaDelimited => self.next_comma_field(),
        }
    }

    fn next_fixed_field(&mut self) -> Option<&str> {
        if self.column_cursor >= self.content.len() {
            return None;
        }
        let width = self.current_width();
        let start = floor_boundary(&self.content, self.column_cursor);
        let end = floor_boundary(&self.content, self.column_cursor + width);
        self.scratch.clear();
        self.scratch.push_str(&self.content[start..end]);
        self.column_cursor += width;
        Some(&self.scratch)
    }

    fn next_comma_field(&mut self) -> Option<&str> {
        if self.content.is_empty() {
            return None;
        }
        self.scratch.clear();
        if let Some(comma) = self.content.as_bytes().find_byte(b',') {
            self.scratch.push_str(&self.content[..comma]);
            // Keep what follows the comma; the taken field is gone.
            let rest = self.content.split_off(comma + 1);
            self.content = rest;
        } else {
            // No comma left: the tail is the final field.
            self.scratch.push_str(&self.content);
            self.content = String::new();
        }
        self.tok_cursor = None;
        Some(&self.scratch)
    }

    /// Takes the next field and parses it as an integer. Whitespace padding
    /// is accepted; `None` when the record is exhausted or the field has no
    /// leading integer literal.
    pub fn read_field_int(&mut self) -> Option<i32> {
        let field = self.next_field()?;
        numeric::parse_int_prefix(field)
    }

    /// Takes the next field, normalizes exponent-less scientific notation,
    /// and parses it as a real.
    pub fn read_field_real(&mut self) -> Option<f64> {
        let field = self.next_field()?;
        let normalized = numeric::normalize_real(field);
        numeric::parse_real_prefix(&normalized)
    }

    /// Bulk-data comment lines begin with `$`.
    pub fn is_comment_line(&self) -> bool {
        self.content.starts_with('$')
    }
}
