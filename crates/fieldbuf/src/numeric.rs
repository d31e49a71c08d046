//! Numeric normalization and typed extraction.
//!
//! Bulk-data real fields may omit the exponent marker: a `+` or `-` after
//! the decimal point encodes the exponent sign, so `1.5-3` means `1.5E-3`.
//! [`normalize_real`] rewrites such literals into explicit-exponent form
//! before parsing.
//!
//! Parsing follows a prefix contract: leading whitespace is skipped, the
//! longest leading numeric literal is taken, and trailing content is
//! ignored, so `"12abc"` reads as 12.

use alloc::string::String;

use crate::{buffer::FieldBuffer, error::NumericError};

/// Rewrites an exponent-less scientific-notation literal into explicit
/// form: once a decimal point has been seen and no `e`/`E` marker has
/// appeared, a `+` or `-` gets an `E` inserted immediately before it.
///
/// An explicit marker in the source suppresses insertion, so `1.5E-3` is
/// returned unchanged. Without a decimal point nothing is rewritten.
#[must_use]
pub fn normalize_real(field: &str) -> String {
    let mut out = String::with_capacity(field.len() + 2);
    let mut after_dot = false;
    let mut marker_seen = false;
    for c in field.chars() {
        if c == 'e' || c == 'E' {
            marker_seen = true;
        }
        if after_dot && !marker_seen {
            if c == '+' || c == '-' {
                out.push('E');
            }
        } else if c == '.' {
            after_dot = true;
        }
        out.push(c);
    }
    out
}

/// Leading integer literal of `text`, after skipping leading whitespace.
pub(crate) fn parse_int_prefix(text: &str) -> Option<i32> {
    let trimmed = text.trim_start();
    lexical_core::parse_partial::<i32>(trimmed.as_bytes())
        .ok()
        .map(|(value, _)| value)
}

/// Leading real literal of `text`, after skipping leading whitespace.
pub(crate) fn parse_real_prefix(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    fast_float::parse_partial::<f64, _>(trimmed)
        .ok()
        .map(|(value, _)| value)
}

impl FieldBuffer {
    /// Best-effort whole-content integer read: the leading integer literal,
    /// or 0 when the content has none. Callers that need to distinguish
    /// zero from unparseable use [`try_int_value`](Self::try_int_value).
    pub fn int_value(&self) -> i32 {
        parse_int_prefix(&self.content).unwrap_or(0)
    }

    /// Best-effort whole-content real read; 0.0 when unparseable.
    pub fn real_value(&self) -> f64 {
        parse_real_prefix(&self.content).unwrap_or(0.0)
    }

    /// Whole-content integer read that reports failure instead of
    /// defaulting to zero.
    pub fn try_int_value(&self) -> Result<i32, NumericError> {
        let trimmed = self.content.trim_start();
        if trimmed.is_empty() {
            return Err(NumericError::Empty);
        }
        parse_int_prefix(trimmed).ok_or_else(|| NumericError::Integer(String::from(trimmed)))
    }

    /// Whole-content real read that reports failure instead of defaulting
    /// to zero.
    pub fn try_real_value(&self) -> Result<f64, NumericError> {
        let trimmed = self.content.trim_start();
        if trimmed.is_empty() {
            return Err(NumericError::Empty);
        }
        parse_real_prefix(trimmed).ok_or_else(|| NumericError::Real(String::from(trimmed)))
    }
}
