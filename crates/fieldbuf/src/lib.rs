//! A destructive field tokenizer for engineering-model input records.
//!
//! One [`FieldBuffer`] holds one physical line of an input deck and hands out
//! its pieces: whitespace- or separator-delimited tokens in the free-form
//! dialect, and 8/16-column or comma-delimited fields in the bulk-data
//! dialect used by legacy finite-element decks. Typed extraction converts a
//! token or field into an integer or real, normalizing the exponent-less
//! scientific notation those decks allow (`1.5-3` meaning `1.5E-3`).
//!
//! Tokenization is stateful and consuming: the buffer tracks a cursor across
//! calls, and the comma dialect shrinks the record as fields are taken. Any
//! replacement of the content restarts tokenization from the top.
//!
//! ```rust
//! use fieldbuf::{FieldBuffer, FieldDialect};
//!
//! let mut line = FieldBuffer::from("MAT1,1,200000.,0.3");
//! line.set_dialect(FieldDialect::CommaDelimited);
//! assert_eq!(line.next_field(), Some("MAT1"));
//! assert_eq!(line.read_field_int(), Some(1));
//! assert_eq!(line.read_field_real(), Some(200_000.0));
//! assert_eq!(line.read_field_real(), Some(0.3));
//! assert_eq!(line.next_field(), None);
//! ```
#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
mod bulk;
mod compare;
mod error;
mod extract;
mod numeric;
mod token;

#[cfg(test)]
mod tests;

pub use buffer::FieldBuffer;
pub use bulk::{FieldDialect, FieldWidth};
pub use error::NumericError;
pub use numeric::normalize_real;
