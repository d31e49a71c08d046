#![allow(clippy::float_cmp)]

use crate::{FieldBuffer, FieldDialect, FieldWidth};

#[test]
fn fixed_width_slices_eight_columns_at_a_time() {
    let mut buf = FieldBuffer::from("MAT1    1       200000. ");
    assert_eq!(buf.next_field(), Some("MAT1    "));
    assert_eq!(buf.next_field(), Some("1       "));
    assert_eq!(buf.next_field(), Some("200000. "));
    assert_eq!(buf.next_field(), None);
}

#[test]
fn fixed_width_final_field_may_be_short() {
    let mut buf = FieldBuffer::from("AAAAAAAABBB");
    assert_eq!(buf.next_field(), Some("AAAAAAAA"));
    assert_eq!(buf.next_field(), Some("BBB"));
    assert_eq!(buf.next_field(), None);
}

#[test]
fn fixed_width_field_count_is_len_over_width_rounded_up() {
    let mut buf = FieldBuffer::from("XXXXXXXXXXXXXXXXXXXX");
    let mut count = 0;
    while buf.next_field().is_some() {
        count += 1;
    }
    assert_eq!(count, 3);
}

#[test]
fn large_field_marker_promotes_later_fields_to_sixteen() {
    // 8 + 16 + 16 columns.
    let mut buf = FieldBuffer::from("MAT1*   1               200000.         ");
    buf.check_large_field();
    assert_eq!(buf.field_width(), FieldWidth::Large);
    assert_eq!(buf.next_field(), Some("MAT1*   "));
    assert_eq!(buf.next_field(), Some("1               "));
    assert_eq!(buf.next_field(), Some("200000.         "));
    assert_eq!(buf.next_field(), None);
}

#[test]
fn large_field_marker_in_eighth_column_is_ignored() {
    let mut buf = FieldBuffer::from("MAT1   *1       ");
    buf.check_large_field();
    assert_eq!(buf.field_width(), FieldWidth::Single);
}

#[test]
fn promotion_does_not_outlive_the_record() {
    let mut buf = FieldBuffer::from("*PROMOTED");
    buf.check_large_field();
    assert_eq!(buf.field_width(), FieldWidth::Large);
    buf.assign("GRID    17      ");
    assert_eq!(buf.field_width(), FieldWidth::Single);
    assert_eq!(buf.next_field(), Some("GRID    "));
    assert_eq!(buf.next_field(), Some("17      "));
}

#[test]
fn comma_fields_preserve_empties() {
    let mut buf = FieldBuffer::from("A,,B");
    buf.set_dialect(FieldDialect::CommaDelimited);
    assert_eq!(buf.next_field(), Some("A"));
    assert_eq!(buf.next_field(), Some(""));
    assert_eq!(buf.next_field(), Some("B"));
    assert_eq!(buf.next_field(), None);
}

#[test]
fn comma_consumption_shrinks_the_record() {
    let mut buf = FieldBuffer::from("MAT1,1,200000.");
    buf.set_dialect(FieldDialect::CommaDelimited);
    assert_eq!(buf.next_field(), Some("MAT1"));
    assert_eq!(buf.as_str(), "1,200000.");
    assert_eq!(buf.next_field(), Some("1"));
    assert_eq!(buf.as_str(), "200000.");
}

#[test]
fn comma_record_without_a_trailing_field_ends_after_the_comma() {
    let mut buf = FieldBuffer::from("A,");
    buf.set_dialect(FieldDialect::CommaDelimited);
    assert_eq!(buf.next_field(), Some("A"));
    assert_eq!(buf.next_field(), None);
}

#[test]
fn comma_exhaustion_is_sticky() {
    let mut buf = FieldBuffer::from("lone");
    buf.set_dialect(FieldDialect::CommaDelimited);
    assert_eq!(buf.next_field(), Some("lone"));
    assert_eq!(buf.next_field(), None);
    assert_eq!(buf.next_field(), None);
}

#[test]
fn field_reads_accept_whitespace_padding() {
    let mut buf = FieldBuffer::from("      17 200000. ");
    assert_eq!(buf.read_field_int(), Some(17));
    assert_eq!(buf.read_field_real(), Some(200_000.0));
}

#[test]
fn field_read_normalizes_the_exponent() {
    let mut buf = FieldBuffer::from("7.85-9  1.5+3   ");
    assert_eq!(buf.read_field_real(), Some(7.85e-9));
    assert_eq!(buf.read_field_real(), Some(1.5e3));
}

#[test]
fn blank_field_does_not_read_as_zero() {
    let mut buf = FieldBuffer::from("        17      ");
    assert_eq!(buf.read_field_real(), None);
    assert_eq!(buf.read_field_int(), Some(17));
}

#[test]
fn dollar_marks_a_comment_line() {
    let buf = FieldBuffer::from("$ bulk data follows");
    assert!(buf.is_comment_line());
    assert!(!FieldBuffer::from("MAT1").is_comment_line());
    assert!(!FieldBuffer::new().is_comment_line());
}
