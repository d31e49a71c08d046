use alloc::{string::String, vec::Vec};

use quickcheck::{QuickCheck, TestResult};

use crate::{FieldBuffer, FieldDialect, normalize_real};

#[test]
fn assign_round_trips_quickcheck() {
    fn prop(s: String) -> bool {
        let mut buf = FieldBuffer::new();
        buf.assign(&s);
        buf.eq_case(&s)
    }

    QuickCheck::new().quickcheck(prop as fn(String) -> bool);
}

#[test]
fn append_obeys_the_length_law_quickcheck() {
    fn prop(s1: String, s2: String) -> bool {
        let mut buf = FieldBuffer::new();
        buf.append(&s1);
        buf.append(&s2);
        let mut expected = s1;
        expected.push_str(&s2);
        buf.len() == expected.len() && buf.as_str() == expected
    }

    QuickCheck::new().quickcheck(prop as fn(String, String) -> bool);
}

#[test]
fn space_tokenization_matches_a_plain_split_quickcheck() {
    fn prop(s: String) -> bool {
        let mut buf = FieldBuffer::from(s.as_str());
        let mut count = 0;
        while buf.next_token().is_some() {
            count += 1;
        }
        count == s.split(' ').filter(|t| !t.is_empty()).count()
    }

    QuickCheck::new().quickcheck(prop as fn(String) -> bool);
}

#[test]
fn fixed_width_field_count_is_ceil_of_length_quickcheck() {
    fn prop(s: String) -> bool {
        let mut buf = FieldBuffer::from(s.as_str());
        let mut count = 0;
        while buf.next_field().is_some() {
            count += 1;
        }
        count == s.len().div_ceil(8)
    }

    QuickCheck::new().quickcheck(prop as fn(String) -> bool);
}

#[test]
fn comma_fields_round_trip_a_join_quickcheck() {
    fn prop(parts: Vec<String>) -> TestResult {
        let parts: Vec<String> = parts.into_iter().map(|p| p.replace(',', " ")).collect();
        if parts.last().is_none_or(String::is_empty) {
            // A trailing empty field is dropped by the dialect; pinned as a
            // unit case instead.
            return TestResult::discard();
        }
        let joined = parts.join(",");
        let mut buf = FieldBuffer::from(joined.as_str());
        buf.set_dialect(FieldDialect::CommaDelimited);
        let mut fields = Vec::new();
        while let Some(field) = buf.next_field() {
            fields.push(String::from(field));
        }
        TestResult::from_bool(fields == parts)
    }

    QuickCheck::new().quickcheck(prop as fn(Vec<String>) -> TestResult);
}

#[test]
fn normalization_is_idempotent_quickcheck() {
    fn prop(s: String) -> bool {
        let once = normalize_real(&s);
        normalize_real(&once) == once
    }

    QuickCheck::new().quickcheck(prop as fn(String) -> bool);
}
