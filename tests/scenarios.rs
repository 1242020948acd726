// This file is part of codepoint_set. For terms of use, please see the file
// called LICENSE at the top level of the codepoint_set source tree.

use codepoint_set::codepointset::{CodepointSet, PatternErrorKind, SetError, MAX_CODE_POINT};

#[test]
fn contiguous_characters_merge() {
    for chars in [['a', 'c', 'b'], ['c', 'b', 'a'], ['b', 'a', 'c']] {
        let set = CodepointSet::from_chars(&chars);
        assert_eq!(set.iter_ranges().collect::<Vec<_>>(), ['a' as u32..='c' as u32]);
    }
}

#[test]
fn alphanumeric_pattern() {
    let set = CodepointSet::from_pattern("0-9A-Za-z").unwrap();
    assert!(set.contains('5'));
    assert!(set.contains('Q'));
    assert!(set.contains('q'));
    assert!(!set.contains('_'));
    assert!(!set.contains(' '));
    assert_eq!(set, CodepointSet::ascii_alphanumeric());
}

#[test]
fn caret_pattern_is_inverse() {
    let not_a = CodepointSet::from_pattern("^a").unwrap();
    assert_eq!(not_a, CodepointSet::from_pattern("a").unwrap().inverse());
    assert_eq!(not_a.size(), MAX_CODE_POINT as usize);
    assert!(!not_a.contains('a'));
    for cp in [0, 0x60, 0x62, 0xD800, MAX_CODE_POINT] {
        assert!(not_a.contains32(cp), "{cp:#X}");
    }
}

#[test]
fn empty_and_whole_are_each_others_inverse() {
    let whole = CodepointSet::whole();
    let empty = CodepointSet::empty();
    assert!(CodepointSet::ptr_eq(&whole.inverse(), &empty));
    assert!(CodepointSet::ptr_eq(&empty.inverse(), &whole));
}

#[test]
fn odd_bound_count_is_rejected() {
    assert_eq!(
        CodepointSet::try_from_intervals(&[0x41, 0x5A, 0x61]),
        Err(SetError::OddBoundCount(3))
    );
    assert_eq!(
        CodepointSet::try_from_intervals(&[0x41]),
        Err(SetError::OddBoundCount(1))
    );
}

#[test]
fn dangling_range_is_rejected() {
    assert_eq!(
        CodepointSet::from_pattern("a-"),
        Err(SetError::MalformedPattern {
            pattern: "a-".into(),
            kind: PatternErrorKind::DanglingRange,
        })
    );
}
