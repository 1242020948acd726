// This file is part of codepoint_set. For terms of use, please see the file
// called LICENSE at the top level of the codepoint_set source tree.

use core::iter::FromIterator;
use core::str::FromStr;
use core::{
    convert::TryFrom,
    ops::{Range, RangeBounds, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive},
};

use super::canonical::Canonicalizer;
use super::utils::deconstruct_range;
use super::{CodepointSet, RangeError, SetError};

fn try_from_range(range: impl RangeBounds<char>) -> Result<CodepointSet, RangeError> {
    let (from, till) = deconstruct_range(range);
    if from < till {
        let mut canonicalizer = Canonicalizer::with_capacity(1);
        canonicalizer.push_ordered(from, till - 1);
        Ok(canonicalizer.build())
    } else {
        Err(RangeError(from, till))
    }
}

impl TryFrom<Range<char>> for CodepointSet {
    type Error = RangeError;

    fn try_from(range: Range<char>) -> Result<Self, Self::Error> {
        try_from_range(range)
    }
}

impl TryFrom<RangeFrom<char>> for CodepointSet {
    type Error = RangeError;

    fn try_from(range: RangeFrom<char>) -> Result<Self, Self::Error> {
        try_from_range(range)
    }
}

impl TryFrom<RangeFull> for CodepointSet {
    type Error = RangeError;

    fn try_from(_: RangeFull) -> Result<Self, Self::Error> {
        Ok(Self::whole())
    }
}

impl TryFrom<RangeInclusive<char>> for CodepointSet {
    type Error = RangeError;

    fn try_from(range: RangeInclusive<char>) -> Result<Self, Self::Error> {
        try_from_range(range)
    }
}

impl TryFrom<RangeTo<char>> for CodepointSet {
    type Error = RangeError;

    fn try_from(range: RangeTo<char>) -> Result<Self, Self::Error> {
        try_from_range(range)
    }
}

impl TryFrom<RangeToInclusive<char>> for CodepointSet {
    type Error = RangeError;

    fn try_from(range: RangeToInclusive<char>) -> Result<Self, Self::Error> {
        try_from_range(range)
    }
}

impl From<char> for CodepointSet {
    fn from(c: char) -> Self {
        Self::from_char(c)
    }
}

impl FromIterator<char> for CodepointSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut canonicalizer = Canonicalizer::with_capacity(iter.size_hint().0);
        for c in iter {
            canonicalizer.push_ordered(c as u32, c as u32);
        }
        canonicalizer.build()
    }
}

/// Values above `0x10FFFF` are clamped, and an empty range (`start > end`) is read in reverse.
impl FromIterator<RangeInclusive<u32>> for CodepointSet {
    fn from_iter<I: IntoIterator<Item = RangeInclusive<u32>>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut canonicalizer = Canonicalizer::with_capacity(iter.size_hint().0);
        for range in iter {
            canonicalizer.push(*range.start(), *range.end());
        }
        canonicalizer.build()
    }
}

impl FromStr for CodepointSet {
    type Err = SetError;

    /// Parses a set pattern, see [`CodepointSet::from_pattern`].
    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        Self::from_pattern(pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codepointset::MAX_CODE_POINT;
    use std::vec::Vec;

    fn bounds(set: Result<CodepointSet, RangeError>) -> Vec<u32> {
        set.unwrap().get_bounds_vec()
    }

    #[test]
    fn test_char_ranges() {
        assert_eq!(bounds(CodepointSet::try_from('a'..'d')), [0x61, 0x63]);
        assert_eq!(bounds(CodepointSet::try_from('a'..='d')), [0x61, 0x64]);
        assert_eq!(bounds(CodepointSet::try_from('a'..='a')), [0x61, 0x61]);
        assert_eq!(bounds(CodepointSet::try_from(..'a')), [0, 0x60]);
        assert_eq!(bounds(CodepointSet::try_from(..='a')), [0, 0x61]);
        assert_eq!(bounds(CodepointSet::try_from('a'..)), [0x61, MAX_CODE_POINT]);
    }

    #[test]
    fn test_char_ranges_spanning_everything() {
        assert!(CodepointSet::try_from(..).unwrap().is_whole_singleton());
        assert!(CodepointSet::try_from('\0'..).unwrap().is_whole_singleton());
        assert!(CodepointSet::try_from(..=char::MAX)
            .unwrap()
            .is_whole_singleton());
    }

    #[test]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_empty_char_ranges() {
        assert_eq!(CodepointSet::try_from('q'..'q'), Err(RangeError(0x71, 0x71)));
        assert_eq!(CodepointSet::try_from('r'..'q'), Err(RangeError(0x72, 0x71)));
        assert_eq!(CodepointSet::try_from('r'..='q'), Err(RangeError(0x72, 0x72)));
        assert_eq!(CodepointSet::try_from(..'\0'), Err(RangeError(0, 0)));
    }

    #[test]
    fn test_range_error_display() {
        assert_eq!(RangeError(0x72, 0x71).to_string(), "Invalid range: 114..113");
    }

    #[test]
    fn test_from_char_iterator() {
        let set: CodepointSet = "cab".chars().collect();
        assert_eq!(set, CodepointSet::from_pattern("a-c").unwrap());
        assert_eq!(CodepointSet::from('a'), CodepointSet::from_char('a'));
        assert!(core::iter::empty::<char>()
            .collect::<CodepointSet>()
            .is_empty_singleton());
    }

    #[test]
    fn test_from_range_iterator() {
        let quarters: Vec<RangeInclusive<u32>> =
            (0..4u32).map(|q| q * 0x4000..=q * 0x4000 + 0x3FFF).collect();
        assert_eq!(CodepointSet::from_iter(quarters), CodepointSet::bmp());
    }

    #[test]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_from_range_iterator_clamps_and_reorders() {
        let set = CodepointSet::from_iter([0x20..=0x10, 0x10FF00..=u32::MAX]);
        assert_eq!(set.get_bounds_vec(), [0x10, 0x20, 0x10FF00, MAX_CODE_POINT]);
    }

    #[test]
    fn test_from_str() {
        let set: CodepointSet = "^0-9".parse().unwrap();
        assert_eq!(set, CodepointSet::ascii_digit().inverse());
        assert!("a-".parse::<CodepointSet>().is_err());
    }
}
