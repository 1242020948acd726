// This file is part of codepoint_set. For terms of use, please see the file
// called LICENSE at the top level of the codepoint_set source tree.

use core::ops::{Bound::*, RangeBounds};
use potential_utf::PotentialCodePoint;
use zerovec::ule::AsULE;
use zerovec::ZeroVec;

use super::MAX_CODE_POINT;

/// Pins a code point to the top of the Unicode range.
pub fn clamp(cp: u32) -> u32 {
    cp.min(MAX_CODE_POINT)
}

/// Returns the `(min, max)` pair of two raw bounds, each clamped into the code point range.
pub fn normalize_pair(a: u32, b: u32) -> (u32, u32) {
    let (a, b) = (clamp(a), clamp(b));
    (a.min(b), a.max(b))
}

/// Returns whether the flat `[min0, max0, min1, max1, ...]` bounds are of even length,
/// ordered within each pair, strictly separated by at least one missing code point between
/// pairs, and within `0x0 -> 0x10FFFF` inclusive.
#[allow(clippy::indexing_slicing)] // chunks, windows
pub fn is_canonical(bounds: &ZeroVec<'_, PotentialCodePoint>) -> bool {
    let ule = bounds.as_ule_slice();
    if ule.len() % 2 != 0 {
        return false;
    }
    let pairs_ordered = ule.chunks(2).all(|pair| {
        PotentialCodePoint::from_unaligned(pair[0]) <= PotentialCodePoint::from_unaligned(pair[1])
    });
    // Compares each max with the following min.
    let gaps_present = ule.get(1..).unwrap_or(&[]).chunks(2).all(|pair| {
        pair.len() < 2
            || u32::from(PotentialCodePoint::from_unaligned(pair[0])) + 1
                < u32::from(PotentialCodePoint::from_unaligned(pair[1]))
    });
    pairs_ordered
        && gaps_present
        && bounds
            .last()
            .is_none_or(|last| u32::from(last) <= MAX_CODE_POINT)
}

/// Returns start (inclusive) and end (exclusive) bounds of [`RangeBounds`]
pub fn deconstruct_range<T>(range: impl RangeBounds<T>) -> (u32, u32)
where
    T: Into<u32> + Copy,
{
    let from = match range.start_bound() {
        Included(b) => (*b).into(),
        Excluded(b) => (*b).into() + 1,
        Unbounded => 0,
    };
    let till = match range.end_bound() {
        Included(b) => (*b).into() + 1,
        Excluded(b) => (*b).into(),
        Unbounded => MAX_CODE_POINT + 1,
    };
    (from, till)
}

#[cfg(test)]
mod tests {
    use super::{clamp, deconstruct_range, is_canonical, normalize_pair, PotentialCodePoint};
    use crate::codepointset::MAX_CODE_POINT;
    use zerovec::ZeroVec;

    fn make_zv(slice: &[u32]) -> ZeroVec<PotentialCodePoint> {
        slice
            .iter()
            .copied()
            .map(PotentialCodePoint::from_u24)
            .collect()
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(0x41), 0x41);
        assert_eq!(clamp(MAX_CODE_POINT), MAX_CODE_POINT);
        assert_eq!(clamp(MAX_CODE_POINT + 1), MAX_CODE_POINT);
        assert_eq!(clamp(u32::MAX), MAX_CODE_POINT);
    }

    #[test]
    fn test_normalize_pair() {
        assert_eq!(normalize_pair(0x5A, 0x41), (0x41, 0x5A));
        assert_eq!(normalize_pair(0x41, 0x41), (0x41, 0x41));
        assert_eq!(normalize_pair(u32::MAX, 0x41), (0x41, MAX_CODE_POINT));
    }

    #[test]
    fn test_is_canonical() {
        assert!(is_canonical(&make_zv(&[0x2, 0x3, 0x5, 0x5])));
        assert!(is_canonical(&make_zv(&[0x0, MAX_CODE_POINT])));
    }

    #[test]
    fn test_is_canonical_empty() {
        assert!(is_canonical(&make_zv(&[])));
    }

    #[test]
    fn test_is_canonical_adjacent() {
        assert!(!is_canonical(&make_zv(&[0x2, 0x3, 0x4, 0x6])));
    }

    #[test]
    fn test_is_canonical_overlapping() {
        assert!(!is_canonical(&make_zv(&[0x2, 0x5, 0x4, 0x6])));
    }

    #[test]
    fn test_is_canonical_inverted_pair() {
        assert!(!is_canonical(&make_zv(&[0x5, 0x4])));
    }

    #[test]
    fn test_is_canonical_odd() {
        assert!(!is_canonical(&make_zv(&[0x1, 0x2, 0x4])));
    }

    #[test]
    fn test_is_canonical_out_of_range() {
        assert!(!is_canonical(&make_zv(&[0x1, 0x2, 0x4, MAX_CODE_POINT + 1])));
    }

    #[test]
    fn test_deconstruct_range() {
        let expected = (0x41, 0x45);
        let check = deconstruct_range('A'..'E'); // Range
        assert_eq!(check, expected);
        let check = deconstruct_range('A'..='D'); // Range Inclusive
        assert_eq!(check, expected);
        let check = deconstruct_range('A'..); // Range From
        assert_eq!(check, (0x41, MAX_CODE_POINT + 1));
        let check = deconstruct_range(..'A'); // Range To
        assert_eq!(check, (0x0, 0x41));
        let check = deconstruct_range(..='A'); // Range To Inclusive
        assert_eq!(check, (0x0, 0x42));
        let check = deconstruct_range::<char>(..); // Range Full
        assert_eq!(check, (0x0, MAX_CODE_POINT + 1));
    }
}
