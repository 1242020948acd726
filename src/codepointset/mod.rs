// This file is part of codepoint_set. For terms of use, please see the file
// called LICENSE at the top level of the codepoint_set source tree.

//! This module provides an immutable, canonical set of Unicode code points.
//!
//! # Architecture
//! A [`CodepointSet`] stores a sorted list of closed intervals over `0x0 -> 0x10FFFF`. Adjacent
//! or overlapping intervals are always merged, so two sets with the same members have the same
//! intervals. The empty set and the set of all code points are shared instances: every path that
//! produces one of them (construction, algebra, decoding) hands out the same allocation, which
//! [`CodepointSet::is_empty_singleton`] and [`CodepointSet::is_whole_singleton`] can observe.
//!
//! Complements are computed lazily and cached on the set they were computed from, as is the
//! structural hash. A computed complement holds a weak link back to its source, so inverting
//! twice returns the original instance and a chain of inversions never grows. Both caches are filled without locking; threads that race on an empty cache
//! each compute the (identical) value and one of the results is kept.
//!
//! # Examples:
//!
//! ## Creating a `CodepointSet`
//!
//! ```
//! use codepoint_set::codepointset::CodepointSet;
//!
//! let from_chars = CodepointSet::from_chars(&['a', 'c', 'b']);
//! let from_pattern = CodepointSet::from_pattern("a-c").unwrap();
//! let from_bounds = CodepointSet::try_from_intervals(&[0x61, 0x63]).unwrap();
//!
//! assert_eq!(from_chars, from_pattern);
//! assert_eq!(from_pattern, from_bounds);
//! assert_eq!(from_chars.range_count(), 1);
//! ```
//!
//! ## Querying and combining
//!
//! ```
//! use codepoint_set::codepointset::CodepointSet;
//!
//! let lower = CodepointSet::from_pattern("a-z").unwrap();
//! let upper = CodepointSet::from_pattern("A-Z").unwrap();
//! let letters = CodepointSet::union_all(&[lower, upper]);
//!
//! assert!(letters.contains('Q'));
//! assert!(!letters.inverse().contains('Q'));
//! assert_eq!(letters.to_string(), "[ 'A'-'Z', 'a'-'z' ]");
//! ```
//!
//! ## Persisting
//!
//! ```
//! use codepoint_set::codepointset::CodepointSet;
//!
//! let set = CodepointSet::from_pattern("^\\n").unwrap();
//! let bytes = set.encode();
//! assert_eq!(CodepointSet::decode(&bytes).unwrap(), set);
//! ```

#![warn(missing_docs)]

use alloc::string::String;
use displaydoc::Display;

mod canonical;
mod codec;
mod conversions;
mod cpset;
mod display;
mod pattern;
mod utils;

pub use cpset::CodepointSet;

/// The largest code point, `0x10FFFF`.
pub const MAX_CODE_POINT: u32 = char::MAX as u32;

/// A [`CodepointSet`] could not be constructed from the given input.
#[derive(Display, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SetError {
    /// A flat list of interval bounds had an odd number of entries
    #[displaydoc("Interval bounds must come in (min, max) pairs, got {0} values")]
    OddBoundCount(usize),
    /// A set pattern could not be parsed
    #[displaydoc("Malformed set pattern {pattern:?}: {kind}")]
    MalformedPattern {
        /// The pattern as it was passed in.
        pattern: String,
        /// What is wrong with it.
        kind: PatternErrorKind,
    },
}

impl core::error::Error for SetError {}

/// The ways a set pattern can be malformed.
#[derive(Display, Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PatternErrorKind {
    /// The pattern ends with an unescaped backslash
    #[displaydoc("trailing backslash escapes nothing")]
    TrailingEscape,
    /// The pattern ends with `-`, leaving a range without its upper endpoint
    #[displaydoc("range is missing its right-hand endpoint")]
    DanglingRange,
}

/// A [`CodepointSet`] was constructed from an empty or inverted range
#[derive(Display, Debug, Copy, Clone, PartialEq, Eq)]
#[displaydoc("Invalid range: {0}..{1}")]
pub struct RangeError(pub u32, pub u32);

impl core::error::Error for RangeError {}

/// Encoded bytes could not be decoded into a [`CodepointSet`].
#[derive(Display, Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    /// The input ends in the middle of the header or of a bound
    #[displaydoc("Encoded set is truncated")]
    Truncated,
    /// The header disagrees with the number of bounds that follow it
    #[displaydoc("Encoded set declares {expected} intervals but contains {found} bounds")]
    LengthMismatch {
        /// Interval count from the header.
        expected: u32,
        /// Number of bounds actually present.
        found: usize,
    },
    /// A bound lies above `0x10FFFF`
    #[displaydoc("Encoded set contains a bound outside the code point range: {0:#X}")]
    OutOfRange(u32),
    /// The intervals are not sorted, disjoint and non-adjacent
    #[displaydoc("Encoded set is not in canonical form")]
    NotCanonical,
}

impl core::error::Error for DecodeError {}
