// This file is part of codepoint_set. For terms of use, please see the file
// called LICENSE at the top level of the codepoint_set source tree.

#[cfg(feature = "serde")]
use alloc::format;
#[cfg(feature = "serde")]
use alloc::string::String;
use alloc::boxed::Box;
use alloc::sync::{Arc, Weak};
use alloc::vec::Vec;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::num::NonZeroUsize;
use core::ops::RangeInclusive;
use once_cell::race::{OnceBox, OnceNonZeroUsize};
use potential_utf::PotentialCodePoint;
use zerovec::{ule::AsULE, zerovec, ZeroVec};

use super::canonical::Canonicalizer;
use super::utils::is_canonical;
use super::{DecodeError, SetError, MAX_CODE_POINT};

/// Represents the end code point of the Basic Multilingual Plane range, starting from code point 0, inclusive
const BMP_MAX: u32 = 0xFFFF;

/// Represents the end code point of the ASCII range, starting from code point 0, inclusive
const ASCII_MAX: u32 = 0x7F;

const ALL_VEC: ZeroVec<PotentialCodePoint> = zerovec!(PotentialCodePoint; PotentialCodePoint::to_unaligned; [PotentialCodePoint::from_u24(0x0), PotentialCodePoint::from_u24(MAX_CODE_POINT)]);

const BMP_VEC: ZeroVec<PotentialCodePoint> = zerovec!(PotentialCodePoint; PotentialCodePoint::to_unaligned; [PotentialCodePoint::from_u24(0x0), PotentialCodePoint::from_u24(BMP_MAX)]);

const ASCII_VEC: ZeroVec<PotentialCodePoint> = zerovec!(PotentialCodePoint; PotentialCodePoint::to_unaligned; [PotentialCodePoint::from_u24(0x0), PotentialCodePoint::from_u24(ASCII_MAX)]);

const ASCII_DIGIT_VEC: ZeroVec<PotentialCodePoint> = zerovec!(PotentialCodePoint; PotentialCodePoint::to_unaligned; [PotentialCodePoint::from_char('0'), PotentialCodePoint::from_char('9')]);

const ASCII_ALPHANUMERIC_VEC: ZeroVec<PotentialCodePoint> = zerovec!(PotentialCodePoint; PotentialCodePoint::to_unaligned; [
    PotentialCodePoint::from_char('0'),
    PotentialCodePoint::from_char('9'),
    PotentialCodePoint::from_char('A'),
    PotentialCodePoint::from_char('Z'),
    PotentialCodePoint::from_char('a'),
    PotentialCodePoint::from_char('z'),
]);

static EMPTY: OnceBox<CodepointSet> = OnceBox::new();
static WHOLE: OnceBox<CodepointSet> = OnceBox::new();
static BMP: OnceBox<CodepointSet> = OnceBox::new();
static ASCII: OnceBox<CodepointSet> = OnceBox::new();
static ASCII_DIGIT: OnceBox<CodepointSet> = OnceBox::new();
static ASCII_ALPHANUMERIC: OnceBox<CodepointSet> = OnceBox::new();

/// Returns the process-wide instance stored in `cell`, creating it on first use.
///
/// Racing initializers may each build a candidate, but only the first one stored is ever
/// handed out.
fn preset(
    cell: &'static OnceBox<CodepointSet>,
    bounds: ZeroVec<'static, PotentialCodePoint>,
) -> &'static CodepointSet {
    cell.get_or_init(|| Box::new(CodepointSet::from_bounds_unchecked(bounds)))
}

/// An immutable set of code points.
///
/// The set is a sorted list of closed intervals in which no two intervals overlap or touch.
/// Cloning a `CodepointSet` is cheap and yields a handle to the same set; see
/// [`CodepointSet::ptr_eq`].
#[derive(Clone)]
pub struct CodepointSet {
    data: Arc<SetData>,
}

struct SetData {
    // Inclusive bounds, flattened: [min0, max0, min1, max1, ...]
    bounds: ZeroVec<'static, PotentialCodePoint>,
    size: u32,
    // Write-once caches. Concurrent first reads may compute the value more than once; every
    // computation yields the same result and only one is stored.
    inverse: OnceBox<CodepointSet>,
    hash: OnceNonZeroUsize,
    // The set this one was computed as the inverse of. Weak, since that set owns this one
    // through its `inverse` cache.
    inverse_of: Weak<SetData>,
}

impl CodepointSet {
    /// Wraps bounds that are known to be canonical, without checking for the shared instances.
    pub(crate) fn from_bounds_unchecked(bounds: ZeroVec<'static, PotentialCodePoint>) -> Self {
        Self::with_inverse_of(bounds, Weak::new())
    }

    fn with_inverse_of(
        bounds: ZeroVec<'static, PotentialCodePoint>,
        inverse_of: Weak<SetData>,
    ) -> Self {
        #[allow(clippy::indexing_slicing)] // chunks
        let size = bounds
            .as_ule_slice()
            .chunks(2)
            .map(|pair| {
                u32::from(PotentialCodePoint::from_unaligned(pair[1]))
                    - u32::from(PotentialCodePoint::from_unaligned(pair[0]))
                    + 1
            })
            .sum::<u32>();
        Self {
            data: Arc::new(SetData {
                bounds,
                size,
                inverse: OnceBox::new(),
                hash: OnceNonZeroUsize::new(),
                inverse_of,
            }),
        }
    }

    /// Wraps canonical bounds, substituting the shared empty and whole instances where the
    /// bounds describe one of them.
    pub(crate) fn resolve(bounds: ZeroVec<'static, PotentialCodePoint>) -> Self {
        if bounds.is_empty() {
            Self::empty()
        } else if bounds == ALL_VEC {
            Self::whole()
        } else {
            Self::from_bounds_unchecked(bounds)
        }
    }

    /// Builds a set from parallel lists of canonical lower and upper bounds.
    pub(crate) fn from_canonical_parts(mins: &[u32], maxs: &[u32]) -> Self {
        let bounds = mins
            .iter()
            .zip(maxs)
            .flat_map(|(&min, &max)| [min, max])
            .map(PotentialCodePoint::from_u24)
            .collect();
        Self::resolve(bounds)
    }

    /// Validates bounds that come from outside the crate and wraps them.
    pub(crate) fn try_from_bounds(
        bounds: ZeroVec<'static, PotentialCodePoint>,
    ) -> Result<Self, DecodeError> {
        if let Some(out_of_range) = bounds
            .iter()
            .map(u32::from)
            .find(|&cp| cp > MAX_CODE_POINT)
        {
            return Err(DecodeError::OutOfRange(out_of_range));
        }
        if !is_canonical(&bounds) {
            return Err(DecodeError::NotCanonical);
        }
        Ok(Self::resolve(bounds))
    }

    /// Returns the shared empty [`CodepointSet`].
    ///
    /// Every empty set produced by this crate is this same instance.
    ///
    /// # Examples
    ///
    /// ```
    /// use codepoint_set::codepointset::CodepointSet;
    ///
    /// let empty = CodepointSet::from_chars(&[]);
    /// assert!(empty.is_empty_singleton());
    /// assert!(CodepointSet::ptr_eq(&empty, &CodepointSet::empty()));
    /// ```
    pub fn empty() -> Self {
        preset(&EMPTY, ZeroVec::new()).clone()
    }

    /// Returns the shared [`CodepointSet`] spanning the entire Unicode range
    ///
    /// The range spans from `0x0 -> 0x10FFFF` inclusive. Every such set produced by this crate
    /// is this same instance.
    ///
    /// # Examples
    ///
    /// ```
    /// use codepoint_set::codepointset::CodepointSet;
    ///
    /// let whole = CodepointSet::whole();
    /// assert_eq!(whole.size(), (char::MAX as usize) + 1);
    /// assert!(whole.contains32(0x10FFFF));
    /// assert!(!whole.contains32(0x110000));
    /// assert!(CodepointSet::empty().inverse().is_whole_singleton());
    /// ```
    pub fn whole() -> Self {
        preset(&WHOLE, ALL_VEC).clone()
    }

    /// Returns a [`CodepointSet`] spanning the BMP range
    ///
    /// The range spans from `0x0 -> 0xFFFF` inclusive.
    pub fn bmp() -> Self {
        preset(&BMP, BMP_VEC).clone()
    }

    /// Returns a [`CodepointSet`] spanning the ASCII range
    ///
    /// The range spans from `0x0 -> 0x7F` inclusive.
    pub fn ascii() -> Self {
        preset(&ASCII, ASCII_VEC).clone()
    }

    /// Returns the [`CodepointSet`] of the ASCII digits `0-9`.
    pub fn ascii_digit() -> Self {
        preset(&ASCII_DIGIT, ASCII_DIGIT_VEC).clone()
    }

    /// Returns the [`CodepointSet`] of the ASCII digits and letters, `0-9A-Za-z`.
    pub fn ascii_alphanumeric() -> Self {
        preset(&ASCII_ALPHANUMERIC, ASCII_ALPHANUMERIC_VEC).clone()
    }

    /// Returns a [`CodepointSet`] containing the single character `c`.
    pub fn from_char(c: char) -> Self {
        let mut canonicalizer = Canonicalizer::with_capacity(1);
        canonicalizer.push_ordered(c as u32, c as u32);
        canonicalizer.build()
    }

    /// Returns a [`CodepointSet`] containing each of the given characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use codepoint_set::codepointset::CodepointSet;
    ///
    /// let set = CodepointSet::from_chars(&['a', 'c', 'b']);
    /// assert_eq!(set.iter_ranges().collect::<Vec<_>>(), [0x61..=0x63]);
    /// ```
    pub fn from_chars(chars: &[char]) -> Self {
        chars.iter().copied().collect()
    }

    /// Returns a [`CodepointSet`] containing each of the characters of `s`.
    pub fn from_str_chars(s: &str) -> Self {
        s.chars().collect()
    }

    /// Returns a [`CodepointSet`] containing each of the given code points.
    ///
    /// Values above `0x10FFFF` are clamped to `0x10FFFF`.
    pub fn from_code_points(code_points: &[u32]) -> Self {
        let mut canonicalizer = Canonicalizer::with_capacity(code_points.len());
        for &cp in code_points {
            canonicalizer.push(cp, cp);
        }
        canonicalizer.build()
    }

    /// Returns a [`CodepointSet`] from a flat list of interval bounds `[a0, b0, a1, b1, ...]`.
    ///
    /// Each pair describes the closed interval between its two values, in either order. The
    /// intervals may overlap, touch, or come in any order. Values above `0x10FFFF` are clamped
    /// to `0x10FFFF`.
    ///
    /// # Examples
    ///
    /// ```
    /// use codepoint_set::codepointset::{CodepointSet, SetError};
    ///
    /// let set = CodepointSet::try_from_intervals(&[0x5A, 0x41, 0x61, 0x7A]).unwrap();
    /// assert!(set.contains('M'));
    /// assert!(set.contains('m'));
    ///
    /// let odd = CodepointSet::try_from_intervals(&[0x41, 0x5A, 0x61]);
    /// assert_eq!(odd, Err(SetError::OddBoundCount(3)));
    /// ```
    pub fn try_from_intervals(bounds: &[u32]) -> Result<Self, SetError> {
        if bounds.len() % 2 != 0 {
            crate::log::warn!(
                "Rejecting interval list with an odd number of bounds: {}",
                bounds.len()
            );
            return Err(SetError::OddBoundCount(bounds.len()));
        }
        let mut canonicalizer = Canonicalizer::with_capacity(bounds.len() / 2);
        for pair in bounds.chunks_exact(2) {
            if let [a, b] = *pair {
                canonicalizer.push(a, b);
            }
        }
        Ok(canonicalizer.build())
    }

    /// Returns whether `a` and `b` are handles to the same instance.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.data, &b.data)
    }

    /// Returns whether this is the shared empty instance.
    pub fn is_empty_singleton(&self) -> bool {
        Self::ptr_eq(self, preset(&EMPTY, ZeroVec::new()))
    }

    /// Returns whether this is the shared instance spanning the whole code point range.
    pub fn is_whole_singleton(&self) -> bool {
        Self::ptr_eq(self, preset(&WHOLE, ALL_VEC))
    }

    /// Returns the flat inclusive bounds
    ///
    /// Public only to the crate, not exposed to public
    pub(crate) fn as_bounds(&self) -> &ZeroVec<'static, PotentialCodePoint> {
        &self.data.bounds
    }

    /// Returns an owned, flat list of the inclusive interval bounds
    ///
    /// # Examples
    ///
    /// ```
    /// use codepoint_set::codepointset::CodepointSet;
    ///
    /// let set = CodepointSet::from_pattern("a-cx").unwrap();
    /// assert_eq!(set.get_bounds_vec(), [0x61, 0x63, 0x78, 0x78]);
    /// ```
    pub fn get_bounds_vec(&self) -> Vec<u32> {
        self.data.bounds.iter().map(u32::from).collect()
    }

    fn bound(&self, idx: usize) -> Option<u32> {
        self.data.bounds.get(idx).map(u32::from)
    }

    /// Yields an [`Iterator`] going through the character set in the [`CodepointSet`]
    ///
    /// Surrogate code points are skipped, since they are not `char`s.
    ///
    /// # Examples
    ///
    /// ```
    /// use codepoint_set::codepointset::CodepointSet;
    /// let example = CodepointSet::from_pattern("A-CE").unwrap();
    /// let mut ex_iter_chars = example.iter_chars();
    /// assert_eq!(Some('A'), ex_iter_chars.next());
    /// assert_eq!(Some('B'), ex_iter_chars.next());
    /// assert_eq!(Some('C'), ex_iter_chars.next());
    /// assert_eq!(Some('E'), ex_iter_chars.next());
    /// assert_eq!(None, ex_iter_chars.next());
    /// ```
    pub fn iter_chars(&self) -> impl Iterator<Item = char> + '_ {
        self.iter_ranges().flatten().filter_map(char::from_u32)
    }

    /// Yields an [`Iterator`] returning the ranges of the code points that are
    /// included in the [`CodepointSet`], in ascending order
    ///
    /// # Example
    ///
    /// ```
    /// use codepoint_set::codepointset::CodepointSet;
    /// let example = CodepointSet::from_pattern("A-CE").unwrap();
    /// let mut example_iter_ranges = example.iter_ranges();
    /// assert_eq!(Some(0x41..=0x43), example_iter_ranges.next());
    /// assert_eq!(Some(0x45..=0x45), example_iter_ranges.next());
    /// assert_eq!(None, example_iter_ranges.next());
    /// ```
    pub fn iter_ranges(&self) -> impl ExactSizeIterator<Item = RangeInclusive<u32>> + '_ {
        #[allow(clippy::indexing_slicing)] // chunks
        self.data.bounds.as_ule_slice().chunks(2).map(|pair| {
            u32::from(PotentialCodePoint::from_unaligned(pair[0]))
                ..=u32::from(PotentialCodePoint::from_unaligned(pair[1]))
        })
    }

    /// Returns the number of ranges contained in this [`CodepointSet`]
    pub fn range_count(&self) -> usize {
        self.data.bounds.len() / 2
    }

    /// Returns a specific range contained in this [`CodepointSet`] by index.
    pub fn get_nth_range(&self, idx: usize) -> Option<RangeInclusive<u32>> {
        let min = self.bound(idx.checked_mul(2)?)?;
        let max = self.bound(idx * 2 + 1)?;
        Some(min..=max)
    }

    /// Returns the number of code points in the [`CodepointSet`]
    pub fn size(&self) -> usize {
        self.data.size as usize
    }

    /// Returns whether or not the [`CodepointSet`] is empty
    pub fn is_empty(&self) -> bool {
        self.data.bounds.is_empty()
    }

    /// Checks to see the query is in the [`CodepointSet`]
    ///
    /// # Examples
    ///
    /// ```
    /// use codepoint_set::codepointset::CodepointSet;
    /// let example = CodepointSet::from_pattern("AC").unwrap();
    /// assert!(example.contains('A'));
    /// assert!(!example.contains('B'));
    /// ```
    pub fn contains(&self, query: char) -> bool {
        self.contains32(query as u32)
    }

    /// Checks to see the code point value is in the [`CodepointSet`]
    ///
    /// Values above `0x10FFFF` are never contained. Runs a binary search in `O(log(n))`
    /// where `n` is the number of ranges in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use codepoint_set::codepointset::CodepointSet;
    /// let example = CodepointSet::from_pattern("AC").unwrap();
    /// assert!(example.contains32(0x41));
    /// assert!(!example.contains32(0x42));
    /// ```
    pub fn contains32(&self, query: u32) -> bool {
        if self.is_empty_singleton() {
            return false;
        }
        if self.is_whole_singleton() {
            return query <= MAX_CODE_POINT;
        }
        match self.range_count() {
            0 => false,
            count => self.search(query, 0, count - 1, &mut |_, _| {}),
        }
    }

    /// Searches the ranges `i..=j` for `query`.
    ///
    /// The outer bounds are checked first, so once the bracket narrows to a single range the
    /// query is known to lie within it.
    /// `visit` sees every bracket `(i, j)` in the order the search enters it.
    fn search(
        &self,
        query: u32,
        i: usize,
        j: usize,
        visit: &mut impl FnMut(usize, usize),
    ) -> bool {
        visit(i, j);
        let (Some(min), Some(max)) = (self.bound(2 * i), self.bound(2 * j + 1)) else {
            return false;
        };
        if query < min || query > max {
            return false;
        }
        if i == j {
            return true;
        }
        let m = i + (j - i) / 2 + 1;
        self.search(query, i, m - 1, visit) || self.search(query, m, j, visit)
    }

    /// Check if the calling [`CodepointSet`] contains all the code points of the given [`CodepointSet`]
    ///
    /// # Examples
    ///
    /// ```
    /// use codepoint_set::codepointset::CodepointSet;
    /// let example = CodepointSet::from_pattern("A-EU-Z").unwrap();
    /// let a_to_d = CodepointSet::from_pattern("A-D").unwrap();
    /// let f_to_t = CodepointSet::from_pattern("F-T").unwrap();
    /// let r_to_x = CodepointSet::from_pattern("R-X").unwrap();
    /// assert!(example.contains_set(&a_to_d)); // contains all
    /// assert!(!example.contains_set(&f_to_t)); // contains none
    /// assert!(!example.contains_set(&r_to_x)); // contains some
    /// ```
    pub fn contains_set(&self, set: &Self) -> bool {
        if set.size() > self.size() {
            return false;
        }
        let mut ranges = self.iter_ranges().peekable();
        set.iter_ranges().all(|needle| {
            while ranges.next_if(|range| range.end() < needle.start()).is_some() {}
            ranges
                .peek()
                .is_some_and(|range| range.start() <= needle.start() && needle.end() <= range.end())
        })
    }

    /// Returns the union of all of the given sets.
    ///
    /// No sets yields the empty set, and a single set is returned as is. If any of the sets is
    /// the whole code point range, the result is the whole range.
    ///
    /// # Examples
    ///
    /// ```
    /// use codepoint_set::codepointset::CodepointSet;
    ///
    /// let digits = CodepointSet::from_pattern("0-9").unwrap();
    /// let upper = CodepointSet::from_pattern("A-Z").unwrap();
    /// let lower = CodepointSet::from_pattern("a-z").unwrap();
    /// assert_eq!(
    ///     CodepointSet::union_all(&[digits, upper, lower]),
    ///     CodepointSet::ascii_alphanumeric()
    /// );
    /// assert!(CodepointSet::union_all(&[]).is_empty_singleton());
    /// ```
    pub fn union_all(sets: &[CodepointSet]) -> Self {
        match sets {
            [] => Self::empty(),
            [single] => single.clone(),
            _ => {
                if sets.iter().any(Self::is_whole_singleton) {
                    return Self::whole();
                }
                let capacity = sets.iter().map(Self::range_count).sum();
                let mut canonicalizer = Canonicalizer::with_capacity(capacity);
                for set in sets.iter().filter(|set| !set.is_empty_singleton()) {
                    for range in set.iter_ranges() {
                        canonicalizer.push_ordered(*range.start(), *range.end());
                    }
                }
                canonicalizer.build()
            }
        }
    }

    /// Returns the union of this set and `other`.
    pub fn union(&self, other: &Self) -> Self {
        Self::union_all(&[self.clone(), other.clone()])
    }

    /// Returns the set of all code points in `0x0 -> 0x10FFFF` that are not in this set.
    ///
    /// The result is computed once and cached on this set, and remembers this set as its own
    /// inverse for as long as this set is alive, so `s.inverse().inverse()` is `s` itself. The
    /// empty and whole sets are each other's inverse.
    ///
    /// # Examples
    ///
    /// ```
    /// use codepoint_set::codepointset::CodepointSet;
    /// let example = CodepointSet::from_pattern("A-CE").unwrap();
    /// let inverse = example.inverse();
    /// assert_eq!(
    ///     inverse.iter_ranges().collect::<Vec<_>>(),
    ///     [0..=0x40, 0x44..=0x44, 0x46..=0x10FFFF]
    /// );
    /// assert_eq!(inverse.inverse(), example);
    /// ```
    pub fn inverse(&self) -> Self {
        if self.is_empty_singleton() {
            return Self::whole();
        }
        if self.is_whole_singleton() {
            return Self::empty();
        }
        if let Some(data) = self.data.inverse_of.upgrade() {
            return Self { data };
        }
        self.data
            .inverse
            .get_or_init(|| Box::new(self.compute_inverse()))
            .clone()
    }

    /// Collects the gaps around and between the ranges. They come out in ascending order, so
    /// no sorting or merging is needed.
    fn compute_inverse(&self) -> Self {
        let bounds = &self.data.bounds;
        let ule = bounds.as_ule_slice();
        let mut gaps: Vec<u32> = Vec::with_capacity(ule.len() + 2);
        if let Some(first) = bounds.first().map(u32::from).filter(|&first| first > 0) {
            gaps.extend([0, first - 1]);
        }
        // Each chunk pairs the max of one range with the min of the next
        let middle = ule.get(1..ule.len().saturating_sub(1)).unwrap_or(&[]);
        #[allow(clippy::indexing_slicing)] // chunks
        for pair in middle.chunks(2) {
            gaps.push(u32::from(PotentialCodePoint::from_unaligned(pair[0])) + 1);
            gaps.push(u32::from(PotentialCodePoint::from_unaligned(pair[1])) - 1);
        }
        if let Some(last) = bounds
            .last()
            .map(u32::from)
            .filter(|&last| last < MAX_CODE_POINT)
        {
            gaps.extend([last + 1, MAX_CODE_POINT]);
        }
        let bounds: ZeroVec<'static, PotentialCodePoint> =
            gaps.into_iter().map(PotentialCodePoint::from_u24).collect();
        // Only the shared instances have an empty or full inverse, and those never get here
        if bounds.is_empty() || bounds == ALL_VEC {
            return Self::resolve(bounds);
        }
        Self::with_inverse_of(bounds, Arc::downgrade(&self.data))
    }

    /// Returns the code points contained in both this set and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use codepoint_set::codepointset::CodepointSet;
    /// let hex = CodepointSet::from_pattern("0-9A-Fa-f").unwrap();
    /// let upper = CodepointSet::from_pattern("A-Z").unwrap();
    /// assert_eq!(hex.intersection(&upper), CodepointSet::from_pattern("A-F").unwrap());
    /// ```
    pub fn intersection(&self, other: &Self) -> Self {
        Self::union_all(&[self.inverse(), other.inverse()]).inverse()
    }

    /// Returns the code points contained in this set but not in `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use codepoint_set::codepointset::CodepointSet;
    /// let lower = CodepointSet::from_pattern("a-z").unwrap();
    /// let vowels = CodepointSet::from_pattern("aeiou").unwrap();
    /// let consonants = lower.difference(&vowels);
    /// assert!(consonants.contains('b'));
    /// assert!(!consonants.contains('e'));
    /// assert_eq!(consonants.size(), 21);
    /// ```
    pub fn difference(&self, other: &Self) -> Self {
        self.intersection(&other.inverse())
    }

    /// Returns a hash of the intervals, computed once per set.
    ///
    /// Sets that compare equal have the same structural hash.
    pub fn structural_hash(&self) -> usize {
        self.data
            .hash
            .get_or_init(|| {
                let hash = self.data.bounds.iter().fold(1usize, |hash, cp| {
                    hash.wrapping_mul(31).wrapping_add(u32::from(cp) as usize)
                });
                NonZeroUsize::new(hash).unwrap_or(NonZeroUsize::MIN)
            })
            .get()
    }
}

impl PartialEq for CodepointSet {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other) || self.data.bounds == other.data.bounds
    }
}

impl Eq for CodepointSet {}

impl Hash for CodepointSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.structural_hash());
    }
}

impl fmt::Debug for CodepointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CodepointSet")?;
        f.debug_list().entries(self.iter_ranges()).finish()
    }
}

/// Human-readable serde form of one code point: the character itself, or `U+XXXX` for
/// surrogates, which have no `char`.
#[cfg(feature = "serde")]
fn push_serde_code_point(out: &mut String, cp: u32) {
    match char::from_u32(cp) {
        Some(c) => out.push(c),
        None => out.push_str(&format!("U+{cp:04X}")),
    }
}

/// Splits one code point in the form written by [`push_serde_code_point`] off the front of `text`.
#[cfg(feature = "serde")]
fn split_serde_code_point(text: &str) -> Option<(u32, &str)> {
    if let Some(hex) = text.strip_prefix("U+") {
        let digits = hex.get(..4)?;
        Some((u32::from_str_radix(digits, 16).ok()?, hex.get(4..)?))
    } else {
        let mut chars = text.chars();
        let c = chars.next()?;
        Some((c as u32, chars.as_str()))
    }
}

/// Parses `"A"` or `"A-E"` into inclusive bounds.
#[cfg(feature = "serde")]
fn parse_serde_range(text: &str) -> Option<(u32, u32)> {
    let (min, rest) = split_serde_code_point(text)?;
    if rest.is_empty() {
        return Some((min, min));
    }
    let (max, rest) = split_serde_code_point(rest.strip_prefix('-')?)?;
    rest.is_empty().then_some((min, max))
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CodepointSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;
        use serde::Deserialize;

        let bounds: ZeroVec<'static, PotentialCodePoint> = if deserializer.is_human_readable() {
            let ranges = Vec::<alloc::borrow::Cow<'de, str>>::deserialize(deserializer)?;
            let mut bounds = Vec::with_capacity(ranges.len() * 2);
            for range in &ranges {
                let (min, max) = parse_serde_range(range).ok_or_else(|| {
                    D::Error::custom(format!("Not a code point range: {range:?}"))
                })?;
                bounds.extend([min, max].map(PotentialCodePoint::from_u24));
            }
            bounds.into_iter().collect()
        } else {
            ZeroVec::<PotentialCodePoint>::deserialize(deserializer)?.into_owned()
        };
        CodepointSet::try_from_bounds(bounds)
            .map_err(|e| D::Error::custom(format!("Cannot deserialize CodepointSet: {e}")))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CodepointSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::Serialize;

        if serializer.is_human_readable() {
            serializer.collect_seq(self.iter_ranges().map(|range| {
                let mut text = String::new();
                push_serde_code_point(&mut text, *range.start());
                if range.start() != range.end() {
                    text.push('-');
                    push_serde_code_point(&mut text, *range.end());
                }
                text
            }))
        } else {
            self.data.bounds.serialize(serializer)
        }
    }
}
