// This file is part of codepoint_set. For terms of use, please see the file
// called LICENSE at the top level of the codepoint_set source tree.

use alloc::vec::Vec;

use super::utils::normalize_pair;
use super::CodepointSet;

/// Accumulates raw `(min, max)` bounds and turns them into a canonical [`CodepointSet`].
///
/// Lower and upper bounds are kept in two separate lists, since [`Self::build`] sorts them
/// independently of each other.
#[derive(Debug, Default)]
pub(crate) struct Canonicalizer {
    mins: Vec<u32>,
    maxs: Vec<u32>,
}

impl Canonicalizer {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            mins: Vec::with_capacity(capacity),
            maxs: Vec::with_capacity(capacity),
        }
    }

    /// Adds the interval between `a` and `b`, in either order, clamping both into the code
    /// point range.
    pub(crate) fn push(&mut self, a: u32, b: u32) {
        let (min, max) = normalize_pair(a, b);
        self.mins.push(min);
        self.maxs.push(max);
    }

    /// Adds an interval that is already ordered and in range.
    pub(crate) fn push_ordered(&mut self, min: u32, max: u32) {
        debug_assert!(min <= max);
        self.mins.push(min);
        self.maxs.push(max);
    }

    /// Sorts the lower and upper bounds independently, then merges every run in which each
    /// lower bound is at most one past the preceding upper bound.
    ///
    /// Runs are compacted into the front of the two buffers, which are then truncated, so no
    /// new storage is needed for the canonical intervals.
    #[allow(clippy::indexing_slicing)] // all indices are below `len`, and `out <= start < len`
    pub(crate) fn build(self) -> CodepointSet {
        let Self {
            mut mins,
            mut maxs,
        } = self;
        debug_assert_eq!(mins.len(), maxs.len());
        let len = mins.len();
        if len == 0 {
            return CodepointSet::empty();
        }

        mins.sort_unstable();
        maxs.sort_unstable();

        let mut out = 0;
        let mut start = 0;
        for i in 1..len {
            if mins[i] > maxs[i - 1] + 1 {
                mins[out] = mins[start];
                maxs[out] = maxs[i - 1];
                out += 1;
                start = i;
            }
        }
        mins[out] = mins[start];
        maxs[out] = maxs[len - 1];
        out += 1;

        if out != len {
            mins.truncate(out);
            maxs.truncate(out);
        }
        CodepointSet::from_canonical_parts(&mins, &maxs)
    }
}
