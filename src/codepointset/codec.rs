// This file is part of codepoint_set. For terms of use, please see the file
// called LICENSE at the top level of the codepoint_set source tree.

//! Structural encoding.
//!
//! ```text
//! count: u32 (little endian)
//! bounds: [PotentialCodePoint; 2 * count] (3 bytes each, little endian)
//! ```
//!
//! The bounds are the inclusive `min, max` of each interval, in canonical order. This is the
//! same byte layout that a `ZeroVec<PotentialCodePoint>` uses.

use alloc::vec::Vec;
use potential_utf::PotentialCodePoint;
use zerovec::ZeroVec;

use super::{CodepointSet, DecodeError};

const HEADER_LEN: usize = core::mem::size_of::<u32>();

impl CodepointSet {
    /// Encodes the intervals of this set into bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use codepoint_set::codepointset::CodepointSet;
    ///
    /// let set = CodepointSet::from_pattern("a-c").unwrap();
    /// assert_eq!(set.encode(), [1, 0, 0, 0, 0x61, 0, 0, 0x63, 0, 0]);
    /// ```
    pub fn encode(&self) -> Vec<u8> {
        let bounds = self.as_bounds().as_bytes();
        // Counts never exceed the number of code points
        let count = self.range_count() as u32;
        let mut bytes = Vec::with_capacity(HEADER_LEN + bounds.len());
        bytes.extend_from_slice(&count.to_le_bytes());
        bytes.extend_from_slice(bounds);
        bytes
    }

    /// Decodes a set from the output of [`CodepointSet::encode`].
    ///
    /// The intervals must be in canonical form. Encodings of the empty set and of the whole
    /// code point range decode to the shared instances.
    ///
    /// # Examples
    ///
    /// ```
    /// use codepoint_set::codepointset::{CodepointSet, DecodeError};
    ///
    /// let whole = CodepointSet::decode(&CodepointSet::whole().encode()).unwrap();
    /// assert!(whole.is_whole_singleton());
    ///
    /// assert_eq!(CodepointSet::decode(&[1, 0]), Err(DecodeError::Truncated));
    /// ```
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        let result = Self::decode_inner(bytes);
        if let Err(e) = &result {
            crate::log::debug!("Failed to decode CodepointSet from {} bytes: {}", bytes.len(), e);
        }
        result
    }

    fn decode_inner(bytes: &[u8]) -> Result<Self, DecodeError> {
        let (header, body) = bytes
            .split_first_chunk::<HEADER_LEN>()
            .ok_or(DecodeError::Truncated)?;
        let expected = u32::from_le_bytes(*header);
        let bounds = ZeroVec::<PotentialCodePoint>::parse_bytes(body)
            .map_err(|_| DecodeError::Truncated)?;
        if Some(bounds.len()) != (expected as usize).checked_mul(2) {
            return Err(DecodeError::LengthMismatch {
                expected,
                found: bounds.len(),
            });
        }
        Self::try_from_bounds(bounds.into_owned())
    }
}
