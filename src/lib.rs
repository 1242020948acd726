// This file is part of codepoint_set. For terms of use, please see the file
// called LICENSE at the top level of the codepoint_set source tree.

//! Immutable sets of Unicode code points.
//!
//! [`CodepointSet`](crate::codepointset::CodepointSet) is a canonical, interval based
//! representation of a subset of the code point range `0x0 -> 0x10FFFF`. Sets are built from
//! characters, raw interval bounds or a compact pattern syntax, combined with union and
//! complement, rendered in a human-readable bracketed form, and persisted with a small
//! structural codec.
//!
//! ```
//! use codepoint_set::codepointset::CodepointSet;
//!
//! let word = CodepointSet::from_pattern("0-9A-Za-z_").unwrap();
//! assert!(word.contains('q'));
//! assert!(!word.contains('-'));
//!
//! let not_word = word.inverse();
//! assert!(not_word.contains('-'));
//! assert_eq!(word.union(&not_word), CodepointSet::whole());
//! ```
//!
//! The [`escape`] module provides the per-code-point escaping used when a set is rendered.

// Library annotations
#![cfg_attr(not(any(test, doc)), no_std)]
#![cfg_attr(
    not(test),
    deny(
        clippy::indexing_slicing,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic
    )
)]
#![warn(missing_docs)]

extern crate alloc;

pub mod codepointset;
pub mod escape;

#[doc(hidden)] // internal
#[cfg(feature = "logging")]
pub use log;

#[doc(hidden)] // internal
#[cfg(all(not(feature = "logging"), debug_assertions, not(target_os = "none")))]
pub mod log {
    extern crate std;
    pub use std::eprintln as warn;
    pub use std::eprintln as debug;
}

#[cfg(all(
    not(feature = "logging"),
    any(not(debug_assertions), target_os = "none")
))]
#[doc(hidden)] // internal
pub mod log {
    #[macro_export]
    macro_rules! _internal_noop_log {
        ($($t:expr),*) => {};
    }
    pub use crate::_internal_noop_log as warn;
    pub use crate::_internal_noop_log as debug;
}

#[test]
fn test_logging() {
    // This should compile on all combinations of features
    crate::log::debug!("Hello World");
}
