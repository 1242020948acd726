// This file is part of codepoint_set. For terms of use, please see the file
// called LICENSE at the top level of the codepoint_set source tree.

//! The set pattern syntax.
//!
//! ```text
//! pattern := '^'? item*
//! item    := literal ('-' literal)?
//! literal := '\' any | any
//! ```
//!
//! A leading `^` complements the whole set. A backslash makes the next character literal, with
//! no further meaning (`\n` is the letter `n`). Ranges may be written in either order.

use alloc::string::ToString;
use core::iter::Peekable;
use core::str::Chars;

use super::canonical::Canonicalizer;
use super::{CodepointSet, PatternErrorKind, SetError};

/// Reads one possibly escaped character.
fn next_literal(chars: &mut Peekable<Chars<'_>>) -> Result<Option<char>, PatternErrorKind> {
    match chars.next() {
        Some('\\') => chars
            .next()
            .map(Some)
            .ok_or(PatternErrorKind::TrailingEscape),
        other => Ok(other),
    }
}

fn parse_items(body: &str) -> Result<CodepointSet, PatternErrorKind> {
    let mut chars = body.chars().peekable();
    let mut canonicalizer = Canonicalizer::default();
    while let Some(low) = next_literal(&mut chars)? {
        let high = if chars.next_if_eq(&'-').is_some() {
            next_literal(&mut chars)?.ok_or(PatternErrorKind::DanglingRange)?
        } else {
            low
        };
        canonicalizer.push(low as u32, high as u32);
    }
    Ok(canonicalizer.build())
}

impl CodepointSet {
    /// Parses a set pattern.
    ///
    /// A pattern is a sequence of single characters (`abc`) and ranges (`a-z`), optionally
    /// preceded by `^` to take the complement of the result. A backslash escapes the character
    /// after it, so `\-`, `\^` and `\\` stand for themselves.
    ///
    /// # Examples
    ///
    /// ```
    /// use codepoint_set::codepointset::CodepointSet;
    ///
    /// let alnum = CodepointSet::from_pattern("0-9A-Za-z").unwrap();
    /// assert!(alnum.contains('5'));
    /// assert!(alnum.contains('Q'));
    /// assert!(!alnum.contains('_'));
    ///
    /// let not_a = CodepointSet::from_pattern("^a").unwrap();
    /// assert_eq!(not_a, CodepointSet::from_char('a').inverse());
    ///
    /// assert!(CodepointSet::from_pattern("").unwrap().is_empty_singleton());
    /// assert!(CodepointSet::from_pattern("^").unwrap().is_whole_singleton());
    /// assert!(CodepointSet::from_pattern("a-").is_err());
    /// ```
    pub fn from_pattern(pattern: &str) -> Result<Self, SetError> {
        let (invert, body) = match pattern.strip_prefix('^') {
            Some(body) => (true, body),
            None => (false, pattern),
        };
        match parse_items(body) {
            Ok(set) if invert => Ok(set.inverse()),
            Ok(set) => Ok(set),
            Err(kind) => {
                crate::log::warn!("Malformed set pattern {:?}: {}", pattern, kind);
                Err(SetError::MalformedPattern {
                    pattern: pattern.to_string(),
                    kind,
                })
            }
        }
    }
}
