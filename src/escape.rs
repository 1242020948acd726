// This file is part of codepoint_set. For terms of use, please see the file
// called LICENSE at the top level of the codepoint_set source tree.

//! Printable renderings of single code points.
//!
//! Printable ASCII is written as is. Quotes, backslashes and the common whitespace controls get
//! their usual backslash escapes, and everything else (including unpaired surrogates, which are
//! not `char`s) is written as a `\u{..}` escape with at least four uppercase hex digits.
//!
//! ```
//! use codepoint_set::escape::EscapedCodePoint;
//! use writeable::assert_writeable_eq;
//!
//! assert_writeable_eq!(EscapedCodePoint('a' as u32), "a");
//! assert_writeable_eq!(EscapedCodePoint('\'' as u32), "\\'");
//! assert_writeable_eq!(EscapedCodePoint(0xE9), "\\u{00E9}");
//! assert_writeable_eq!(EscapedCodePoint(0x1F600), "\\u{1F600}");
//! ```

use core::fmt;
use writeable::{LengthHint, Writeable};

/// A code point rendered in escaped, printable form.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EscapedCodePoint(pub u32);

impl EscapedCodePoint {
    fn short_escape(self) -> Option<&'static str> {
        Some(match self.0 {
            0x09 => "\\t",
            0x0A => "\\n",
            0x0D => "\\r",
            0x27 => "\\'",
            0x5C => "\\\\",
            _ => return None,
        })
    }

    fn is_printable_ascii(self) -> bool {
        (0x20..=0x7E).contains(&self.0)
    }

    fn hex_digits(self) -> usize {
        let significant = (u32::BITS - self.0.leading_zeros()).div_ceil(4) as usize;
        significant.max(4)
    }
}

impl Writeable for EscapedCodePoint {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        if let Some(escape) = self.short_escape() {
            return sink.write_str(escape);
        }
        match char::from_u32(self.0) {
            Some(c) if self.is_printable_ascii() => sink.write_char(c),
            _ => write!(sink, "\\u{{{:04X}}}", self.0),
        }
    }

    fn writeable_length_hint(&self) -> LengthHint {
        if let Some(escape) = self.short_escape() {
            LengthHint::exact(escape.len())
        } else if self.is_printable_ascii() {
            LengthHint::exact(1)
        } else {
            // `\u{` + digits + `}`
            LengthHint::exact(4 + self.hex_digits())
        }
    }
}

writeable::impl_display_with_writeable!(EscapedCodePoint);

#[cfg(test)]
mod tests {
    use super::EscapedCodePoint;
    use writeable::assert_writeable_eq;

    #[test]
    fn test_printable_ascii() {
        assert_writeable_eq!(EscapedCodePoint('a' as u32), "a");
        assert_writeable_eq!(EscapedCodePoint(' ' as u32), " ");
        assert_writeable_eq!(EscapedCodePoint('~' as u32), "~");
        assert_writeable_eq!(EscapedCodePoint('-' as u32), "-");
    }

    #[test]
    fn test_short_escapes() {
        assert_writeable_eq!(EscapedCodePoint('\t' as u32), "\\t");
        assert_writeable_eq!(EscapedCodePoint('\n' as u32), "\\n");
        assert_writeable_eq!(EscapedCodePoint('\r' as u32), "\\r");
        assert_writeable_eq!(EscapedCodePoint('\'' as u32), "\\'");
        assert_writeable_eq!(EscapedCodePoint('\\' as u32), "\\\\");
    }

    #[test]
    fn test_hex_escapes() {
        assert_writeable_eq!(EscapedCodePoint(0x0), "\\u{0000}");
        assert_writeable_eq!(EscapedCodePoint(0x7F), "\\u{007F}");
        assert_writeable_eq!(EscapedCodePoint(0x44F), "\\u{044F}");
        assert_writeable_eq!(EscapedCodePoint(0xD800), "\\u{D800}");
        assert_writeable_eq!(EscapedCodePoint(0x1F600), "\\u{1F600}");
        assert_writeable_eq!(EscapedCodePoint(0x10FFFF), "\\u{10FFFF}");
    }

    #[test]
    fn test_display() {
        assert_eq!(EscapedCodePoint(0xFFFD).to_string(), "\\u{FFFD}");
    }
}
