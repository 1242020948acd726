// This file is part of codepoint_set. For terms of use, please see the file
// called LICENSE at the top level of the codepoint_set source tree.

use core::fmt;
use writeable::{LengthHint, Writeable};

use super::CodepointSet;
use crate::escape::EscapedCodePoint;

fn write_quoted<W: fmt::Write + ?Sized>(sink: &mut W, cp: u32) -> fmt::Result {
    sink.write_char('\'')?;
    EscapedCodePoint(cp).write_to(sink)?;
    sink.write_char('\'')
}

/// Renders the set as a bracketed list of quoted code points and ranges, such as
/// `[ 'a'-'c', 'x' ]`. The empty set renders as `[ ]`.
///
/// ```
/// use codepoint_set::codepointset::CodepointSet;
/// use writeable::assert_writeable_eq;
///
/// let set = CodepointSet::from_pattern("xa-c").unwrap();
/// assert_writeable_eq!(set, "[ 'a'-'c', 'x' ]");
/// assert_writeable_eq!(CodepointSet::empty(), "[ ]");
/// ```
impl Writeable for CodepointSet {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        sink.write_char('[')?;
        for (i, range) in self.iter_ranges().enumerate() {
            if i > 0 {
                sink.write_char(',')?;
            }
            sink.write_char(' ')?;
            write_quoted(sink, *range.start())?;
            if range.start() != range.end() {
                sink.write_char('-')?;
                write_quoted(sink, *range.end())?;
            }
        }
        sink.write_str(" ]")
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let quoted = |cp: u32| EscapedCodePoint(cp).writeable_length_hint() + 2;
        self.iter_ranges()
            .enumerate()
            .map(|(i, range)| {
                let separator = if i > 0 { 2 } else { 1 };
                let end = if range.start() != range.end() {
                    quoted(*range.end()) + 1
                } else {
                    LengthHint::exact(0)
                };
                quoted(*range.start()) + end + separator
            })
            .sum::<LengthHint>()
            + 3
    }
}

writeable::impl_display_with_writeable!(CodepointSet);
