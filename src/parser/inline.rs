//! Detection of single-`$` math spans inside a text run.

use smallvec::SmallVec;

use crate::scanners;
use crate::wrap::MathKind;

/// One piece of a scanned text run, in source order.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum InlineSegment<'t> {
    /// Literal text, to be re-parsed through the plain-text pipeline.
    Plain(&'t str),

    /// The trimmed content of one inline math span.
    Math(&'t str),
}

/// Split a text run into literal text and inline math spans.
///
/// Escaped dollars stay literal, `$$` runs are passed through untouched
/// so block syntax is never misread as inline, and a span whose interior
/// is empty after trimming or crosses a line break is rejected as
/// literal.  An unterminated opener swallows the rest of the run as
/// literal text.
pub(crate) fn split(text: &str) -> SmallVec<[InlineSegment<'_>; 4]> {
    let bytes = text.as_bytes();
    let dollars = jetscii::bytes!(b'$');
    let mut segments: SmallVec<[InlineSegment<'_>; 4]> = SmallVec::new();
    let mut ix = 0;

    while ix < bytes.len() {
        let open = match dollars.find(&bytes[ix..]) {
            Some(offset) => ix + offset,
            None => {
                segments.push(InlineSegment::Plain(&text[ix..]));
                break;
            }
        };

        if scanners::is_escaped(bytes, open) {
            segments.push(InlineSegment::Plain(&text[ix..open + 1]));
            ix = open + 1;
            continue;
        }

        let run = scanners::count_run(bytes, open);
        if run != 1 {
            segments.push(InlineSegment::Plain(&text[ix..open + run]));
            ix = open + run;
            continue;
        }

        let close = match scanners::find_closing(MathKind::Inline, bytes, open + 1) {
            Some(close) => close,
            None => {
                segments.push(InlineSegment::Plain(&text[ix..]));
                break;
            }
        };

        let between = &text[open + 1..close];
        if !scanners::usable_inline_interior(between) {
            segments.push(InlineSegment::Plain(&text[ix..close + 1]));
            ix = close + 1;
            continue;
        }

        if open > ix {
            segments.push(InlineSegment::Plain(&text[ix..open]));
        }
        segments.push(InlineSegment::Math(between.trim()));
        ix = close + 1;
    }

    segments
}
