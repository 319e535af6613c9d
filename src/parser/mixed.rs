//! Splitting of paragraphs that mix ordinary content with `$$` block math.

use smallvec::SmallVec;

use crate::nodes::{DocTree, NodeId, NodeValue};
use crate::scanners;
use crate::strings;
use crate::wrap::MathKind;

/// One piece of a mixed paragraph, in source order.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Segment {
    /// Accumulated plain text (soft breaks folded to spaces, hard breaks
    /// to newlines).
    Plain(String),

    /// A non-text child node, replayed by the normal traversal.
    Child(NodeId),

    /// The content of one embedded block math span, enclosing line breaks
    /// stripped.
    Math(String),
}

pub(crate) type SegmentList = SmallVec<[Segment; 8]>;

/// Rebuild a mixed paragraph as an ordered list of plain-text, child-node,
/// and block-math segments.
///
/// Text children are scanned for `$$...$$` runs; anything outside a valid
/// run lands in a running plain-text accumulator, which is flushed before
/// every math or child segment.  An invalid run (unterminated, or empty
/// after stripping) is appended to the accumulator as literal text.
pub(crate) fn split(tree: &DocTree, paragraph: NodeId) -> SegmentList {
    let mut segments = SegmentList::new();
    let mut acc = String::new();

    for &child in tree.children(paragraph) {
        match tree.value(child) {
            NodeValue::Text(text) => split_text(text, &mut acc, &mut segments),
            NodeValue::SoftBreak => acc.push(' '),
            NodeValue::HardBreak => acc.push('\n'),
            _ => {
                flush(&mut acc, &mut segments);
                segments.push(Segment::Child(child));
            }
        }
    }

    flush(&mut acc, &mut segments);
    segments
}

fn split_text(text: &str, acc: &mut String, segments: &mut SegmentList) {
    let bytes = text.as_bytes();
    let mut ix = 0;

    while ix < bytes.len() {
        let open = match find_block_open(bytes, ix) {
            Some(open) => open,
            None => {
                acc.push_str(&text[ix..]);
                return;
            }
        };
        acc.push_str(&text[ix..open]);

        match scanners::find_closing(MathKind::Block, bytes, open + 2) {
            None => {
                acc.push_str(&text[open..]);
                return;
            }
            Some(close) => {
                let between = &text[open + 2..close];
                let stripped = strings::strip_enclosing_line_breaks(between);
                if stripped.trim().is_empty() {
                    acc.push_str(&text[open..close + 2]);
                } else {
                    flush(acc, segments);
                    segments.push(Segment::Math(stripped.to_string()));
                }
                ix = close + 2;
            }
        }
    }
}

/// Next unescaped `$$` run start at or after `from`; lone dollars are left
/// for the inline detector.
fn find_block_open(bytes: &[u8], from: usize) -> Option<usize> {
    let dollars = jetscii::bytes!(b'$');
    let mut ix = from;
    while ix < bytes.len() {
        let candidate = ix + dollars.find(&bytes[ix..])?;
        let run = scanners::count_run(bytes, candidate);
        if run >= 2 && !scanners::is_escaped(bytes, candidate) {
            return Some(candidate);
        }
        ix = candidate + run.max(1);
    }
    None
}

fn flush(acc: &mut String, segments: &mut SegmentList) {
    if !acc.is_empty() {
        segments.push(Segment::Plain(std::mem::take(acc)));
    }
}
