//! Delimiter scanning and span-interior validation shared by every
//! detection strategy.
//!
//! The offset functions are pure and operate on bytes.  `$` and `\` are
//! ASCII, so every offset produced is a valid `str` boundary.

use crate::strings;
use crate::wrap::MathKind;

/// Length of the maximal run of `$` starting at `pos`.  Zero if the byte
/// at `pos` is not a dollar sign or `pos` is out of bounds.
pub fn count_run(bytes: &[u8], pos: usize) -> usize {
    let mut ix = pos;
    while ix < bytes.len() && bytes[ix] == b'$' {
        ix += 1;
    }
    ix - pos
}

/// Whether the byte at `pos` is preceded by an odd number of consecutive
/// backslashes, making it a literal character rather than a delimiter.
pub fn is_escaped(bytes: &[u8], pos: usize) -> bool {
    let mut backslashes = 0;
    let mut ix = pos;
    while ix > 0 && bytes[ix - 1] == b'\\' {
        backslashes += 1;
        ix -= 1;
    }
    backslashes & 1 == 1
}

/// Find the next unescaped closing delimiter of the given kind at or after
/// `from`: a lone `$` for inline math, a `$$` pair for block math.
/// Escaped dollars and runs of the wrong length are skipped.
pub fn find_closing(kind: MathKind, bytes: &[u8], from: usize) -> Option<usize> {
    let dollars = jetscii::bytes!(b'$');
    let mut ix = from;
    while ix < bytes.len() {
        let candidate = ix + dollars.find(&bytes[ix..])?;
        if is_escaped(bytes, candidate) {
            ix = candidate + 1;
            continue;
        }
        match kind {
            MathKind::Inline => {
                let run = count_run(bytes, candidate);
                if run == 1 {
                    return Some(candidate);
                }
                ix = candidate + run;
            }
            MathKind::Block => {
                if bytes.get(candidate + 1) == Some(&b'$') {
                    return Some(candidate);
                }
                ix = candidate + 1;
            }
        }
    }
    None
}

/// Whether the raw interior of an inline span is usable as math content:
/// non-empty after trimming and free of line breaks.  Judged on the raw
/// text, before any trimming, so every strategy accepts the same spans.
pub fn usable_inline_interior(between: &str) -> bool {
    !between.trim().is_empty() && !strings::contains_line_break(between)
}

#[cfg(test)]
mod tests {
    use super::{count_run, find_closing, is_escaped, usable_inline_interior};
    use crate::wrap::MathKind;

    #[test]
    fn counts_dollar_runs() {
        assert_eq!(count_run(b"$$$x", 0), 3);
        assert_eq!(count_run(b"$$$x", 1), 2);
        assert_eq!(count_run(b"$$$x", 3), 0);
        assert_eq!(count_run(b"", 0), 0);
    }

    #[test]
    fn escape_parity() {
        assert!(is_escaped(b"\\$", 1));
        assert!(!is_escaped(b"\\\\$", 2));
        assert!(is_escaped(b"\\\\\\$", 3));
        assert!(!is_escaped(b"$", 0));
    }

    #[test]
    fn finds_inline_closing() {
        assert_eq!(find_closing(MathKind::Inline, b"x$y", 0), Some(1));
        assert_eq!(find_closing(MathKind::Inline, b"x\\$y$", 0), Some(4));
        assert_eq!(find_closing(MathKind::Inline, b"x$$y$", 0), Some(4));
        assert_eq!(find_closing(MathKind::Inline, b"x\\$y", 0), None);
    }

    #[test]
    fn finds_block_closing() {
        assert_eq!(find_closing(MathKind::Block, b"a$$b", 0), Some(1));
        assert_eq!(find_closing(MathKind::Block, b"a$b$$", 0), Some(3));
        assert_eq!(find_closing(MathKind::Block, b"a\\$$b$$", 0), Some(5));
        assert_eq!(find_closing(MathKind::Block, b"a$b$c", 0), None);
    }

    #[test]
    fn judges_inline_interiors() {
        assert!(usable_inline_interior("a + b"));
        assert!(usable_inline_interior(" x "));
        assert!(!usable_inline_interior("   "));
        assert!(!usable_inline_interior("a \n "));
        assert!(!usable_inline_interior("a\rb"));
    }
}
