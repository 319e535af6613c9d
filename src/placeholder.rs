//! The pre-parse substitution strategy.
//!
//! Instead of scanning a parsed tree, [`substitute`] rewrites the raw
//! source before generic Markdown parsing, replacing each math span with
//! a sentinel-bounded placeholder token the grammar will carry through
//! untouched.  After parsing, [`resolve`] turns surviving placeholders in
//! output text back into macro events.  The token table lives for exactly
//! one parse invocation and is owned by the caller; an id is removed on
//! resolution so substitution happens at most once.

use rustc_hash::FxHashMap;

use crate::events::Listener;
use crate::parser::{Error, Options};
use crate::plain::PlainTextParser;
use crate::scanners;
use crate::strings;
use crate::wrap::{wrap, MathKind};

/// Non-printable marker bounding a placeholder token, chosen so it cannot
/// collide with ordinary document text.
pub const SENTINEL: char = '\u{0007}';

const INLINE_PREFIX: &str = "MI";
const BLOCK_PREFIX: &str = "MB";

/// One recorded math span awaiting resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathToken {
    /// The raw expression text between the delimiters.
    pub content: String,

    /// Inline or block.
    pub kind: MathKind,
}

/// Placeholder-to-span table scoped to a single parse invocation.
#[derive(Debug, Default)]
pub struct TokenTable {
    tokens: FxHashMap<String, MathToken>,
    inline_counter: usize,
    block_counter: usize,
}

impl TokenTable {
    /// Number of unresolved tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether no tokens remain.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Remove and return the span behind a placeholder.  `None` for a
    /// placeholder that was never issued or was already resolved.
    pub fn consume(&mut self, placeholder: &str) -> Option<MathToken> {
        self.tokens.remove(placeholder)
    }

    /// Byte range of the next sentinel-bounded substring of `text` at or
    /// after `from` that is present in the table.  Sentinel patterns with
    /// no table entry are skipped, leaving them as literal text.
    pub fn find_next(&self, text: &str, from: usize) -> Option<(usize, usize)> {
        if self.tokens.is_empty() {
            return None;
        }

        let bytes = text.as_bytes();
        let sentinels = jetscii::bytes!(b'\x07');
        let mut start = from + sentinels.find(bytes.get(from..)?)?;
        loop {
            let end = start + 1 + sentinels.find(&bytes[start + 1..])?;
            if self.tokens.contains_key(&text[start..=end]) {
                return Some((start, end + 1));
            }
            // A stray sentinel's closing byte may itself open a token.
            start = end;
        }
    }

    fn issue(&mut self, kind: MathKind, content: &str) -> String {
        let (prefix, counter) = match kind {
            MathKind::Inline => (INLINE_PREFIX, &mut self.inline_counter),
            MathKind::Block => (BLOCK_PREFIX, &mut self.block_counter),
        };
        let placeholder = format!("{}{}{}{}", SENTINEL, prefix, *counter, SENTINEL);
        *counter += 1;
        self.tokens.insert(
            placeholder.clone(),
            MathToken {
                content: content.to_string(),
                kind,
            },
        );
        placeholder
    }
}

/// Replace every detected math span in `source` with a unique placeholder
/// token, recording the spans in the returned table.
///
/// Mirrors the delimiter rules of the post-parse detectors: escaped
/// dollars stay literal, unterminated spans and spans that are empty
/// after stripping degrade to literal passthrough.
pub fn substitute(source: &str) -> (String, TokenTable) {
    let bytes = source.as_bytes();
    let dollars = jetscii::bytes!(b'$');
    let mut output = String::with_capacity(source.len());
    let mut table = TokenTable::default();
    let mut ix = 0;

    while ix < bytes.len() {
        let open = match dollars.find(&bytes[ix..]) {
            Some(offset) => ix + offset,
            None => {
                output.push_str(&source[ix..]);
                break;
            }
        };
        output.push_str(&source[ix..open]);

        let run = scanners::count_run(bytes, open);
        let escaped = scanners::is_escaped(bytes, open);

        if run >= 2 && !escaped {
            match scanners::find_closing(MathKind::Block, bytes, open + 2) {
                None => {
                    output.push_str(&source[open..]);
                    break;
                }
                Some(close) => {
                    let between = &source[open + 2..close];
                    let stripped = strings::strip_enclosing_line_breaks(between);
                    if stripped.trim().is_empty() {
                        output.push_str(&source[open..close + 2]);
                    } else {
                        output.push_str(&table.issue(MathKind::Block, between));
                    }
                    ix = close + 2;
                }
            }
        } else if run == 1 && !escaped {
            match scanners::find_closing(MathKind::Inline, bytes, open + 1) {
                None => {
                    output.push_str(&source[open..]);
                    break;
                }
                Some(close) => {
                    let between = &source[open + 1..close];
                    if scanners::usable_inline_interior(between) {
                        output.push_str(&table.issue(MathKind::Inline, between.trim()));
                    } else {
                        output.push_str(&source[open..close + 1]);
                    }
                    ix = close + 1;
                }
            }
        } else {
            output.push('$');
            ix = open + 1;
        }
    }

    (output, table)
}

/// Scan parsed output text for placeholder tokens and re-emit it, turning
/// each surviving placeholder back into a macro event and everything else
/// into plain-content events.
pub fn resolve(
    text: &str,
    table: &mut TokenTable,
    options: &Options,
    listener: &mut dyn Listener,
    plain: &dyn PlainTextParser,
) -> Result<(), Error> {
    let mut ix = 0;

    while let Some((start, end)) = table.find_next(text, ix) {
        emit_plain(&text[ix..start], listener, plain)?;
        match table.consume(&text[start..end]) {
            Some(token) => {
                let inline = token.kind.is_inline();
                let parameters = if inline {
                    &options.inline_parameters
                } else {
                    &options.block_parameters
                };
                let wrapped = wrap(&token.content, token.kind);
                listener.on_macro(&options.macro_id, parameters, &wrapped, inline);
            }
            // Collision with literal sentinel bytes; keep the text.
            None => emit_plain(&text[start..end], listener, plain)?,
        }
        ix = end;
    }

    emit_plain(&text[ix..], listener, plain)
}

fn emit_plain(
    text: &str,
    listener: &mut dyn Listener,
    plain: &dyn PlainTextParser,
) -> Result<(), Error> {
    if text.is_empty() {
        return Ok(());
    }
    plain
        .parse(text, listener)
        .map_err(|source| Error::PlainText {
            text: text.to_string(),
            source,
        })
}
