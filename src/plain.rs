//! Conversion of literal text into plain-content events.
//!
//! Text outside math spans is never copied into the output verbatim: it
//! goes through a [`PlainTextParser`] so backslash escapes are honoured
//! and words, spaces, and symbols come out as distinct events.

use unicode_categories::UnicodeCategories;

use crate::events::Listener;

/// Boxed error type surfaced by plain-text parser implementations.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The seam for the external plain-text-to-events parser.
pub trait PlainTextParser {
    /// Emit the given text as word/space/newline/symbol events.
    fn parse(&self, text: &str, listener: &mut dyn Listener) -> Result<(), BoxedError>;
}

/// The built-in plain-text parser.
///
/// Splits on whitespace, emitting `on_space` per gap character and
/// `on_new_line` per `\n` (`\r` is dropped).  Punctuation and symbol
/// characters become `on_special_symbol`; a backslash before ASCII
/// punctuation escapes it, emitting only the escaped character.
/// Everything else accumulates into words.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPlainParser;

impl PlainTextParser for DefaultPlainParser {
    fn parse(&self, text: &str, listener: &mut dyn Listener) -> Result<(), BoxedError> {
        let mut word = String::new();
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '\r' {
                continue;
            }
            if c == '\n' {
                flush(&mut word, listener);
                listener.on_new_line();
            } else if c.is_whitespace() {
                flush(&mut word, listener);
                listener.on_space();
            } else if c == '\\' && chars.peek().map_or(false, |n| n.is_ascii_punctuation()) {
                flush(&mut word, listener);
                if let Some(escaped) = chars.next() {
                    listener.on_special_symbol(escaped);
                }
            } else if c.is_punctuation() || c.is_symbol() {
                flush(&mut word, listener);
                listener.on_special_symbol(c);
            } else {
                word.push(c);
            }
        }

        flush(&mut word, listener);
        Ok(())
    }
}

fn flush(word: &mut String, listener: &mut dyn Listener) {
    if !word.is_empty() {
        listener.on_word(word);
        word.clear();
    }
}
