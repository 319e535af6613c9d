//! The abstract event stream the engine emits.
//!
//! Consumers implement [`Listener`]; the engine pushes paragraph
//! boundaries, plain-text events, and math macro events at it in document
//! order.  [`EventCollector`] is a ready-made listener that records the
//! stream as [`Event`] values for inspection.

use std::fmt;

/// Receiver of the ordered document event stream.
///
/// The math engine only ever calls [`Listener::on_macro`] for detected
/// math spans; all other callbacks carry unmodified plain content.
pub trait Listener {
    /// A paragraph opens.
    fn begin_paragraph(&mut self);

    /// The current paragraph closes.
    fn end_paragraph(&mut self);

    /// A word of plain text.
    fn on_word(&mut self, word: &str);

    /// A single whitespace gap between words.
    fn on_space(&mut self);

    /// A line break within plain content.
    fn on_new_line(&mut self);

    /// A punctuation or symbol character.
    fn on_special_symbol(&mut self, symbol: char);

    /// An atomic macro event.  `inline` distinguishes inline from block
    /// placement; `content` is the wrapped math expression.
    fn on_macro(&mut self, id: &str, parameters: &[(String, String)], content: &str, inline: bool);
}

/// Owned value form of a single listener callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// `begin_paragraph`.
    BeginParagraph,
    /// `end_paragraph`.
    EndParagraph,
    /// `on_word`.
    Word(String),
    /// `on_space`.
    Space,
    /// `on_new_line`.
    NewLine,
    /// `on_special_symbol`.
    SpecialSymbol(char),
    /// `on_macro`.
    Macro {
        /// The configured macro identifier.
        id: String,
        /// The configured parameter mapping for this span kind.
        parameters: Vec<(String, String)>,
        /// The wrapped math expression.
        content: String,
        /// True for inline spans, false for block spans.
        inline: bool,
    },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::BeginParagraph => write!(f, "beginParagraph"),
            Event::EndParagraph => write!(f, "endParagraph"),
            Event::Word(w) => write!(f, "onWord [{}]", w),
            Event::Space => write!(f, "onSpace"),
            Event::NewLine => write!(f, "onNewLine"),
            Event::SpecialSymbol(c) => write!(f, "onSpecialSymbol [{}]", c),
            Event::Macro {
                id,
                content,
                inline,
                ..
            } => write!(f, "onMacro [{}] [inline={}] [{}]", id, inline, content),
        }
    }
}

/// A [`Listener`] that records every callback as an [`Event`].
#[derive(Debug, Default)]
pub struct EventCollector {
    events: Vec<Event>,
}

impl EventCollector {
    /// Create an empty collector.
    pub fn new() -> EventCollector {
        EventCollector::default()
    }

    /// The events recorded so far, in emission order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Consume the collector, yielding the recorded events.
    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

impl Listener for EventCollector {
    fn begin_paragraph(&mut self) {
        self.events.push(Event::BeginParagraph);
    }

    fn end_paragraph(&mut self) {
        self.events.push(Event::EndParagraph);
    }

    fn on_word(&mut self, word: &str) {
        self.events.push(Event::Word(word.to_string()));
    }

    fn on_space(&mut self) {
        self.events.push(Event::Space);
    }

    fn on_new_line(&mut self) {
        self.events.push(Event::NewLine);
    }

    fn on_special_symbol(&mut self, symbol: char) {
        self.events.push(Event::SpecialSymbol(symbol));
    }

    fn on_macro(&mut self, id: &str, parameters: &[(String, String)], content: &str, inline: bool) {
        self.events.push(Event::Macro {
            id: id.to_string(),
            parameters: parameters.to_vec(),
            content: content.to_string(),
            inline,
        });
    }
}
