use super::*;
use crate::emit_document_with_parser;
use crate::events::Listener;
use crate::plain::{BoxedError, DefaultPlainParser, PlainTextParser};
use pretty_assertions::assert_eq;

#[test]
fn words_symbols_and_spaces() {
    assert_eq!(
        trace("Hello, world!\n"),
        vec![
            "beginParagraph",
            "onWord [Hello]",
            "onSpecialSymbol [,]",
            "onSpace",
            "onWord [world]",
            "onSpecialSymbol [!]",
            "endParagraph",
        ]
    );
}

#[test]
fn escaped_markup_reconstructs() {
    let events = events("\\$x\\$\n");
    assert_eq!(rendered_text(&events), "$x$");
}

#[test]
fn soft_break_becomes_space() {
    assert_eq!(
        trace("first\nsecond\n"),
        vec![
            "beginParagraph",
            "onWord [first]",
            "onSpace",
            "onWord [second]",
            "endParagraph",
        ]
    );
}

#[test]
fn hard_break_becomes_new_line() {
    assert_eq!(
        trace("first  \nsecond\n"),
        vec![
            "beginParagraph",
            "onWord [first]",
            "onNewLine",
            "onWord [second]",
            "endParagraph",
        ]
    );
}

#[test]
fn currency_symbols_are_special() {
    assert_eq!(
        trace("price €5\n"),
        vec![
            "beginParagraph",
            "onWord [price]",
            "onSpace",
            "onSpecialSymbol [€]",
            "onWord [5]",
            "endParagraph",
        ]
    );
}

#[test]
fn carriage_returns_are_dropped() {
    let mut collector = EventCollector::new();
    DefaultPlainParser.parse("a\r\nb", &mut collector).unwrap();

    let rendered: Vec<String> = collector.events().iter().map(|e| e.to_string()).collect();
    assert_eq!(rendered, vec!["onWord [a]", "onNewLine", "onWord [b]"]);
}

struct RejectingParser;

impl PlainTextParser for RejectingParser {
    fn parse(&self, _text: &str, _listener: &mut dyn Listener) -> Result<(), BoxedError> {
        Err("unsupported".into())
    }
}

#[test]
fn plain_parser_failures_carry_the_text() {
    let tree = build_tree("hello\n");
    let mut collector = EventCollector::new();
    let err = emit_document_with_parser(
        &tree,
        &Options::default(),
        &mut collector,
        &RejectingParser,
    )
    .unwrap_err();

    assert_eq!(err.to_string(), "error parsing plain text content [hello]");
}
