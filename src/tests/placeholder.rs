use super::*;
use crate::plain::DefaultPlainParser;
use crate::{resolve, substitute, MathKind, SENTINEL};
use ntest::test_case;
use pretty_assertions::assert_eq;

#[test]
fn issues_inline_placeholders() {
    let (out, table) = substitute("inline $x + y$ here");
    assert_eq!(out, format!("inline {s}MI0{s} here", s = SENTINEL));
    assert_eq!(table.len(), 1);
}

#[test]
fn issues_block_placeholders() {
    let (out, table) = substitute("$$a + b$$");
    assert_eq!(out, format!("{s}MB0{s}", s = SENTINEL));
    assert_eq!(table.len(), 1);
}

#[test]
fn counters_run_per_kind() {
    let (out, _) = substitute("$a$ $$b$$ $c$");
    assert_eq!(out, format!("{s}MI0{s} {s}MB0{s} {s}MI1{s}", s = SENTINEL));
}

#[test_case("\\$x\\$")]
#[test_case("costs $20")]
#[test_case("$ $")]
#[test_case("$a \n $")]
#[test_case("$$  $$")]
fn literal_sources_pass_through(source: &str) {
    let (out, table) = substitute(source);
    assert_eq!(out, source);
    assert!(table.is_empty());
}

#[test]
fn line_break_interiors_are_literal_in_both_strategies() {
    let source = "$a \n $";
    assert_eq!(macros(source), vec![]);

    let (out, table) = substitute(source);
    assert_eq!(out, source);
    assert!(table.is_empty());
}

#[test]
fn block_tokens_keep_the_raw_interior() {
    let (out, mut table) = substitute("$$\nE = mc^2\n$$");
    let token = table.consume(&out).unwrap();
    assert_eq!(token.kind, MathKind::Block);
    assert_eq!(token.content, "\nE = mc^2\n");
}

#[test]
fn resolves_back_to_macro_events() {
    let (out, mut table) = substitute("sum $a + b$ done");
    let mut collector = EventCollector::new();
    resolve(
        &out,
        &mut table,
        &Options::default(),
        &mut collector,
        &DefaultPlainParser,
    )
    .unwrap();

    assert!(table.is_empty());
    let rendered: Vec<String> = collector.events().iter().map(|e| e.to_string()).collect();
    assert_eq!(
        rendered,
        vec![
            "onWord [sum]",
            "onSpace",
            "onMacro [mathjax] [inline=true] [\\(a + b\\)]",
            "onSpace",
            "onWord [done]",
        ]
    );
}

#[test]
fn each_placeholder_resolves_at_most_once() {
    let (out, mut table) = substitute("$x$");
    let doubled = format!("{} {}", out, out);
    let mut collector = EventCollector::new();
    resolve(
        &doubled,
        &mut table,
        &Options::default(),
        &mut collector,
        &DefaultPlainParser,
    )
    .unwrap();

    let macro_count = collector
        .events()
        .iter()
        .filter(|e| matches!(e, Event::Macro { .. }))
        .count();
    assert_eq!(macro_count, 1);
}

#[test]
fn stray_sentinels_stay_literal() {
    let (out, mut table) = substitute("$x$");
    let text = format!("{}noise{}", SENTINEL, out);
    let mut collector = EventCollector::new();
    resolve(
        &text,
        &mut table,
        &Options::default(),
        &mut collector,
        &DefaultPlainParser,
    )
    .unwrap();

    assert!(table.is_empty());
    let macro_count = collector
        .events()
        .iter()
        .filter(|e| matches!(e, Event::Macro { .. }))
        .count();
    assert_eq!(macro_count, 1);
}
