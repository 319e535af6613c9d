use crate::events::{Event, EventCollector};
use crate::nodes::{DocTree, NodeValue};
use crate::parser::Options;
use crate::{build_tree, emit_document};

mod placeholder;
mod plain;

fn events(source: &str) -> Vec<Event> {
    tree_events(&build_tree(source))
}

fn tree_events(tree: &DocTree) -> Vec<Event> {
    let mut collector = EventCollector::new();
    emit_document(tree, &Options::default(), &mut collector).unwrap();
    collector.into_events()
}

fn trace(source: &str) -> Vec<String> {
    events(source).iter().map(|e| e.to_string()).collect()
}

/// The `(content, inline)` pairs of every macro event, in order.
fn macros(source: &str) -> Vec<(String, bool)> {
    events(source)
        .into_iter()
        .filter_map(|e| match e {
            Event::Macro {
                content, inline, ..
            } => Some((content, inline)),
            _ => None,
        })
        .collect()
}

/// Reassemble the literal text carried by plain-content events, ignoring
/// paragraph boundaries.  Lets tests check that rejected spans survive
/// character for character.
fn rendered_text(events: &[Event]) -> String {
    let mut out = String::new();
    for event in events {
        match event {
            Event::Word(w) => out.push_str(w),
            Event::Space => out.push(' '),
            Event::NewLine => out.push('\n'),
            Event::SpecialSymbol(c) => out.push(*c),
            _ => {}
        }
    }
    out
}

/// Flatten a whole event stream back to text, wrapped macro contents
/// included, paragraphs separated by blank lines.
fn rendered_document(events: &[Event]) -> String {
    let mut out = String::new();
    for event in events {
        match event {
            Event::BeginParagraph => {}
            Event::EndParagraph => out.push_str("\n\n"),
            Event::Word(w) => out.push_str(w),
            Event::Space => out.push(' '),
            Event::NewLine => out.push('\n'),
            Event::SpecialSymbol(c) => out.push(*c),
            Event::Macro {
                content, inline, ..
            } => {
                out.push_str(content);
                if !inline {
                    out.push_str("\n\n");
                }
            }
        }
    }
    out
}
