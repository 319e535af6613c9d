//! Document traversal and math event emission.

pub(crate) mod inline;
pub(crate) mod mixed;
pub(crate) mod paragraph;

use crate::events::Listener;
use crate::nodes::{DocTree, NodeId, NodeValue};
use crate::parser::inline::InlineSegment;
use crate::parser::mixed::Segment;
use crate::parser::paragraph::ParagraphClass;
use crate::plain::{BoxedError, DefaultPlainParser, PlainTextParser};
use crate::wrap::{wrap, MathKind};

/// Configuration for emitted math macro events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// The macro identifier passed to every `on_macro` call.
    pub macro_id: String,

    /// Parameter mapping attached to inline math macros.
    pub inline_parameters: Vec<(String, String)>,

    /// Parameter mapping attached to block math macros.
    pub block_parameters: Vec<(String, String)>,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            macro_id: "mathjax".to_string(),
            inline_parameters: Vec::new(),
            block_parameters: Vec::new(),
        }
    }
}

/// Error emitted by the engine.
///
/// Detection itself never fails: malformed or ambiguous spans degrade to
/// literal passthrough.  The only hard failure point is the plain-text
/// sub-parser.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The plain-text sub-parser rejected a literal text segment.
    #[error("error parsing plain text content [{text}]")]
    PlainText {
        /// The text that failed to parse.
        text: String,
        /// The sub-parser's own error.
        #[source]
        source: BoxedError,
    },
}

/// Walk a document tree and emit the ordered event stream, substituting
/// math macro events for every detected `$`/`$$` span.
///
/// Uses the built-in plain-text parser for literal segments.
pub fn emit_document(
    tree: &DocTree,
    options: &Options,
    listener: &mut dyn Listener,
) -> Result<(), Error> {
    emit_document_with_parser(tree, options, listener, &DefaultPlainParser)
}

/// Like [`emit_document`], with a caller-supplied plain-text parser for
/// the literal segments between math spans.
pub fn emit_document_with_parser(
    tree: &DocTree,
    options: &Options,
    listener: &mut dyn Listener,
    plain: &dyn PlainTextParser,
) -> Result<(), Error> {
    let mut emitter = Emitter {
        tree,
        options,
        listener,
        plain,
        consumed: vec![false; tree.len()],
    };
    emitter.visit(tree.root())
}

struct Emitter<'a> {
    tree: &'a DocTree,
    options: &'a Options,
    listener: &'a mut dyn Listener,
    plain: &'a dyn PlainTextParser,
    consumed: Vec<bool>,
}

impl<'a> Emitter<'a> {
    fn visit(&mut self, id: NodeId) -> Result<(), Error> {
        let tree = self.tree;
        match tree.value(id) {
            NodeValue::Document => self.visit_children(id),
            NodeValue::Paragraph => self.visit_paragraph(id),
            NodeValue::Text(text) => self.emit_text_run(text),
            NodeValue::SoftBreak => {
                self.listener.on_space();
                Ok(())
            }
            NodeValue::HardBreak => {
                self.listener.on_new_line();
                Ok(())
            }
            NodeValue::Other(_) => {
                if tree.children(id).is_empty() {
                    self.emit_plain(tree.content(id))
                } else {
                    self.visit_children(id)
                }
            }
        }
    }

    fn visit_children(&mut self, id: NodeId) -> Result<(), Error> {
        let tree = self.tree;
        for &child in tree.children(id) {
            self.visit(child)?;
        }
        Ok(())
    }

    fn visit_paragraph(&mut self, id: NodeId) -> Result<(), Error> {
        if self.consumed[id.index()] {
            return Ok(());
        }

        match paragraph::classify(self.tree, id) {
            ParagraphClass::SingleLineBlock(content) => {
                self.emit_block_macro(&content);
                Ok(())
            }
            ParagraphClass::MergedBlock { content, consumed } => {
                for node in consumed {
                    self.consumed[node.index()] = true;
                }
                self.emit_block_macro(&content);
                Ok(())
            }
            ParagraphClass::Mixed => self.visit_mixed(id),
            ParagraphClass::Plain => {
                self.listener.begin_paragraph();
                self.visit_children(id)?;
                self.listener.end_paragraph();
                Ok(())
            }
        }
    }

    /// Replay the segment list with lazy paragraph boundaries, so block
    /// macro events are never emitted inside an open paragraph and the
    /// surrounding text appears exactly once.
    fn visit_mixed(&mut self, id: NodeId) -> Result<(), Error> {
        let segments = mixed::split(self.tree, id);
        let mut in_paragraph = false;

        for segment in segments {
            match segment {
                Segment::Plain(text) => {
                    if !in_paragraph {
                        self.listener.begin_paragraph();
                        in_paragraph = true;
                    }
                    self.emit_text_run(&text)?;
                }
                Segment::Child(child) => {
                    if !in_paragraph {
                        self.listener.begin_paragraph();
                        in_paragraph = true;
                    }
                    self.visit(child)?;
                }
                Segment::Math(content) => {
                    if in_paragraph {
                        self.listener.end_paragraph();
                        in_paragraph = false;
                    }
                    self.emit_block_macro(&content);
                }
            }
        }

        if in_paragraph {
            self.listener.end_paragraph();
        }
        Ok(())
    }

    fn emit_text_run(&mut self, text: &str) -> Result<(), Error> {
        for segment in inline::split(text) {
            match segment {
                InlineSegment::Plain(literal) => self.emit_plain(literal)?,
                InlineSegment::Math(content) => {
                    let wrapped = wrap(content, MathKind::Inline);
                    self.listener.on_macro(
                        &self.options.macro_id,
                        &self.options.inline_parameters,
                        &wrapped,
                        true,
                    );
                }
            }
        }
        Ok(())
    }

    fn emit_block_macro(&mut self, content: &str) {
        let wrapped = wrap(content, MathKind::Block);
        self.listener.on_macro(
            &self.options.macro_id,
            &self.options.block_parameters,
            &wrapped,
            false,
        );
    }

    fn emit_plain(&mut self, text: &str) -> Result<(), Error> {
        if text.is_empty() {
            return Ok(());
        }
        self.plain
            .parse(text, self.listener)
            .map_err(|source| Error::PlainText {
                text: text.to_string(),
                source,
            })
    }
}
