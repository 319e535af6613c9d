//! Detection and substitution of TeX-style math spans in Markdown.
//!
//! `$...$` and `$$...$$` delimiters clash with the Markdown grammar, so
//! this crate extracts math spans before they can be mangled and re-emits
//! them as atomic macro events on a [`Listener`].  Two strategies are
//! provided: a post-parse walk over a document tree
//! ([`emit_document`]), and a pre-parse placeholder rewrite for hosts
//! that run their own Markdown grammar first ([`substitute`] /
//! [`resolve`]).
//!
//! ```
//! use mathdown::{build_tree, emit_document, EventCollector, Options};
//!
//! let tree = build_tree("Pythagoras says $a^2 + b^2 = c^2$ holds.\n");
//! let mut collector = EventCollector::default();
//! emit_document(&tree, &Options::default(), &mut collector).unwrap();
//!
//! let rendered: Vec<String> =
//!     collector.events().iter().map(|e| e.to_string()).collect();
//! assert!(rendered
//!     .iter()
//!     .any(|e| e.contains("onMacro [mathjax]")));
//! ```

#![deny(missing_docs)]

mod blocks;
pub mod events;
pub mod nodes;
mod parser;
mod placeholder;
pub mod plain;
mod scanners;
mod strings;
mod wrap;

#[cfg(test)]
mod tests;

pub use blocks::build_tree;
pub use events::{Event, EventCollector, Listener};
pub use nodes::{DocTree, Node, NodeId, NodeValue};
pub use parser::{emit_document, emit_document_with_parser, Error, Options};
pub use placeholder::{resolve, substitute, MathToken, TokenTable, SENTINEL};
pub use plain::{BoxedError, DefaultPlainParser, PlainTextParser};
pub use wrap::{wrap, MathKind};
