//! A minimal block-level builder for hosts without their own Markdown
//! front end.
//!
//! Splits source into blank-line-separated paragraphs and records each
//! paragraph's raw character content alongside per-line text children,
//! which is all the downstream math detection needs.  Anything richer
//! (lists, headings, code fences) is expected to come from the host
//! grammar as [`NodeValue::Other`] nodes.

use crate::nodes::{DocTree, NodeValue};

/// Build a document tree from raw source.
///
/// Lines are trimmed into [`NodeValue::Text`] children joined by soft
/// breaks, or a hard break when the source line ends in two or more
/// spaces.  The untouched line content, trailing newlines included, is
/// kept as the paragraph's raw content.
pub fn build_tree(source: &str) -> DocTree {
    let mut tree = DocTree::new();
    let root = tree.root();

    let mut raw = String::new();
    let mut lines: Vec<(String, bool)> = Vec::new();

    for line in source.split_inclusive('\n') {
        let stripped = line.strip_suffix('\n').unwrap_or(line);
        let stripped = stripped.strip_suffix('\r').unwrap_or(stripped);

        if stripped.trim().is_empty() {
            flush_paragraph(&mut tree, root, &mut raw, &mut lines);
            continue;
        }

        raw.push_str(line);
        let hard_break = stripped.ends_with("  ");
        lines.push((stripped.trim().to_string(), hard_break));
    }

    flush_paragraph(&mut tree, root, &mut raw, &mut lines);
    tree
}

fn flush_paragraph(
    tree: &mut DocTree,
    root: crate::nodes::NodeId,
    raw: &mut String,
    lines: &mut Vec<(String, bool)>,
) {
    if lines.is_empty() {
        raw.clear();
        return;
    }

    let paragraph = tree.add_with_content(root, NodeValue::Paragraph, raw.as_str());
    let last = lines.len() - 1;
    for (ix, (line, hard_break)) in lines.drain(..).enumerate() {
        tree.add(paragraph, NodeValue::Text(line));
        if ix < last {
            tree.add(
                paragraph,
                if hard_break {
                    NodeValue::HardBreak
                } else {
                    NodeValue::SoftBreak
                },
            );
        }
    }
    raw.clear();
}
