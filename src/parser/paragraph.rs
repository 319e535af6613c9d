//! Classification of paragraphs and merging of multi-paragraph math blocks.

use crate::nodes::{DocTree, NodeId, NodeValue};
use crate::scanners;
use crate::strings;
use crate::wrap::MathKind;

/// What a paragraph turned out to be.  Terminal per paragraph.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ParagraphClass {
    /// The whole paragraph is one `$$ ... $$` expression; carries the
    /// content with outer delimiters and enclosing line breaks removed.
    SingleLineBlock(String),

    /// A standalone `$$` opener merged with following sibling paragraphs
    /// up to a standalone `$$` closer.
    MergedBlock {
        /// The concatenated raw text of the intervening paragraphs,
        /// enclosing line breaks stripped.
        content: String,
        /// The intervening paragraphs and the closer, all of which must
        /// be skipped by the normal traversal.
        consumed: Vec<NodeId>,
    },

    /// The paragraph mixes ordinary content with embedded `$$` runs.
    Mixed,

    /// No block math involvement; emit begin/children/end as usual.
    Plain,
}

pub(crate) fn classify(tree: &DocTree, paragraph: NodeId) -> ParagraphClass {
    let trimmed = tree.content(paragraph).trim();
    let bytes = trimmed.as_bytes();

    if let Some(content) = single_line_block(trimmed) {
        return ParagraphClass::SingleLineBlock(content);
    }

    if trimmed == "$$" {
        // An opener with no matching closer degrades to a literal
        // paragraph; nothing is consumed.
        return match merge_following(tree, paragraph) {
            Some((content, consumed)) => ParagraphClass::MergedBlock { content, consumed },
            None => ParagraphClass::Plain,
        };
    }

    if contains_block_run(bytes) {
        ParagraphClass::Mixed
    } else {
        ParagraphClass::Plain
    }
}

/// `$$ ... $$` filling the entire (trimmed) paragraph: the first unescaped
/// `$$` after the opener must be the final two characters.
fn single_line_block(trimmed: &str) -> Option<String> {
    let bytes = trimmed.as_bytes();
    if !(trimmed.starts_with("$$") && trimmed.ends_with("$$") && trimmed.len() > 4) {
        return None;
    }
    if scanners::find_closing(MathKind::Block, bytes, 2) != Some(trimmed.len() - 2) {
        return None;
    }

    let content = strings::strip_enclosing_line_breaks(&trimmed[2..trimmed.len() - 2]);
    if content.trim().is_empty() {
        return None;
    }
    Some(content.to_string())
}

/// Scan forward through the immediate run of sibling paragraphs for a
/// standalone `$$` closer, accumulating the raw text in between.  A
/// non-paragraph sibling ends the search; so does running out of
/// siblings.
fn merge_following(tree: &DocTree, opener: NodeId) -> Option<(String, Vec<NodeId>)> {
    let mut between = Vec::new();
    let mut closer = None;
    let mut current = tree.next_sibling(opener);

    while let Some(node) = current {
        if *tree.value(node) != NodeValue::Paragraph {
            break;
        }
        if tree.content(node).trim() == "$$" {
            closer = Some(node);
            break;
        }
        between.push(node);
        current = tree.next_sibling(node);
    }

    let closer = closer?;

    let mut builder = String::new();
    for &node in &between {
        if !builder.is_empty() && !builder.ends_with('\n') {
            builder.push('\n');
        }
        builder.push_str(tree.content(node));
    }

    let content = strings::strip_enclosing_line_breaks(&builder);
    if content.trim().is_empty() {
        return None;
    }
    let content = content.to_string();

    let mut consumed = between;
    consumed.push(closer);
    Some((content, consumed))
}

/// Whether the raw text holds any unescaped `$$` run at all.
fn contains_block_run(bytes: &[u8]) -> bool {
    let dollars = jetscii::bytes!(b'$');
    let mut ix = 0;
    while ix < bytes.len() {
        let candidate = match dollars.find(&bytes[ix..]) {
            Some(offset) => ix + offset,
            None => return false,
        };
        let run = scanners::count_run(bytes, candidate);
        if run >= 2 && !scanners::is_escaped(bytes, candidate) {
            return true;
        }
        ix = candidate + run.max(1);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::{classify, ParagraphClass};
    use crate::nodes::{DocTree, NodeValue};

    fn paragraph(tree: &mut DocTree, raw: &str) -> crate::nodes::NodeId {
        let root = tree.root();
        let p = tree.add_with_content(root, NodeValue::Paragraph, raw);
        tree.add(p, NodeValue::Text(raw.trim().to_string()));
        p
    }

    #[test]
    fn single_line_block() {
        let mut tree = DocTree::new();
        let p = paragraph(&mut tree, "$$\nA^2 + B^2 = C^2\n$$\n");
        assert_eq!(
            classify(&tree, p),
            ParagraphClass::SingleLineBlock("A^2 + B^2 = C^2".into())
        );
    }

    #[test]
    fn interior_pair_defeats_single_line() {
        let mut tree = DocTree::new();
        let p = paragraph(&mut tree, "$$a$$b$$\n");
        assert_eq!(classify(&tree, p), ParagraphClass::Mixed);
    }

    #[test]
    fn merge_across_siblings() {
        let mut tree = DocTree::new();
        let opener = paragraph(&mut tree, "$$\n");
        let line1 = paragraph(&mut tree, "LINE1\n");
        let line2 = paragraph(&mut tree, "LINE2\n");
        let closer = paragraph(&mut tree, "$$\n");

        match classify(&tree, opener) {
            ParagraphClass::MergedBlock { content, consumed } => {
                assert_eq!(content, "LINE1\nLINE2");
                assert_eq!(consumed, vec![line1, line2, closer]);
            }
            other => panic!("expected merge, got {:?}", other),
        }
    }

    #[test]
    fn unclosed_opener_is_plain() {
        let mut tree = DocTree::new();
        let opener = paragraph(&mut tree, "$$\n");
        paragraph(&mut tree, "orphan\n");
        assert_eq!(classify(&tree, opener), ParagraphClass::Plain);
    }

    #[test]
    fn intervening_non_paragraph_stops_the_merge() {
        let mut tree = DocTree::new();
        let opener = paragraph(&mut tree, "$$\n");
        let root = tree.root();
        tree.add(root, NodeValue::Other("thematic_break".into()));
        paragraph(&mut tree, "$$\n");
        assert_eq!(classify(&tree, opener), ParagraphClass::Plain);
    }

    #[test]
    fn ordinary_text_is_plain() {
        let mut tree = DocTree::new();
        let p = paragraph(&mut tree, "Given data of $x$:\n");
        assert_eq!(classify(&tree, p), ParagraphClass::Plain);
    }
}
