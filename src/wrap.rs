//! Wrapping of raw math expressions in the rendering convention.

/// Whether a math span is inline (`$...$`) or display/block (`$$...$$`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathKind {
    /// A single-dollar span embedded in running text.
    Inline,

    /// A double-dollar span rendered as a standalone block.
    Block,
}

impl MathKind {
    /// Returns true for [`MathKind::Inline`].
    pub fn is_inline(self) -> bool {
        matches!(self, MathKind::Inline)
    }
}

/// Wrap raw expression text in the `\(...\)` (inline) or `\[...\]` (block)
/// convention.  Content already carrying the matching bracket pair is
/// returned unchanged; empty content stays empty.  Applied exactly once
/// per emitted span.
pub fn wrap(content: &str, kind: MathKind) -> String {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    match kind {
        MathKind::Inline => {
            if trimmed.starts_with("\\(") && trimmed.ends_with("\\)") {
                trimmed.to_string()
            } else {
                format!("\\({}\\)", trimmed)
            }
        }
        MathKind::Block => {
            if trimmed.starts_with("\\[") && trimmed.ends_with("\\]") {
                trimmed.to_string()
            } else {
                format!("\\[\n{}\n\\]", trimmed)
            }
        }
    }
}
