//! The document node model consumed by the math engine.
//!
//! The engine does not parse general Markdown itself; a host parser hands
//! it a tree of the few node kinds it cares about.  Anything else travels
//! as an opaque [`NodeValue::Other`] node and is passed through unchanged.

/// The closed set of node variants the engine distinguishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeValue {
    /// The root of every document.  Contains blocks.
    Document,

    /// A paragraph.  Contains inline nodes; its raw source characters are
    /// kept on the node so delimiter detection can see the original text.
    Paragraph,

    /// A run of textual content.
    Text(String),

    /// A soft line break between two lines of the same paragraph.
    SoftBreak,

    /// A hard (forced) line break.
    HardBreak,

    /// Any construct the engine does not interpret (list, heading, raw
    /// HTML, ...).  The string names the host parser's construct; children
    /// are visited normally, a childless node is re-emitted as plain text.
    Other(String),
}

impl NodeValue {
    /// Return a reference to the text of a `Text` node, if this is one.
    pub fn text(&self) -> Option<&str> {
        match self {
            NodeValue::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Index of a node within a [`DocTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// A single node: its variant, its raw source characters, and its place
/// in the tree.
#[derive(Debug, Clone)]
pub struct Node {
    /// The node variant itself.
    pub value: NodeValue,

    /// The raw source characters this node was produced from.  Empty when
    /// the host parser does not track them; required on paragraphs for
    /// block math detection.
    pub content: String,

    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An arena of nodes indexed by [`NodeId`].  Node zero is always the
/// document root.
#[derive(Debug, Clone)]
pub struct DocTree {
    nodes: Vec<Node>,
}

impl DocTree {
    /// Create a tree holding only a `Document` root.
    pub fn new() -> DocTree {
        DocTree {
            nodes: vec![Node {
                value: NodeValue::Document,
                content: String::new(),
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// The document root.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a child with no raw source characters.
    pub fn add(&mut self, parent: NodeId, value: NodeValue) -> NodeId {
        self.add_with_content(parent, value, "")
    }

    /// Append a child carrying the raw source characters it came from.
    pub fn add_with_content(&mut self, parent: NodeId, value: NodeValue, content: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            value,
            content: content.to_string(),
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// The node behind an id.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// The variant of a node.
    pub fn value(&self, id: NodeId) -> &NodeValue {
        &self.nodes[id.0].value
    }

    /// The raw source characters of a node.
    pub fn content(&self, id: NodeId) -> &str {
        &self.nodes[id.0].content
    }

    /// The ordered children of a node.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// The next sibling of a node under the same parent, if any.
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.nodes[id.0].parent?;
        let siblings = &self.nodes[parent.0].children;
        let pos = siblings.iter().position(|&c| c == id)?;
        siblings.get(pos + 1).copied()
    }

    /// Number of nodes in the arena, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds nothing beyond the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }
}

impl Default for DocTree {
    fn default() -> DocTree {
        DocTree::new()
    }
}
