//! Style sinks: where compiled text becomes effective.

/// Destination for style nodes.
///
/// The cache calls `attach` once per distinct text and hands the returned
/// node back to `detach` when the last user releases it. Implementations
/// must not call back into the cache that owns them.
pub trait StyleSink {
    type Node;

    fn attach(&mut self, id: &str, text: &str) -> Self::Node;

    fn detach(&mut self, node: Self::Node);
}

/// Handle to a node in a [`MemorySink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

/// A style node held by a [`MemorySink`].
#[derive(Debug, Clone, PartialEq)]
pub struct StyleNode {
    pub key: NodeId,
    pub id: String,
    pub text: String,
}

/// In-process style container: one node per attached text, in attach order.
#[derive(Debug, Default)]
pub struct MemorySink {
    nodes: Vec<StyleNode>,
    next_key: u64,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[StyleNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&StyleNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Number of nodes carrying exactly `text`.
    pub fn count_text(&self, text: &str) -> usize {
        self.nodes.iter().filter(|node| node.text == text).count()
    }

    /// The effective stylesheet: every attached text joined by newlines.
    pub fn contents(&self) -> String {
        self.nodes
            .iter()
            .map(|node| node.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl StyleSink for MemorySink {
    type Node = NodeId;

    fn attach(&mut self, id: &str, text: &str) -> NodeId {
        let key = NodeId(self.next_key);
        self.next_key += 1;
        self.nodes.push(StyleNode {
            key,
            id: id.to_string(),
            text: text.to_string(),
        });
        key
    }

    fn detach(&mut self, node: NodeId) {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.key != node);
        if self.nodes.len() == before {
            log::warn!("detach of unknown style node {node:?}");
        }
    }
}
