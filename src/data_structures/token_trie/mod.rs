//! Token Trie Implementation
//!
//! A trie keyed by whole tokens rather than characters. Every path from the
//! root spells a token sequence; a node is terminal when that sequence was
//! inserted as a dictionary entry, in which case it also stores the entry's
//! payload (the replacement or normalized text reported on a match).
//!
//! Nodes are kept in a flat arena and addressed by [`NodeId`]. The trie only
//! grows: there is no removal, which keeps every `NodeId` valid for the
//! lifetime of the trie.

mod node;

pub use node::{NodeId, TrieNode};

/// Arena-backed trie keyed by tokens.
#[derive(Debug)]
pub struct TokenTrie {
    /// Node arena, the root is always at index 0
    nodes: Vec<TrieNode>,

    /// Number of terminal nodes
    len: usize,
}

impl TokenTrie {
    /// Creates a new trie holding only the root node.
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Creates a new trie with room for `capacity` nodes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(TrieNode::new());
        Self { nodes, len: 0 }
    }

    /// Returns the root node id.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Inserts a token sequence with its payload.
    ///
    /// Missing nodes along the path are created. The payload of the final
    /// node is always overwritten, so inserting the same sequence twice
    /// keeps the last payload.
    ///
    /// # Returns
    ///
    /// `true` if the sequence was not present before, `false` if only its
    /// payload was updated.
    pub fn insert<'a, I>(&mut self, tokens: I, payload: impl Into<String>) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut current = NodeId::ROOT;
        for token in tokens {
            current = match self.child(current, token) {
                Some(next) => next,
                None => self.push_child(current, token),
            };
        }

        let node = &mut self.nodes[current.0];
        let is_new = node.payload.is_none();
        node.payload = Some(payload.into());
        if is_new {
            self.len += 1;
        }
        is_new
    }

    fn push_child(&mut self, parent: NodeId, token: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TrieNode::new());
        self.nodes[parent.0].children.insert(token.into(), id);
        id
    }

    /// Returns the child of `node` reached through `token`, if any.
    #[inline]
    pub fn child(&self, node: NodeId, token: &str) -> Option<NodeId> {
        self.nodes[node.0].children.get(token).copied()
    }

    /// Returns the payload stored on `node` if it is terminal.
    #[inline]
    pub fn payload(&self, node: NodeId) -> Option<&str> {
        self.nodes[node.0].payload.as_deref()
    }

    /// Returns the node with the given id.
    pub fn node(&self, node: NodeId) -> &TrieNode {
        &self.nodes[node.0]
    }

    /// Follows `tokens` from the root without creating anything.
    ///
    /// Returns `None` as soon as a token has no matching child.
    pub fn walk<'a, I>(&self, tokens: I) -> Option<NodeId>
    where
        I: IntoIterator<Item = &'a str>,
    {
        tokens
            .into_iter()
            .try_fold(NodeId::ROOT, |node, token| self.child(node, token))
    }

    /// Looks up the payload of an exact token sequence.
    pub fn get<'a, I>(&self, tokens: I) -> Option<&str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.walk(tokens).and_then(|node| self.payload(node))
    }

    /// Number of entries (terminal nodes) in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the trie holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes in the arena, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for TokenTrie {
    fn default() -> Self {
        Self::new()
    }
}
