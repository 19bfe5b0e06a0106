//! Node implementation for the token trie.
//!
//! Nodes live in the arena owned by [`super::TokenTrie`] and refer to their
//! children by [`NodeId`], so the trie is a strict tree without per-node
//! allocations for links.

use fnv::FnvHashMap;

/// Index of a node inside the trie arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root node, present in every trie.
    pub const ROOT: NodeId = NodeId(0);

    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node in the token trie.
///
/// Each node represents one token along a phrase. Terminal nodes carry the
/// payload associated with the complete phrase.
#[derive(Debug, Default)]
pub struct TrieNode {
    /// Map of tokens to child nodes
    pub(crate) children: FnvHashMap<Box<str>, NodeId>,

    /// Payload of the phrase ending here, `None` for non-terminal nodes
    pub(crate) payload: Option<String>,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the path from the root to this node spells a complete entry.
    pub fn is_terminal(&self) -> bool {
        self.payload.is_some()
    }
}
