// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ReadlineError;
use rustc_hash::FxHashMap;

/// Index of a node in a [`KeyTrie`]. Only meaningful for the trie that handed it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);
}

#[derive(Debug, Clone)]
pub struct TrieNode<A> {
    pub children: FxHashMap<u8, NodeId>,
    pub action: Option<A>,
}

impl<A> Default for TrieNode<A> {
    fn default() -> Self {
        Self {
            children: FxHashMap::default(),
            action: None,
        }
    }
}

/// Prefix tree over byte sequences, stored as a flat arena of [`TrieNode`]s. Node `0`
/// is the root and never carries an action.
///
/// A node can have an action *and* children, eg: `ESC` bound on its own while
/// `ESC [ D` is bound too. Nodes are never removed.
#[derive(Debug, Clone)]
pub struct KeyTrie<A> {
    nodes: Vec<TrieNode<A>>,
}

impl<A> Default for KeyTrie<A> {
    fn default() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
        }
    }
}

impl<A> KeyTrie<A> {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Bind `action` to `sequence`, creating nodes along the way. Returns the action
    /// that was bound to the exact same sequence before, if any.
    ///
    /// # Errors
    ///
    /// [`ReadlineError::EmptyKeySequence`] if `sequence` is empty.
    pub fn insert(&mut self, sequence: &[u8], action: A) -> Result<Option<A>, ReadlineError> {
        if sequence.is_empty() {
            return Err(ReadlineError::EmptyKeySequence);
        }

        let mut current = NodeId::ROOT;
        for &byte in sequence {
            current = match self.nodes[current.0].children.get(&byte) {
                Some(&next) => next,
                None => {
                    let next = NodeId(self.nodes.len());
                    self.nodes.push(TrieNode::default());
                    self.nodes[current.0].children.insert(byte, next);
                    next
                }
            };
        }

        Ok(self.nodes[current.0].action.replace(action))
    }

    #[must_use]
    pub fn child(&self, node: NodeId, byte: u8) -> Option<NodeId> {
        self.nodes
            .get(node.0)
            .and_then(|it| it.children.get(&byte).copied())
    }

    #[must_use]
    pub fn action(&self, node: NodeId) -> Option<&A> {
        self.nodes.get(node.0).and_then(|it| it.action.as_ref())
    }

    #[must_use]
    pub fn is_leaf(&self, node: NodeId) -> bool {
        self.nodes
            .get(node.0)
            .is_none_or(|it| it.children.is_empty())
    }

    /// The action bound to exactly `sequence`.
    #[must_use]
    pub fn get(&self, sequence: &[u8]) -> Option<&A> {
        let mut current = NodeId::ROOT;
        for &byte in sequence {
            current = self.child(current, byte)?;
        }
        self.action(current)
    }

    /// Whether `sequence` has an action bound to it. Prefixes of bound sequences that
    /// carry no action of their own don't count.
    #[must_use]
    pub fn contains(&self, sequence: &[u8]) -> bool { self.get(sequence).is_some() }

    /// Number of nodes, root included.
    #[must_use]
    pub fn node_count(&self) -> usize { self.nodes.len() }
}
