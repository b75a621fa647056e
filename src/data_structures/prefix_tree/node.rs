// Copyright (c) 2025 Autocomplete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the prefix tree.
//!
//! Nodes are the building blocks of the tree. Each one stands for a single
//! character position shared by every word passing through it.

use std::collections::BTreeMap;
use std::fmt;

/// A node in the prefix tree.
///
/// Children are owned by value, so the whole tree is released when the root
/// is dropped. Nodes are neither cloneable nor comparable; both would recurse
/// once per level.
#[derive(Default)]
pub struct TrieNode {
    /// The character on the edge leading to this node (`None` for the root)
    letter: Option<char>,

    /// Whether the path from the root to this node spells a stored word
    is_terminal: bool,

    /// Child nodes, ordered by character
    children: BTreeMap<char, TrieNode>,
}

impl TrieNode {
    /// Creates the root node, which carries no character.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a node for `letter` with no children.
    pub fn new(letter: char) -> Self {
        Self {
            letter: Some(letter),
            is_terminal: false,
            children: BTreeMap::new(),
        }
    }

    /// The character this node holds.
    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    /// Whether this node terminates a stored word.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// Marks the node terminal, returning `true` if it was not already.
    pub(crate) fn mark_terminal(&mut self) -> bool {
        !std::mem::replace(&mut self.is_terminal, true)
    }

    /// Looks up the child for `letter`.
    pub fn child(&self, letter: char) -> Option<&TrieNode> {
        self.children.get(&letter)
    }

    /// Returns the child for `letter`, creating it if absent.
    pub(crate) fn child_or_insert(&mut self, letter: char) -> &mut TrieNode {
        self.children
            .entry(letter)
            .or_insert_with(|| TrieNode::new(letter))
    }

    /// Detaches and returns all children, leaving this node a leaf.
    pub(crate) fn take_children(&mut self) -> impl Iterator<Item = TrieNode> {
        std::mem::take(&mut self.children).into_values()
    }

    /// Iterates over the children in ascending character order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = &TrieNode> {
        self.children.values()
    }

    /// Walks `path` from this node without creating anything.
    pub fn descend(&self, path: &str) -> Option<&TrieNode> {
        path.chars().try_fold(self, |node, c| node.child(c))
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        // Detach descendants onto a work list so long chains are not freed recursively
        let mut pending: Vec<TrieNode> = self.take_children().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.take_children());
        }
    }
}

impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only the direct children's letters; a full dump would recurse per level
        f.debug_struct("TrieNode")
            .field("letter", &self.letter)
            .field("is_terminal", &self.is_terminal)
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}
