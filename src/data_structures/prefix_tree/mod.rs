// Copyright (c) 2025 Autocomplete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix Tree Implementation
//!
//! A trie storing whole words for autocomplete lookups. Each edge is labelled
//! with one Unicode scalar value (`char`), so prefix matching works per code
//! point rather than per UTF-8 byte.
//!
//! # Features
//!
//! - Idempotent insertion with an O(1) word count.
//! - Exact membership checks that distinguish stored words from mere paths.
//! - Prefix enumeration in lexicographic order, lazily or collected.
//! - A lock-wrapped variant ([`SharedPrefixTree`]) for use across threads.
//!
//! # Example
//!
//! ```
//! use autocomplete_lib::data_structures::prefix_tree::PrefixTree;
//!
//! let mut tree = PrefixTree::new();
//! tree.insert("cat");
//! tree.insert("car");
//!
//! assert!(tree.contains("cat"));
//! assert!(!tree.contains("ca"));
//! assert_eq!(tree.words_with_prefix("ca"), vec!["car", "cat"]);
//! ```
//!
//! The empty word is storable: inserting `""` marks the root terminal.

mod iter;
mod node;
pub mod shared;

pub use iter::PrefixIter;
pub use node::TrieNode;
pub use shared::SharedPrefixTree;

/// A prefix tree of words.
///
/// Nodes are never removed; the tree only grows.
///
/// The node layout is fully determined by the stored words, so cloning and
/// comparison go through the word list instead of recursing over nodes.
#[derive(Debug, Default)]
pub struct PrefixTree {
    /// The root node of the tree
    root: TrieNode,

    /// Number of distinct stored words
    size: usize,
}

impl PrefixTree {
    /// Creates a new empty `PrefixTree`.
    pub fn new() -> Self {
        Self {
            root: TrieNode::root(),
            size: 0,
        }
    }

    /// Inserts a word into the tree.
    ///
    /// Missing nodes along the word's path are created. Inserting a word that
    /// is already stored changes nothing.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert.
    ///
    /// # Returns
    ///
    /// `true` if the word was newly stored, `false` if it was already present.
    pub fn insert<W>(&mut self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let node = word
            .as_ref()
            .chars()
            .fold(&mut self.root, |node, c| node.child_or_insert(c));

        let is_new = node.mark_terminal();
        if is_new {
            self.size += 1;
        }
        is_new
    }

    /// Checks whether `word` was inserted.
    ///
    /// A path existing in the tree is not enough; only a terminal node counts.
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        self.root
            .descend(word.as_ref())
            .is_some_and(TrieNode::is_terminal)
    }

    /// Finds all stored words starting with `prefix`, including `prefix`
    /// itself when it is a stored word.
    ///
    /// # Returns
    ///
    /// The matching words in lexicographic order, or an empty vector if no
    /// stored word has this prefix.
    pub fn words_with_prefix<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        self.iter_prefix(prefix).collect()
    }

    /// Lazily enumerates the stored words starting with `prefix`.
    ///
    /// Same contract and order as [`PrefixTree::words_with_prefix`].
    pub fn iter_prefix<P>(&self, prefix: P) -> PrefixIter<'_>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        PrefixIter::new(self.root.descend(prefix), prefix)
    }

    /// Enumerates every stored word.
    pub fn words(&self) -> PrefixIter<'_> {
        self.iter_prefix("")
    }

    /// Returns the number of distinct stored words.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Alias of [`PrefixTree::size`].
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if no word has been stored.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The root node, for read-only inspection.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }
}

impl Clone for PrefixTree {
    fn clone(&self) -> Self {
        self.words().collect()
    }
}

impl PartialEq for PrefixTree {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.words().eq(other.words())
    }
}

impl Eq for PrefixTree {}

impl<W> Extend<W> for PrefixTree
where
    W: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = W>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<W> FromIterator<W> for PrefixTree
where
    W: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = W>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
