// Copyright (c) 2025 Autocomplete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lazy depth-first enumeration of the words below a node.

use std::iter::FusedIterator;

use super::node::TrieNode;

/// Iterator over the stored words sharing a prefix.
///
/// Uses an explicit stack rather than recursion, so very long shared
/// prefixes cannot exhaust the call stack. Words are yielded in
/// lexicographic (code point) order; a word always precedes its extensions.
#[derive(Debug, Clone)]
pub struct PrefixIter<'a> {
    /// The word spelled by the path to the most recently visited node
    buffer: String,

    /// Pending nodes, each paired with the byte length of its parent's word
    stack: Vec<(&'a TrieNode, usize)>,

    /// The prefix itself, yielded first when its node is terminal
    head: Option<String>,
}

impl<'a> PrefixIter<'a> {
    /// Starts an enumeration below `start`, whose path spells `prefix`.
    ///
    /// A `None` start yields nothing.
    pub(crate) fn new(start: Option<&'a TrieNode>, prefix: &str) -> Self {
        let mut iter = Self {
            buffer: prefix.to_string(),
            stack: Vec::new(),
            head: None,
        };

        if let Some(node) = start {
            if node.is_terminal() {
                iter.head = Some(prefix.to_string());
            }
            iter.push_children(node, prefix.len());
        }

        iter
    }

    fn push_children(&mut self, node: &'a TrieNode, len: usize) {
        // Reversed so the smallest character is popped first
        self.stack
            .extend(node.children().rev().map(|child| (child, len)));
    }
}

impl Iterator for PrefixIter<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(word) = self.head.take() {
            return Some(word);
        }

        while let Some((node, len)) = self.stack.pop() {
            self.buffer.truncate(len);
            if let Some(letter) = node.letter() {
                self.buffer.push(letter);
            }
            self.push_children(node, self.buffer.len());

            if node.is_terminal() {
                return Some(self.buffer.clone());
            }
        }

        None
    }
}

impl FusedIterator for PrefixIter<'_> {}
