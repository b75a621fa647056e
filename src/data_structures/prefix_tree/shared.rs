// Copyright (c) 2025 Autocomplete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Thread-safe handle around a [`PrefixTree`].
//!
//! A single reader-writer lock guards the whole tree: insertions hold it
//! exclusively, queries share it. Readers therefore never see a word whose
//! path exists but whose count has not been updated yet.

use std::sync::Arc;

use parking_lot::RwLock;

use super::PrefixTree;

/// A cloneable, thread-safe prefix tree.
///
/// Clones share the same underlying tree.
#[derive(Debug, Clone, Default)]
pub struct SharedPrefixTree {
    inner: Arc<RwLock<PrefixTree>>,
}

impl SharedPrefixTree {
    /// Creates a new empty shared tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a word under the write lock.
    ///
    /// # Returns
    ///
    /// `true` if the word was newly stored.
    pub fn insert<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        self.inner.write().insert(word)
    }

    /// Inserts a batch of words under a single write lock.
    ///
    /// # Returns
    ///
    /// The number of words that were newly stored.
    pub fn insert_many<I, W>(&self, words: I) -> usize
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut tree = self.inner.write();
        words.into_iter().filter(|word| tree.insert(word)).count()
    }

    /// Checks whether `word` was inserted.
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        self.inner.read().contains(word)
    }

    /// Finds all stored words starting with `prefix`, in lexicographic order.
    pub fn words_with_prefix<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        self.inner.read().words_with_prefix(prefix)
    }

    /// Returns at most `limit` words starting with `prefix`, in lexicographic
    /// order. A limit of zero means no limit.
    pub fn suggest<P>(&self, prefix: P, limit: usize) -> Vec<String>
    where
        P: AsRef<str>,
    {
        let tree = self.inner.read();
        let words = tree.iter_prefix(prefix);
        if limit == 0 {
            words.collect()
        } else {
            words.take(limit).collect()
        }
    }

    /// Returns the number of distinct stored words.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns `true` if no word has been stored.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Runs `f` against the tree while holding the read lock.
    pub fn with_tree<R>(&self, f: impl FnOnce(&PrefixTree) -> R) -> R {
        f(&self.inner.read())
    }
}

impl From<PrefixTree> for SharedPrefixTree {
    fn from(tree: PrefixTree) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tree)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Barrier;
    use std::thread;

    #[test]
    fn test_clones_share_state() {
        let tree = SharedPrefixTree::new();
        let other = tree.clone();

        assert!(tree.insert("shared"));
        assert!(other.contains("shared"));
        assert!(!other.insert("shared"));
        assert_eq!(other.len(), 1);
    }

    #[test]
    fn test_insert_many_counts_new_words() {
        let tree = SharedPrefixTree::from(PrefixTree::from_iter(["cat"]));
        assert_eq!(tree.insert_many(["cat", "car", "care", "car"]), 2);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_suggest_limit() {
        let tree = SharedPrefixTree::new();
        tree.insert_many(["cat", "car", "care", "dog"]);

        assert_eq!(tree.suggest("ca", 2), vec!["car", "care"]);
        assert_eq!(tree.suggest("ca", 0), vec!["car", "care", "cat"]);
        assert!(tree.suggest("x", 5).is_empty());
    }

    /// Several writers insert disjoint word sets while readers query; every
    /// word must be present and counted once afterwards.
    #[test]
    fn test_concurrent_inserts_and_reads() {
        const THREAD_COUNT: usize = 8;
        const WORDS_PER_THREAD: usize = 200;

        let tree = SharedPrefixTree::new();
        let barrier = Arc::new(Barrier::new(THREAD_COUNT * 2));
        let mut handles = Vec::with_capacity(THREAD_COUNT * 2);

        for thread_id in 0..THREAD_COUNT {
            let writer = tree.clone();
            let start = Arc::clone(&barrier);
            handles.push(thread::spawn(move || {
                start.wait();
                for j in 0..WORDS_PER_THREAD {
                    writer.insert(format!("word{thread_id}x{j}"));
                }
            }));

            let reader = tree.clone();
            let start = Arc::clone(&barrier);
            handles.push(thread::spawn(move || {
                start.wait();
                for _ in 0..50 {
                    // A snapshot must never report more words than it can enumerate
                    reader.with_tree(|t| assert_eq!(t.words().count(), t.len()));
                }
            }));
        }

        for handle in handles {
            handle.join().expect("worker thread panicked");
        }

        assert_eq!(tree.len(), THREAD_COUNT * WORDS_PER_THREAD);
        assert!(tree.contains("word3x17"));
        assert_eq!(tree.words_with_prefix("word0x").len(), WORDS_PER_THREAD);
    }
}
