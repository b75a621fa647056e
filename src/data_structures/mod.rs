//! Data structures backing the autocomplete index.
//!
//! The prefix tree is a plain single-threaded structure; the shared variant
//! adds one reader-writer lock for use across threads.

pub mod prefix_tree;

// Re-export common data structures
pub use prefix_tree::{PrefixIter, PrefixTree, SharedPrefixTree, TrieNode};
