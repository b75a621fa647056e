//! Test utilities and fixtures.
//!
//! Reusable proptest strategies and filesystem helpers.

use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};
use tempfile::TempDir;

/// Maximum word length for generated test data.
const MAX_WORD_LENGTH: usize = 12;

/// Maximum number of words in a generated list.
const MAX_WORDS: usize = 40;

/// Create a temporary directory for test files.
pub fn create_test_dir() -> std::io::Result<TempDir> {
    tempfile::tempdir()
}

/// Words over a small alphabet, so generated words share prefixes often.
pub fn word_strategy() -> BoxedStrategy<String> {
    proptest::string::string_regex(&format!("[a-d]{{0,{MAX_WORD_LENGTH}}}"))
        .expect("valid word regex")
        .boxed()
}

/// Lists of possibly repeated words.
pub fn word_list_strategy() -> BoxedStrategy<Vec<String>> {
    proptest::collection::vec(word_strategy(), 0..MAX_WORDS).boxed()
}

/// Arbitrary Unicode words, including multi-byte characters.
pub fn unicode_word_strategy() -> BoxedStrategy<String> {
    proptest::collection::vec(proptest::char::any(), 0..MAX_WORD_LENGTH)
        .prop_map(|chars| chars.into_iter().collect::<String>())
        .boxed()
}
