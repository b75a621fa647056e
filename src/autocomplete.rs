//! Autocomplete front end over the prefix tree.
//!
//! [`Autocompleter`] is the layer between user input and the tree: it trims
//! and optionally lowercases words, rejects empty or over-long ones, and caps
//! the number of suggestions returned.

use std::borrow::Cow;

use tracing::debug;

use crate::config::CompletionConfig;
use crate::data_structures::SharedPrefixTree;
use crate::error::AutocompleteResult;

/// Word index answering autocomplete queries.
///
/// Cloning yields a handle onto the same index.
#[derive(Debug, Clone, Default)]
pub struct Autocompleter {
    index: SharedPrefixTree,
    config: CompletionConfig,
}

impl Autocompleter {
    /// Creates an empty autocompleter with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an autocompleter and inserts the configured seed words.
    ///
    /// # Errors
    ///
    /// Returns an error if any seed word is empty or too long.
    pub fn from_config(config: &CompletionConfig) -> AutocompleteResult<Self> {
        let completer = Self {
            index: SharedPrefixTree::new(),
            config: config.clone(),
        };
        let added = completer.add_words(&config.seed_words)?;
        debug!(added, "Seeded autocomplete index");
        Ok(completer)
    }

    /// The completion settings in effect.
    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }

    /// The underlying shared index.
    pub fn index(&self) -> &SharedPrefixTree {
        &self.index
    }

    /// Adds a word to the index.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The word was new.
    /// * `Ok(false)` - The word was already stored.
    /// * `Err(AutocompleteError)` - The word is empty or too long.
    pub fn add_word<W>(&self, word: W) -> AutocompleteResult<bool>
    where
        W: AsRef<str>,
    {
        let word = self.validate(word.as_ref())?;
        let is_new = self.index.insert(&word);
        debug!(word = %word, is_new, "Added word");
        Ok(is_new)
    }

    /// Adds several words at once.
    ///
    /// Every word is validated before any is inserted, so an invalid word
    /// leaves the index untouched.
    ///
    /// # Returns
    ///
    /// The number of words that were new.
    pub fn add_words<I, W>(&self, words: I) -> AutocompleteResult<usize>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| self.validate(word.as_ref()).map(Cow::into_owned))
            .collect::<AutocompleteResult<Vec<_>>>()?;

        Ok(self.index.insert_many(words))
    }

    /// Checks whether `word` is stored. Invalid input is never stored.
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        self.validate(word.as_ref())
            .is_ok_and(|word| self.index.contains(word))
    }

    /// Returns stored words starting with `prefix`, in lexicographic order,
    /// truncated to `max_suggestions`.
    ///
    /// An empty prefix matches every word.
    pub fn suggest<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        let prefix = self.normalize(prefix.as_ref());
        if prefix.chars().count() > self.config.max_word_length {
            return Vec::new();
        }

        let suggestions = self.index.suggest(&prefix, self.config.max_suggestions);
        debug!(prefix = %prefix, count = suggestions.len(), "Suggestions computed");
        suggestions
    }

    /// Returns the number of distinct stored words.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if no word has been stored.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    fn normalize<'a>(&self, input: &'a str) -> Cow<'a, str> {
        self.config.normalize(input)
    }

    fn validate<'a>(&self, word: &'a str) -> AutocompleteResult<Cow<'a, str>> {
        self.config.check_word(word)
    }
}
