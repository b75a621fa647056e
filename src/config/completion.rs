//! Completion configuration module.
//!
//! Settings for the layer that validates words before they reach the prefix
//! tree and shapes the suggestions handed back to callers.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use crate::error::{AutocompleteError, AutocompleteResult};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Completion behaviour configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    /// Maximum number of suggestions returned per query (0 for unlimited)
    pub max_suggestions: usize,

    /// Maximum accepted word length, in characters
    pub max_word_length: usize,

    /// Whether words keep their case; when false they are lowercased
    pub case_sensitive: bool,

    /// Words inserted when the index is built
    pub seed_words: Vec<String>,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            max_suggestions: 10,
            max_word_length: 64,
            case_sensitive: false,
            seed_words: Vec::new(),
        }
    }
}

impl CompletionConfig {
    /// Trims `input` and lowercases it unless case-sensitive.
    pub fn normalize<'a>(&self, input: &'a str) -> Cow<'a, str> {
        let trimmed = input.trim();
        if self.case_sensitive {
            Cow::Borrowed(trimmed)
        } else {
            Cow::Owned(trimmed.to_lowercase())
        }
    }

    /// Normalizes `word` and checks it against the word rules.
    ///
    /// Length is measured after normalization, since lowercasing can add
    /// characters (`"İ"` becomes `"i̇"`).
    ///
    /// # Returns
    ///
    /// * `Ok(Cow<str>)` - The normalized word.
    /// * `Err(AutocompleteError)` - The word is empty or too long.
    pub fn check_word<'a>(&self, word: &'a str) -> AutocompleteResult<Cow<'a, str>> {
        let word = self.normalize(word);
        if word.is_empty() {
            return Err(AutocompleteError::EmptyWord);
        }
        if word.chars().count() > self.max_word_length {
            return Err(AutocompleteError::WordTooLong {
                word: word.into_owned(),
                max_length: self.max_word_length,
            });
        }
        Ok(word)
    }
}

impl Validate for CompletionConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_word_length == 0 {
            return Err(ConfigError::ValidationError(
                "max_word_length must be greater than 0".to_string(),
            ));
        }

        for word in &self.seed_words {
            self.check_word(word).map_err(|e| {
                ConfigError::ValidationError(format!("invalid seed word '{word}': {e}"))
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercasing_that_expands_counts_toward_length() {
        let config = CompletionConfig {
            max_word_length: 1,
            seed_words: vec!["İ".to_string()],
            ..CompletionConfig::default()
        };

        assert!(matches!(
            config.check_word("İ"),
            Err(AutocompleteError::WordTooLong { max_length: 1, .. })
        ));
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));

        let sensitive = CompletionConfig {
            case_sensitive: true,
            ..config
        };
        assert!(sensitive.validate().is_ok());
        assert_eq!(sensitive.check_word(" İ ").unwrap(), "İ");
    }

    #[test]
    fn test_check_word_normalizes() {
        let config = CompletionConfig::default();
        assert_eq!(config.check_word("  Hello ").unwrap(), "hello");
        assert!(matches!(config.check_word(" \t"), Err(AutocompleteError::EmptyWord)));
    }
}
