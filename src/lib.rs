//! Autocomplete Library
//!
//! A prefix-tree word index for autocomplete suggestions, plus the layers
//! around it: input validation, configuration and logging.
//!
//! # Architecture
//!
//! - [`data_structures::PrefixTree`] stores whole words and answers membership
//!   and prefix queries. It is infallible and single-threaded.
//! - [`data_structures::SharedPrefixTree`] wraps it in a reader-writer lock.
//! - [`autocomplete::Autocompleter`] validates and normalizes user input and
//!   caps suggestion lists according to [`config::CompletionConfig`].

// Re-export public modules
pub mod autocomplete;
pub mod config;
pub mod data_structures;
pub mod error;
pub mod logging;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use autocomplete::Autocompleter;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
