//! Test modules for the autocomplete crate.
//!
//! Crate-internal suites covering configuration loading, error formatting,
//! and property-based checks of the prefix tree.

pub mod test_utils;
