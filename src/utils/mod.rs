//! Utility functions for token derivation and URL processing.
//!
//! - [`code_generator`] - Deterministic short token derivation
//! - [`url_normalizer`] - Long URL parsing and host normalization

pub mod code_generator;
pub mod url_normalizer;
