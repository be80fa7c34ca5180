//! Storage trait definitions for the domain layer.
//!
//! The mapping service talks to storage only through [`KeyValueStore`].
//! Implementations live in `crate::infrastructure::store`; a `mockall`
//! mock is generated for unit tests.

pub mod key_value_store;

pub use key_value_store::{KeyValueStore, StoreError, StoreResult};

#[cfg(test)]
pub use key_value_store::MockKeyValueStore;
