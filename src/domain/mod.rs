//! Domain layer: storage contract, key layout and entities.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`keys`] - How mappings and counters are laid out in the keyspace
//! - [`repositories`] - Key-value store trait implemented by the infrastructure layer
//!
//! The domain layer has no dependency on infrastructure or presentation
//! layers. Business operations live in [`crate::application::services`].

pub mod entities;
pub mod keys;
pub mod repositories;
