//! Core domain entities.
//!
//! - [`DomainCount`] - shortening counter snapshot for one host

pub mod domain_count;

pub use domain_count::DomainCount;
