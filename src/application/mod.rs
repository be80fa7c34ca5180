//! Application layer services implementing business logic.
//!
//! Services consume the [`crate::domain::repositories::KeyValueStore`] trait
//! and provide a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Shortening and resolution
//! - [`services::domain_stats_service::DomainStatsService`] - Per-domain counters

pub mod services;
