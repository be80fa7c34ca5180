//! Business logic services for the application layer.

pub mod domain_stats_service;
pub mod link_service;

pub use domain_stats_service::DomainStatsService;
pub use link_service::LinkService;
