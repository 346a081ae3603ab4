//! service-core: Shared infrastructure for the gallery services.
pub mod config;
pub mod error;
pub mod observability;
