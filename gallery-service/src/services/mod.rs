//! Service-layer components for the gallery service.

pub mod providers;
