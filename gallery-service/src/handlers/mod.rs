//! HTTP handlers for the gallery service.

pub mod regenerate;
