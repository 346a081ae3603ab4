//! Image-generation provider abstractions.
//!
//! This module provides a trait-based abstraction over the upstream
//! generation API, allowing the HTTP handlers to run against a mock
//! backend in tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use service_core::error::AppError;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Network error: {0}")]
    NetworkError(String),
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::NotConfigured(msg) => AppError::ConfigError(anyhow::anyhow!("{}", msg)),
            ProviderError::ApiError(msg) | ProviderError::InvalidResponse(msg) => {
                AppError::BadGateway(msg)
            }
            ProviderError::NetworkError(msg) => AppError::InternalError(anyhow::anyhow!("{}", msg)),
        }
    }
}

/// One generated image as returned by a provider: the base64 payload plus
/// the MIME type the provider declared for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub data: String,
    pub mime_type: String,
}

/// Trait for image generation providers (e.g., Gemini).
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Whether the provider has the credentials it needs to serve requests.
    fn is_configured(&self) -> bool;

    /// Generate one image for the prompt.
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, ProviderError>;
}
