//! Mock provider implementation for testing.

use super::{GeneratedImage, ImageProvider, ProviderError};
use async_trait::async_trait;

/// What the mock provider should do on each call.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Return this image for every prompt.
    Image(GeneratedImage),
    /// Fail every call with `ProviderError::ApiError`.
    ApiError(String),
    /// Fail every call with `ProviderError::NetworkError`.
    NetworkError(String),
    /// Report unconfigured and fail calls with `NotConfigured`.
    NotConfigured,
}

/// Mock image provider for testing. Performs no network I/O.
pub struct MockImageProvider {
    behavior: MockBehavior,
}

impl MockImageProvider {
    pub fn new(behavior: MockBehavior) -> Self {
        Self { behavior }
    }
}

#[async_trait]
impl ImageProvider for MockImageProvider {
    fn is_configured(&self) -> bool {
        !matches!(self.behavior, MockBehavior::NotConfigured)
    }

    async fn generate(&self, _prompt: &str) -> Result<GeneratedImage, ProviderError> {
        match &self.behavior {
            MockBehavior::Image(image) => Ok(image.clone()),
            MockBehavior::ApiError(msg) => Err(ProviderError::ApiError(msg.clone())),
            MockBehavior::NetworkError(msg) => Err(ProviderError::NetworkError(msg.clone())),
            MockBehavior::NotConfigured => Err(ProviderError::NotConfigured(
                "Mock image provider not configured".to_string(),
            )),
        }
    }
}
