use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Gemini API base URL. Overridable so tests can point at a local stub.
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used for gallery image regeneration.
const DEFAULT_IMAGE_MODEL: &str = "gemini-3-pro-image-preview";

#[derive(Debug, Clone)]
pub struct GalleryConfig {
    pub common: core_config::Config,
    pub google: GoogleConfig,
    pub models: ModelConfig,
}

#[derive(Debug, Clone)]
pub struct GoogleConfig {
    /// May be empty at startup; the provider reports itself unconfigured
    /// and regeneration requests answer 500 until the key is set.
    pub api_key: Secret<String>,
    pub api_base_url: String,
}

#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub image_model: String,
}

impl GalleryConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        Ok(GalleryConfig {
            common,
            google: GoogleConfig {
                api_key: Secret::new(env::var("GOOGLE_API_KEY").unwrap_or_default()),
                api_base_url: env::var("GEMINI_API_BASE_URL")
                    .unwrap_or_else(|_| GEMINI_API_BASE.to_string()),
            },
            models: ModelConfig {
                image_model: env::var("GALLERY_IMAGE_MODEL")
                    .unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.to_string()),
            },
        })
    }
}
