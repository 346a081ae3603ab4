//! Gemini image provider implementation.
//!
//! Issues a single `generateContent` request per call and extracts the
//! first inline-image part from the response. Generation parameters are
//! fixed for the gallery; the caller only supplies the prompt text.

use super::{GeneratedImage, ImageProvider, ProviderError};
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

/// Aspect ratio requested for regenerated gallery images.
const IMAGE_ASPECT_RATIO: &str = "4:3";

/// Resolution tier requested for regenerated gallery images.
const IMAGE_SIZE: &str = "2K";

/// MIME type assumed when the provider omits one on an inline part.
const DEFAULT_MIME_TYPE: &str = "image/png";

/// Upstream error bodies are cut to this many characters before being
/// surfaced to the caller.
const ERROR_EXCERPT_CHARS: usize = 300;

/// Gemini provider configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Secret<String>,
    pub model: String,
    pub api_base_url: String,
}

/// Gemini image provider.
pub struct GeminiImageProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiImageProvider {
    pub fn new(config: GeminiConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Build the API URL for the given model and method.
    fn api_url(&self, method: &str) -> String {
        format!(
            "{}/models/{}:{}?key={}",
            self.config.api_base_url,
            self.config.model,
            method,
            self.config.api_key.expose_secret()
        )
    }
}

#[async_trait]
impl ImageProvider for GeminiImageProvider {
    fn is_configured(&self) -> bool {
        !self.config.api_key.expose_secret().is_empty()
    }

    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, ProviderError> {
        if !self.is_configured() {
            return Err(ProviderError::NotConfigured(
                "Gemini API key not configured".to_string(),
            ));
        }

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![ContentPart::Text {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_modalities: vec!["TEXT".to_string(), "IMAGE".to_string()],
                image_config: ImageConfig {
                    aspect_ratio: IMAGE_ASPECT_RATIO.to_string(),
                    image_size: IMAGE_SIZE.to_string(),
                },
            },
        };

        let url = self.api_url("generateContent");

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Gemini API request did not complete");
                ProviderError::NetworkError(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            let excerpt = excerpt(&error_text, ERROR_EXCERPT_CHARS);

            tracing::error!(status = %status, body = %excerpt, "Gemini API request failed");

            return Err(ProviderError::ApiError(format!(
                "Gemini API error {}: {}",
                status, excerpt
            )));
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ApiError(format!("Failed to parse response: {}", e)))?;

        extract_image(api_response)
    }
}

/// Pull the first inline-image part out of a parsed response.
fn extract_image(response: GenerateContentResponse) -> Result<GeneratedImage, ProviderError> {
    // Providers may answer HTTP 200 with an embedded error object.
    if let Some(error) = response.error {
        tracing::error!(message = %error.message, "Gemini returned an in-body error");
        return Err(ProviderError::ApiError(error.message));
    }

    let parts = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts)
        .ok_or_else(|| {
            tracing::error!("Gemini response carried no candidate content");
            ProviderError::InvalidResponse("no content in provider response".to_string())
        })?;

    // A response may interleave text and image parts; the first inline
    // image wins and any text commentary is ignored.
    parts
        .into_iter()
        .find_map(|part| match part {
            ContentPart::InlineData { inline_data } => Some(GeneratedImage {
                data: inline_data.data,
                mime_type: inline_data
                    .mime_type
                    .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string()),
            }),
            _ => None,
        })
        .ok_or_else(|| {
            tracing::error!("Gemini response carried no inline image data");
            ProviderError::InvalidResponse("no image data in provider response".to_string())
        })
}

/// Truncate a body to at most `max` characters without splitting a char.
fn excerpt(body: &str, max: usize) -> &str {
    match body.char_indices().nth(max) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<ContentPart>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum ContentPart {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default)]
    mime_type: Option<String>,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: Vec<String>,
    image_config: ImageConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageConfig {
    aspect_ratio: String,
    image_size: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

/// Embedded error object some responses carry despite an HTTP 200.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}
