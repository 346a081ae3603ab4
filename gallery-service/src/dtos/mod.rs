//! Request/response types for the gallery API.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/regenerate`.
#[derive(Debug, Deserialize)]
pub struct RegenerateRequest {
    /// Free-text refinement guidance for the regenerated variant.
    #[serde(default)]
    pub prompt: Option<String>,
}

/// Successful relay response: the generated image, still base64-encoded.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegenerateResponse {
    pub image: String,
    pub mime_type: String,
}
