//! The regeneration relay endpoint.
//!
//! Validates the refinement prompt, forwards it to the configured image
//! provider, and relays the generated image (or a structured error) back
//! to the caller. The relay holds no state: each request is a single
//! upstream round trip, with no retries and no caching.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;

use crate::dtos::{RegenerateRequest, RegenerateResponse};
use crate::startup::AppState;

#[axum::debug_handler]
pub async fn regenerate(
    State(state): State<AppState>,
    payload: Result<Json<RegenerateRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection, "Rejected malformed regenerate body");
        AppError::BadRequest(anyhow::anyhow!("invalid request body"))
    })?;

    let prompt = match request.prompt.as_deref() {
        Some(prompt) if !prompt.is_empty() => prompt,
        _ => return Err(AppError::BadRequest(anyhow::anyhow!("prompt is required"))),
    };

    let image = state.provider.generate(prompt).await.map_err(|e| {
        tracing::error!(error = %e, "Image regeneration failed");
        AppError::from(e)
    })?;

    Ok(Json(RegenerateResponse {
        image: image.data,
        mime_type: image.mime_type,
    }))
}

/// Fallback for unsupported methods on the regenerate route.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
