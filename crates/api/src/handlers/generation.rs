//! Handlers for image generation and prompt preview.
//!
//! Both endpoints take the same body: the prompt fragments plus an untyped
//! `cameraSettings` object that is parsed here, at the boundary, under the
//! configured [`SettingsPolicy`].

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use lenscraft_core::camera::{CameraSettings, SettingsPolicy};
use lenscraft_core::enhancer::{camera_clauses, enhance_prompt};
use lenscraft_core::prompt::{technical_summary, validate_prompt, PromptParts};
use lenscraft_gateway::generation::{generate, Generation};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// API request / response types
// ---------------------------------------------------------------------------

/// Request body shared by generation and preview.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageRequest {
    #[serde(flatten)]
    pub parts: PromptParts,
    #[serde(default)]
    pub camera_settings: Value,
}

/// What would be sent upstream for a request, without sending it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptPreview {
    /// The fully enhanced prompt.
    pub prompt: String,
    /// Photographic clauses derived from the settings, in emission order.
    pub clauses: Vec<String>,
    pub technical_summary: String,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Compose and validate the base prompt, then parse the settings.
fn prepare(
    request: &GenerateImageRequest,
    policy: SettingsPolicy,
) -> AppResult<(String, CameraSettings)> {
    let base_prompt = request.parts.combine();
    validate_prompt(&base_prompt)?;
    let settings = CameraSettings::from_json(&request.camera_settings, policy)?;
    Ok((base_prompt, settings))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /generate-image -- enhance the prompt and generate one image.
///
/// Answers with the bare `{ imageUrl, prompt }` object rather than a data
/// envelope.
pub async fn generate_image(
    State(state): State<AppState>,
    payload: Result<Json<GenerateImageRequest>, JsonRejection>,
) -> AppResult<Json<Generation>> {
    let Json(request) = payload?;
    let (base_prompt, settings) = prepare(&request, state.config.settings_policy)?;

    let generation = generate(state.gateway.as_ref(), &base_prompt, &settings).await?;

    Ok(Json(generation))
}

/// POST /prompt-preview -- show the enhanced prompt without generating.
pub async fn preview_prompt(
    State(state): State<AppState>,
    payload: Result<Json<GenerateImageRequest>, JsonRejection>,
) -> AppResult<Json<DataResponse<PromptPreview>>> {
    let Json(request) = payload?;
    let (base_prompt, settings) = prepare(&request, state.config.settings_policy)?;

    let preview = PromptPreview {
        prompt: enhance_prompt(&base_prompt, &settings),
        clauses: camera_clauses(&settings),
        technical_summary: technical_summary(&settings),
    };

    Ok(Json(DataResponse { data: preview }))
}

/// OPTIONS /generate-image -- empty 200 for clients that send a bare
/// OPTIONS. Real CORS preflights are answered by the CORS layer first.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
