//! Route definitions for image generation.

use axum::routing::post;
use axum::Router;

use crate::handlers::generation;
use crate::state::AppState;

/// Generation routes mounted under `/api/v1`.
///
/// ```text
/// POST    /generate-image   -> generate_image
/// OPTIONS /generate-image   -> preflight
/// POST    /prompt-preview   -> preview_prompt
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/generate-image",
            post(generation::generate_image).options(generation::preflight),
        )
        .route("/prompt-preview", post(generation::preview_prompt))
}
