pub mod generation;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /generate-image                                  generate (POST), preflight (OPTIONS)
/// /prompt-preview                                  preview enhanced prompt (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(generation::router())
}
