use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lenscraft_core::error::CoreError;
use lenscraft_gateway::error::GatewayError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for boundary validation failures and
/// [`GatewayError`] for upstream failures. Implements [`IntoResponse`] to
/// produce consistent `{ "error", "code" }` JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `lenscraft_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure while talking to the AI gateway.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::InvalidSettings(msg) => {
                    (StatusCode::BAD_REQUEST, "INVALID_SETTINGS", msg.clone())
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            // --- Gateway errors ---
            AppError::Gateway(err) => classify_gateway_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a gateway error into an HTTP status, error code, and message.
///
/// - `RateLimited` maps to 429 and `PaymentRequired` to 402 so the client
///   can tell them apart from generic failures.
/// - Upstream failures keep the upstream status in the message; the body is
///   only logged.
/// - Configuration and transport failures are sanitized.
fn classify_gateway_error(err: &GatewayError) -> (StatusCode, &'static str, String) {
    match err {
        GatewayError::RateLimited => (
            StatusCode::TOO_MANY_REQUESTS,
            "RATE_LIMITED",
            "Rate limit exceeded. Please try again later.".to_string(),
        ),
        GatewayError::PaymentRequired => (
            StatusCode::PAYMENT_REQUIRED,
            "PAYMENT_REQUIRED",
            "Payment required. Please add credits to your workspace.".to_string(),
        ),
        GatewayError::Upstream { status, body } => {
            tracing::error!(status, %body, "AI gateway returned an error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "UPSTREAM_ERROR",
                format!("AI gateway error: {status}"),
            )
        }
        GatewayError::NoImageReturned => {
            tracing::error!("AI gateway response carried no image");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "NO_IMAGE_RETURNED",
                "No image generated".to_string(),
            )
        }
        GatewayError::Configuration(msg) => {
            tracing::error!(error = %msg, "AI gateway is not configured");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIGURATION_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        GatewayError::Request(err) => {
            tracing::error!(error = %err, "AI gateway request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
