//! Integration tests for `GatewayClient` against an in-process stub of the
//! AI gateway.
//!
//! Each test binds a throwaway axum server on `127.0.0.1:0` that answers the
//! chat-completions route with a canned status and body, then points a real
//! `reqwest`-backed client at it.

use assert_matches::assert_matches;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use lenscraft_core::camera::CameraSettings;
use lenscraft_gateway::client::GatewayClient;
use lenscraft_gateway::config::GatewayConfig;
use lenscraft_gateway::error::GatewayError;
use lenscraft_gateway::generation::{generate, ImageGateway};

const ROUTE: &str = "/v1/chat/completions";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Serve `app` on an ephemeral port and return the endpoint URL.
async fn spawn_upstream(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}{ROUTE}")
}

/// An upstream that always answers with `status` and `body`.
fn replying(status: StatusCode, body: Value) -> Router {
    Router::new().route(ROUTE, post(move || async move { (status, Json(body)) }))
}

fn client_for(endpoint: String) -> GatewayClient {
    let config = GatewayConfig::new("test-key")
        .unwrap()
        .with_endpoint(endpoint)
        .with_model("test/model");
    GatewayClient::new(config).unwrap()
}

fn image_payload(url: &str) -> Value {
    json!({
        "choices": [{
            "message": {
                "role": "assistant",
                "content": "",
                "images": [{ "type": "image_url", "image_url": { "url": url } }]
            }
        }]
    })
}

// ---------------------------------------------------------------------------
// Test: request shape and successful extraction
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sends_bearer_key_model_and_prompt() {
    let app = Router::new().route(
        ROUTE,
        post(|headers: HeaderMap, Json(request): Json<Value>| async move {
            let authorized = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                == Some("Bearer test-key");
            let well_formed = request["model"] == "test/model"
                && request["modalities"] == json!(["image", "text"])
                && request["messages"][0]["role"] == "user";
            if !authorized || !well_formed {
                return (StatusCode::BAD_REQUEST, Json(json!({ "error": "unexpected request" })));
            }
            let prompt = request["messages"][0]["content"].as_str().unwrap_or_default();
            let url = format!("https://img.test/{}", prompt.replace(' ', "_"));
            (StatusCode::OK, Json(image_payload(&url)))
        }),
    );
    let client = client_for(spawn_upstream(app).await);

    let image = client.generate_image("a cat").await.unwrap();

    assert_eq!(image.url, "https://img.test/a_cat");
}

#[tokio::test]
async fn returns_data_uri_images_verbatim() {
    let endpoint = spawn_upstream(replying(
        StatusCode::OK,
        image_payload("data:image/png;base64,iVBORw0KGgo="),
    ))
    .await;

    let image = client_for(endpoint).generate_image("sunset").await.unwrap();

    assert_eq!(image.url, "data:image/png;base64,iVBORw0KGgo=");
}

#[tokio::test]
async fn generate_sends_enhanced_prompt_through_real_client() {
    let app = Router::new().route(
        ROUTE,
        post(|Json(request): Json<Value>| async move {
            let prompt = request["messages"][0]["content"].as_str().unwrap_or_default();
            Json(image_payload(&format!("echo:{prompt}")))
        }),
    );
    let client = client_for(spawn_upstream(app).await);
    let settings = CameraSettings {
        iso: Some(3200),
        shutter_speed: Some(30.0),
        ..Default::default()
    };

    let generation = generate(&client, "sunset", &settings).await.unwrap();

    assert_eq!(generation.image_url, format!("echo:{}", generation.prompt));
    assert!(generation.prompt.starts_with("sunset, ISO 3200 with visible film grain"));
}

// ---------------------------------------------------------------------------
// Test: upstream error classes are distinct
// ---------------------------------------------------------------------------

#[tokio::test]
async fn status_429_is_rate_limited() {
    let endpoint = spawn_upstream(replying(
        StatusCode::TOO_MANY_REQUESTS,
        json!({ "error": "slow down" }),
    ))
    .await;

    let result = client_for(endpoint).generate_image("a cat").await;

    assert_matches!(result, Err(GatewayError::RateLimited));
}

#[tokio::test]
async fn status_402_is_payment_required() {
    let endpoint = spawn_upstream(replying(
        StatusCode::PAYMENT_REQUIRED,
        json!({ "error": "out of credits" }),
    ))
    .await;

    let result = client_for(endpoint).generate_image("a cat").await;

    assert_matches!(result, Err(GatewayError::PaymentRequired));
}

#[tokio::test]
async fn status_500_is_upstream_error_with_body() {
    let endpoint = spawn_upstream(replying(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": "model crashed" }),
    ))
    .await;

    let result = client_for(endpoint).generate_image("a cat").await;

    assert_matches!(
        result,
        Err(GatewayError::Upstream { status: 500, ref body }) if body.contains("model crashed")
    );
}

#[tokio::test]
async fn other_client_errors_are_upstream_errors() {
    let endpoint = spawn_upstream(replying(
        StatusCode::BAD_REQUEST,
        json!({ "error": "prompt rejected" }),
    ))
    .await;

    let result = client_for(endpoint).generate_image("a cat").await;

    assert_matches!(result, Err(GatewayError::Upstream { status: 400, .. }));
}

// ---------------------------------------------------------------------------
// Test: success without an image is a contract violation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn success_without_image_is_no_image_returned() {
    let endpoint = spawn_upstream(replying(
        StatusCode::OK,
        json!({ "choices": [{ "message": { "content": "I can only describe it" } }] }),
    ))
    .await;

    let result = client_for(endpoint).generate_image("a cat").await;

    assert_matches!(result, Err(GatewayError::NoImageReturned));
}

#[tokio::test]
async fn success_with_empty_choices_is_no_image_returned() {
    let endpoint = spawn_upstream(replying(StatusCode::OK, json!({ "choices": [] }))).await;

    let result = client_for(endpoint).generate_image("a cat").await;

    assert_matches!(result, Err(GatewayError::NoImageReturned));
}

#[tokio::test]
async fn success_with_null_images_is_no_image_returned() {
    let endpoint = spawn_upstream(replying(
        StatusCode::OK,
        json!({ "choices": [{ "message": { "content": "text only", "images": null } }] }),
    ))
    .await;

    let result = client_for(endpoint).generate_image("a cat").await;

    assert_matches!(result, Err(GatewayError::NoImageReturned));
}

#[tokio::test]
async fn success_with_content_parts_and_no_image_is_no_image_returned() {
    let endpoint = spawn_upstream(replying(
        StatusCode::OK,
        json!({ "choices": [{ "message": { "content": [{ "type": "text", "text": "hi" }] } }] }),
    ))
    .await;

    let result = client_for(endpoint).generate_image("a cat").await;

    assert_matches!(result, Err(GatewayError::NoImageReturned));
}

#[tokio::test]
async fn content_parts_next_to_an_image_still_succeed() {
    let endpoint = spawn_upstream(replying(
        StatusCode::OK,
        json!({
            "choices": [{
                "message": {
                    "content": [{ "type": "text", "text": "Here it is" }],
                    "images": [{ "type": "image_url", "image_url": { "url": "https://img.test/ok.png" } }]
                }
            }]
        }),
    ))
    .await;

    let image = client_for(endpoint).generate_image("a cat").await.unwrap();

    assert_eq!(image.url, "https://img.test/ok.png");
}

// ---------------------------------------------------------------------------
// Test: transport failure
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unreachable_gateway_is_request_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = client_for(format!("http://{addr}{ROUTE}"))
        .generate_image("a cat")
        .await;

    assert_matches!(result, Err(GatewayError::Request(_)));
}
