#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use lenscraft_api::config::ServerConfig;
use lenscraft_api::router::build_app_router;
use lenscraft_api::state::AppState;
use lenscraft_core::camera::SettingsPolicy;
use lenscraft_gateway::error::GatewayError;
use lenscraft_gateway::generation::{GeneratedImage, ImageGateway};

/// Canned reply of a [`StubGateway`].
#[derive(Debug, Clone)]
pub enum StubReply {
    Image(String),
    RateLimited,
    PaymentRequired,
    Upstream(u16, String),
    NoImage,
}

/// In-memory gateway that records prompts and answers with a fixed reply.
pub struct StubGateway {
    reply: StubReply,
    prompts: Mutex<Vec<String>>,
}

impl StubGateway {
    pub fn new(reply: StubReply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            prompts: Mutex::new(Vec::new()),
        })
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageGateway for StubGateway {
    fn model(&self) -> &str {
        "stub/model"
    }

    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, GatewayError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            StubReply::Image(url) => Ok(GeneratedImage { url: url.clone() }),
            StubReply::RateLimited => Err(GatewayError::RateLimited),
            StubReply::PaymentRequired => Err(GatewayError::PaymentRequired),
            StubReply::Upstream(status, body) => Err(GatewayError::Upstream {
                status: *status,
                body: body.clone(),
            }),
            StubReply::NoImage => Err(GatewayError::NoImageReturned),
        }
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(settings_policy: SettingsPolicy) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        settings_policy,
    }
}

/// Build the full application router around `gateway` with the lenient
/// settings policy.
pub fn build_test_app(gateway: Arc<StubGateway>) -> Router {
    build_test_app_with_policy(gateway, SettingsPolicy::Lenient)
}

/// Build the full application router around `gateway`.
///
/// Uses the same `build_app_router` as `main.rs`, so tests exercise the
/// production middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery).
pub fn build_test_app_with_policy(gateway: Arc<StubGateway>, policy: SettingsPolicy) -> Router {
    let config = test_config(policy);
    let state = AppState {
        config: Arc::new(config.clone()),
        gateway,
    };
    build_app_router(state, &config)
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, body.to_string()).await
}

/// Send a POST request with an arbitrary body labelled as JSON.
pub async fn post_raw(app: Router, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .header("origin", "http://localhost:8080")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}
