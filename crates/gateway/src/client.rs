//! HTTP client for the AI gateway's chat-completions endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::generation::{GeneratedImage, ImageGateway};
use crate::messages::{ChatCompletionRequest, ChatCompletionResponse};

/// HTTP client for a single AI gateway endpoint.
pub struct GatewayClient {
    client: reqwest::Client,
    config: GatewayConfig,
}

impl GatewayClient {
    /// Create a client with its own connection pool and the configured
    /// request timeout.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    // ---- private helpers ----

    /// Map a non-success status to its error class, consuming the body for
    /// diagnostics.
    async fn classify_failure(response: reqwest::Response) -> GatewayError {
        match response.status() {
            StatusCode::TOO_MANY_REQUESTS => GatewayError::RateLimited,
            StatusCode::PAYMENT_REQUIRED => GatewayError::PaymentRequired,
            status => {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "<unreadable body>".to_string());
                tracing::error!(status = status.as_u16(), %body, "AI gateway error");
                GatewayError::Upstream {
                    status: status.as_u16(),
                    body,
                }
            }
        }
    }
}

#[async_trait]
impl ImageGateway for GatewayClient {
    fn model(&self) -> &str {
        &self.config.model
    }

    /// Sends `POST {endpoint}` with a single user message and reads the
    /// first image of the first choice.
    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, GatewayError> {
        let body = ChatCompletionRequest::image(&self.config.model, prompt);

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::classify_failure(response).await);
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let url = completion
            .first_image_url()
            .ok_or(GatewayError::NoImageReturned)?;

        Ok(GeneratedImage {
            url: url.to_string(),
        })
    }
}
