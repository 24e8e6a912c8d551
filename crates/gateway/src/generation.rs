//! Generation orchestration: enhance the prompt, make the outbound call,
//! and hand back the image reference together with the prompt that was sent.

use async_trait::async_trait;
use lenscraft_core::camera::CameraSettings;
use lenscraft_core::enhancer::enhance_prompt;
use serde::Serialize;

use crate::error::GatewayError;

/// An image reference returned by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    /// URL or data URI, whichever the upstream returned.
    pub url: String,
}

/// Outbound image synthesis. Implemented by
/// [`GatewayClient`](crate::client::GatewayClient) for the real service and
/// by stubs in tests.
#[async_trait]
pub trait ImageGateway: Send + Sync {
    /// Model identifier used for generation.
    fn model(&self) -> &str;

    /// Generate one image for an already-enhanced prompt.
    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, GatewayError>;
}

/// Result of a successful generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Generation {
    pub image_url: String,
    /// The enhanced prompt actually sent upstream.
    pub prompt: String,
}

/// Enhance `base_prompt` with `settings` and generate exactly one image.
///
/// Errors from the gateway are returned unchanged; nothing is retried.
pub async fn generate(
    gateway: &dyn ImageGateway,
    base_prompt: &str,
    settings: &CameraSettings,
) -> Result<Generation, GatewayError> {
    tracing::info!(prompt = %base_prompt, ?settings, "Generating image");

    let prompt = enhance_prompt(base_prompt, settings);
    tracing::debug!(enhanced_prompt = %prompt, model = gateway.model(), "Enhanced prompt");

    let image = gateway.generate_image(&prompt).await?;
    tracing::info!("AI response received");

    Ok(Generation {
        image_url: image.url,
        prompt,
    })
}
