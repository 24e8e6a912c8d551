//! Wire types for the gateway's OpenAI-compatible chat-completions API.
//!
//! Only the fields on the path to the image reference are modelled;
//! everything else in the response (including `content`, which may be a
//! string or an array of parts) is ignored. Every container on that path is
//! optional and tolerates an explicit `null`, so a success payload without an
//! image surfaces as "no image" rather than as a decoding failure.

use serde::{Deserialize, Serialize};

/// Output modalities requested from the model.
pub const MODALITIES: [&str; 2] = ["image", "text"];

/// Request body for `POST /v1/chat/completions`.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub modalities: [&'static str; 2],
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

impl<'a> ChatCompletionRequest<'a> {
    /// A single-turn user request for an image.
    pub fn image(model: &'a str, prompt: &'a str) -> Self {
        Self {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            modalities: MODALITIES,
        }
    }
}

/// Response body of a chat completion.
#[derive(Debug, Default, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Option<Vec<Option<Choice>>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<AssistantMessage>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AssistantMessage {
    #[serde(default)]
    pub images: Option<Vec<Option<ImagePart>>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ImagePart {
    #[serde(default)]
    pub image_url: Option<ImageUrl>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ImageUrl {
    #[serde(default)]
    pub url: Option<String>,
}

impl ChatCompletionResponse {
    /// The first image reference (URL or data URI) of the first choice, if
    /// it is present and non-empty.
    pub fn first_image_url(&self) -> Option<&str> {
        self.choices
            .as_ref()?
            .first()?
            .as_ref()?
            .message
            .as_ref()?
            .images
            .as_ref()?
            .first()?
            .as_ref()?
            .image_url
            .as_ref()?
            .url
            .as_deref()
            .filter(|url| !url.is_empty())
    }
}
