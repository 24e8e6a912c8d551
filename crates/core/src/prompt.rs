//! Base prompt validation and composition.
//!
//! A base prompt may be assembled from the main prompt plus optional
//! character, scene, and lighting fragments before it is enhanced.

use serde::Deserialize;

use crate::camera::CameraSettings;
use crate::error::CoreError;

/// Maximum length for a composed base prompt in characters.
pub const MAX_PROMPT_LENGTH: usize = 10_000;

/// Validate a base prompt: must contain non-whitespace text and stay within
/// the length limit.
pub fn validate_prompt(text: &str) -> Result<(), CoreError> {
    if text.trim().is_empty() {
        return Err(CoreError::Validation("Prompt must not be empty".to_string()));
    }
    let len = text.chars().count();
    if len > MAX_PROMPT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Prompt exceeds maximum length of {MAX_PROMPT_LENGTH} characters (got {len})"
        )));
    }
    Ok(())
}

/// Prompt fragments contributed by the different editor panels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptParts {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub character_prompt: Option<String>,
    #[serde(default)]
    pub scene_prompt: Option<String>,
    #[serde(default)]
    pub lighting_prompt: Option<String>,
}

impl PromptParts {
    /// Join the non-empty fragments with `", "` in panel order.
    pub fn combine(&self) -> String {
        [
            Some(self.prompt.as_str()),
            self.character_prompt.as_deref(),
            self.scene_prompt.as_deref(),
            self.lighting_prompt.as_deref(),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

/// One-line readout of the present settings, e.g.
/// `Camera: f/2.8, ISO 400, 1/60s, +0.5 EV, Contrast: 50, Saturation: 50`.
pub fn technical_summary(settings: &CameraSettings) -> String {
    let mut parts = Vec::new();

    if let Some(aperture) = settings.aperture {
        parts.push(format!("f/{aperture}"));
    }
    if let Some(iso) = settings.iso {
        parts.push(format!("ISO {iso}"));
    }
    if let Some(shutter_speed) = settings.shutter_speed {
        parts.push(format!("1/{shutter_speed}s"));
    }
    match settings.exposure {
        Some(ev) if ev > 0.0 => parts.push(format!("+{ev} EV")),
        Some(ev) if ev < 0.0 => parts.push(format!("{ev} EV")),
        _ => {}
    }
    if let Some(contrast) = settings.contrast {
        parts.push(format!("Contrast: {contrast}"));
    }
    if let Some(saturation) = settings.saturation {
        parts.push(format!("Saturation: {saturation}"));
    }

    if parts.is_empty() {
        "Camera: auto".to_string()
    } else {
        format!("Camera: {}", parts.join(", "))
    }
}
