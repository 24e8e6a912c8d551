//! Pseudo-photographic camera settings.
//!
//! The settings never drive a real optical process; they only bias the
//! phrasing of the enhanced prompt (see [`crate::enhancer`]). Every field is
//! optional and `None` always means "not provided". An explicit zero is a
//! present value and is validated like any other.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Lower bound of the canonical contrast/saturation scale.
pub const TONE_MIN: f64 = 0.0;

/// Upper bound of the canonical contrast/saturation scale.
pub const TONE_MAX: f64 = 100.0;

/// Midpoint of the contrast/saturation scale. Values above read as
/// "high"/"vibrant", values below as "soft"/"muted".
pub const TONE_MIDPOINT: f64 = 50.0;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Camera settings attached to a single generation request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraSettings {
    /// f-number, e.g. `1.8` for f/1.8.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aperture: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso: Option<u32>,
    /// Denominator of a `1/x` second exposure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shutter_speed: Option<f64>,
    /// Exposure compensation in EV, signed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exposure: Option<f64>,
    /// Contrast on the `0..=100` scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrast: Option<f64>,
    /// Saturation on the `0..=100` scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturation: Option<f64>,
}

/// How strictly untyped settings are parsed at the HTTP boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SettingsPolicy {
    /// Non-numeric values are treated as absent.
    #[default]
    Lenient,
    /// Non-numeric values are rejected with [`CoreError::InvalidSettings`].
    Strict,
}

impl FromStr for SettingsPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            other => Err(CoreError::Validation(format!(
                "Unknown settings policy '{other}' (expected 'lenient' or 'strict')"
            ))),
        }
    }
}

impl fmt::Display for SettingsPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lenient => f.write_str("lenient"),
            Self::Strict => f.write_str("strict"),
        }
    }
}

// ---------------------------------------------------------------------------
// Parsing & validation
// ---------------------------------------------------------------------------

impl CameraSettings {
    /// Parse settings from an untyped JSON value.
    ///
    /// `null` yields empty settings. Type mismatches follow `policy`; range
    /// violations are always rejected.
    pub fn from_json(value: &Value, policy: SettingsPolicy) -> Result<Self, CoreError> {
        let fields = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(fields) => fields,
            other => {
                return match policy {
                    SettingsPolicy::Lenient => Ok(Self::default()),
                    SettingsPolicy::Strict => Err(CoreError::InvalidSettings(format!(
                        "camera settings must be an object, got {}",
                        json_kind(other)
                    ))),
                }
            }
        };

        let number = |key: &str| numeric_field(fields, key, policy);

        let settings = Self {
            aperture: number("aperture")?,
            iso: number("iso")?.map(whole_iso).transpose()?,
            shutter_speed: number("shutterSpeed")?,
            exposure: number("exposure")?,
            contrast: number("contrast")?,
            saturation: number("saturation")?,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Check every present field against its allowed range.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(aperture) = self.aperture {
            ensure_positive("aperture", aperture)?;
        }
        if self.iso == Some(0) {
            return Err(CoreError::InvalidSettings(
                "iso must be a positive whole number".to_string(),
            ));
        }
        if let Some(shutter_speed) = self.shutter_speed {
            ensure_positive("shutterSpeed", shutter_speed)?;
        }
        if let Some(exposure) = self.exposure {
            if !exposure.is_finite() {
                return Err(CoreError::InvalidSettings(
                    "exposure must be a finite number".to_string(),
                ));
            }
        }
        ensure_tone("contrast", self.contrast)?;
        ensure_tone("saturation", self.saturation)?;
        Ok(())
    }
}

fn numeric_field(
    fields: &Map<String, Value>,
    key: &str,
    policy: SettingsPolicy,
) -> Result<Option<f64>, CoreError> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_f64()),
        Some(other) => match policy {
            SettingsPolicy::Lenient => Ok(None),
            SettingsPolicy::Strict => Err(CoreError::InvalidSettings(format!(
                "{key} must be a number, got {}",
                json_kind(other)
            ))),
        },
    }
}

fn whole_iso(value: f64) -> Result<u32, CoreError> {
    if value.fract() != 0.0 || value < 1.0 || value > f64::from(u32::MAX) {
        return Err(CoreError::InvalidSettings(format!(
            "iso must be a positive whole number (got {value})"
        )));
    }
    Ok(value as u32)
}

fn ensure_positive(field: &str, value: f64) -> Result<(), CoreError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CoreError::InvalidSettings(format!(
            "{field} must be a positive number (got {value})"
        )));
    }
    Ok(())
}

fn ensure_tone(field: &str, value: Option<f64>) -> Result<(), CoreError> {
    match value {
        Some(v) if !(TONE_MIN..=TONE_MAX).contains(&v) => Err(CoreError::InvalidSettings(format!(
            "{field} must be between {TONE_MIN} and {TONE_MAX} (got {v})"
        ))),
        _ => Ok(()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
