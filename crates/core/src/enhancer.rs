//! Prompt enhancer: turns a base prompt plus camera settings into a prompt
//! that carries photographic vocabulary for each setting.
//!
//! Clauses are always emitted in the order aperture, ISO, shutter speed,
//! exposure, contrast, saturation, followed by [`QUALITY_SUFFIX`]. Thresholds
//! are strict inequalities, so a value sitting exactly on a threshold falls
//! into the middle ("balanced"/"natural") phrasing.

use crate::camera::{CameraSettings, TONE_MIDPOINT};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Trailing clause appended to every enhanced prompt.
pub const QUALITY_SUFFIX: &str =
    "professional photography, high quality, ultra detailed, 16:9 aspect ratio";

/// Apertures below this f-number read as shallow depth of field.
pub const SHALLOW_APERTURE_BELOW: f64 = 4.0;

/// Apertures above this f-number read as deep depth of field.
pub const DEEP_APERTURE_ABOVE: f64 = 8.0;

/// ISO above this shows subtle grain.
pub const SUBTLE_GRAIN_ISO_ABOVE: u32 = 800;

/// ISO above this shows visible film grain.
pub const VISIBLE_GRAIN_ISO_ABOVE: u32 = 1600;

/// Shutter speeds (1/x) below this blur motion.
pub const MOTION_BLUR_SHUTTER_BELOW: f64 = 60.0;

/// Shutter speeds (1/x) above this freeze motion.
pub const FROZEN_MOTION_SHUTTER_ABOVE: f64 = 250.0;

// ---------------------------------------------------------------------------
// Enhancement
// ---------------------------------------------------------------------------

/// Build the enhanced prompt for `base` under `settings`.
///
/// Pure and infallible. `base` is not validated; an empty base yields a
/// prompt that starts with the first clause separator.
pub fn enhance_prompt(base: &str, settings: &CameraSettings) -> String {
    let mut prompt = String::from(base);
    for clause in camera_clauses(settings) {
        prompt.push_str(", ");
        prompt.push_str(&clause);
    }
    prompt.push_str(", ");
    prompt.push_str(QUALITY_SUFFIX);
    prompt
}

/// The ordered photographic clauses for the present settings, without
/// separators and without the quality suffix.
///
/// Numbers are written with `f64`'s `Display`, which gives the shortest
/// round-tripping decimal and never switches to exponent notation.
pub fn camera_clauses(settings: &CameraSettings) -> Vec<String> {
    let mut clauses = Vec::with_capacity(6);

    if let Some(aperture) = settings.aperture {
        clauses.push(format!(
            "shot at f/{aperture} with {}",
            depth_of_field_phrase(aperture)
        ));
    }
    if let Some(iso) = settings.iso {
        clauses.push(format!("ISO {iso} {}", grain_phrase(iso)));
    }
    if let Some(shutter_speed) = settings.shutter_speed {
        clauses.push(format!(
            "shutter speed 1/{shutter_speed} {}",
            motion_phrase(shutter_speed)
        ));
    }
    if let Some(exposure) = settings.exposure {
        clauses.push(exposure_phrase(exposure).to_string());
    }
    if let Some(contrast) = settings.contrast {
        clauses.push(contrast_phrase(contrast).to_string());
    }
    if let Some(saturation) = settings.saturation {
        clauses.push(saturation_phrase(saturation).to_string());
    }

    clauses
}

// ---------------------------------------------------------------------------
// Phrases
// ---------------------------------------------------------------------------

pub fn depth_of_field_phrase(aperture: f64) -> &'static str {
    if aperture < SHALLOW_APERTURE_BELOW {
        "shallow depth of field, bokeh background"
    } else if aperture > DEEP_APERTURE_ABOVE {
        "deep depth of field, sharp throughout"
    } else {
        "balanced depth of field"
    }
}

pub fn grain_phrase(iso: u32) -> &'static str {
    if iso > VISIBLE_GRAIN_ISO_ABOVE {
        "with visible film grain"
    } else if iso > SUBTLE_GRAIN_ISO_ABOVE {
        "with subtle grain"
    } else {
        "clean and crisp"
    }
}

pub fn motion_phrase(shutter_speed: f64) -> &'static str {
    if shutter_speed < MOTION_BLUR_SHUTTER_BELOW {
        "motion blur effect"
    } else if shutter_speed > FROZEN_MOTION_SHUTTER_ABOVE {
        "frozen motion, sharp action"
    } else {
        "natural motion capture"
    }
}

/// Zero exposure is a deliberate neutral setting and reads as well-exposed.
pub fn exposure_phrase(exposure: f64) -> &'static str {
    if exposure > 0.0 {
        "bright and airy"
    } else if exposure < 0.0 {
        "dark and moody"
    } else {
        "well-exposed"
    }
}

pub fn contrast_phrase(contrast: f64) -> &'static str {
    if contrast > TONE_MIDPOINT {
        "high contrast, dramatic"
    } else if contrast < TONE_MIDPOINT {
        "soft, low contrast"
    } else {
        "balanced contrast"
    }
}

pub fn saturation_phrase(saturation: f64) -> &'static str {
    if saturation > TONE_MIDPOINT {
        "vibrant, saturated colors"
    } else if saturation < TONE_MIDPOINT {
        "muted, desaturated colors"
    } else {
        "natural color saturation"
    }
}
