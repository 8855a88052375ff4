//! Hemisphere light for sky/ground gradient illumination.

use crate::math::Color;
use serde::{Deserialize, Serialize};

/// Gradient light: up-facing surfaces get the sky color, down-facing ones
/// the ground color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HemisphereLight {
    /// Sky color (Y+).
    pub sky_color: Color,
    /// Ground color (Y-).
    pub ground_color: Color,
    /// Light intensity.
    pub intensity: f32,
}

impl Default for HemisphereLight {
    fn default() -> Self {
        Self::new(Color::WHITE, Color::GRAY, 1.0)
    }
}

impl HemisphereLight {
    /// Create a new hemisphere light.
    pub fn new(sky_color: Color, ground_color: Color, intensity: f32) -> Self {
        Self {
            sky_color,
            ground_color,
            intensity,
        }
    }
}
