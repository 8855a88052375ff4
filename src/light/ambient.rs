//! Ambient light.

use crate::math::Color;
use serde::{Deserialize, Serialize};

/// Light applied equally to every surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmbientLight {
    /// Light color.
    pub color: Color,
    /// Light intensity.
    pub intensity: f32,
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self::new(Color::WHITE, 1.0)
    }
}

impl AmbientLight {
    /// Create a new ambient light.
    pub fn new(color: Color, intensity: f32) -> Self {
        Self { color, intensity }
    }
}
