//! Point light (omni-directional).

use crate::math::Color;
use serde::{Deserialize, Serialize};

/// Light emitting in all directions from the node position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    /// Light color.
    pub color: Color,
    /// Light intensity.
    pub intensity: f32,
    /// Cutoff distance, 0 for no cutoff.
    pub distance: f32,
    /// Falloff exponent.
    pub decay: f32,
}

impl Default for PointLight {
    fn default() -> Self {
        Self::new(Color::WHITE, 1.0)
    }
}

impl PointLight {
    /// Create a light with no cutoff and physical (2.0) decay.
    pub fn new(color: Color, intensity: f32) -> Self {
        Self {
            color,
            intensity,
            distance: 0.0,
            decay: 2.0,
        }
    }

    /// Set the cutoff distance. Negative values mean no cutoff.
    pub fn with_distance(mut self, distance: f32) -> Self {
        self.distance = distance.max(0.0);
        self
    }
}
