//! Directional light.

use crate::math::{Color, Vector3};
use serde::{Deserialize, Serialize};

/// Parallel light shining from the node position towards `target`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLight {
    /// Light color.
    pub color: Color,
    /// Light intensity.
    pub intensity: f32,
    /// Point the light shines at.
    pub target: Vector3,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self::new(Color::WHITE, 1.0)
    }
}

impl DirectionalLight {
    /// Create a light aimed at the origin.
    pub fn new(color: Color, intensity: f32) -> Self {
        Self {
            color,
            intensity,
            target: Vector3::ZERO,
        }
    }

    /// Aim at another point.
    pub fn with_target(mut self, target: impl Into<Vector3>) -> Self {
        self.target = target.into();
        self
    }

    /// Unit direction of the rays for a light placed at `position`.
    pub fn direction_from(&self, position: Vector3) -> Vector3 {
        (self.target - position).normalized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_position() {
        let light = DirectionalLight::default().with_target([0.0, 0.0, 0.0]);
        let d = light.direction_from(Vector3::new(0.0, 10.0, 0.0));
        assert!(d.approx_eq(&Vector3::new(0.0, -1.0, 0.0), 1e-6));
    }
}
