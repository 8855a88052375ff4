//! Spot light (cone-shaped).

use crate::math::{consts::PI, Color, Radians, Vector3};
use serde::{Deserialize, Serialize};

/// Cone of light from the node position towards `target`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpotLight {
    /// Light color.
    pub color: Color,
    /// Light intensity.
    pub intensity: f32,
    /// Cutoff distance, 0 for no cutoff.
    pub distance: f32,
    /// Half-angle of the cone, at most a quarter turn.
    pub angle: Radians,
    /// Fraction of the cone that is attenuated, `0..=1`.
    pub penumbra: f32,
    /// Falloff exponent.
    pub decay: f32,
    /// Point the cone is aimed at.
    pub target: Vector3,
}

impl Default for SpotLight {
    fn default() -> Self {
        Self::new(Color::WHITE, 1.0)
    }
}

impl SpotLight {
    /// Create a light with a π/3 cone aimed at the origin.
    pub fn new(color: Color, intensity: f32) -> Self {
        Self {
            color,
            intensity,
            distance: 0.0,
            angle: Radians(PI / 3.0),
            penumbra: 0.0,
            decay: 2.0,
            target: Vector3::ZERO,
        }
    }

    /// Set the cone half-angle, clamped to `0..=π/2`.
    pub fn with_angle(mut self, angle: impl Into<Radians>) -> Self {
        self.angle = Radians(angle.into().value().clamp(0.0, PI / 2.0));
        self
    }

    /// Set the penumbra, clamped to `0..=1`.
    pub fn with_penumbra(mut self, penumbra: f32) -> Self {
        self.penumbra = penumbra.clamp(0.0, 1.0);
        self
    }

    /// Aim at another point.
    pub fn with_target(mut self, target: impl Into<Vector3>) -> Self {
        self.target = target.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Degrees;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_angle_accepts_degrees_and_clamps() {
        let spot = SpotLight::default().with_angle(Degrees(30.0));
        assert_abs_diff_eq!(spot.angle.value(), PI / 6.0, epsilon = 1e-6);
        let wide = SpotLight::default().with_angle(Radians(3.0));
        assert_abs_diff_eq!(wide.angle.value(), PI / 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_penumbra_clamped() {
        assert_eq!(SpotLight::default().with_penumbra(4.0).penumbra, 1.0);
        assert_eq!(SpotLight::default().with_penumbra(-1.0).penumbra, 0.0);
    }
}
