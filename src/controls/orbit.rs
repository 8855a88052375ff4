//! Orbiting a node around a target point.
//!
//! [`OrbitState`] is a plain value: partial updates through
//! [`OrbitOptions`] produce a new state and the caller decides where to keep
//! it. Only orbiting around the vertical (`Y`) axis is supported; the other
//! axes report [`OrbitError::UnsupportedAxis`] and leave the position alone.

use crate::math::{Degrees, Vector3};
use crate::scene::Transform;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Axis the orbit plane is perpendicular to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrbitAxis {
    /// Orbit in the YZ plane.
    X,
    /// Orbit in the XZ plane.
    #[default]
    Y,
    /// Orbit in the XY plane.
    Z,
}

impl fmt::Display for OrbitAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OrbitAxis::X => "x",
            OrbitAxis::Y => "y",
            OrbitAxis::Z => "z",
        };
        f.write_str(name)
    }
}

/// Errors from an orbit step.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitError {
    /// Orbiting around this axis is not implemented.
    #[error("orbiting around the {0} axis is not supported")]
    UnsupportedAxis(OrbitAxis),
}

/// Orbit configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitState {
    /// Point to orbit around.
    pub target: Vector3,
    /// Axis perpendicular to the orbit plane.
    pub axis: OrbitAxis,
    /// Face the target after every step.
    pub reaim: bool,
}

impl Default for OrbitState {
    fn default() -> Self {
        Self {
            target: Vector3::ZERO,
            axis: OrbitAxis::Y,
            reaim: true,
        }
    }
}

/// Partial update for an [`OrbitState`]. Unset fields keep their value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitOptions {
    /// New target.
    pub target: Option<Vector3>,
    /// New axis.
    pub axis: Option<OrbitAxis>,
    /// New re-aim flag.
    pub reaim: Option<bool>,
}

impl OrbitOptions {
    /// Empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target.
    pub fn target(mut self, target: impl Into<Vector3>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Set the axis.
    pub fn axis(mut self, axis: OrbitAxis) -> Self {
        self.axis = Some(axis);
        self
    }

    /// Set the re-aim flag.
    pub fn reaim(mut self, reaim: bool) -> Self {
        self.reaim = Some(reaim);
        self
    }
}

impl OrbitState {
    /// Orbit around `target` on the Y axis, re-aiming after each step.
    pub fn around(target: impl Into<Vector3>) -> Self {
        Self {
            target: target.into(),
            ..Self::default()
        }
    }

    /// Apply a partial update, returning the new state.
    pub fn with_options(&self, options: OrbitOptions) -> Self {
        Self {
            target: options.target.unwrap_or(self.target),
            axis: options.axis.unwrap_or(self.axis),
            reaim: options.reaim.unwrap_or(self.reaim),
        }
    }

    /// Where `position` ends up after orbiting by `angle`.
    pub fn orbit_point(&self, position: Vector3, angle: Degrees) -> Result<Vector3, OrbitError> {
        let theta = angle.to_radians();
        match self.axis {
            OrbitAxis::Y => {
                let (sin, cos) = (theta.sin(), theta.cos());
                let dx = position.x - self.target.x;
                let dz = position.z - self.target.z;
                // Right-handed rotation about +Y: (0, 0, r) goes to (r, 0, 0) at 90°.
                Ok(Vector3::new(
                    self.target.x + dx * cos + dz * sin,
                    position.y,
                    self.target.z + dz * cos - dx * sin,
                ))
            }
            axis => Err(OrbitError::UnsupportedAxis(axis)),
        }
    }

    /// Orbit `transform` in place, then face the target if `reaim` is set.
    ///
    /// On error the transform is left untouched.
    pub fn step(&self, transform: &mut Transform, angle: Degrees) -> Result<(), OrbitError> {
        transform.position = self.orbit_point(transform.position, angle)?;
        if self.reaim {
            transform.look_at(self.target, Vector3::UP);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_turn_around_origin() {
        let orbit = OrbitState::default();
        let p = orbit.orbit_point(Vector3::new(0.0, 0.0, 5.0), Degrees(90.0)).unwrap();
        assert!(p.approx_eq(&Vector3::new(5.0, 0.0, 0.0), 1e-4), "{p:?}");
    }

    #[test]
    fn test_orbit_keeps_height_and_radius() {
        let orbit = OrbitState::around([1.0, 0.0, -2.0]);
        let start = Vector3::new(4.0, 3.0, 2.0);
        let p = orbit.orbit_point(start, Degrees(37.0)).unwrap();
        assert!((p.y - 3.0).abs() < 1e-6);
        let radius = |v: Vector3| ((v.x - 1.0).powi(2) + (v.z + 2.0).powi(2)).sqrt();
        assert!((radius(p) - radius(start)).abs() < 1e-4);
    }

    #[test]
    fn test_unsupported_axis_leaves_position() {
        let orbit = OrbitState::default().with_options(OrbitOptions::new().axis(OrbitAxis::X));
        let mut t = Transform::from_position([0.0, 0.0, 5.0]);
        let before = t;
        let err = orbit.step(&mut t, Degrees(45.0)).unwrap_err();
        assert_eq!(err, OrbitError::UnsupportedAxis(OrbitAxis::X));
        assert_eq!(t, before);

        let z = orbit.with_options(OrbitOptions::new().axis(OrbitAxis::Z));
        assert!(z.orbit_point(Vector3::new(1.0, 0.0, 0.0), Degrees(10.0)).is_err());
    }

    #[test]
    fn test_partial_options_keep_other_fields() {
        let base = OrbitState::around([1.0, 2.0, 3.0]);
        let updated = base.with_options(OrbitOptions::new().reaim(false));
        assert_eq!(updated.target, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(updated.axis, OrbitAxis::Y);
        assert!(!updated.reaim);

        let moved = updated.with_options(OrbitOptions::new().target([0.0, 0.0, 0.0]));
        assert_eq!(moved.target, Vector3::ZERO);
        assert!(!moved.reaim);
        assert_eq!(base.with_options(OrbitOptions::new()), base);
    }

    #[test]
    fn test_step_reaims_at_target() {
        let orbit = OrbitState::default();
        let mut t = Transform::from_position([0.0, 0.0, 5.0]);
        orbit.step(&mut t, Degrees(90.0)).unwrap();
        assert!(t.position.approx_eq(&Vector3::new(5.0, 0.0, 0.0), 1e-4));
        assert!(t.forward().approx_eq(&Vector3::new(-1.0, 0.0, 0.0), 1e-4));
    }

    #[test]
    fn test_step_from_directly_above_stays_finite() {
        let orbit = OrbitState::default();
        let mut t = Transform::from_position([0.0, 8.0, 0.0]);
        orbit.step(&mut t, Degrees(45.0)).unwrap();
        assert!(t.position.approx_eq(&Vector3::new(0.0, 8.0, 0.0), 1e-6));
        let r = t.rotation;
        assert!(r.x.is_finite() && r.y.is_finite() && r.z.is_finite(), "{r:?}");
        assert!(t.forward().approx_eq(&Vector3::new(0.0, -1.0, 0.0), 1e-4));
    }

    #[test]
    fn test_step_without_reaim_keeps_rotation() {
        let orbit = OrbitState::default().with_options(OrbitOptions::new().reaim(false));
        let mut t = Transform::from_position([0.0, 0.0, 5.0]);
        orbit.step(&mut t, Degrees(90.0)).unwrap();
        assert_eq!(t.rotation, Transform::new().rotation);
    }

    #[test]
    fn test_options_deserialize_partially() {
        let opts: OrbitOptions = serde_json::from_str(r#"{"axis":"z"}"#).unwrap();
        assert_eq!(opts.axis, Some(OrbitAxis::Z));
        assert_eq!(opts.target, None);
    }
}
