//! Transform component for stage nodes and the camera.

use crate::math::{Euler, Vector3};
use serde::{Deserialize, Serialize};

/// Position, rotation and scale of a node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// World position.
    pub position: Vector3,
    /// Rotation as Euler angles.
    pub rotation: Euler,
    /// Scale.
    pub scale: Vector3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform {
    /// Identity transform.
    pub const fn new() -> Self {
        Self {
            position: Vector3::ZERO,
            rotation: Euler::ZERO,
            scale: Vector3::ONE,
        }
    }

    /// Identity transform moved to `position`.
    pub fn from_position(position: impl Into<Vector3>) -> Self {
        Self {
            position: position.into(),
            ..Self::new()
        }
    }

    /// Set position.
    #[inline]
    pub fn set_position(&mut self, position: impl Into<Vector3>) {
        self.position = position.into();
    }

    /// Translate by an offset.
    #[inline]
    pub fn translate(&mut self, offset: impl Into<Vector3>) {
        self.position += offset.into();
    }

    /// Set rotation, normalizing each axis.
    #[inline]
    pub fn set_rotation(&mut self, rotation: Euler) {
        self.rotation = rotation.normalized();
    }

    /// Add to the current rotation, normalizing each axis.
    pub fn rotate_by(&mut self, delta: Euler) {
        let r = self.rotation;
        self.rotation =
            Euler::new(r.x + delta.x, r.y + delta.y, r.z + delta.z, r.order).normalized();
    }

    /// Set scale.
    #[inline]
    pub fn set_scale(&mut self, scale: impl Into<Vector3>) {
        self.scale = scale.into();
    }

    /// The rotation to animate towards so that no axis swings more than
    /// half a turn on the way to `target`.
    #[inline]
    pub fn minimal_rotation_to(&self, target: &Euler) -> Euler {
        self.rotation.minimal_target(target)
    }

    /// Turn so the forward axis points at `target`.
    ///
    /// Does nothing when `target` coincides with the current position.
    pub fn look_at(&mut self, target: Vector3, up: Vector3) {
        if let Some(rotation) = Euler::looking_at(self.position, target, up, self.rotation.order) {
            self.rotation = rotation;
        }
    }

    /// Forward direction (local -Z in world space).
    pub fn forward(&self) -> Vector3 {
        self.rotation.forward()
    }

    /// Local-to-world matrix.
    pub fn to_matrix(&self) -> glam::Mat4 {
        glam::Mat4::from_scale_rotation_translation(
            self.scale.into(),
            self.rotation.to_quat(),
            self.position.into(),
        )
    }
}
