//! Euler angles.

use super::{minimal_end, Degrees, Radians, Vector3};
use serde::{Deserialize, Serialize};

/// Order in which the axis rotations are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EulerOrder {
    /// X, then Y, then Z.
    #[default]
    XYZ,
    /// Y, then X, then Z.
    YXZ,
    /// Z, then X, then Y.
    ZXY,
    /// Z, then Y, then X.
    ZYX,
    /// Y, then Z, then X.
    YZX,
    /// X, then Z, then Y.
    XZY,
}

impl EulerOrder {
    fn to_glam(self) -> glam::EulerRot {
        match self {
            EulerOrder::XYZ => glam::EulerRot::XYZ,
            EulerOrder::YXZ => glam::EulerRot::YXZ,
            EulerOrder::ZXY => glam::EulerRot::ZXY,
            EulerOrder::ZYX => glam::EulerRot::ZYX,
            EulerOrder::YZX => glam::EulerRot::YZX,
            EulerOrder::XZY => glam::EulerRot::XZY,
        }
    }

    /// Split angles given as (x, y, z) into the order glam expects.
    fn to_sequence(self, x: f32, y: f32, z: f32) -> (f32, f32, f32) {
        match self {
            EulerOrder::XYZ => (x, y, z),
            EulerOrder::YXZ => (y, x, z),
            EulerOrder::ZXY => (z, x, y),
            EulerOrder::ZYX => (z, y, x),
            EulerOrder::YZX => (y, z, x),
            EulerOrder::XZY => (x, z, y),
        }
    }

    /// Inverse of [`EulerOrder::to_sequence`].
    fn from_sequence(self, a: f32, b: f32, c: f32) -> (f32, f32, f32) {
        match self {
            EulerOrder::XYZ => (a, b, c),
            EulerOrder::YXZ => (b, a, c),
            EulerOrder::ZXY => (b, c, a),
            EulerOrder::ZYX => (c, b, a),
            EulerOrder::YZX => (c, a, b),
            EulerOrder::XZY => (a, c, b),
        }
    }
}

/// Rotation about the three axes, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Euler {
    /// Rotation around X in radians.
    pub x: f32,
    /// Rotation around Y in radians.
    pub y: f32,
    /// Rotation around Z in radians.
    pub z: f32,
    /// Order of rotations.
    pub order: EulerOrder,
}

impl Euler {
    /// No rotation.
    pub const ZERO: Self = Self::xyz(0.0, 0.0, 0.0);

    /// Create new Euler angles.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, order: EulerOrder) -> Self {
        Self { x, y, z, order }
    }

    /// Create with the default XYZ order.
    #[inline]
    pub const fn xyz(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, EulerOrder::XYZ)
    }

    /// Create from per-axis radians.
    #[inline]
    pub fn from_radians(x: Radians, y: Radians, z: Radians) -> Self {
        Self::xyz(x.0, y.0, z.0)
    }

    /// Create from per-axis degrees. Each axis is normalized before conversion.
    pub fn from_degrees(x: Degrees, y: Degrees, z: Degrees) -> Self {
        Self::from_radians(x.to_radians(), y.to_radians(), z.to_radians())
    }

    /// Per-axis angles as typed radians.
    #[inline]
    pub fn axes(&self) -> [Radians; 3] {
        [Radians(self.x), Radians(self.y), Radians(self.z)]
    }

    /// Normalize every axis independently.
    pub fn normalized(&self) -> Self {
        let [x, y, z] = self.axes().map(Radians::normalized);
        Self::new(x.0, y.0, z.0, self.order)
    }

    /// Adjust `target` so that each axis travels at most half a turn from
    /// `self`.
    ///
    /// Each axis picks its own shortest path, so the result is not
    /// necessarily the shortest rotation in 3D. The result uses the order of
    /// `self`; a target in another order is converted first.
    pub fn minimal_target(&self, target: &Euler) -> Self {
        let target = if target.order == self.order {
            *target
        } else {
            Self::from_quat(target.to_quat(), self.order)
        };
        Self::new(
            minimal_end(Radians(self.x), Radians(target.x)).0,
            minimal_end(Radians(self.y), Radians(target.y)).0,
            minimal_end(Radians(self.z), Radians(target.z)).0,
            self.order,
        )
    }

    /// Per-axis linear interpolation. The order of `self` is kept.
    #[inline]
    pub fn lerp(&self, other: &Euler, t: f32) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.z + (other.z - self.z) * t,
            self.order,
        )
    }

    /// Convert to a quaternion.
    pub fn to_quat(&self) -> glam::Quat {
        let (a, b, c) = self.order.to_sequence(self.x, self.y, self.z);
        glam::Quat::from_euler(self.order.to_glam(), a, b, c)
    }

    /// Create from a quaternion.
    pub fn from_quat(q: glam::Quat, order: EulerOrder) -> Self {
        let (a, b, c) = q.to_euler(order.to_glam());
        let (x, y, z) = order.from_sequence(a, b, c);
        Self::new(x, y, z, order)
    }

    /// Orientation whose forward axis (-Z) points from `eye` at `target`.
    ///
    /// Returns `None` when the two points coincide. When the view direction
    /// is parallel to `up`, another world axis stands in for it.
    pub fn looking_at(
        eye: Vector3,
        target: Vector3,
        up: Vector3,
        order: EulerOrder,
    ) -> Option<Self> {
        let dir = target - eye;
        if dir.length() <= f32::EPSILON {
            return None;
        }
        let dir = dir.normalized();
        let up = if dir.cross(&up.normalized()).length() <= 1e-6 {
            if dir.z.abs() < 0.9 {
                Vector3::FORWARD
            } else {
                Vector3::UP
            }
        } else {
            up
        };
        let view = glam::Mat4::look_at_rh(eye.into(), (eye + dir).into(), up.into());
        let q = glam::Quat::from_mat4(&view.inverse()).normalize();
        Some(Self::from_quat(q, order))
    }

    /// Direction of the local -Z axis after applying this rotation.
    pub fn forward(&self) -> Vector3 {
        (self.to_quat() * glam::Vec3::NEG_Z).into()
    }

    /// Angles as a vector (x, y, z).
    #[inline]
    pub const fn to_vector3(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Check if approximately equal.
    #[inline]
    pub fn approx_eq(&self, other: &Euler, epsilon: f32) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
            && self.order == other.order
    }
}
