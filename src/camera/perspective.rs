//! Perspective camera.

use crate::controls::{OrbitError, OrbitState};
use crate::core::CameraConfig;
use crate::math::{Degrees, Euler, Vector3};
use crate::scene::Transform;

/// A perspective projection camera.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    /// Vertical field of view.
    pub fov: Degrees,
    /// Aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
    /// Position and orientation.
    pub transform: Transform,
    /// Up vector used when aiming.
    pub up: Vector3,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default(), 16.0 / 9.0)
    }
}

impl PerspectiveCamera {
    /// Create a new perspective camera at the origin.
    pub fn new(fov: Degrees, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov,
            aspect,
            near,
            far,
            transform: Transform::new(),
            up: Vector3::UP,
        }
    }

    /// Create from configuration, facing `config.look_at`.
    pub fn from_config(config: &CameraConfig, aspect: f32) -> Self {
        let mut camera = Self::new(config.fov, aspect, config.near, config.far);
        camera.transform.position = config.position;
        camera.look_at(config.look_at);
        camera
    }

    /// Camera position.
    #[inline]
    pub fn position(&self) -> Vector3 {
        self.transform.position
    }

    /// Camera rotation.
    #[inline]
    pub fn rotation(&self) -> Euler {
        self.transform.rotation
    }

    /// Set the camera position.
    pub fn set_position(&mut self, position: impl Into<Vector3>) {
        self.transform.set_position(position);
    }

    /// Set the camera rotation.
    pub fn set_rotation(&mut self, rotation: Euler) {
        self.transform.set_rotation(rotation);
    }

    /// Aim at a point from the current position.
    pub fn look_at(&mut self, target: impl Into<Vector3>) {
        self.transform.look_at(target.into(), self.up);
    }

    /// Set the aspect ratio.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Set near and far planes.
    pub fn set_clip_planes(&mut self, near: f32, far: f32) {
        self.near = near;
        self.far = far;
    }

    /// Forward direction.
    pub fn forward(&self) -> Vector3 {
        self.transform.forward()
    }

    /// Orbit one step around `orbit.target`.
    pub fn orbit(&mut self, orbit: &OrbitState, angle: Degrees) -> Result<(), OrbitError> {
        orbit.step(&mut self.transform, angle)
    }

    /// World-to-camera matrix.
    pub fn view_matrix(&self) -> glam::Mat4 {
        self.transform.to_matrix().inverse()
    }

    /// Projection matrix.
    pub fn projection_matrix(&self) -> glam::Mat4 {
        glam::Mat4::perspective_rh(self.fov.to_radians().value(), self.aspect, self.near, self.far)
    }
}
