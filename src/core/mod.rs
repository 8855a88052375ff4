//! # Core Module
//!
//! Stage configuration, timing, the backend seam and the frame loop.

mod backend;
mod clock;
mod id;
mod render_loop;

pub use backend::{Backend, BackendError, HeadlessBackend, RenderInfo};
pub use clock::Clock;
pub use id::{IdAllocator, NodeId};
pub use render_loop::{FrameInfo, RenderLoop, RenderLoopError};

use crate::math::{Color, Degrees, Vector3};
use serde::{Deserialize, Serialize};

/// Initial camera placement and projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view.
    pub fov: Degrees,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
    /// Starting position.
    pub position: Vector3,
    /// Point the camera initially faces.
    pub look_at: Vector3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: Degrees(75.0),
            near: 0.1,
            far: 1000.0,
            position: Vector3::new(0.0, 0.0, 5.0),
            look_at: Vector3::ZERO,
        }
    }
}

/// Stage configuration options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
    /// Background color.
    pub clear_color: Color,
    /// Ask the backend for anti-aliasing.
    pub antialias: bool,
    /// Camera setup.
    pub camera: CameraConfig,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            clear_color: Color::BLACK,
            antialias: true,
            camera: CameraConfig::default(),
        }
    }
}

impl StageConfig {
    /// Width over height; 1 when the height is zero.
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}
