//! Sphere.

use super::{check_dimension, ShapeError};
use serde::{Deserialize, Serialize};

/// UV sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    /// Radius.
    pub radius: f32,
    /// Width segments (longitude), at least 3.
    pub width_segments: u32,
    /// Height segments (latitude), at least 2.
    pub height_segments: u32,
}

impl Default for Sphere {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Sphere {
    /// Create with the default 32x16 segments.
    pub fn new(radius: f32) -> Self {
        Self::with_segments(radius, 32, 16)
    }

    /// Create with explicit segments.
    pub fn with_segments(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        Self {
            radius,
            width_segments: width_segments.max(3),
            height_segments: height_segments.max(2),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ShapeError> {
        check_dimension("sphere", "radius", self.radius)
    }
}
