//! Plane.

use super::{check_dimension, ShapeError};
use serde::{Deserialize, Serialize};

/// Flat rectangle in the XY plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// Width (X axis).
    pub width: f32,
    /// Height (Y axis).
    pub height: f32,
    /// Width segments.
    pub width_segments: u32,
    /// Height segments.
    pub height_segments: u32,
}

impl Default for Plane {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

impl Plane {
    /// Create a single-segment plane.
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_segments(width, height, 1, 1)
    }

    /// Create with segments (at least one each way).
    pub fn with_segments(
        width: f32,
        height: f32,
        width_segments: u32,
        height_segments: u32,
    ) -> Self {
        Self {
            width,
            height,
            width_segments: width_segments.max(1),
            height_segments: height_segments.max(1),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ShapeError> {
        check_dimension("plane", "width", self.width)?;
        check_dimension("plane", "height", self.height)
    }
}
