//! Cube.

use super::{check_dimension, ShapeError};
use serde::{Deserialize, Serialize};

/// Axis-aligned box centered on its origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cube {
    /// Size along X.
    pub width: f32,
    /// Size along Y.
    pub height: f32,
    /// Size along Z.
    pub depth: f32,
}

impl Default for Cube {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}

impl Cube {
    /// Create a box.
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self { width, height, depth }
    }

    /// Create a cube with equal sides.
    pub fn uniform(size: f32) -> Self {
        Self::new(size, size, size)
    }

    pub(crate) fn validate(&self) -> Result<(), ShapeError> {
        check_dimension("cube", "width", self.width)?;
        check_dimension("cube", "height", self.height)?;
        check_dimension("cube", "depth", self.depth)
    }
}
