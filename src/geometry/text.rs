//! Extruded text.

use super::{check_dimension, ShapeError};
use serde::{Deserialize, Serialize};

/// Font used when none is given.
pub const DEFAULT_FONT: &str = "helvetiker";

/// A line of 3D text. The font is resolved by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// The string to render.
    pub content: String,
    /// Glyph height.
    pub size: f32,
    /// Extrusion depth.
    pub depth: f32,
    /// Font name.
    pub font: String,
}

impl Text {
    /// Text with default size, depth and font.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            size: 1.0,
            depth: 0.2,
            font: DEFAULT_FONT.to_string(),
        }
    }

    /// Set the glyph height.
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Set the extrusion depth.
    pub fn depth(mut self, depth: f32) -> Self {
        self.depth = depth;
        self
    }

    /// Set the font.
    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }

    pub(crate) fn validate(&self) -> Result<(), ShapeError> {
        check_dimension("text", "size", self.size)?;
        // Flat text is allowed.
        if self.depth < 0.0 || !self.depth.is_finite() {
            return Err(ShapeError::InvalidDimension {
                shape: "text",
                field: "depth",
                value: self.depth,
            });
        }
        Ok(())
    }
}
