//! Material descriptors and default resolution.
//!
//! Callers fill in only what they care about through [`MaterialOptions`];
//! [`MaterialOptions::resolve`] turns that into a complete [`Material`].

use crate::math::{Color, ColorParseError};
use serde::{Deserialize, Serialize};

/// Shading family the backend should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    /// Unlit flat color.
    Basic,
    /// Physically based.
    #[default]
    Standard,
    /// Blinn-Phong.
    Phong,
    /// Surface normals as color.
    Normal,
}

/// A fully resolved material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Shading family.
    pub kind: MaterialKind,
    /// Base color.
    pub color: Color,
    /// Opacity in `0..=1`.
    pub opacity: f32,
    /// Whether blending is needed (opacity below 1).
    pub transparent: bool,
    /// Draw edges only.
    pub wireframe: bool,
    /// Render back faces too.
    pub double_sided: bool,
    /// Emissive color.
    pub emissive: Color,
}

impl Default for Material {
    fn default() -> Self {
        MaterialOptions::default().resolve()
    }
}

/// Partial material description. Unset fields take the defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialOptions {
    /// Shading family (default `Standard`).
    pub kind: Option<MaterialKind>,
    /// Base color (default white).
    pub color: Option<Color>,
    /// Opacity (default 1).
    pub opacity: Option<f32>,
    /// Wireframe (default off).
    pub wireframe: Option<bool>,
    /// Double-sided (default off).
    pub double_sided: Option<bool>,
    /// Emissive color (default black).
    pub emissive: Option<Color>,
}

impl MaterialOptions {
    /// Empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with only a color set.
    pub fn color(color: impl Into<Color>) -> Self {
        Self::new().with_color(color)
    }

    /// Set the shading family.
    pub fn kind(mut self, kind: MaterialKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set the base color.
    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the base color from a hex string such as `"#ff8800"`.
    pub fn with_hex(self, hex: &str) -> Result<Self, ColorParseError> {
        Ok(self.with_color(Color::parse_hex(hex)?))
    }

    /// Set the opacity.
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Enable or disable wireframe.
    pub fn wireframe(mut self, wireframe: bool) -> Self {
        self.wireframe = Some(wireframe);
        self
    }

    /// Enable or disable double-sided rendering.
    pub fn double_sided(mut self, double_sided: bool) -> Self {
        self.double_sided = Some(double_sided);
        self
    }

    /// Set the emissive color.
    pub fn emissive(mut self, emissive: impl Into<Color>) -> Self {
        self.emissive = Some(emissive.into());
        self
    }

    /// Fill in defaults.
    pub fn resolve(&self) -> Material {
        let opacity = match self.opacity {
            Some(o) if !o.is_nan() => o.clamp(0.0, 1.0),
            _ => 1.0,
        };
        Material {
            kind: self.kind.unwrap_or_default(),
            color: self.color.unwrap_or(Color::WHITE),
            opacity,
            transparent: opacity < 1.0,
            wireframe: self.wireframe.unwrap_or(false),
            double_sided: self.double_sided.unwrap_or(false),
            emissive: self.emissive.unwrap_or(Color::BLACK),
        }
    }
}

impl From<Color> for MaterialOptions {
    fn from(color: Color) -> Self {
        Self::color(color)
    }
}
