//! Primitive shape descriptors.
//!
//! These are parameter records only. Tessellation is the backend's job.

mod cube;
mod plane;
mod sphere;
mod text;

pub use cube::Cube;
pub use plane::Plane;
pub use sphere::Sphere;
pub use text::Text;

use thiserror::Error;

/// Errors from validating shape parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// A size parameter was zero, negative or not finite.
    #[error("{shape} {field} must be positive and finite, got {value}")]
    InvalidDimension {
        /// Shape kind.
        shape: &'static str,
        /// Offending parameter.
        field: &'static str,
        /// Offending value.
        value: f32,
    },
}

pub(crate) fn check_dimension(
    shape: &'static str,
    field: &'static str,
    value: f32,
) -> Result<(), ShapeError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ShapeError::InvalidDimension { shape, field, value })
    }
}

/// Any primitive the stage can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Flat rectangle.
    Plane(Plane),
    /// Box.
    Cube(Cube),
    /// UV sphere.
    Sphere(Sphere),
    /// Extruded text.
    Text(Text),
}

impl Shape {
    /// Short lowercase name of the shape kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Plane(_) => "plane",
            Shape::Cube(_) => "cube",
            Shape::Sphere(_) => "sphere",
            Shape::Text(_) => "text",
        }
    }

    /// Check every size parameter.
    pub fn validate(&self) -> Result<(), ShapeError> {
        match self {
            Shape::Plane(p) => p.validate(),
            Shape::Cube(c) => c.validate(),
            Shape::Sphere(s) => s.validate(),
            Shape::Text(t) => t.validate(),
        }
    }
}

impl From<Plane> for Shape {
    fn from(p: Plane) -> Self {
        Shape::Plane(p)
    }
}

impl From<Cube> for Shape {
    fn from(c: Cube) -> Self {
        Shape::Cube(c)
    }
}

impl From<Sphere> for Shape {
    fn from(s: Sphere) -> Self {
        Shape::Sphere(s)
    }
}

impl From<Text> for Shape {
    fn from(t: Text) -> Self {
        Shape::Text(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(Shape::from(Cube::default()).kind_name(), "cube");
        assert_eq!(Shape::from(Text::new("hi")).kind_name(), "text");
    }

    #[test]
    fn test_validate_reports_field() {
        let err = Shape::from(Sphere::new(-1.0)).validate().unwrap_err();
        assert_eq!(
            err,
            ShapeError::InvalidDimension { shape: "sphere", field: "radius", value: -1.0 }
        );
        assert!(Shape::from(Plane::new(f32::NAN, 1.0)).validate().is_err());
    }
}
