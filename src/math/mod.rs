//! # Math Module
//!
//! Unit-tagged angles, points, rotations and colors.
//!
//! Quaternion and matrix work is delegated to `glam`; the types here only
//! carry what the declarative layer needs.

mod angle;
mod color;
mod euler;
mod vector3;

pub use angle::{minimal_end, Degrees, Radians};
pub use color::{Color, ColorParseError};
pub use euler::{Euler, EulerOrder};
pub use vector3::Vector3;

/// Common math constants.
pub mod consts {
    /// Pi constant.
    pub const PI: f32 = std::f32::consts::PI;
    /// One full turn in radians.
    pub const TWO_PI: f32 = std::f32::consts::TAU;
    /// Degrees to radians conversion factor.
    pub const DEG2RAD: f32 = PI / 180.0;
    /// Radians to degrees conversion factor.
    pub const RAD2DEG: f32 = 180.0 / PI;
}

/// Clamp a value between min and max.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Linear interpolation between two values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Smooth step interpolation.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = clamp((x - edge0) / (edge1 - edge0), 0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
