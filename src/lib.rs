//! # easy3d - Declarative 3D Staging
//!
//! easy3d is a convenience layer over a 3D engine. It hides scene graph,
//! camera and render-loop boilerplate behind a small declarative API and
//! gets angles right: rotations are kept in a canonical range and animated
//! along the shortest arc.
//!
//! ## Features
//!
//! - **Math**: Radian/degree angles, shortest-path turns, Euler rotations
//! - **Scene**: A flat stage of meshes and lights with tweened transforms
//! - **Controls**: Orbiting the camera around a target
//! - **Core**: Stage configuration, clock, backend seam and frame loop
//!
//! ## Example
//!
//! ```ignore
//! use easy3d::prelude::*;
//!
//! let mut stage = Stage::builder().size(1280, 720).build();
//! let cube = stage.cube(Cube::uniform(1.0), Color::RED)?;
//! stage.light(PointLight::default());
//! stage.rotate_to(cube, Euler::from_degrees(Degrees(0.0), Degrees(180.0), Degrees(0.0)), 2.0)?;
//! stage.spin_camera(OrbitState::default(), 30.0)?;
//!
//! let mut render_loop = RenderLoop::new(stage, HeadlessBackend::new());
//! render_loop.run_frames(60, 1.0 / 60.0)?;
//! ```

#![warn(missing_docs)]

pub mod animation;
pub mod camera;
pub mod controls;
pub mod core;
pub mod geometry;
pub mod light;
pub mod material;
pub mod math;
pub mod scene;

// Re-export commonly used types
pub mod prelude {
    //! Convenient re-exports of commonly used types.

    pub use crate::animation::*;
    pub use crate::camera::*;
    pub use crate::controls::*;
    pub use crate::core::*;
    pub use crate::geometry::*;
    pub use crate::light::*;
    pub use crate::material::*;
    pub use crate::math::*;
    pub use crate::scene::*;
}

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = "easy3d";
