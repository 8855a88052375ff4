//! Camera and node controls.

mod orbit;

pub use orbit::{OrbitAxis, OrbitError, OrbitOptions, OrbitState};
