//! # Scene Module
//!
//! The [`Stage`] holds a flat list of nodes plus the camera, and exposes
//! the declarative operations (`cube`, `pos`, `rotate_to`, ...) on top of
//! them.

mod node;
mod stage;
mod transform;

pub use node::{Node, NodeKind};
pub use stage::{Stage, StageBuilder, StageError};
pub use transform::Transform;
