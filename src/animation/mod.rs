//! Time-based transitions for node and camera transforms.

mod interpolant;
mod tween;

pub use interpolant::Easing;
pub use tween::{Channel, Sample, Spin, Tween, TweenTarget};
