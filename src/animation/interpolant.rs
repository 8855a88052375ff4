//! Easing curves.

use crate::math::smoothstep;
use serde::{Deserialize, Serialize};

/// Maps linear progress `0..=1` onto an eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Easing {
    /// Constant speed.
    #[default]
    Linear,
    /// Hold the start value, jump to the end when done.
    Step,
    /// Ease in and out.
    SmoothStep,
}

impl Easing {
    /// Apply the curve. Input is clamped to `0..=1`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Step => {
                if t >= 1.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Easing::SmoothStep => smoothstep(0.0, 1.0, t),
        }
    }
}
