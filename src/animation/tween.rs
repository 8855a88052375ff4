//! Tweens and continuous spins.

use super::Easing;
use crate::controls::OrbitState;
use crate::core::NodeId;
use crate::math::{Euler, Vector3};

/// What a tween drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TweenTarget {
    /// The stage camera.
    Camera,
    /// A stage node.
    Node(NodeId),
}

/// The property being animated and its end points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Channel {
    /// Move between two points.
    Position {
        /// Start point.
        from: Vector3,
        /// End point.
        to: Vector3,
    },
    /// Turn between two rotations.
    Rotation {
        /// Start rotation.
        from: Euler,
        /// End rotation, already adjusted for the shortest per-axis path.
        to: Euler,
    },
}

/// A value produced by a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    /// Current position.
    Position(Vector3),
    /// Current rotation.
    Rotation(Euler),
}

/// A transition of one property over a fixed duration.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    target: TweenTarget,
    channel: Channel,
    duration: f32,
    elapsed: f32,
    easing: Easing,
}

impl Tween {
    /// Move from `from` to `to` over `duration` seconds.
    pub fn position(target: TweenTarget, from: Vector3, to: Vector3, duration: f32) -> Self {
        Self::new(target, Channel::Position { from, to }, duration)
    }

    /// Turn from `from` to `to` over `duration` seconds, taking the short
    /// way around on every axis.
    pub fn rotation(target: TweenTarget, from: Euler, to: Euler, duration: f32) -> Self {
        let to = from.minimal_target(&to);
        Self::new(target, Channel::Rotation { from, to }, duration)
    }

    fn new(target: TweenTarget, channel: Channel, duration: f32) -> Self {
        Self {
            target,
            channel,
            duration: if duration.is_finite() { duration.max(0.0) } else { 0.0 },
            elapsed: 0.0,
            easing: Easing::Linear,
        }
    }

    /// Use a different easing curve.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// What this tween drives.
    #[inline]
    pub fn target(&self) -> TweenTarget {
        self.target
    }

    /// Animated property.
    #[inline]
    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    /// Linear progress in `0..=1`. Zero-length tweens report 1.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        }
    }

    /// Whether the end value has been reached.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Advance by `dt` seconds. Returns `true` once finished.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed += dt.max(0.0);
        self.is_finished()
    }

    /// Current value.
    pub fn sample(&self) -> Sample {
        let t = self.easing.apply(self.progress());
        match self.channel {
            Channel::Position { from, to } => Sample::Position(from.lerp(&to, t)),
            Channel::Rotation { from, to } => Sample::Rotation(from.lerp(&to, t)),
        }
    }

    /// Whether both tweens drive the same property of the same target.
    pub fn overlaps(&self, other: &Tween) -> bool {
        self.target == other.target
            && std::mem::discriminant(&self.channel) == std::mem::discriminant(&other.channel)
    }
}

/// Continuous orbit at a fixed angular speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    /// Orbit configuration used for every step.
    pub orbit: OrbitState,
    /// Angular speed in degrees per second.
    pub degrees_per_second: f32,
}

impl Spin {
    /// Create a spin.
    pub fn new(orbit: OrbitState, degrees_per_second: f32) -> Self {
        Self {
            orbit,
            degrees_per_second,
        }
    }
}
