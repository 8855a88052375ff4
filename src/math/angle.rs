//! Unit-tagged angles.
//!
//! `Radians` and `Degrees` are distinct types so a degree value can never be
//! passed where radians are expected. Both share the same reduction rule:
//! the value is taken modulo one full turn with its sign preserved, except
//! that an exact full turn (`±2π` / `±360°`) is kept as is so callers can
//! tell "one revolution" apart from "no rotation".

use super::consts::{DEG2RAD, PI, RAD2DEG, TWO_PI};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// Reduce `value` modulo `full_turn`, passing an exact full turn through.
#[inline]
fn wrap(value: f32, full_turn: f32) -> f32 {
    if value.abs() == full_turn {
        value
    } else {
        value % full_turn
    }
}

/// An angle in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f32);

/// An angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f32);

impl Radians {
    /// Zero angle.
    pub const ZERO: Self = Self(0.0);
    /// Half a turn (π).
    pub const HALF_TURN: Self = Self(PI);
    /// One full turn (2π).
    pub const FULL_TURN: Self = Self(TWO_PI);

    /// Raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Reduce into `(-2π, 2π)` keeping the sign; `±2π` is returned unchanged.
    #[inline]
    pub fn normalized(self) -> Self {
        Self(wrap(self.0, TWO_PI))
    }

    /// Normalize, then convert to degrees.
    #[inline]
    pub fn to_degrees(self) -> Degrees {
        Degrees(self.normalized().0 * RAD2DEG)
    }

    /// Adjust `end` so that moving from `self` to it never covers more than
    /// half a turn. See [`minimal_end`].
    #[inline]
    pub fn minimal_path_to(self, end: Radians) -> Radians {
        minimal_end(self, end)
    }

    /// Sine of the angle.
    #[inline]
    pub fn sin(self) -> f32 {
        self.0.sin()
    }

    /// Cosine of the angle.
    #[inline]
    pub fn cos(self) -> f32 {
        self.0.cos()
    }
}

impl Degrees {
    /// Zero angle.
    pub const ZERO: Self = Self(0.0);
    /// One full turn (360°).
    pub const FULL_TURN: Self = Self(360.0);

    /// Raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Reduce into `(-360, 360)` keeping the sign; `±360` is returned unchanged.
    #[inline]
    pub fn normalized(self) -> Self {
        Self(wrap(self.0, 360.0))
    }

    /// Normalize, then convert to radians.
    #[inline]
    pub fn to_radians(self) -> Radians {
        Radians(self.normalized().0 * DEG2RAD)
    }
}

impl From<Degrees> for Radians {
    #[inline]
    fn from(d: Degrees) -> Self {
        d.to_radians()
    }
}

impl From<Radians> for Degrees {
    #[inline]
    fn from(r: Radians) -> Self {
        r.to_degrees()
    }
}

macro_rules! impl_angle_ops {
    ($t:ty) => {
        impl Add for $t {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $t {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl Neg for $t {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }
    };
}

impl_angle_ops!(Radians);
impl_angle_ops!(Degrees);

impl fmt::Display for Radians {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}rad", self.0)
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// Pick the end angle congruent to `end` that lies within half a turn of
/// `start`.
///
/// A difference of exactly π is left alone. Otherwise whole turns are added
/// towards `start`; for angles within a half turn of zero this is "add a
/// turn when `start > 0`, subtract one otherwise".
pub fn minimal_end(start: Radians, end: Radians) -> Radians {
    let diff = start.0 - end.0;
    if diff.abs() <= PI {
        return end;
    }
    let turns = (diff / TWO_PI).round();
    Radians(end.0 + turns * TWO_PI)
}
