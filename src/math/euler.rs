//! Conversion between rotation matrices and Z-Y-X Euler angles.
//!
//! The convention is `R = Rz(yaw) * Ry(pitch) * Rx(roll)`, with yaw, pitch
//! and roll labelled `A`, `B` and `C` in `[X, Y, Z, A, B, C]` poses.

use std::f64::consts::{FRAC_PI_2, PI};

use tracing::debug;

use super::{Matrix3, GIMBAL_LOCK_EPSILON};

/// Unit in which angles are given or reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    /// Angles in radians.
    #[default]
    Radians,
    /// Angles in degrees.
    Degrees,
}

impl AngleUnit {
    /// Converts `value`, expressed in this unit, to radians.
    #[must_use]
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            Self::Radians => value,
            Self::Degrees => value.to_radians(),
        }
    }

    /// Converts `radians` to this unit.
    #[must_use]
    pub fn from_radians(self, radians: f64) -> f64 {
        match self {
            Self::Radians => radians,
            Self::Degrees => radians.to_degrees(),
        }
    }
}

/// Yaw (`A`, about Z), pitch (`B`, about Y) and roll (`C`, about X).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerAngles {
    pub yaw: f64,
    pub pitch: f64,
    pub roll: f64,
}

impl EulerAngles {
    /// Creates a new set of angles, all in the same unit.
    #[must_use]
    pub fn new(yaw: f64, pitch: f64, roll: f64) -> Self {
        Self { yaw, pitch, roll }
    }

    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.yaw), f(self.pitch), f(self.roll))
    }
}

/// The one-parameter family of angles reproducing a matrix at pitch ±90°.
///
/// At pitch +90° only `roll - yaw` is determined; at pitch -90° only
/// `roll + yaw`. `coupled` holds that quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GimbalLock {
    pub pitch: f64,
    pub coupled: f64,
    pub unit: AngleUnit,
}

impl GimbalLock {
    /// Returns the member of the family with the given yaw.
    #[must_use]
    pub fn with_yaw(&self, yaw: f64) -> EulerAngles {
        let roll = if self.pitch > 0.0 {
            self.coupled + yaw
        } else {
            self.coupled - yaw
        };
        EulerAngles::new(yaw, self.pitch, roll)
    }
}

/// All Euler decompositions of a rotation matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EulerSolution {
    /// The generic case. The first solution has `cos(pitch) >= 0`.
    TwoSolutions(EulerAngles, EulerAngles),
    /// Pitch is ±90° and yaw/roll collapse into one degree of freedom.
    GimbalLocked(GimbalLock),
}

impl EulerSolution {
    /// The first solution, or the zero-yaw member of a locked family.
    #[must_use]
    pub fn primary(&self) -> EulerAngles {
        match self {
            Self::TwoSolutions(first, _) => *first,
            Self::GimbalLocked(lock) => lock.with_yaw(0.0),
        }
    }

    /// Returns `true` if yaw and roll are not separately determined.
    #[must_use]
    pub fn is_gimbal_locked(&self) -> bool {
        matches!(self, Self::GimbalLocked(_))
    }
}

/// Decomposes a rotation matrix into both Z-Y-X Euler solutions.
#[must_use]
pub fn euler_from_rotation(r: &Matrix3, unit: AngleUnit) -> EulerSolution {
    let sin_pitch = -r[(2, 0)];

    if 1.0 - sin_pitch.abs() <= GIMBAL_LOCK_EPSILON {
        let (pitch, coupled) = if sin_pitch > 0.0 {
            (FRAC_PI_2, r[(0, 1)].atan2(r[(0, 2)]))
        } else {
            (-FRAC_PI_2, (-r[(0, 1)]).atan2(-r[(0, 2)]))
        };
        debug!(pitch, coupled, "rotation is gimbal locked");
        return EulerSolution::GimbalLocked(GimbalLock {
            pitch: unit.from_radians(pitch),
            coupled: unit.from_radians(coupled),
            unit,
        });
    }

    let first_pitch = sin_pitch.asin();
    let mut second_pitch = PI - first_pitch;
    if second_pitch > PI {
        second_pitch -= 2.0 * PI;
    }

    let solve = |pitch: f64| {
        let cp = pitch.cos();
        EulerAngles::new(
            (r[(1, 0)] / cp).atan2(r[(0, 0)] / cp),
            pitch,
            (r[(2, 1)] / cp).atan2(r[(2, 2)] / cp),
        )
    };

    EulerSolution::TwoSolutions(
        solve(first_pitch).map(|a| unit.from_radians(a)),
        solve(second_pitch).map(|a| unit.from_radians(a)),
    )
}

/// Builds `Rz(yaw) * Ry(pitch) * Rx(roll)`.
#[must_use]
pub fn rotation_from_euler(angles: EulerAngles, unit: AngleUnit) -> Matrix3 {
    let rad = angles.map(|a| unit.to_radians(a));
    nalgebra::Rotation3::from_euler_angles(rad.roll, rad.pitch, rad.yaw).into_inner()
}

/// The fixed single-valued extraction used for `[X, Y, Z, A, B, C]` poses.
///
/// Returns angles in radians and agrees with the first solution of
/// [`euler_from_rotation`] away from gimbal lock.
#[must_use]
pub fn yaw_pitch_roll(r: &Matrix3) -> EulerAngles {
    EulerAngles::new(
        r[(1, 0)].atan2(r[(0, 0)]),
        (-r[(2, 0)]).clamp(-1.0, 1.0).asin(),
        r[(2, 1)].atan2(r[(2, 2)]),
    )
}
