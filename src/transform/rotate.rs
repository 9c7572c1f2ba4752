use crate::error::{FramefitError, GeometryError};
use crate::math::{Matrix4, SNAP_EPSILON};

/// A world coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl TryFrom<char> for Axis {
    type Error = FramefitError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'x' => Ok(Self::X),
            'y' => Ok(Self::Y),
            'z' => Ok(Self::Z),
            _ => Err(GeometryError::UnknownAxis(c).into()),
        }
    }
}

/// Builds a right-handed rotation about a world axis.
///
/// * `angle_deg` - Rotation angle in degrees.
///
/// Entries within [`SNAP_EPSILON`] of zero are set to exactly zero, so
/// quarter turns produce exact axis permutations.
#[must_use]
pub fn rotation(angle_deg: f64, axis: Axis) -> Matrix4 {
    let (s, c) = angle_deg.to_radians().sin_cos();
    let mut m = Matrix4::identity();
    match axis {
        Axis::X => {
            m[(1, 1)] = c;
            m[(1, 2)] = -s;
            m[(2, 1)] = s;
            m[(2, 2)] = c;
        }
        Axis::Y => {
            m[(0, 0)] = c;
            m[(0, 2)] = s;
            m[(2, 0)] = -s;
            m[(2, 2)] = c;
        }
        Axis::Z => {
            m[(0, 0)] = c;
            m[(0, 1)] = -s;
            m[(1, 0)] = s;
            m[(1, 1)] = c;
        }
    }
    snap_small_entries(&m)
}

/// Replaces every entry with `|v| <= SNAP_EPSILON` by `0.0`.
#[must_use]
pub fn snap_small_entries(m: &Matrix4) -> Matrix4 {
    m.map(|v| if v.abs() <= SNAP_EPSILON { 0.0 } else { v })
}
