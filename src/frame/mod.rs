mod belt;
mod cylinder;
mod frenet;

pub use belt::{build_belt_frame, build_belt_frame_from_points};
pub use cylinder::Cylinder;
pub use frenet::{frame_from_circular_arc, frame_from_polynomial};

use tracing::trace;

use crate::error::Result;
use crate::math::{
    euler_from_rotation, helper_axis, unit, yaw_pitch_roll, AngleUnit, EulerSolution, Matrix3,
    Matrix4, Point3, Vector3, Vector6,
};

/// An orthonormal, right-handed triad placed at an origin.
///
/// As a pose the columns are `[tangent, binormal, normal, origin]`, so the
/// normal is the local Z axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    tangent: Vector3,
    binormal: Vector3,
    normal: Vector3,
    origin: Point3,
}

impl Frame {
    /// Creates a frame from an already orthonormal triad.
    #[must_use]
    pub fn new(tangent: Vector3, binormal: Vector3, normal: Vector3, origin: Point3) -> Self {
        Self {
            tangent,
            binormal,
            normal,
            origin,
        }
    }

    /// Builds a frame whose normal is `normal`, with the tangent taken from
    /// a world helper axis projected into the normal's plane and negated.
    ///
    /// # Errors
    ///
    /// Returns an error if `normal` is zero-length.
    pub fn from_normal(origin: Point3, normal: &Vector3) -> Result<Self> {
        let normal = unit(normal)?;
        let helper = helper_axis(&normal);
        trace!(?helper, "helper axis");

        let tangent = -unit(&(helper - normal * helper.dot(&normal)))?;
        let binormal = unit(&normal.cross(&tangent))?;
        // Re-derive so the triad stays orthonormal after rounding.
        let tangent = binormal.cross(&normal);

        Ok(Self::new(tangent, binormal, normal, origin))
    }

    #[must_use]
    pub fn tangent(&self) -> &Vector3 {
        &self.tangent
    }

    #[must_use]
    pub fn binormal(&self) -> &Vector3 {
        &self.binormal
    }

    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Rotation block with columns `[tangent, binormal, normal]`.
    #[must_use]
    pub fn rotation(&self) -> Matrix3 {
        Matrix3::from_columns(&[self.tangent, self.binormal, self.normal])
    }

    /// Homogeneous pose mapping frame coordinates to world coordinates.
    #[must_use]
    pub fn transform(&self) -> Matrix4 {
        let mut m = self.rotation().to_homogeneous();
        m.fixed_view_mut::<3, 1>(0, 3).copy_from(&self.origin.coords);
        m
    }

    /// `[X, Y, Z, A, B, C]` with angles in degrees, derived from
    /// [`transform`](Self::transform).
    #[must_use]
    pub fn xyzabc(&self) -> Vector6 {
        let m = self.transform();
        let angles = yaw_pitch_roll(&m.fixed_view::<3, 3>(0, 0).into_owned());
        Vector6::new(
            m[(0, 3)],
            m[(1, 3)],
            m[(2, 3)],
            angles.yaw.to_degrees(),
            angles.pitch.to_degrees(),
            angles.roll.to_degrees(),
        )
    }

    /// Both Euler decompositions of the rotation block.
    #[must_use]
    pub fn euler(&self, unit: AngleUnit) -> EulerSolution {
        euler_from_rotation(&self.rotation(), unit)
    }
}
