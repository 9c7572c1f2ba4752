use crate::error::{GeometryError, Result};
use crate::math::{Matrix4, Point3, Vector3, Vector6, TOLERANCE};

use super::Frame;

/// A cylinder located by its axis.
///
/// The frame sits at the first axis point with its normal (local Z) along
/// the axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    radius: f64,
    frame: Frame,
}

impl Cylinder {
    /// Creates a cylinder whose axis runs from `c1` to `c2`.
    ///
    /// # Errors
    ///
    /// Returns an error if `c1 == c2` or the radius is not a positive,
    /// finite number.
    pub fn from_axis(c1: &Point3, c2: &Point3, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius < TOLERANCE {
            return Err(
                GeometryError::Degenerate("cylinder radius must be positive".into()).into(),
            );
        }
        let frame = Frame::from_normal(*c1, &(c2 - c1))?;
        Ok(Self { radius, frame })
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Unit axis direction.
    #[must_use]
    pub fn axis(&self) -> &Vector3 {
        self.frame.normal()
    }

    #[must_use]
    pub fn transform(&self) -> Matrix4 {
        self.frame.transform()
    }

    /// `[X, Y, Z, A, B, C]` of the axis frame, angles in degrees.
    #[must_use]
    pub fn xyzabc(&self) -> Vector6 {
        self.frame.xyzabc()
    }

    /// Distance from `p` to the cylinder surface, negative inside.
    #[must_use]
    pub fn signed_distance(&self, p: &Point3) -> f64 {
        let d = p - self.frame.origin();
        let along = d.dot(self.axis());
        (d - self.axis() * along).norm() - self.radius
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::FramefitError;
    use crate::frame::test_util::assert_orthonormal;

    #[test]
    fn vertical_axis() {
        let cyl = Cylinder::from_axis(&Point3::new(1.0, 2.0, 0.0), &Point3::new(1.0, 2.0, 10.0), 13.0)
            .unwrap();
        assert_orthonormal(cyl.frame());
        assert_relative_eq!(*cyl.axis(), Vector3::z(), epsilon = 1e-12);
        assert_relative_eq!(cyl.radius(), 13.0);

        let pose = cyl.xyzabc();
        assert_relative_eq!(pose[0], 1.0);
        assert_relative_eq!(pose[1], 2.0);
        assert_relative_eq!(pose[2], 0.0);
    }

    #[test]
    fn tilted_axis_surface_distance() {
        let cyl = Cylinder::from_axis(&Point3::origin(), &Point3::new(1.0, 1.0, 1.0), 2.0).unwrap();
        assert_orthonormal(cyl.frame());
        let on_surface = Point3::origin() + cyl.frame().tangent() * 2.0 + cyl.axis() * 5.0;
        assert_relative_eq!(cyl.signed_distance(&on_surface), 0.0, epsilon = 1e-12);
        assert_relative_eq!(cyl.signed_distance(&Point3::new(3.0, 3.0, 3.0)), -2.0, epsilon = 1e-12);
    }

    #[test]
    fn transform_maps_local_z_to_axis() {
        let c1 = Point3::new(0.0, 120.0, 0.15);
        let c2 = Point3::new(-0.06, 180.0, 0.42);
        let cyl = Cylinder::from_axis(&c1, &c2, 12.99).unwrap();
        let tip = cyl.transform().transform_point(&Point3::new(0.0, 0.0, (c2 - c1).norm()));
        assert_relative_eq!(tip, c2, epsilon = 1e-9);
    }

    #[test]
    fn coincident_axis_points_rejected() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let r = Cylinder::from_axis(&p, &p, 1.0);
        assert!(matches!(r, Err(FramefitError::Geometry(GeometryError::ZeroVector))));
    }

    #[test]
    fn invalid_radius_rejected() {
        let (a, b) = (Point3::origin(), Point3::new(0.0, 0.0, 1.0));
        assert!(Cylinder::from_axis(&a, &b, 0.0).is_err());
        assert!(Cylinder::from_axis(&a, &b, -1.0).is_err());
        assert!(Cylinder::from_axis(&a, &b, f64::NAN).is_err());
    }
}
