pub mod euler;
mod solve;

pub use euler::{
    euler_from_rotation, rotation_from_euler, yaw_pitch_roll, AngleUnit, EulerAngles,
    EulerSolution, GimbalLock,
};
pub use solve::{reciprocal_condition, solve3};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Position plus Euler angles, `[X, Y, Z, A, B, C]`.
pub type Vector6 = nalgebra::Vector6<f64>;

/// 3x3 matrix, used for rotation blocks and normal equations.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// 4x4 homogeneous transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Rotation matrix entries with an absolute value at or below this are
/// snapped to exactly zero.
pub const SNAP_EPSILON: f64 = 1e-4;

/// A fitted normal with `|n.x|` below this uses world X as the helper axis
/// when deriving a tangent; otherwise world Y.
pub const HELPER_AXIS_THRESHOLD: f64 = 0.9;

/// Smallest accepted ratio of smallest to largest singular value for a
/// 3x3 system.
pub const MIN_RECIPROCAL_CONDITION: f64 = 1e-14;

/// `|R20|` within this distance of 1 is treated as gimbal lock.
pub const GIMBAL_LOCK_EPSILON: f64 = 1e-9;

/// Returns `v` scaled to unit length.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`](crate::error::GeometryError::ZeroVector)
/// if `v` is shorter than [`TOLERANCE`].
pub fn unit(v: &Vector3) -> crate::Result<Vector3> {
    let len = v.norm();
    if len < TOLERANCE || !len.is_finite() {
        return Err(crate::error::GeometryError::ZeroVector.into());
    }
    Ok(v / len)
}

/// Picks the world axis used to seed a tangent perpendicular to `normal`.
#[must_use]
pub fn helper_axis(normal: &Vector3) -> Vector3 {
    if normal.x.abs() < HELPER_AXIS_THRESHOLD {
        Vector3::x()
    } else {
        Vector3::y()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn unit_normalizes() {
        let v = unit(&Vector3::new(3.0, 0.0, 4.0)).unwrap();
        assert!((v - Vector3::new(0.6, 0.0, 0.8)).norm() < TOLERANCE);
    }

    #[test]
    fn unit_rejects_zero() {
        assert!(unit(&Vector3::zeros()).is_err());
        assert!(unit(&Vector3::new(1e-12, 0.0, 0.0)).is_err());
    }

    #[test]
    fn unit_rejects_nan() {
        assert!(unit(&Vector3::new(f64::NAN, 0.0, 0.0)).is_err());
    }

    #[test]
    fn helper_axis_switches_near_x() {
        assert_eq!(helper_axis(&Vector3::z()), Vector3::x());
        assert_eq!(helper_axis(&Vector3::new(-0.95, 0.0, 0.31)), Vector3::y());
        assert_eq!(helper_axis(&Vector3::new(0.89, 0.0, 0.45)), Vector3::x());
    }
}
