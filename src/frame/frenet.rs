use tracing::trace;

use crate::error::{GeometryError, Result};
use crate::fit::fit_quadratic;
use crate::math::{unit, Point3, Vector3, TOLERANCE};

use super::Frame;

/// Frenet frame at `p0` from a local quadratic and a second direction.
///
/// The quadratic `y = a*x^2 + b*x + c` is fitted through the XY components
/// of `u1`, `p0`, `u2` (in that order). Its slope at `p0.x` gives the
/// tangent, oriented toward +X. The normal is `tangent x (v1 - p0)` and the
/// binormal `normal x tangent`.
///
/// # Errors
///
/// Returns an error if the quadratic cannot be fitted, if `v1 == p0`, or if
/// `v1 - p0` is parallel to the tangent.
pub fn frame_from_polynomial(p0: &Point3, u1: &Point3, u2: &Point3, v1: &Point3) -> Result<Frame> {
    let quad = fit_quadratic([u1.x, p0.x, u2.x], [u1.y, p0.y, u2.y])?;

    let mut tangent = unit(&Vector3::new(1.0, quad.slope(p0.x), 0.0))?;
    if tangent.x < 0.0 {
        trace!("flipping polynomial tangent");
        tangent = -tangent;
    }

    let toward_v = unit(&(v1 - p0))?;
    let normal = tangent.cross(&toward_v);
    let normal_len = normal.norm();
    if normal_len < TOLERANCE {
        return Err(GeometryError::Degenerate(
            "second direction is parallel to the curve tangent".into(),
        )
        .into());
    }
    let normal = normal / normal_len;
    let binormal = unit(&normal.cross(&tangent))?;

    Ok(Frame::new(tangent, binormal, normal, *p0))
}

/// Frenet frame at `pt0` on a circular arc centred at `ptc`.
///
/// The normal is the radial direction `pt0 - ptc`, the tangent its
/// perpendicular in XY oriented toward +X, and the binormal
/// `normal x tangent`.
///
/// # Errors
///
/// Returns an error if `pt0 == ptc` or the radial direction is parallel
/// to Z.
pub fn frame_from_circular_arc(pt0: &Point3, ptc: &Point3) -> Result<Frame> {
    let radial = pt0 - ptc;
    let radius = radial.norm();
    if radius < TOLERANCE {
        return Err(GeometryError::Degenerate("point coincides with arc centre".into()).into());
    }
    let normal = radial / radius;

    let in_plane = Vector3::new(-normal.y, normal.x, 0.0);
    let len = in_plane.norm();
    if len < TOLERANCE {
        return Err(
            GeometryError::Degenerate("radial direction is parallel to Z".into()).into(),
        );
    }
    let mut tangent = in_plane / len;
    if tangent.x < 0.0 {
        trace!("flipping arc tangent");
        tangent = -tangent;
    }
    let binormal = normal.cross(&tangent);

    Ok(Frame::new(tangent, binormal, normal, *pt0))
}
