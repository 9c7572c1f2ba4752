use tracing::debug;

use crate::error::Result;
use crate::fit::{fit_plane, Plane};
use crate::math::Point3;

use super::Frame;

/// Locates a belt surface from measured samples.
///
/// Fits a plane through `(x[i], y[i], z[i])` and places a frame at `origin`
/// with the plane normal as local Z. The tangent is the negated projection
/// of world X (world Y when the normal is close to X) onto the plane.
///
/// # Errors
///
/// Returns an error if the plane fit fails (see
/// [`fit_plane`](crate::fit::fit_plane)).
pub fn build_belt_frame(origin: &Point3, x: &[f64], y: &[f64], z: &[f64]) -> Result<Frame> {
    let plane = fit_plane(x, y, z)?;
    belt_frame_on(origin, &plane)
}

/// Same as [`build_belt_frame`] for samples given as points.
///
/// # Errors
///
/// Returns an error if the plane fit fails.
pub fn build_belt_frame_from_points(origin: &Point3, points: &[Point3]) -> Result<Frame> {
    let plane = Plane::fit_points(points)?;
    belt_frame_on(origin, &plane)
}

fn belt_frame_on(origin: &Point3, plane: &Plane) -> Result<Frame> {
    let frame = Frame::from_normal(*origin, &plane.normal())?;
    let pose = frame.xyzabc();
    debug!(
        a = pose[3],
        b = pose[4],
        c = pose[5],
        "located belt frame"
    );
    Ok(frame)
}
