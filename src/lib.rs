//! Rigid reference frames from measured 3D points.
//!
//! Plane and quadratic fits feed Frenet-style frame builders whose poses are
//! reported as 4x4 homogeneous matrices and `[X, Y, Z, A, B, C]` vectors.

pub mod blade;
pub mod error;
pub mod fit;
pub mod frame;
pub mod math;
pub mod transform;

pub use error::{FramefitError, Result};
