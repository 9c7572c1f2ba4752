use crate::math::{Matrix4, Vector3};

/// Builds a homogeneous transform that translates by `delta`.
#[must_use]
pub fn translation(delta: &Vector3) -> Matrix4 {
    Matrix4::new_translation(delta)
}
