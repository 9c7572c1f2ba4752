use tracing::{trace, warn};

use crate::error::{FitError, Result};

use super::{Matrix3, Vector3, MIN_RECIPROCAL_CONDITION};

/// Ratio of the smallest to the largest singular value of `m`.
///
/// Zero for the zero matrix.
#[must_use]
pub fn reciprocal_condition(m: &Matrix3) -> f64 {
    let sv = m.singular_values();
    let max = sv.max();
    if max <= 0.0 || !max.is_finite() {
        return 0.0;
    }
    sv.min() / max
}

/// Solves `m * x = b` with a column-pivoted QR factorization.
///
/// # Errors
///
/// Returns [`FitError::Singular`] if `m` is singular to working precision,
/// i.e. its reciprocal condition number is below
/// [`MIN_RECIPROCAL_CONDITION`].
pub fn solve3(m: &Matrix3, b: &Vector3) -> Result<Vector3> {
    let rcond = reciprocal_condition(m);
    trace!(rcond, "solving 3x3 system");
    if rcond < MIN_RECIPROCAL_CONDITION {
        warn!(rcond, "rejecting singular 3x3 system");
        return Err(FitError::Singular {
            reciprocal_condition: rcond,
        }
        .into());
    }

    m.col_piv_qr().solve(b).ok_or_else(|| {
        FitError::Singular {
            reciprocal_condition: rcond,
        }
        .into()
    })
}
