use tracing::debug;

use crate::blade::PointTable;
use crate::error::{FitError, Result};
use crate::math::{solve3, Matrix3, Point3, Vector3};

/// Minimum number of samples for a plane fit.
pub const MIN_PLANE_POINTS: usize = 3;

/// A plane fitted to scattered samples.
///
/// Held in two forms: the regression form `z = aa*x + bb*y + dd` and the
/// implicit form `a*x + b*y + c*z + d = 0` with a unit normal `(a, b, c)`
/// and `c > 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    aa: f64,
    bb: f64,
    dd: f64,
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl Plane {
    /// Creates a plane from regression coefficients `z = aa*x + bb*y + dd`.
    #[must_use]
    pub fn from_regression(aa: f64, bb: f64, dd: f64) -> Self {
        let c = (1.0 / (aa * aa + bb * bb + 1.0)).sqrt();
        Self {
            aa,
            bb,
            dd,
            a: -aa * c,
            b: -bb * c,
            c,
            d: -dd * c,
        }
    }

    /// Fits a plane through a slice of points.
    ///
    /// # Errors
    ///
    /// See [`fit_plane`].
    pub fn fit_points(points: &[Point3]) -> Result<Self> {
        let x: Vec<f64> = points.iter().map(|p| p.x).collect();
        let y: Vec<f64> = points.iter().map(|p| p.y).collect();
        let z: Vec<f64> = points.iter().map(|p| p.z).collect();
        fit_plane(&x, &y, &z)
    }

    /// Fits a plane through the rows of an `N x 3` point table.
    ///
    /// # Errors
    ///
    /// See [`fit_plane`].
    pub fn fit_table(table: &PointTable) -> Result<Self> {
        let x: Vec<f64> = table.column(0).iter().copied().collect();
        let y: Vec<f64> = table.column(1).iter().copied().collect();
        let z: Vec<f64> = table.column(2).iter().copied().collect();
        fit_plane(&x, &y, &z)
    }

    /// Regression coefficients `(aa, bb, dd)`.
    #[must_use]
    pub fn regression(&self) -> (f64, f64, f64) {
        (self.aa, self.bb, self.dd)
    }

    /// Implicit coefficients `[a, b, c, d]`.
    #[must_use]
    pub fn coefficients(&self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Unit normal `(a, b, c)`.
    #[must_use]
    pub fn normal(&self) -> Vector3 {
        Vector3::new(self.a, self.b, self.c)
    }

    /// Signed distance from `p` to the plane, positive on the normal side.
    #[must_use]
    pub fn signed_distance(&self, p: &Point3) -> f64 {
        self.a * p.x + self.b * p.y + self.c * p.z + self.d
    }

    /// Height of the plane above `(x, y)`.
    #[must_use]
    pub fn z_at(&self, x: f64, y: f64) -> f64 {
        self.aa * x + self.bb * y + self.dd
    }
}

/// Least-squares fit of `z = aa*x + bb*y + dd` through `(x[i], y[i], z[i])`.
///
/// # Errors
///
/// Returns [`FitError::LengthMismatch`] if the slices differ in length,
/// [`FitError::InsufficientPoints`] for fewer than three samples and
/// [`FitError::Singular`] if the normal equations are singular (e.g. all
/// samples project onto one line in XY).
#[allow(clippy::many_single_char_names, clippy::cast_precision_loss)]
pub fn fit_plane(x: &[f64], y: &[f64], z: &[f64]) -> Result<Plane> {
    if x.len() != y.len() || x.len() != z.len() {
        return Err(FitError::LengthMismatch {
            x: x.len(),
            y: y.len(),
            z: z.len(),
        }
        .into());
    }
    if x.len() < MIN_PLANE_POINTS {
        return Err(FitError::InsufficientPoints {
            required: MIN_PLANE_POINTS,
            provided: x.len(),
        }
        .into());
    }

    // Normal equations about the XY centroid; the offset is restored below.
    let n = x.len() as f64;
    let x_mean = x.iter().sum::<f64>() / n;
    let y_mean = y.iter().sum::<f64>() / n;

    let mut u = Matrix3::zeros();
    let mut v = Vector3::zeros();
    for ((&xi, &yi), &zi) in x.iter().zip(y).zip(z) {
        let row = Vector3::new(xi - x_mean, yi - y_mean, 1.0);
        u += row * row.transpose();
        v += row * zi;
    }

    let p = solve3(&u, &v)?;
    let (aa, bb) = (p.x, p.y);
    let dd = p.z - aa * x_mean - bb * y_mean;
    debug!(points = x.len(), aa, bb, dd, "fitted plane");
    Ok(Plane::from_regression(aa, bb, dd))
}
