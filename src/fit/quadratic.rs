use crate::error::{FitError, Result};
use crate::math::{solve3, Matrix3, Vector3, TOLERANCE};

/// A quadratic `y = a*x^2 + b*x + c`.
///
/// Stored about a shift `s` as `y = a*(x - s)^2 + b_s*(x - s) + c_s`, so
/// values and slopes near the fitted samples stay accurate at large `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadratic {
    a: f64,
    b: f64,
    c: f64,
    shift: f64,
}

impl Quadratic {
    /// Creates a quadratic from its global coefficients.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self {
            a,
            b,
            c,
            shift: 0.0,
        }
    }

    /// Global coefficients `(a, b, c)` of `y = a*x^2 + b*x + c`.
    #[must_use]
    pub fn coefficients(&self) -> (f64, f64, f64) {
        let s = self.shift;
        (
            self.a,
            self.b - 2.0 * self.a * s,
            (self.a * s - self.b) * s + self.c,
        )
    }

    /// Value at `x`.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        let t = x - self.shift;
        (self.a * t + self.b) * t + self.c
    }

    /// First derivative at `x`.
    #[must_use]
    pub fn slope(&self, x: f64) -> f64 {
        2.0 * self.a * (x - self.shift) + self.b
    }
}

/// Exact quadratic through three samples `(x[i], y[i])`.
///
/// The system is solved in the local variable `(x - x[1]) / spread`, so
/// only the relative spacing of the abscissae affects conditioning.
///
/// # Errors
///
/// Returns [`FitError::DuplicateAbscissa`] if two abscissae coincide, or
/// [`FitError::Singular`] if they are too close to solve reliably.
pub fn fit_quadratic(x: [f64; 3], y: [f64; 3]) -> Result<Quadratic> {
    for (i, j) in [(0, 1), (0, 2), (1, 2)] {
        if (x[i] - x[j]).abs() < TOLERANCE {
            return Err(FitError::DuplicateAbscissa {
                first: x[i],
                second: x[j],
            }
            .into());
        }
    }

    let shift = x[1];
    let spread = (x[0] - shift).abs().max((x[2] - shift).abs());
    let t = x.map(|xi| (xi - shift) / spread);

    #[rustfmt::skip]
    let m = Matrix3::new(
        t[0] * t[0], t[0], 1.0,
        t[1] * t[1], t[1], 1.0,
        t[2] * t[2], t[2], 1.0,
    );
    let coef = solve3(&m, &Vector3::from(y))?;
    Ok(Quadratic {
        a: coef.x / (spread * spread),
        b: coef.y / spread,
        c: coef.z,
        shift,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::FramefitError;

    fn generate(q: &Quadratic, x: [f64; 3]) -> [f64; 3] {
        x.map(|xi| q.eval(xi))
    }

    #[test]
    fn recovers_known_quadratic() {
        let q = Quadratic::new(0.75, -2.0, 4.5);
        let x = [-1.0, 0.5, 3.0];
        let (a, b, c) = fit_quadratic(x, generate(&q, x)).unwrap().coefficients();
        assert_relative_eq!(a, 0.75, epsilon = 1e-12);
        assert_relative_eq!(b, -2.0, epsilon = 1e-12);
        assert_relative_eq!(c, 4.5, epsilon = 1e-12);
    }

    #[test]
    fn unordered_abscissae() {
        let q = Quadratic::new(-0.01, 0.3, -16.0);
        let x = [1010.0, 996.0, 1024.0];
        let fit = fit_quadratic(x, generate(&q, x)).unwrap();
        for xi in [990.0, 1000.0, 1030.0] {
            assert_relative_eq!(fit.eval(xi), q.eval(xi), epsilon = 1e-6);
        }
    }

    #[test]
    fn millimetre_spacing_far_from_origin() {
        let x = [10000.0, 10001.0, 10002.0];
        let y = x.map(|xi| 0.001 * xi * xi);
        let fit = fit_quadratic(x, y).unwrap();

        let (a, b, c) = fit.coefficients();
        assert_relative_eq!(a, 0.001, epsilon = 1e-8);
        assert!(b.abs() < 1e-4);
        assert!(c.abs() < 1.0);
        assert_relative_eq!(fit.slope(10001.0), 20.002, epsilon = 1e-9);
        assert_relative_eq!(fit.eval(10002.0), y[2], epsilon = 1e-8);
    }

    #[test]
    fn slope_at_middle_sample_is_local_linear_term() {
        let fit = fit_quadratic([3000.0, 3001.0, 3002.0], [4.0, 5.0, 7.0]).unwrap();
        assert_relative_eq!(fit.slope(3001.0), 1.5, epsilon = 1e-12);
        assert_relative_eq!(fit.eval(3001.0), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn collinear_samples_give_zero_curvature() {
        let fit = fit_quadratic([0.0, 1.0, 2.0], [1.0, 3.0, 5.0]).unwrap();
        assert_relative_eq!(fit.coefficients().0, 0.0, epsilon = 1e-12);
        assert_relative_eq!(fit.slope(7.0), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn new_has_no_shift() {
        let q = Quadratic::new(1.0, -3.0, 2.0);
        assert_eq!(q.coefficients(), (1.0, -3.0, 2.0));
        assert_relative_eq!(q.eval(2.0), 0.0);
        assert_relative_eq!(q.slope(1.5), 0.0);
    }

    #[test]
    fn duplicate_abscissa_rejected() {
        let r = fit_quadratic([1.0, 2.0, 1.0], [0.0, 1.0, 2.0]);
        assert!(matches!(
            r,
            Err(FramefitError::Fit(FitError::DuplicateAbscissa { .. }))
        ));
    }
}
