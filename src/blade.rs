//! Blade cross-section data as consumed by the fitters.
//!
//! Tables arrive already parsed; this module only groups them.

use crate::error::Result;
use crate::fit::Plane;
use crate::math::Point3;

/// Ordered 3D points, one per row.
pub type PointTable = nalgebra::MatrixXx3<f64>;

/// Builds a table from a slice of points.
#[must_use]
pub fn table_from_points(points: &[Point3]) -> PointTable {
    PointTable::from_fn(points.len(), |r, c| points[r][c])
}

/// One of the four tables that make up a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Convex side (`cx`).
    Convex,
    /// Concave side (`cv`).
    Concave,
    /// Leading edge (`le`).
    LeadingEdge,
    /// Trailing edge (`re`).
    TrailingEdge,
}

impl Section {
    pub const ALL: [Self; 4] = [
        Self::Convex,
        Self::Concave,
        Self::LeadingEdge,
        Self::TrailingEdge,
    ];
}

/// A blade cross-section.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub cx: PointTable,
    pub cv: PointTable,
    pub le: PointTable,
    pub re: PointTable,
}

impl Profile {
    #[must_use]
    pub fn section(&self, section: Section) -> &PointTable {
        match section {
            Section::Convex => &self.cx,
            Section::Concave => &self.cv,
            Section::LeadingEdge => &self.le,
            Section::TrailingEdge => &self.re,
        }
    }

    /// Fits a plane through one section's points.
    ///
    /// # Errors
    ///
    /// Returns an error if the section has fewer than three points or they
    /// are collinear in XY.
    pub fn section_plane(&self, section: Section) -> Result<Plane> {
        Plane::fit_table(self.section(section))
    }

    /// Number of points across all sections.
    #[must_use]
    pub fn point_count(&self) -> usize {
        Section::ALL.iter().map(|&s| self.section(s).nrows()).sum()
    }
}

/// Profiles ordered along the blade.
pub type Airfoil = Vec<Profile>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::Vector3;

    fn flat_table(z: f64, n: usize) -> PointTable {
        let points: Vec<Point3> = (0..n)
            .map(|i| {
                let t = f64::from(u32::try_from(i).unwrap());
                Point3::new(t, t * t * 0.1, z)
            })
            .collect();
        table_from_points(&points)
    }

    fn profile(z: f64) -> Profile {
        Profile {
            cx: flat_table(z, 6),
            cv: flat_table(z, 5),
            le: flat_table(z, 3),
            re: PointTable::zeros(2),
        }
    }

    #[test]
    fn table_rows_follow_points() {
        let pts = [Point3::new(1.0, 2.0, 3.0), Point3::new(4.0, 5.0, 6.0)];
        let table = table_from_points(&pts);
        assert_eq!(table.nrows(), 2);
        assert_relative_eq!(table[(1, 0)], 4.0);
        assert_relative_eq!(table[(0, 2)], 3.0);
    }

    #[test]
    fn section_plane_of_flat_profile() {
        let p = profile(7.5);
        for section in [Section::Convex, Section::Concave, Section::LeadingEdge] {
            let plane = p.section_plane(section).unwrap();
            assert_relative_eq!(plane.normal(), Vector3::z(), epsilon = 1e-9);
            assert_relative_eq!(plane.z_at(3.0, -2.0), 7.5, epsilon = 1e-9);
        }
    }

    #[test]
    fn short_section_is_rejected() {
        assert!(profile(0.0).section_plane(Section::TrailingEdge).is_err());
    }

    #[test]
    fn airfoil_counts_points() {
        let airfoil: Airfoil = vec![profile(0.0), profile(1.0)];
        assert_eq!(airfoil.len(), 2);
        assert_eq!(airfoil[1].point_count(), 16);
    }
}
