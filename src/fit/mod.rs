mod plane;
mod quadratic;

pub use plane::{fit_plane, Plane, MIN_PLANE_POINTS};
pub use quadratic::{fit_quadratic, Quadratic};
