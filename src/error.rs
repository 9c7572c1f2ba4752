use thiserror::Error;

/// Top-level error type for frame fitting.
#[derive(Debug, Error)]
pub enum FramefitError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Fit(#[from] FitError),
}

/// Errors related to geometric constructions.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,

    #[error("unknown rotation axis '{0}', expected one of 'x', 'y', 'z'")]
    UnknownAxis(char),
}

/// Errors related to least-squares and exact fits.
#[derive(Debug, Error)]
pub enum FitError {
    #[error("at least {required} points required, got {provided}")]
    InsufficientPoints { required: usize, provided: usize },

    #[error("coordinate sequences differ in length (x: {x}, y: {y}, z: {z})")]
    LengthMismatch { x: usize, y: usize, z: usize },

    #[error("abscissae {first} and {second} coincide")]
    DuplicateAbscissa { first: f64, second: f64 },

    #[error("system is singular to working precision (rcond = {reciprocal_condition:e})")]
    Singular { reciprocal_condition: f64 },
}

/// Convenience type alias for results using [`FramefitError`].
pub type Result<T> = std::result::Result<T, FramefitError>;
