use thiserror::Error;

/// Errors raised by the checked surface of the force models.
///
/// The [`ForceModel`](crate::force_model::ForceModel) trait methods never return these:
/// they are plain mathematical mappings and let IEEE-754 arithmetic report domain
/// violations as NaN or infinity. The `try_*` constructors and accessors validate their
/// inputs up front and fail with one of the variants below instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Semi-major axis must be strictly positive and finite, got {0}")]
    NonPositiveSemiMajorAxis(f64),

    #[error("Eccentricity must lie in [0, 1) for a bound orbit, got {0}")]
    UnboundEccentricity(f64),

    #[error("True anomaly must be finite, got {0}")]
    NonFiniteAnomaly(f64),

    #[error("Acceleration is undefined at the central body (r = 0) or for a non-finite position")]
    SingularPosition,

    #[error("Gravitational parameter must be strictly positive and finite, got {0}")]
    NonPositiveGravitationalParameter(f64),

    #[error("Invalid force model descriptor: {0}")]
    InvalidModelSpec(String),
}
