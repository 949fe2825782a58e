//! Error types for the engine's construction and handle APIs.

use crate::world::BodyHandle;
use thiserror::Error;

/// Errors reported for API misuse. Geometric degeneracies met during a tick are
/// never errors; they are handled by substitution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Mass must be zero (immovable) or positive, and finite.
    #[error("mass must be finite and non-negative, got {0}")]
    InvalidMass(f64),
    /// A radius or width was negative or not finite.
    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidDimension { name: &'static str, value: f64 },
    /// Two defining points coincide, so no direction can be derived.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(&'static str),
    /// The handle does not refer to a live body.
    #[error("no live body for handle {0:?}")]
    UnknownBody(BodyHandle),
}

pub type EngineResult<T> = Result<T, EngineError>;

pub(crate) fn check_mass(mass: f64) -> EngineResult<f64> {
    if mass.is_finite() && mass >= 0.0 {
        Ok(mass)
    } else {
        Err(EngineError::InvalidMass(mass))
    }
}

pub(crate) fn check_dimension(name: &'static str, value: f64) -> EngineResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(EngineError::InvalidDimension { name, value })
    }
}
