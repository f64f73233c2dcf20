//! Error type shared by every fallible constructor and the configuration layer.

use std::fmt;

/// Errors raised while building shapes, bodies, boundaries or whole simulations.
///
/// Nothing inside the per-step pipeline fails: unsupported shape pairs simply never
/// collide and degenerate geometry falls back to fixed normals.
#[derive(Debug)]
pub enum PhysicsError {
    /// Circle radius that is zero, negative or not finite.
    InvalidRadius(f64),
    /// Rectangle with a non-positive or non-finite side.
    InvalidDimensions { width: f64, height: f64 },
    /// Polygon built from fewer than three vertices.
    TooFewVertices(usize),
    /// Negative or non-finite mass. A mass of exactly zero is allowed (immovable body).
    InvalidMass(f64),
    /// Restitution outside `[0, 1]`.
    InvalidRestitution(f64),
    /// Negative or non-finite drag coefficient.
    InvalidDrag(f64),
    /// World rectangle or damping factor that cannot contain anything.
    InvalidBoundary { width: f64, height: f64, damping: f64 },
    /// Time step that is zero, negative or not finite.
    InvalidTimeStep(f64),
    /// Malformed configuration document.
    Config(serde_json::Error),
    /// Configuration file could not be read.
    Io(std::io::Error),
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidRadius(r) => {
                write!(f, "circle radius must be positive and finite, got {r}")
            }
            PhysicsError::InvalidDimensions { width, height } => write!(
                f,
                "rectangle sides must be positive and finite, got {width} x {height}"
            ),
            PhysicsError::TooFewVertices(n) => {
                write!(f, "polygon needs at least 3 vertices, got {n}")
            }
            PhysicsError::InvalidMass(m) => {
                write!(f, "mass must be zero (immovable) or positive and finite, got {m}")
            }
            PhysicsError::InvalidRestitution(e) => {
                write!(f, "restitution must lie in [0, 1], got {e}")
            }
            PhysicsError::InvalidDrag(c) => {
                write!(f, "drag coefficient must be non-negative and finite, got {c}")
            }
            PhysicsError::InvalidBoundary {
                width,
                height,
                damping,
            } => write!(
                f,
                "boundary needs a positive size and damping in [0, 1], got {width} x {height} with damping {damping}"
            ),
            PhysicsError::InvalidTimeStep(dt) => {
                write!(f, "time step must be positive and finite, got {dt}")
            }
            PhysicsError::Config(err) => write!(f, "invalid simulation config: {err}"),
            PhysicsError::Io(err) => write!(f, "could not read simulation config: {err}"),
        }
    }
}

impl std::error::Error for PhysicsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PhysicsError::Config(err) => Some(err),
            PhysicsError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for PhysicsError {
    fn from(err: serde_json::Error) -> Self {
        PhysicsError::Config(err)
    }
}

impl From<std::io::Error> for PhysicsError {
    fn from(err: std::io::Error) -> Self {
        PhysicsError::Io(err)
    }
}
