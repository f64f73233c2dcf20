//! Pieces shared across the engine: the error type and run configuration.

pub mod config;
pub mod error;

pub use config::{BodyConfig, ShapeConfig, SimulationConfig};
pub use error::PhysicsError;
