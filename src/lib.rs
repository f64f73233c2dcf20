//! Minimal 2D rigid-body physics: semi-implicit Euler integration, all-pairs
//! narrow-phase collision detection for circles and axis-aligned rectangles, and
//! impulse-based collision response.

pub mod collision;
pub mod common;
pub mod integration;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod simulation;
pub mod world;

// Re-export key types for easier use
pub use collision::{check_collision, resolve_collision, CollisionManifold};
pub use common::{PhysicsError, SimulationConfig};
pub use math::vec2::Vec2;
pub use objects::rigid_body::RigidBody;
pub use shapes::{Circle, Polygon, Rectangle, Shape, ShapeKind};
pub use simulation::Simulation;
pub use world::{Boundary, PhysicsWorld, Wall};
