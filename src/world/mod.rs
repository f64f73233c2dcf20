pub mod boundary;
pub mod physics_world;

pub use boundary::{Boundary, Wall};
pub use physics_world::PhysicsWorld;
