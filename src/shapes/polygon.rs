use crate::common::PhysicsError;
use crate::math::vec2::Vec2;

/// A polygon defined by its vertices relative to the owning body's position.
///
/// Polygons are carried through the world like any other shape but the narrow
/// phase has no polygon routines, so they never report a collision.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Vec2>,
}

impl Polygon {
    /// Creates a new polygon from a vector of vertices.
    ///
    /// Fails if fewer than 3 vertices are provided.
    pub fn new(vertices: Vec<Vec2>) -> Result<Self, PhysicsError> {
        if vertices.len() < 3 {
            return Err(PhysicsError::TooFewVertices(vertices.len()));
        }
        Ok(Polygon { vertices })
    }
}
