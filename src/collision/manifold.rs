use crate::math::vec2::Vec2;

/// Stores information about a collision between two bodies.
///
/// Built fresh for every colliding pair during a step and thrown away once the
/// pair has been resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionManifold {
    /// Index of the first body involved in the collision.
    pub body_a_idx: usize,
    /// Index of the second body involved in the collision.
    pub body_b_idx: usize,
    /// The collision normal, pointing from body A towards body B.
    pub normal: Vec2,
    /// Minimum distance along `normal` that separates the shapes. Never negative.
    pub penetration: f64,
}

impl CollisionManifold {
    /// The same contact seen from the other body: indices swapped, normal flipped.
    pub fn flipped(self) -> Self {
        CollisionManifold {
            body_a_idx: self.body_b_idx,
            body_b_idx: self.body_a_idx,
            normal: -self.normal,
            penetration: self.penetration,
        }
    }
}
