//! Keeps circular bodies inside a fixed world rectangle.
//!
//! This pass is run by the driver after each world step; the world itself knows
//! nothing about the screen. The rectangle spans `[0, width] x [0, height]` with
//! y growing downward, so "top" is `y = 0` and "bottom" is `y = height`.

use crate::common::PhysicsError;
use crate::objects::rigid_body::RigidBody;
use crate::shapes::Shape;

/// Fraction of speed kept when bouncing off a wall.
pub const DEFAULT_BOUNCE_DAMPING: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wall {
    Left,
    Right,
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    pub width: f64,
    pub height: f64,
    /// Wall bounce damping. Independent of body restitution.
    pub damping: f64,
}

impl Boundary {
    pub fn new(width: f64, height: f64, damping: f64) -> Result<Self, PhysicsError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !(positive(width) && positive(height) && (0.0..=1.0).contains(&damping)) {
            return Err(PhysicsError::InvalidBoundary {
                width,
                height,
                damping,
            });
        }
        Ok(Self {
            width,
            height,
            damping,
        })
    }

    /// Clamps one body into the rectangle and reflects the velocity component
    /// normal to every wall it crossed. Walls are checked left, right, top, bottom,
    /// each one regardless of the others.
    ///
    /// Only circles are contained; other shapes come back untouched.
    pub fn contain(&self, body: &mut RigidBody) -> Vec<Wall> {
        let radius = match body.shape {
            Shape::Circle(circle) => circle.radius,
            _ => return Vec::new(),
        };

        let mut hits = Vec::new();

        if body.position.x < radius {
            body.position.x = radius;
            body.velocity.x *= -self.damping;
            hits.push(Wall::Left);
        }

        if body.position.x > self.width - radius {
            body.position.x = self.width - radius;
            body.velocity.x *= -self.damping;
            hits.push(Wall::Right);
        }

        if body.position.y < radius {
            body.position.y = radius;
            body.velocity.y *= -self.damping;
            hits.push(Wall::Top);
        }

        if body.position.y > self.height - radius {
            body.position.y = self.height - radius;
            body.velocity.y *= -self.damping;
            hits.push(Wall::Bottom);
        }

        hits
    }

    /// Runs [`Boundary::contain`] over every body and returns `(index, wall)` for
    /// each bounce, in body order.
    pub fn contain_all(&self, bodies: &mut [RigidBody]) -> Vec<(usize, Wall)> {
        let mut bounces = Vec::new();
        for (idx, body) in bodies.iter_mut().enumerate() {
            for wall in self.contain(body) {
                log::debug!("body {} bounced off {:?} boundary", idx, wall);
                bounces.push((idx, wall));
            }
        }
        bounces
    }
}
