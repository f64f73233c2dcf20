use crate::collision::AABB;
use crate::common::PhysicsError;
use crate::math::vec2::Vec2;
use crate::shapes::Shape;

/// Restitution given to bodies that don't ask for anything else.
pub const DEFAULT_RESTITUTION: f64 = 0.8;

#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    // Geometry
    pub shape: Shape,

    // Primary state
    pub position: Vec2, // World position of the shape's centre
    pub velocity: Vec2,

    // Force accumulated during a time step, cleared by integration
    pub force: Vec2,

    // Physical properties
    pub mass: f64,
    pub inv_mass: f64, // 1.0 / mass (0.0 for immovable)
    pub restitution: f64,
    pub drag_coefficient: Option<f64>,
}

impl RigidBody {
    /// Creates a body at the origin, at rest.
    ///
    /// A positive finite mass makes a dynamic body. A mass of exactly zero makes an
    /// immovable one (`inv_mass == 0`). Anything else is rejected.
    pub fn new(mass: f64, shape: Shape) -> Result<Self, PhysicsError> {
        let inv_mass = if mass == 0.0 {
            0.0
        } else if mass.is_finite() && mass > 0.0 {
            1.0 / mass
        } else {
            return Err(PhysicsError::InvalidMass(mass));
        };

        Ok(Self {
            shape,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            force: Vec2::ZERO,
            mass,
            inv_mass,
            restitution: DEFAULT_RESTITUTION,
            drag_coefficient: None,
        })
    }

    /// Creates an immovable body placed at `position`.
    pub fn new_static(shape: Shape, position: Vec2) -> Self {
        Self {
            shape,
            position,
            velocity: Vec2::ZERO,
            force: Vec2::ZERO,
            mass: 0.0,
            inv_mass: 0.0,
            restitution: DEFAULT_RESTITUTION,
            drag_coefficient: None,
        }
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Sets the restitution, clamped to `[0, 1]`.
    pub fn with_restitution(mut self, restitution: f64) -> Self {
        self.restitution = restitution.clamp(0.0, 1.0);
        self
    }

    /// Enables linear drag. Negative coefficients are treated as zero.
    pub fn with_drag(mut self, coefficient: f64) -> Self {
        self.drag_coefficient = Some(coefficient.max(0.0));
        self
    }

    /// True for bodies with infinite mass.
    pub fn is_static(&self) -> bool {
        self.inv_mass == 0.0
    }

    /// Calculates the world-space Axis-Aligned Bounding Box (AABB) for this body.
    pub fn calculate_aabb(&self) -> AABB {
        match &self.shape {
            Shape::Circle(circle) => {
                AABB::from_center(self.position, Vec2::new(circle.radius, circle.radius))
            }
            Shape::Rectangle(rect) => AABB::from_center(
                self.position,
                Vec2::new(rect.half_width(), rect.half_height()),
            ),
            Shape::Polygon(polygon) => {
                let world_vertices: Vec<Vec2> = polygon
                    .vertices
                    .iter()
                    .map(|&v| self.position + v)
                    .collect();
                AABB::from_points(&world_vertices)
                    .unwrap_or_else(|| AABB::new(self.position, self.position))
            }
        }
    }

    /// Applies a force at the centre of mass.
    pub fn apply_force(&mut self, force: Vec2) {
        self.force += force;
    }

    /// Called at the end of every integration.
    pub fn clear_accumulators(&mut self) {
        self.force = Vec2::ZERO;
    }
}
