//! Simulation and scene configuration, loadable from JSON.
//!
//! Every field has a default, so `{}` is a complete document describing the
//! stock two-ball head-on scene in a 1200x800 window.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::PhysicsError;
use crate::math::vec2::Vec2;
use crate::objects::rigid_body::{RigidBody, DEFAULT_RESTITUTION};
use crate::shapes::{Circle, Polygon, Rectangle, Shape};
use crate::world::boundary::{Boundary, DEFAULT_BOUNCE_DAMPING};
use crate::world::physics_world::{PhysicsWorld, DEFAULT_GRAVITY};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeConfig {
    Circle { radius: f64 },
    Rectangle { width: f64, height: f64 },
    Polygon { vertices: Vec<Vec2> },
}

impl ShapeConfig {
    pub fn build(&self) -> Result<Shape, PhysicsError> {
        Ok(match self {
            ShapeConfig::Circle { radius } => Shape::Circle(Circle::new(*radius)?),
            ShapeConfig::Rectangle { width, height } => {
                Shape::Rectangle(Rectangle::new(*width, *height)?)
            }
            ShapeConfig::Polygon { vertices } => Shape::Polygon(Polygon::new(vertices.clone())?),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyConfig {
    pub shape: ShapeConfig,
    /// Zero makes the body immovable.
    pub mass: f64,
    pub position: Vec2,
    pub velocity: Vec2,
    pub restitution: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drag: Option<f64>,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            shape: ShapeConfig::Circle { radius: 30.0 },
            mass: 1.0,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            restitution: DEFAULT_RESTITUTION,
            drag: None,
        }
    }
}

impl BodyConfig {
    pub fn build(&self) -> Result<RigidBody, PhysicsError> {
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(PhysicsError::InvalidRestitution(self.restitution));
        }
        let mut body = RigidBody::new(self.mass, self.shape.build()?)?
            .with_position(self.position)
            .with_velocity(self.velocity)
            .with_restitution(self.restitution);
        if let Some(drag) = self.drag {
            if !(drag.is_finite() && drag >= 0.0) {
                return Err(PhysicsError::InvalidDrag(drag));
            }
            body = body.with_drag(drag);
        }
        Ok(body)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Fixed time step in seconds.
    pub dt: f64,
    /// The run stops once this much simulated time has passed.
    pub duration: f64,
    /// Frames between status reports; 0 disables them.
    pub status_interval: u64,
    pub gravity: Vec2,
    pub world_width: f64,
    pub world_height: f64,
    pub boundary_damping: f64,
    pub bodies: Vec<BodyConfig>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            dt: 0.016,
            duration: 10.0,
            status_interval: 30,
            gravity: DEFAULT_GRAVITY,
            world_width: 1200.0,
            world_height: 800.0,
            boundary_damping: DEFAULT_BOUNCE_DAMPING,
            bodies: vec![
                BodyConfig {
                    position: Vec2::new(300.0, 100.0),
                    velocity: Vec2::new(100.0, 0.0),
                    ..BodyConfig::default()
                },
                BodyConfig {
                    position: Vec2::new(900.0, 100.0),
                    velocity: Vec2::new(-100.0, 0.0),
                    ..BodyConfig::default()
                },
            ],
        }
    }
}

impl SimulationConfig {
    pub fn from_json_str(json: &str) -> Result<Self, PhysicsError> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PhysicsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String, PhysicsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks the run parameters and every body without building anything.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(PhysicsError::InvalidTimeStep(self.dt));
        }
        self.boundary()?;
        for body in &self.bodies {
            body.build()?;
        }
        Ok(())
    }

    pub fn boundary(&self) -> Result<Boundary, PhysicsError> {
        Boundary::new(self.world_width, self.world_height, self.boundary_damping)
    }

    /// Builds a world holding every configured body, in configuration order.
    pub fn build_world(&self) -> Result<PhysicsWorld, PhysicsError> {
        let mut world = PhysicsWorld::with_gravity(self.gravity);
        for body in &self.bodies {
            world.add_body(body.build()?);
        }
        Ok(world)
    }
}
