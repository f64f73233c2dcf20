use crate::collision::{self, CollisionManifold};
use crate::integration::integrator;
use crate::math::vec2::Vec2;
use crate::objects::rigid_body::RigidBody;

/// Gravity for a y-down world measured in pixels.
pub const DEFAULT_GRAVITY: Vec2 = Vec2 { x: 0.0, y: 98.0 };

pub struct PhysicsWorld {
    pub bodies: Vec<RigidBody>,
    pub gravity: Vec2,
    /// Contacts resolved during the most recent step, in resolution order.
    pub contacts: Vec<CollisionManifold>,
}

impl PhysicsWorld {
    /// Creates a new, empty physics world with default gravity.
    pub fn new() -> Self {
        Self::with_gravity(DEFAULT_GRAVITY)
    }

    pub fn with_gravity(gravity: Vec2) -> Self {
        Self {
            bodies: Vec::new(),
            gravity,
            contacts: Vec::new(),
        }
    }

    /// Appends a rigid body to the world and returns its index.
    pub fn add_body(&mut self, body: RigidBody) -> usize {
        let index = self.bodies.len();
        self.bodies.push(body);
        index
    }

    /// Advances the simulation by `dt` seconds.
    ///
    /// Gravity and integration run first for every body, then every pair is
    /// tested and resolved in ascending `(i, j)` order.
    pub fn step(&mut self, dt: f64) {
        self.integrate_bodies(dt);
        self.resolve_collisions();
    }

    /// Adds `gravity * mass` to every body and integrates it.
    pub fn integrate_bodies(&mut self, dt: f64) {
        for body in self.bodies.iter_mut() {
            let gravity_force = self.gravity * body.mass;
            body.apply_force(gravity_force);
            integrator::integrate(body, dt);
        }
    }

    /// Tests every unordered pair and resolves each contact as soon as it is found,
    /// so later pairs see velocities already changed by earlier ones.
    /// Returns the number of contacts resolved.
    pub fn resolve_collisions(&mut self) -> usize {
        self.contacts.clear();

        for i in 0..self.bodies.len() {
            for j in (i + 1)..self.bodies.len() {
                let maybe_manifold =
                    collision::check_collision(&self.bodies[i], i, &self.bodies[j], j);

                if let Some(manifold) = maybe_manifold {
                    log::trace!(
                        "contact {} -> {}: normal {:?}, penetration {:.3}",
                        i,
                        j,
                        manifold.normal,
                        manifold.penetration
                    );
                    self.resolve_pair(&manifold);
                    self.contacts.push(manifold);
                }
            }
        }

        self.contacts.len()
    }

    /// Resolves a manifold produced by [`collision::check_collision`] against the
    /// bodies it names.
    pub fn resolve_pair(&mut self, manifold: &CollisionManifold) {
        let (body_a, body_b) =
            get_mutable_body_pair(&mut self.bodies, manifold.body_a_idx, manifold.body_b_idx);
        collision::resolve_collision(body_a, body_b, manifold);
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper to safely get mutable references to two different bodies in a slice,
/// returned in the order requested.
/// Panics if indices are the same or out of bounds.
pub(crate) fn get_mutable_body_pair(
    bodies: &mut [RigidBody],
    idx_a: usize,
    idx_b: usize,
) -> (&mut RigidBody, &mut RigidBody) {
    assert_ne!(idx_a, idx_b, "a body cannot collide with itself");

    if idx_a < idx_b {
        let (slice_a, slice_b) = bodies.split_at_mut(idx_b);
        (&mut slice_a[idx_a], &mut slice_b[0])
    } else {
        let (slice_b, slice_a) = bodies.split_at_mut(idx_a);
        (&mut slice_a[0], &mut slice_b[idx_b])
    }
}
