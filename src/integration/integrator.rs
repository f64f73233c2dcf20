use crate::objects::rigid_body::RigidBody;

/// Integrates the rigid body's state forward in time using Semi-Implicit Euler.
///
/// Position is advanced with the velocity computed in this same step. Immovable
/// bodies keep their position and velocity but still have their force cleared.
pub fn integrate(body: &mut RigidBody, dt: f64) {
    if body.inv_mass == 0.0 {
        body.clear_accumulators();
        return;
    }

    // Linear drag opposes the current velocity
    if let Some(drag) = body.drag_coefficient {
        let drag_force = body.velocity * -drag;
        body.apply_force(drag_force);
    }

    // a = F/m = F * inv_m
    let acceleration = body.force * body.inv_mass;
    // v = v + a*dt
    body.velocity = body.velocity + acceleration * dt;
    // p = p + v*dt, with the updated v
    body.position = body.position + body.velocity * dt;

    body.clear_accumulators();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2::Vec2;
    use crate::shapes::Shape;
    const EPSILON: f64 = 1e-9;

    fn default_test_shape() -> Shape {
        Shape::circle(1.0).unwrap()
    }

    #[test]
    fn test_integrate_linear_motion_no_force() {
        let mut rb = RigidBody::new(1.0, default_test_shape()).unwrap();
        rb.velocity = Vec2::new(10.0, -5.0);

        integrate(&mut rb, 0.1);

        assert!((rb.position.x - 1.0).abs() < EPSILON);
        assert!((rb.position.y - -0.5).abs() < EPSILON);
        assert_eq!(rb.velocity, Vec2::new(10.0, -5.0));
        assert_eq!(rb.force, Vec2::ZERO);
    }

    #[test]
    fn test_integrate_constant_force_is_semi_implicit() {
        let mut rb = RigidBody::new(2.0, default_test_shape()).unwrap();
        rb.apply_force(Vec2::new(10.0, 0.0)); // a = (5, 0)

        integrate(&mut rb, 0.1);

        // v = 0 + 5*0.1 = 0.5
        assert!((rb.velocity.x - 0.5).abs() < EPSILON);
        // p uses the new velocity: 0.5*0.1 = 0.05 (explicit Euler would give 0)
        assert!((rb.position.x - 0.05).abs() < EPSILON);
        assert_eq!(rb.force, Vec2::ZERO);
    }

    #[test]
    fn test_integrate_with_drag() {
        let mut rb = RigidBody::new(1.0, default_test_shape())
            .unwrap()
            .with_velocity(Vec2::new(10.0, 0.0))
            .with_drag(0.5);

        integrate(&mut rb, 0.1);

        // F_drag = -0.5 * 10 = -5, v = 10 - 0.5 = 9.5, p = 0.95
        assert!((rb.velocity.x - 9.5).abs() < EPSILON);
        assert!((rb.position.x - 0.95).abs() < EPSILON);
        assert_eq!(rb.force, Vec2::ZERO);
    }

    #[test]
    fn test_integrate_without_drag_keeps_speed() {
        let mut rb = RigidBody::new(1.0, default_test_shape())
            .unwrap()
            .with_velocity(Vec2::new(10.0, 0.0));
        for _ in 0..10 {
            integrate(&mut rb, 0.1);
        }
        assert_eq!(rb.velocity, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_integrate_static_object() {
        let mut rb = RigidBody::new(0.0, default_test_shape()).unwrap();
        rb.position = Vec2::new(1.0, 1.0);
        rb.velocity = Vec2::new(1.0, 1.0);
        rb.force = Vec2::new(10.0, 10.0);

        integrate(&mut rb, 0.1);

        assert_eq!(rb.position, Vec2::new(1.0, 1.0));
        assert_eq!(rb.velocity, Vec2::new(1.0, 1.0));
        assert_eq!(rb.force, Vec2::ZERO);
    }
}
