use super::manifold::CollisionManifold;
use crate::objects::rigid_body::RigidBody;

/// Applies an impulse along the manifold normal so the bodies stop approaching.
///
/// `body_a` and `body_b` must be the bodies named by the manifold, in that order.
/// Bodies already separating along the normal are left alone, as are pairs of
/// immovable bodies. Positions are not corrected.
pub fn resolve_collision(body_a: &mut RigidBody, body_b: &mut RigidBody, manifold: &CollisionManifold) {
    let relative_velocity = body_b.velocity - body_a.velocity;
    let vel_along_normal = relative_velocity.dot(manifold.normal);

    if vel_along_normal > 0.0 {
        return;
    }

    let inv_mass_sum = body_a.inv_mass + body_b.inv_mass;
    if inv_mass_sum == 0.0 {
        log::warn!(
            "bodies {} and {} are both immovable, skipping impulse",
            manifold.body_a_idx,
            manifold.body_b_idx
        );
        return;
    }

    let e = body_a.restitution.min(body_b.restitution);
    let j = -(1.0 + e) * vel_along_normal / inv_mass_sum;

    let impulse = manifold.normal * j;
    body_a.velocity -= impulse * body_a.inv_mass;
    body_b.velocity += impulse * body_b.inv_mass;

    log::trace!(
        "impulse {:.3} between bodies {} and {} (e = {:.2})",
        j,
        manifold.body_a_idx,
        manifold.body_b_idx,
        e
    );
}
