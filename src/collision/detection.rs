use super::manifold::CollisionManifold;
use crate::math::vec2::Vec2;
use crate::objects::rigid_body::RigidBody;
use crate::shapes::{Shape, ShapeKind};

/// Normal reported when the contact direction is undefined (coincident centres,
/// circle centre inside a rectangle).
pub const FALLBACK_NORMAL: Vec2 = Vec2::UNIT_X;

fn unit_or_fallback(v: Vec2) -> Vec2 {
    let n = v.normalize();
    if n == Vec2::ZERO {
        FALLBACK_NORMAL
    } else {
        n
    }
}

/// Narrow-phase entry point. Picks the routine for the pair of shape kinds.
///
/// Returns a manifold whose normal points from `body_a` towards `body_b`, or
/// `None` if the shapes don't overlap. Any pair involving a polygon never collides.
pub fn check_collision(
    body_a: &RigidBody,
    body_a_idx: usize,
    body_b: &RigidBody,
    body_b_idx: usize,
) -> Option<CollisionManifold> {
    match (body_a.shape.kind(), body_b.shape.kind()) {
        (ShapeKind::Circle, ShapeKind::Circle) => {
            check_circle_circle(body_a, body_a_idx, body_b, body_b_idx)
        }
        (ShapeKind::Circle, ShapeKind::Rectangle) => {
            check_circle_rectangle(body_a, body_a_idx, body_b, body_b_idx)
        }
        (ShapeKind::Rectangle, ShapeKind::Circle) => {
            check_rectangle_circle(body_a, body_a_idx, body_b, body_b_idx)
        }
        (ShapeKind::Rectangle, ShapeKind::Rectangle) => {
            check_rectangle_rectangle(body_a, body_a_idx, body_b, body_b_idx)
        }
        (kind_a, kind_b) => {
            log::trace!(
                "no narrow phase for {:?} x {:?} (bodies {} and {})",
                kind_a,
                kind_b,
                body_a_idx,
                body_b_idx
            );
            None
        }
    }
}

/// Checks for collision between two circles.
pub fn check_circle_circle(
    body_a: &RigidBody,
    body_a_idx: usize,
    body_b: &RigidBody,
    body_b_idx: usize,
) -> Option<CollisionManifold> {
    let circle_a = match body_a.shape {
        Shape::Circle(c) => c,
        _ => return None,
    };
    let circle_b = match body_b.shape {
        Shape::Circle(c) => c,
        _ => return None,
    };

    let dist_vec = body_b.position - body_a.position;
    let distance = dist_vec.magnitude();
    let radii_sum = circle_a.radius + circle_b.radius;

    if distance >= radii_sum {
        return None;
    }

    Some(CollisionManifold {
        body_a_idx,
        body_b_idx,
        normal: unit_or_fallback(dist_vec),
        penetration: radii_sum - distance,
    })
}

/// Checks for collision between a circle (A) and an axis-aligned rectangle (B).
///
/// The circle centre is clamped onto the rectangle to find the nearest point. The
/// normal points from the circle towards that point, i.e. into the rectangle.
pub fn check_circle_rectangle(
    circle_body: &RigidBody,
    circle_body_idx: usize,
    rect_body: &RigidBody,
    rect_body_idx: usize,
) -> Option<CollisionManifold> {
    let circle = match circle_body.shape {
        Shape::Circle(c) => c,
        _ => return None,
    };
    if !matches!(rect_body.shape, Shape::Rectangle(_)) {
        return None;
    }

    let closest = rect_body.calculate_aabb().closest_point(circle_body.position);
    let delta = circle_body.position - closest;
    let distance = delta.magnitude();

    if distance >= circle.radius {
        return None;
    }

    Some(CollisionManifold {
        body_a_idx: circle_body_idx,
        body_b_idx: rect_body_idx,
        normal: unit_or_fallback(-delta),
        penetration: circle.radius - distance,
    })
}

/// Checks for collision between a rectangle (A) and a circle (B).
///
/// Runs the circle/rectangle test with the bodies swapped and flips the result
/// back, so the normal points from the rectangle towards the circle.
pub fn check_rectangle_circle(
    rect_body: &RigidBody,
    rect_body_idx: usize,
    circle_body: &RigidBody,
    circle_body_idx: usize,
) -> Option<CollisionManifold> {
    check_circle_rectangle(circle_body, circle_body_idx, rect_body, rect_body_idx)
        .map(CollisionManifold::flipped)
}

/// Checks for collision between two axis-aligned rectangles.
///
/// The separating axis is the one with the smallest overlap. On exact ties the
/// first candidate wins, in the order left, right, top, bottom.
pub fn check_rectangle_rectangle(
    body_a: &RigidBody,
    body_a_idx: usize,
    body_b: &RigidBody,
    body_b_idx: usize,
) -> Option<CollisionManifold> {
    if !matches!(body_a.shape, Shape::Rectangle(_)) || !matches!(body_b.shape, Shape::Rectangle(_)) {
        return None;
    }

    let a = body_a.calculate_aabb();
    let b = body_b.calculate_aabb();
    if a.is_separated_from(&b) {
        return None;
    }

    let candidates = [
        (b.right() - a.left(), Vec2::new(-1.0, 0.0)), // left
        (a.right() - b.left(), Vec2::new(1.0, 0.0)),  // right
        (b.bottom() - a.top(), Vec2::new(0.0, -1.0)), // top
        (a.bottom() - b.top(), Vec2::new(0.0, 1.0)),  // bottom
    ];

    let (mut penetration, mut normal) = candidates[0];
    for &(depth, axis) in &candidates[1..] {
        if depth < penetration {
            penetration = depth;
            normal = axis;
        }
    }

    Some(CollisionManifold {
        body_a_idx,
        body_b_idx,
        normal,
        penetration,
    })
}
