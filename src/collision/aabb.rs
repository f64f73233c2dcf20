// Defines an Axis-Aligned Bounding Box

use crate::math::vec2::Vec2;

/// An Axis-Aligned Bounding Box defined by its minimum and maximum corner points.
///
/// World space has y growing downward, so `min.y` is the top edge and `max.y`
/// the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    pub min: Vec2,
    pub max: Vec2,
}

impl AABB {
    /// Creates a new AABB, ordering the corners if needed.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        AABB {
            min: Vec2::new(min.x.min(max.x), min.y.min(max.y)),
            max: Vec2::new(min.x.max(max.x), min.y.max(max.y)),
        }
    }

    /// Box centred on `center` reaching `half_extents` along each axis.
    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        AABB::new(center - half_extents, center + half_extents)
    }

    /// Creates an AABB that encompasses a set of points.
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut min_pt = *first;
        let mut max_pt = *first;
        for point in rest {
            min_pt.x = min_pt.x.min(point.x);
            min_pt.y = min_pt.y.min(point.y);
            max_pt.x = max_pt.x.max(point.x);
            max_pt.y = max_pt.y.max(point.y);
        }
        Some(AABB::new(min_pt, max_pt))
    }

    pub fn left(&self) -> f64 {
        self.min.x
    }

    pub fn right(&self) -> f64 {
        self.max.x
    }

    pub fn top(&self) -> f64 {
        self.min.y
    }

    pub fn bottom(&self) -> f64 {
        self.max.y
    }

    /// True when the boxes are strictly apart on at least one axis.
    /// Boxes that only touch along an edge are not separated.
    pub fn is_separated_from(&self, other: &AABB) -> bool {
        self.right() < other.left()
            || self.left() > other.right()
            || self.bottom() < other.top()
            || self.top() > other.bottom()
    }

    /// Closest point inside (or on) the box to `point`.
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min, self.max)
    }
}
