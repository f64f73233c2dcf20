use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Below this length a vector is treated as zero by `normalize`.
pub const NORMALIZE_EPSILON: f64 = 1e-10;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    pub const UNIT_X: Vec2 = Vec2 { x: 1.0, y: 0.0 };

    /// Creates a new Vec2.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the dot product of two vectors.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Calculates the squared magnitude (length) of the vector.
    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    /// Calculates the magnitude (length) of the vector.
    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Returns a unit vector pointing the same way.
    /// Vectors shorter than `NORMALIZE_EPSILON` normalize to the zero vector.
    pub fn normalize(self) -> Self {
        let mag = self.magnitude();
        if mag < NORMALIZE_EPSILON {
            Self::ZERO
        } else {
            self * (1.0 / mag)
        }
    }

    /// Calculates the distance between two vector points.
    pub fn distance(self, other: Self) -> f64 {
        (self - other).magnitude()
    }

    /// Clamps each component into `[min, max]` independently.
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::new(self.x.clamp(min.x, max.x), self.y.clamp(min.y, max.y))
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

// Vec2 * f64
impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

// f64 * Vec2
impl Mul<Vec2> for f64 {
    type Output = Vec2;

    fn mul(self, vec: Vec2) -> Vec2 {
        vec * self
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_vec2_add_sub() {
        let v1 = Vec2::new(1.0, 2.0);
        let v2 = Vec2::new(3.0, 4.0);
        assert_eq!(v1 + v2, Vec2::new(4.0, 6.0));
        assert_eq!(v2 - v1, Vec2::new(2.0, 2.0));
        assert_eq!(-v1, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn test_vec2_assign_ops() {
        let mut v = Vec2::new(1.0, 1.0);
        v += Vec2::new(2.0, 3.0);
        assert_eq!(v, Vec2::new(3.0, 4.0));
        v -= Vec2::new(1.0, 1.0);
        assert_eq!(v, Vec2::new(2.0, 3.0));
    }

    #[test]
    fn test_vec2_scalar_mul() {
        let v = Vec2::new(1.0, 2.0);
        assert_eq!(v * 3.0, Vec2::new(3.0, 6.0));
        assert_eq!(3.0 * v, Vec2::new(3.0, 6.0));
    }

    #[test]
    fn test_vec2_dot() {
        let v1 = Vec2::new(1.0, 2.0);
        let v2 = Vec2::new(3.0, 4.0);
        assert!((v1.dot(v2) - 11.0).abs() < EPSILON);
    }

    #[test]
    fn test_vec2_magnitude() {
        let v = Vec2::new(3.0, 4.0);
        assert!((v.magnitude_squared() - 25.0).abs() < EPSILON);
        assert!((v.magnitude() - 5.0).abs() < EPSILON);
        assert_eq!(Vec2::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn test_vec2_normalize() {
        let norm_v = Vec2::new(3.0, 4.0).normalize();
        assert!((norm_v.magnitude() - 1.0).abs() < EPSILON);
        assert!((norm_v.x - 0.6).abs() < EPSILON);
        assert!((norm_v.y - 0.8).abs() < EPSILON);
    }

    #[test]
    fn test_vec2_normalize_degenerate() {
        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
        // Shorter than the epsilon collapses to zero rather than blowing up.
        assert_eq!(Vec2::new(1e-12, -1e-12).normalize(), Vec2::ZERO);
    }

    #[test]
    fn test_vec2_distance() {
        let v1 = Vec2::new(1.0, 2.0);
        let v2 = Vec2::new(4.0, 6.0);
        assert!((v1.distance(v2) - 5.0).abs() < EPSILON);
        assert!((v2.distance(v1) - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_vec2_clamp() {
        let min = Vec2::new(0.0, 0.0);
        let max = Vec2::new(10.0, 5.0);
        assert_eq!(Vec2::new(-3.0, 2.0).clamp(min, max), Vec2::new(0.0, 2.0));
        assert_eq!(Vec2::new(12.0, 9.0).clamp(min, max), Vec2::new(10.0, 5.0));
        assert_eq!(Vec2::new(4.0, 4.0).clamp(min, max), Vec2::new(4.0, 4.0));
    }
}
