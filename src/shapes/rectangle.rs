use crate::common::PhysicsError;

/// Axis-aligned rectangle centred on its body's position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Result<Self, PhysicsError> {
        let valid = |side: f64| side.is_finite() && side > 0.0;
        if !(valid(width) && valid(height)) {
            return Err(PhysicsError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    pub fn half_height(&self) -> f64 {
        self.height / 2.0
    }
}
