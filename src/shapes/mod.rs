pub mod circle;
pub mod polygon;
pub mod rectangle;

pub use circle::Circle;
pub use polygon::Polygon;
pub use rectangle::Rectangle;

/// Discriminant of a [`Shape`], used to pick the narrow-phase routine for a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Polygon,
}

/// Enum representing the geometric shape of a rigid body.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
    Polygon(Polygon),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Polygon(_) => ShapeKind::Polygon,
        }
    }

    /// Shorthand for a validated circle shape.
    pub fn circle(radius: f64) -> Result<Self, crate::common::PhysicsError> {
        Circle::new(radius).map(Shape::Circle)
    }

    /// Shorthand for a validated rectangle shape.
    pub fn rectangle(width: f64, height: f64) -> Result<Self, crate::common::PhysicsError> {
        Rectangle::new(width, height).map(Shape::Rectangle)
    }
}
