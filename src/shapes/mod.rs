pub mod circle;

pub use circle::Circle;

use crate::common::ShapeError;
use crate::math::Vec2;

/// Tag identifying which variant a [`Shape`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeKind {
    Circle,
}

/// Immutable geometry of a body, shared between bodies through an `Arc`.
///
/// New shapes are added as a variant here plus one arm per shape pair in
/// [`intersect`](crate::collision::intersect).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    Circle(Circle),
}

impl Shape {
    pub fn circle(radius: f64) -> Result<Self, ShapeError> {
        Circle::new(radius).map(Shape::Circle)
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
        }
    }

    /// Center of mass relative to the shape's own origin.
    pub fn center_of_mass_local(&self) -> Vec2 {
        match self {
            Shape::Circle(_) => Vec2::ZERO,
        }
    }

    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Shape::Circle(circle) => Some(circle),
        }
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}
