use std::sync::Arc;

use crate::common::BodyDefaults;
use crate::math::{Mat2, Vec2};
use crate::shapes::Shape;

/// Dynamical state of a single rigid body.
///
/// Fields are public so renderers can read `position` and tuning code can
/// adjust `inverse_mass`, `elasticity` and `rotation` directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub linear_velocity: Vec2,
    /// Carried along but not consumed by contact resolution.
    pub angular_velocity: Vec2,
    /// `1 / mass`. Zero makes the body immovable.
    pub inverse_mass: f64,
    /// Radians.
    pub rotation: f64,
    /// Coefficient of restitution in `[0, 1]`.
    pub elasticity: f64,
    pub shape: Option<Arc<Shape>>,
}

impl Body {
    /// Creates a body at the origin with the default mass and elasticity.
    pub fn new(shape: Arc<Shape>) -> Self {
        Self::with_defaults(Some(shape), &BodyDefaults::default())
    }

    pub fn with_defaults(shape: Option<Arc<Shape>>, defaults: &BodyDefaults) -> Self {
        Self {
            position: Vec2::ZERO,
            linear_velocity: Vec2::ZERO,
            angular_velocity: Vec2::ZERO,
            inverse_mass: defaults.inverse_mass,
            rotation: defaults.rotation,
            elasticity: defaults.elasticity,
            shape,
        }
    }

    #[inline]
    pub fn is_static(&self) -> bool {
        self.inverse_mass == 0.0
    }

    pub fn shape(&self) -> Option<&Shape> {
        self.shape.as_deref()
    }

    /// Zero when the body has no shape.
    pub fn center_of_mass_local(&self) -> Vec2 {
        self.shape()
            .map(Shape::center_of_mass_local)
            .unwrap_or(Vec2::ZERO)
    }

    /// Zero when the body has no shape.
    pub fn center_of_mass_world(&self) -> Vec2 {
        match self.shape() {
            Some(shape) => self.to_world(shape.center_of_mass_local()),
            None => Vec2::ZERO,
        }
    }

    /// Body space to world space: rotate, then translate.
    pub fn to_world(&self, point: Vec2) -> Vec2 {
        Mat2::rotation(self.rotation) * point + self.position
    }

    /// World space to body space: translate back, then rotate by `-rotation`.
    pub fn to_local(&self, point: Vec2) -> Vec2 {
        Mat2::rotation(self.rotation).transpose() * (point - self.position)
    }

    /// Changes velocity by `impulse * inverse_mass`. Immovable bodies ignore impulses.
    pub fn apply_linear_impulse(&mut self, impulse: Vec2) {
        if self.is_static() {
            return;
        }
        self.linear_velocity += impulse * self.inverse_mass;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    const EPSILON: f64 = 1e-10;

    fn unit_circle() -> Arc<Shape> {
        Arc::new(Shape::circle(1.0).unwrap())
    }

    #[test]
    fn test_body_new_defaults() {
        let shape = unit_circle();
        let body = Body::new(shape.clone());
        assert_eq!(body.position, Vec2::ZERO);
        assert_eq!(body.linear_velocity, Vec2::ZERO);
        assert_eq!(body.angular_velocity, Vec2::ZERO);
        assert_eq!(body.inverse_mass, 1.0);
        assert_eq!(body.rotation, 0.0);
        assert_eq!(body.elasticity, 0.1);
        assert!(Arc::ptr_eq(body.shape.as_ref().unwrap(), &shape));
        assert!(!body.is_static());
    }

    #[test]
    fn test_body_with_custom_defaults() {
        let defaults = BodyDefaults {
            inverse_mass: 0.0,
            elasticity: 0.8,
            rotation: 0.25,
        };
        let body = Body::with_defaults(None, &defaults);
        assert!(body.is_static());
        assert_eq!(body.elasticity, 0.8);
        assert_eq!(body.rotation, 0.25);
        assert!(body.shape().is_none());
    }

    #[test]
    fn test_center_of_mass_without_shape_is_zero() {
        let mut body = Body::with_defaults(None, &BodyDefaults::default());
        body.position = Vec2::new(4.0, 5.0);
        assert_eq!(body.center_of_mass_local(), Vec2::ZERO);
        assert_eq!(body.center_of_mass_world(), Vec2::ZERO);
    }

    #[test]
    fn test_center_of_mass_world_follows_position() {
        let mut body = Body::new(unit_circle());
        body.position = Vec2::new(4.0, 5.0);
        body.rotation = 1.0;
        assert_eq!(body.center_of_mass_local(), Vec2::ZERO);
        let com = body.center_of_mass_world();
        assert!((com - Vec2::new(4.0, 5.0)).magnitude() < EPSILON);
    }

    #[test]
    fn test_to_world_rotates_then_translates() {
        let mut body = Body::new(unit_circle());
        body.position = Vec2::new(10.0, 5.0);
        body.rotation = PI / 2.0;
        let p = body.to_world(Vec2::new(1.0, 0.0));
        assert!((p.x - 10.0).abs() < EPSILON);
        assert!((p.y - 6.0).abs() < EPSILON);
    }

    #[test]
    fn test_to_local_inverts_to_world() {
        let mut body = Body::new(unit_circle());
        body.position = Vec2::new(-3.0, 2.0);
        body.rotation = PI / 4.0;
        let local = Vec2::new(1.0, 1.0);
        let back = body.to_local(body.to_world(local));
        assert!((back - local).magnitude() < EPSILON);
    }

    #[test]
    fn test_apply_linear_impulse_scales_by_inverse_mass() {
        let mut body = Body::new(unit_circle());
        body.inverse_mass = 0.5;
        body.apply_linear_impulse(Vec2::new(4.0, -2.0));
        assert_eq!(body.linear_velocity, Vec2::new(2.0, -1.0));
    }

    #[test]
    fn test_apply_linear_impulse_ignored_by_static_body() {
        let mut body = Body::new(unit_circle());
        body.inverse_mass = 0.0;
        body.apply_linear_impulse(Vec2::new(100.0, 100.0));
        assert_eq!(body.linear_velocity, Vec2::ZERO);
    }
}
