//! Tuning parameters for a [`Scene`](crate::world::Scene).

use crate::math::Vec2;

/// Initial state given to every body created through a scene's factory.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-types", serde(default))]
pub struct BodyDefaults {
    /// `0.0` creates immovable bodies.
    pub inverse_mass: f64,
    /// Coefficient of restitution, expected in `[0, 1]`.
    pub elasticity: f64,
    /// Radians.
    pub rotation: f64,
}

impl BodyDefaults {
    pub const INVERSE_MASS: f64 = 1.0;
    pub const ELASTICITY: f64 = 0.1;
}

impl Default for BodyDefaults {
    fn default() -> Self {
        Self {
            inverse_mass: Self::INVERSE_MASS,
            elasticity: Self::ELASTICITY,
            rotation: 0.0,
        }
    }
}

/// Scene-wide settings.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-types", serde(default))]
pub struct SceneConfig {
    /// Acceleration applied to every movable body each step. Zero unless set.
    pub gravity: Vec2,
    pub body_defaults: BodyDefaults,
}

impl SceneConfig {
    pub fn with_gravity(gravity: Vec2) -> Self {
        Self {
            gravity,
            ..Self::default()
        }
    }
}
