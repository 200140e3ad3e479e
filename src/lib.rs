//! Impulse-based 2D rigid-body simulation of circular bodies.
//!
//! A [`Scene`] owns its bodies and advances them with [`Scene::update`]:
//! gravity, pairwise contact detection with immediate resolution, then
//! position integration.

pub mod collision;
pub mod common;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use collision::{intersect, resolve_contact, Contact};
pub use common::{BodyDefaults, ResolveError, SceneConfig, ShapeError};
pub use math::{Mat2, Vec2};
pub use objects::Body;
pub use shapes::{Circle, Shape, ShapeKind};
pub use world::{BodyHandle, Scene};
