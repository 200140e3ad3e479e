use crate::math::vec2::Vec2;
use crate::world::BodyHandle;

/// A single overlap between two bodies, found by [`intersect`](super::intersect).
///
/// Contacts hold handles rather than the bodies themselves and are only
/// meaningful within the step that produced them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Surface point of body A closest to B, in world space.
    pub point_on_a: Vec2,
    /// Surface point of body B closest to A, in world space.
    pub point_on_b: Vec2,
    /// `point_on_a` in body A's local space.
    pub point_on_a_local: Vec2,
    /// `point_on_b` in body B's local space.
    pub point_on_b_local: Vec2,
    /// Unit vector from A towards B. Zero when both centers coincide.
    pub normal: Vec2,
    /// Unsigned gap between the surfaces, `|distance - radius_sum|`.
    pub separation: f64,
    pub body_a: BodyHandle,
    pub body_b: BodyHandle,
}

impl Contact {
    /// True when the normal could not be defined because the centers coincide.
    pub fn is_degenerate(&self) -> bool {
        self.normal == Vec2::ZERO
    }
}
