use std::sync::Arc;

use thunderdome as td;

use crate::{
    collision::{self, Contact},
    common::{BodyDefaults, ResolveError, SceneConfig},
    math::vec2::Vec2,
    objects::Body,
    shapes::Shape,
};

/// Stable key of a body owned by a [`Scene`].
///
/// Handles stay valid for the lifetime of the scene that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyHandle(td::Index);

impl BodyHandle {
    /// Get the underlying [`thunderdome::Index`] of this handle.
    #[inline]
    pub fn index(&self) -> td::Index {
        self.0
    }
}

/// Owns a set of bodies and advances them one frame at a time.
pub struct Scene {
    /// Acceleration applied to every movable body on each update.
    pub gravity: Vec2,
    /// Initial state for bodies created by [`Scene::create_body`].
    pub body_defaults: BodyDefaults,
    bodies: td::Arena<Body>,
}

impl Scene {
    /// Creates an empty scene with zero gravity.
    pub fn new() -> Self {
        Self::with_config(SceneConfig::default())
    }

    pub fn with_config(config: SceneConfig) -> Self {
        Self {
            gravity: config.gravity,
            body_defaults: config.body_defaults,
            bodies: td::Arena::new(),
        }
    }

    /// Adds a body using the scene's body defaults and returns its handle.
    /// The shape is shared, not copied.
    pub fn create_body(&mut self, shape: Arc<Shape>) -> BodyHandle {
        self.insert(Body::with_defaults(Some(shape), &self.body_defaults))
    }

    /// Adds a body with no geometry. It never collides with anything.
    pub fn create_body_without_shape(&mut self) -> BodyHandle {
        self.insert(Body::with_defaults(None, &self.body_defaults))
    }

    fn insert(&mut self, body: Body) -> BodyHandle {
        let handle = BodyHandle(self.bodies.insert(body));
        log::trace!("created body {:?}", handle);
        handle
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.get(handle.0)
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.bodies.get_mut(handle.0)
    }

    /// All bodies in creation order.
    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &Body)> {
        self.bodies.iter().map(|(idx, body)| (BodyHandle(idx), body))
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Advances the simulation by `dt` seconds.
    ///
    /// In order: gravity impulses on movable bodies, then every pair of bodies
    /// (skipping pairs where both are immovable) is tested and any contact is
    /// resolved immediately, then positions are integrated from velocities.
    ///
    /// Contacts are resolved once each, in creation order. Several bodies
    /// overlapping at once may therefore still overlap after the call.
    ///
    /// Does nothing if `dt` is not a positive finite number.
    pub fn update(&mut self, dt: f64) {
        if !(dt.is_finite() && dt > 0.0) {
            log::debug!("skipping update with invalid time step {}", dt);
            return;
        }

        // 1. Gravity
        for (_, body) in self.bodies.iter_mut() {
            if body.is_static() {
                continue;
            }
            let gravity_impulse = self.gravity * (1.0 / body.inverse_mass) * dt;
            body.apply_linear_impulse(gravity_impulse);
        }

        // 2. + 3. Broad phase over all pairs, narrow phase and immediate resolution
        for (handle_a, handle_b) in self.candidate_pairs() {
            let (Some(body_a), Some(body_b)) = self.bodies.get2_mut(handle_a.0, handle_b.0) else {
                continue;
            };

            if let Some(contact) = collision::intersect(handle_a, body_a, handle_b, body_b) {
                log::trace!(
                    "resolving contact {:?} <-> {:?}, separation {:.4}",
                    handle_a,
                    handle_b,
                    contact.separation
                );
                if let Err(err) = collision::resolve_contact(&contact, body_a, body_b) {
                    log::debug!("skipped contact {:?} <-> {:?}: {}", handle_a, handle_b, err);
                }
            }
        }

        // 4. Integrate positions of movable bodies
        for (_, body) in self.bodies.iter_mut() {
            if body.is_static() {
                continue;
            }
            body.position += body.linear_velocity * dt;
        }
    }

    /// Runs the narrow phase over the same pairs as [`Scene::update`]
    /// without resolving anything.
    pub fn find_contacts(&self) -> Vec<Contact> {
        self.candidate_pairs()
            .into_iter()
            .filter_map(|(handle_a, handle_b)| {
                let body_a = self.bodies.get(handle_a.0)?;
                let body_b = self.bodies.get(handle_b.0)?;
                collision::intersect(handle_a, body_a, handle_b, body_b)
            })
            .collect()
    }

    /// Resolves a single contact against the bodies it names.
    pub fn resolve_contact(&mut self, contact: &Contact) -> Result<(), ResolveError> {
        if contact.body_a == contact.body_b {
            return Err(ResolveError::SelfContact);
        }
        match self.bodies.get2_mut(contact.body_a.0, contact.body_b.0) {
            (Some(body_a), Some(body_b)) => collision::resolve_contact(contact, body_a, body_b),
            _ => Err(ResolveError::UnknownBody),
        }
    }

    /// Broad phase: every unordered pair in creation order, except pairs
    /// where both bodies are immovable.
    ///
    /// Resolution never changes `inverse_mass`, so the list stays valid for a whole step.
    fn candidate_pairs(&self) -> Vec<(BodyHandle, BodyHandle)> {
        let bodies: Vec<(BodyHandle, bool)> = self
            .bodies
            .iter()
            .map(|(idx, body)| (BodyHandle(idx), body.is_static()))
            .collect();

        let mut pairs = Vec::new();
        for (i, &(handle_a, static_a)) in bodies.iter().enumerate() {
            for &(handle_b, static_b) in &bodies[i + 1..] {
                if static_a && static_b {
                    continue;
                }
                pairs.push((handle_a, handle_b));
            }
        }
        pairs
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
