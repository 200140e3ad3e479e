use crate::common::ResolveError;
use crate::objects::Body;
use super::contact::Contact;

/// Exchanges momentum along the contact normal and pushes the bodies apart.
///
/// `body_a` and `body_b` must be the bodies named by `contact.body_a` and
/// `contact.body_b`. The impulse is only applied while the bodies are closing
/// on each other; the positional correction is always applied and splits the
/// gap `point_on_b - point_on_a` between the bodies by inverse mass.
///
/// Fails without touching either body when both are immovable.
pub fn resolve_contact(
    contact: &Contact,
    body_a: &mut Body,
    body_b: &mut Body,
) -> Result<(), ResolveError> {
    let inv_mass_sum = body_a.inverse_mass + body_b.inverse_mass;
    if inv_mass_sum == 0.0 {
        return Err(ResolveError::ImmovablePair);
    }

    let normal = contact.normal;
    let elasticity = body_a.elasticity * body_b.elasticity;

    // Positive when A is moving towards B.
    let closing_speed = (body_a.linear_velocity - body_b.linear_velocity).dot(normal);
    if closing_speed > 0.0 {
        let impulse_magnitude = -(1.0 + elasticity) * closing_speed / inv_mass_sum;
        let impulse = normal * impulse_magnitude;
        body_a.apply_linear_impulse(impulse);
        body_b.apply_linear_impulse(-impulse);
    }

    let t_a = body_a.inverse_mass / inv_mass_sum;
    let t_b = body_b.inverse_mass / inv_mass_sum;
    let ds = contact.point_on_b - contact.point_on_a;
    body_a.position += ds * t_a;
    body_b.position -= ds * t_b;

    Ok(())
}
