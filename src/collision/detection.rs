use crate::math::vec2::Vec2;
use crate::objects::Body;
use crate::shapes::{Circle, Shape};
use crate::world::BodyHandle;
use super::contact::Contact;

/// Narrow-phase test between two bodies.
///
/// Dispatches on the pair of shapes. Returns `None` when the bodies do not
/// overlap, and also when either body has no shape.
pub fn intersect(
    handle_a: BodyHandle,
    body_a: &Body,
    handle_b: BodyHandle,
    body_b: &Body,
) -> Option<Contact> {
    match (body_a.shape(), body_b.shape()) {
        (Some(Shape::Circle(circle_a)), Some(Shape::Circle(circle_b))) => {
            check_circle_circle(handle_a, body_a, circle_a, handle_b, body_b, circle_b)
        }
        _ => None,
    }
}

/// Circle against circle. Touching circles count as a contact.
fn check_circle_circle(
    handle_a: BodyHandle,
    body_a: &Body,
    circle_a: &Circle,
    handle_b: BodyHandle,
    body_b: &Body,
    circle_b: &Circle,
) -> Option<Contact> {
    let (radius_a, radius_b) = (circle_a.radius(), circle_b.radius());
    let radius_sum = radius_a + radius_b;
    let dist_vec = body_b.position - body_a.position;
    let dist_sq = dist_vec.magnitude_squared();

    if dist_sq > radius_sum * radius_sum {
        return None;
    }

    let distance = dist_sq.sqrt();
    // Coincident centers leave the direction undefined; resolution treats a zero normal as inert.
    let normal = if distance == 0.0 {
        Vec2::ZERO
    } else {
        (dist_vec / distance).normalize()
    };

    let point_on_a = body_a.position + normal * radius_a;
    let point_on_b = body_b.position - normal * radius_b;

    Some(Contact {
        point_on_a,
        point_on_b,
        point_on_a_local: body_a.to_local(point_on_a),
        point_on_b_local: body_b.to_local(point_on_b),
        normal,
        separation: (distance - radius_sum).abs(),
        body_a: handle_a,
        body_b: handle_b,
    })
}
