use crate::bodies::DynamicBody;
use crate::collision::Overlap;
use crate::math::Vector3;

/// Marker error: the previous-overlap pattern matched none of the handled
/// face/edge rows. Corner contacts fall here, as does a pair that was
/// already fully overlapping before the step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnresolvedGeometry;

/// Axis the contact is resolved along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
    Z,
}

/// Tests a moved dynamic body against a static cube and resolves the contact
/// in place.
///
/// `old_position` is the body's center before this step's position update.
/// The boxes collide when the current overlap is positive on all three axes;
/// the struck face or edge is then inferred from which axes *already*
/// overlapped at the old position, since the separating axis this step must
/// be among the remaining ones:
///
/// - two prior axes positive: the third axis took the hit (a face contact)
/// - only z (or only x) prior: an edge along the shared face, resolved
///   vertically
///
/// Resolution pushes the body fully out along the contact axis, away from
/// the obstacle, and reflects that velocity component scaled by
/// `restitution`. Tangential velocity is untouched (no friction model).
///
/// Returns `Ok(true)` when a contact was resolved, `Ok(false)` when the pair
/// does not collide, and `Err(UnresolvedGeometry)` for patterns outside the
/// table.
pub fn resolve_contact(
    body: &mut DynamicBody,
    old_position: Vector3,
    obstacle: Vector3,
    half_width: f32,
    restitution: f32,
) -> Result<bool, UnresolvedGeometry> {
    let overlap = Overlap::between(body.position, obstacle, half_width);
    if !overlap.is_penetrating() {
        return Ok(false);
    }

    let previous = Overlap::between(old_position, obstacle, half_width);
    let axis = match (previous.x > 0.0, previous.y > 0.0, previous.z > 0.0) {
        (false, true, true) => Axis::X,
        (true, false, true) => Axis::Y,
        (true, true, false) => Axis::Z,
        // Prior overlap on a single horizontal axis: the body clipped a
        // vertical edge of the shared face. Resolved vertically.
        (false, false, true) | (true, false, false) => Axis::Y,
        _ => return Err(UnresolvedGeometry),
    };

    match axis {
        Axis::X => {
            body.position.x += push_out(body.position.x, obstacle.x, overlap.x);
            body.velocity.x = -body.velocity.x * restitution;
        }
        Axis::Y => {
            body.position.y += push_out(body.position.y, obstacle.y, overlap.y);
            body.velocity.y = -body.velocity.y * restitution;
        }
        Axis::Z => {
            body.position.z += push_out(body.position.z, obstacle.z, overlap.z);
            body.velocity.z = -body.velocity.z * restitution;
        }
    }
    Ok(true)
}

/// Signed displacement that moves `center` out of the obstacle by `depth`,
/// away from `obstacle_center`. Coincident centers push in the positive
/// direction.
#[inline]
fn push_out(center: f32, obstacle_center: f32, depth: f32) -> f32 {
    if center >= obstacle_center {
        depth
    } else {
        -depth
    }
}
