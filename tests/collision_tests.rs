use approx::assert_relative_eq;
use sandbox_phys::collision::{resolve_contact, Overlap};
use sandbox_phys::{DynamicBody, Vector3};

const HALF_WIDTH: f32 = 0.5;
const E: f32 = 0.6;

#[test]
fn test_overlap_is_per_axis() {
    let overlap = Overlap::between(
        Vector3::new(0.3, 2.0, -0.4),
        Vector3::zero(),
        HALF_WIDTH,
    );

    assert_relative_eq!(overlap.x, 0.7);
    assert_relative_eq!(overlap.y, -1.0);
    assert_relative_eq!(overlap.z, 0.6);
    assert!(!overlap.is_penetrating());
}

#[test]
fn test_overlap_requires_all_three_axes() {
    // Touching exactly on one axis does not count as penetration
    let touching = Overlap::between(Vector3::new(1.0, 0.0, 0.0), Vector3::zero(), HALF_WIDTH);
    assert_eq!(touching.x, 0.0);
    assert!(!touching.is_penetrating());

    let inside = Overlap::between(Vector3::new(0.2, 0.3, 0.1), Vector3::zero(), HALF_WIDTH);
    assert!(inside.is_penetrating());
}

#[test]
fn test_separated_pair_is_untouched() {
    let mut body = DynamicBody::new(
        Vector3::new(3.0, 0.0, 0.0),
        Vector3::new(-1.0, 0.0, 0.0),
        Vector3::zero(),
        1.0,
    )
    .unwrap();
    let before = body;

    let resolved = resolve_contact(
        &mut body,
        Vector3::new(3.1, 0.0, 0.0),
        Vector3::zero(),
        HALF_WIDTH,
        E,
    )
    .unwrap();

    assert!(!resolved);
    assert_eq!(body, before);
}

#[test]
fn test_face_hit_reflects_only_the_normal_component() {
    // Was overlapping on y and z, x separated: an x-face hit
    let mut body = DynamicBody::new(
        Vector3::new(0.8, 0.1, 0.0),
        Vector3::new(-2.0, -0.3, 0.4),
        Vector3::zero(),
        1.0,
    )
    .unwrap();

    let resolved = resolve_contact(
        &mut body,
        Vector3::new(1.1, 0.1, 0.0),
        Vector3::zero(),
        HALF_WIDTH,
        E,
    )
    .unwrap();

    assert!(resolved);
    assert_relative_eq!(body.position.x, 1.0, epsilon = 1e-6);
    assert_relative_eq!(body.velocity.x, 2.0 * E, epsilon = 1e-6);
    assert_eq!(body.velocity.y, -0.3);
    assert_eq!(body.velocity.z, 0.4);
}

#[test]
fn test_push_direction_follows_relative_position() {
    // Approaching from below: pushed further down, away from the obstacle
    let mut body = DynamicBody::new(
        Vector3::new(0.0, -0.8, 0.0),
        Vector3::new(0.0, 3.0, 0.0),
        Vector3::zero(),
        1.0,
    )
    .unwrap();

    resolve_contact(
        &mut body,
        Vector3::new(0.0, -1.1, 0.0),
        Vector3::zero(),
        HALF_WIDTH,
        E,
    )
    .unwrap();

    assert_relative_eq!(body.position.y, -1.0, epsilon = 1e-6);
    assert_relative_eq!(body.velocity.y, -3.0 * E, epsilon = 1e-6);
}

#[test]
fn test_corner_pattern_is_rejected() {
    let mut body = DynamicBody::new(
        Vector3::new(0.8, 0.8, 0.8),
        Vector3::new(-1.0, -1.0, -1.0),
        Vector3::zero(),
        1.0,
    )
    .unwrap();

    // Previously separated on every axis: outside the face/edge table
    let result = resolve_contact(
        &mut body,
        Vector3::new(1.1, 1.1, 1.1),
        Vector3::zero(),
        HALF_WIDTH,
        E,
    );
    assert!(result.is_err());
}

#[test]
fn test_full_prior_containment_is_rejected() {
    let mut body = DynamicBody::new(
        Vector3::new(0.1, 0.1, 0.1),
        Vector3::zero(),
        Vector3::zero(),
        1.0,
    )
    .unwrap();

    // Already overlapping on all three axes before the step
    let result = resolve_contact(
        &mut body,
        Vector3::new(0.2, 0.2, 0.2),
        Vector3::zero(),
        HALF_WIDTH,
        E,
    );
    assert!(result.is_err());
}

#[test]
fn test_larger_half_width_widens_the_contact() {
    let mut body = DynamicBody::new(
        Vector3::new(1.5, 0.0, 0.0),
        Vector3::new(-1.0, 0.0, 0.0),
        Vector3::zero(),
        1.0,
    )
    .unwrap();

    // Separated for half width 0.5 cubes, penetrating for half width 1.0
    assert!(!Overlap::between(body.position, Vector3::zero(), 0.5).is_penetrating());
    let resolved = resolve_contact(
        &mut body,
        Vector3::new(2.1, 0.0, 0.0),
        Vector3::zero(),
        1.0,
        E,
    )
    .unwrap();

    assert!(resolved);
    assert_relative_eq!(body.position.x, 2.0, epsilon = 1e-6);
}
