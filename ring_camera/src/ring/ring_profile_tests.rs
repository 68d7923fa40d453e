use super::*;
use crate::error::Error;

#[test]
fn test_border_distance_three_four_five() {
    let ring = RingProfile::uncolored(3.0, 4.0);
    assert_eq!(ring.border_distance(), 5.0);
}

#[test]
fn test_border_distance_negative_height() {
    let ring = RingProfile::uncolored(3.0, -4.0);
    assert_eq!(ring.border_distance(), 5.0);
}

#[test]
fn test_border_distance_zero_radius_is_height() {
    let ring = RingProfile::uncolored(0.0, -2.5);
    assert_eq!(ring.border_distance(), 2.5);
}

#[test]
fn test_uncolored_uses_green() {
    assert_eq!(RingProfile::uncolored(1.0, 1.0).color, Color::GREEN);
    assert_eq!(RingProfile::new(1.0, 1.0, Color::RED).color, Color::RED);
}

#[test]
fn test_validate_accepts_regular_ring() {
    assert!(RingProfile::uncolored(5.0, 1.4).validate("middle").is_ok());
    assert!(RingProfile::uncolored(0.0, 0.0).validate("flat").is_ok());
}

#[test]
fn test_validate_rejects_negative_radius() {
    match RingProfile::uncolored(-1.0, 2.0).validate("top") {
        Err(Error::DegenerateRing(msg)) => assert!(msg.contains("top")),
        other => panic!("expected DegenerateRing, got {:?}", other),
    }
}

#[test]
fn test_validate_rejects_non_finite_values() {
    assert!(matches!(
        RingProfile::uncolored(f32::NAN, 1.0).validate("bottom"),
        Err(Error::DegenerateRing(_))
    ));
    assert!(matches!(
        RingProfile::uncolored(1.0, f32::INFINITY).validate("bottom"),
        Err(Error::InvalidConfig(_))
    ));
}

#[test]
fn test_validate_accepts_zero_radius_at_any_height() {
    // The hypotenuse always covers |height|, so only the radius can degenerate
    for height in [-50.0, -1.0, 0.0, 3.0, 1000.0] {
        let ring = RingProfile::uncolored(0.0, height);
        assert!(ring.validate("pole").is_ok());
        assert!(ring.border_distance() >= ring.height.abs());
    }
}
