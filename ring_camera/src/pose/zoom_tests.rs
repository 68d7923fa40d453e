use super::*;

#[test]
fn test_ratio_at_or_below_start_speed() {
    let zoom = ZoomConfig::default();
    assert_eq!(zoom.extra_distance_ratio(0.0), 0.1);
    assert_eq!(zoom.extra_distance_ratio(10.0), 0.1);
}

#[test]
fn test_ratio_at_or_above_cap_speed() {
    let zoom = ZoomConfig::default();
    assert!((zoom.extra_distance_ratio(15.0) - 0.3).abs() < 1e-6);
    assert!((zoom.extra_distance_ratio(100.0) - 0.3).abs() < 1e-6);
}

#[test]
fn test_ratio_linear_in_between() {
    let zoom = ZoomConfig::default();
    assert!((zoom.extra_distance_ratio(12.5) - 0.2).abs() < 1e-6);
    assert!((zoom.extra_distance_ratio(11.0) - 0.14).abs() < 1e-6);
}

#[test]
fn test_zero_width_ramp_is_a_step() {
    let zoom = ZoomConfig { start_speed: 5.0, cap_speed: 5.0, ..ZoomConfig::default() };
    assert_eq!(zoom.speed_ratio(4.9), 0.0);
    assert_eq!(zoom.speed_ratio(5.0), 1.0);
}

#[test]
fn test_apply_scales_distance() {
    let zoom = ZoomConfig::default();
    let distance = zoom.apply(4.0, Some(Vec3::new(0.0, 0.0, -15.0)));
    assert!((distance - 5.2).abs() < 1e-5);
}

#[test]
fn test_apply_without_velocity_is_unchanged() {
    assert_eq!(ZoomConfig::default().apply(4.0, None), 4.0);
}

#[test]
fn test_apply_disabled_is_unchanged() {
    assert_eq!(ZoomConfig::disabled().apply(4.0, Some(Vec3::X * 50.0)), 4.0);
}
