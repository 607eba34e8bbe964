use slimebody::{ForceMode, Particle, Vec, Vec2};

#[test]
fn impulse_scales_by_inverse_mass() {
    let mut p = Particle::new(Vec2::new(0.0f32, 0.0), 2.0, 0.0);
    p.apply(Vec2::new(4.0, 0.0), ForceMode::Impulse);
    assert_eq!(p.vel, Vec2::new(2.0, 0.0));
    assert_eq!(p.force, Vec2::zero());
}

#[test]
fn force_waits_for_integration() {
    let mut p = Particle::new(Vec2::new(0.0f32, 0.0), 1.0, 0.0);
    p.apply(Vec2::new(0.0, 10.0), ForceMode::Force);
    assert_eq!(p.vel, Vec2::zero());
    p.integrate(0.1, Vec2::zero(), true);
    assert!((p.vel.y - 1.0).abs() < 1e-6);
    assert!((p.pos.y - 0.1).abs() < 1e-6);
    assert_eq!(p.force, Vec2::zero());
}

#[test]
fn drag_slows_without_reversing() {
    let mut p = Particle::new(Vec2::new(0.0f32, 0.0), 1.0, 20.0);
    p.vel = Vec2::new(5.0, 0.0);
    p.integrate(1.0 / 50.0, Vec2::zero(), true);
    assert!(p.vel.x > 0.0 && p.vel.x < 5.0, "vel.x = {}", p.vel.x);
}

#[test]
fn zero_gravity_scale_ignores_world_gravity() {
    let mut p = Particle::new(Vec2::new(0.0f32, 0.0), 1.0, 0.0);
    p.gravity_scale = 0.0;
    p.integrate(1.0 / 60.0, Vec2::new(0.0, -9.81), false);
    assert_eq!(p.vel, Vec2::zero());
}
