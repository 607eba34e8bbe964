use slimebody::constraint::bulge_height;
use slimebody::{ConstraintParams, Particle, RimLink, RingConfig, Vec, Vec2};

fn params() -> ConstraintParams<f32> {
    ConstraintParams::from_config(&RingConfig::new())
}

#[test]
fn angle_bands_derive_from_point_count() {
    let p = params();
    let ideal = 2.0 * core::f32::consts::PI / 16.0;
    assert!((p.ideal_delta_angle - ideal).abs() < 1e-6);
    assert!(p.min_angle_limit < p.cushion_angle_limit);
    assert!(p.cushion_angle_limit <= p.ideal_delta_angle);
}

#[test]
fn radial_hard_floor_kicks_outward_and_clears_drag() {
    let p = params();
    let mut particle = Particle::new(Vec2::new(0.5f32, 0.0), 0.5, 1.0);
    p.solve_radial(&mut particle, Vec2::zero());
    assert_eq!(particle.drag, 0.0);
    assert!(particle.vel.x > 0.0);
    assert_eq!(particle.vel.y, 0.0);
}

#[test]
fn radial_cushion_ramps_drag() {
    let p = params();
    let mut shallow = Particle::new(Vec2::new(1.9f32, 0.0), 0.5, 1.0);
    let mut deep = Particle::new(Vec2::new(1.1f32, 0.0), 0.5, 1.0);
    p.solve_radial(&mut shallow, Vec2::zero());
    p.solve_radial(&mut deep, Vec2::zero());
    assert!(deep.drag > shallow.drag);
    assert!(shallow.drag > p.base_drag);
    assert!(deep.drag < p.max_radial_drag);
    assert_eq!(deep.vel, Vec2::zero());
}

#[test]
fn radial_outside_band_restores_base_drag() {
    let p = params();
    let mut particle = Particle::new(Vec2::new(2.5f32, 0.0), 0.5, 0.0);
    p.solve_radial(&mut particle, Vec2::zero());
    assert_eq!(particle.drag, p.base_drag);
}

#[test]
fn angular_hard_floor_separates_pair() {
    let p = params();
    let mut ps = [
        Particle::new(Vec2::new(2.5f32, 0.0), 0.5, 1.0),
        Particle::new(Vec2::new(2.5f32, 0.05), 0.5, 1.0),
    ];
    p.solve_angular(&mut ps, 0, 1, Vec2::zero());
    assert!(ps[0].vel.y < 0.0);
    assert!(ps[1].vel.y > 0.0);
}

#[test]
fn angular_cushion_uses_forces_not_impulses() {
    let p = params();
    let angle = (p.min_angle_limit + p.cushion_angle_limit) * 0.5;
    let mut ps = [
        Particle::new(Vec2::new(2.5f32, 0.0), 0.5, 1.0),
        Particle::new(Vec2::new(2.5 * angle.cos(), 2.5 * angle.sin()), 0.5, 1.0),
    ];
    p.solve_angular(&mut ps, 0, 1, Vec2::zero());
    assert_eq!(ps[0].vel, Vec2::zero());
    assert!(ps[0].force.length() > 0.0);
    let tangent = (ps[1].pos - ps[0].pos).normalize();
    assert!(ps[1].force.dot(tangent) > 0.0);
    assert!(ps[0].force.dot(tangent) < 0.0);
}

#[test]
fn bulge_height_sign_follows_convexity() {
    let c = Vec2::zero();
    let p1 = Vec2::new(-1.0f32, 2.0);
    let p3 = Vec2::new(1.0f32, 2.0);
    assert!(bulge_height(p1, Vec2::new(0.0, 2.5), p3, c) > 0.0);
    assert!(bulge_height(p1, Vec2::new(0.0, 1.5), p3, c) < 0.0);
}

#[test]
fn bending_pushes_notch_out_with_reaction() {
    let p = params();
    let mut ps = [
        Particle::new(Vec2::new(-1.0f32, 2.0), 0.5, 1.0),
        Particle::new(Vec2::new(0.0f32, 1.5), 0.5, 1.0),
        Particle::new(Vec2::new(1.0f32, 2.0), 0.5, 1.0),
    ];
    ps[1].vel = Vec2::new(0.0, -10.0);
    p.solve_bending(&mut ps, 0, 1, 2, Vec2::zero());
    assert!(ps[1].force.y > 0.0);
    assert!(ps[0].force.y < 0.0 && ps[2].force.y < 0.0);
    let total = ps[0].force + ps[1].force + ps[2].force;
    assert!(total.length() < 1e-4);
    assert!((ps[1].vel.y + 9.0).abs() < 1e-5, "vel.y = {}", ps[1].vel.y);
}

#[test]
fn rim_link_restores_length() {
    let mut ps = [
        Particle::new(Vec2::new(0.0f32, 0.0), 1.0, 0.0),
        Particle::new(Vec2::new(3.0f32, 0.0), 1.0, 0.0),
    ];
    RimLink::new(0, 1, 1.0, 1.0).solve(&mut ps);
    assert!((ps[0].pos.distance(ps[1].pos) - 1.0).abs() < 1e-5);
}
