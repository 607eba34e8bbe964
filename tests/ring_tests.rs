use slimebody::Vec as _;
use slimebody::{ForceMode, NoOpStepObserver, ParticleRing, RingConfig, SolverConfig, StepObserver, Vec2};

const DT: f32 = 1.0 / 50.0;

fn still_config() -> RingConfig<f32> {
    RingConfig::new().with_wobble(3.0, 0.0)
}

fn live_ring(config: &RingConfig<f32>) -> ParticleRing<f32> {
    let mut ring = ParticleRing::build(Vec2::new(0.0, 0.0), config).unwrap();
    ring.set_simulation_enabled(true);
    ring
}

#[test]
fn radial_floor_holds_under_inward_squeeze() {
    let config = RingConfig::new();
    let mut ring = live_ring(&config);
    let solver = SolverConfig::new();

    for step in 0..300 {
        let hub = ring.center_position();
        for p in ring.points_mut() {
            let inward = (hub - p.pos).normalize();
            p.apply_force(inward.scale(40.0));
        }
        ring.fixed_step(DT, &solver, &mut NoOpStepObserver);

        for (i, d) in ring.radial_distances().into_iter().enumerate() {
            assert!(d.is_finite(), "step {}: particle {} diverged", step, i);
            assert!(
                d >= config.hard_core_radius * 0.8,
                "step {}: particle {} collapsed to {} (hard limit {})",
                step, i, d, config.hard_core_radius,
            );
            assert!(d <= config.radius * 1.5, "step {}: particle {} drifted out to {}", step, i, d);
        }
    }
}

#[test]
fn angular_spacing_recovers_from_pinch() {
    let mut ring = live_ring(&RingConfig::new());
    let solver = SolverConfig::new();
    let min_angle = ring.params().min_angle_limit;

    // Slide particle 1 almost on top of particle 0.
    let angle: f32 = 0.02;
    ring.points_mut()[1].pos = Vec2::new(2.5 * angle.cos(), 2.5 * angle.sin());
    let pinched = ring.adjacent_angles()[0];
    assert!(pinched < min_angle, "setup should violate the floor: {} vs {}", pinched, min_angle);

    let mut below_streak = 0;
    for step in 0..100 {
        let smallest = ring
            .adjacent_angles()
            .into_iter()
            .fold(f32::MAX, f32::min);
        if smallest < min_angle - 0.01 {
            below_streak += 1;
        } else {
            below_streak = 0;
        }
        assert!(below_streak <= 1, "step {}: angle {} stuck under floor {}", step, smallest, min_angle);
        ring.fixed_step(DT, &solver, &mut NoOpStepObserver);
    }
}

#[test]
fn notch_is_pushed_back_out() {
    let config = still_config();
    let mut ring = live_ring(&config);
    let solver = SolverConfig::new();

    let dir = ring.points()[4].pos.normalize();
    ring.points_mut()[4].pos = dir.scale(1.6);
    let (height, min) = ring.bulge_heights()[4];
    assert!(height < 0.0, "notch should be concave, height {} (min {})", height, min);

    for _ in 0..100 {
        ring.fixed_step(DT, &solver, &mut NoOpStepObserver);
    }

    for (i, (height, min)) in ring.bulge_heights().into_iter().enumerate() {
        assert!(
            height >= min - 0.05,
            "particle {} still concave: height {} below minimum {}",
            i, height, min,
        );
    }
}

#[test]
fn disabled_step_leaves_velocities_alone() {
    let mut ring = ParticleRing::build(Vec2::new(0.0f32, 0.0), &still_config()).unwrap();
    ring.gravity_mut().set_enabled(true);
    ring.add_force_to_all(Vec2::new(1.5, -0.5), ForceMode::Impulse);
    let before: Vec<_> = ring.points().iter().map(|p| p.vel).collect();
    let center_before = ring.center_velocity();

    for _ in 0..20 {
        ring.fixed_step(DT, &SolverConfig::new(), &mut NoOpStepObserver);
    }

    assert_eq!(ring.center_velocity(), center_before);
    for (p, v) in ring.points().iter().zip(before.iter()) {
        assert_eq!(p.vel, *v, "disabled ring should only drift");
    }
}

#[test]
fn disabled_step_only_wobbles_radially() {
    let mut ring = ParticleRing::build(Vec2::new(0.0f32, 0.0), &RingConfig::new()).unwrap();
    let before: Vec<_> = ring.points().iter().map(|p| p.vel).collect();

    ring.fixed_step(DT, &SolverConfig::new(), &mut NoOpStepObserver);

    assert_eq!(ring.center_velocity(), Vec2::zero());
    for (i, (p, v)) in ring.points().iter().zip(before.iter()).enumerate() {
        let dv = p.vel - *v;
        let radial = p.pos.normalize();
        assert!(
            dv.cross(radial).abs() < 1e-4,
            "particle {} picked up tangential velocity {:?}",
            i, dv,
        );
    }
}

#[test]
fn host_gravity_is_ignored_after_initialize() {
    let mut ring = live_ring(&still_config());
    let solver = SolverConfig::new().with_world_gravity(Vec2::new(0.0, -9.81));
    let start = ring.center_position();

    for _ in 0..100 {
        ring.fixed_step(DT, &solver, &mut NoOpStepObserver);
    }

    let moved = ring.center_position().distance(start);
    assert!(moved < 1e-3, "world gravity leaked into the ring: moved {}", moved);
}

#[test]
fn own_gravity_pulls_along_direction() {
    let mut ring = live_ring(&still_config());
    let gravity = ring.gravity_mut();
    gravity.set_direction(Vec2::new(1.0, 0.0));
    gravity.set_enabled(true);

    for _ in 0..25 {
        ring.fixed_step(DT, &SolverConfig::new(), &mut NoOpStepObserver);
    }

    assert!(ring.center_position().x > 0.1, "center at {:?}", ring.center_position());
    assert!(ring.center_position().y.abs() < 0.05);
}

#[test]
fn uninitialized_ring_ignores_everything() {
    let mut ring = ParticleRing::<f32>::with_config(&RingConfig::new()).unwrap();
    ring.set_simulation_enabled(true);
    ring.add_force_to_all(Vec2::new(0.0, 10.0), ForceMode::Force);
    ring.fixed_step(DT, &SolverConfig::new(), &mut NoOpStepObserver);
    assert!(!ring.is_initialized());
    assert_eq!(ring.particle_count(), 0);
}

#[derive(Default)]
struct Counter {
    wobble: usize,
    constraints: usize,
    integrate: usize,
    complete: usize,
}

impl StepObserver for Counter {
    fn on_wobble(&mut self) { self.wobble += 1; }
    fn on_constraint_pass(&mut self) { self.constraints += 1; }
    fn on_integrate(&mut self) { self.integrate += 1; }
    fn on_step_complete(&mut self) { self.complete += 1; }
}

#[test]
fn observer_skips_constraints_while_disabled() {
    let mut ring = ParticleRing::build(Vec2::new(0.0f32, 0.0), &RingConfig::new()).unwrap();
    let mut counter = Counter::default();

    ring.fixed_step(DT, &SolverConfig::new(), &mut counter);
    ring.set_simulation_enabled(true);
    ring.fixed_step(DT, &SolverConfig::new(), &mut counter);

    assert_eq!(counter.wobble, 2);
    assert_eq!(counter.constraints, 1);
    assert_eq!(counter.integrate, 2);
    assert_eq!(counter.complete, 2);
}

#[test]
fn invalid_bands_are_rejected() {
    let bad = RingConfig::<f32>::new().with_core(2.0, 1.0);
    assert!(ParticleRing::build(Vec2::zero(), &bad).is_err());
    let bad = RingConfig::<f32>::new().with_angle_ratios(0.7, 0.3);
    assert!(ParticleRing::build(Vec2::zero(), &bad).is_err());
}
