//! Configuration types for the ring solver and the boss controller.

use crate::arena::ArenaBounds;
use crate::easing::Easing;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::probe::LayerMask;
use crate::vec::{Vec, Vec2};

/// Per-step solver settings shared by every ring in a world.
///
/// # Builder Pattern
/// ```
/// use slimebody::config::SolverConfig;
/// use slimebody::vec::Vec2;
///
/// let config: SolverConfig<f32> = SolverConfig::new()
///     .with_world_gravity(Vec2::new(0.0, -9.81))
///     .with_link_iterations(6);
/// ```
#[derive(Clone, Debug)]
pub struct SolverConfig<F: Float> {
    /// Host world gravity. Only reaches masses whose gravity scale is
    /// non-zero, which initialized rings never have. Default: zero.
    pub world_gravity: Vec2<F>,
    /// Relaxation passes over the rim links per step. Default: 4.
    pub link_iterations: usize,
}

impl<F: Float> SolverConfig<F> {
    pub fn new() -> Self {
        SolverConfig {
            world_gravity: Vec2::zero(),
            link_iterations: 4,
        }
    }

    pub fn with_world_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.world_gravity = gravity;
        self
    }

    pub fn with_link_iterations(mut self, iterations: usize) -> Self {
        self.link_iterations = iterations;
        self
    }
}

impl<F: Float> Default for SolverConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Build-time description of a particle ring.
///
/// Radii are absolute distances from the center mass. Angle ratios are
/// fractions of the ideal spacing `2π / point_count`.
#[derive(Clone, Debug)]
pub struct RingConfig<F: Float> {
    pub point_count: usize,
    pub radius: F,
    pub point_mass: F,
    pub center_mass: F,
    pub base_drag: F,

    /// Inside this distance a particle gets kicked outward.
    pub hard_core_radius: F,
    /// Between hard core and this distance drag ramps up.
    pub soft_core_radius: F,
    pub max_radial_drag: F,
    pub radial_push_force: F,

    pub hard_angle_ratio: F,
    pub soft_angle_ratio: F,
    pub max_angular_repulsion: F,
    pub max_angular_braking: F,

    pub bending_stiffness: F,
    /// 0 tolerates a flat rim, 1 demands a pronounced bulge.
    pub surface_smoothness: F,

    pub spoke_frequency: F,
    pub spoke_damping_ratio: F,
    pub rim_stiffness: F,

    pub gravity_magnitude: F,

    pub wobble_speed: F,
    pub wobble_scale: F,
    pub wobble_force: F,
    pub noise_seed: u32,

    pub bounds: Option<ArenaBounds<F>>,
}

impl<F: Float> RingConfig<F> {
    pub fn new() -> Self {
        RingConfig {
            point_count: 16,
            radius: F::from_f32(2.5),
            point_mass: F::from_f32(0.5),
            center_mass: F::one(),
            base_drag: F::one(),
            hard_core_radius: F::one(),
            soft_core_radius: F::two(),
            max_radial_drag: F::from_f32(20.0),
            radial_push_force: F::from_f32(50.0),
            hard_angle_ratio: F::from_f32(0.3),
            soft_angle_ratio: F::from_f32(0.7),
            max_angular_repulsion: F::from_f32(40.0),
            max_angular_braking: F::from_f32(5.0),
            bending_stiffness: F::from_f32(60.0),
            surface_smoothness: F::half(),
            spoke_frequency: F::from_f32(3.0),
            spoke_damping_ratio: F::half(),
            rim_stiffness: F::one(),
            gravity_magnitude: F::from_f32(30.0),
            wobble_speed: F::from_f32(3.0),
            wobble_scale: F::half(),
            wobble_force: F::from_f32(50.0),
            noise_seed: 0,
            bounds: None,
        }
    }

    pub fn with_points(mut self, count: usize, radius: F) -> Self {
        self.point_count = count;
        self.radius = radius;
        self
    }

    pub fn with_masses(mut self, point_mass: F, center_mass: F) -> Self {
        self.point_mass = point_mass;
        self.center_mass = center_mass;
        self
    }

    pub fn with_core(mut self, hard: F, soft: F) -> Self {
        self.hard_core_radius = hard;
        self.soft_core_radius = soft;
        self
    }

    pub fn with_angle_ratios(mut self, hard: F, soft: F) -> Self {
        self.hard_angle_ratio = hard;
        self.soft_angle_ratio = soft;
        self
    }

    pub fn with_bending(mut self, stiffness: F, smoothness: F) -> Self {
        self.bending_stiffness = stiffness;
        self.surface_smoothness = smoothness;
        self
    }

    pub fn with_spokes(mut self, frequency: F, damping_ratio: F) -> Self {
        self.spoke_frequency = frequency;
        self.spoke_damping_ratio = damping_ratio;
        self
    }

    pub fn with_gravity(mut self, magnitude: F) -> Self {
        self.gravity_magnitude = magnitude;
        self
    }

    pub fn with_wobble(mut self, speed: F, force: F) -> Self {
        self.wobble_speed = speed;
        self.wobble_force = force;
        self
    }

    pub fn with_noise_seed(mut self, seed: u32) -> Self {
        self.noise_seed = seed;
        self
    }

    pub fn with_bounds(mut self, bounds: ArenaBounds<F>) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        let zero = F::zero();
        if self.point_count < 3 {
            return Err(PhysicsError::InsufficientSegments);
        }
        if !(self.radius > zero) {
            return Err(PhysicsError::InvalidRadius);
        }
        let finite_positive = |m: F| m > zero && m.is_finite();
        if !finite_positive(self.point_mass) || !finite_positive(self.center_mass) {
            return Err(PhysicsError::InvalidMass);
        }
        if !(self.hard_core_radius > zero) || !(self.hard_core_radius < self.soft_core_radius) {
            return Err(PhysicsError::DegenerateRadialBand);
        }
        if !(self.hard_angle_ratio > zero)
            || !(self.hard_angle_ratio < self.soft_angle_ratio)
            || self.soft_angle_ratio > F::one()
        {
            return Err(PhysicsError::DegenerateAngularBand);
        }
        if !(self.surface_smoothness >= zero) || self.surface_smoothness > F::one() {
            return Err(PhysicsError::InvalidSmoothness);
        }
        if !(self.bending_stiffness >= zero) || !(self.rim_stiffness >= zero) {
            return Err(PhysicsError::InvalidStiffness);
        }
        if !(self.spoke_frequency > zero) {
            return Err(PhysicsError::InvalidFrequency);
        }
        if !(self.spoke_damping_ratio > zero) {
            return Err(PhysicsError::InvalidDampingRatio);
        }
        Ok(())
    }
}

impl<F: Float> Default for RingConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Timings, forces and probe settings for the boss controller.
#[derive(Clone, Debug)]
pub struct BossConfig<F: Float> {
    pub spawn_point: Vec2<F>,
    pub spawn_duration: F,
    pub spawn_start_scale: F,

    pub move_speed: F,
    pub roam_wave_frequency: F,
    /// Seconds of roaming before the next charge is considered.
    pub jump_interval: F,
    /// Seconds in Fall before gravity is re-enabled without a landing.
    pub fall_timeout: F,

    pub jump_charge_time: F,
    pub jump_force: F,
    pub squish_force: F,
    pub charge_curve: Easing,
    pub dash_multiplier: F,
    /// Fraction of the dash impulse every mass receives on launch.
    pub edge_assist: F,
    pub stick_impulse: F,

    pub idle_wobble_speed: F,
    pub charge_wobble_speed: F,

    pub terrain_layer: LayerMask,
    pub ground_check_distance: F,
    pub target_probe_distance: F,
    pub fallback_landing_distance: F,
    /// Distance under which a candidate axis counts as the current normal.
    pub normal_tolerance: F,

    pub seed: u64,
}

impl<F: Float> BossConfig<F> {
    pub fn new() -> Self {
        BossConfig {
            spawn_point: Vec2::zero(),
            spawn_duration: F::one(),
            spawn_start_scale: F::from_f32(0.1),
            move_speed: F::from_f32(5.0),
            roam_wave_frequency: F::two(),
            jump_interval: F::two(),
            fall_timeout: F::from_f32(3.0),
            jump_charge_time: F::from_f32(0.8),
            jump_force: F::from_f32(40.0),
            squish_force: F::from_f32(120.0),
            charge_curve: Easing::Linear,
            dash_multiplier: F::from_f32(2.5),
            edge_assist: F::from_f32(0.9),
            stick_impulse: F::from_f32(20.0),
            idle_wobble_speed: F::from_f32(3.0),
            charge_wobble_speed: F::from_f32(10.0),
            terrain_layer: LayerMask::ALL,
            ground_check_distance: F::from_f32(3.5),
            target_probe_distance: F::from_f32(50.0),
            fallback_landing_distance: F::from_f32(10.0),
            normal_tolerance: F::from_f32(0.1),
            seed: 0,
        }
    }

    pub fn with_spawn(mut self, point: Vec2<F>, duration: F) -> Self {
        self.spawn_point = point;
        self.spawn_duration = duration;
        self
    }

    pub fn with_jump(mut self, interval: F, charge_time: F, force: F) -> Self {
        self.jump_interval = interval;
        self.jump_charge_time = charge_time;
        self.jump_force = force;
        self
    }

    pub fn with_fall_timeout(mut self, timeout: F) -> Self {
        self.fall_timeout = timeout;
        self
    }

    pub fn with_squish(mut self, force: F, curve: Easing) -> Self {
        self.squish_force = force;
        self.charge_curve = curve;
        self
    }

    pub fn with_terrain_layer(mut self, layer: LayerMask) -> Self {
        self.terrain_layer = layer;
        self
    }

    pub fn with_ground_check_distance(mut self, distance: F) -> Self {
        self.ground_check_distance = distance;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        let zero = F::zero();
        let durations = [
            ("spawn_duration", self.spawn_duration),
            ("jump_interval", self.jump_interval),
            ("jump_charge_time", self.jump_charge_time),
            ("fall_timeout", self.fall_timeout),
        ];
        for (name, value) in durations {
            if !(value > zero) {
                return Err(PhysicsError::InvalidDuration { name });
            }
        }
        let distances = [
            ("ground_check_distance", self.ground_check_distance),
            ("target_probe_distance", self.target_probe_distance),
            ("fallback_landing_distance", self.fallback_landing_distance),
        ];
        for (name, value) in distances {
            if !(value > zero) {
                return Err(PhysicsError::InvalidDistance { name });
            }
        }
        Ok(())
    }
}

impl<F: Float> Default for BossConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
