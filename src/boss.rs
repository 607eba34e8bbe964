//! Gravity-switching boss: drives a [`ParticleRing`] through spawn, fall,
//! roam and charge.

use crate::config::{BossConfig, SolverConfig};
use crate::context::BossContext;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::particle::ForceMode;
use crate::probe::{SurfaceHit, SurfaceProbe, TerrainQuery};
use crate::ring::ParticleRing;
use crate::state::{BossEvent, BossState, transition};
use crate::vec::{Vec, Vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::vec::Vec as AllocVec;

/// Read-only snapshot of what the boss believes about its surroundings.
#[derive(Clone, Debug, PartialEq)]
pub struct GroundReadout<F: Float> {
    pub state: BossState,
    pub gravity_direction: Vec2<F>,
    pub gravity_enabled: bool,
    pub surface_normal: Vec2<F>,
    pub predicted_landing_point: Vec2<F>,
    pub target_direction: Vec2<F>,
    pub has_target: bool,
}

/// Owns one ring and switches its gravity from surface to surface.
///
/// The terrain is only ever asked single ray questions through
/// [`TerrainQuery`]; everything else is plain data on the ring.
pub struct BossController<F: Float, T: TerrainQuery<F>> {
    ring: ParticleRing<F>,
    solver: SolverConfig<F>,
    config: BossConfig<F>,
    context: BossContext<F>,
    state: BossState,
    terrain: T,
    rng: StdRng,
    ground_probe: SurfaceProbe<F>,
    target_probe: SurfaceProbe<F>,
    active: bool,
}

impl<F: Float, T: TerrainQuery<F>> BossController<F, T> {
    /// Take ownership of an initialized ring and spawn immediately.
    pub fn new(
        ring: ParticleRing<F>,
        config: BossConfig<F>,
        terrain: T,
    ) -> Result<Self, PhysicsError> {
        config.validate()?;
        let mut boss = BossController {
            ring,
            solver: SolverConfig::new(),
            ground_probe: SurfaceProbe::new(config.ground_check_distance, config.terrain_layer),
            target_probe: SurfaceProbe::new(config.target_probe_distance, config.terrain_layer),
            rng: StdRng::seed_from_u64(config.seed),
            config,
            context: BossContext::new(),
            state: BossState::Spawn,
            terrain,
            active: false,
        };
        boss.on_spawn();
        Ok(boss)
    }

    pub fn with_solver_config(mut self, solver: SolverConfig<F>) -> Self {
        self.solver = solver;
        self
    }

    pub fn fixed_step(&mut self, dt: F) {
        self.fixed_step_observed(dt, &mut NoOpStepObserver);
    }

    /// Tick the current state, apply whatever transition it reports, then
    /// step the ring. Inactive (despawned) bosses and bosses around an
    /// uninitialized ring do nothing.
    pub fn fixed_step_observed<O: StepObserver>(&mut self, dt: F, observer: &mut O) {
        if !self.active || !self.ring.is_initialized() {
            return;
        }
        let event = match self.state {
            BossState::Spawn => self.tick_spawn(dt),
            BossState::Fall => self.tick_fall(dt),
            BossState::Roam => self.tick_roam(dt),
            BossState::Charge => self.tick_charge(dt),
        };
        if let Some(event) = event {
            self.dispatch(event, observer);
        }
        self.ring.fixed_step(dt, &self.solver, observer);
    }

    fn dispatch<O: StepObserver>(&mut self, event: BossEvent, observer: &mut O) {
        let from = self.state;
        let to = transition(from, event);
        if to == from {
            return;
        }
        self.exit_state(from);
        self.state = to;
        self.enter_state(to);
        log::debug!("boss {:?} -> {:?} on {:?}", from, to, event);
        observer.on_transition(from, to);
    }

    fn enter_state(&mut self, state: BossState) {
        match state {
            BossState::Spawn => {
                self.ring.reset_to(self.config.spawn_point);
                let gravity = self.ring.gravity_mut();
                gravity.set_direction(Vec2::down());
                gravity.set_enabled(false);
                self.ring.set_simulation_enabled(false);
                self.context.spawn_elapsed = F::zero();
                self.context.spawn_scale = self.config.spawn_start_scale;
                self.ring.set_pose_scale(self.config.spawn_start_scale);
            }
            BossState::Fall => {
                self.ring.gravity_mut().set_enabled(false);
                self.context.fall_elapsed = F::zero();
            }
            BossState::Roam => {
                self.ring.gravity_mut().set_enabled(true);
                self.context.has_target = false;
                self.context.roam_elapsed = F::zero();
                self.context.roam_direction = if self.rng.gen_bool(0.5) {
                    F::one()
                } else {
                    -F::one()
                };
            }
            BossState::Charge => {
                self.ring.gravity_mut().set_enabled(false);
                self.context.charge_elapsed = F::zero();
            }
        }
    }

    fn exit_state(&mut self, state: BossState) {
        if state == BossState::Charge {
            self.ring.wobble_mut().set_speed(self.config.idle_wobble_speed);
        }
    }

    fn tick_spawn(&mut self, dt: F) -> Option<BossEvent> {
        self.context.spawn_elapsed = self.context.spawn_elapsed + dt;
        let t = self.context.spawn_elapsed / self.config.spawn_duration;
        if t < F::one() {
            let eased = crate::easing::ease_out_back(t);
            let scale = self.config.spawn_start_scale.lerp(F::one(), eased);
            self.context.spawn_scale = scale;
            self.ring.set_pose_scale(scale);
            return None;
        }

        if !self.ring.simulation_enabled() {
            self.context.spawn_scale = F::one();
            self.ring.set_pose_scale(F::one());
            self.ring.set_simulation_enabled(true);
            self.ring.gravity_mut().set_enabled(true);
        }

        self.check_ground(Vec2::down()).map(|_| BossEvent::SpawnSettled)
    }

    /// Short ground probe from the center. Every hit refreshes the surface
    /// normal.
    fn check_ground(&mut self, direction: Vec2<F>) -> Option<SurfaceHit<F>> {
        let origin = self.ring.center_position();
        let hit = self.ground_probe.cast(&self.terrain, origin, direction)?;
        self.context.surface_normal = hit.normal.normalize();
        Some(hit)
    }

    fn tick_fall(&mut self, dt: F) -> Option<BossEvent> {
        self.context.fall_elapsed = self.context.fall_elapsed + dt;
        let timed_out = self.context.fall_elapsed > self.config.fall_timeout;
        if timed_out && !self.ring.gravity().is_enabled() {
            self.ring.gravity_mut().set_enabled(true);
            log::debug!("no landing after {:?} s, gravity back on", self.context.fall_elapsed);
        }

        let velocity = self.ring.center_velocity();
        let direction = if velocity.length_sq().is_near_zero(F::from_f32(1e-8)) {
            self.ring.gravity().direction()
        } else {
            velocity
        };
        let hit = self.check_ground(direction)?;
        self.land(&hit);
        Some(BossEvent::Landed)
    }

    fn land(&mut self, hit: &SurfaceHit<F>) {
        let normal = hit.normal.normalize();
        let gravity = self.ring.gravity_mut();
        gravity.set_direction(-normal);
        gravity.set_enabled(true);
        self.ring.halt_center();
        self.ring
            .apply_to_center(normal.scale(-self.config.stick_impulse), ForceMode::Impulse);
        log::debug!("landed at {:?}, normal {:?}", hit.point, normal);
    }

    fn tick_roam(&mut self, dt: F) -> Option<BossEvent> {
        self.context.roam_elapsed = self.context.roam_elapsed + dt;
        let n = self.context.surface_normal;
        let tangent = Vec2::new(n.y, -n.x);
        let wave = (self.context.roam_elapsed * self.config.roam_wave_frequency).sin();
        let push = wave * self.config.move_speed * self.context.roam_direction;
        self.ring.apply_to_center(tangent.scale(push), ForceMode::Force);

        if !(self.context.roam_elapsed > self.config.jump_interval) {
            return None;
        }
        let down = self.ring.gravity().direction();
        self.check_ground(down)?;
        self.pick_new_target_surface();
        Some(BossEvent::TargetChosen)
    }

    fn tick_charge(&mut self, dt: F) -> Option<BossEvent> {
        self.context.charge_elapsed = self.context.charge_elapsed + dt;
        if self.context.charge_elapsed < self.config.jump_charge_time {
            let progress = self
                .config
                .charge_curve
                .eval(self.context.charge_elapsed / self.config.jump_charge_time);
            let squish = F::zero().lerp(self.config.squish_force, progress);
            let down = self.ring.gravity().direction();
            self.ring.add_force_to_all(down.scale(squish), ForceMode::Force);
            self.ring.wobble_mut().set_speed(self.config.charge_wobble_speed);
            return None;
        }
        self.launch();
        Some(BossEvent::Launched)
    }

    fn launch(&mut self) {
        self.ring.wobble_mut().set_speed(self.config.idle_wobble_speed);
        let direction = if self.context.has_target {
            self.context.target_direction
        } else {
            -self.ring.gravity().direction()
        };
        let dash = self.config.jump_force * self.config.dash_multiplier;
        self.ring.apply_to_center(direction.scale(dash), ForceMode::Impulse);
        self.ring
            .add_force_to_all(direction.scale(dash * self.config.edge_assist), ForceMode::Impulse);
    }

    /// Choose one of the four axes other than the current surface normal and
    /// look for where it leads. A miss still yields a target, with a landing
    /// point a fixed distance out.
    pub fn pick_new_target_surface(&mut self) {
        if !self.ring.is_initialized() {
            return;
        }
        let candidates =
            candidate_directions(self.context.surface_normal, self.config.normal_tolerance);
        if candidates.is_empty() {
            return;
        }
        let direction = candidates[self.rng.gen_range(0..candidates.len())];
        let origin = self.ring.center_position();
        let landing = match self.target_probe.cast(&self.terrain, origin, direction) {
            Some(hit) => hit.point,
            None => {
                let point = origin + direction.scale(self.config.fallback_landing_distance);
                log::warn!("no surface along {:?}, assuming landing at {:?}", direction, point);
                point
            }
        };
        self.context.target_direction = direction;
        self.context.predicted_landing_point = landing;
        self.context.has_target = true;
        log::trace!("target {:?}, landing at {:?}", direction, landing);
    }

    /// Take the boss out of a pool: clear all context and start spawning.
    pub fn on_spawn(&mut self) {
        self.context.reset();
        self.ring.gravity_mut().set_enabled(false);
        self.ring.wobble_mut().set_speed(self.config.idle_wobble_speed);
        self.active = true;

        let from = self.state;
        self.state = transition(from, BossEvent::Respawn);
        if from != self.state {
            self.exit_state(from);
            log::debug!("boss {:?} -> {:?} on respawn", from, self.state);
        }
        self.enter_state(self.state);
    }

    /// Return the boss to a pool: motion stopped, simulation and gravity off.
    pub fn on_despawn(&mut self) {
        self.ring.zero_velocities();
        self.ring.set_simulation_enabled(false);
        self.ring.gravity_mut().set_enabled(false);
        self.ring.wobble_mut().set_speed(self.config.idle_wobble_speed);
        self.active = false;
    }

    pub fn add_force_to_all(&mut self, force: Vec2<F>, mode: ForceMode) {
        self.ring.add_force_to_all(force, mode);
    }

    pub fn readout(&self) -> GroundReadout<F> {
        let gravity = self.ring.gravity();
        GroundReadout {
            state: self.state,
            gravity_direction: gravity.direction(),
            gravity_enabled: gravity.is_enabled(),
            surface_normal: self.context.surface_normal,
            predicted_landing_point: self.context.predicted_landing_point,
            target_direction: self.context.target_direction,
            has_target: self.context.has_target,
        }
    }

    pub fn state(&self) -> BossState { self.state }
    pub fn is_active(&self) -> bool { self.active }
    pub fn context(&self) -> &BossContext<F> { &self.context }
    pub fn context_mut(&mut self) -> &mut BossContext<F> { &mut self.context }
    pub fn config(&self) -> &BossConfig<F> { &self.config }
    pub fn ring(&self) -> &ParticleRing<F> { &self.ring }
    pub fn ring_mut(&mut self) -> &mut ParticleRing<F> { &mut self.ring }
    pub fn terrain(&self) -> &T { &self.terrain }
    pub fn terrain_mut(&mut self) -> &mut T { &mut self.terrain }
}

/// The four world axes, minus any within `tolerance` of `normal`.
pub fn candidate_directions<F: Float>(normal: Vec2<F>, tolerance: F) -> AllocVec<Vec2<F>> {
    [Vec2::up(), Vec2::down(), Vec2::left(), Vec2::right()]
        .into_iter()
        .filter(|axis| !(axis.distance(normal) < tolerance))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_drop_current_normal() {
        let c = candidate_directions(Vec2::new(0.0f32, 1.0), 0.1);
        assert_eq!(c.len(), 3);
        assert!(!c.contains(&Vec2::up()));
    }

    #[test]
    fn tilted_normal_keeps_all_axes() {
        let n = Vec2::new(1.0f32, 1.0).normalize();
        assert_eq!(candidate_directions(n, 0.1).len(), 4);
    }

    #[test]
    fn near_axis_normal_is_excluded() {
        let n = Vec2::new(0.02f64, -0.9998).normalize();
        let c = candidate_directions(n, 0.1);
        assert_eq!(c.len(), 3);
        assert!(!c.contains(&Vec2::down()));
    }
}
