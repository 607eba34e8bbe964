//! The soft body: a closed ring of point masses around a center mass.

use crate::arena::ArenaBounds;
use crate::config::{RingConfig, SolverConfig};
use crate::constraint::{ConstraintParams, RimLink, RingRule, bulge_height};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::gravity::GravityField;
use crate::observer::StepObserver;
use crate::particle::{ForceMode, Particle};
use crate::spring::SpokeSpring;
use crate::vec::{Vec, Vec2};
use crate::wobble::AmbientWobble;
use std::vec::Vec as AllocVec;

/// N rim particles held in shape around one center mass by hand-written
/// rules: no joint solver, only forces, drag and a few positional links.
///
/// A ring without a center or without rim particles is uninitialized and
/// every operation on it is a no-op.
pub struct ParticleRing<F: Float> {
    center: Option<Particle<F>>,
    points: AllocVec<Particle<F>>,
    rest_offsets: AllocVec<Vec2<F>>,
    spokes: AllocVec<SpokeSpring<F>>,
    links: AllocVec<RimLink<F>>,
    params: ConstraintParams<F>,
    gravity: GravityField<F>,
    wobble: AmbientWobble<F>,
    bounds: Option<ArenaBounds<F>>,
    simulation_enabled: bool,
    spoke_frequency: F,
    spoke_damping_ratio: F,
    rim_stiffness: F,
}

impl<F: Float> ParticleRing<F> {
    /// An unbound ring carrying `config`'s parameters. Call
    /// [`initialize`](Self::initialize) to give it masses.
    pub fn with_config(config: &RingConfig<F>) -> Result<Self, PhysicsError> {
        config.validate()?;
        Ok(ParticleRing {
            center: None,
            points: AllocVec::new(),
            rest_offsets: AllocVec::new(),
            spokes: AllocVec::new(),
            links: AllocVec::new(),
            params: ConstraintParams::from_config(config),
            gravity: GravityField::new(config.gravity_magnitude),
            wobble: AmbientWobble::new(
                config.noise_seed,
                config.wobble_speed,
                config.wobble_scale,
                config.wobble_force,
            ),
            bounds: config.bounds.clone(),
            simulation_enabled: false,
            spoke_frequency: config.spoke_frequency,
            spoke_damping_ratio: config.spoke_damping_ratio,
            rim_stiffness: config.rim_stiffness,
        })
    }

    /// Lay out a circular ring around `center`: point i sits at angle
    /// `i * 2π / N`, counter-clockwise from +x.
    pub fn build(center: Vec2<F>, config: &RingConfig<F>) -> Result<Self, PhysicsError> {
        let mut ring = Self::with_config(config)?;
        let n = config.point_count;
        let two_pi = F::two() * F::pi();

        let mut points = AllocVec::with_capacity(n);
        for i in 0..n {
            let angle = two_pi * F::from_f32(i as f32) / F::from_f32(n as f32);
            let pos = Vec2::new(
                center.x + config.radius * angle.cos(),
                center.y + config.radius * angle.sin(),
            );
            points.push(Particle::new(pos, config.point_mass, config.base_drag));
        }
        let hub = Particle::new(center, config.center_mass, config.base_drag);
        ring.initialize(hub, points);
        Ok(ring)
    }

    /// Bind the center and the rim, in ring order. Zeroes every mass's
    /// world gravity scale and records the current layout as the rest pose
    /// for spokes, rim links and pose scaling.
    pub fn initialize(&mut self, center: Particle<F>, points: AllocVec<Particle<F>>) {
        let mut center = center;
        center.gravity_scale = F::zero();
        let mut points = points;
        for p in points.iter_mut() {
            p.gravity_scale = F::zero();
        }

        self.rest_offsets = points.iter().map(|p| p.pos - center.pos).collect();
        self.spokes = points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                SpokeSpring::new(
                    i,
                    p.pos.distance(center.pos),
                    self.spoke_frequency,
                    self.spoke_damping_ratio,
                    center.mass,
                    p.mass,
                )
            })
            .collect();

        let n = points.len();
        self.links = if n >= 3 {
            (0..n)
                .map(|i| RimLink::from_particles(i, (i + 1) % n, &points, self.rim_stiffness))
                .collect()
        } else {
            AllocVec::new()
        };

        self.center = Some(center);
        self.points = points;
    }

    pub fn is_initialized(&self) -> bool {
        self.center.is_some() && !self.points.is_empty()
    }

    /// One fixed simulation step.
    ///
    /// Wobble always runs. With simulation disabled the step ends there and
    /// the masses only drift on the wobble forces. Otherwise gravity, the
    /// ring rules (radial, angular, bending per particle in ring order),
    /// spokes, integration with drag, rim links and the arena clamp follow.
    pub fn fixed_step<O: StepObserver>(
        &mut self,
        dt: F,
        config: &SolverConfig<F>,
        observer: &mut O,
    ) {
        if !self.is_initialized() {
            return;
        }

        let intensity = if self.simulation_enabled { F::one() } else { F::half() };
        self.apply_ambient_wobble(intensity);
        self.wobble.advance(dt);
        observer.on_wobble();

        if !self.simulation_enabled {
            self.integrate(dt, config.world_gravity, false);
            observer.on_integrate();
            observer.on_step_complete();
            return;
        }

        self.apply_gravity();
        self.apply_constraints();
        observer.on_constraint_pass();

        self.apply_spokes(dt);
        self.integrate(dt, config.world_gravity, true);
        for _ in 0..config.link_iterations {
            for link in self.links.iter() {
                link.solve(&mut self.points);
            }
        }
        if let Some(bounds) = &self.bounds {
            bounds.clamp(&mut self.points);
            if let Some(center) = self.center.as_mut() {
                bounds.clamp(core::slice::from_mut(center));
            }
        }
        observer.on_integrate();
        observer.on_step_complete();
    }

    /// Push every rim particle along its own radial direction by a noise
    /// sample. Noise index 0 belongs to the center, which has no radial
    /// direction and so never moves.
    pub fn apply_ambient_wobble(&mut self, intensity: F) {
        let Some(center) = self.center.as_ref() else { return };
        let hub = center.pos;
        let wobble = &self.wobble;
        for (i, p) in self.points.iter_mut().enumerate() {
            let dir = (p.pos - hub).normalize();
            p.apply_force(dir.scale(wobble.magnitude(i + 1, intensity)));
        }
    }

    fn apply_gravity(&mut self) {
        let gravity = &self.gravity;
        if let Some(center) = self.center.as_mut() {
            if let Some(force) = gravity.force_on(center.mass) {
                center.apply_force(force);
            }
        }
        for p in self.points.iter_mut() {
            if let Some(force) = gravity.force_on(p.mass) {
                p.apply_force(force);
            }
        }
    }

    fn apply_constraints(&mut self) {
        let Some(center) = self.center.as_ref() else { return };
        let hub = center.pos;
        for i in 0..self.points.len() {
            for rule in RingRule::ORDER {
                self.params.apply(rule, &mut self.points, i, hub);
            }
        }
    }

    fn apply_spokes(&mut self, dt: F) {
        let Some(center) = self.center.as_mut() else { return };
        for spoke in self.spokes.iter() {
            if let Some(p) = self.points.get_mut(spoke.point) {
                spoke.solve(center, p, dt);
            }
        }
    }

    fn integrate(&mut self, dt: F, world_gravity: Vec2<F>, with_drag: bool) {
        if let Some(center) = self.center.as_mut() {
            center.integrate(dt, world_gravity, with_drag);
        }
        for p in self.points.iter_mut() {
            p.integrate(dt, world_gravity, with_drag);
        }
    }

    /// Broadcast a force or impulse to the center and every rim particle.
    pub fn add_force_to_all(&mut self, force: Vec2<F>, mode: ForceMode) {
        if !self.is_initialized() {
            return;
        }
        if let Some(center) = self.center.as_mut() {
            center.apply(force, mode);
        }
        for p in self.points.iter_mut() {
            p.apply(force, mode);
        }
    }

    pub fn apply_to_center(&mut self, force: Vec2<F>, mode: ForceMode) {
        if let Some(center) = self.center.as_mut() {
            center.apply(force, mode);
        }
    }

    /// Stop the center mass dead. Rim particles keep their motion.
    pub fn halt_center(&mut self) {
        if let Some(center) = self.center.as_mut() {
            center.halt();
        }
    }

    pub fn zero_velocities(&mut self) {
        if let Some(center) = self.center.as_mut() {
            center.halt();
        }
        for p in self.points.iter_mut() {
            p.halt();
        }
    }

    /// Re-pose the rim at `scale` times its rest layout around the current
    /// center, at rest. Used while simulation is off.
    pub fn set_pose_scale(&mut self, scale: F) {
        let Some(center) = self.center.as_mut() else { return };
        center.halt();
        let hub = center.pos;
        for (p, offset) in self.points.iter_mut().zip(self.rest_offsets.iter()) {
            p.pos = hub + offset.scale(scale);
            p.halt();
        }
    }

    /// Move the whole body, at rest and in its rest pose, to `position`.
    pub fn reset_to(&mut self, position: Vec2<F>) {
        let Some(center) = self.center.as_mut() else { return };
        center.pos = position;
        center.drag = self.params.base_drag;
        center.halt();
        for (p, offset) in self.points.iter_mut().zip(self.rest_offsets.iter()) {
            p.pos = position + *offset;
            p.drag = self.params.base_drag;
            p.halt();
        }
        self.wobble.reset();
    }

    pub fn simulation_enabled(&self) -> bool { self.simulation_enabled }

    pub fn set_simulation_enabled(&mut self, enabled: bool) {
        self.simulation_enabled = enabled;
    }

    pub fn gravity(&self) -> &GravityField<F> { &self.gravity }
    pub fn gravity_mut(&mut self) -> &mut GravityField<F> { &mut self.gravity }
    pub fn wobble(&self) -> &AmbientWobble<F> { &self.wobble }
    pub fn wobble_mut(&mut self) -> &mut AmbientWobble<F> { &mut self.wobble }
    pub fn params(&self) -> &ConstraintParams<F> { &self.params }
    pub fn bounds(&self) -> Option<&ArenaBounds<F>> { self.bounds.as_ref() }

    pub fn set_bounds(&mut self, bounds: Option<ArenaBounds<F>>) {
        self.bounds = bounds;
    }

    pub fn center(&self) -> Option<&Particle<F>> { self.center.as_ref() }
    pub fn points(&self) -> &[Particle<F>] { &self.points }
    pub fn points_mut(&mut self) -> &mut [Particle<F>] { &mut self.points }
    pub fn particle_count(&self) -> usize { self.points.len() }

    pub fn center_position(&self) -> Vec2<F> {
        self.center.as_ref().map_or(Vec2::zero(), |c| c.pos)
    }

    pub fn center_velocity(&self) -> Vec2<F> {
        self.center.as_ref().map_or(Vec2::zero(), |c| c.vel)
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.points.iter().map(|p| p.pos).collect()
    }

    /// Distance of each rim particle from the center, in ring order.
    pub fn radial_distances(&self) -> AllocVec<F> {
        let hub = self.center_position();
        self.points.iter().map(|p| p.pos.distance(hub)).collect()
    }

    /// Angle at the center between each particle and its successor.
    pub fn adjacent_angles(&self) -> AllocVec<F> {
        let hub = self.center_position();
        let n = self.points.len();
        (0..n)
            .map(|i| (self.points[i].pos - hub).angle_between(self.points[(i + 1) % n].pos - hub))
            .collect()
    }

    /// Signed bulge of each particle over its neighbours' baseline, paired
    /// with the minimum the bending rule enforces there.
    pub fn bulge_heights(&self) -> AllocVec<(F, F)> {
        let hub = self.center_position();
        let n = self.points.len();
        if n < 3 {
            return AllocVec::new();
        }
        (0..n)
            .map(|i| {
                let p1 = self.points[(i + n - 1) % n].pos;
                let p2 = self.points[i].pos;
                let p3 = self.points[(i + 1) % n].pos;
                let min = self.params.min_bulge_height((p3 - p1).length());
                (bulge_height(p1, p2, p3, hub), min)
            })
            .collect()
    }
}
