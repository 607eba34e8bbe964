//! Point masses with force accumulation and linear drag.

use crate::float::Float;
use crate::vec::{Vec, Vec2};

/// How a force passed to [`Particle::apply`] reaches the velocity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ForceMode {
    /// Accumulated and integrated over the next step (`F * dt / m`).
    #[default]
    Force,
    /// Applied to the velocity immediately (`J / m`).
    Impulse,
}

/// A point mass owned by a particle ring.
#[derive(Clone, Debug)]
pub struct Particle<F: Float> {
    pub pos: Vec2<F>,
    pub vel: Vec2<F>,
    pub force: Vec2<F>,
    pub mass: F,
    pub inv_mass: F,
    /// Linear drag coefficient. Rewritten every step by the radial rule.
    pub drag: F,
    /// Multiplier on the host world's gravity. Rings zero this on
    /// initialization and supply their own gravity field instead.
    pub gravity_scale: F,
}

impl<F: Float> Particle<F> {
    pub fn new(pos: Vec2<F>, mass: F, drag: F) -> Self {
        let inv_mass = if mass.is_near_zero(F::from_f32(1e-10)) {
            F::zero()
        } else {
            F::one() / mass
        };
        Particle {
            pos,
            vel: Vec2::zero(),
            force: Vec2::zero(),
            mass,
            inv_mass,
            drag,
            gravity_scale: F::one(),
        }
    }

    pub fn apply_force(&mut self, force: Vec2<F>) {
        self.force = self.force + force;
    }

    pub fn apply_impulse(&mut self, impulse: Vec2<F>) {
        self.vel = self.vel + impulse.scale(self.inv_mass);
    }

    pub fn apply(&mut self, force: Vec2<F>, mode: ForceMode) {
        match mode {
            ForceMode::Force => self.apply_force(force),
            ForceMode::Impulse => self.apply_impulse(force),
        }
    }

    /// Semi-implicit Euler step: forces into velocity, optional linear drag,
    /// velocity into position. Clears the force accumulator.
    pub fn integrate(&mut self, dt: F, world_gravity: Vec2<F>, with_drag: bool) {
        let accel = self.force.scale(self.inv_mass) + world_gravity.scale(self.gravity_scale);
        self.vel = self.vel + accel.scale(dt);
        if with_drag {
            self.vel = self.vel.scale(F::one() / (F::one() + dt * self.drag));
        }
        self.pos = self.pos + self.vel.scale(dt);
        self.force = Vec2::zero();
    }

    /// Drop all motion: velocity and any pending force.
    pub fn halt(&mut self) {
        self.vel = Vec2::zero();
        self.force = Vec2::zero();
    }
}
