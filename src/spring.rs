//! Damped spokes tying each rim particle to the center mass.

use crate::float::Float;
use crate::particle::Particle;
use crate::vec::{Vec, Vec2};

/// A damped spring between the center mass and one rim particle.
///
/// Parameterized like a soft joint: oscillation frequency in Hz and a
/// damping ratio (1.0 = critically damped). Stiffness and damping are
/// derived from the reduced mass of the pair so heavier bodies keep the
/// same feel.
///
/// Solved as an implicit velocity impulse rather than an explicit force, so
/// sixteen spokes sharing one center stay stable at coarse fixed steps.
#[derive(Clone, Debug)]
pub struct SpokeSpring<F: Float> {
    pub point: usize,
    pub rest_length: F,
    pub stiffness: F,
    pub damping: F,
}

impl<F: Float> SpokeSpring<F> {
    pub fn new(
        point: usize,
        rest_length: F,
        frequency_hz: F,
        damping_ratio: F,
        center_mass: F,
        point_mass: F,
    ) -> Self {
        let total = center_mass + point_mass;
        let reduced = if total.is_near_zero(F::from_f32(1e-10)) {
            F::zero()
        } else {
            center_mass * point_mass / total
        };
        let omega = F::two() * F::pi() * frequency_hz;
        SpokeSpring {
            point,
            rest_length,
            stiffness: reduced * omega * omega,
            damping: F::two() * reduced * damping_ratio * omega,
        }
    }

    /// Apply this step's spring impulse to both ends.
    ///
    /// `gamma` softens the constraint so the impulse matches an implicit
    /// Euler step of `k * stretch + c * closing_speed`.
    pub fn solve(&self, center: &mut Particle<F>, particle: &mut Particle<F>, dt: F) {
        let delta = particle.pos - center.pos;
        let dist = delta.length();
        if dist.is_near_zero(F::from_f32(1e-10)) {
            return;
        }
        let soft = dt * (self.damping + dt * self.stiffness);
        let w_total = center.inv_mass + particle.inv_mass;
        if soft.is_near_zero(F::from_f32(1e-12)) || w_total.is_near_zero(F::from_f32(1e-10)) {
            return;
        }
        let gamma = F::one() / soft;
        let axis = delta.scale(F::one() / dist);
        let stretch = dist - self.rest_length;
        let bias = stretch * dt * self.stiffness * gamma;
        let closing = (particle.vel - center.vel).dot(axis);

        let effective_mass = F::one() / (w_total + gamma);
        let impulse: Vec2<F> = axis.scale(-effective_mass * (closing + bias));
        particle.apply_impulse(impulse);
        center.apply_impulse(-impulse);
    }
}
