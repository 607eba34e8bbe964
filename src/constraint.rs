//! Corrective rules that keep a particle ring round, ordered and convex.
//!
//! None of the three ring rules move particles directly. They only add
//! forces, one-shot impulses, drag and velocity trims, so they compose with
//! whatever else pushes on the body during a step.

use crate::config::RingConfig;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::{Vec, Vec2};

/// The ring rules, in the order the solver applies them to each particle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RingRule {
    /// Keep particle i out of the core around the center.
    Radial,
    /// Keep particle i and i+1 angularly apart as seen from the center.
    Angular,
    /// Keep particle i bulging outward relative to i-1 and i+1.
    Bending,
}

impl RingRule {
    pub const ORDER: [RingRule; 3] = [RingRule::Radial, RingRule::Angular, RingRule::Bending];
}

/// Immutable per-instance bands and gains for the ring rules.
///
/// Angles are in radians.
#[derive(Clone, Debug, PartialEq)]
pub struct ConstraintParams<F: Float> {
    pub hard_limit_radius: F,
    pub cushion_radius: F,
    pub base_drag: F,
    pub max_radial_drag: F,
    pub radial_push_force: F,

    pub ideal_delta_angle: F,
    pub min_angle_limit: F,
    pub cushion_angle_limit: F,
    pub max_angular_repulsion: F,
    pub max_angular_braking: F,

    pub bending_stiffness: F,
    pub surface_smoothness: F,
}

impl<F: Float> ConstraintParams<F> {
    pub fn from_config(config: &RingConfig<F>) -> Self {
        let count = if config.point_count == 0 { 1 } else { config.point_count };
        let ideal = F::two() * F::pi() / F::from_f32(count as f32);
        ConstraintParams {
            hard_limit_radius: config.hard_core_radius,
            cushion_radius: config.soft_core_radius,
            base_drag: config.base_drag,
            max_radial_drag: config.max_radial_drag,
            radial_push_force: config.radial_push_force,
            ideal_delta_angle: ideal,
            min_angle_limit: ideal * config.hard_angle_ratio,
            cushion_angle_limit: ideal * config.soft_angle_ratio,
            max_angular_repulsion: config.max_angular_repulsion,
            max_angular_braking: config.max_angular_braking,
            bending_stiffness: config.bending_stiffness,
            surface_smoothness: config.surface_smoothness,
        }
    }

    /// Apply `rule` to ring particle `i`. `particles` is the ring in order.
    pub fn apply(&self, rule: RingRule, particles: &mut [Particle<F>], i: usize, center: Vec2<F>) {
        let n = particles.len();
        match rule {
            RingRule::Radial => self.solve_radial(&mut particles[i], center),
            RingRule::Angular => self.solve_angular(particles, i, (i + 1) % n, center),
            RingRule::Bending => {
                self.solve_bending(particles, (i + n - 1) % n, i, (i + 1) % n, center)
            }
        }
    }

    /// Hard floor kicks the particle out with drag removed; the cushion band
    /// thickens drag the deeper the particle sinks.
    pub fn solve_radial(&self, p: &mut Particle<F>, center: Vec2<F>) {
        let offset = p.pos - center;
        let dist = offset.length();
        let normal = offset.normalize();

        if dist < self.hard_limit_radius {
            p.apply_impulse(normal.scale(self.radial_push_force));
            p.drag = F::zero();
        } else if dist < self.cushion_radius {
            let t = F::one()
                - (dist - self.hard_limit_radius) / (self.cushion_radius - self.hard_limit_radius);
            p.drag = self.base_drag.lerp(self.max_radial_drag, t);
        } else {
            p.drag = self.base_drag;
        }
    }

    /// Spacing between `a` and its successor `b`, measured at the center.
    pub fn solve_angular(&self, particles: &mut [Particle<F>], a: usize, b: usize, center: Vec2<F>) {
        if a == b {
            return;
        }
        let pa = particles[a].pos;
        let pb = particles[b].pos;
        let angle = (pa - center).angle_between(pb - center);
        let tangent = (pb - pa).normalize();

        if angle < self.min_angle_limit {
            let push = self.radial_push_force * F::half();
            particles[a].apply_impulse(-tangent.scale(push));
            particles[b].apply_impulse(tangent.scale(push));

            for idx in [a, b] {
                let along = particles[idx].vel.project_onto(tangent);
                particles[idx].vel = particles[idx].vel - along.scale(F::half());
            }
        } else if angle < self.cushion_angle_limit {
            let t = F::one()
                - (angle - self.min_angle_limit) / (self.cushion_angle_limit - self.min_angle_limit);
            let repulsion = F::zero().lerp(self.max_angular_repulsion, t);
            particles[a].apply_force(-tangent.scale(repulsion));
            particles[b].apply_force(tangent.scale(repulsion));

            let closing = (particles[b].vel - particles[a].vel).dot(tangent);
            let braking = tangent.scale(closing * self.max_angular_braking * t);
            particles[b].apply_force(-braking);
            particles[a].apply_force(braking);
        }
    }

    /// Push `current` outward when it sits below the arc its neighbours
    /// imply, and push the neighbours back the other way.
    pub fn solve_bending(
        &self,
        particles: &mut [Particle<F>],
        prev: usize,
        current: usize,
        next: usize,
        center: Vec2<F>,
    ) {
        if prev == current || next == current {
            return;
        }
        let p1 = particles[prev].pos;
        let p2 = particles[current].pos;
        let p3 = particles[next].pos;

        let height = bulge_height(p1, p2, p3, center);
        let min_height = self.min_bulge_height((p3 - p1).length());
        if height >= min_height {
            return;
        }

        let normal = outward_normal(p1, p3, center);
        let correction = normal.scale((min_height - height) * self.bending_stiffness);
        particles[current].apply_force(correction);
        let reaction = -correction.scale(F::half());
        particles[prev].apply_force(reaction);
        particles[next].apply_force(reaction);

        let inward = (center - p2).normalize();
        let toward_center = particles[current].vel.dot(inward);
        if toward_center > F::zero() {
            let trim = inward.scale(toward_center * F::from_f32(0.1));
            particles[current].vel = particles[current].vel - trim;
        }
    }

    /// Smallest acceptable bulge for a baseline of the given length.
    pub fn min_bulge_height(&self, baseline_len: F) -> F {
        baseline_len * self.surface_smoothness * F::from_f32(0.2)
    }
}

/// Unit normal of the segment `p1 -> p3`, flipped to face away from `center`.
pub fn outward_normal<F: Float>(p1: Vec2<F>, p3: Vec2<F>, center: Vec2<F>) -> Vec2<F> {
    let dir = (p3 - p1).normalize();
    let normal = Vec2::new(-dir.y, dir.x);
    let midpoint = (p1 + p3).scale(F::half());
    if normal.dot(midpoint - center) < F::zero() {
        -normal
    } else {
        normal
    }
}

/// Signed distance of `p2` above the midpoint of `p1 -> p3`, positive when
/// the rim is convex there.
pub fn bulge_height<F: Float>(p1: Vec2<F>, p2: Vec2<F>, p3: Vec2<F>, center: Vec2<F>) -> F {
    let midpoint = (p1 + p3).scale(F::half());
    (p2 - midpoint).dot(outward_normal(p1, p3, center))
}

/// Rigid distance link between two rim neighbours.
#[derive(Clone, Debug)]
pub struct RimLink<F: Float> {
    pub a: usize,
    pub b: usize,
    pub rest_length: F,
    pub stiffness: F,
}

impl<F: Float> RimLink<F> {
    pub fn new(a: usize, b: usize, rest_length: F, stiffness: F) -> Self {
        RimLink { a, b, rest_length, stiffness }
    }

    pub fn from_particles(a: usize, b: usize, particles: &[Particle<F>], stiffness: F) -> Self {
        let rest_length = particles[a].pos.distance(particles[b].pos);
        RimLink { a, b, rest_length, stiffness }
    }

    /// Project both ends back toward the rest length and cancel the
    /// stretching velocity, weighted by inverse mass.
    pub fn solve(&self, particles: &mut [Particle<F>]) {
        let a_pos = particles[self.a].pos;
        let b_pos = particles[self.b].pos;
        let a_inv = particles[self.a].inv_mass;
        let b_inv = particles[self.b].inv_mass;

        let w_total = a_inv + b_inv;
        if w_total.is_near_zero(F::from_f32(1e-10)) {
            return;
        }

        let delta = b_pos - a_pos;
        let dist = delta.length();
        if dist.is_near_zero(F::from_f32(1e-10)) {
            return;
        }

        let error = dist - self.rest_length;
        let correction = delta.scale(error * self.stiffness / dist);
        particles[self.a].pos = particles[self.a].pos + correction.scale(a_inv / w_total);
        particles[self.b].pos = particles[self.b].pos - correction.scale(b_inv / w_total);

        let axis = delta.scale(F::one() / dist);
        let stretching = (particles[self.b].vel - particles[self.a].vel).dot(axis);
        let impulse = axis.scale(stretching * self.stiffness / w_total);
        particles[self.a].vel = particles[self.a].vel + impulse.scale(a_inv);
        particles[self.b].vel = particles[self.b].vel - impulse.scale(b_inv);
    }
}
