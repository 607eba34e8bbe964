//! Axis-aligned arena: containment box for the masses and a terrain query
//! for the probe.

use crate::float::Float;
use crate::particle::Particle;
use crate::probe::{LayerMask, SurfaceHit, TerrainQuery};
use crate::vec::{Vec, Vec2};

/// Rectangular arena with floor, ceiling and two walls.
#[derive(Clone, Debug, PartialEq)]
pub struct ArenaBounds<F: Float> {
    pub min: Vec2<F>,
    pub max: Vec2<F>,
    /// Fraction of the penetrating velocity reflected on contact.
    pub restitution: F,
    /// Collision layer the walls live on.
    pub layer: u8,
}

impl<F: Float> ArenaBounds<F> {
    pub fn new(min: Vec2<F>, max: Vec2<F>, restitution: F) -> Self {
        ArenaBounds { min, max, restitution, layer: 0 }
    }

    pub fn with_layer(mut self, layer: u8) -> Self {
        self.layer = layer;
        self
    }

    pub fn contains(&self, p: Vec2<F>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Push masses back inside and reflect the velocity that carried them out.
    pub fn clamp(&self, particles: &mut [Particle<F>]) {
        for p in particles.iter_mut() {
            if p.pos.x < self.min.x {
                p.pos.x = self.min.x;
                if p.vel.x < F::zero() {
                    p.vel.x = -p.vel.x * self.restitution;
                }
            } else if p.pos.x > self.max.x {
                p.pos.x = self.max.x;
                if p.vel.x > F::zero() {
                    p.vel.x = -p.vel.x * self.restitution;
                }
            }
            if p.pos.y < self.min.y {
                p.pos.y = self.min.y;
                if p.vel.y < F::zero() {
                    p.vel.y = -p.vel.y * self.restitution;
                }
            } else if p.pos.y > self.max.y {
                p.pos.y = self.max.y;
                if p.vel.y > F::zero() {
                    p.vel.y = -p.vel.y * self.restitution;
                }
            }
        }
    }
}

impl<F: Float> TerrainQuery<F> for ArenaBounds<F> {
    /// Walls face inward; rays leaving the box from outside never hit.
    fn raycast(
        &self,
        origin: Vec2<F>,
        direction: Vec2<F>,
        max_distance: F,
        layer_mask: LayerMask,
    ) -> Option<SurfaceHit<F>> {
        if !layer_mask.contains(self.layer) {
            return None;
        }
        let dir = direction.normalize();
        let eps = F::from_f32(1e-6);
        let mut best: Option<SurfaceHit<F>> = None;

        let mut consider = |t: F, normal: Vec2<F>| {
            if t < F::zero() || t > max_distance {
                return;
            }
            let point = origin + dir.scale(t);
            let on_wall = point.x >= self.min.x - eps
                && point.x <= self.max.x + eps
                && point.y >= self.min.y - eps
                && point.y <= self.max.y + eps;
            if !on_wall {
                return;
            }
            if best.as_ref().map_or(true, |b| t < b.distance) {
                best = Some(SurfaceHit { point, normal, distance: t });
            }
        };

        if dir.x > eps {
            consider((self.max.x - origin.x) / dir.x, Vec2::left());
        } else if dir.x < -eps {
            consider((self.min.x - origin.x) / dir.x, Vec2::right());
        }
        if dir.y > eps {
            consider((self.max.y - origin.y) / dir.y, Vec2::down());
        } else if dir.y < -eps {
            consider((self.min.y - origin.y) / dir.y, Vec2::up());
        }
        best
    }
}
