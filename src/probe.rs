//! Directional surface queries against external terrain.

use crate::float::Float;
use crate::vec::{Vec, Vec2};

/// Bit set of collision layers a query is allowed to hit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const ALL: LayerMask = LayerMask(u32::MAX);
    pub const NONE: LayerMask = LayerMask(0);

    /// Mask containing only `layer` (0..32).
    pub const fn layer(layer: u8) -> Self {
        LayerMask(1u32 << (layer as u32 & 31))
    }

    pub const fn contains(self, layer: u8) -> bool {
        self.0 & (1u32 << (layer as u32 & 31)) != 0
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        LayerMask::ALL
    }
}

/// Nearest contact returned by a terrain ray query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SurfaceHit<F: Float> {
    pub point: Vec2<F>,
    /// Unit normal of the surface, facing back toward the ray origin side.
    pub normal: Vec2<F>,
    pub distance: F,
}

/// Collision service the core consumes: one nearest-hit ray query.
///
/// `direction` arrives normalized when called through [`SurfaceProbe`];
/// implementations should still tolerate unnormalized input.
pub trait TerrainQuery<F: Float> {
    fn raycast(
        &self,
        origin: Vec2<F>,
        direction: Vec2<F>,
        max_distance: F,
        layer_mask: LayerMask,
    ) -> Option<SurfaceHit<F>>;
}

impl<F: Float, T: TerrainQuery<F> + ?Sized> TerrainQuery<F> for &T {
    fn raycast(
        &self,
        origin: Vec2<F>,
        direction: Vec2<F>,
        max_distance: F,
        layer_mask: LayerMask,
    ) -> Option<SurfaceHit<F>> {
        (**self).raycast(origin, direction, max_distance, layer_mask)
    }
}

/// Stateless ray settings: how far to look and which layers count as ground.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SurfaceProbe<F: Float> {
    pub max_distance: F,
    pub layer_mask: LayerMask,
}

impl<F: Float> SurfaceProbe<F> {
    pub fn new(max_distance: F, layer_mask: LayerMask) -> Self {
        SurfaceProbe { max_distance, layer_mask }
    }

    /// Cast from `origin` along `direction`. A zero direction never queries.
    pub fn cast<Q: TerrainQuery<F> + ?Sized>(
        &self,
        terrain: &Q,
        origin: Vec2<F>,
        direction: Vec2<F>,
    ) -> Option<SurfaceHit<F>> {
        let dir = direction.normalize();
        if dir == Vec2::zero() {
            log::trace!("probe skipped: zero direction");
            return None;
        }
        let hit = terrain.raycast(origin, dir, self.max_distance, self.layer_mask);
        if hit.is_none() {
            log::trace!("probe miss from {:?} along {:?}", origin, dir);
        }
        hit
    }
}
