//! Mutable data shared by every boss state.

use crate::float::Float;
use crate::vec::{Vec, Vec2};

/// Surface, target and timer data the states read and write. States
/// themselves carry nothing, so every timer lives here.
#[derive(Clone, Debug, PartialEq)]
pub struct BossContext<F: Float> {
    /// Normal of the surface the boss last landed on.
    pub surface_normal: Vec2<F>,
    pub target_direction: Vec2<F>,
    pub predicted_landing_point: Vec2<F>,
    pub has_target: bool,
    /// +1 or -1, picked on entering Roam.
    pub roam_direction: F,
    pub spawn_elapsed: F,
    pub roam_elapsed: F,
    pub charge_elapsed: F,
    pub fall_elapsed: F,
    pub spawn_scale: F,
}

impl<F: Float> BossContext<F> {
    pub fn new() -> Self {
        BossContext {
            surface_normal: Vec2::up(),
            target_direction: Vec2::zero(),
            predicted_landing_point: Vec2::zero(),
            has_target: false,
            roam_direction: F::one(),
            spawn_elapsed: F::zero(),
            roam_elapsed: F::zero(),
            charge_elapsed: F::zero(),
            fall_elapsed: F::zero(),
            spawn_scale: F::one(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl<F: Float> Default for BossContext<F> {
    fn default() -> Self {
        Self::new()
    }
}
