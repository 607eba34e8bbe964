//! Easing curves for the spawn pop-in and the charge squish ramp.

use crate::float::Float;

/// Maps normalized progress `t` in [0, 1] to a blend weight.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// Cubic ease-in-out, zero slope at both ends.
    SmoothStep,
    /// Overshoots past 1 before settling, ends exactly at 1.
    OutBack,
}

impl Easing {
    /// Evaluate the curve. `t` is clamped to [0, 1].
    pub fn eval<F: Float>(self, t: F) -> F {
        let t = t.clamp(F::zero(), F::one());
        match self {
            Easing::Linear => t,
            Easing::SmoothStep => t * t * (F::from_f32(3.0) - F::two() * t),
            Easing::OutBack => ease_out_back(t),
        }
    }
}

/// `1 + (c + 1)(t - 1)^3 + c(t - 1)^2` with the usual overshoot `c = 1.70158`.
pub fn ease_out_back<F: Float>(t: F) -> F {
    let c1 = F::from_f32(1.70158);
    let c3 = c1 + F::one();
    let u = t - F::one();
    F::one() + c3 * u * u * u + c1 * u * u
}
