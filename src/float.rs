//! Scalar abstraction so the ring runs in `f32` or `f64`.

use core::ops::{Add, Div, Mul, Neg, Sub};

/// The scalar operations the ring, the probes and the boss need.
///
/// Transcendentals route through `libm` rather than the platform math
/// library, so a replay with the same seed and inputs produces the same
/// bits everywhere.
pub trait Float:
    Copy
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Default
    + core::fmt::Debug
{
    fn zero() -> Self;
    fn one() -> Self;
    fn half() -> Self;
    fn two() -> Self;
    fn pi() -> Self;

    fn sqrt(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn abs(self) -> Self;
    fn is_finite(self) -> bool;
    /// Quadrant-aware arctangent of `y / x`.
    fn atan2(y: Self, x: Self) -> Self;

    /// Tuning constants are written as `f32` literals.
    fn from_f32(v: f32) -> Self;
    /// Noise samples come back as `f64`.
    fn from_f64(v: f64) -> Self;
    fn to_f64(self) -> f64;

    fn min(self, other: Self) -> Self {
        if self < other { self } else { other }
    }

    fn max(self, other: Self) -> Self {
        if self > other { self } else { other }
    }

    fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }

    /// `self` at `t = 0`, `other` at `t = 1`. `t` is not clamped.
    fn lerp(self, other: Self, t: Self) -> Self {
        self + (other - self) * t
    }

    fn is_near_zero(self, epsilon: Self) -> bool {
        self.abs() < epsilon
    }
}

macro_rules! impl_float {
    ($t:ty, $pi:expr, $sqrt:path, $sin:path, $cos:path, $abs:path, $atan2:path) => {
        impl Float for $t {
            fn zero() -> Self { 0.0 }
            fn one() -> Self { 1.0 }
            fn half() -> Self { 0.5 }
            fn two() -> Self { 2.0 }
            fn pi() -> Self { $pi }
            fn sqrt(self) -> Self { $sqrt(self) }
            fn sin(self) -> Self { $sin(self) }
            fn cos(self) -> Self { $cos(self) }
            fn abs(self) -> Self { $abs(self) }
            fn is_finite(self) -> bool { <$t>::is_finite(self) }
            fn atan2(y: Self, x: Self) -> Self { $atan2(y, x) }
            fn from_f32(v: f32) -> Self { v as $t }
            fn from_f64(v: f64) -> Self { v as $t }
            fn to_f64(self) -> f64 { self as f64 }
        }
    };
}

impl_float!(f32, core::f32::consts::PI, libm::sqrtf, libm::sinf, libm::cosf, libm::fabsf, libm::atan2f);
impl_float!(f64, core::f64::consts::PI, libm::sqrt, libm::sin, libm::cos, libm::fabs, libm::atan2);
