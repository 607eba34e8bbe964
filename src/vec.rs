//! Planar vector math for the ring.

use crate::float::Float;
use core::ops::{Add, Neg, Sub};

/// Metric operations on a vector type.
///
/// Only [`Vec2`] implements it. The rules in [`constraint`](crate::constraint)
/// are written against these methods so they read as geometry, not as
/// component arithmetic.
pub trait Vec:
    Copy + Add<Output = Self> + Sub<Output = Self> + Neg<Output = Self> + PartialEq + Default + core::fmt::Debug
{
    type Scalar: Float;

    fn zero() -> Self;
    fn dot(self, other: Self) -> Self::Scalar;
    fn scale(self, s: Self::Scalar) -> Self;

    fn length_sq(self) -> Self::Scalar {
        self.dot(self)
    }

    fn length(self) -> Self::Scalar {
        self.length_sq().sqrt()
    }

    /// Unit vector in the same direction; vectors shorter than `1e-10`
    /// come back as zero so callers can test for "no direction".
    fn normalize(self) -> Self {
        let len = self.length();
        if len.is_near_zero(Self::Scalar::from_f32(1e-10)) {
            return Self::zero();
        }
        self.scale(Self::Scalar::one() / len)
    }

    fn distance(self, other: Self) -> Self::Scalar {
        (self - other).length()
    }

    fn lerp(self, other: Self, t: Self::Scalar) -> Self {
        self + (other - self).scale(t)
    }

    /// Part of `self` along `axis`, which must already be unit length.
    fn project_onto(self, axis: Self) -> Self {
        axis.scale(self.dot(axis))
    }
}

/// A 2D point, velocity or force. `+y` is up.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    pub fn new(x: F, y: F) -> Self {
        Vec2 { x, y }
    }

    pub fn up() -> Self { Vec2::new(F::zero(), F::one()) }
    pub fn down() -> Self { Vec2::new(F::zero(), -F::one()) }
    pub fn left() -> Self { Vec2::new(-F::one(), F::zero()) }
    pub fn right() -> Self { Vec2::new(F::one(), F::zero()) }

    /// z component of the 3D cross product. Positive when `other` lies
    /// counter-clockwise of `self`.
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Unsigned angle in radians, in [0, π].
    pub fn angle_between(self, other: Self) -> F {
        F::atan2(self.cross(other).abs(), self.dot(other))
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self {
        Vec2::new(-self.x, -self.y)
    }
}

impl<F: Float> Vec for Vec2<F> {
    type Scalar = F;

    fn zero() -> Self {
        Vec2::new(F::zero(), F::zero())
    }

    fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    fn scale(self, s: F) -> Self {
        Vec2::new(self.x * s, self.y * s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_of_3_4_is_5() {
        assert!((Vec2::new(3.0f32, 4.0).length() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn zero_has_no_direction() {
        assert_eq!(Vec2::<f32>::zero().normalize(), Vec2::zero());
        assert_eq!(Vec2::new(1e-12f64, 0.0).normalize(), Vec2::zero());
    }

    #[test]
    fn angle_between_is_unsigned() {
        let a = Vec2::new(1.0f32, 0.0);
        let b = Vec2::new(0.0f32, 1.0);
        let quarter = core::f32::consts::FRAC_PI_2;
        assert!((a.angle_between(b) - quarter).abs() < 1e-6);
        assert!((b.angle_between(a) - quarter).abs() < 1e-6);
        assert!((a.angle_between(-a) - core::f32::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn projection_keeps_axis_component() {
        let v = Vec2::new(3.0f32, -2.0);
        assert_eq!(v.project_onto(Vec2::right()), Vec2::new(3.0, 0.0));
    }

    #[test]
    fn cross_is_positive_counter_clockwise() {
        assert!(Vec2::<f32>::right().cross(Vec2::up()) > 0.0);
        assert!(Vec2::<f32>::up().cross(Vec2::right()) < 0.0);
    }
}
