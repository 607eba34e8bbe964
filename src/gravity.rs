//! Per-instance gravity field.

use crate::float::Float;
use crate::vec::{Vec, Vec2};

/// The current "down" of one body: direction, magnitude and an on/off switch.
///
/// Disabling is how ballistic flight is expressed: while off, no force is
/// added no matter what direction and magnitude hold.
#[derive(Clone, Debug, PartialEq)]
pub struct GravityField<F: Float> {
    direction: Vec2<F>,
    magnitude: F,
    enabled: bool,
}

impl<F: Float> GravityField<F> {
    /// Starts pointing down, disabled.
    pub fn new(magnitude: F) -> Self {
        GravityField {
            direction: Vec2::down(),
            magnitude,
            enabled: false,
        }
    }

    pub fn direction(&self) -> Vec2<F> { self.direction }
    pub fn magnitude(&self) -> F { self.magnitude }
    pub fn is_enabled(&self) -> bool { self.enabled }

    /// Stored normalized; a zero vector stays zero.
    pub fn set_direction(&mut self, direction: Vec2<F>) {
        self.direction = direction.normalize();
    }

    pub fn set_magnitude(&mut self, magnitude: F) {
        self.magnitude = magnitude;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Force on a mass, or `None` while the field is off.
    pub fn force_on(&self, mass: F) -> Option<Vec2<F>> {
        if !self.enabled {
            return None;
        }
        Some(self.direction.scale(self.magnitude * mass))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_field_adds_nothing() {
        let mut g = GravityField::new(30.0f32);
        g.set_direction(Vec2::new(0.0, -5.0));
        assert_eq!(g.force_on(2.0), None);
        g.set_enabled(true);
        assert_eq!(g.force_on(2.0), Some(Vec2::new(0.0, -60.0)));
    }

    #[test]
    fn direction_is_normalized() {
        let mut g = GravityField::new(1.0f32);
        g.set_direction(Vec2::new(3.0, 4.0));
        assert!((g.direction().length() - 1.0).abs() < 1e-6);
        g.set_direction(Vec2::zero());
        assert_eq!(g.direction(), Vec2::zero());
    }
}
