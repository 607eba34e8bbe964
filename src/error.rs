//! Error types for ring and boss configuration.

use core::fmt;

/// Errors reported when building a ring or a boss controller.
///
/// Runtime stepping never fails; a malformed instance is rejected here.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Mass must be positive and finite.
    InvalidMass,
    /// The ring needs at least 3 points.
    InsufficientSegments,
    /// Radius must be positive.
    InvalidRadius,
    /// `hard_limit_radius` must be positive and strictly below `cushion_radius`.
    DegenerateRadialBand,
    /// Angle ratios must satisfy `0 < hard < soft <= 1`.
    DegenerateAngularBand,
    /// Surface smoothness must be in [0, 1].
    InvalidSmoothness,
    /// Stiffness must be non-negative.
    InvalidStiffness,
    /// Spoke frequency must be positive.
    InvalidFrequency,
    /// Spoke damping ratio must be positive.
    InvalidDampingRatio,
    /// A timing parameter must be positive.
    InvalidDuration { name: &'static str },
    /// A distance parameter must be positive.
    InvalidDistance { name: &'static str },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidMass => write!(f, "mass must be positive and finite"),
            PhysicsError::InsufficientSegments => write!(f, "particle ring needs at least 3 points"),
            PhysicsError::InvalidRadius => write!(f, "ring radius must be positive"),
            PhysicsError::DegenerateRadialBand => {
                write!(f, "hard limit radius must be positive and below the cushion radius")
            }
            PhysicsError::DegenerateAngularBand => {
                write!(f, "angle ratios must satisfy 0 < hard < soft <= 1")
            }
            PhysicsError::InvalidSmoothness => write!(f, "surface smoothness must be in [0, 1]"),
            PhysicsError::InvalidStiffness => write!(f, "stiffness must be non-negative"),
            PhysicsError::InvalidFrequency => write!(f, "spoke frequency must be positive"),
            PhysicsError::InvalidDampingRatio => write!(f, "spoke damping ratio must be positive"),
            PhysicsError::InvalidDuration { name } => write!(f, "{} must be positive", name),
            PhysicsError::InvalidDistance { name } => write!(f, "{} must be positive", name),
        }
    }
}

impl std::error::Error for PhysicsError {}
