//! Soft-body slime physics and a gravity-switching boss for 2D games.
//!
//! `slimebody` simulates a blob as a ring of point masses around a center
//! mass, held in shape by hand-written radial, angular and bending rules
//! instead of a joint solver. A boss controller drives that ring through a
//! small state machine, sticking to whatever surface it lands on and leaping
//! to the next one.
//!
//! # Features
//!
//! - **Particle ring**: explicit positions, velocities and masses with a
//!   force-accumulate-then-integrate step
//! - **Shape rules**: radial containment bands, angular spacing, convexity
//! - **Per-body gravity**: direction, magnitude and an on/off switch
//! - **Ambient wobble**: Perlin-noise radial forces that keep idle bodies alive
//! - **Boss state machine**: Spawn, Fall, Roam, Charge as an enum plus a pure
//!   transition function
//! - **Terrain seam**: the only outside dependency is a single-ray
//!   [`TerrainQuery`]
//! - **Observable**: Monitor physics steps via the `StepObserver` trait

pub mod float;
pub mod vec;
pub mod particle;
pub mod constraint;
pub mod spring;
pub mod arena;
pub mod probe;
pub mod gravity;
pub mod wobble;
pub mod easing;
pub mod ring;
pub mod state;
pub mod context;
pub mod boss;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Vec2};
pub use particle::{ForceMode, Particle};
pub use constraint::{ConstraintParams, RimLink, RingRule};
pub use spring::SpokeSpring;
pub use arena::ArenaBounds;
pub use probe::{LayerMask, SurfaceHit, SurfaceProbe, TerrainQuery};
pub use gravity::GravityField;
pub use wobble::AmbientWobble;
pub use easing::Easing;
pub use ring::ParticleRing;
pub use state::{BossEvent, BossState, transition};
pub use context::BossContext;
pub use boss::{BossController, GroundReadout, candidate_directions};
pub use config::{BossConfig, RingConfig, SolverConfig};
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::PhysicsError;
