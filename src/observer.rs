//! Step observer trait for monitoring the ring and the boss controller.

use crate::state::BossState;

/// Hooks into the ring step and the boss state machine.
///
/// Handy for debug overlays and for tests that need to see inside a step.
/// Every method defaults to doing nothing.
pub trait StepObserver {
    /// Called after ambient wobble forces were added. Runs every step.
    fn on_wobble(&mut self) {}

    /// Called after the radial/angular/bending pass over the ring.
    fn on_constraint_pass(&mut self) {}

    /// Called after masses have been integrated.
    fn on_integrate(&mut self) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}

    /// Called when the boss controller leaves `from` for `to`.
    fn on_transition(&mut self, _from: BossState, _to: BossState) {}
}

/// Observer for callers that do not care.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
