//! # Subsystem contract.
//!
//! A subsystem is any object that wants a callback once per scheduler tick.
//! Handles are identity-compared: two `Arc`s to distinct allocations are
//! distinct registrations even if the subsystems are semantically similar.

use std::sync::Arc;

/// Shared handle to a registered subsystem.
pub type SubsystemRef = Arc<dyn Subsystem>;

/// Contract for periodic subsystems driven by the
/// [`SubsystemDispatcher`](crate::SubsystemDispatcher).
///
/// Called synchronously from inside the robot's control loop; implementations
/// must not block.
pub trait Subsystem: Send + Sync + 'static {
    /// Per-tick update on every environment.
    fn update(&self);

    /// Additional per-tick update, invoked immediately after
    /// [`update`](Subsystem::update) when running in simulation.
    fn sim_update(&self) {}

    /// Human-readable name (for registration warnings).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
