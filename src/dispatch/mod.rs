//! Periodic-update scheduling: callback registry and subsystem fan-out.
//!
//! This module provides the lightweight dispatch layer the robot's control
//! loop drives once per cycle:
//! - [`UpdateRegistry`] — ordered zero-argument callbacks behind an
//!   irreversible enable latch
//! - [`Subsystem`], [`SubsystemRef`] — contract for per-tick subsystems
//! - [`SubsystemDispatcher`] — identity-keyed subsystem set with a combined
//!   registry-and-subsystem tick
//!
//! Both containers are explicit context objects owned by the application's
//! composition root; nothing in here is a process-wide singleton.

mod dispatcher;
mod registry;
mod subsystem;

pub use dispatcher::SubsystemDispatcher;
pub use registry::UpdateRegistry;
pub use subsystem::{Subsystem, SubsystemRef};
