//! # SubsystemDispatcher: per-tick fan-out to registered subsystems.
//!
//! The dispatcher keeps an identity-keyed set of [`Subsystem`] handles and,
//! once per tick, drives the [`UpdateRegistry`] first and then every
//! registered subsystem.
//!
//! ## Tick flow
//! ```text
//! tick()
//!   ├─► UpdateRegistry::run_all()          (no-op while disabled)
//!   └─► for each registered subsystem:
//!         ├─► subsystem.update()
//!         └─► subsystem.sim_update()       (simulation only)
//! ```
//!
//! ## Rules
//! - A handle, once registered, appears at most once in the active set;
//!   identity-duplicate registration warns and is ignored.
//! - Registering an absent handle (`None`) warns and is ignored.
//! - Iteration order over subsystems is **unspecified**: the implementation
//!   currently visits in insertion order, but callers must not rely on it.
//! - No snapshot isolation: a handle registered mid-tick may or may not be
//!   visited within that same tick.
//! - `tick()` performs plain synchronous calls and must not block.

use std::sync::{Arc, PoisonError, RwLock};

use crate::events::{Bus, Event, EventKind};
use crate::hal::RuntimeKind;

use super::registry::UpdateRegistry;
use super::subsystem::SubsystemRef;

/// Identity-keyed set of subsystems, ticked from the robot's control loop.
///
/// Explicitly constructed at the composition root with a [`Bus`] handle for
/// registration warnings and the process [`RuntimeKind`]; there is no hidden
/// global instance. The runtime kind is a process-level constant, so
/// capturing it at construction is equivalent to querying it per tick.
pub struct SubsystemDispatcher {
    subsystems: RwLock<Vec<SubsystemRef>>,
    updates: UpdateRegistry,
    bus: Bus,
    runtime: RuntimeKind,
}

impl SubsystemDispatcher {
    /// Creates an empty dispatcher with its own [`UpdateRegistry`].
    pub fn new(bus: Bus, runtime: RuntimeKind) -> Self {
        Self {
            subsystems: RwLock::new(Vec::new()),
            updates: UpdateRegistry::new(),
            bus,
            runtime,
        }
    }

    /// The update registry driven at the start of every tick.
    pub fn updates(&self) -> &UpdateRegistry {
        &self.updates
    }

    /// Registers subsystem handles.
    ///
    /// For each handle: `None` → warning event, skipped; identity-duplicate
    /// (already in the active set) → warning event, skipped; otherwise
    /// inserted.
    pub fn register<I>(&self, subsystems: I)
    where
        I: IntoIterator<Item = Option<SubsystemRef>>,
    {
        for candidate in subsystems {
            let Some(subsystem) = candidate else {
                self.bus.publish(
                    Event::now(EventKind::Warning)
                        .with_message("tried to register an absent subsystem"),
                );
                continue;
            };

            let mut set = self
                .subsystems
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            if set.iter().any(|s| Arc::ptr_eq(s, &subsystem)) {
                drop(set);
                self.bus.publish(
                    Event::now(EventKind::Warning)
                        .with_message("tried to register an already-registered subsystem")
                        .with_subsystem(subsystem.name()),
                );
                continue;
            }
            set.push(subsystem);
        }
    }

    /// Registers a single subsystem handle.
    pub fn register_one(&self, subsystem: SubsystemRef) {
        self.register([Some(subsystem)]);
    }

    /// Number of registered subsystems.
    pub fn len(&self) -> usize {
        self.subsystems
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// True if no subsystems are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Runs one combined registry-and-subsystem update pass.
    ///
    /// Drives the [`UpdateRegistry`] first, then invokes `update()` on every
    /// registered subsystem, each followed by `sim_update()` when running in
    /// simulation.
    pub fn tick(&self) {
        self.updates.run_all();

        let snapshot: Vec<SubsystemRef> = self
            .subsystems
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        let simulated = self.runtime.is_simulation();
        for subsystem in &snapshot {
            subsystem.update();
            if simulated {
                subsystem.sim_update();
            }
        }
    }
}

impl std::fmt::Debug for SubsystemDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubsystemDispatcher")
            .field("subsystems", &self.len())
            .field("runtime", &self.runtime)
            .finish()
    }
}
