//! Session state shared between the supervisor and the worker.
//!
//! Exactly two pieces of state cross the supervisor/worker boundary: the
//! currently running robot instance and the exit-warning suppression flag.
//! Both live behind one plain mutex, held only for the duration of the
//! read/write and never across an await point. Contention is rare (at most
//! one writer transition per session), so nothing fancier is warranted.

use std::sync::{Mutex, PoisonError};

use crate::robot::RobotRef;

#[derive(Default)]
struct SessionState {
    running: Option<RobotRef>,
    suppress_exit_warning: bool,
}

/// State shared between the supervisor and the worker contexts.
#[derive(Default)]
pub(crate) struct SessionShared {
    inner: Mutex<SessionState>,
}

impl SessionShared {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Stores the running robot instance, replacing any prior value.
    pub(crate) fn store_running(&self, robot: RobotRef) {
        self.lock().running = Some(robot);
    }

    /// Clones the running robot instance, if one was stored.
    pub(crate) fn running(&self) -> Option<RobotRef> {
        self.lock().running.clone()
    }

    /// Sets the exit-warning suppression flag.
    pub(crate) fn set_suppress(&self, value: bool) {
        self.lock().suppress_exit_warning = value;
    }

    /// Reads the exit-warning suppression flag.
    pub(crate) fn suppress(&self) -> bool {
        self.lock().suppress_exit_warning
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SessionState> {
        // The lock is never held across a blocking call, and a poisoned
        // state (panicking writer) still holds valid data for our two flags.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
