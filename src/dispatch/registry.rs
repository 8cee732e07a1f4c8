//! # UpdateRegistry: ordered periodic-update callbacks behind an enable latch.
//!
//! An append-only mapping from a monotonically assigned slot index to a
//! zero-argument callback, plus a global enable latch. The
//! [`SubsystemDispatcher`](crate::SubsystemDispatcher) drives it first on
//! every tick.
//!
//! ## Rules
//! - Indices are assigned by insertion order starting at 0; no removal, so
//!   they always form the contiguous range `[0, count)`.
//! - The latch starts **disabled**; [`enable`](UpdateRegistry::enable) is
//!   idempotent and irreversible (there is deliberately no `disable`:
//!   enablement is a one-way arming step during robot init).
//! - [`run_all`](UpdateRegistry::run_all) is a no-op while disabled;
//!   otherwise it invokes every callback in ascending index order,
//!   synchronously, on the calling thread. Callbacks are infallible `Fn()`;
//!   a panicking callback propagates to the caller.
//! - Registration is expected only during setup. Registering concurrently
//!   with a running tick is the caller's responsibility to avoid.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

/// Registered periodic-update callback.
type Callback = Box<dyn Fn() + Send + Sync>;

/// Ordered, append-only registry of periodic-update callbacks.
///
/// Explicitly constructed and passed from the composition root; there is no
/// hidden global instance.
#[derive(Default)]
pub struct UpdateRegistry {
    callbacks: RwLock<Vec<Callback>>,
    enabled: AtomicBool,
}

impl UpdateRegistry {
    /// Creates an empty, disabled registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the registry. Idempotent; there is no way back to disabled.
    pub fn enable(&self) {
        self.enabled.store(true, Ordering::Release);
    }

    /// True once [`enable`](UpdateRegistry::enable) has been called.
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    /// Appends a callback at the next slot index. Never fails.
    pub fn add_callback(&self, action: impl Fn() + Send + Sync + 'static) {
        // A poisoned lock (panicking callback mid-run) still holds a valid
        // vector; keep accepting registrations.
        self.callbacks
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Box::new(action));
    }

    /// Number of registered callbacks.
    pub fn len(&self) -> usize {
        self.callbacks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// True if no callbacks are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Runs every registered callback in registration order.
    ///
    /// Returns immediately (no error) while the registry is disabled.
    pub fn run_all(&self) {
        if !self.is_enabled() {
            return;
        }
        let callbacks = self
            .callbacks
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        for action in callbacks.iter() {
            action();
        }
    }
}

impl std::fmt::Debug for UpdateRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateRegistry")
            .field("len", &self.len())
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
