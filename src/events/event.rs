//! # Runtime events emitted by the lifecycle controller and dispatcher.
//!
//! The [`EventKind`] enum classifies event types across two categories:
//! - **Lifecycle events**: session flow (program starting, stop requested)
//! - **Diagnostics**: operator-visible errors and warnings
//!
//! The [`Event`] struct carries additional metadata such as timestamps,
//! message text, origin traces, and subsystem names.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases
//! monotonically. Use `seq` to restore the exact order when events are
//! delivered out of order.
//!
//! ## Diagnostic layering
//! A single fault is deliberately rendered as several events of increasing
//! generality (specific cause, generic guidance, final summary): the process
//! runs in a no-attached-debugger field environment, and repetition maximizes
//! operator diagnosability.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of runtime events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    // === Session lifecycle ===
    /// The run-protocol announced the start of the robot program.
    ///
    /// Sets:
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    ProgramStarting,

    /// An external stop was observed; cooperative termination follows.
    ///
    /// Sets:
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    StopRequested,

    // === Diagnostics ===
    /// Operator-visible error report.
    ///
    /// Sets:
    /// - `message`: error text
    /// - `trace`: origin trace, when the fault carried one
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    Error,

    /// Operator-visible warning report.
    ///
    /// Sets:
    /// - `message`: warning text
    /// - `subsystem`: subsystem name, for registration warnings
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    Warning,
}

/// Runtime event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the [`EventKind`]
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,
    /// Human-readable message (errors, warnings).
    pub message: Option<Arc<str>>,
    /// Origin trace accompanying an error, if available.
    pub trace: Option<Arc<str>>,
    /// Name of the subsystem involved, if applicable.
    pub subsystem: Option<Arc<str>>,
}

impl Event {
    /// Creates a new event of the given kind with the current timestamp and
    /// the next global sequence number.
    pub fn now(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            message: None,
            trace: None,
            subsystem: None,
        }
    }

    /// Sets the message text.
    #[must_use]
    pub fn with_message(mut self, message: impl AsRef<str>) -> Self {
        self.message = Some(Arc::from(message.as_ref()));
        self
    }

    /// Sets the origin trace.
    #[must_use]
    pub fn with_trace(mut self, trace: impl AsRef<str>) -> Self {
        self.trace = Some(Arc::from(trace.as_ref()));
        self
    }

    /// Sets the subsystem name.
    #[must_use]
    pub fn with_subsystem(mut self, subsystem: impl AsRef<str>) -> Self {
        self.subsystem = Some(Arc::from(subsystem.as_ref()));
        self
    }
}
