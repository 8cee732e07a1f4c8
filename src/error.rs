//! Error types used by the robovisor runtime and user robot code.
//!
//! This module defines two main error types:
//!
//! - [`RuntimeError`] — fatal failures raised by the lifecycle runtime itself.
//! - [`Fault`] — a fault raised by user-supplied robot code (factory or run
//!   loop), carrying an optional inner cause and an optional origin location.
//!
//! A fault never crosses the run-protocol boundary as a panic or a process
//! abort: both fault handling paths convert it to operator-visible diagnostics
//! via the pure [`describe`] function.

use std::fmt;

use thiserror::Error;

/// # Errors produced by the lifecycle runtime.
///
/// These represent failures of the orchestration itself, not of user robot
/// code. They are fatal: the process must not continue past them.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// The hardware abstraction layer failed to initialize.
    ///
    /// Raised at controller construction and re-checked at `start`; there is
    /// no recovery path.
    #[error("failed to initialize the hardware abstraction layer; terminating")]
    HalInit,
}

/// Source location a fault originated from.
///
/// A best-effort record of the frame that raised the fault. Robot code builds
/// one explicitly (there is no stack unwinding involved); the runtime only
/// reads it when rendering diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    /// Symbol (type or function path) the fault originated in.
    pub symbol: String,
    /// Source file, if known.
    pub file: Option<String>,
    /// Line within `file`, if known.
    pub line: Option<u32>,
}

impl Origin {
    /// Creates an origin from a symbol name only.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            file: None,
            line: None,
        }
    }

    /// Creates an origin with full location info.
    pub fn at(symbol: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self {
            symbol: symbol.into(),
            file: Some(file.into()),
            line: Some(line),
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.file, self.line) {
            (Some(file), Some(line)) => write!(f, "{} ({file}:{line})", self.symbol),
            (Some(file), None) => write!(f, "{} ({file})", self.symbol),
            _ => write!(f, "{}", self.symbol),
        }
    }
}

/// # Fault raised by user robot code.
///
/// The tagged replacement for exception-as-control-flow: a message, an
/// optional inner cause (`caused_by`), and an optional [`Origin`]. Both the
/// factory-fault and run-fault handling paths feed it to [`describe`], which
/// unwraps the innermost cause exactly once.
///
/// ## Example
/// ```
/// use robovisor::{Fault, Origin, describe};
///
/// let inner = Fault::new("sensor returned garbage")
///     .with_origin(Origin::new("drivetrain::Gyro"));
/// let outer = Fault::new("drivetrain init failed").caused_by(inner);
///
/// let summary = describe(&outer);
/// assert_eq!(summary.name, "drivetrain::Gyro");
/// assert_eq!(summary.message, "sensor returned garbage");
/// ```
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Fault {
    /// Human-readable failure message.
    pub message: String,
    /// Frame the fault originated from, if recorded.
    pub origin: Option<Origin>,
    /// Inner cause, if this fault wraps another.
    pub cause: Option<Box<Fault>>,
}

impl Fault {
    /// Creates a fault with a message and no origin or cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            origin: None,
            cause: None,
        }
    }

    /// Attaches the originating frame.
    #[must_use]
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Wraps another fault as the inner cause.
    #[must_use]
    pub fn caused_by(mut self, cause: Fault) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Returns the innermost fault in the cause chain (self if none).
    pub fn root(&self) -> &Fault {
        let mut cur = self;
        while let Some(cause) = &cur.cause {
            cur = cause;
        }
        cur
    }
}

/// Operator-facing rendering of a [`Fault`].
///
/// Produced by [`describe`]; consumed by the run-protocol when publishing
/// diagnostic events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaultSummary {
    /// Best-effort robot/symbol name derived from the origin frame.
    ///
    /// Falls back to `"Unknown"` when the fault carries no origin.
    pub name: String,
    /// Message of the innermost cause.
    pub message: String,
    /// Rendered origin trace, if any.
    pub trace: Option<String>,
}

/// Renders a fault for operator-visible reporting.
///
/// Unwraps to the innermost cause, derives the name from its origin frame
/// (fallback `"Unknown"`), and formats the trace. Pure: both fault-handling
/// paths of the run-protocol call it identically.
pub fn describe(fault: &Fault) -> FaultSummary {
    let root = fault.root();
    let name = root
        .origin
        .as_ref()
        .map(|o| o.symbol.clone())
        .unwrap_or_else(|| "Unknown".to_string());
    FaultSummary {
        name,
        message: root.message.clone(),
        trace: root.origin.as_ref().map(|o| format!("at {o}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_unwraps_innermost_cause() {
        let inner =
            Fault::new("actuator jammed").with_origin(Origin::at("arm::Claw", "claw.rs", 42));
        let mid = Fault::new("arm fault").caused_by(inner);
        let outer = Fault::new("init failed").caused_by(mid);

        let summary = describe(&outer);
        assert_eq!(summary.name, "arm::Claw");
        assert_eq!(summary.message, "actuator jammed");
        assert_eq!(summary.trace.as_deref(), Some("at arm::Claw (claw.rs:42)"));
    }

    #[test]
    fn test_describe_without_origin_falls_back_to_unknown() {
        let summary = describe(&Fault::new("boom"));
        assert_eq!(summary.name, "Unknown");
        assert_eq!(summary.message, "boom");
        assert!(summary.trace.is_none());
    }

    #[test]
    fn test_describe_is_identical_for_wrapped_and_bare_fault() {
        let bare = Fault::new("boom").with_origin(Origin::new("MyRobot"));
        let wrapped =
            Fault::new("outer").caused_by(Fault::new("boom").with_origin(Origin::new("MyRobot")));
        assert_eq!(describe(&bare), describe(&wrapped));
    }
}
