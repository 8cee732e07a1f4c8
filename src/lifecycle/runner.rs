//! # Run-protocol: hosts the user robot's construction and control loop.
//!
//! [`run_robot`] is executed by whichever context hosts the session: the
//! worker task when the HAL exposes main-loop semantics, the supervisor's own
//! task otherwise.
//!
//! ## Protocol
//! ```text
//! publish ProgramStarting
//!   │
//!   ├─ factory() fails ──► describe(fault)
//!   │      ├─► Error: "unhandled fault instantiating robot <name> ..."
//!   │      ├─► Error: quit-unexpectedly guidance
//!   │      └─► Error: "could not instantiate robot <name>!"   (return early)
//!   │
//!   ├─ store instance into the shared running slot (under lock)
//!   ├─ real hardware: best-effort version-marker write (Error on I/O fault)
//!   ├─ robot.run(token).await          (expected not to return)
//!   │      └─ Err(fault) ──► Error with origin trace; remember it
//!   └─ suppress flag unset ──► Warning: quit-unexpectedly guidance
//!          ├─ fault occurred ──► Error: "should have handled the fault"
//!          └─ clean return   ──► Error: "unexpected return from run()"
//! ```
//!
//! ## Rules
//! - Nothing escapes this boundary: every fault becomes diagnostics, never a
//!   crash.
//! - A single fault is deliberately rendered as several reports of
//!   increasing generality (severity layering for field debugging).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::error::{describe, Fault};
use crate::events::{Bus, Event, EventKind};
use crate::hal::Hal;
use crate::robot::RobotRef;

use super::shared::SessionShared;

/// Guidance text attached to every unexpected session end.
pub(crate) const QUIT_UNEXPECTEDLY: &str = "the robot program quit unexpectedly; \
this is usually due to a code error. The above diagnostics can help determine \
where the fault occurred.";

/// Everything the run-protocol needs, cloned into the hosting context.
#[derive(Clone)]
pub(crate) struct RunEnv {
    pub bus: Bus,
    pub hal: Arc<dyn Hal>,
    pub shared: Arc<SessionShared>,
    pub version_path: PathBuf,
}

/// Executes the run-protocol: construct the robot, host its control loop,
/// convert every fault into operator-visible diagnostics.
pub(crate) async fn run_robot<F>(env: RunEnv, token: CancellationToken, factory: F)
where
    F: FnOnce() -> Result<RobotRef, Fault> + Send + 'static,
{
    env.bus.publish(Event::now(EventKind::ProgramStarting));

    let robot = match factory() {
        Ok(robot) => robot,
        Err(fault) => {
            let summary = describe(&fault);
            let mut report = Event::now(EventKind::Error).with_message(format!(
                "unhandled fault instantiating robot {}: {}",
                summary.name, summary.message
            ));
            if let Some(trace) = &summary.trace {
                report = report.with_trace(trace);
            }
            env.bus.publish(report);
            env.bus
                .publish(Event::now(EventKind::Error).with_message(QUIT_UNEXPECTEDLY));
            env.bus.publish(Event::now(EventKind::Error).with_message(format!(
                "could not instantiate robot {}!",
                summary.name
            )));
            return;
        }
    };

    env.shared.store_running(Arc::clone(&robot));

    if env.hal.runtime_kind().is_real() {
        if let Err(err) = write_version_marker(&env.version_path) {
            env.bus.publish(Event::now(EventKind::Error).with_message(format!(
                "could not write version marker {}: {err}",
                env.version_path.display()
            )));
        }
    }

    // run() never returns unless the session is stopped or a fault occurs.
    let error_on_exit = match robot.run(token).await {
        Ok(()) => false,
        Err(fault) => {
            let summary = describe(&fault);
            let mut report = Event::now(EventKind::Error)
                .with_message(format!("unhandled fault: {}", summary.message));
            if let Some(trace) = &summary.trace {
                report = report.with_trace(trace);
            }
            env.bus.publish(report);
            true
        }
    };

    if !env.shared.suppress() {
        env.bus
            .publish(Event::now(EventKind::Warning).with_message(QUIT_UNEXPECTEDLY));
        if error_on_exit {
            env.bus.publish(Event::now(EventKind::Error).with_message(
                "the run() method (or methods called by it) should have handled the fault above",
            ));
        } else {
            env.bus.publish(
                Event::now(EventKind::Error).with_message("unexpected return from the run() method"),
            );
        }
    }
}

/// Writes the plain-text version marker (`"Rust <crate version>"`).
///
/// Best-effort: the caller reports failures as non-fatal errors.
pub(crate) fn write_version_marker(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, format!("Rust {}", env!("CARGO_PKG_VERSION")))
}
