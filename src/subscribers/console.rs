//! # ConsoleReporter — simple diagnostic printer
//!
//! A minimal subscriber that prints incoming [`Event`]s to stdout/stderr.
//! Use it for tests, demos, or as a reference when writing a real
//! driver-station forwarder.
//!
//! ## Example output
//! ```text
//! ********** Robot program starting **********
//! [stop-requested]
//! ERROR: could not instantiate robot MyRobot!
//! WARNING: the robot program quit unexpectedly
//! ```

use async_trait::async_trait;

use crate::events::{Event, EventKind};
use crate::subscribers::Subscribe;

/// Diagnostic-event printer subscriber.
#[derive(Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Construct a new [`ConsoleReporter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Subscribe for ConsoleReporter {
    async fn on_event(&self, e: &Event) {
        match e.kind {
            EventKind::ProgramStarting => {
                println!("********** Robot program starting **********");
            }
            EventKind::StopRequested => {
                println!("[stop-requested]");
            }
            EventKind::Error => {
                eprintln!("ERROR: {}", e.message.as_deref().unwrap_or("unknown"));
                if let Some(trace) = &e.trace {
                    eprintln!("  {trace}");
                }
            }
            EventKind::Warning => match &e.subsystem {
                Some(subsystem) => {
                    eprintln!(
                        "WARNING: {} (subsystem {subsystem})",
                        e.message.as_deref().unwrap_or("unknown"),
                    );
                }
                None => {
                    eprintln!("WARNING: {}", e.message.as_deref().unwrap_or("unknown"));
                }
            },
        }
    }

    fn name(&self) -> &'static str {
        "ConsoleReporter"
    }
}
