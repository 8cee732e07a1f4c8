//! # LifecycleController: supervisor for the robot-process session.
//!
//! The controller owns the external-collaborator handles, the diagnostic bus,
//! and the small slice of state shared with the worker. It implements the
//! start/stop protocol:
//!
//! ## `start` protocol
//! ```text
//! start(factory)
//!   ├─► re-confirm HAL init (idempotent; failure fatal)
//!   ├─► Station::refresh_data()
//!   ├─► usage-telemetry report ("Rust <version>")
//!   ├─► best-effort notifier-priority elevation (Warning on failure)
//!   ├─► HAL has main-loop semantics?
//!   │     ├─ yes: spawn worker ──► run-protocol ──► HAL::exit_main()
//!   │     │       await HAL::run_main()       (returns on external stop)
//!   │     │       set suppress flag
//!   │     │       publish StopRequested
//!   │     │       robot.end() (if stored) ──► cancel session token
//!   │     │       bounded join (cfg.join_grace); proceed regardless
//!   │     └─ no:  run-protocol inline on this task
//!   ├─► drain diagnostics (queued reports reach subscribers)
//!   ├─► HAL::shutdown()
//!   └─► ExitAction { code: 0 }     (unconditional process-exit policy)
//! ```
//!
//! ## Rules
//! - The shared mutex (running instance + suppress flag) is held only for
//!   the read/write, never across an await point.
//! - The worker is detached: if it outlives the join grace it keeps running
//!   in the background while the process shuts down. Accepted, not a bug —
//!   this is what makes a stuck robot loop unable to block termination.
//! - Termination is unconditional once `start` has passed HAL init: every
//!   path funnels into `HAL::shutdown()` and the returned [`ExitAction`].

use std::sync::Arc;
use std::thread::{self, ThreadId};

use tokio::sync::{mpsc, oneshot};
use tokio::time;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::error::{Fault, RuntimeError};
use crate::events::{Bus, Event, EventKind};
use crate::hal::{Hal, Station, UsageResource, LANGUAGE_RUST};
use crate::robot::RobotRef;
use crate::subscribers::SubscriberSet;

use super::runner::{run_robot, RunEnv};
use super::shared::SessionShared;

/// Explicit terminal action of the session state machine.
///
/// The original design exits the process unconditionally at the end of
/// `start`; reifying that as a value lets embedding contexts (tests,
/// harnesses) intercept it. The composition root calls
/// [`perform`](ExitAction::perform).
#[must_use = "the process is expected to terminate; call perform() or inspect code()"]
#[derive(Debug)]
pub struct ExitAction {
    code: i32,
}

impl ExitAction {
    /// The process exit code (success is 0; this core never produces a
    /// distinct failure code).
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Terminates the process with the carried exit code.
    pub fn perform(self) -> ! {
        std::process::exit(self.code)
    }
}

/// Supervisor for the robot-process session.
///
/// Constructed once per process by [`LifecycleBuilder`](super::LifecycleBuilder);
/// at most one `start` call is meaningful per process.
pub struct LifecycleController {
    cfg: Config,
    hal: Arc<dyn Hal>,
    station: Arc<dyn Station>,
    bus: Bus,
    /// Kept alive so subscriber workers keep draining their queues.
    subs: Arc<SubscriberSet>,
    /// Drain handle into the reporter listener (see `drain_diagnostics`).
    flusher: mpsc::Sender<oneshot::Sender<()>>,
    pub(crate) shared: Arc<SessionShared>,
    main_thread: ThreadId,
}

impl LifecycleController {
    pub(crate) fn new_internal(
        cfg: Config,
        hal: Arc<dyn Hal>,
        station: Arc<dyn Station>,
        bus: Bus,
        subs: Arc<SubscriberSet>,
        flusher: mpsc::Sender<oneshot::Sender<()>>,
        shared: Arc<SessionShared>,
        main_thread: ThreadId,
    ) -> Self {
        Self {
            cfg,
            hal,
            station,
            bus,
            subs,
            flusher,
            shared,
            main_thread,
        }
    }

    /// Handle to the diagnostic bus, for wiring the dispatcher and ad-hoc
    /// receivers at the composition root.
    pub fn bus(&self) -> Bus {
        self.bus.clone()
    }

    /// Identity of the thread that constructed the runtime.
    pub fn main_thread_id(&self) -> ThreadId {
        self.main_thread
    }

    /// True when called from the thread that constructed the runtime.
    pub fn is_main_thread(&self) -> bool {
        thread::current().id() == self.main_thread
    }

    /// Suppresses (or restores) the quit-unexpectedly warning emitted when
    /// the session ends. Callable from any thread; the stop path sets it so a
    /// deliberate shutdown stays quiet.
    pub fn suppress_exit_warning(&self, value: bool) {
        self.shared.set_suppress(value);
    }

    /// Runs the session to completion: hosts the robot produced by `factory`
    /// until it ends or an external stop arrives, then shuts the HAL down.
    ///
    /// Returns the terminal [`ExitAction`] (always exit code 0). The only
    /// error is a fatal HAL re-initialization failure.
    pub async fn start<F>(&self, factory: F) -> Result<ExitAction, RuntimeError>
    where
        F: FnOnce() -> Result<RobotRef, Fault> + Send + 'static,
    {
        if !self
            .hal
            .initialize(self.cfg.hal_init_timeout, self.cfg.hal_init_mode)
        {
            return Err(RuntimeError::HalInit);
        }
        self.station.refresh_data();

        self.hal.report(
            UsageResource::Language,
            LANGUAGE_RUST,
            concat!("Rust ", env!("CARGO_PKG_VERSION")),
        );

        if !self
            .hal
            .set_notifier_priority(true, self.cfg.notifier_priority)
        {
            self.bus.publish(Event::now(EventKind::Warning).with_message(format!(
                "setting HAL notifier priority to {} failed",
                self.cfg.notifier_priority
            )));
        }

        let env = RunEnv {
            bus: self.bus.clone(),
            hal: Arc::clone(&self.hal),
            shared: Arc::clone(&self.shared),
            version_path: self.cfg.version_path.clone(),
        };
        let token = CancellationToken::new();

        if self.hal.has_main() {
            let hal = Arc::clone(&self.hal);
            let worker_token = token.clone();
            let worker = tokio::spawn(async move {
                run_robot(env, worker_token, factory).await;
                hal.exit_main();
            });

            // Returns when an external stop is requested (or the worker
            // finished on its own and called exit_main).
            self.hal.run_main().await;

            self.suppress_exit_warning(true);
            self.bus.publish(Event::now(EventKind::StopRequested));
            if let Some(robot) = self.shared.running() {
                robot.end();
            }
            token.cancel();

            // Bounded join: proceed regardless, a stuck worker stays
            // detached and cannot block process termination.
            let _ = time::timeout(self.cfg.join_grace, worker).await;
        } else {
            run_robot(env, token, factory).await;
        }

        self.drain_diagnostics().await;
        self.hal.shutdown();
        Ok(ExitAction { code: 0 })
    }

    /// Waits until every diagnostic published so far has been handed to the
    /// subscribers.
    ///
    /// The session ends in an unconditional process exit; without this
    /// barrier the final fault reports would still be sitting in queues when
    /// the process dies.
    async fn drain_diagnostics(&self) {
        let (ack, done) = oneshot::channel();
        if self.flusher.send(ack).await.is_ok() {
            let _ = done.await;
        }
    }

    // Mode-query convenience predicates, forwarded to the station.

    /// True if the robot is currently disabled.
    pub fn is_disabled(&self) -> bool {
        self.station.is_disabled()
    }

    /// True if the robot is currently enabled.
    pub fn is_enabled(&self) -> bool {
        self.station.is_enabled()
    }

    /// True if the autonomous mode is selected.
    pub fn is_autonomous(&self) -> bool {
        self.station.is_autonomous()
    }

    /// True if the autonomous mode is selected and the robot is enabled.
    pub fn is_autonomous_enabled(&self) -> bool {
        self.station.is_autonomous_enabled()
    }

    /// True if the test mode is selected.
    pub fn is_test(&self) -> bool {
        self.station.is_test()
    }

    /// True if the test mode is selected and the robot is enabled.
    pub fn is_test_enabled(&self) -> bool {
        self.station.is_test_enabled()
    }

    /// True if the tele-operated mode is selected.
    pub fn is_teleop(&self) -> bool {
        self.station.is_teleop()
    }

    /// True if the tele-operated mode is selected and the robot is enabled.
    pub fn is_teleop_enabled(&self) -> bool {
        self.station.is_teleop_enabled()
    }

    /// Number of diagnostic subscribers attached at construction.
    pub fn subscriber_count(&self) -> usize {
        self.subs.len()
    }
}
