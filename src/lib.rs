//! # robovisor
//!
//! **Robovisor** is a robot-process lifecycle runtime for Rust.
//!
//! It owns the bring-up, supervision, and teardown of a robot program: HAL
//! initialization, hosting the user robot's control loop, periodic-update
//! dispatch for subsystems, and layered fault diagnostics. The crate is
//! designed as the foundation a concrete robot program is composed on.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!                     ┌────────────────────┐
//!                     │  composition root  │
//!                     │ (user robot + HAL) │
//!                     └─────────┬──────────┘
//!                               ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  LifecycleBuilder (one-time construction)                         │
//! │  - HAL init (fatal on failure)                                    │
//! │  - Bus (broadcast diagnostics)                                    │
//! │  - SubscriberSet (fans out to diagnostic subscribers)             │
//! │  - data-service start + bounded readiness wait                    │
//! └─────────┬─────────────────────────────────────────────────────────┘
//!           ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  LifecycleController (supervisor)                                 │
//! │  - start(factory): hosts the robot session                        │
//! │  - mode predicates (forwarded to the Station)                     │
//! │  - ExitAction (explicit process-exit value)                       │
//! └─────────┬─────────────────────────────────────────┬───────────────┘
//!           ▼                                         │
//!     ┌───────────────────┐                           │
//!     │   worker task     │                           │
//!     │ run-protocol:     │                           │
//!     │ - factory()       │     Publishes Events:     │
//!     │ - robot.run(ctx)  │     - ProgramStarting     │
//!     │ - fault reports   │     - StopRequested       │
//!     └┬──────────────────┘     - Error / Warning     │
//!      │                                              │
//!      ▼                                              ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                      Bus (broadcast channel)                      │
//! │                  (capacity: Config::bus_capacity)                 │
//! └─────────────────────────────────┬─────────────────────────────────┘
//!                                   ▼
//!                       ┌────────────────────────┐
//!                       │   reporter_listener    │
//!                       │ (in LifecycleBuilder)  │
//!                       └───────────┬────────────┘
//!                                   ▼
//!                             SubscriberSet
//!                           (per-sub queues)
//!                        ┌─────────┼─────────┐
//!                        ▼         ▼         ▼
//!                        worker1  worker2  workerN
//!                        ▼         ▼         ▼
//!                   sub1.on   sub2.on   subN.on
//!                    _event()  _event()  _event()
//! ```
//!
//! ### Session lifecycle
//! ```text
//! LifecycleBuilder::build() ──► LifecycleController::start(factory)
//!
//! start {
//!   ├─► re-confirm HAL init (failure fatal)
//!   ├─► Station::refresh_data(), usage report ("Rust <version>")
//!   ├─► best-effort notifier-priority elevation
//!   ├─► spawn worker: run-protocol
//!   │       ├─► publish ProgramStarting
//!   │       ├─► factory() ─ Err ──► 3 layered Error reports, done
//!   │       ├─► store running instance, version marker (hardware only)
//!   │       ├─► robot.run(token).await   (expected not to return)
//!   │       └─► quit-unexpectedly diagnostics (unless suppressed)
//!   ├─► await HAL::run_main()            (returns on external stop)
//!   ├─► suppress warning, publish StopRequested
//!   ├─► robot.end() ──► cancel token ──► bounded join (join_grace)
//!   ├─► HAL::shutdown()
//!   └─► ExitAction { code: 0 }
//! }
//! ```
//!
//! Alongside the session, [`SubsystemDispatcher`] drives periodic updates:
//! an external timing source calls [`tick`](SubsystemDispatcher::tick) each
//! cycle, which runs the registered callbacks (behind an irreversible enable
//! latch) and then every subsystem's `update` (plus `sim_update` in
//! simulation).
//!
//! ## Features
//! | Area              | Description                                                          | Key types / traits                           |
//! |-------------------|----------------------------------------------------------------------|----------------------------------------------|
//! | **Lifecycle**     | Construct, supervise, and tear down the robot session.               | [`LifecycleBuilder`], [`LifecycleController`] |
//! | **Robot API**     | Define the robot as an async control loop with a cooperative stop.   | [`Robot`], [`RobotRef`]                      |
//! | **Dispatch**      | Periodic updates for subsystems and latched callbacks.               | [`SubsystemDispatcher`], [`UpdateRegistry`]  |
//! | **HAL seams**     | Abstract the hardware layer, driver station, and data service.       | [`Hal`], [`Station`], [`DataService`]        |
//! | **Diagnostics**   | Layered fault reporting over a broadcast bus.                        | [`Event`], [`Bus`], [`Subscribe`]            |
//! | **Errors**        | Typed fatal errors and user-code faults with pure rendering.         | [`RuntimeError`], [`Fault`], [`describe`]    |
//! | **Configuration** | Centralize runtime settings.                                         | [`Config`]                                   |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`ConsoleReporter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust,no_run
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use tokio_util::sync::CancellationToken;
//! use robovisor::{Config, Fault, LifecycleBuilder, Robot, RobotRef};
//! # use robovisor::{DataService, DataState, Hal, Station};
//! # use std::path::Path;
//! # fn hal() -> Arc<dyn Hal> { unimplemented!() }
//! # fn station() -> Arc<dyn Station> { unimplemented!() }
//! # fn data() -> Arc<dyn DataService> { unimplemented!() }
//!
//! struct MyRobot;
//!
//! #[async_trait]
//! impl Robot for MyRobot {
//!     async fn run(&self, ctx: CancellationToken) -> Result<(), Fault> {
//!         // Control loop: run until an external stop cancels the token.
//!         ctx.cancelled().await;
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let controller = LifecycleBuilder::new(Config::default(), hal(), station(), data())
//!         .build()
//!         .await?;
//!
//!     let exit = controller
//!         .start(|| Ok(Arc::new(MyRobot) as RobotRef))
//!         .await?;
//!     exit.perform()
//! }
//! ```

mod config;
mod dispatch;
mod error;
mod events;
mod hal;
mod lifecycle;
mod robot;
mod subscribers;

// ---- Public re-exports ----

pub use config::Config;
pub use dispatch::{Subsystem, SubsystemDispatcher, SubsystemRef, UpdateRegistry};
pub use error::{describe, Fault, FaultSummary, Origin, RuntimeError};
pub use events::{Bus, Event, EventKind};
pub use hal::{
    DataService, DataState, Hal, RuntimeKind, Station, UsageResource, LANGUAGE_RUST,
};
pub use lifecycle::{DelegateHook, ExitAction, LifecycleBuilder, LifecycleController};
pub use robot::{Robot, RobotRef};
pub use subscribers::{Subscribe, SubscriberSet};

// Optional: expose a simple built-in console subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::ConsoleReporter;
