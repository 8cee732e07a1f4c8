//! # Robot abstraction.
//!
//! This module defines the [`Robot`] trait (async, cancelable) implemented by
//! user control code. The common handle type is [`RobotRef`], an
//! `Arc<dyn Robot>` suitable for sharing between the supervisor and the
//! worker.
//!
//! The robot's [`run`](Robot::run) method hosts the open-ended control loop
//! and receives a [`CancellationToken`]: the cooperative stop signal. The
//! loop should check the token every cycle and exit promptly once it is
//! cancelled.
//!
//! ## Example
//! ```
//! use async_trait::async_trait;
//! use tokio_util::sync::CancellationToken;
//! use robovisor::{Fault, Robot};
//!
//! struct MyRobot;
//!
//! #[async_trait]
//! impl Robot for MyRobot {
//!     async fn run(&self, ctx: CancellationToken) -> Result<(), Fault> {
//!         while !ctx.is_cancelled() {
//!             // dispatcher.tick(); periodic control work...
//!             tokio::time::sleep(std::time::Duration::from_millis(20)).await;
//!         }
//!         Ok(())
//!     }
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::Fault;

/// Shared handle to a user robot.
pub type RobotRef = Arc<dyn Robot>;

/// # User robot program.
///
/// Implementations host the long-running control loop in [`run`](Robot::run),
/// which is called once and is not expected to return under normal operation.
/// An external stop cancels the provided token (after invoking the optional
/// [`end`](Robot::end) hook); the loop must observe it and exit.
#[async_trait]
pub trait Robot: Send + Sync + 'static {
    /// Runs the robot's control loop until the token is cancelled.
    ///
    /// A clean return with the stop signal never delivered is reported as an
    /// unexpected return; a returned fault is reported with its origin trace.
    async fn run(&self, ctx: CancellationToken) -> Result<(), Fault>;

    /// Hook invoked when an external stop is requested, before the session
    /// token is cancelled.
    ///
    /// Called at most once per session, from the supervisor. Override to
    /// flush state or wake a loop that blocks on something other than the
    /// token. Must not block.
    fn end(&self) {}
}
