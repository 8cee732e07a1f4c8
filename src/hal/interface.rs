//! # Hardware abstraction layer contract.
//!
//! [`Hal`] is the boundary between the lifecycle core and the hardware /
//! telemetry collaborator. The core only needs init/report/shutdown plus the
//! main-loop hosting primitives; everything else about the hardware is out of
//! scope.
//!
//! ## Main-loop hosting
//! Some hosts require the robot program's outer loop to run on the caller's
//! thread (e.g. display or driver-station pumps). Such a HAL reports
//! `has_main() == true` and provides a blocking [`Hal::run_main`] that
//! completes only when an external stop is requested; the supervisor then
//! runs the robot on a separate worker task. A HAL without main-loop
//! semantics runs the robot directly on the calling task.

use std::time::Duration;

use async_trait::async_trait;

use super::runtime::RuntimeKind;

/// Usage-telemetry resource categories understood by the HAL.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageResource {
    /// Implementation language of the robot program.
    Language,
}

/// Instance tag for [`UsageResource::Language`] reports.
pub const LANGUAGE_RUST: i32 = 6;

/// # Hardware/telemetry collaborator.
///
/// Implementations wrap the real vendor HAL on hardware, or a pure in-process
/// stand-in for simulation and tests. All methods other than [`Hal::run_main`]
/// are expected to return promptly.
#[async_trait]
pub trait Hal: Send + Sync + 'static {
    /// Initializes the HAL within the given timeout budget.
    ///
    /// Idempotent: re-initializing an already-initialized HAL returns `true`.
    /// Returns `false` on failure, which the lifecycle treats as fatal.
    fn initialize(&self, timeout: Duration, mode: i32) -> bool;

    /// Emits a usage-telemetry report (informational only).
    fn report(&self, resource: UsageResource, instance: i32, feature: &str);

    /// Shuts the HAL down. Called unconditionally at the end of `start`.
    fn shutdown(&self);

    /// True when this HAL requires the outer loop to run on the caller's
    /// thread (see module docs).
    fn has_main(&self) -> bool;

    /// Hosts the HAL main loop; completes when an external stop is requested.
    ///
    /// Only meaningful when [`Hal::has_main`] is true. The supervisor awaits
    /// this while the robot runs on a worker task.
    async fn run_main(&self);

    /// Signals the HAL main loop to return.
    ///
    /// Called by the worker after the run-protocol completes, so a robot that
    /// exits on its own also unblocks the supervisor.
    fn exit_main(&self);

    /// Best-effort elevation of the HAL notifier thread priority.
    ///
    /// Returns `false` on failure; the lifecycle logs a warning and proceeds.
    fn set_notifier_priority(&self, realtime: bool, priority: i32) -> bool;

    /// Reports the environment this process runs in.
    fn runtime_kind(&self) -> RuntimeKind;
}
