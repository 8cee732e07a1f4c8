//! # Global runtime configuration.
//!
//! Provides [`Config`], centralized settings for the lifecycle runtime.
//!
//! Config is consumed by [`LifecycleBuilder`](crate::LifecycleBuilder) at
//! construction and carried by the controller for the duration of the
//! session. All fields are public for flexibility; the defaults reproduce the
//! documented constants of the protocol (HAL init timeout 500 ms, readiness
//! budget 100 × 10 ms, worker join grace 1000 ms).

use std::path::PathBuf;
use std::time::Duration;

/// Global configuration for the lifecycle runtime.
///
/// Defines:
/// - **HAL bring-up**: init timeout and mode flags
/// - **Data-service readiness**: poll interval and bounded attempt budget
/// - **Shutdown behavior**: grace period for the worker join
/// - **Event system**: bus capacity for diagnostic delivery
/// - **Best-effort extras**: notifier priority, version-marker path
#[derive(Clone, Debug)]
pub struct Config {
    /// Timeout budget handed to `Hal::initialize`.
    ///
    /// Initialization failure within this budget is fatal.
    pub hal_init_timeout: Duration,

    /// Mode flags handed to `Hal::initialize` (HAL-defined; `0` = defaults).
    pub hal_init_mode: i32,

    /// Maximum number of readiness-poll attempts for the data-sharing
    /// service before giving up and proceeding anyway.
    ///
    /// The wait is best-effort: exhaustion is reported as a warning, never an
    /// error.
    pub readiness_attempts: u32,

    /// Delay between consecutive readiness-poll attempts.
    pub readiness_interval: Duration,

    /// Maximum time the supervisor waits for the worker task after an
    /// external stop before proceeding to shutdown.
    ///
    /// A worker that outlives the grace keeps running detached; this is
    /// accepted so a stuck robot loop cannot block process termination.
    pub join_grace: Duration,

    /// Capacity of the diagnostic bus broadcast channel ring buffer.
    ///
    /// Slow subscribers that lag behind more than `bus_capacity` messages
    /// will receive `Lagged` and skip older items. Minimum value is 1
    /// (enforced by the bus).
    pub bus_capacity: usize,

    /// Real-time priority requested for the HAL notifier thread.
    ///
    /// Elevation failure is reported as a warning, never an error.
    pub notifier_priority: i32,

    /// Path of the plain-text version marker written on real hardware.
    ///
    /// Content is `"Rust <crate version>"`. The write is best-effort.
    pub version_path: PathBuf,

    /// Persistence file handed to the data-sharing service on real hardware.
    ///
    /// In simulation the service is started without persistence (ephemeral
    /// in-memory store).
    pub persistence_path: PathBuf,
}

impl Config {
    /// Returns a bus capacity clamped to a minimum of 1.
    #[inline]
    pub fn bus_capacity_clamped(&self) -> usize {
        self.bus_capacity.max(1)
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `hal_init_timeout = 500ms`, `hal_init_mode = 0`
    /// - `readiness_attempts = 100`, `readiness_interval = 10ms` (≈ 1 s budget)
    /// - `join_grace = 1000ms`
    /// - `bus_capacity = 1024`
    /// - `notifier_priority = 40`
    /// - `version_path = /tmp/robot_versions/lib_version.ini`
    /// - `persistence_path = /home/robot/datashare.json`
    fn default() -> Self {
        Self {
            hal_init_timeout: Duration::from_millis(500),
            hal_init_mode: 0,
            readiness_attempts: 100,
            readiness_interval: Duration::from_millis(10),
            join_grace: Duration::from_millis(1000),
            bus_capacity: 1024,
            notifier_priority: 40,
            version_path: PathBuf::from("/tmp/robot_versions/lib_version.ini"),
            persistence_path: PathBuf::from("/home/robot/datashare.json"),
        }
    }
}
