//! # Data-sharing service contract.
//!
//! [`DataService`] is the boundary to the networked publish/subscribe store
//! used for live telemetry and configuration exchange. The lifecycle only
//! needs to start it (with or without persistence) and to poll its startup
//! handshake; everything else about the store is out of scope.

use std::path::Path;

/// Transitional and steady states reported by the data-sharing service.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataState {
    /// The service is still starting up; clients should wait.
    Starting,
    /// The service is serving.
    Running,
    /// The service is not running.
    Stopped,
}

/// External data-sharing service collaborator.
pub trait DataService: Send + Sync + 'static {
    /// Starts the service.
    ///
    /// `persistence`: backing store for persistent values on real hardware;
    /// `None` starts an ephemeral in-memory store (simulation).
    fn start_server(&self, persistence: Option<&Path>);

    /// Reports the current set of service states.
    ///
    /// Polled by the lifecycle for [`DataState::Starting`] during the
    /// best-effort readiness wait.
    fn states(&self) -> Vec<DataState>;

    /// Disables always-on telemetry-widget auto-registration side effects
    /// from companion visualization tooling.
    ///
    /// A pure configuration call; the lifecycle issues it once at
    /// construction.
    fn disable_actuator_widgets(&self);
}
