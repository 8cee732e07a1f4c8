//! # Operator-station status contract.
//!
//! [`Station`] is the boundary to the external status collaborator: the thing
//! that knows whether the robot is enabled and which mode the operator has
//! selected. The lifecycle controller forwards its mode-query convenience
//! predicates here and forces a data refresh once before first use.

/// External status collaborator (enabled/disabled state and operating mode).
///
/// Operator-visible error reporting is *not* part of this contract; the core
/// publishes diagnostics on the [`Bus`](crate::events::Bus) and subscribers
/// deliver them.
pub trait Station: Send + Sync + 'static {
    /// True if the robot is currently disabled.
    fn is_disabled(&self) -> bool;

    /// True if the robot is currently enabled.
    fn is_enabled(&self) -> bool;

    /// True if the autonomous mode is selected.
    fn is_autonomous(&self) -> bool;

    /// True if the autonomous mode is selected and the robot is enabled.
    fn is_autonomous_enabled(&self) -> bool;

    /// True if the test mode is selected.
    fn is_test(&self) -> bool;

    /// True if the test mode is selected and the robot is enabled.
    fn is_test_enabled(&self) -> bool;

    /// True if the tele-operated mode is selected.
    fn is_teleop(&self) -> bool;

    /// True if the tele-operated mode is selected and the robot is enabled.
    fn is_teleop_enabled(&self) -> bool;

    /// Forces a refresh of the externally-polled status data.
    fn refresh_data(&self);
}
