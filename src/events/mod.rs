//! Runtime events: types and broadcast bus.
//!
//! This module groups the event **data model** and the **bus** used to
//! publish/subscribe to runtime events emitted by the lifecycle controller,
//! the run-protocol runner, and the subsystem dispatcher.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] — event classification and payload metadata
//! - [`Bus`] — thin wrapper over `tokio::sync::broadcast`
//!
//! ## Quick reference
//! - **Publishers**: `LifecycleController`, the run-protocol runner,
//!   `SubsystemDispatcher` (registration warnings).
//! - **Consumers**: the controller's reporter listener (fans out to
//!   `SubscriberSet`), plus any ad-hoc `Bus::subscribe` receiver (tests).

mod bus;
mod event;

pub use bus::Bus;
pub use event::{Event, EventKind};
