//! External collaborator contracts.
//!
//! The lifecycle core never talks to hardware, the operator station, or the
//! networked data store directly; it goes through the traits in this module.
//! Implementations live outside this crate (vendor HAL bindings on hardware,
//! in-process stand-ins for simulation and tests) and are handed to the
//! [`LifecycleBuilder`](crate::LifecycleBuilder) at the composition root.
//!
//! ## Contents
//! - [`Hal`] — init/report/shutdown and main-loop hosting primitives
//! - [`Station`] — enabled/disabled state and operating-mode queries
//! - [`DataService`] — data-sharing service startup and readiness handshake
//! - [`RuntimeKind`] — real-hardware vs simulation classification

mod data;
mod interface;
mod runtime;
mod station;

pub use data::{DataService, DataState};
pub use interface::{Hal, UsageResource, LANGUAGE_RUST};
pub use runtime::RuntimeKind;
pub use station::Station;
