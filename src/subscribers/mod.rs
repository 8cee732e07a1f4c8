//! # Diagnostic-event subscribers.
//!
//! This module provides the [`Subscribe`] trait and the [`SubscriberSet`]
//! fan-out used to deliver operator-visible diagnostics broadcast through the
//! [`Bus`](crate::events::Bus).
//!
//! ## Architecture
//! ```text
//! Event flow:
//!   Runner/Controller ── publish(Event) ──► Bus ──► reporter listener
//!                                                       │
//!                                                  SubscriberSet::emit
//!                                              ┌────────┼─────────┐
//!                                              ▼        ▼         ▼
//!                                        Console   Station    Custom
//!                                        Reporter  forwarder  sinks
//! ```
//!
//! ## Implementing custom subscribers
//! ```no_run
//! use async_trait::async_trait;
//! use robovisor::{Event, EventKind, Subscribe};
//!
//! struct Pager;
//!
//! #[async_trait]
//! impl Subscribe for Pager {
//!     async fn on_event(&self, event: &Event) {
//!         if event.kind == EventKind::Error {
//!             // page the pit crew...
//!         }
//!     }
//! }
//! ```

#[cfg(feature = "logging")]
mod console;
mod set;
mod subscribe;

#[cfg(feature = "logging")]
pub use console::ConsoleReporter;
pub use set::SubscriberSet;
pub use subscribe::Subscribe;
