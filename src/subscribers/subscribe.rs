//! # Diagnostic-sink contract.
//!
//! `Subscribe` is the extension point for delivering operator-visible
//! diagnostics: a driver-station forwarder on the field, a console printer on
//! the bench, a match-log shipper in the pit. Each sink is driven by a
//! dedicated worker fed from a bounded queue owned by the
//! [`SubscriberSet`](super::SubscriberSet).
//!
//! ## Contract
//! - Sinks may be slow (I/O, batching, retries) without stalling the robot's
//!   control loop or other sinks.
//! - A sink narrows what it receives with [`Subscribe::accepts`]; filtered
//!   kinds are never enqueued for it.
//! - A sink declares its queue depth via [`Subscribe::queue_capacity`]; on
//!   overflow, events for that sink are dropped and counted.
//! - A sink must keep making progress: the lifecycle drains all queues once
//!   before the process exits, and a permanently stuck `on_event` would stall
//!   that drain.

use async_trait::async_trait;

use crate::events::{Event, EventKind};

/// Contract for diagnostic-event sinks.
///
/// Called from a sink-dedicated worker task. Implementations should avoid
/// blocking the async runtime (prefer async I/O and cooperative waits).
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Handle a single diagnostic event.
    async fn on_event(&self, event: &Event);

    /// Event kinds this sink wants. Everything by default; a pager might
    /// accept only [`EventKind::Error`].
    fn accepts(&self, kind: EventKind) -> bool {
        let _ = kind;
        true
    }

    /// Human-readable name (for drop/panic notices).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Preferred depth of this sink's queue.
    ///
    /// On overflow, events for this sink are dropped and counted.
    fn queue_capacity(&self) -> usize {
        1024
    }
}
