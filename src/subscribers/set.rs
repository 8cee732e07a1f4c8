//! # SubscriberSet: diagnostic fan-out with bounded queues and a drain barrier.
//!
//! [`SubscriberSet`] distributes each [`Event`](crate::events::Event) to the
//! attached diagnostic sinks **without awaiting** their processing, and
//! provides the [`flush`](SubscriberSet::flush) barrier the lifecycle uses to
//! guarantee delivery before the process exits.
//!
//! ## What it guarantees
//! - `emit(&Event)` returns immediately; a slow sink never stalls the robot.
//! - Per-subscriber FIFO (queue order).
//! - `flush().await` completes only after every event emitted before it has
//!   been handled (or counted as dropped) by every subscriber.
//! - Panics inside subscribers are caught and isolated.
//!
//! ## What it does **not** guarantee
//! - No global ordering across different subscribers.
//! - No retries on per-subscriber queue overflow: the event is dropped for
//!   that subscriber and counted (see [`dropped`](SubscriberSet::dropped)).
//!
//! ## Diagram
//! ```text
//!    emit(&Event)          accepts(kind)?   (Arc-clone per subscriber)
//!        │
//!        ├───────────────► [queue S1] ─► worker S1 ─► on_event()
//!        ├───────────────► [queue S2] ─► worker S2 ─► on_event()
//!        └───────────────► [queue SN] ─► worker SN ─► on_event()
//!
//!    flush()  ─► barrier marker per queue ─► ack once the marker is reached
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use futures::FutureExt;
use tokio::sync::{mpsc, oneshot};

use crate::events::Event;

use super::Subscribe;

/// Item carried on a subscriber's queue: a report to handle, or a drain
/// barrier to acknowledge.
enum Delivery {
    Report(Arc<Event>),
    Barrier(oneshot::Sender<()>),
}

/// Per-subscriber channel with overflow accounting.
struct Channel {
    subscriber: Arc<dyn Subscribe>,
    sender: mpsc::Sender<Delivery>,
    dropped: AtomicUsize,
}

/// Composite fan-out with per-subscriber bounded queues and worker tasks.
///
/// Workers are detached; they live until the process exits (there is no
/// teardown, matching the session's unconditional-exit policy).
pub struct SubscriberSet {
    channels: Vec<Channel>,
}

impl SubscriberSet {
    /// Creates a new set and spawns one worker per subscriber.
    #[must_use]
    pub fn new(subs: Vec<Arc<dyn Subscribe>>) -> Self {
        let mut channels = Vec::with_capacity(subs.len());

        for subscriber in subs {
            let cap = subscriber.queue_capacity().max(1);
            let (tx, mut rx) = mpsc::channel::<Delivery>(cap);
            let sink = Arc::clone(&subscriber);

            tokio::spawn(async move {
                while let Some(delivery) = rx.recv().await {
                    match delivery {
                        Delivery::Report(ev) => {
                            let fut = sink.on_event(ev.as_ref());
                            if std::panic::AssertUnwindSafe(fut).catch_unwind().await.is_err() {
                                eprintln!(
                                    "[robovisor] subscriber '{}' panicked handling a diagnostic",
                                    sink.name()
                                );
                            }
                        }
                        Delivery::Barrier(ack) => {
                            let _ = ack.send(());
                        }
                    }
                }
            });

            channels.push(Channel {
                subscriber,
                sender: tx,
                dropped: AtomicUsize::new(0),
            });
        }

        Self { channels }
    }

    /// Fan-out one event to every subscriber that accepts its kind
    /// (non-blocking).
    ///
    /// If a subscriber's queue is full or its worker is gone, the event is
    /// dropped for it and counted; the first drop per subscriber is noted on
    /// stderr (the sink of last resort, since the diagnostics channel itself
    /// is the thing overflowing).
    pub fn emit(&self, event: &Event) {
        let ev = Arc::new(event.clone());
        for channel in &self.channels {
            if !channel.subscriber.accepts(ev.kind) {
                continue;
            }
            if channel
                .sender
                .try_send(Delivery::Report(Arc::clone(&ev)))
                .is_err()
                && channel.dropped.fetch_add(1, Ordering::Relaxed) == 0
            {
                eprintln!(
                    "[robovisor] subscriber '{}' is falling behind; dropping diagnostics",
                    channel.subscriber.name()
                );
            }
        }
    }

    /// Waits until every event emitted before this call has been handled.
    ///
    /// Enqueues a barrier marker behind each subscriber's pending reports and
    /// awaits the acks. Events dropped on overflow are not waited for. A
    /// subscriber that never makes progress stalls the flush; [`Subscribe`]
    /// implementations must not block indefinitely.
    pub async fn flush(&self) {
        for channel in &self.channels {
            let (ack, done) = oneshot::channel();
            if channel.sender.send(Delivery::Barrier(ack)).await.is_ok() {
                let _ = done.await;
            }
        }
    }

    /// Total number of events dropped on queue overflow, across subscribers.
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.channels
            .iter()
            .map(|c| c.dropped.load(Ordering::Relaxed))
            .sum()
    }

    /// True if there are no subscribers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Number of subscribers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.channels.len()
    }
}
