//! # LifecycleBuilder: one-time runtime construction.
//!
//! The builder performs the construction sequence exactly once per process
//! and yields a [`LifecycleController`]:
//!
//! 1. Initialize the HAL within the configured timeout budget (failure is
//!    **fatal**: the process must not proceed).
//! 2. Capture the calling thread's identity as the main-thread identity.
//! 3. Run the registered delegate hooks (pure composition).
//! 4. Start the data-sharing service: persistence-backed on real hardware,
//!    ephemeral in simulation.
//! 5. Poll until the service leaves its `Starting` state, bounded by the
//!    configured attempt budget (≈ 1 s); exhaustion warns and proceeds.
//! 6. Disable telemetry-widget auto-registration side effects.

use std::sync::Arc;
use std::thread;

use tokio::sync::{mpsc, oneshot};
use tokio::time;

use crate::config::Config;
use crate::error::RuntimeError;
use crate::events::{Bus, Event, EventKind};
use crate::hal::{DataService, DataState, Hal, Station};
use crate::subscribers::{Subscribe, SubscriberSet};

use super::controller::LifecycleController;
use super::shared::SessionShared;

/// Delegate-wiring hook, run once during construction with the bus handle.
pub type DelegateHook = Box<dyn FnOnce(&Bus) + Send>;

/// Builder for constructing a [`LifecycleController`].
pub struct LifecycleBuilder {
    cfg: Config,
    hal: Arc<dyn Hal>,
    station: Arc<dyn Station>,
    data: Arc<dyn DataService>,
    subscribers: Vec<Arc<dyn Subscribe>>,
    delegates: Vec<DelegateHook>,
}

impl LifecycleBuilder {
    /// Creates a new builder over the external collaborators.
    pub fn new(
        cfg: Config,
        hal: Arc<dyn Hal>,
        station: Arc<dyn Station>,
        data: Arc<dyn DataService>,
    ) -> Self {
        Self {
            cfg,
            hal,
            station,
            data,
            subscribers: Vec::new(),
            delegates: Vec::new(),
        }
    }

    /// Sets diagnostic-event subscribers.
    ///
    /// Subscribers receive operator-visible diagnostics through dedicated
    /// workers with bounded queues.
    pub fn with_subscribers(mut self, subscribers: Vec<Arc<dyn Subscribe>>) -> Self {
        self.subscribers = subscribers;
        self
    }

    /// Registers a delegate-wiring hook (camera/math shared-delegate style
    /// composition). Hooks run once during [`build`](Self::build), in
    /// registration order.
    pub fn with_delegate(mut self, hook: impl FnOnce(&Bus) + Send + 'static) -> Self {
        self.delegates.push(Box::new(hook));
        self
    }

    /// Performs the construction sequence and returns the controller.
    ///
    /// # Errors
    /// [`RuntimeError::HalInit`] when HAL initialization fails; this is fatal
    /// and the process must not continue.
    pub async fn build(mut self) -> Result<LifecycleController, RuntimeError> {
        if !self
            .hal
            .initialize(self.cfg.hal_init_timeout, self.cfg.hal_init_mode)
        {
            return Err(RuntimeError::HalInit);
        }

        let main_thread = thread::current().id();

        let bus = Bus::new(self.cfg.bus_capacity_clamped());
        let subs = Arc::new(SubscriberSet::new(std::mem::take(&mut self.subscribers)));
        let flusher = Self::reporter_listener(&bus, Arc::clone(&subs));

        for hook in std::mem::take(&mut self.delegates) {
            hook(&bus);
        }

        let runtime = self.hal.runtime_kind();
        let persistence = runtime
            .is_real()
            .then(|| self.cfg.persistence_path.clone());
        self.data.start_server(persistence.as_deref());
        self.wait_for_data_service(&bus).await;
        self.data.disable_actuator_widgets();

        Ok(LifecycleController::new_internal(
            self.cfg,
            self.hal,
            self.station,
            bus,
            subs,
            flusher,
            Arc::new(SessionShared::new()),
            main_thread,
        ))
    }

    /// Subscribes to the bus and forwards events to the subscriber set.
    ///
    /// Returns the drain handle: sending an ack channel makes the listener
    /// forward everything already published, wait for the subscriber queues
    /// to empty, and then acknowledge. The controller uses it before the
    /// terminal [`ExitAction`](super::ExitAction) so queued diagnostics are
    /// delivered before the process exits.
    fn reporter_listener(
        bus: &Bus,
        set: Arc<SubscriberSet>,
    ) -> mpsc::Sender<oneshot::Sender<()>> {
        use tokio::sync::broadcast::error::{RecvError, TryRecvError};

        let mut rx = bus.subscribe();
        let (drain_tx, mut drain_rx) = mpsc::channel::<oneshot::Sender<()>>(1);
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    received = rx.recv() => match received {
                        Ok(ev) => set.emit(&ev),
                        Err(RecvError::Lagged(_)) => continue,
                        Err(RecvError::Closed) => break,
                    },
                    request = drain_rx.recv() => {
                        let Some(ack) = request else { break };
                        loop {
                            match rx.try_recv() {
                                Ok(ev) => set.emit(&ev),
                                Err(TryRecvError::Lagged(_)) => continue,
                                Err(_) => break,
                            }
                        }
                        set.flush().await;
                        let _ = ack.send(());
                    }
                }
            }
        });
        drain_tx
    }

    /// Best-effort readiness wait for the data-sharing service.
    ///
    /// Polls for the `Starting` transitional state at the configured
    /// interval; after the bounded attempt budget (documented: 100 attempts
    /// at ~10 ms, about one second) it warns and proceeds. This is not a hard
    /// precondition.
    async fn wait_for_data_service(&self, bus: &Bus) {
        let mut attempts = 0u32;
        while self.data.states().contains(&DataState::Starting) {
            attempts += 1;
            if attempts > self.cfg.readiness_attempts {
                bus.publish(Event::now(EventKind::Warning).with_message(
                    "timed out while waiting for the data-sharing service to start",
                ));
                return;
            }
            time::sleep(self.cfg.readiness_interval).await;
        }
    }
}
