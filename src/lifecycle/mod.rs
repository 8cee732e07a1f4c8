//! Lifecycle core: construction, supervision, and the run-protocol.
//!
//! This module contains the supervisor/worker orchestration of the robot
//! process. The public API is [`LifecycleBuilder`] (one-time construction)
//! and [`LifecycleController`] (the start/stop protocol); the run-protocol
//! runner and the shared session state are internal.
//!
//! ## High-level architecture
//! ```text
//! composition root
//!   └─► LifecycleBuilder::build()          (HAL init, data service, delegates)
//!         └─► LifecycleController::start(factory)
//!               ├─ HAL has main-loop semantics:
//!               │    supervisor task          worker task
//!               │    ──────────────          ───────────────────────────
//!               │    await run_main()        run_robot(factory, token)
//!               │        │                     ├─ factory() → store robot
//!               │        │                     ├─ robot.run(token).await
//!               │    (external stop)           └─ exit_main()
//!               │        ├─ suppress warning
//!               │        ├─ robot.end(), cancel token
//!               │        └─ bounded join (join_grace), proceed regardless
//!               └─ otherwise: run_robot inline
//! ```
//!
//! Internal modules:
//! - [`runner`]: executes the run-protocol and converts faults to diagnostics;
//! - [`shared`]: the mutex-guarded state shared between supervisor and worker;
//! - [`builder`]: the one-time construction sequence;
//! - [`controller`]: the start/stop protocol and mode predicates.

mod builder;
mod controller;
mod runner;
mod shared;

pub use builder::{DelegateHook, LifecycleBuilder};
pub use controller::{ExitAction, LifecycleController};

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::sync::Notify;
    use tokio::time;
    use tokio_util::sync::CancellationToken;

    use crate::config::Config;
    use crate::error::{Fault, Origin, RuntimeError};
    use crate::events::{Event, EventKind};
    use crate::hal::{DataService, DataState, Hal, RuntimeKind, Station, UsageResource};
    use crate::robot::{Robot, RobotRef};
    use crate::subscribers::Subscribe;

    use super::{LifecycleBuilder, LifecycleController};

    // ---------------------------------------------------------------
    // Collaborator doubles
    // ---------------------------------------------------------------

    struct MockHal {
        kind: RuntimeKind,
        has_main: bool,
        init_ok: AtomicBool,
        priority_ok: AtomicBool,
        stop: Notify,
        init_calls: AtomicUsize,
        exit_main_calls: AtomicUsize,
        shutdown_calls: AtomicUsize,
        usage_reports: Mutex<Vec<String>>,
    }

    impl MockHal {
        fn new(kind: RuntimeKind, has_main: bool) -> Arc<Self> {
            Arc::new(Self {
                kind,
                has_main,
                init_ok: AtomicBool::new(true),
                priority_ok: AtomicBool::new(true),
                stop: Notify::new(),
                init_calls: AtomicUsize::new(0),
                exit_main_calls: AtomicUsize::new(0),
                shutdown_calls: AtomicUsize::new(0),
                usage_reports: Mutex::new(Vec::new()),
            })
        }

        /// Simulates the external stop request that satisfies `run_main`.
        fn request_stop(&self) {
            self.stop.notify_one();
        }
    }

    #[async_trait]
    impl Hal for MockHal {
        fn initialize(&self, _timeout: Duration, _mode: i32) -> bool {
            self.init_calls.fetch_add(1, Ordering::SeqCst);
            self.init_ok.load(Ordering::SeqCst)
        }

        fn report(&self, _resource: UsageResource, _instance: i32, feature: &str) {
            self.usage_reports.lock().unwrap().push(feature.to_string());
        }

        fn shutdown(&self) {
            self.shutdown_calls.fetch_add(1, Ordering::SeqCst);
        }

        fn has_main(&self) -> bool {
            self.has_main
        }

        async fn run_main(&self) {
            self.stop.notified().await;
        }

        fn exit_main(&self) {
            self.exit_main_calls.fetch_add(1, Ordering::SeqCst);
            self.stop.notify_one();
        }

        fn set_notifier_priority(&self, _realtime: bool, _priority: i32) -> bool {
            self.priority_ok.load(Ordering::SeqCst)
        }

        fn runtime_kind(&self) -> RuntimeKind {
            self.kind
        }
    }

    #[derive(Default)]
    struct MockStation {
        enabled: bool,
        autonomous: bool,
        refresh_calls: AtomicUsize,
    }

    impl Station for MockStation {
        fn is_disabled(&self) -> bool {
            !self.enabled
        }
        fn is_enabled(&self) -> bool {
            self.enabled
        }
        fn is_autonomous(&self) -> bool {
            self.autonomous
        }
        fn is_autonomous_enabled(&self) -> bool {
            self.autonomous && self.enabled
        }
        fn is_test(&self) -> bool {
            false
        }
        fn is_test_enabled(&self) -> bool {
            false
        }
        fn is_teleop(&self) -> bool {
            !self.autonomous
        }
        fn is_teleop_enabled(&self) -> bool {
            !self.autonomous && self.enabled
        }
        fn refresh_data(&self) {
            self.refresh_calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct MockData {
        /// How many polls still report the `Starting` transitional state.
        starting_polls: AtomicU32,
        started_with: Mutex<Option<Option<PathBuf>>>,
        widget_calls: AtomicUsize,
    }

    impl MockData {
        fn ready() -> Arc<Self> {
            Self::starting_for(0)
        }

        fn starting_for(polls: u32) -> Arc<Self> {
            Arc::new(Self {
                starting_polls: AtomicU32::new(polls),
                started_with: Mutex::new(None),
                widget_calls: AtomicUsize::new(0),
            })
        }
    }

    impl DataService for MockData {
        fn start_server(&self, persistence: Option<&Path>) {
            *self.started_with.lock().unwrap() = Some(persistence.map(Path::to_path_buf));
        }

        fn states(&self) -> Vec<DataState> {
            let left = self.starting_polls.load(Ordering::SeqCst);
            if left > 0 {
                if left != u32::MAX {
                    self.starting_polls.fetch_sub(1, Ordering::SeqCst);
                }
                vec![DataState::Starting]
            } else {
                vec![DataState::Running]
            }
        }

        fn disable_actuator_widgets(&self) {
            self.widget_calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct Collector {
        events: Mutex<Vec<Event>>,
    }

    impl Collector {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                events: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl Subscribe for Collector {
        async fn on_event(&self, event: &Event) {
            self.events.lock().unwrap().push(event.clone());
        }

        fn name(&self) -> &'static str {
            "collector"
        }
    }

    // ---------------------------------------------------------------
    // Robot doubles
    // ---------------------------------------------------------------

    struct CleanRobot;

    #[async_trait]
    impl Robot for CleanRobot {
        async fn run(&self, _ctx: CancellationToken) -> Result<(), Fault> {
            Ok(())
        }
    }

    struct FaultyRobot;

    #[async_trait]
    impl Robot for FaultyRobot {
        async fn run(&self, _ctx: CancellationToken) -> Result<(), Fault> {
            Err(Fault::new("drive loop exploded").with_origin(Origin::new("FaultyRobot")))
        }
    }

    /// Ignores the stop signal entirely: never returns.
    struct StuckRobot {
        end_calls: AtomicUsize,
    }

    #[async_trait]
    impl Robot for StuckRobot {
        async fn run(&self, _ctx: CancellationToken) -> Result<(), Fault> {
            std::future::pending::<()>().await;
            Ok(())
        }

        fn end(&self) {
            self.end_calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    // ---------------------------------------------------------------
    // Helpers
    // ---------------------------------------------------------------

    async fn build(
        cfg: Config,
        hal: Arc<MockHal>,
        data: Arc<MockData>,
    ) -> LifecycleController {
        LifecycleBuilder::new(cfg, hal, Arc::new(MockStation::default()), data)
            .build()
            .await
            .expect("construction should succeed")
    }

    fn drain(rx: &mut tokio::sync::broadcast::Receiver<Event>) -> Vec<Event> {
        let mut events = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            events.push(ev);
        }
        events
    }

    fn messages_of(events: &[Event], kind: EventKind) -> Vec<String> {
        events
            .iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.message.as_deref().unwrap_or("").to_string())
            .collect()
    }

    // ---------------------------------------------------------------
    // Construction
    // ---------------------------------------------------------------

    #[tokio::test]
    async fn test_build_fails_fatally_when_hal_init_fails() {
        let hal = MockHal::new(RuntimeKind::Simulation, false);
        hal.init_ok.store(false, Ordering::SeqCst);

        let result = LifecycleBuilder::new(
            Config::default(),
            hal,
            Arc::new(MockStation::default()),
            MockData::ready(),
        )
        .build()
        .await;

        assert!(matches!(result, Err(RuntimeError::HalInit)));
    }

    #[tokio::test]
    async fn test_build_starts_data_service_with_persistence_on_hardware() {
        let data = MockData::ready();
        let cfg = Config::default();
        let expected = cfg.persistence_path.clone();
        let _ = build(cfg, MockHal::new(RuntimeKind::Hardware, false), Arc::clone(&data)).await;

        assert_eq!(
            data.started_with.lock().unwrap().clone(),
            Some(Some(expected))
        );
        assert_eq!(data.widget_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_build_starts_ephemeral_data_service_in_simulation() {
        let data = MockData::ready();
        let _ = build(
            Config::default(),
            MockHal::new(RuntimeKind::Simulation, false),
            Arc::clone(&data),
        )
        .await;

        assert_eq!(data.started_with.lock().unwrap().clone(), Some(None));
    }

    #[tokio::test(start_paused = true)]
    async fn test_readiness_poll_gives_up_after_bounded_budget() {
        let collector = Collector::new();
        let data = MockData::starting_for(u32::MAX);

        let controller = LifecycleBuilder::new(
            Config::default(),
            MockHal::new(RuntimeKind::Simulation, false),
            Arc::new(MockStation::default()),
            Arc::clone(&data) as Arc<dyn DataService>,
        )
        .with_subscribers(vec![Arc::clone(&collector) as Arc<dyn Subscribe>])
        .build()
        .await
        .expect("bounded poll must not hang construction");

        // Widget disable still runs after the poll gives up.
        assert_eq!(data.widget_calls.load(Ordering::SeqCst), 1);
        assert_eq!(controller.subscriber_count(), 1);

        // Let the subscriber worker drain the queue.
        time::sleep(Duration::from_millis(50)).await;
        let events = collector.events.lock().unwrap();
        assert!(events.iter().any(|e| {
            e.kind == EventKind::Warning
                && e.message.as_deref().unwrap_or("").contains("timed out")
        }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_readiness_poll_stops_once_service_leaves_starting() {
        let data = MockData::starting_for(3);
        let _ = build(
            Config::default(),
            MockHal::new(RuntimeKind::Simulation, false),
            Arc::clone(&data),
        )
        .await;

        assert_eq!(data.starting_polls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_main_thread_identity_is_captured_at_construction() {
        let controller = build(
            Config::default(),
            MockHal::new(RuntimeKind::Simulation, false),
            MockData::ready(),
        )
        .await;

        assert!(controller.is_main_thread());
        assert_eq!(controller.main_thread_id(), std::thread::current().id());
    }

    #[tokio::test]
    async fn test_build_wires_delegates_and_subscribers_together() {
        let collector = Collector::new();
        let wired = Arc::new(AtomicUsize::new(0));
        let observed = Arc::clone(&wired);

        let controller = LifecycleBuilder::new(
            Config::default(),
            MockHal::new(RuntimeKind::Simulation, false),
            Arc::new(MockStation::default()),
            MockData::ready(),
        )
        .with_subscribers(vec![Arc::clone(&collector) as Arc<dyn Subscribe>])
        .with_delegate(move |_bus| {
            observed.fetch_add(1, Ordering::SeqCst);
        })
        .build()
        .await
        .unwrap();

        assert_eq!(wired.load(Ordering::SeqCst), 1);
        assert_eq!(controller.subscriber_count(), 1);
    }

    #[tokio::test]
    async fn test_delegate_hooks_run_once_during_build() {
        let wired = Arc::new(AtomicUsize::new(0));
        let observed = Arc::clone(&wired);
        let _ = LifecycleBuilder::new(
            Config::default(),
            MockHal::new(RuntimeKind::Simulation, false),
            Arc::new(MockStation::default()),
            MockData::ready(),
        )
        .with_delegate(move |_bus| {
            observed.fetch_add(1, Ordering::SeqCst);
        })
        .build()
        .await
        .unwrap();

        assert_eq!(wired.load(Ordering::SeqCst), 1);
    }

    // ---------------------------------------------------------------
    // start(): run-protocol on the calling task (no HAL main loop)
    // ---------------------------------------------------------------

    #[tokio::test]
    async fn test_factory_fault_is_recovered_and_reported_three_times() {
        let hal = MockHal::new(RuntimeKind::Simulation, false);
        let controller = build(Config::default(), Arc::clone(&hal), MockData::ready()).await;
        let mut rx = controller.bus().subscribe();

        let exit = controller
            .start(|| {
                Err(Fault::new("no can bus").with_origin(Origin::new("BadBot")))
            })
            .await
            .expect("factory faults must not escape start");

        assert_eq!(exit.code(), 0);
        assert!(controller.shared.running().is_none());
        assert_eq!(hal.shutdown_calls.load(Ordering::SeqCst), 1);

        let events = drain(&mut rx);
        let errors = messages_of(&events, EventKind::Error);
        assert!(errors.len() >= 3, "expected >=3 error reports, got {errors:?}");
        assert!(errors[0].contains("BadBot") && errors[0].contains("no can bus"));
        assert!(errors.iter().any(|m| m == "could not instantiate robot BadBot!"));
    }

    #[tokio::test]
    async fn test_fault_reports_are_delivered_before_start_returns() {
        let collector = Collector::new();
        let controller = LifecycleBuilder::new(
            Config::default(),
            MockHal::new(RuntimeKind::Simulation, false),
            Arc::new(MockStation::default()),
            MockData::ready(),
        )
        .with_subscribers(vec![Arc::clone(&collector) as Arc<dyn Subscribe>])
        .build()
        .await
        .unwrap();

        let _ = controller
            .start(|| Err(Fault::new("no can bus").with_origin(Origin::new("BadBot"))))
            .await
            .unwrap();

        // No yields or sleeps: once start has returned, the session's next
        // step is the process exit, so the reports must already be in the
        // subscriber's hands.
        let events = collector.events.lock().unwrap();
        let errors = events.iter().filter(|e| e.kind == EventKind::Error).count();
        assert!(errors >= 3, "expected >=3 delivered error reports, got {errors}");
    }

    #[tokio::test]
    async fn test_clean_return_emits_unexpected_return_diagnostics() {
        let controller = build(
            Config::default(),
            MockHal::new(RuntimeKind::Simulation, false),
            MockData::ready(),
        )
        .await;
        let mut rx = controller.bus().subscribe();

        let exit = controller
            .start(|| Ok(Arc::new(CleanRobot) as RobotRef))
            .await
            .unwrap();
        assert_eq!(exit.code(), 0);

        let events = drain(&mut rx);
        assert_eq!(messages_of(&events, EventKind::Warning).len(), 1);
        let errors = messages_of(&events, EventKind::Error);
        assert!(errors.iter().any(|m| m.contains("unexpected return")));
    }

    #[tokio::test]
    async fn test_suppressed_exit_emits_no_final_diagnostics() {
        let controller = build(
            Config::default(),
            MockHal::new(RuntimeKind::Simulation, false),
            MockData::ready(),
        )
        .await;
        controller.suppress_exit_warning(true);
        let mut rx = controller.bus().subscribe();

        let _ = controller
            .start(|| Ok(Arc::new(CleanRobot) as RobotRef))
            .await
            .unwrap();

        let events = drain(&mut rx);
        assert!(messages_of(&events, EventKind::Warning).is_empty());
        assert!(messages_of(&events, EventKind::Error).is_empty());
    }

    #[tokio::test]
    async fn test_run_fault_is_reported_with_trace_and_final_summary() {
        let controller = build(
            Config::default(),
            MockHal::new(RuntimeKind::Simulation, false),
            MockData::ready(),
        )
        .await;
        let mut rx = controller.bus().subscribe();

        let _ = controller
            .start(|| Ok(Arc::new(FaultyRobot) as RobotRef))
            .await
            .unwrap();

        let events = drain(&mut rx);
        let fault_report = events
            .iter()
            .find(|e| {
                e.kind == EventKind::Error
                    && e.message.as_deref().unwrap_or("").contains("drive loop exploded")
            })
            .expect("run fault must be reported");
        assert!(fault_report.trace.as_deref().unwrap_or("").contains("FaultyRobot"));

        let errors = messages_of(&events, EventKind::Error);
        assert!(errors.iter().any(|m| m.contains("should have handled")));
        assert_eq!(messages_of(&events, EventKind::Warning).len(), 1);
    }

    #[tokio::test]
    async fn test_version_marker_written_only_on_real_hardware() {
        let dir = tempfile::tempdir().unwrap();

        let mut cfg = Config::default();
        cfg.version_path = dir.path().join("hw").join("lib_version.ini");
        let controller = build(
            cfg.clone(),
            MockHal::new(RuntimeKind::Hardware, false),
            MockData::ready(),
        )
        .await;
        let _ = controller
            .start(|| Ok(Arc::new(CleanRobot) as RobotRef))
            .await
            .unwrap();
        assert!(cfg.version_path.exists());

        let mut sim_cfg = Config::default();
        sim_cfg.version_path = dir.path().join("sim").join("lib_version.ini");
        let controller = build(
            sim_cfg.clone(),
            MockHal::new(RuntimeKind::Simulation, false),
            MockData::ready(),
        )
        .await;
        let _ = controller
            .start(|| Ok(Arc::new(CleanRobot) as RobotRef))
            .await
            .unwrap();
        assert!(!sim_cfg.version_path.exists());
    }

    #[tokio::test]
    async fn test_start_reports_language_usage_and_refreshes_station() {
        let hal = MockHal::new(RuntimeKind::Simulation, false);
        let station = Arc::new(MockStation::default());
        let controller = LifecycleBuilder::new(
            Config::default(),
            Arc::clone(&hal) as Arc<dyn Hal>,
            Arc::clone(&station) as Arc<dyn Station>,
            MockData::ready(),
        )
        .build()
        .await
        .unwrap();

        let _ = controller
            .start(|| Ok(Arc::new(CleanRobot) as RobotRef))
            .await
            .unwrap();

        let reports = hal.usage_reports.lock().unwrap();
        assert_eq!(reports.len(), 1);
        assert!(reports[0].starts_with("Rust "));
        assert_eq!(station.refresh_calls.load(Ordering::SeqCst), 1);
        // Construction init plus the start re-confirmation.
        assert_eq!(hal.init_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failed_priority_elevation_warns_and_proceeds() {
        let hal = MockHal::new(RuntimeKind::Simulation, false);
        hal.priority_ok.store(false, Ordering::SeqCst);
        let controller = build(Config::default(), Arc::clone(&hal), MockData::ready()).await;
        controller.suppress_exit_warning(true);
        let mut rx = controller.bus().subscribe();

        let exit = controller
            .start(|| Ok(Arc::new(CleanRobot) as RobotRef))
            .await
            .unwrap();
        assert_eq!(exit.code(), 0);

        let events = drain(&mut rx);
        let warnings = messages_of(&events, EventKind::Warning);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("notifier priority"));
    }

    #[tokio::test]
    async fn test_start_fails_fatally_when_hal_reinit_fails() {
        let hal = MockHal::new(RuntimeKind::Simulation, false);
        let controller = build(Config::default(), Arc::clone(&hal), MockData::ready()).await;

        hal.init_ok.store(false, Ordering::SeqCst);
        let result = controller
            .start(|| Ok(Arc::new(CleanRobot) as RobotRef))
            .await;

        assert!(matches!(result, Err(RuntimeError::HalInit)));
        assert_eq!(hal.shutdown_calls.load(Ordering::SeqCst), 0);
    }

    // ---------------------------------------------------------------
    // start(): supervisor/worker split (HAL main loop)
    // ---------------------------------------------------------------

    #[tokio::test(start_paused = true)]
    async fn test_external_stop_invokes_end_once_and_join_is_bounded() {
        let hal = MockHal::new(RuntimeKind::Simulation, true);
        let controller = Arc::new(
            build(Config::default(), Arc::clone(&hal), MockData::ready()).await,
        );
        let robot = Arc::new(StuckRobot {
            end_calls: AtomicUsize::new(0),
        });

        let handle = {
            let controller = Arc::clone(&controller);
            let robot = Arc::clone(&robot) as RobotRef;
            tokio::spawn(async move { controller.start(move || Ok(robot)).await })
        };

        // Let the worker construct and park the robot, then deliver the stop.
        time::sleep(Duration::from_millis(5)).await;
        hal.request_stop();

        let exit = handle.await.unwrap().unwrap();
        assert_eq!(exit.code(), 0);
        assert_eq!(robot.end_calls.load(Ordering::SeqCst), 1);
        assert_eq!(hal.shutdown_calls.load(Ordering::SeqCst), 1);
        // The robot never returned, so the worker never reached exit_main:
        // the supervisor proceeded past the bounded join anyway.
        assert_eq!(hal.exit_main_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_worker_finishing_on_its_own_unblocks_the_supervisor() {
        let hal = MockHal::new(RuntimeKind::Simulation, true);
        let controller = build(Config::default(), Arc::clone(&hal), MockData::ready()).await;

        let exit = controller
            .start(|| Ok(Arc::new(CleanRobot) as RobotRef))
            .await
            .unwrap();

        assert_eq!(exit.code(), 0);
        assert_eq!(hal.exit_main_calls.load(Ordering::SeqCst), 1);
        assert_eq!(hal.shutdown_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_external_stop_suppresses_the_exit_warning() {
        let hal = MockHal::new(RuntimeKind::Simulation, true);
        let controller = Arc::new(
            build(Config::default(), Arc::clone(&hal), MockData::ready()).await,
        );
        let mut rx = controller.bus().subscribe();

        struct Cooperative;
        #[async_trait]
        impl Robot for Cooperative {
            async fn run(&self, ctx: CancellationToken) -> Result<(), Fault> {
                ctx.cancelled().await;
                Ok(())
            }
        }

        let handle = {
            let controller = Arc::clone(&controller);
            tokio::spawn(async move {
                controller.start(|| Ok(Arc::new(Cooperative) as RobotRef)).await
            })
        };
        time::sleep(Duration::from_millis(5)).await;
        hal.request_stop();
        let _ = handle.await.unwrap().unwrap();

        let events = drain(&mut rx);
        assert!(events.iter().any(|e| e.kind == EventKind::StopRequested));
        // Deliberate shutdown: no quit-unexpectedly diagnostics.
        assert!(messages_of(&events, EventKind::Warning).is_empty());
        assert!(messages_of(&events, EventKind::Error).is_empty());
    }

    // ---------------------------------------------------------------
    // Mode predicates
    // ---------------------------------------------------------------

    #[tokio::test]
    async fn test_mode_predicates_forward_to_the_station() {
        let station = Arc::new(MockStation {
            enabled: true,
            autonomous: true,
            refresh_calls: AtomicUsize::new(0),
        });
        let controller = LifecycleBuilder::new(
            Config::default(),
            MockHal::new(RuntimeKind::Simulation, false) as Arc<dyn Hal>,
            Arc::clone(&station) as Arc<dyn Station>,
            MockData::ready(),
        )
        .build()
        .await
        .unwrap();

        assert!(controller.is_enabled());
        assert!(!controller.is_disabled());
        assert!(controller.is_autonomous());
        assert!(controller.is_autonomous_enabled());
        assert!(!controller.is_teleop());
        assert!(!controller.is_test());
    }
}
