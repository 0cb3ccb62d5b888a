//! Service launcher against a mocked task host.

use bridge_traits::{
    background::{TaskBundle, TaskHost, SERVICE_NAME_KEY},
    error::{BridgeError, Result as BridgeResult},
    logging::{LogLevel, MemoryLogSink},
};
use core_bridge::ServiceLauncher;
use core_runtime::config::BridgeConfig;
use mockall::mock;
use std::sync::Arc;

mock! {
    pub TaskHost {}

    impl TaskHost for TaskHost {
        fn start(&self, bundle: TaskBundle) -> BridgeResult<()>;
        fn stop(&self, bundle: TaskBundle) -> BridgeResult<()>;
    }
}

fn launcher(host: MockTaskHost, sink: &Arc<MemoryLogSink>) -> ServiceLauncher {
    ServiceLauncher::from_config(Arc::new(host), sink.clone(), &BridgeConfig::default())
}

#[test]
fn test_start_builds_bundle() {
    let mut host = MockTaskHost::new();
    host.expect_start()
        .withf(|bundle| {
            bundle.get(SERVICE_NAME_KEY) == Some("sync")
                && bundle.get("interval") == Some("60")
                && bundle.get("wifi_only") == Some("true")
                && bundle.len() == 3
        })
        .times(1)
        .returning(|_| Ok(()));
    let sink = Arc::new(MemoryLogSink::new());

    let started = launcher(host, &sink).start_service(
        "sync",
        [("interval", "60".to_string()), ("wifi_only", true.to_string())],
    );

    assert!(started);
    assert_eq!(sink.texts(), vec!["Service 'sync' started."]);
}

#[test]
fn test_extras_cannot_override_name() {
    let mut host = MockTaskHost::new();
    host.expect_start()
        .withf(|bundle| bundle.get(SERVICE_NAME_KEY) == Some("real"))
        .times(1)
        .returning(|_| Ok(()));
    let sink = Arc::new(MemoryLogSink::new());

    assert!(launcher(host, &sink).start_service("real", [(SERVICE_NAME_KEY, "fake")]));
}

#[test]
fn test_start_failure_reports_false() {
    let mut host = MockTaskHost::new();
    host.expect_start()
        .returning(|_| Err(BridgeError::NotAvailable("service not declared".into())));
    let sink = Arc::new(MemoryLogSink::new());

    let started = launcher(host, &sink).start_service("sync", Vec::<(String, String)>::new());

    assert!(!started);
    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].level, LogLevel::Error);
    assert!(lines[0].text.starts_with("Error starting service 'sync'"));
}

#[test]
fn test_stop() {
    let mut host = MockTaskHost::new();
    host.expect_stop()
        .withf(|bundle| bundle.get(SERVICE_NAME_KEY) == Some("sync") && bundle.len() == 1)
        .times(1)
        .returning(|_| Ok(()));
    let sink = Arc::new(MemoryLogSink::new());

    assert!(launcher(host, &sink).stop_service("sync"));
    assert_eq!(sink.texts(), vec!["Service 'sync' stopped."]);
}

#[test]
fn test_stop_failure_reports_false() {
    let mut host = MockTaskHost::new();
    host.expect_stop()
        .returning(|_| Err(BridgeError::Rejected("task not running".into())));
    let sink = Arc::new(MemoryLogSink::new());

    assert!(!launcher(host, &sink).stop_service("sync"));
    assert_eq!(sink.lines()[0].level, LogLevel::Error);
}

#[test]
fn test_custom_name_key() {
    let mut host = MockTaskHost::new();
    host.expect_start()
        .withf(|bundle| bundle.get("task") == Some("indexer") && !bundle.contains(SERVICE_NAME_KEY))
        .times(1)
        .returning(|_| Ok(()));
    let sink = Arc::new(MemoryLogSink::new());
    let config = BridgeConfig::builder().task_name_key("task").build().unwrap();
    let launcher = ServiceLauncher::from_config(Arc::new(host), sink, &config);

    assert!(launcher.start_service("indexer", Vec::<(&str, &str)>::new()));
}
