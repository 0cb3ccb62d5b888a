//! End-to-end behaviour of the assembled bridge on desktop adapters.

#![cfg(feature = "desktop-shims")]

use bridge_desktop::{DesktopFileSystem, DesktopSecurityModel};
use bridge_traits::{
    background::{StartMode, TaskBundle},
    logging::MemoryLogSink,
    permissions::{ExecutionContext, GrantState},
};
use core_bridge::{HostBridge, HostPlatform, InProcessTaskHost, TaskState, PING_TOKEN};
use core_runtime::config::BridgeConfig;
use core_runtime::events::PermissionEvents;
use std::path::Path;
use std::sync::Arc;

const CAMERA: &str = "android.permission.CAMERA";
const MIC: &str = "android.permission.RECORD_AUDIO";

#[test]
fn test_components_share_sink_with_their_own_tags() {
    let sink = Arc::new(MemoryLogSink::new());
    let bridge = HostBridge::builder().log_sink(sink.clone()).build().unwrap();

    assert_eq!(bridge.logger().ping(), PING_TOKEN);
    bridge.permissions().request_permissions(None, [CAMERA], 1);
    bridge.notifier().notify("t", "m");
    let mut task = bridge.new_task();
    task.on_destroy();

    let tags: Vec<String> = sink.lines().into_iter().map(|l| l.tag).collect();
    assert_eq!(
        tags,
        vec![
            "ProtonoxBridge",
            "ProtonoxPermissions",
            "ProtonoxNotifications",
            "ProtonoxService",
            "ProtonoxService",
        ]
    );
}

#[tokio::test]
async fn test_permission_round_trip_through_events() {
    let events = PermissionEvents::default();
    let mut results = events.subscribe_request(1001);
    let security = DesktopSecurityModel::new()
        .with_grant(MIC, GrantState::Denied)
        .with_result_listener(Arc::new(events.clone()));
    let bridge = HostBridge::builder()
        .log_sink(Arc::new(MemoryLogSink::new()))
        .security_model(Arc::new(security))
        .build()
        .unwrap();
    let ctx = ExecutionContext::new("main");

    assert!(bridge.permissions().has_permission(Some(&ctx), CAMERA));
    assert!(!bridge.permissions().has_permission(Some(&ctx), MIC));
    assert!(!bridge.permissions().ensure_permissions(Some(&ctx), [CAMERA, MIC]));

    let result = results.recv().await.unwrap();
    assert_eq!(result.permissions, vec![MIC.to_string()]);
    assert_eq!(result.grant_for(MIC), Some(GrantState::Denied));
    assert!(!result.all_granted());
}

#[test]
fn test_services_drive_in_process_tasks() {
    let sink = Arc::new(MemoryLogSink::new());
    let host = Arc::new(InProcessTaskHost::new(sink.clone(), BridgeConfig::default()));
    let bridge = HostBridge::builder()
        .log_sink(sink.clone())
        .task_host(host.clone())
        .build()
        .unwrap();

    assert!(bridge.services().start_service("sync", [("interval", 60)]));
    assert_eq!(host.state_of("sync"), Some(TaskState::Started));
    assert!(bridge.services().stop_service("sync"));
    assert_eq!(host.state_of("sync"), None);

    assert_eq!(
        sink.texts(),
        vec![
            "ProtonoxService created",
            "ProtonoxService started: sync",
            "Service 'sync' started.",
            "ProtonoxService destroyed",
            "Service 'sync' stopped.",
        ]
    );
}

#[test]
fn test_task_lifecycle_hints() {
    let bridge = HostBridge::builder()
        .log_sink(Arc::new(MemoryLogSink::new()))
        .build()
        .unwrap();
    let mut task = bridge.new_task();

    assert_eq!(task.on_start(Some(&TaskBundle::named("x"))), StartMode::NotSticky);
    assert!(task.on_bind(None).is_none());
}

#[test]
fn test_storage_on_disk() {
    let files = tempfile::tempdir().unwrap();
    let shared = tempfile::tempdir().unwrap();
    let fs = DesktopFileSystem::with_files_dir(files.path().to_path_buf())
        .with_external_root(shared.path().to_path_buf());
    let bridge = HostBridge::builder()
        .log_sink(Arc::new(MemoryLogSink::new()))
        .file_system(Arc::new(fs))
        .build()
        .unwrap();
    let ctx = ExecutionContext::new("main");

    let app = bridge.storage().get_app_storage_dir(Some(&ctx));
    let external = bridge.storage().get_external_storage_dir();

    assert_eq!(Path::new(&app), files.path().join("protonox"));
    assert_eq!(Path::new(&external), shared.path().join("Protonox"));
    assert!(Path::new(&app).is_dir());
    assert!(Path::new(&external).is_dir());
    assert_eq!(bridge.storage().get_app_storage_dir(None), "");
}

#[test]
fn test_platform_query_drives_permission_flow() {
    let security = Arc::new(DesktopSecurityModel::new());
    let ctx = ExecutionContext::new("main");

    for (platform, expect_request) in [(HostPlatform::Android, true), (HostPlatform::Linux, false)] {
        let config = BridgeConfig::builder().platform(platform).build().unwrap();
        let bridge = HostBridge::builder()
            .log_sink(Arc::new(MemoryLogSink::new()))
            .security_model(security.clone())
            .config(config)
            .build()
            .unwrap();

        assert_eq!(bridge.platform(), platform);
        assert_eq!(bridge.is_android(), expect_request);
        assert_eq!(bridge.is_desktop(), !expect_request);

        if bridge.is_android() {
            bridge
                .permissions()
                .request_permissions(Some(&ctx), [CAMERA], 5);
        }
    }

    assert_eq!(security.requests().len(), 1);
    assert_eq!(security.requests()[0].request_code, 5);
}

#[test]
fn test_desktop_bridge_reports_build_platform() {
    let bridge = HostBridge::desktop().unwrap();

    assert_eq!(bridge.platform(), HostPlatform::current());
    assert_eq!(bridge.is_desktop(), HostPlatform::current().is_desktop());
}
