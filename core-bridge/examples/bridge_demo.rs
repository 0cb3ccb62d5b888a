//! Bridge demo
//!
//! Wires the bridge to the desktop adapters and walks through every host
//! call an embedding script would make.
//!
//! Run with: `cargo run -p core-bridge --example bridge_demo`

use anyhow::Result;
use bridge_desktop::{DesktopFileSystem, DesktopSecurityModel};
use bridge_traits::{
    logging::LogLevel,
    permissions::{ExecutionContext, GrantState},
};
use core_bridge::HostBridge;
use core_runtime::events::PermissionEvents;
use core_runtime::logging::{init_logging, LogFormat, LoggingConfig};
use std::sync::Arc;

const CAMERA: &str = "android.permission.CAMERA";
const LOCATION: &str = "android.permission.ACCESS_FINE_LOCATION";

fn main() -> Result<()> {
    init_logging(
        LoggingConfig::default()
            .with_format(LogFormat::Compact)
            .with_level(LogLevel::Debug),
    )?;

    let events = PermissionEvents::default();
    let mut results = events.subscribe();

    let shared = std::env::temp_dir().join("protonox-demo-shared");
    let fs = DesktopFileSystem::new().with_external_root(shared);
    let security = DesktopSecurityModel::new()
        .with_grant(LOCATION, GrantState::Denied)
        .with_result_listener(Arc::new(events.clone()));

    let bridge = HostBridge::builder()
        .file_system(Arc::new(fs))
        .security_model(Arc::new(security))
        .build()?;

    bridge.logger().log("hello from the demo");
    println!("ping -> {}", bridge.logger().ping());

    let ctx = ExecutionContext::new("demo");
    println!(
        "camera granted: {}",
        bridge.permissions().has_permission(Some(&ctx), CAMERA)
    );
    if !bridge
        .permissions()
        .ensure_permissions(Some(&ctx), [CAMERA, LOCATION])
    {
        if let Ok(result) = results.try_recv() {
            println!(
                "request {} answered: all granted = {}",
                result.request_code,
                result.all_granted()
            );
        }
    }

    println!(
        "app storage: {}",
        bridge.storage().get_app_storage_dir(Some(&ctx))
    );
    println!(
        "external storage: {}",
        bridge.storage().get_external_storage_dir()
    );

    bridge.services().start_service("sync", [("interval", 60)]);
    bridge.services().stop_service("sync");

    let mut task = bridge.new_task();
    task.on_start(None);
    task.on_destroy();

    bridge.notifier().notify("Demo", "finished");
    Ok(())
}
