//! Host bridge façade and bootstrap helpers.
//!
//! Exposes the narrow set of host facilities an embedding scripting layer
//! calls into: logging, runtime permissions, a background task stub and
//! storage-directory resolution. Each component is a thin pass-through to a
//! `bridge-traits` capability and never returns an error to its caller;
//! failures become `false`, an empty string, or a log line.
//!
//! Desktop hosts enable the `desktop-shims` feature (default) and call
//! [`HostBridge::desktop`]; device hosts inject their own adapters through
//! [`HostBridge::builder`].
//!
//! ```ignore
//! use bridge_traits::permissions::ExecutionContext;
//! use core_bridge::HostBridge;
//!
//! let bridge = HostBridge::desktop()?;
//! assert_eq!(bridge.logger().ping(), "pong-from-java");
//!
//! let ctx = ExecutionContext::new("main");
//! let dir = bridge.storage().get_app_storage_dir(Some(&ctx));
//! ```

mod tagged;

pub mod background;
pub mod logger;
pub mod notifications;
pub mod permissions;
pub mod services;
pub mod storage;

pub use background::{BackgroundTask, InProcessTaskHost, TaskState};
pub use logger::{Logger, PING_TOKEN};
pub use notifications::Notifier;
pub use permissions::PermissionGate;
pub use services::ServiceLauncher;
pub use storage::StorageResolver;

pub use bridge_traits::platform::HostPlatform;

use bridge_traits::{
    background::TaskHost, logging::LogSink, permissions::SecurityModel,
    storage::FileSystemProvider,
};
use core_runtime::{config::BridgeConfig, Result};
use std::sync::Arc;

/// Aggregated handle to the host capabilities the bridge requires.
#[derive(Clone)]
pub struct BridgeDependencies {
    pub log_sink: Arc<dyn LogSink>,
    pub security_model: Arc<dyn SecurityModel>,
    pub file_system: Arc<dyn FileSystemProvider>,
    pub task_host: Arc<dyn TaskHost>,
}

/// Primary façade exposed to the embedding layer.
///
/// Holds one instance of each component, all sharing the same host
/// capabilities and [`BridgeConfig`].
#[derive(Clone)]
pub struct HostBridge {
    deps: BridgeDependencies,
    config: BridgeConfig,
    logger: Logger,
    permissions: PermissionGate,
    storage: StorageResolver,
    services: ServiceLauncher,
    notifier: Notifier,
}

impl HostBridge {
    /// Create a bridge from explicit dependencies.
    pub fn new(deps: BridgeDependencies, config: BridgeConfig) -> Self {
        let sink = Arc::clone(&deps.log_sink);
        Self {
            logger: Logger::from_config(Arc::clone(&sink), &config),
            permissions: PermissionGate::from_config(
                Arc::clone(&deps.security_model),
                Arc::clone(&sink),
                &config,
            ),
            storage: StorageResolver::from_config(
                Arc::clone(&deps.file_system),
                Arc::clone(&sink),
                &config,
            ),
            services: ServiceLauncher::from_config(
                Arc::clone(&deps.task_host),
                Arc::clone(&sink),
                &config,
            ),
            notifier: Notifier::from_config(sink, &config),
            deps,
            config,
        }
    }

    pub fn builder() -> HostBridgeBuilder {
        HostBridgeBuilder::default()
    }

    /// Bridge wired to the desktop adapters with default configuration.
    #[cfg(feature = "desktop-shims")]
    pub fn desktop() -> Result<Self> {
        Self::builder().build()
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Host operating system, as configured.
    pub fn platform(&self) -> HostPlatform {
        self.config.platform
    }

    pub fn is_android(&self) -> bool {
        self.config.platform.is_android()
    }

    pub fn is_desktop(&self) -> bool {
        self.config.platform.is_desktop()
    }

    pub fn dependencies(&self) -> &BridgeDependencies {
        &self.deps
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn permissions(&self) -> &PermissionGate {
        &self.permissions
    }

    pub fn storage(&self) -> &StorageResolver {
        &self.storage
    }

    pub fn services(&self) -> &ServiceLauncher {
        &self.services
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Create a background task as the host scheduler would on `onCreate`.
    pub fn new_task(&self) -> BackgroundTask {
        BackgroundTask::from_config(Arc::clone(&self.deps.log_sink), &self.config)
    }
}

/// Builder for [`HostBridge`].
///
/// `LogSink`, `SecurityModel` and `FileSystemProvider` are required; with the
/// `desktop-shims` feature the desktop adapters fill any gap. A missing
/// `TaskHost` falls back to [`InProcessTaskHost`].
#[derive(Default)]
pub struct HostBridgeBuilder {
    log_sink: Option<Arc<dyn LogSink>>,
    security_model: Option<Arc<dyn SecurityModel>>,
    file_system: Option<Arc<dyn FileSystemProvider>>,
    task_host: Option<Arc<dyn TaskHost>>,
    config: Option<BridgeConfig>,
}

impl HostBridgeBuilder {
    pub fn log_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.log_sink = Some(sink);
        self
    }

    pub fn security_model(mut self, model: Arc<dyn SecurityModel>) -> Self {
        self.security_model = Some(model);
        self
    }

    pub fn file_system(mut self, fs: Arc<dyn FileSystemProvider>) -> Self {
        self.file_system = Some(fs);
        self
    }

    pub fn task_host(mut self, host: Arc<dyn TaskHost>) -> Self {
        self.task_host = Some(host);
        self
    }

    pub fn config(mut self, config: BridgeConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// # Errors
    ///
    /// Returns [`core_runtime::Error::CapabilityMissing`] when a required
    /// capability was not provided and no desktop default is compiled in, or
    /// [`core_runtime::Error::Config`] when the configuration is invalid.
    pub fn build(self) -> Result<HostBridge> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let log_sink = match self.log_sink {
            Some(sink) => sink,
            None => default_log_sink()?,
        };
        let security_model = match self.security_model {
            Some(model) => model,
            None => default_security_model()?,
        };
        let file_system = match self.file_system {
            Some(fs) => fs,
            None => default_file_system()?,
        };
        let task_host = self.task_host.unwrap_or_else(|| {
            Arc::new(InProcessTaskHost::new(Arc::clone(&log_sink), config.clone()))
        });

        Ok(HostBridge::new(
            BridgeDependencies {
                log_sink,
                security_model,
                file_system,
                task_host,
            },
            config,
        ))
    }
}

#[cfg(feature = "desktop-shims")]
fn default_log_sink() -> Result<Arc<dyn LogSink>> {
    Ok(Arc::new(bridge_desktop::TracingLogSink))
}

#[cfg(not(feature = "desktop-shims"))]
fn default_log_sink() -> Result<Arc<dyn LogSink>> {
    Err(capability_missing("LogSink", "host log output"))
}

#[cfg(feature = "desktop-shims")]
fn default_security_model() -> Result<Arc<dyn SecurityModel>> {
    Ok(Arc::new(bridge_desktop::DesktopSecurityModel::new()))
}

#[cfg(not(feature = "desktop-shims"))]
fn default_security_model() -> Result<Arc<dyn SecurityModel>> {
    Err(capability_missing("SecurityModel", "runtime permission checks"))
}

#[cfg(feature = "desktop-shims")]
fn default_file_system() -> Result<Arc<dyn FileSystemProvider>> {
    Ok(Arc::new(bridge_desktop::DesktopFileSystem::new()))
}

#[cfg(not(feature = "desktop-shims"))]
fn default_file_system() -> Result<Arc<dyn FileSystemProvider>> {
    Err(capability_missing("FileSystemProvider", "storage directory resolution"))
}

#[cfg(not(feature = "desktop-shims"))]
fn capability_missing(capability: &str, purpose: &str) -> core_runtime::Error {
    core_runtime::Error::CapabilityMissing {
        capability: capability.to_string(),
        message: format!(
            "No {} implementation provided for {}. \
             Desktop: enable the `desktop-shims` feature. \
             Device: inject the platform adapter.",
            capability, purpose
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::logging::MemoryLogSink;
    use core_runtime::Error;

    #[cfg(feature = "desktop-shims")]
    #[test]
    fn test_desktop_bridge_builds() {
        let bridge = HostBridge::desktop().unwrap();

        assert_eq!(bridge.logger().ping(), PING_TOKEN);
        assert_eq!(bridge.config(), &BridgeConfig::default());
        assert_eq!(bridge.permissions().default_request_code(), 1001);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = BridgeConfig {
            app_storage_subdir: "a/b".to_string(),
            ..BridgeConfig::default()
        };
        let result = HostBridge::builder()
            .log_sink(Arc::new(MemoryLogSink::new()))
            .config(config)
            .build();

        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[cfg(not(feature = "desktop-shims"))]
    #[test]
    fn test_missing_capability_without_shims() {
        let result = HostBridge::builder()
            .log_sink(Arc::new(MemoryLogSink::new()))
            .build();

        assert!(matches!(
            result,
            Err(Error::CapabilityMissing { ref capability, .. }) if capability == "SecurityModel"
        ));
    }
}
