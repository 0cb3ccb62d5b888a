//! Script-side control of host background tasks.

use bridge_traits::{
    background::{TaskBundle, TaskHost, SERVICE_NAME_KEY},
    logging::LogSink,
};
use core_runtime::config::BridgeConfig;
use std::sync::Arc;

use crate::tagged::TaggedLog;

/// Starts and stops background tasks through the host scheduler.
#[derive(Clone)]
pub struct ServiceLauncher {
    host: Arc<dyn TaskHost>,
    log: TaggedLog,
    name_key: String,
}

impl ServiceLauncher {
    pub fn new(host: Arc<dyn TaskHost>, sink: Arc<dyn LogSink>, tag: impl Into<String>) -> Self {
        Self {
            host,
            log: TaggedLog::new(sink, tag),
            name_key: SERVICE_NAME_KEY.to_string(),
        }
    }

    pub fn from_config(
        host: Arc<dyn TaskHost>,
        sink: Arc<dyn LogSink>,
        config: &BridgeConfig,
    ) -> Self {
        Self {
            host,
            log: TaggedLog::new(sink, config.tags.service.clone()),
            name_key: config.task_name_key.clone(),
        }
    }

    /// Start the task `name`, passing `extras` as stringified bundle entries.
    ///
    /// `extras` cannot override the task name. Returns `false` if the host
    /// refused.
    pub fn start_service<I, K, V>(&self, name: &str, extras: I) -> bool
    where
        I: IntoIterator<Item = (K, V)>,
        K: ToString,
        V: ToString,
    {
        let mut bundle = TaskBundle::new();
        for (key, value) in extras {
            bundle.put(key.to_string(), value.to_string());
        }
        bundle.put(self.name_key.as_str(), name);

        match self.host.start(bundle) {
            Ok(()) => {
                self.log.info(format!("Service '{}' started.", name));
                true
            }
            Err(err) => {
                self.log
                    .error(format!("Error starting service '{}': {}", name, err));
                false
            }
        }
    }

    /// Stop the task `name`. Returns `false` if the host refused.
    pub fn stop_service(&self, name: &str) -> bool {
        let bundle = TaskBundle::new().with_extra(self.name_key.as_str(), name);

        match self.host.stop(bundle) {
            Ok(()) => {
                self.log.info(format!("Service '{}' stopped.", name));
                true
            }
            Err(err) => {
                self.log
                    .error(format!("Error stopping service '{}': {}", name, err));
                false
            }
        }
    }
}
