//! Local notifications. Not wired to any host yet: lines go to the log only.

use bridge_traits::logging::LogSink;
use core_runtime::config::BridgeConfig;
use std::sync::Arc;

use crate::tagged::TaggedLog;

#[derive(Clone)]
pub struct Notifier {
    log: TaggedLog,
}

impl Notifier {
    pub fn new(sink: Arc<dyn LogSink>, tag: impl Into<String>) -> Self {
        Self {
            log: TaggedLog::new(sink, tag),
        }
    }

    pub fn from_config(sink: Arc<dyn LogSink>, config: &BridgeConfig) -> Self {
        Self::new(sink, config.tags.notifications.clone())
    }

    // TODO: post through the host notification manager once a `Notifications`
    // capability trait exists in bridge-traits.
    pub fn notify(&self, title: &str, message: &str) {
        self.log.info(format!(
            "[NOTIFY] {}: {} (not implemented yet)",
            title, message
        ));
    }
}
