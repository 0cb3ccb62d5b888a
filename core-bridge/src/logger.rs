//! Bridge logger and reachability handshake.

use bridge_traits::logging::LogSink;
use core_runtime::config::BridgeConfig;
use std::sync::Arc;

use crate::tagged::TaggedLog;

/// Token returned by [`Logger::ping`]
pub const PING_TOKEN: &str = "pong-from-java";

/// Line logged by [`Logger::ping`], independent of the configured tag
const PING_LINE: &str = "ProtonoxBridge.ping() called";

/// Writes INFO lines to the host log and answers the embedding layer's ping.
#[derive(Clone)]
pub struct Logger {
    log: TaggedLog,
}

impl Logger {
    pub fn new(sink: Arc<dyn LogSink>, tag: impl Into<String>) -> Self {
        Self {
            log: TaggedLog::new(sink, tag),
        }
    }

    pub fn from_config(sink: Arc<dyn LogSink>, config: &BridgeConfig) -> Self {
        Self::new(sink, config.tags.bridge.clone())
    }

    pub fn tag(&self) -> &str {
        self.log.tag()
    }

    /// Log `message` at INFO, unmodified.
    pub fn log(&self, message: &str) {
        self.log.info(message);
    }

    /// Handshake used to check the bridge is reachable. Always [`PING_TOKEN`].
    ///
    /// The logged line is fixed so host-side log scrapers can match it; only
    /// the tag it is filed under follows the configuration.
    pub fn ping(&self) -> String {
        self.log.info(PING_LINE);
        PING_TOKEN.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::logging::{LogLevel, LogMessage, MemoryLogSink};

    #[test]
    fn test_ping_returns_token_and_logs() {
        let sink = Arc::new(MemoryLogSink::new());
        let logger = Logger::new(sink.clone(), "ProtonoxBridge");

        assert_eq!(logger.ping(), "pong-from-java");
        assert_eq!(logger.ping(), PING_TOKEN);

        assert_eq!(
            sink.lines(),
            vec![
                LogMessage::info("ProtonoxBridge", "ProtonoxBridge.ping() called"),
                LogMessage::info("ProtonoxBridge", "ProtonoxBridge.ping() called"),
            ]
        );
    }

    #[test]
    fn test_ping_line_ignores_custom_tag() {
        let sink = Arc::new(MemoryLogSink::new());
        let config = BridgeConfig::builder().bridge_tag("Bridge").build().unwrap();
        let logger = Logger::from_config(sink.clone(), &config);

        logger.ping();

        assert_eq!(
            sink.lines(),
            vec![LogMessage::info("Bridge", "ProtonoxBridge.ping() called")]
        );
    }

    #[test]
    fn test_log_passes_text_through() {
        let sink = Arc::new(MemoryLogSink::new());
        let logger = Logger::from_config(sink.clone(), &BridgeConfig::default());

        logger.log("hello from python");
        logger.log("");

        let lines = sink.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.level == LogLevel::Info));
        assert!(lines.iter().all(|l| l.tag == "ProtonoxBridge"));
        assert_eq!(lines[0].text, "hello from python");
        assert_eq!(lines[1].text, "");
    }

    #[test]
    fn test_failing_sink_does_not_affect_ping() {
        use bridge_traits::error::{BridgeError, Result as SinkResult};

        struct BrokenSink;

        impl LogSink for BrokenSink {
            fn log(&self, _message: LogMessage) -> SinkResult<()> {
                Err(BridgeError::NotAvailable("logcat".into()))
            }
        }

        let logger = Logger::new(Arc::new(BrokenSink), "ProtonoxBridge");
        logger.log("dropped");
        assert_eq!(logger.ping(), PING_TOKEN);
    }
}
