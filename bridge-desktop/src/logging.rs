//! Host log sink backed by `tracing`

use bridge_traits::{
    error::Result,
    logging::{LogLevel, LogMessage, LogSink, HOST_LOG_TARGET},
};
use tracing::{debug, error, info, trace, warn};

/// Re-emits host log lines as `tracing` events on [`HOST_LOG_TARGET`].
///
/// The component tag travels as the `tag` field so subscribers can filter on it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogSink;

impl LogSink for TracingLogSink {
    fn log(&self, message: LogMessage) -> Result<()> {
        let LogMessage { tag, level, text } = message;
        match level {
            LogLevel::Trace => trace!(target: HOST_LOG_TARGET, tag = %tag, "{}", text),
            LogLevel::Debug => debug!(target: HOST_LOG_TARGET, tag = %tag, "{}", text),
            LogLevel::Info => info!(target: HOST_LOG_TARGET, tag = %tag, "{}", text),
            LogLevel::Warn => warn!(target: HOST_LOG_TARGET, tag = %tag, "{}", text),
            LogLevel::Error => error!(target: HOST_LOG_TARGET, tag = %tag, "{}", text),
        }
        Ok(())
    }

    fn min_level(&self) -> LogLevel {
        LogLevel::Trace
    }
}
