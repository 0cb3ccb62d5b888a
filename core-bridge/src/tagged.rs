use bridge_traits::logging::{LogLevel, LogMessage, LogSink};
use std::sync::Arc;
use tracing::warn;

/// Host log handle bound to one component tag.
///
/// Sink failures are reported through `tracing` and otherwise ignored; a
/// broken log transport must not change what a bridge call returns.
#[derive(Clone)]
pub(crate) struct TaggedLog {
    sink: Arc<dyn LogSink>,
    tag: String,
}

impl TaggedLog {
    pub(crate) fn new(sink: Arc<dyn LogSink>, tag: impl Into<String>) -> Self {
        Self {
            sink,
            tag: tag.into(),
        }
    }

    pub(crate) fn tag(&self) -> &str {
        &self.tag
    }

    pub(crate) fn info(&self, text: impl Into<String>) {
        self.emit(LogLevel::Info, text.into());
    }

    pub(crate) fn warn(&self, text: impl Into<String>) {
        self.emit(LogLevel::Warn, text.into());
    }

    pub(crate) fn error(&self, text: impl Into<String>) {
        self.emit(LogLevel::Error, text.into());
    }

    fn emit(&self, level: LogLevel, text: String) {
        if let Err(err) = self.sink.log(LogMessage::new(level, self.tag.as_str(), text)) {
            warn!(tag = %self.tag, error = %err, "Host log sink rejected line");
        }
    }
}
