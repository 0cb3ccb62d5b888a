//! Host Logging Abstractions
//!
//! Provides the tagged log line handed to the host and the sink trait that
//! carries it to the platform log (logcat on Android, console on desktop).

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Mutex, PoisonError};

use crate::{error::Result, platform::PlatformSendSync};

/// `tracing` target used when host log lines are re-emitted as tracing events.
///
/// Layers that mirror tracing events into a [`LogSink`] skip this target so a
/// line never loops between the two.
pub const HOST_LOG_TARGET: &str = "host_log";

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single tagged line bound for the host log.
///
/// Built per call and handed straight to a [`LogSink`]; nothing keeps it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogMessage {
    /// Component attribution (e.g. `ProtonoxStorage`)
    pub tag: String,
    pub level: LogLevel,
    pub text: String,
}

impl LogMessage {
    pub fn new(level: LogLevel, tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            level,
            text: text.into(),
        }
    }

    pub fn info(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(LogLevel::Info, tag, text)
    }

    pub fn warn(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(LogLevel::Warn, tag, text)
    }

    pub fn error(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(LogLevel::Error, tag, text)
    }
}

/// Host log sink trait
///
/// Forwards tagged lines to the host logging pipeline:
/// - **Android**: Logcat (`Log.i` / `Log.w` / `Log.e`)
/// - **Desktop**: `tracing` subscriber or plain console
///
/// Implementations must not block for longer than a single write.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::logging::{LogMessage, LogSink};
///
/// fn announce(sink: &dyn LogSink) {
///     sink.log(LogMessage::info("ProtonoxBridge", "bridge ready")).ok();
/// }
/// ```
pub trait LogSink: PlatformSendSync {
    /// Write one line to the host log
    fn log(&self, message: LogMessage) -> Result<()>;

    /// Minimum level this sink accepts
    ///
    /// Callers forwarding high-volume diagnostics can filter at the source.
    fn min_level(&self) -> LogLevel {
        LogLevel::Info
    }
}

/// Console sink for development hosts and demos
#[derive(Debug, Clone)]
pub struct ConsoleLogSink {
    pub min_level: LogLevel,
}

impl Default for ConsoleLogSink {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
        }
    }
}

impl LogSink for ConsoleLogSink {
    fn log(&self, message: LogMessage) -> Result<()> {
        if message.level >= self.min_level {
            println!(
                "[{}] {} {}: {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                message.level,
                message.tag,
                message.text
            );
        }
        Ok(())
    }

    fn min_level(&self) -> LogLevel {
        self.min_level
    }
}

/// In-memory sink that keeps every line, for tests and script harnesses
#[derive(Debug, Default)]
pub struct MemoryLogSink {
    lines: Mutex<Vec<LogMessage>>,
}

impl MemoryLogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines logged so far, oldest first
    pub fn lines(&self) -> Vec<LogMessage> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Text of every line, oldest first
    pub fn texts(&self) -> Vec<String> {
        self.lines().into_iter().map(|line| line.text).collect()
    }

    pub fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl LogSink for MemoryLogSink {
    fn log(&self, message: LogMessage) -> Result<()> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message);
        Ok(())
    }

    fn min_level(&self) -> LogLevel {
        LogLevel::Trace
    }
}
