//! Logging demo
//!
//! Installs the tracing subscriber with a console host sink and emits a few
//! events at different levels.
//!
//! Run with: `cargo run -p core-runtime --example logging_demo`

use bridge_traits::logging::{ConsoleLogSink, LogLevel};
use core_runtime::logging::{init_logging, LogFormat, LoggingConfig};
use std::sync::Arc;
use tracing::{debug, info, warn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = LoggingConfig::default()
        .with_format(LogFormat::Compact)
        .with_level(LogLevel::Debug)
        .with_logger_sink(Arc::new(ConsoleLogSink::default()));

    init_logging(config)?;

    info!(target: "core_bridge", "Bridge starting");
    debug!(target: "core_bridge", subdir = "protonox", "Resolving storage");
    warn!(target: "core_bridge", "External storage not mounted");

    Ok(())
}
