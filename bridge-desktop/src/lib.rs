//! # Desktop Bridge Implementations
//!
//! Default implementations of the capability traits for desktop hosts
//! (macOS, Windows, Linux), used for development and for running scripting
//! code outside a device.
//!
//! ## Overview
//!
//! - `FileSystemProvider` using `std::fs` and `dirs`
//! - `SecurityModel` that grants everything (desktops have no runtime permission model)
//! - `LogSink` that re-emits host lines as `tracing` events
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_desktop::{DesktopFileSystem, DesktopSecurityModel, TracingLogSink};
//! use std::sync::Arc;
//!
//! let fs = Arc::new(DesktopFileSystem::new());
//! let security = Arc::new(DesktopSecurityModel::new());
//! let sink = Arc::new(TracingLogSink);
//! ```

mod filesystem;
mod logging;
mod permissions;

pub use filesystem::DesktopFileSystem;
pub use logging::TracingLogSink;
pub use permissions::DesktopSecurityModel;
