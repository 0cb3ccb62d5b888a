//! # Host Bridge Traits
//!
//! Capability traits that every embedding host must implement.
//!
//! ## Overview
//!
//! This crate defines the contract between the bridge facade and the host
//! operating system. Each trait represents one host facility the facade needs
//! but cannot provide itself: the facade stays testable without a real device,
//! and each platform ships its own adapters.
//!
//! ## Traits
//!
//! - [`LogSink`](logging::LogSink) - Tagged, leveled host log output (logcat, console)
//! - [`SecurityModel`](permissions::SecurityModel) - Runtime permission queries and requests
//! - [`PermissionResultListener`](permissions::PermissionResultListener) - Asynchronous grant results
//! - [`FileSystemProvider`](storage::FileSystemProvider) - Base directories, media state, directory creation
//! - [`TaskHost`](background::TaskHost) - Starting and stopping host-managed background tasks
//!
//! ## Platform Requirements
//!
//! | Platform | Implementation Crate | Status |
//! |----------|---------------------|--------|
//! | Desktop  | `bridge-desktop`    | ✅ Available |
//! | Android  | TBD                 | 📋 Planned |
//!
//! ## Error Handling
//!
//! Capability traits return [`BridgeError`](error::BridgeError). The facade
//! never forwards these to its callers; it logs them and falls back to an
//! empty or `false` result.
//!
//! ## Thread Safety
//!
//! All traits carry the [`PlatformSendSync`](platform::PlatformSendSync) bound,
//! which is `Send + Sync` on native targets.

pub mod background;
pub mod error;
pub mod logging;
pub mod permissions;
pub mod platform;
pub mod storage;

pub use error::BridgeError;

// Re-export commonly used types
pub use background::{StartMode, TaskBundle, TaskChannel, TaskHost, SERVICE_NAME_KEY};
pub use logging::{ConsoleLogSink, LogLevel, LogMessage, LogSink, MemoryLogSink, HOST_LOG_TARGET};
pub use permissions::{
    ExecutionContext, GrantState, PermissionRequest, PermissionResult, PermissionResultListener,
    SecurityModel,
};
pub use platform::HostPlatform;
pub use storage::{FileSystemProvider, MediaState};
