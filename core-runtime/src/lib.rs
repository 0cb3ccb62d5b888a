//! # Core Runtime Module
//!
//! Provides the ambient runtime infrastructure for the host bridge:
//! - Logging and tracing infrastructure
//! - Configuration management
//! - Permission result event bus
//!
//! ## Overview
//!
//! The facade crate depends on this crate for its configuration and for the
//! channel that carries asynchronous permission answers back from the host.
//! Nothing here talks to the host directly; host access goes through the
//! `bridge-traits` capability traits.

pub mod config;
pub mod error;
pub mod events;
pub mod logging;

pub use error::{Error, Result};
