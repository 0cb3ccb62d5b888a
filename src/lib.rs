//! Workspace umbrella crate.
//!
//! Exposes the feature flags that map onto the individual workspace crates so
//! embedding hosts can depend on `protonox-bridge` alone and pick adapters by
//! feature instead of wiring each crate by hand.

#[cfg(feature = "desktop-shims")]
pub use core_bridge::*;
