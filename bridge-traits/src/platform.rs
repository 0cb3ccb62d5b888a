//! Platform-specific helper abstractions used to keep trait bounds aligned with
//! the threading guarantees of each target.
//!
//! Native hosts may call into the bridge from any thread, so adapters must be
//! `Send + Sync`. WebAssembly hosts run on a single thread and wrap objects
//! that cannot satisfy those bounds; the marker below makes the requirement
//! conditional without duplicating every trait definition.
//!
//! [`HostPlatform`] names the operating system family the bridge runs on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker trait that applies `Send + Sync` on native targets while becoming a
/// no-op on `wasm32`.
#[cfg(not(target_arch = "wasm32"))]
pub trait PlatformSendSync: Send + Sync {}

#[cfg(not(target_arch = "wasm32"))]
impl<T> PlatformSendSync for T where T: Send + Sync {}

#[cfg(target_arch = "wasm32")]
pub trait PlatformSendSync {}

#[cfg(target_arch = "wasm32")]
impl<T> PlatformSendSync for T {}

/// Operating system family the bridge is embedded in.
///
/// Scripts branch on this before touching device-only facilities such as
/// runtime permissions. The string form matches the names the scripting
/// layer already uses (`"android"`, `"win"`, `"linux"`, `"macosx"`, `"ios"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostPlatform {
    Android,
    Ios,
    Linux,
    #[serde(rename = "win")]
    Windows,
    #[serde(rename = "macosx")]
    MacOs,
    Unknown,
}

impl HostPlatform {
    /// Platform the current binary was compiled for.
    pub const fn current() -> Self {
        if cfg!(target_os = "android") {
            HostPlatform::Android
        } else if cfg!(target_os = "ios") {
            HostPlatform::Ios
        } else if cfg!(target_os = "linux") {
            HostPlatform::Linux
        } else if cfg!(target_os = "windows") {
            HostPlatform::Windows
        } else if cfg!(target_os = "macos") {
            HostPlatform::MacOs
        } else {
            HostPlatform::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HostPlatform::Android => "android",
            HostPlatform::Ios => "ios",
            HostPlatform::Linux => "linux",
            HostPlatform::Windows => "win",
            HostPlatform::MacOs => "macosx",
            HostPlatform::Unknown => "unknown",
        }
    }

    /// Parse a scripting-layer platform name. Unrecognised names map to `Unknown`.
    pub fn from_host_str(name: &str) -> Self {
        match name {
            "android" => HostPlatform::Android,
            "ios" => HostPlatform::Ios,
            "linux" => HostPlatform::Linux,
            "win" => HostPlatform::Windows,
            "macosx" => HostPlatform::MacOs,
            _ => HostPlatform::Unknown,
        }
    }

    pub fn is_android(&self) -> bool {
        matches!(self, HostPlatform::Android)
    }

    /// Windows, Linux and macOS.
    pub fn is_desktop(&self) -> bool {
        matches!(
            self,
            HostPlatform::Windows | HostPlatform::Linux | HostPlatform::MacOs
        )
    }
}

impl Default for HostPlatform {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_classification() {
        assert!(HostPlatform::Android.is_android());
        assert!(!HostPlatform::Android.is_desktop());
        for desktop in [HostPlatform::Windows, HostPlatform::Linux, HostPlatform::MacOs] {
            assert!(desktop.is_desktop());
            assert!(!desktop.is_android());
        }
        assert!(!HostPlatform::Ios.is_desktop());
        assert!(!HostPlatform::Unknown.is_desktop());
        assert!(!HostPlatform::Unknown.is_android());
    }

    #[test]
    fn test_host_names() {
        for platform in [
            HostPlatform::Android,
            HostPlatform::Ios,
            HostPlatform::Linux,
            HostPlatform::Windows,
            HostPlatform::MacOs,
        ] {
            assert_eq!(HostPlatform::from_host_str(platform.as_str()), platform);
            assert_eq!(
                serde_json::to_string(&platform).unwrap(),
                format!("\"{}\"", platform)
            );
        }
        assert_eq!(HostPlatform::from_host_str("web"), HostPlatform::Unknown);
    }

    #[cfg(any(target_os = "linux", target_os = "windows", target_os = "macos"))]
    #[test]
    fn test_current_is_desktop_on_desktop_targets() {
        assert!(HostPlatform::current().is_desktop());
    }
}
