//! Storage Location Abstractions
//!
//! Exposes the two base directories the bridge resolves paths under, the
//! mount state of shared media, and the minimal filesystem operations needed
//! to create directories on demand.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{error::Result, permissions::ExecutionContext, platform::PlatformSendSync};

/// Mount state of shared external media
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaState {
    Mounted,
    MountedReadOnly,
    Unmounted,
    Removed,
    Unknown,
}

impl MediaState {
    /// Parse the state string reported by the host (`"mounted"`, `"mounted_ro"`, ...)
    ///
    /// For adapters whose host reports media state as a string, as Android's
    /// `Environment.getExternalStorageState()` does. Anything unrecognised maps
    /// to [`MediaState::Unknown`].
    pub fn from_host_str(state: &str) -> Self {
        match state {
            "mounted" => MediaState::Mounted,
            "mounted_ro" => MediaState::MountedReadOnly,
            "unmounted" => MediaState::Unmounted,
            "removed" => MediaState::Removed,
            _ => MediaState::Unknown,
        }
    }

    /// Only a read-write mount counts as available storage.
    pub fn is_mounted(&self) -> bool {
        matches!(self, MediaState::Mounted)
    }
}

/// File system provider trait
///
/// Abstracts host storage locations:
/// - **Android**: `Context.getFilesDir()` and `Environment.getExternalStorageDirectory()`
/// - **Desktop**: platform data directory and an optional shared root
///
/// # Example
///
/// ```ignore
/// use bridge_traits::storage::FileSystemProvider;
///
/// fn ensure(fs: &dyn FileSystemProvider, path: &std::path::Path) -> bool {
///     fs.exists(path) || fs.create_dir_all(path).is_ok()
/// }
/// ```
pub trait FileSystemProvider: PlatformSendSync {
    /// Private application storage root for `context`
    fn files_dir(&self, context: &ExecutionContext) -> PathBuf;

    /// Current mount state of shared external media
    fn external_storage_state(&self) -> MediaState;

    /// Shared external storage root
    ///
    /// Only meaningful while [`external_storage_state`](Self::external_storage_state)
    /// reports [`MediaState::Mounted`].
    fn external_storage_root(&self) -> PathBuf;

    /// Check if a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories if they don't exist
    fn create_dir_all(&self, path: &Path) -> Result<()>;
}
