//! File System Provider Implementation using `std::fs`

use bridge_traits::{
    error::Result,
    permissions::ExecutionContext,
    storage::{FileSystemProvider, MediaState},
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Desktop file system provider
///
/// Private storage lives under `~/.protonox_app`. Desktops have no
/// removable shared media, so external storage reports
/// [`MediaState::Unmounted`] unless a shared root is configured with
/// [`with_external_root`](Self::with_external_root).
#[derive(Debug, Clone)]
pub struct DesktopFileSystem {
    files_dir: PathBuf,
    external_root: Option<PathBuf>,
}

impl DesktopFileSystem {
    /// Create a provider with the default private directory and no shared root
    pub fn new() -> Self {
        let files_dir = dirs::home_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(".protonox_app");

        Self {
            files_dir,
            external_root: None,
        }
    }

    /// Create a provider with a custom private directory
    pub fn with_files_dir(files_dir: PathBuf) -> Self {
        Self {
            files_dir,
            external_root: None,
        }
    }

    /// Treat `root` as mounted shared storage
    pub fn with_external_root(mut self, root: PathBuf) -> Self {
        self.external_root = Some(root);
        self
    }
}

impl Default for DesktopFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemProvider for DesktopFileSystem {
    fn files_dir(&self, _context: &ExecutionContext) -> PathBuf {
        self.files_dir.clone()
    }

    fn external_storage_state(&self) -> MediaState {
        if self.external_root.is_some() {
            MediaState::Mounted
        } else {
            MediaState::Unmounted
        }
    }

    fn external_storage_root(&self) -> PathBuf {
        self.external_root.clone().unwrap_or_default()
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path)?;
        debug!(path = ?path, "Created directory");
        Ok(())
    }
}
