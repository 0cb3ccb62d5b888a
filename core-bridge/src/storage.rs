//! Storage directory resolution.

use bridge_traits::{
    logging::LogSink,
    permissions::ExecutionContext,
    storage::FileSystemProvider,
};
use core_runtime::config::{
    BridgeConfig, DEFAULT_APP_STORAGE_SUBDIR, DEFAULT_EXTERNAL_STORAGE_SUBDIR,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

use crate::tagged::TaggedLog;

/// Resolves the private and shared storage directories, creating them on
/// first access.
///
/// Paths are resolved on every call and never cached. An empty string means
/// the location is unavailable. Creation failures are logged and the path is
/// still returned.
#[derive(Clone)]
pub struct StorageResolver {
    fs: Arc<dyn FileSystemProvider>,
    log: TaggedLog,
    app_subdir: String,
    external_subdir: String,
}

impl StorageResolver {
    pub fn new(
        fs: Arc<dyn FileSystemProvider>,
        sink: Arc<dyn LogSink>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            fs,
            log: TaggedLog::new(sink, tag),
            app_subdir: DEFAULT_APP_STORAGE_SUBDIR.to_string(),
            external_subdir: DEFAULT_EXTERNAL_STORAGE_SUBDIR.to_string(),
        }
    }

    pub fn from_config(
        fs: Arc<dyn FileSystemProvider>,
        sink: Arc<dyn LogSink>,
        config: &BridgeConfig,
    ) -> Self {
        Self {
            fs,
            log: TaggedLog::new(sink, config.tags.storage.clone()),
            app_subdir: config.app_storage_subdir.clone(),
            external_subdir: config.external_storage_subdir.clone(),
        }
    }

    /// Private application directory, or `""` without a context.
    pub fn get_app_storage_dir(&self, context: Option<&ExecutionContext>) -> String {
        let Some(context) = context else {
            return String::new();
        };
        let dir = self.fs.files_dir(context).join(&self.app_subdir);
        self.ensure_dir(dir, "app")
    }

    /// Shared external directory, or `""` unless media is mounted read-write.
    pub fn get_external_storage_dir(&self) -> String {
        if !self.fs.external_storage_state().is_mounted() {
            return String::new();
        }
        let dir = self.fs.external_storage_root().join(&self.external_subdir);
        self.ensure_dir(dir, "external")
    }

    fn ensure_dir(&self, dir: PathBuf, kind: &str) -> String {
        let dir = absolutize(dir);
        if !self.fs.exists(&dir) {
            let created = match self.fs.create_dir_all(&dir) {
                Ok(()) => true,
                Err(err) => {
                    warn!(path = ?dir, error = %err, "Failed to create {} storage dir", kind);
                    false
                }
            };
            self.log
                .info(format!("Creating {} storage dir: {}", kind, created));
        }
        dir.to_string_lossy().into_owned()
    }
}

fn absolutize(path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        return path;
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path,
    }
}
