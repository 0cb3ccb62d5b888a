//! # Bridge Configuration Module
//!
//! Component-scoped constants for the host bridge: the log tag each facade
//! component attributes its lines to, the storage subdirectory names, the
//! default permission request code and the bundle key carrying a task name.
//!
//! ## Usage
//!
//! ```
//! use core_runtime::config::BridgeConfig;
//!
//! let config = BridgeConfig::builder()
//!     .app_storage_subdir("protonox")
//!     .default_request_code(42)
//!     .build()
//!     .expect("valid config");
//!
//! assert_eq!(config.default_request_code, 42);
//! ```
//!
//! ## Error Handling
//!
//! `build()` rejects empty tags and subdirectory names that are not a single
//! plain path component:
//!
//! ```
//! use core_runtime::config::BridgeConfig;
//!
//! let result = BridgeConfig::builder()
//!     .external_storage_subdir("../escape")
//!     .build();
//!
//! assert!(result.is_err());
//! ```

use crate::error::{Error, Result};
use bridge_traits::background::SERVICE_NAME_KEY;
use bridge_traits::platform::HostPlatform;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path};

/// Subdirectory created under the private application storage root
pub const DEFAULT_APP_STORAGE_SUBDIR: &str = "protonox";

/// Subdirectory created under the shared external storage root
pub const DEFAULT_EXTERNAL_STORAGE_SUBDIR: &str = "Protonox";

/// Request code used when callers do not choose one
pub const DEFAULT_REQUEST_CODE: i32 = 1001;

/// Log tag per facade component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentTags {
    pub bridge: String,
    pub permissions: String,
    pub service: String,
    pub storage: String,
    pub notifications: String,
}

impl Default for ComponentTags {
    fn default() -> Self {
        Self {
            bridge: "ProtonoxBridge".to_string(),
            permissions: "ProtonoxPermissions".to_string(),
            service: "ProtonoxService".to_string(),
            storage: "ProtonoxStorage".to_string(),
            notifications: "ProtonoxNotifications".to_string(),
        }
    }
}

impl ComponentTags {
    fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("bridge", self.bridge.as_str()),
            ("permissions", self.permissions.as_str()),
            ("service", self.service.as_str()),
            ("storage", self.storage.as_str()),
            ("notifications", self.notifications.as_str()),
        ]
        .into_iter()
    }
}

/// Configuration for the host bridge facade.
///
/// Every field is a constant bound at construction; components never mutate
/// it. Use [`BridgeConfigBuilder`] to construct instances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    pub tags: ComponentTags,

    /// Directory name appended to the private storage root
    pub app_storage_subdir: String,

    /// Directory name appended to the shared external storage root
    pub external_storage_subdir: String,

    /// Request code for `ensure_permissions`
    pub default_request_code: i32,

    /// Bundle key holding the task name at start
    pub task_name_key: String,

    /// Host operating system reported to scripts
    pub platform: HostPlatform,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            tags: ComponentTags::default(),
            app_storage_subdir: DEFAULT_APP_STORAGE_SUBDIR.to_string(),
            external_storage_subdir: DEFAULT_EXTERNAL_STORAGE_SUBDIR.to_string(),
            default_request_code: DEFAULT_REQUEST_CODE,
            task_name_key: SERVICE_NAME_KEY.to_string(),
            platform: HostPlatform::current(),
        }
    }
}

impl BridgeConfig {
    /// Creates a new builder seeded with the defaults.
    pub fn builder() -> BridgeConfigBuilder {
        BridgeConfigBuilder::default()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a tag or the task-name key is empty, or if
    /// a storage subdirectory is not exactly one normal path component.
    pub fn validate(&self) -> Result<()> {
        for (component, tag) in self.tags.iter() {
            if tag.trim().is_empty() {
                return Err(Error::Config(format!(
                    "Log tag for '{}' component must not be empty",
                    component
                )));
            }
        }

        validate_subdir("app_storage_subdir", &self.app_storage_subdir)?;
        validate_subdir("external_storage_subdir", &self.external_storage_subdir)?;

        if self.task_name_key.is_empty() {
            return Err(Error::Config("task_name_key must not be empty".to_string()));
        }

        Ok(())
    }
}

fn validate_subdir(field: &str, value: &str) -> Result<()> {
    let mut components = Path::new(value).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(Error::Config(format!(
            "{} must be a single directory name, got '{}'",
            field, value
        ))),
    }
}

/// Builder for constructing [`BridgeConfig`] instances.
#[derive(Debug, Default)]
pub struct BridgeConfigBuilder {
    config: BridgeConfig,
}

impl BridgeConfigBuilder {
    /// Replaces every component tag at once.
    pub fn tags(mut self, tags: ComponentTags) -> Self {
        self.config.tags = tags;
        self
    }

    pub fn bridge_tag(mut self, tag: impl Into<String>) -> Self {
        self.config.tags.bridge = tag.into();
        self
    }

    pub fn permissions_tag(mut self, tag: impl Into<String>) -> Self {
        self.config.tags.permissions = tag.into();
        self
    }

    pub fn service_tag(mut self, tag: impl Into<String>) -> Self {
        self.config.tags.service = tag.into();
        self
    }

    pub fn storage_tag(mut self, tag: impl Into<String>) -> Self {
        self.config.tags.storage = tag.into();
        self
    }

    pub fn notifications_tag(mut self, tag: impl Into<String>) -> Self {
        self.config.tags.notifications = tag.into();
        self
    }

    /// Sets the private storage subdirectory.
    ///
    /// Default: `protonox`
    pub fn app_storage_subdir(mut self, name: impl Into<String>) -> Self {
        self.config.app_storage_subdir = name.into();
        self
    }

    /// Sets the shared external storage subdirectory.
    ///
    /// Default: `Protonox`
    pub fn external_storage_subdir(mut self, name: impl Into<String>) -> Self {
        self.config.external_storage_subdir = name.into();
        self
    }

    /// Default: 1001
    pub fn default_request_code(mut self, code: i32) -> Self {
        self.config.default_request_code = code;
        self
    }

    pub fn task_name_key(mut self, key: impl Into<String>) -> Self {
        self.config.task_name_key = key.into();
        self
    }

    /// Overrides the platform detected at compile time.
    pub fn platform(mut self, platform: HostPlatform) -> Self {
        self.config.platform = platform;
        self
    }

    /// Builds the final configuration.
    ///
    /// # Errors
    ///
    /// See [`BridgeConfig::validate`].
    pub fn build(self) -> Result<BridgeConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
