//! Background Task Lifecycle Types
//!
//! Types shared between the host scheduler and the bridge's background task:
//! the start bundle, the restart hint, and the host trait used by scripting
//! callers to start and stop tasks.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{error::Result, platform::PlatformSendSync};

/// Bundle key carrying the task name
pub const SERVICE_NAME_KEY: &str = "service_name";

/// String key/value parameters handed to a task at start
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskBundle {
    extras: BTreeMap<String, String>,
}

impl TaskBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bundle with [`SERVICE_NAME_KEY`] already set
    pub fn named(name: impl Into<String>) -> Self {
        Self::new().with_extra(SERVICE_NAME_KEY, name)
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.put(key, value);
        self
    }

    pub fn put(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.extras.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.extras.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.extras.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.extras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extras.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.extras.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Scheduler hint returned when a task starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartMode {
    /// Restart the task after the process is reclaimed
    Sticky,
    /// Drop pending restarts; the task is not durable work
    NotSticky,
}

/// Communication channel a bound caller would receive.
///
/// Uninhabited: bridge tasks never accept bindings, so no value of this type
/// can exist and `Option<TaskChannel>` is always `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskChannel {}

/// Host task scheduler trait
///
/// - **Android**: `Context.startService` / `Context.stopService` with an `Intent`
/// - **Desktop**: in-process lifecycle driver
pub trait TaskHost: PlatformSendSync {
    /// Ask the host to start (or re-deliver a start to) the task named in `bundle`
    fn start(&self, bundle: TaskBundle) -> Result<()>;

    /// Ask the host to stop the task named in `bundle`
    fn stop(&self, bundle: TaskBundle) -> Result<()>;
}
