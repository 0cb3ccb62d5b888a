//! Lifecycle-bound background task and an in-process host that drives it.

use bridge_traits::{
    background::{StartMode, TaskBundle, TaskChannel, TaskHost, SERVICE_NAME_KEY},
    error::{BridgeError, Result},
    logging::LogSink,
};
use core_runtime::config::BridgeConfig;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

use crate::tagged::TaggedLog;

/// Lifecycle state of a [`BackgroundTask`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Created,
    Started,
    Destroyed,
}

/// Background task stub started and stopped by the host scheduler.
///
/// It does no work beyond logging its lifecycle: `Created -> Started ->
/// Destroyed`. Start commands may be redelivered while started; nothing
/// leaves `Destroyed`.
pub struct BackgroundTask {
    log: TaggedLog,
    name_key: String,
    state: TaskState,
}

impl BackgroundTask {
    /// Host `onCreate`
    pub fn create(sink: Arc<dyn LogSink>, tag: impl Into<String>) -> Self {
        Self::create_with_key(sink, tag, SERVICE_NAME_KEY)
    }

    pub fn from_config(sink: Arc<dyn LogSink>, config: &BridgeConfig) -> Self {
        Self::create_with_key(sink, config.tags.service.clone(), config.task_name_key.clone())
    }

    fn create_with_key(
        sink: Arc<dyn LogSink>,
        tag: impl Into<String>,
        name_key: impl Into<String>,
    ) -> Self {
        let log = TaggedLog::new(sink, tag);
        log.info(format!("{} created", log.tag()));
        Self {
            log,
            name_key: name_key.into(),
            state: TaskState::Created,
        }
    }

    pub fn state(&self) -> TaskState {
        self.state
    }

    /// Host `onStartCommand`.
    ///
    /// The task name comes from the bundle's name key; a missing bundle or
    /// key logs an empty name. Always asks the scheduler not to restart it.
    pub fn on_start(&mut self, bundle: Option<&TaskBundle>) -> StartMode {
        if self.state == TaskState::Destroyed {
            self.log
                .warn(format!("{} start ignored: already destroyed", self.log.tag()));
            return StartMode::NotSticky;
        }

        let name = bundle
            .and_then(|b| b.get(&self.name_key))
            .unwrap_or_default();
        self.log.info(format!("{} started: {}", self.log.tag(), name));
        self.state = TaskState::Started;
        StartMode::NotSticky
    }

    /// Host `onDestroy`. Repeated calls are no-ops.
    pub fn on_destroy(&mut self) {
        if self.state == TaskState::Destroyed {
            return;
        }
        self.log.info(format!("{} destroyed", self.log.tag()));
        self.state = TaskState::Destroyed;
    }

    /// Host `onBind`. Tasks never accept bindings.
    pub fn on_bind(&self, _bundle: Option<&TaskBundle>) -> Option<TaskChannel> {
        None
    }
}

/// [`TaskHost`] that runs [`BackgroundTask`]s inside the current process.
///
/// Used on hosts without a system task scheduler. One task per name: the
/// first start creates it, later starts are redelivered to it, stop destroys
/// and forgets it. Bundles without a task name are rejected.
pub struct InProcessTaskHost {
    sink: Arc<dyn LogSink>,
    config: BridgeConfig,
    tasks: Mutex<HashMap<String, BackgroundTask>>,
}

impl InProcessTaskHost {
    pub fn new(sink: Arc<dyn LogSink>, config: BridgeConfig) -> Self {
        Self {
            sink,
            config,
            tasks: Mutex::new(HashMap::new()),
        }
    }

    /// Lifecycle state of the task registered under `name`, if any
    pub fn state_of(&self, name: &str) -> Option<TaskState> {
        self.tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .map(BackgroundTask::state)
    }

    /// Names of the tasks currently alive
    pub fn running(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }

    fn task_name(&self, bundle: &TaskBundle) -> Result<String> {
        match bundle.get(&self.config.task_name_key) {
            Some(name) if !name.is_empty() => Ok(name.to_string()),
            _ => Err(BridgeError::Rejected(format!(
                "bundle has no '{}' entry",
                self.config.task_name_key
            ))),
        }
    }
}

impl TaskHost for InProcessTaskHost {
    fn start(&self, bundle: TaskBundle) -> Result<()> {
        let name = self.task_name(&bundle)?;
        let mut tasks = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
        let task = tasks
            .entry(name)
            .or_insert_with(|| BackgroundTask::from_config(Arc::clone(&self.sink), &self.config));
        task.on_start(Some(&bundle));
        Ok(())
    }

    fn stop(&self, bundle: TaskBundle) -> Result<()> {
        let name = self.task_name(&bundle)?;
        let removed = self
            .tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&name);

        match removed {
            Some(mut task) => task.on_destroy(),
            None => debug!(task = %name, "Stop requested for task that is not running"),
        }
        Ok(())
    }
}
