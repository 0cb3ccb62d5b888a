//! Runtime permission checks and requests.

use bridge_traits::{
    logging::LogSink,
    permissions::{ExecutionContext, PermissionRequest, SecurityModel},
};
use core_runtime::config::{BridgeConfig, DEFAULT_REQUEST_CODE};
use std::sync::Arc;

use crate::tagged::TaggedLog;

/// Queries and requests runtime permissions against the host security model.
///
/// Every method accepts the execution context as an `Option`; `None` is the
/// embedding layer handing over a null activity and always fails safe.
#[derive(Clone)]
pub struct PermissionGate {
    security: Arc<dyn SecurityModel>,
    log: TaggedLog,
    default_request_code: i32,
}

impl PermissionGate {
    pub fn new(
        security: Arc<dyn SecurityModel>,
        sink: Arc<dyn LogSink>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            security,
            log: TaggedLog::new(sink, tag),
            default_request_code: DEFAULT_REQUEST_CODE,
        }
    }

    pub fn from_config(
        security: Arc<dyn SecurityModel>,
        sink: Arc<dyn LogSink>,
        config: &BridgeConfig,
    ) -> Self {
        Self::new(security, sink, config.tags.permissions.clone())
            .with_default_request_code(config.default_request_code)
    }

    /// Request code used by [`ensure_permissions`](Self::ensure_permissions)
    pub fn with_default_request_code(mut self, code: i32) -> Self {
        self.default_request_code = code;
        self
    }

    pub fn default_request_code(&self) -> i32 {
        self.default_request_code
    }

    /// `true` iff the host reports the permission as granted.
    ///
    /// Missing context returns `false` without consulting the host.
    pub fn has_permission(&self, context: Option<&ExecutionContext>, permission: &str) -> bool {
        let Some(context) = context else {
            return false;
        };
        self.security
            .check_permission(context, permission)
            .is_granted()
    }

    /// Hand a request to the host's asynchronous permission flow.
    ///
    /// Returns immediately. `request_code` reaches the host unchanged so its
    /// eventual callback can be matched to this call. Missing context logs a
    /// warning and does nothing.
    pub fn request_permissions<I, S>(
        &self,
        context: Option<&ExecutionContext>,
        permissions: I,
        request_code: i32,
    ) where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let Some(context) = context else {
            self.log.warn("requestPermissions: activity is null");
            return;
        };

        let request = PermissionRequest::new(context.clone(), permissions, request_code);
        if let Err(err) = self.security.request_permissions(request) {
            self.log.error(format!(
                "requestPermissions: host rejected request {}: {}",
                request_code, err
            ));
        }
    }

    /// `true` when every permission is already granted.
    ///
    /// Otherwise requests only the missing ones with the default request code
    /// and returns `false`; the answer arrives later through the host callback.
    pub fn ensure_permissions<I, S>(&self, context: Option<&ExecutionContext>, permissions: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if context.is_none() {
            self.log.warn("ensurePermissions: activity is null");
            return false;
        }

        let missing: Vec<String> = permissions
            .into_iter()
            .filter(|p| !self.has_permission(context, p.as_ref()))
            .map(|p| p.as_ref().to_string())
            .collect();

        if missing.is_empty() {
            return true;
        }

        self.request_permissions(context, missing, self.default_request_code);
        false
    }
}
