//! Security Model Implementation for desktop hosts

use bridge_traits::{
    error::Result,
    permissions::{
        ExecutionContext, GrantState, PermissionRequest, PermissionResult,
        PermissionResultListener, SecurityModel,
    },
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// Desktop security model.
///
/// Desktop operating systems have no runtime permission prompts, so every
/// permission reports [`GrantState::Granted`] unless overridden with
/// [`with_grant`](Self::with_grant). Requests are recorded and, when a
/// listener is attached, answered immediately with the current grant states.
#[derive(Default)]
pub struct DesktopSecurityModel {
    overrides: HashMap<String, GrantState>,
    listener: Option<Arc<dyn PermissionResultListener>>,
    requests: Mutex<Vec<PermissionRequest>>,
}

impl DesktopSecurityModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `state` for `permission` instead of `Granted`
    pub fn with_grant(mut self, permission: impl Into<String>, state: GrantState) -> Self {
        self.overrides.insert(permission.into(), state);
        self
    }

    /// Answer every request through `listener`
    pub fn with_result_listener(mut self, listener: Arc<dyn PermissionResultListener>) -> Self {
        self.listener = Some(listener);
        self
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> Vec<PermissionRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn grant_state(&self, permission: &str) -> GrantState {
        self.overrides
            .get(permission)
            .copied()
            .unwrap_or(GrantState::Granted)
    }
}

impl SecurityModel for DesktopSecurityModel {
    fn check_permission(&self, _context: &ExecutionContext, permission: &str) -> GrantState {
        self.grant_state(permission)
    }

    fn request_permissions(&self, request: PermissionRequest) -> Result<()> {
        debug!(
            context = %request.context,
            request_code = request.request_code,
            count = request.permissions.len(),
            "Permission request received"
        );

        if let Some(listener) = &self.listener {
            let grants = request
                .permissions
                .iter()
                .map(|p| self.grant_state(p))
                .collect();
            listener.on_permission_result(PermissionResult {
                request_code: request.request_code,
                permissions: request.permissions.clone(),
                grants,
            });
        }

        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);
        Ok(())
    }
}
