//! Runtime Permission Abstractions
//!
//! Models the host security model: a per-context grant query and an
//! asynchronous, fire-and-forget request flow whose answer comes back through
//! a host callback.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{error::Result, platform::PlatformSendSync};

/// Opaque handle to the caller's host execution environment
///
/// On Android this stands in for the current `Activity`; on desktop it is just
/// a label. The bridge never inspects it beyond handing it back to the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExecutionContext(String);

impl ExecutionContext {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Host classification of a single permission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrantState {
    Granted,
    Denied,
    /// The user has not been asked yet
    NotDetermined,
}

impl GrantState {
    pub fn is_granted(&self) -> bool {
        matches!(self, GrantState::Granted)
    }
}

/// Outgoing permission request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionRequest {
    pub context: ExecutionContext,
    /// Permission names in caller order
    pub permissions: Vec<String>,
    /// Passed through untouched so the host can correlate its callback
    pub request_code: i32,
}

impl PermissionRequest {
    pub fn new(
        context: ExecutionContext,
        permissions: impl IntoIterator<Item = impl Into<String>>,
        request_code: i32,
    ) -> Self {
        Self {
            context,
            permissions: permissions.into_iter().map(Into::into).collect(),
            request_code,
        }
    }
}

/// Answer delivered by the host after the user responds to a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionResult {
    pub request_code: i32,
    pub permissions: Vec<String>,
    /// One entry per permission, same order
    pub grants: Vec<GrantState>,
}

impl PermissionResult {
    /// True when every requested permission came back granted.
    ///
    /// An empty result (request cancelled by the host) is not a grant.
    pub fn all_granted(&self) -> bool {
        !self.grants.is_empty() && self.grants.iter().all(GrantState::is_granted)
    }

    pub fn grant_for(&self, permission: &str) -> Option<GrantState> {
        self.permissions
            .iter()
            .position(|p| p == permission)
            .and_then(|idx| self.grants.get(idx).copied())
    }
}

/// Host security model trait
///
/// - **Android**: `ContextCompat.checkSelfPermission` / `ActivityCompat.requestPermissions`
/// - **Desktop**: no OS permission model; adapters grant everything
///
/// # Example
///
/// ```ignore
/// use bridge_traits::permissions::{ExecutionContext, SecurityModel};
///
/// fn can_record(model: &dyn SecurityModel, ctx: &ExecutionContext) -> bool {
///     model.check_permission(ctx, "android.permission.RECORD_AUDIO").is_granted()
/// }
/// ```
pub trait SecurityModel: PlatformSendSync {
    /// Current grant state of `permission` under `context`
    fn check_permission(&self, context: &ExecutionContext, permission: &str) -> GrantState;

    /// Start the host's asynchronous request flow
    ///
    /// Must return without waiting for the user. The outcome, if any, is
    /// delivered to a [`PermissionResultListener`] by the host.
    fn request_permissions(&self, request: PermissionRequest) -> Result<()>;
}

/// Receives asynchronous permission results from the host
pub trait PermissionResultListener: PlatformSendSync {
    fn on_permission_result(&self, result: PermissionResult);
}
