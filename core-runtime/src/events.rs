//! # Permission Result Events
//!
//! Carries asynchronous permission answers from the host back to scripting
//! callers using `tokio::sync::broadcast`.
//!
//! ## Overview
//!
//! `PermissionGate::request_permissions` is fire-and-forget: the host shows its
//! dialog and answers later through its own callback. Hosts that want to
//! surface that answer post a [`PermissionResult`] to a [`PermissionEvents`]
//! bus (directly or through the [`PermissionResultListener`] impl); any number
//! of subscribers receive it.
//!
//! ```text
//! ┌──────────────┐  on_permission_result  ┌──────────────────┐  subscribe  ┌────────────┐
//! │ Host callback├───────────────────────>│ PermissionEvents ├────────────>│ Subscriber │
//! └──────────────┘                        └──────────────────┘             └────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use bridge_traits::permissions::{GrantState, PermissionResult};
//! use core_runtime::events::PermissionEvents;
//!
//! let events = PermissionEvents::new(16);
//! let mut rx = events.subscribe();
//!
//! events
//!     .emit(PermissionResult {
//!         request_code: 1001,
//!         permissions: vec!["android.permission.CAMERA".into()],
//!         grants: vec![GrantState::Granted],
//!     })
//!     .ok();
//!
//! assert!(rx.try_recv().unwrap().all_granted());
//! ```
//!
//! ## Error Handling
//!
//! Slow subscribers receive `RecvError::Lagged(n)` for the `n` results they
//! missed. Emitting with no subscribers returns `SendError`; the listener impl
//! treats that as "nobody cared" and only logs it at debug level.

use bridge_traits::permissions::{PermissionResult, PermissionResultListener};
use std::fmt;
use tokio::sync::broadcast;
use tracing::debug;

// Re-export commonly used types
pub use tokio::sync::broadcast::error::{RecvError, SendError};
pub use tokio::sync::broadcast::Receiver;

/// Default buffer size for the permission result channel.
pub const DEFAULT_EVENT_BUFFER_SIZE: usize = 32;

/// Broadcast bus for permission results.
#[derive(Clone)]
pub struct PermissionEvents {
    sender: broadcast::Sender<PermissionResult>,
}

impl PermissionEvents {
    /// Creates a bus buffering up to `capacity` results per subscriber.
    ///
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publishes a result to all subscribers.
    ///
    /// Returns the number of subscribers that received it, or an error if
    /// there are none.
    pub fn emit(&self, result: PermissionResult) -> Result<usize, SendError<PermissionResult>> {
        self.sender.send(result)
    }

    /// Creates a receiver for all future results. Past results are not replayed.
    pub fn subscribe(&self) -> Receiver<PermissionResult> {
        self.sender.subscribe()
    }

    /// Subscribes to results for a single request code only.
    pub fn subscribe_request(&self, request_code: i32) -> PermissionResultStream {
        PermissionResultStream::new(self.subscribe()).for_request(request_code)
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for PermissionEvents {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_BUFFER_SIZE)
    }
}

impl fmt::Debug for PermissionEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PermissionEvents")
            .field("subscriber_count", &self.subscriber_count())
            .finish()
    }
}

impl PermissionResultListener for PermissionEvents {
    fn on_permission_result(&self, result: PermissionResult) {
        let request_code = result.request_code;
        if self.emit(result).is_err() {
            debug!(request_code, "Permission result dropped; no subscribers");
        }
    }
}

/// Receiver wrapper that optionally keeps only one request code.
pub struct PermissionResultStream {
    receiver: Receiver<PermissionResult>,
    request_code: Option<i32>,
}

impl PermissionResultStream {
    pub fn new(receiver: Receiver<PermissionResult>) -> Self {
        Self {
            receiver,
            request_code: None,
        }
    }

    /// Only yield results whose request code matches.
    pub fn for_request(mut self, request_code: i32) -> Self {
        self.request_code = Some(request_code);
        self
    }

    fn matches(&self, result: &PermissionResult) -> bool {
        self.request_code
            .map_or(true, |code| code == result.request_code)
    }

    /// Receives the next matching result.
    ///
    /// # Errors
    ///
    /// Returns `RecvError::Lagged(n)` if the subscriber fell behind by `n` results.
    /// Returns `RecvError::Closed` if every sender has been dropped.
    pub async fn recv(&mut self) -> Result<PermissionResult, RecvError> {
        loop {
            let result = self.receiver.recv().await?;
            if self.matches(&result) {
                return Ok(result);
            }
        }
    }

    /// Attempts to receive a matching result without waiting.
    ///
    /// Returns `None` if nothing matching is currently buffered.
    pub fn try_recv(&mut self) -> Option<Result<PermissionResult, RecvError>> {
        loop {
            match self.receiver.try_recv() {
                Ok(result) => {
                    if self.matches(&result) {
                        return Some(Ok(result));
                    }
                }
                Err(broadcast::error::TryRecvError::Empty) => return None,
                Err(broadcast::error::TryRecvError::Lagged(n)) => {
                    return Some(Err(RecvError::Lagged(n)))
                }
                Err(broadcast::error::TryRecvError::Closed) => return Some(Err(RecvError::Closed)),
            }
        }
    }
}

impl fmt::Debug for PermissionResultStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PermissionResultStream")
            .field("request_code", &self.request_code)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::permissions::GrantState;

    fn result(code: i32, grant: GrantState) -> PermissionResult {
        PermissionResult {
            request_code: code,
            permissions: vec!["android.permission.CAMERA".to_string()],
            grants: vec![grant],
        }
    }

    #[tokio::test]
    async fn test_emit_without_subscribers() {
        let events = PermissionEvents::new(4);

        assert_eq!(events.subscriber_count(), 0);
        assert!(events.emit(result(1, GrantState::Granted)).is_err());
    }

    #[tokio::test]
    async fn test_zero_capacity_still_delivers() {
        let events = PermissionEvents::new(0);
        let mut rx = events.subscribe();

        assert_eq!(events.emit(result(3, GrantState::Granted)).unwrap(), 1);
        assert_eq!(rx.recv().await.unwrap().request_code, 3);
    }

    #[tokio::test]
    async fn test_all_subscribers_receive_result() {
        let events = PermissionEvents::default();
        let mut rx1 = events.subscribe();
        let mut rx2 = events.subscribe();

        assert_eq!(events.emit(result(1001, GrantState::Denied)).unwrap(), 2);

        let a = rx1.recv().await.unwrap();
        let b = rx2.recv().await.unwrap();
        assert_eq!(a, b);
        assert_eq!(a.grant_for("android.permission.CAMERA"), Some(GrantState::Denied));
    }

    #[tokio::test]
    async fn test_listener_impl_forwards() {
        let events = PermissionEvents::default();
        let mut rx = events.subscribe();
        let listener: &dyn PermissionResultListener = &events;

        listener.on_permission_result(result(5, GrantState::Granted));

        assert_eq!(rx.recv().await.unwrap().request_code, 5);
    }

    #[tokio::test]
    async fn test_listener_without_subscribers_does_not_panic() {
        let events = PermissionEvents::default();
        events.on_permission_result(result(5, GrantState::Granted));
    }

    #[tokio::test]
    async fn test_request_filter() {
        let events = PermissionEvents::default();
        let mut stream = events.subscribe_request(42);

        events.emit(result(1, GrantState::Granted)).unwrap();
        events.emit(result(42, GrantState::Denied)).unwrap();

        let received = stream.recv().await.unwrap();
        assert_eq!(received.request_code, 42);
        assert!(stream.try_recv().is_none());
    }

    #[tokio::test]
    async fn test_lagged_subscriber() {
        let events = PermissionEvents::new(2);
        let mut stream = PermissionResultStream::new(events.subscribe());

        for code in 0..5 {
            events.emit(result(code, GrantState::Granted)).unwrap();
        }

        assert!(matches!(stream.try_recv(), Some(Err(RecvError::Lagged(_)))));
    }

    #[test]
    fn test_result_serialization() {
        let original = result(1001, GrantState::NotDetermined);
        let json = serde_json::to_string(&original).unwrap();
        let back: PermissionResult = serde_json::from_str(&json).unwrap();

        assert_eq!(back, original);
    }
}
