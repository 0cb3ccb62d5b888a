//! Errors reported by host capability adapters.

use thiserror::Error;

/// Failure reported by a capability adapter.
///
/// The bridge facade logs these; script callers only ever see `false` or an
/// empty string.
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Bridge capability not available: {0}")]
    NotAvailable(String),

    #[error("Host rejected request: {0}")]
    Rejected(String),

    #[error("Bridge operation failed: {0}")]
    OperationFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
