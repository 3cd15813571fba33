//! Core error types for `bringctl`.

use thiserror::Error;

/// Error type for all remote operations.
///
/// Two kinds suffice: the auth endpoint rejecting a login, and everything
/// else. Transport failures and non-success statuses are folded into the
/// kind matching the call that produced them; no finer classification is
/// drawn and nothing is retried.
#[derive(Debug, Error)]
pub enum BringError {
    /// The auth endpoint rejected the credentials, or the auth round trip
    /// failed outright.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// Any other endpoint returned a non-success status, the transport
    /// failed, or the response body could not be parsed.
    #[error("remote call failed: {0}")]
    Remote(String),
}
