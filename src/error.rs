//! Error types for dictum
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using DictError
pub type Result<T> = std::result::Result<T, DictError>;

/// Unified error type for dictum operations
#[derive(Debug, Error)]
pub enum DictError {
    // -------------------------------------------------------------------------
    // Connection Errors
    // -------------------------------------------------------------------------
    /// Host resolution, socket open or handshake failure.
    ///
    /// Only produced while establishing a connection; a connection that
    /// failed to construct is never usable.
    #[error("connection error: {0}")]
    Connection(String),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    /// Unexpected status code, or a stream failure in the middle of an
    /// exchange. Fatal to the in-progress call; the connection should be
    /// treated as untrustworthy afterwards.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// A reply line that does not parse as a DICT status line (missing or
    /// malformed 3-digit code).
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
