//! Error types for the note archive
//!
//! Defines the archive error hierarchy: validation failures (rejected
//! before any storage is touched) and transport failures (remote store
//! unreachable or unhappy), which the gateway absorbs via the local
//! fallback cache rather than surfacing to the typing path.

use thiserror::Error;

/// Top-level archive error type
#[derive(Debug, Clone, Error)]
pub enum ArchiveError {
    /// Submission content was empty or whitespace-only
    #[error("note content is required")]
    Validation,

    /// Remote archive failure that could not be recovered locally
    #[error("archive transport failed: {0}")]
    Transport(#[from] TransportError),
}

/// Remote archive transport failures
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// Network-level failure: no response at all
    #[error("remote archive unreachable: {0}")]
    Unreachable(String),

    /// The remote responded with a non-success status
    #[error("remote archive returned status {0}")]
    Status(u16),

    /// The remote responded, but the payload did not parse
    #[error("malformed archive response: {0}")]
    MalformedResponse(String),
}
