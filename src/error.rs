//! Error types for host-facing operations.
//!
//! Public `Utils`/`Storage` operations never return these; they log them and
//! fall back. Constructors and the `try_*` storage helpers hand them back.

// =============================================================================
// STORAGE
// =============================================================================

/// Errors produced by key-value stores and the JSON layer above them.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The value could not be encoded as JSON.
    #[error("encode failed: {0}")]
    Encode(#[source] serde_json::Error),

    /// The stored text is not valid JSON for the requested type.
    #[error("decode failed for key {key}: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Writing would push the store past its byte quota.
    #[error("quota exceeded: {used} of {quota} bytes")]
    QuotaExceeded { used: usize, quota: usize },

    /// The host store rejected the operation.
    #[error("store backend error: {0}")]
    Backend(String),

    /// No store is available on this host.
    #[error("store unavailable")]
    Unavailable,

    /// Reading or writing the backing file failed.
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// PLATFORM
// =============================================================================

/// Errors produced by a rendering surface.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    /// The capability is missing on this host (no window, no document, ...).
    #[error("{0} unavailable")]
    Unavailable(&'static str),

    /// A DOM call failed.
    #[error("dom operation failed: {0}")]
    Dom(String),

    /// The clipboard write was rejected.
    #[error("clipboard write failed: {0}")]
    Clipboard(String),
}

// =============================================================================
// INIT
// =============================================================================

/// Errors from binding a kit to the host.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
