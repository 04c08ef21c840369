//! Error types for inline editing.
//!
//! Almost nothing in the edit lifecycle is an error: unknown markers, missing
//! handlers, requests in the wrong state and rejected saves are all ordinary
//! outcomes. What remains are stale element handles and bad configuration.

use std::path::PathBuf;

use inline_edit_core::DocumentError;

/// Result type alias for lifecycle operations.
pub type Result<T> = std::result::Result<T, InlineEditError>;

/// Errors from the edit lifecycle.
#[derive(Debug, thiserror::Error)]
pub enum InlineEditError {
    /// The document rejected an operation, usually because an element the
    /// models refer to was removed by the host.
    #[error("document error: {0}")]
    Document(#[from] DocumentError),
}

/// Errors loading an [`InlineEditConfig`](crate::InlineEditConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse or schema error.
    #[error("invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON parse or schema error.
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("failed to read configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A type marker that names no supported column type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported column type: {0:?}")]
pub struct UnsupportedColumnType(pub String);
