//! Error types for the cloud usage reporter
//!
//! One taxonomy for the whole pipeline: transport, auth, decode, and the
//! domain conditions the resolvers can hit. Errors propagate to the caller
//! unchanged; the pipeline is fail-fast and produces no partial report.

use thiserror::Error;

/// Unified error type for the reporter
#[derive(Error, Debug)]
pub enum Error {
    /// Network, TLS, or timeout failure talking to the array or object store
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success status from an authenticated endpoint. The array API does
    /// not distinguish authentication from authorization failures, so any
    /// non-2xx lands here.
    #[error("authentication failed: endpoint returned {status}")]
    Auth { status: reqwest::StatusCode },

    /// Response body was not valid JSON of the expected shape
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A `server:volume` path did not split into exactly two segments
    #[error("malformed path {path:?}: expected server:volume")]
    MalformedPath { path: String },

    /// No tiering target named "StorageAccount" exists on the cluster
    #[error("no tiering target named \"StorageAccount\" found on this cluster")]
    NoTieringTarget,

    /// Invalid caller configuration, rejected before any network call
    #[error("configuration error: {0}")]
    Config(String),

    /// IO failure writing an export file
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Short taxonomy label for user-facing output
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Transport(_) => "transport",
            Error::Auth { .. } => "auth",
            Error::Decode(_) => "decode",
            Error::MalformedPath { .. } => "malformed-path",
            Error::NoTieringTarget => "no-tiering-target",
            Error::Config(_) => "config",
            Error::Io(_) => "io",
        }
    }
}

/// Result type alias for the reporter
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(Error::NoTieringTarget.kind(), "no-tiering-target");
        assert_eq!(Error::Config("bad selector".into()).kind(), "config");
        assert_eq!(
            Error::MalformedPath {
                path: "no-delimiter".into()
            }
            .kind(),
            "malformed-path"
        );
    }

    #[test]
    fn test_error_display_carries_context() {
        let err = Error::MalformedPath {
            path: "svm_only".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("svm_only"));
        assert!(msg.contains("server:volume"));
    }
}
