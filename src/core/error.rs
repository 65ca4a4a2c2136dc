use std::path::PathBuf;
use thiserror::Error;

/// Central error type for the localization engine.
/// Every module returns `Result<T, LocaleError>`.
#[derive(Debug, Error)]
pub enum LocaleError {
    // ── Arguments ───────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ── Resolution ──────────────────────────────────────
    #[error("{kind} not found: {identifier}")]
    NotFound {
        kind: &'static str,
        identifier: String,
    },

    #[error("Unable to query {0}")]
    QueryFailed(String),

    // ── Version ─────────────────────────────────────────
    #[error("Unsupported server version: {0}")]
    UnsupportedVersion(String),

    // ── IO ──────────────────────────────────────────────
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // ── JSON ────────────────────────────────────────────
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ── Archive ─────────────────────────────────────────
    #[error("Zip read error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Invalid resource pattern: {0}")]
    Pattern(#[from] regex::Error),

    // ── Dispatch ────────────────────────────────────────
    #[error("Dispatch to {player} failed: {reason}")]
    Dispatch { player: String, reason: String },

    // ── Generic ─────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type LocaleResult<T> = Result<T, LocaleError>;

impl LocaleError {
    pub fn not_found(kind: &'static str, identifier: impl Into<String>) -> Self {
        LocaleError::NotFound {
            kind,
            identifier: identifier.into(),
        }
    }

    /// Whether this error came out of key resolution rather than IO or setup.
    pub fn is_resolution_failure(&self) -> bool {
        matches!(
            self,
            LocaleError::InvalidArgument(_)
                | LocaleError::NotFound { .. }
                | LocaleError::QueryFailed(_)
        )
    }
}

impl From<std::io::Error> for LocaleError {
    fn from(source: std::io::Error) -> Self {
        LocaleError::Io {
            path: PathBuf::new(),
            source,
        }
    }
}
