//! Error types for relcheck operations.
//!
//! This module defines [`RelcheckError`], the error type used at the crate
//! boundary, and a [`Result`] alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Feed round trips have their own taxonomy ([`crate::feed::FeedError`]);
//!   those errors never cross the checker boundary, which fails open.
//! - `RelcheckError` covers what CAN fail for a caller: bad input and
//!   local IO around the cache.
//! - Use `anyhow::Error` (via `RelcheckError::Other`) for unexpected errors.

use thiserror::Error;

/// Core error type for relcheck operations.
#[derive(Debug, Error)]
pub enum RelcheckError {
    /// Repository identifier is not of the form `owner/repo`.
    #[error("Invalid repository reference '{input}': expected owner/repo")]
    InvalidRepoRef { input: String },

    /// No user cache directory could be resolved on this platform.
    #[error("No cache directory available")]
    NoCacheDir,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for relcheck operations.
pub type Result<T> = std::result::Result<T, RelcheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_repo_ref_displays_input() {
        let err = RelcheckError::InvalidRepoRef {
            input: "not-a-repo".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("not-a-repo"));
        assert!(msg.contains("owner/repo"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: RelcheckError = io_err.into();
        assert!(matches!(err, RelcheckError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts() {
        let err: RelcheckError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, RelcheckError::Other(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(RelcheckError::NoCacheDir)
        }
        assert!(returns_error().is_err());
    }
}
