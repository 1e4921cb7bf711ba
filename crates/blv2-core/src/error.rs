//! Error types for the launcher's shell-integration layer.
//!
//! The one variant callers are expected to handle specially is
//! [`LauncherError::NotFound`]: idempotent unregistration and registration
//! queries swallow it instead of surfacing it.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for shortcut and file-association operations.
#[derive(Debug, Error)]
pub enum LauncherError {
    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Permission denied: {resource}")]
    PermissionDenied { resource: String },

    // Registry errors other than missing keys/values
    #[error("Registry error: {message}")]
    Registry {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    // Shortcut (.lnk) creation errors
    #[error("Shortcut error: {message}")]
    Shortcut { message: String },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    // Generic errors
    #[error("{0}")]
    Other(String),
}

/// Result type alias for launcher operations.
pub type Result<T> = std::result::Result<T, LauncherError>;

impl From<std::io::Error> for LauncherError {
    fn from(err: std::io::Error) -> Self {
        LauncherError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl LauncherError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        LauncherError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Classify a registry API failure for the key at `path`.
    ///
    /// Missing keys and access failures get their own variants so callers
    /// can tell an absent record from a real fault.
    pub fn registry(err: std::io::Error, path: &str) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => LauncherError::NotFound {
                resource: path.to_string(),
            },
            std::io::ErrorKind::PermissionDenied => LauncherError::PermissionDenied {
                resource: path.to_string(),
            },
            _ => LauncherError::Registry {
                message: format!("{}: {}", path, err),
                source: Some(err),
            },
        }
    }

    /// Check if this error means the target simply wasn't there.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LauncherError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LauncherError::NotFound {
            resource: r"Software\Classes\blenderlauncherv2.blend".into(),
        };
        assert_eq!(
            err.to_string(),
            r"Not found: Software\Classes\blenderlauncherv2.blend"
        );
    }

    #[test]
    fn test_registry_classification() {
        let missing = std::io::Error::new(std::io::ErrorKind::NotFound, "no key");
        assert!(LauncherError::registry(missing, "some\\key").is_not_found());

        let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "locked");
        assert!(matches!(
            LauncherError::registry(denied, "some\\key"),
            LauncherError::PermissionDenied { .. }
        ));

        let odd = std::io::Error::other("wedged");
        assert!(matches!(
            LauncherError::registry(odd, "some\\key"),
            LauncherError::Registry { .. }
        ));
    }

    #[test]
    fn test_io_errors_are_not_not_found() {
        let err: LauncherError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(!err.is_not_found());
    }
}
