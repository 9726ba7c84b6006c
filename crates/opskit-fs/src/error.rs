//! Filesystem helper error types.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for filesystem helper operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the filesystem helpers.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error (permission denied, disk full, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Directory traversal error
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// File not found
    #[error("{0} is not found")]
    NotFound(PathBuf),

    /// JSON document is a scalar where an object or array is required
    #[error("JSON string is not an object")]
    NotAnObject,

    /// Path segment not usable as an identifier
    #[error("{segment} does not match 'a-z0-9_-' in {path}")]
    InvalidSegment { segment: String, path: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_path() {
        let err = Error::NotFound(PathBuf::from("/tmp/missing.json"));
        assert_eq!(err.to_string(), "/tmp/missing.json is not found");
    }

    #[test]
    fn test_io_error_wraps() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::from(io_err);
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_json_error_wraps() {
        let json_err = serde_json::from_str::<String>("not json").unwrap_err();
        let err = Error::from(json_err);
        assert!(err.to_string().contains("JSON error"));
    }

    #[test]
    fn test_invalid_segment_names_both() {
        let err = Error::InvalidSegment {
            segment: "9bad".to_string(),
            path: "a/9bad/c".to_string(),
        };
        assert_eq!(err.to_string(), "9bad does not match 'a-z0-9_-' in a/9bad/c");
    }
}
