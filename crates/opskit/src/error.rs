//! Error types for the core helpers.

use thiserror::Error;

/// Result type for fallible opskit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the core helpers.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid input or argument
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Base64 decoding failed
    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;

    #[test]
    fn test_invalid_input_displays() {
        let err = Error::InvalidInput("bad charset".to_string());
        assert_eq!(err.to_string(), "Invalid input: bad charset");
    }

    #[test]
    fn test_base64_error_wraps() {
        let decode_err = base64::engine::general_purpose::STANDARD
            .decode("!!!")
            .unwrap_err();
        let err = Error::from(decode_err);
        assert!(err.to_string().contains("Base64 decode error"));
    }
}
