// src/errors.rs

//! Error types for the demo.

use cryptolab_core::CryptoError;
use thiserror::Error;

/// Main error type for the demo
#[derive(Debug, Error)]
pub enum DemoError {
    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Cipher or attack error
    #[error("Crypto error: {0}")]
    Crypto(#[from] CryptoError),
}

/// Result type alias for demo operations
pub type Result<T> = std::result::Result<T, DemoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_crypto_error() {
        let err: DemoError = CryptoError::Validation("empty".to_string()).into();
        assert_eq!(format!("{}", err), "Crypto error: Validation error: empty");
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: DemoError = io.into();
        assert!(matches!(err, DemoError::Io(_)));
    }
}
