// src/errors.rs

//! Error types for cipher and cryptanalysis operations.
//!
//! Every failure is raised synchronously at the point of detection and
//! nothing is retried: an attack either produces a key or reports why not.

use thiserror::Error;

/// Main error type for cryptolab operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Malformed or empty input after cleaning
    #[error("Validation error: {0}")]
    Validation(String),

    /// A key is unusable in the working modulus
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// A requested modular inverse does not exist
    #[error("{value} has no inverse modulo {modulus} (gcd={gcd})")]
    NotInvertible {
        /// Value whose inverse was requested
        value: i64,
        /// Modulus of the ring
        modulus: i64,
        /// gcd(value, modulus), never 1
        gcd: i64,
    },

    /// Modulus is zero or negative
    #[error("Invalid modulus: {0} (must be positive)")]
    InvalidModulus(i64),

    /// Negative exponents have no meaning without an inverse
    #[error("Negative exponent not supported: {0}")]
    NegativeExponent(i64),

    /// An exact result does not fit the integer type
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    /// AEAD encryption failed
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// AEAD decryption or tag verification failed
    #[error("Decryption error: {0}")]
    Decryption(String),
}

/// Result type alias for cryptolab operations
pub type Result<T> = std::result::Result<T, CryptoError>;
