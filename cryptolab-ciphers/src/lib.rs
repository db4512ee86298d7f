// src/lib.rs

//! # Cryptolab Ciphers
//!
//! Keyed encrypt/decrypt routines used as producers of test ciphertexts and
//! consumers of recovered keys:
//!
//! - **Classical**: Caesar, Vigenère, Hill 2×2, Playfair, one-time pad
//! - **Toy public key**: textbook RSA (encryption and signatures) and Diffie–Hellman over small integers
//! - **Modern wrappers**: AES-GCM authenticated encryption, raw AES-ECB/CTR,
//!   Ed25519 signatures, BLAKE3/Keccak digests
//!
//! Classical routines work on the cleaned `A`–`Z` alphabet: non-letters are
//! dropped and lowercase is folded before encryption.
//!
//! ## Example Usage
//!
//! ```rust
//! use cryptolab_ciphers::{caesar, hill, vigenere};
//! use cryptolab_core::{HillKey, Mat2};
//!
//! assert_eq!(caesar::encrypt("Hello", 3), "KHOOR");
//! assert_eq!(vigenere::encrypt("ATTACKATDAWN", "LEMON").unwrap(), "LXFOPVEFRNHR");
//!
//! let key = HillKey::new(Mat2::new(3, 3, 2, 5)).unwrap();
//! assert_eq!(hill::encrypt("HI", &key), "TC");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod caesar;
pub mod vigenere;
pub mod hill;
pub mod playfair;
pub mod otp;
pub mod rsa;
pub mod dh;
pub mod aead;
pub mod modes;
pub mod sig;
pub mod hashing;

// Re-export the shared error type
pub use cryptolab_core::{CryptoError, Result};

/// Filler letter for odd-length digraph input
pub const PAD_LETTER: char = 'X';

/// AES-GCM nonce size (96 bits)
pub const AEAD_NONCE_SIZE: usize = 12;

/// AES block size in bytes, also the CTR nonce size
pub const AES_BLOCK_SIZE: usize = 16;
