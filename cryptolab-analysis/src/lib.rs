// src/lib.rs

//! # Cryptolab Analysis
//!
//! Key recovery for historically broken ciphers.
//!
//! - **Caesar**: exhaustive 26-shift search scored by chi-square
//! - **Vigenère**: Kasiski examination plus a short-period sweep, per-column
//!   Caesar solving, whole-text re-scoring and key canonicalization
//! - **Hill 2×2**: exact known-plaintext solve `K = C·P⁻¹ (mod 26)`
//! - **Misuse**: two-time-pad crib dragging, AES-CTR nonce reuse and ECB
//!   repeated-block detection
//! - **Forgery**: textbook RSA multiplicative forgery and a random-guess
//!   attempt against Ed25519
//!
//! Statistical attacks break ties deterministically: among equal scores the
//! first candidate in ascending order (smallest shift, then shortest period)
//! wins.
//!
//! ## Example Usage
//!
//! ```rust
//! use cryptolab_analysis::{crack_caesar, recover_hill_key};
//! use cryptolab_core::Mat2;
//!
//! let (shift, plaintext) = crack_caesar("WKHTXLFNEURZQIRAMXPSVRYHUWKHODCBGRJ").unwrap();
//! assert_eq!(shift.value(), 3);
//! assert_eq!(plaintext, "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG");
//!
//! let k = recover_hill_key("HE", "LP", "HI", "AT").unwrap();
//! assert!(k.congruent(&Mat2::new(3, 3, 2, 5)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod caesar;
pub mod vigenere;
pub mod hill;
pub mod two_time_pad;
pub mod ecb;
pub mod ctr_nonce_reuse;
pub mod ufcma;

// Re-export the attack entry points
pub use crate::caesar::crack_caesar;
pub use crate::hill::recover_hill_key;
pub use crate::vigenere::{compress_period, crack_vigenere, kasiski_lengths};
pub use cryptolab_core::{CryptoError, Result};

/// Longest period always tried by the Vigenère sweep
pub const MAX_BRUTE_FORCE_PERIOD: usize = 12;

/// Shortest repeated n-gram considered by Kasiski examination
pub const KASISKI_MIN_NGRAM: usize = 3;

/// Longest repeated n-gram considered by Kasiski examination
pub const KASISKI_MAX_NGRAM: usize = 5;
