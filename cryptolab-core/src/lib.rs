// src/lib.rs

//! # Cryptolab Core
//!
//! Shared arithmetic and statistics for the cryptolab toolkit.
//!
//! Everything the cipher and cryptanalysis crates build on lives here:
//!
//! - **Alphabet**: case-folding to A–Z and the letter/index bijection
//! - **Arithmetic**: extended Euclid, modular inverse, modular exponentiation
//! - **Matrices**: 2×2 matrices over Z/26 (determinant, inverse, products)
//! - **Keys**: Caesar shifts, periodic Vigenère keys, invertible Hill keys
//! - **Frequency**: the English reference profile and the chi-square scorer
//!
//! ## Example Usage
//!
//! ```rust
//! use cryptolab_core::{arith, frequency};
//!
//! let (g, x, y) = arith::egcd(99, 78).unwrap();
//! assert_eq!(g, 3);
//! assert_eq!(99 * x + 78 * y, 3);
//!
//! assert_eq!(arith::modinv(7, 26).unwrap(), 15);
//! assert!(frequency::chi_square("", &frequency::ENGLISH).is_infinite());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod errors;
pub mod alphabet;
pub mod arith;
pub mod matrix;
pub mod keys;
pub mod frequency;

// Re-export commonly used types
pub use crate::errors::{CryptoError, Result};
pub use crate::frequency::{FrequencyProfile, ENGLISH};
pub use crate::keys::{HillKey, PeriodicKey, ShiftKey};
pub use crate::matrix::Mat2;

/// Number of letters in the working alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Working modulus for every classical cipher in the toolkit
pub const MODULUS: i64 = 26;
