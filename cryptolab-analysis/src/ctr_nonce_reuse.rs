// src/ctr_nonce_reuse.rs

//! AES-CTR under a reused `(key, nonce)`.
//!
//! CTR encrypts by XOR with a keystream that depends only on key and
//! nonce. Reusing both gives the same keystream, which is the two-time pad
//! all over again: `c1 ⊕ c2 = m1 ⊕ m2`, and one known plaintext decrypts
//! every other message up to its length.

use cryptolab_ciphers::otp::xor_bytes;
use cryptolab_core::{CryptoError, Result};
use tracing::debug;

/// `m1 ⊕ m2` recovered from two equal-length ciphertexts under one keystream
///
/// # Errors
/// `Validation` when the ciphertext lengths differ
pub fn xor_plaintexts_from_reuse(c1: &[u8], c2: &[u8]) -> Result<Vec<u8>> {
    xor_bytes(c1, c2)
}

/// Decrypts `c2` using the known plaintext `m1` of `c1`
///
/// The keystream `c1 ⊕ m1` covers the first `m1.len()` bytes; any longer
/// tail of `c2` stays unrecovered and is not returned.
///
/// # Errors
/// `Validation` when `m1` and `c1` differ in length
///
/// # Example
/// ```
/// use cryptolab_analysis::ctr_nonce_reuse::recover_with_known_plaintext;
/// use cryptolab_ciphers::modes::ctr_encrypt;
///
/// let (key, nonce) = ([1u8; 16], [2u8; 16]);
/// let c1 = ctr_encrypt(&key, &nonce, b"PUBLIC NOTICE").unwrap();
/// let c2 = ctr_encrypt(&key, &nonce, b"SECRET ORDERS").unwrap();
/// let m2 = recover_with_known_plaintext(&c1, b"PUBLIC NOTICE", &c2).unwrap();
/// assert_eq!(m2, b"SECRET ORDERS");
/// ```
pub fn recover_with_known_plaintext(c1: &[u8], m1: &[u8], c2: &[u8]) -> Result<Vec<u8>> {
    if c1.len() != m1.len() {
        return Err(CryptoError::Validation(format!(
            "known plaintext is {} bytes but its ciphertext is {}",
            m1.len(),
            c1.len()
        )));
    }
    let keystream = xor_bytes(c1, m1)?;
    let covered = keystream.len().min(c2.len());
    debug!(covered, total = c2.len(), "ctr keystream reused");
    xor_bytes(&c2[..covered], &keystream[..covered])
}
