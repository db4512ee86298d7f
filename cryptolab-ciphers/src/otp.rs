// src/otp.rs

//! One-time pad over bytes.
//!
//! Perfectly secret when the pad is random, as long as the message, and
//! never reused. The two-time-pad attack in `cryptolab-analysis` shows
//! what happens when the last rule is broken.

use cryptolab_core::{CryptoError, Result};
use rand::Rng;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Pad material, zeroized on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Pad {
    bytes: Vec<u8>,
}

impl std::fmt::Debug for Pad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pad([REDACTED; {}])", self.bytes.len())
    }
}

impl Pad {
    /// Wraps existing pad bytes
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Draws `len` random bytes from the thread RNG
    pub fn random(len: usize) -> Self {
        let mut bytes = vec![0u8; len];
        rand::thread_rng().fill(&mut bytes[..]);
        Self { bytes }
    }

    /// Pad length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True for a zero-length pad
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Raw pad bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// XOR of two equal-length byte strings
///
/// # Errors
/// `Validation` when the lengths differ
pub fn xor_bytes(a: &[u8], b: &[u8]) -> Result<Vec<u8>> {
    if a.len() != b.len() {
        return Err(CryptoError::Validation(format!(
            "xor_bytes requires equal lengths: {} != {}",
            a.len(),
            b.len()
        )));
    }
    Ok(a.iter().zip(b).map(|(x, y)| x ^ y).collect())
}

/// `ciphertext = plaintext ⊕ pad`
///
/// # Errors
/// `Validation` when the pad length differs from the message length
///
/// # Example
/// ```
/// use cryptolab_ciphers::otp::{decrypt, encrypt, Pad};
///
/// let msg = b"THIS IS A SECRET";
/// let pad = Pad::random(msg.len());
/// let c = encrypt(msg, &pad).unwrap();
/// assert_eq!(decrypt(&c, &pad).unwrap(), msg);
/// ```
pub fn encrypt(plaintext: &[u8], pad: &Pad) -> Result<Vec<u8>> {
    check_length(plaintext, pad)?;
    xor_bytes(plaintext, pad.as_bytes())
}

/// `plaintext = ciphertext ⊕ pad`
pub fn decrypt(ciphertext: &[u8], pad: &Pad) -> Result<Vec<u8>> {
    check_length(ciphertext, pad)?;
    xor_bytes(ciphertext, pad.as_bytes())
}

fn check_length(message: &[u8], pad: &Pad) -> Result<()> {
    if message.len() != pad.len() {
        return Err(CryptoError::Validation(
            "OTP key length must equal plaintext length".to_string(),
        ));
    }
    Ok(())
}
