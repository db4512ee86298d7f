// src/aead.rs

//! AES-GCM authenticated encryption.
//!
//! Thin wrapper used by the demo to contrast malleable classical ciphers
//! with an AEAD that rejects any tampering. Keys are 16 bytes (AES-128) or
//! 32 bytes (AES-256); nonces are random and returned to the caller.

use crate::AEAD_NONCE_SIZE;
use aes_gcm::{
    aead::{Aead, KeyInit, Payload},
    Aes128Gcm, Aes256Gcm,
};
use cryptolab_core::{CryptoError, Result};
use rand::Rng;

/// Encrypts `plaintext` under a fresh random nonce
///
/// # Arguments
/// * `key` - 16- or 32-byte AES key
/// * `plaintext` - Data to encrypt
/// * `aad` - Associated data (authenticated, not encrypted)
///
/// # Returns
/// `(nonce, ciphertext || tag)`
///
/// # Example
/// ```
/// use cryptolab_ciphers::aead::{decrypt, encrypt, generate_key};
///
/// let key = generate_key(32).unwrap();
/// let (nonce, ct) = encrypt(&key, b"authenticated encryption", b"context").unwrap();
/// assert_eq!(decrypt(&key, &nonce, &ct, b"context").unwrap(), b"authenticated encryption");
/// ```
pub fn encrypt(key: &[u8], plaintext: &[u8], aad: &[u8]) -> Result<([u8; AEAD_NONCE_SIZE], Vec<u8>)> {
    let nonce: [u8; AEAD_NONCE_SIZE] = rand::thread_rng().gen();
    let ciphertext = encrypt_with_nonce(key, &nonce, plaintext, aad)?;
    Ok((nonce, ciphertext))
}

/// Encrypts with a caller-chosen nonce
///
/// Reusing a nonce under the same key destroys both confidentiality and
/// integrity; this exists for deterministic tests and for demonstrating
/// exactly that.
pub fn encrypt_with_nonce(
    key: &[u8],
    nonce: &[u8; AEAD_NONCE_SIZE],
    plaintext: &[u8],
    aad: &[u8],
) -> Result<Vec<u8>> {
    let payload = Payload { msg: plaintext, aad };
    match key.len() {
        16 => seal::<Aes128Gcm>(key, nonce, payload),
        32 => seal::<Aes256Gcm>(key, nonce, payload),
        n => Err(CryptoError::Encryption(format!(
            "Invalid key size: expected 16 or 32, got {}",
            n
        ))),
    }
}

/// Decrypts and verifies `ciphertext || tag`
///
/// # Errors
/// `Decryption` on a wrong key size, wrong nonce size, or failed tag check
pub fn decrypt(key: &[u8], nonce: &[u8], ciphertext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
    if nonce.len() != AEAD_NONCE_SIZE {
        return Err(CryptoError::Decryption(format!(
            "AES-GCM nonce must be {} bytes, got {}",
            AEAD_NONCE_SIZE,
            nonce.len()
        )));
    }
    let payload = Payload { msg: ciphertext, aad };
    match key.len() {
        16 => open::<Aes128Gcm>(key, nonce, payload),
        32 => open::<Aes256Gcm>(key, nonce, payload),
        n => Err(CryptoError::Decryption(format!(
            "Invalid key size: expected 16 or 32, got {}",
            n
        ))),
    }
}

/// Generates a random AES key of `len` bytes (16 or 32)
pub fn generate_key(len: usize) -> Result<Vec<u8>> {
    if len != 16 && len != 32 {
        return Err(CryptoError::Encryption(format!(
            "Invalid key size: expected 16 or 32, got {}",
            len
        )));
    }
    let mut key = vec![0u8; len];
    rand::thread_rng().fill(&mut key[..]);
    Ok(key)
}

fn seal<C: Aead + KeyInit>(key: &[u8], nonce: &[u8], payload: Payload<'_, '_>) -> Result<Vec<u8>> {
    let cipher = C::new_from_slice(key)
        .map_err(|e| CryptoError::Encryption(format!("Failed to create cipher: {}", e)))?;
    cipher
        .encrypt(aes_gcm::aead::Nonce::<C>::from_slice(nonce), payload)
        .map_err(|e| CryptoError::Encryption(format!("Encryption failed: {}", e)))
}

fn open<C: Aead + KeyInit>(key: &[u8], nonce: &[u8], payload: Payload<'_, '_>) -> Result<Vec<u8>> {
    let cipher = C::new_from_slice(key)
        .map_err(|e| CryptoError::Decryption(format!("Failed to create cipher: {}", e)))?;
    cipher
        .decrypt(aes_gcm::aead::Nonce::<C>::from_slice(nonce), payload)
        .map_err(|e| CryptoError::Decryption(format!("Decryption failed: {}", e)))
}
