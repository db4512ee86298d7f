// src/vigenere.rs

//! Vigenère polyalphabetic cipher.

use cryptolab_core::alphabet::{clean, index_letter, to_indices};
use cryptolab_core::{PeriodicKey, Result};

/// Encrypts with a letter key (non-letters in the key are ignored)
///
/// # Errors
/// `Validation` when the key has no `A`–`Z` letters
///
/// # Example
/// ```
/// use cryptolab_ciphers::vigenere::encrypt;
///
/// assert_eq!(encrypt("ATTACKATDAWN", "LEMON").unwrap(), "LXFOPVEFRNHR");
/// ```
pub fn encrypt(plaintext: &str, key: &str) -> Result<String> {
    Ok(encrypt_with(plaintext, &PeriodicKey::from_letters(key)?))
}

/// Decrypts with a letter key
///
/// # Errors
/// `Validation` when the key has no `A`–`Z` letters
pub fn decrypt(ciphertext: &str, key: &str) -> Result<String> {
    Ok(decrypt_with(ciphertext, &PeriodicKey::from_letters(key)?))
}

/// Encrypts with an already-parsed key
pub fn encrypt_with(plaintext: &str, key: &PeriodicKey) -> String {
    apply(plaintext, key, 1)
}

/// Decrypts with an already-parsed key
pub fn decrypt_with(ciphertext: &str, key: &PeriodicKey) -> String {
    apply(ciphertext, key, -1)
}

fn apply(text: &str, key: &PeriodicKey, direction: i64) -> String {
    to_indices(&clean(text))
        .into_iter()
        .enumerate()
        .map(|(i, c)| index_letter(c as i64 + direction * key.shift_at(i) as i64))
        .collect()
}
