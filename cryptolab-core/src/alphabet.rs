// src/alphabet.rs

//! The 26-letter working alphabet.
//!
//! Classical ciphers in this toolkit only ever see `A`–`Z`. Input is
//! case-folded and everything that is not an ASCII letter is dropped, so
//! `"Hello, World!"` and `"HELLOWORLD"` are the same message.

use crate::MODULUS;

/// Uppercase letters in index order
pub const LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Normalizes arbitrary text to uppercase `A`–`Z`
///
/// # Example
/// ```
/// use cryptolab_core::alphabet::clean;
///
/// assert_eq!(clean("Meet me @ the park!"), "MEETMETHEPARK");
/// ```
pub fn clean(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Maps an uppercase letter to its index in 0..26
pub fn letter_index(letter: u8) -> Option<u8> {
    if letter.is_ascii_uppercase() {
        Some(letter - b'A')
    } else {
        None
    }
}

/// Maps any integer to a letter, reducing it mod 26 first
pub fn index_letter(index: i64) -> char {
    LETTERS[index.rem_euclid(MODULUS) as usize] as char
}

/// Converts text to letter indices, skipping anything outside `A`–`Z`
pub fn to_indices(text: &str) -> Vec<u8> {
    text.bytes().filter_map(letter_index).collect()
}

/// Converts letter indices back to text
pub fn from_indices(indices: &[u8]) -> String {
    indices.iter().map(|&i| index_letter(i as i64)).collect()
}

/// Rotates every letter of an already-clean string by `k` positions
///
/// Any integer shift is accepted; it is reduced mod 26.
pub fn shift_text(text: &str, k: i64) -> String {
    let k = k.rem_euclid(MODULUS);
    text.bytes()
        .filter_map(letter_index)
        .map(|i| index_letter(i as i64 + k))
        .collect()
}
