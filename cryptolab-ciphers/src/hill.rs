// src/hill.rs

//! Hill cipher with a 2×2 key over Z/26.
//!
//! Text is split into digraphs; each digraph is a column vector `p` and
//! encrypts to `K·p mod 26`. Odd-length input is padded with `X`.

use crate::PAD_LETTER;
use cryptolab_core::alphabet::{clean, from_indices, to_indices};
use cryptolab_core::{HillKey, Mat2};

/// Splits cleaned text into letter-index digraphs, padding with `X`
pub fn digraphs(text: &str) -> Vec<[i64; 2]> {
    let mut s = clean(text);
    if s.len() % 2 == 1 {
        s.push(PAD_LETTER);
    }
    to_indices(&s)
        .chunks_exact(2)
        .map(|pair| [pair[0] as i64, pair[1] as i64])
        .collect()
}

/// Encrypts with `K`
///
/// # Example
/// ```
/// use cryptolab_ciphers::hill::encrypt;
/// use cryptolab_core::{HillKey, Mat2};
///
/// let key = HillKey::new(Mat2::new(3, 3, 2, 5)).unwrap();
/// assert_eq!(encrypt("HI", &key), "TC");
/// ```
pub fn encrypt(plaintext: &str, key: &HillKey) -> String {
    transform(plaintext, &key.matrix())
}

/// Decrypts with `K⁻¹`
pub fn decrypt(ciphertext: &str, key: &HillKey) -> String {
    transform(ciphertext, &key.inverse())
}

fn transform(text: &str, matrix: &Mat2) -> String {
    let indices: Vec<u8> = digraphs(text)
        .into_iter()
        .flat_map(|v| matrix.apply(v))
        .map(|x| x as u8)
        .collect();
    from_indices(&indices)
}
