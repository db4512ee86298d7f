// src/caesar.rs

//! Caesar shift cipher over `A`–`Z`.

use cryptolab_core::alphabet::{clean, shift_text};

/// Encrypts by rotating every letter forward by `shift`
///
/// Any integer shift is accepted (negative, or larger than 26).
///
/// # Example
/// ```
/// use cryptolab_ciphers::caesar::encrypt;
///
/// assert_eq!(encrypt("HELLO", 3), "KHOOR");
/// ```
pub fn encrypt(plaintext: &str, shift: i64) -> String {
    shift_text(&clean(plaintext), shift)
}

/// Decrypts by rotating every letter back by `shift`
pub fn decrypt(ciphertext: &str, shift: i64) -> String {
    encrypt(ciphertext, -shift)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        assert_eq!(encrypt("HELLO", 3), "KHOOR");
        assert_eq!(decrypt("KHOOR", 3), "HELLO");
    }

    #[test]
    fn test_round_trip_with_odd_shifts() {
        for k in [0, 1, 3, 13, 25, -4, 52] {
            let c = encrypt("Hello, World!", k);
            assert_eq!(decrypt(&c, k), "HELLOWORLD");
        }
    }

    #[test]
    fn test_shift_equivalence() {
        assert_eq!(encrypt("ABC", -1), encrypt("ABC", 25));
        assert_eq!(encrypt("ABC", 26), "ABC");
    }
}
