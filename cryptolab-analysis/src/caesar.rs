// src/caesar.rs

//! Ciphertext-only Caesar attack.
//!
//! Tries all 26 shifts and keeps the one whose decryption is closest to
//! English by chi-square. The letter histogram is computed once; each
//! candidate shift only rotates it.

use cryptolab_core::alphabet::{clean, shift_text, to_indices};
use cryptolab_core::frequency::{chi_square_counts, histogram_of_indices, Histogram, ENGLISH};
use cryptolab_core::{CryptoError, Result, ShiftKey, ALPHABET_SIZE};
use tracing::{debug, trace};

/// Chi-square of the text obtained by decrypting `counts` with shift `k`
///
/// Plaintext letter `i` was enciphered as `i + k`, so bin `i` of the
/// decryption holds ciphertext bin `(i + k) mod 26`.
pub fn score_shift(counts: &Histogram, k: u8) -> f64 {
    let mut rotated = [0usize; ALPHABET_SIZE];
    for (i, bin) in rotated.iter_mut().enumerate() {
        *bin = counts[(i + k as usize) % ALPHABET_SIZE];
    }
    chi_square_counts(&rotated, &ENGLISH)
}

/// Best shift for a letter histogram, with its score
///
/// Ascending scan with a strict less-than: on an exact tie the smallest
/// shift wins. An empty histogram scores infinity for every shift and
/// yields shift 0.
pub fn best_shift_for_histogram(counts: &Histogram) -> (u8, f64) {
    (0..ALPHABET_SIZE as u8)
        .map(|k| {
            let score = score_shift(counts, k);
            trace!(shift = k, score, "caesar candidate");
            (k, score)
        })
        .fold((0, f64::INFINITY), |best, candidate| {
            if candidate.1 < best.1 {
                candidate
            } else {
                best
            }
        })
}

/// Best shift for a sequence of letter indices, with its score
pub fn best_shift(indices: &[u8]) -> (u8, f64) {
    best_shift_for_histogram(&histogram_of_indices(indices.iter().copied()))
}

/// Recovers a Caesar shift from ciphertext alone
///
/// # Returns
/// `(shift, plaintext)` where `plaintext` is the cleaned `A`–`Z` decryption
///
/// # Errors
/// `Validation` when the ciphertext has no `A`–`Z` letters
///
/// # Example
/// ```
/// use cryptolab_analysis::crack_caesar;
///
/// let (shift, plaintext) = crack_caesar("Wkh txlfn eurzq ira mxpsv ryhu wkh odcb grj").unwrap();
/// assert_eq!(shift.value(), 3);
/// assert!(plaintext.starts_with("THEQUICK"));
/// ```
pub fn crack_caesar(ciphertext: &str) -> Result<(ShiftKey, String)> {
    let text = clean(ciphertext);
    if text.is_empty() {
        return Err(CryptoError::Validation(
            "No A-Z letters in ciphertext to analyze".to_string(),
        ));
    }

    let (shift, score) = best_shift(&to_indices(&text));
    debug!(shift, score, letters = text.len(), "caesar shift recovered");

    let key = ShiftKey::new(shift as i64);
    Ok((key, shift_text(&text, key.inverse().into())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cryptolab_core::frequency::{chi_square, histogram};

    const FOX: &str = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG \
                       THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG \
                       THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG \
                       THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG";

    #[test]
    fn test_recovers_every_shift() {
        let plain = clean(FOX);
        for k in 0..26i64 {
            let cipher = shift_text(&plain, k);
            let (shift, recovered) = crack_caesar(&cipher).unwrap();
            assert_eq!(shift, ShiftKey::new(k));
            assert_eq!(i64::from(shift), k);
            assert_eq!(recovered, plain);
        }
    }

    #[test]
    fn test_rotated_histogram_matches_direct_score() {
        let cipher = shift_text(&clean(FOX), 11);
        let counts = histogram(&cipher);
        for k in 0..26u8 {
            let direct = chi_square(&shift_text(&cipher, -(k as i64)), &ENGLISH);
            assert!((score_shift(&counts, k) - direct).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_ciphertext_fails() {
        assert!(matches!(crack_caesar(""), Err(CryptoError::Validation(_))));
        assert!(matches!(crack_caesar("1234 !!"), Err(CryptoError::Validation(_))));
    }

    #[test]
    fn test_empty_histogram_defaults_to_zero() {
        let (shift, score) = best_shift(&[]);
        assert_eq!(shift, 0);
        assert!(score.is_infinite());
    }

    #[test]
    fn test_tie_prefers_smallest_shift() {
        // a flat histogram scores identically under every rotation
        let counts = [4usize; ALPHABET_SIZE];
        assert_eq!(best_shift_for_histogram(&counts).0, 0);
    }

    #[test]
    fn test_noise_is_ignored() {
        let (shift, plaintext) = crack_caesar("Wkh txlfn, eurzq ira! mxpsv ryhu wkh odcb grj.").unwrap();
        assert_eq!(shift.value(), 3);
        assert_eq!(shift.letter(), 'D');
        assert_eq!(plaintext, "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG");
    }
}
