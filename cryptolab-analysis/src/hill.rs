// src/hill.rs

//! Known-plaintext attack on the 2×2 Hill cipher.
//!
//! Each plaintext digraph `p` and its ciphertext `c` satisfy `c = K·p`.
//! Stacking two pairs as columns gives `C = K·P`, so `K = C·P⁻¹ (mod 26)`
//! whenever `P` is invertible. The recovery is exact, not statistical.

use cryptolab_core::alphabet::{clean, to_indices};
use cryptolab_core::{CryptoError, Mat2, Result};
use tracing::debug;

fn digraph(text: &str) -> Result<[i64; 2]> {
    let letters = to_indices(&clean(text));
    match letters.as_slice() {
        [a, b] => Ok([*a as i64, *b as i64]),
        _ => Err(CryptoError::Validation(format!(
            "expected exactly two letters, got {:?}",
            text
        ))),
    }
}

/// Recovers `K` from two plaintext digraphs and their encryptions
///
/// # Errors
/// * `Validation` when any argument is not exactly two letters
/// * `InvalidKey` when the plaintext digraphs are linearly dependent mod 26
///
/// # Example
/// ```
/// use cryptolab_analysis::recover_hill_key;
/// use cryptolab_core::Mat2;
///
/// let k = recover_hill_key("HE", "LP", "HI", "AT").unwrap();
/// assert_eq!(k, Mat2::new(3, 3, 2, 5));
/// ```
pub fn recover_hill_key(p1: &str, p2: &str, c1: &str, c2: &str) -> Result<Mat2> {
    let p = Mat2::from_columns(digraph(p1)?, digraph(p2)?);
    let c = Mat2::from_columns(digraph(c1)?, digraph(c2)?);
    let p_inv = p.inverse()?;
    let key = c * p_inv;
    debug!(key = %key, "hill key recovered");
    Ok(key)
}

/// Recovers `K` from an aligned plaintext/ciphertext crib of any length
///
/// Searches digraph pairs in order for the first invertible plaintext
/// matrix, solves for `K`, then checks `K` against every digraph.
///
/// # Errors
/// * `Validation` when the texts differ in length, have an odd number of
///   letters, or have fewer than two digraphs
/// * `InvalidKey` when no pair of plaintext digraphs is invertible, or the
///   solved key disagrees with some digraph
pub fn recover_hill_key_from_crib(plaintext: &str, ciphertext: &str) -> Result<Mat2> {
    let plain = to_indices(&clean(plaintext));
    let cipher = to_indices(&clean(ciphertext));
    if plain.len() % 2 != 0 {
        return Err(CryptoError::Validation(format!(
            "crib must be whole digraphs, got {} letters",
            plain.len()
        )));
    }
    if plain.len() != cipher.len() {
        return Err(CryptoError::Validation(format!(
            "crib length mismatch: {} plaintext vs {} ciphertext letters",
            plain.len(),
            cipher.len()
        )));
    }
    let to_pairs = |v: &[u8]| -> Vec<[i64; 2]> {
        v.chunks_exact(2).map(|d| [d[0] as i64, d[1] as i64]).collect()
    };
    let p_pairs = to_pairs(&plain);
    let c_pairs = to_pairs(&cipher);
    if p_pairs.len() < 2 {
        return Err(CryptoError::Validation(
            "need at least two digraphs of known plaintext".to_string(),
        ));
    }

    let (i, j, p_inv) = (0..p_pairs.len())
        .flat_map(|i| (i + 1..p_pairs.len()).map(move |j| (i, j)))
        .find_map(|(i, j)| {
            Mat2::from_columns(p_pairs[i], p_pairs[j])
                .inverse()
                .ok()
                .map(|inv| (i, j, inv))
        })
        .ok_or_else(|| {
            CryptoError::InvalidKey("no invertible pair of plaintext digraphs".to_string())
        })?;

    let key = Mat2::from_columns(c_pairs[i], c_pairs[j]) * p_inv;
    debug!(first = i, second = j, key = %key, "hill crib solved");

    if let Some(bad) = p_pairs.iter().zip(&c_pairs).position(|(p, c)| key.apply(*p) != *c) {
        return Err(CryptoError::InvalidKey(format!(
            "recovered key {} disagrees with digraph {}",
            key, bad
        )));
    }
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cryptolab_core::alphabet::index_letter;

    const K: Mat2 = Mat2::new(3, 3, 2, 5);

    fn enc(text: &str) -> String {
        to_indices(&clean(text))
            .chunks_exact(2)
            .flat_map(|d| K.apply([d[0] as i64, d[1] as i64]))
            .map(index_letter)
            .collect()
    }

    #[test]
    fn test_recovers_known_key() {
        let (c1, c2) = (enc("HE"), enc("LP"));
        assert_eq!((c1.as_str(), c2.as_str()), ("HI", "AT"));
        let key = recover_hill_key("HE", "LP", &c1, &c2).unwrap();
        assert!(key.congruent(&K));
    }

    #[test]
    fn test_dependent_plaintext_is_invalid_key() {
        // "AB" = (0,1) and "AC" = (0,2): det = 0
        let err = recover_hill_key("AB", "AC", &enc("AB"), &enc("AC")).unwrap_err();
        assert!(matches!(err, CryptoError::InvalidKey(_)));
    }

    #[test]
    fn test_wrong_digraph_length() {
        assert!(matches!(
            recover_hill_key("HEL", "LP", "HI", "AT"),
            Err(CryptoError::Validation(_))
        ));
        assert!(matches!(
            recover_hill_key("HE", "LP", "H", "AT"),
            Err(CryptoError::Validation(_))
        ));
    }

    #[test]
    fn test_case_and_noise_tolerated() {
        let key = recover_hill_key("h-e", "L P", "hi", "at").unwrap();
        assert_eq!(key, K);
    }

    #[test]
    fn test_crib_skips_dependent_pairs() {
        // AA and AB make a singular P; AB and HE do not
        let plain = "AAABHELP";
        let key = recover_hill_key_from_crib(plain, &enc(plain)).unwrap();
        assert_eq!(key, K);
    }

    #[test]
    fn test_crib_detects_inconsistency() {
        let plain = "HELPMEPLEASE";
        let mut cipher = enc(plain).into_bytes();
        cipher[11] = if cipher[11] == b'A' { b'B' } else { b'A' };
        let cipher = String::from_utf8(cipher).unwrap();
        assert!(matches!(
            recover_hill_key_from_crib(plain, &cipher),
            Err(CryptoError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_crib_rejects_odd_length() {
        let plain = "AAABHELPQ";
        let cipher = format!("{}A", enc("AAABHELP"));
        assert!(matches!(
            recover_hill_key_from_crib(plain, &cipher),
            Err(CryptoError::Validation(_))
        ));
    }

    #[test]
    fn test_crib_too_short() {
        assert!(recover_hill_key_from_crib("HE", "HI").is_err());
        assert!(recover_hill_key_from_crib("HELP", "HIA").is_err());
    }
}
