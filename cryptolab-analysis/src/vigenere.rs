// src/vigenere.rs

//! Ciphertext-only Vigenère attack.
//!
//! The pipeline:
//!
//! 1. **Kasiski examination**: repeated 3- to 5-grams are likely the same
//!    plaintext under the same key offset, so the key length divides the
//!    GCD of their distances.
//! 2. **Short-period sweep**: every period `1..=min(12, n)` is tried anyway,
//!    because Kasiski finds nothing useful on short or irregular text.
//! 3. **Per-period solve**: split the ciphertext into `m` interleaved
//!    columns and crack each as a standalone Caesar cipher.
//! 4. **Global re-score**: rank candidates by chi-square of the *whole*
//!    decryption, not by the sum of column scores.
//! 5. **Canonicalize**: compress the winning key to its minimal period.
//!
//! Each candidate period is solved independently; the winner is a pure fold
//! with a strict less-than, so the shortest period wins ties.

use crate::caesar::best_shift;
use crate::{KASISKI_MAX_NGRAM, KASISKI_MIN_NGRAM, MAX_BRUTE_FORCE_PERIOD};
use cryptolab_core::alphabet::{clean, from_indices, to_indices};
use cryptolab_core::arith::gcd;
use cryptolab_core::frequency::{chi_square_counts, histogram_of_indices, ENGLISH};
use cryptolab_core::{CryptoError, PeriodicKey, Result, MODULUS};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info};

/// One solved candidate period
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PeriodCandidate {
    /// Period the ciphertext was split by
    pub period: usize,
    /// One shift per column, length `period`
    pub key: PeriodicKey,
    /// Full decryption under `key`
    pub plaintext: String,
    /// Chi-square of `plaintext` against English
    pub score: f64,
}

/// Distances between consecutive occurrences of every repeated n-gram
///
/// Covers n-gram lengths 3 through 5 over the cleaned text; distances from
/// all lengths are pooled.
pub fn repeat_distances(ciphertext: &str) -> Vec<usize> {
    let text = clean(ciphertext);
    let bytes = text.as_bytes();

    let mut positions: HashMap<&[u8], Vec<usize>> = HashMap::new();
    for len in KASISKI_MIN_NGRAM..=KASISKI_MAX_NGRAM {
        if bytes.len() < len {
            break;
        }
        for (i, gram) in bytes.windows(len).enumerate() {
            positions.entry(gram).or_default().push(i);
        }
    }

    positions
        .values()
        .filter(|starts| starts.len() >= 2)
        .flat_map(|starts| starts.windows(2).map(|w| w[1] - w[0]))
        .collect()
}

/// Candidate key lengths from Kasiski examination
///
/// Returns every divisor of the GCD of all repeat distances, ascending.
/// Empty when nothing repeats.
///
/// # Example
/// ```
/// use cryptolab_analysis::kasiski_lengths;
///
/// // "ABCDE" repeats at distance 6
/// assert_eq!(kasiski_lengths("ABCDEXABCDEY"), vec![1, 2, 3, 6]);
/// assert!(kasiski_lengths("ABCDEFG").is_empty());
/// ```
pub fn kasiski_lengths(ciphertext: &str) -> Vec<usize> {
    let distances = repeat_distances(ciphertext);
    if distances.is_empty() {
        return Vec::new();
    }
    let g = distances.iter().fold(0u64, |acc, &d| gcd(acc as i64, d as i64)) as usize;
    debug!(repeats = distances.len(), gcd = g, "kasiski examination");
    (1..=g).filter(|k| g % k == 0).collect()
}

/// Periods to try: `1..=min(12, len)` first, then new Kasiski hints in order
pub fn candidate_periods(text_len: usize, kasiski: &[usize]) -> Vec<usize> {
    let mut periods: Vec<usize> = (1..=MAX_BRUTE_FORCE_PERIOD.min(text_len)).collect();
    for &m in kasiski {
        if (1..=text_len).contains(&m) && !periods.contains(&m) {
            periods.push(m);
        }
    }
    periods
}

/// Solves one candidate period over cleaned letter indices
///
/// Column `r` holds the letters at positions `≡ r (mod period)`; each is
/// cracked as a Caesar cipher.
///
/// # Errors
/// `Validation` when `period` is zero
pub fn solve_period(indices: &[u8], period: usize) -> Result<PeriodCandidate> {
    if period == 0 {
        return Err(CryptoError::Validation("period must be positive".to_string()));
    }

    let shifts: Vec<u8> = (0..period)
        .map(|r| {
            let column: Vec<u8> = indices.iter().skip(r).step_by(period).copied().collect();
            best_shift(&column).0
        })
        .collect();
    let key = PeriodicKey::new(shifts)?;

    let decrypted: Vec<u8> = indices
        .iter()
        .enumerate()
        .map(|(i, &c)| (c as i64 - key.shift_at(i) as i64).rem_euclid(MODULUS) as u8)
        .collect();
    let score = chi_square_counts(&histogram_of_indices(decrypted.iter().copied()), &ENGLISH);
    debug!(period, key = %key, score, "vigenere candidate");

    Ok(PeriodCandidate {
        period,
        key,
        plaintext: from_indices(&decrypted),
        score,
    })
}

/// Compresses a letter key to its minimal exactly-repeating period
///
/// # Example
/// ```
/// use cryptolab_analysis::compress_period;
///
/// assert_eq!(compress_period("MAGNUMMAGNUM").unwrap(), "MAGNUM");
/// assert_eq!(compress_period("abab").unwrap(), "AB");
/// assert_eq!(compress_period("ABA").unwrap(), "ABA");
/// ```
///
/// # Errors
/// `Validation` when the key has no `A`–`Z` letters
pub fn compress_period(key: &str) -> Result<String> {
    Ok(PeriodicKey::from_letters(key)?.canonical().to_letters())
}

/// Runs the full attack and returns the winning candidate
///
/// The returned key is already canonical; `period` records the candidate
/// period that produced it.
///
/// # Errors
/// `Validation` when the ciphertext has no `A`–`Z` letters
pub fn crack_vigenere_candidate(ciphertext: &str) -> Result<PeriodCandidate> {
    let text = clean(ciphertext);
    if text.is_empty() {
        return Err(CryptoError::Validation(
            "No A-Z letters in ciphertext to analyze".to_string(),
        ));
    }

    let indices = to_indices(&text);
    let hints = kasiski_lengths(&text);
    let periods = candidate_periods(text.len(), &hints);
    debug!(?periods, "candidate periods");

    let best = periods
        .iter()
        .map(|&m| solve_period(&indices, m))
        .try_fold(None, |best: Option<PeriodCandidate>, candidate| {
            let candidate = candidate?;
            Ok::<_, CryptoError>(Some(match best {
                Some(b) if b.score <= candidate.score => b,
                _ => candidate,
            }))
        })?
        .ok_or_else(|| CryptoError::Validation("no candidate periods".to_string()))?;

    let key = best.key.canonical();
    info!(period = best.period, key = %key, score = best.score, "vigenere key recovered");

    Ok(PeriodCandidate { key, ..best })
}

/// Recovers a Vigenère key from ciphertext alone
///
/// # Returns
/// `(key, plaintext)`; the key is compressed to its minimal period and the
/// plaintext is cleaned `A`–`Z`
///
/// # Errors
/// `Validation` when the ciphertext has no `A`–`Z` letters
pub fn crack_vigenere(ciphertext: &str) -> Result<(String, String)> {
    let best = crack_vigenere_candidate(ciphertext)?;
    Ok((best.key.to_letters(), best.plaintext))
}
