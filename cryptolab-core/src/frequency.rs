// src/frequency.rs

//! Letter-frequency model and chi-square scoring.
//!
//! Statistical attacks rank candidate decryptions by how closely their
//! letter histogram matches English. The reference table is a process-wide
//! constant; scoring is pure and deterministic.

use crate::alphabet::letter_index;
use crate::ALPHABET_SIZE;

/// Expected relative letter frequencies, in percent, indexed A..Z
#[derive(Clone, Debug, PartialEq)]
pub struct FrequencyProfile {
    percentages: [f64; ALPHABET_SIZE],
}

/// Classic English letter frequency table (sums to ~100)
pub static ENGLISH: FrequencyProfile = FrequencyProfile::new([
    8.167, 1.492, 2.782, 4.253, 12.702, 2.228, 2.015, 6.094, 6.966, 0.153,
    0.772, 4.025, 2.406, 6.749, 7.507, 1.929, 0.095, 5.987, 6.327, 9.056,
    2.758, 0.978, 2.360, 0.150, 1.974, 0.074,
]);

/// Expected counts at or below this are skipped rather than divided by
const MIN_EXPECTED: f64 = 1e-12;

impl FrequencyProfile {
    /// Builds a profile from 26 percentages
    pub const fn new(percentages: [f64; ALPHABET_SIZE]) -> Self {
        Self { percentages }
    }

    /// Percentage for letter index `i`
    pub fn percentage(&self, i: usize) -> f64 {
        self.percentages[i]
    }

    /// Expected count of letter `i` in a sample of `n` letters
    pub fn expected(&self, i: usize, n: usize) -> f64 {
        n as f64 * (self.percentages[i] / 100.0)
    }
}

/// A 26-bin letter histogram
pub type Histogram = [usize; ALPHABET_SIZE];

/// Counts `A`–`Z` occurrences; other bytes are ignored
pub fn histogram(text: &str) -> Histogram {
    let mut counts = [0usize; ALPHABET_SIZE];
    for i in text.bytes().filter_map(letter_index) {
        counts[i as usize] += 1;
    }
    counts
}

/// Counts letter indices (values in `0..26`)
pub fn histogram_of_indices(indices: impl IntoIterator<Item = u8>) -> Histogram {
    let mut counts = [0usize; ALPHABET_SIZE];
    for i in indices {
        counts[i as usize % ALPHABET_SIZE] += 1;
    }
    counts
}

/// Chi-square statistic of `counts` against `profile`
///
/// Lower is closer to the profile. Returns `f64::INFINITY` for an empty
/// histogram so callers minimizing the score never pick it.
pub fn chi_square_counts(counts: &Histogram, profile: &FrequencyProfile) -> f64 {
    let n: usize = counts.iter().sum();
    if n == 0 {
        return f64::INFINITY;
    }
    counts
        .iter()
        .enumerate()
        .map(|(i, &observed)| (observed as f64, profile.expected(i, n)))
        .filter(|&(_, expected)| expected > MIN_EXPECTED)
        .map(|(observed, expected)| {
            let diff = observed - expected;
            diff * diff / expected
        })
        .sum()
}

/// Chi-square goodness-of-fit of `text` against `profile`
///
/// `text` is expected to be pre-cleaned to `A`–`Z`.
///
/// # Example
/// ```
/// use cryptolab_core::frequency::{chi_square, ENGLISH};
///
/// let english = chi_square("THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG", &ENGLISH);
/// let shifted = chi_square("WKHTXLFNEURZQIRAMXPSVRYHUWKHODCBGRJ", &ENGLISH);
/// assert!(english < shifted);
/// assert!(chi_square("", &ENGLISH).is_infinite());
/// ```
pub fn chi_square(text: &str, profile: &FrequencyProfile) -> f64 {
    chi_square_counts(&histogram(text), profile)
}
