// src/keys.rs

//! Key value types for the classical ciphers.
//!
//! All keys are immutable values. A Caesar key is one element of Z/26, a
//! Vigenère key is a sequence of them, and a Hill key is an invertible
//! 2×2 matrix over Z/26.

use crate::alphabet::{clean, index_letter, to_indices};
use crate::errors::{CryptoError, Result};
use crate::matrix::Mat2;
use crate::MODULUS;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Caesar rotation in `[0, 26)`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShiftKey(u8);

impl ShiftKey {
    /// Reduces any integer shift into `[0, 26)`
    pub fn new(shift: i64) -> Self {
        ShiftKey(shift.rem_euclid(MODULUS) as u8)
    }

    /// The rotation amount
    pub fn value(self) -> u8 {
        self.0
    }

    /// The shift that undoes this one
    pub fn inverse(self) -> Self {
        ShiftKey::new(-(self.0 as i64))
    }

    /// Letter form (`A` = 0, `B` = 1, ...)
    pub fn letter(self) -> char {
        index_letter(self.0 as i64)
    }
}

impl From<ShiftKey> for i64 {
    fn from(key: ShiftKey) -> i64 {
        key.0 as i64
    }
}

/// A Vigenère key: one shift per position, repeating with period `len`
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeriodicKey {
    shifts: Vec<u8>,
}

impl PeriodicKey {
    /// Builds a key from raw shifts, reducing each mod 26
    ///
    /// # Errors
    /// `Validation` when `shifts` is empty
    pub fn new(shifts: Vec<u8>) -> Result<Self> {
        if shifts.is_empty() {
            return Err(CryptoError::Validation(
                "periodic key must contain at least one shift".to_string(),
            ));
        }
        let shifts = shifts.into_iter().map(|s| s % MODULUS as u8).collect();
        Ok(Self { shifts })
    }

    /// Parses a key from letters, ignoring anything outside A–Z
    ///
    /// # Errors
    /// `Validation` when the key has no letters
    pub fn from_letters(key: &str) -> Result<Self> {
        let shifts = to_indices(&clean(key));
        if shifts.is_empty() {
            return Err(CryptoError::Validation(
                "Vigenère key must contain at least one A-Z letter".to_string(),
            ));
        }
        Ok(Self { shifts })
    }

    /// Shifts in key order
    pub fn shifts(&self) -> &[u8] {
        &self.shifts
    }

    /// Key length `L`
    pub fn period(&self) -> usize {
        self.shifts.len()
    }

    /// Shift applied at text position `i`
    pub fn shift_at(&self, i: usize) -> u8 {
        self.shifts[i % self.shifts.len()]
    }

    /// Compresses the key to its minimal exactly-repeating period
    ///
    /// `MAGNUMMAGNUM` becomes `MAGNUM`; a key with no shorter period is
    /// returned unchanged.
    pub fn canonical(&self) -> Self {
        let t = minimal_period(&self.shifts);
        Self { shifts: self.shifts[..t].to_vec() }
    }

    /// Letter form of the key
    pub fn to_letters(&self) -> String {
        self.shifts.iter().map(|&s| index_letter(s as i64)).collect()
    }
}

impl fmt::Display for PeriodicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_letters())
    }
}

/// Smallest `t` dividing `len` such that the sequence is `t`-periodic
///
/// Returns `seq.len()` when no shorter period exists (and 0 for empty input).
pub fn minimal_period<T: PartialEq>(seq: &[T]) -> usize {
    let len = seq.len();
    (1..=len)
        .find(|&t| len % t == 0 && (t..len).all(|i| seq[i] == seq[i % t]))
        .unwrap_or(len)
}

/// An invertible 2×2 Hill key over Z/26
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Mat2", into = "Mat2")]
pub struct HillKey {
    matrix: Mat2,
    inverse: Mat2,
}

impl HillKey {
    /// Accepts `matrix` only if its determinant is a unit mod 26
    ///
    /// # Errors
    /// `InvalidKey` for a singular matrix
    pub fn new(matrix: Mat2) -> Result<Self> {
        let inverse = matrix.inverse()?;
        Ok(Self { matrix: matrix.reduced(), inverse })
    }

    /// The encryption matrix `K`
    pub fn matrix(&self) -> Mat2 {
        self.matrix
    }

    /// The decryption matrix `K⁻¹`
    pub fn inverse(&self) -> Mat2 {
        self.inverse
    }
}

impl TryFrom<Mat2> for HillKey {
    type Error = CryptoError;

    fn try_from(matrix: Mat2) -> Result<Self> {
        HillKey::new(matrix)
    }
}

impl From<HillKey> for Mat2 {
    fn from(key: HillKey) -> Mat2 {
        key.matrix
    }
}
