// src/matrix.rs

//! 2×2 matrices over Z/26.
//!
//! The Hill cipher multiplies letter-pair column vectors by a key matrix,
//! and the known-plaintext attack solves `C = K·P` for `K`. Both need
//! determinant, inverse and product modulo 26.

use crate::arith::{gcd, modinv};
use crate::errors::{CryptoError, Result};
use crate::MODULUS;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;

/// A 2×2 integer matrix, row-major
///
/// Entries are stored as given; arithmetic results are always reduced
/// into `[0, 26)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mat2(pub [[i64; 2]; 2]);

impl Mat2 {
    /// Builds `[[a, b], [c, d]]`
    pub const fn new(a: i64, b: i64, c: i64, d: i64) -> Self {
        Mat2([[a, b], [c, d]])
    }

    /// Builds a matrix whose columns are `left` and `right`
    pub const fn from_columns(left: [i64; 2], right: [i64; 2]) -> Self {
        Mat2([[left[0], right[0]], [left[1], right[1]]])
    }

    /// Entry at row `r`, column `c`
    pub fn get(&self, r: usize, c: usize) -> i64 {
        self.0[r][c]
    }

    /// Copy with every entry reduced into `[0, 26)`
    pub fn reduced(&self) -> Self {
        let [[a, b], [c, d]] = self.0;
        Mat2::new(
            a.rem_euclid(MODULUS),
            b.rem_euclid(MODULUS),
            c.rem_euclid(MODULUS),
            d.rem_euclid(MODULUS),
        )
    }

    /// `(ad - bc) mod 26`
    pub fn determinant(&self) -> i64 {
        let [[a, b], [c, d]] = self.reduced().0;
        (a * d - b * c).rem_euclid(MODULUS)
    }

    /// True iff the determinant is a unit of Z/26
    pub fn is_invertible(&self) -> bool {
        gcd(self.determinant(), MODULUS) == 1
    }

    /// Inverse mod 26: `det⁻¹ · [[d, -b], [-c, a]]`
    ///
    /// # Errors
    /// `InvalidKey` when the determinant shares a factor with 26
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if !self.is_invertible() {
            return Err(CryptoError::InvalidKey(format!(
                "matrix {} not invertible mod {} (det={})",
                self, MODULUS, det
            )));
        }
        let di = modinv(det, MODULUS)?;
        let [[a, b], [c, d]] = self.reduced().0;
        Ok(Mat2::new(d * di, -b * di, -c * di, a * di).reduced())
    }

    /// Matrix times column vector, reduced mod 26
    ///
    /// Matrix and vector are both reduced first, so any `i64` entries work.
    pub fn apply(&self, v: [i64; 2]) -> [i64; 2] {
        let [[a, b], [c, d]] = self.reduced().0;
        let [x, y] = v.map(|e| e.rem_euclid(MODULUS));
        [(a * x + b * y).rem_euclid(MODULUS), (c * x + d * y).rem_euclid(MODULUS)]
    }

    /// True when both matrices agree entry-wise modulo 26
    pub fn congruent(&self, other: &Mat2) -> bool {
        self.reduced() == other.reduced()
    }
}

impl Mul for Mat2 {
    type Output = Mat2;

    fn mul(self, rhs: Mat2) -> Mat2 {
        let l = self.reduced().0;
        let r = rhs.reduced().0;
        let mut out = [[0i64; 2]; 2];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (l[i][0] * r[0][j] + l[i][1] * r[1][j]).rem_euclid(MODULUS);
            }
        }
        Mat2(out)
    }
}

impl fmt::Display for Mat2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [[a, b], [c, d]] = self.0;
        write!(f, "[[{}, {}], [{}, {}]]", a, b, c, d)
    }
}
