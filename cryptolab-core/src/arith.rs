// src/arith.rs

//! Modular arithmetic kernel.
//!
//! Extended Euclid, modular inverse and square-and-multiply exponentiation.
//! These back the Hill matrix inverse as well as the toy RSA and
//! Diffie–Hellman routines.

use crate::errors::{CryptoError, Result};

/// Extended Euclidean algorithm (iterative)
///
/// Returns `(g, x, y)` with `a*x + b*y == g` and `g == gcd(|a|, |b|)`.
/// Holds for negative inputs too; `g` is always non-negative. The loop runs
/// in `i128`, so every pair of `i64` inputs is handled.
///
/// # Errors
/// `Overflow` when `g` is `2^63`, i.e. both inputs are in `{i64::MIN, 0}`
/// and not both zero
///
/// # Example
/// ```
/// use cryptolab_core::arith::egcd;
///
/// let (g, x, y) = egcd(99, 78).unwrap();
/// assert_eq!(g, 3);
/// assert_eq!(99 * x + 78 * y, g);
/// ```
pub fn egcd(a: i64, b: i64) -> Result<(i64, i64, i64)> {
    let (mut old_r, mut r) = (a as i128, b as i128);
    let (mut old_s, mut s) = (1i128, 0i128);
    let (mut old_t, mut t) = (0i128, 1i128);

    while r != 0 {
        let q = old_r.div_euclid(r);
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
        (old_t, t) = (t, old_t - q * t);
    }

    if old_r < 0 {
        (old_r, old_s, old_t) = (-old_r, -old_s, -old_t);
    }

    let narrow = |v: i128| {
        i64::try_from(v).map_err(|_| {
            CryptoError::Overflow(format!("egcd({}, {}) component {} exceeds i64", a, b, v))
        })
    };
    Ok((narrow(old_r)?, narrow(old_s)?, narrow(old_t)?))
}

/// Greatest common divisor of `|a|` and `|b|`
///
/// Unsigned so that `gcd(i64::MIN, 0) == 2^63` is representable.
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Modular inverse of `a` modulo `n`
///
/// # Returns
/// `x` in `[0, n)` with `a*x ≡ 1 (mod n)`
///
/// # Errors
/// * `InvalidModulus` when `n <= 0`
/// * `NotInvertible` when `gcd(a, n) != 1`
///
/// # Example
/// ```
/// use cryptolab_core::arith::modinv;
///
/// assert_eq!(modinv(7, 26).unwrap(), 15);
/// assert!(modinv(2, 26).is_err());
/// ```
pub fn modinv(a: i64, n: i64) -> Result<i64> {
    if n <= 0 {
        return Err(CryptoError::InvalidModulus(n));
    }
    // both operands in [0, n), so egcd cannot overflow here
    let (g, x, _) = egcd(a.rem_euclid(n), n)?;
    if g != 1 {
        return Err(CryptoError::NotInvertible { value: a, modulus: n, gcd: g });
    }
    Ok(x.rem_euclid(n))
}

/// Computes `base^exp mod modulus` by square-and-multiply
///
/// The base is reduced into `[0, modulus)` first, so negative bases behave
/// like the mathematical definition (`(-7)^9 mod 26 == 5`). A modulus of 1
/// always yields 0.
///
/// # Errors
/// * `InvalidModulus` when `modulus <= 0`
/// * `NegativeExponent` when `exp < 0`
pub fn modexp(base: i64, exp: i64, modulus: i64) -> Result<i64> {
    if modulus <= 0 {
        return Err(CryptoError::InvalidModulus(modulus));
    }
    if exp < 0 {
        return Err(CryptoError::NegativeExponent(exp));
    }
    if modulus == 1 {
        return Ok(0);
    }

    // i128 keeps the products of two residues from overflowing
    let m = modulus as i128;
    let mut result: i128 = 1;
    let mut b = (base as i128).rem_euclid(m);
    let mut e = exp;
    while e > 0 {
        if e & 1 == 1 {
            result = (result * b) % m;
        }
        b = (b * b) % m;
        e >>= 1;
    }
    Ok(result as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn naive_pow_mod(base: i64, exp: i64, modulus: i64) -> i64 {
        let mut acc = 1i64.rem_euclid(modulus);
        for _ in 0..exp {
            acc = (acc * base).rem_euclid(modulus);
        }
        acc
    }

    #[test]
    fn test_egcd_known_vector() {
        let (g, x, y) = egcd(99, 78).unwrap();
        assert_eq!(g, 3);
        assert_eq!(99 * x + 78 * y, g);
    }

    #[test]
    fn test_egcd_zero_inputs() {
        assert_eq!(egcd(0, 0).unwrap().0, 0);
        let (g, x, _) = egcd(12, 0).unwrap();
        assert_eq!(g, 12);
        assert_eq!(12 * x, 12);
        let (g, _, y) = egcd(0, -9).unwrap();
        assert_eq!(g, 9);
        assert_eq!(-9 * y, 9);
    }

    #[test]
    fn test_egcd_bezout_random() {
        let mut rng = StdRng::seed_from_u64(0xE6CD);
        for _ in 0..500 {
            let a: i64 = rng.gen_range(-100_000..100_000);
            let b: i64 = rng.gen_range(-100_000..100_000);
            let (g, x, y) = egcd(a, b).unwrap();
            assert!(g >= 0);
            assert_eq!(a * x + b * y, g, "a={} b={}", a, b);
            if g != 0 {
                assert_eq!(a % g, 0);
                assert_eq!(b % g, 0);
            }
        }
    }

    #[test]
    fn test_gcd_symmetric() {
        assert_eq!(gcd(26, 9), 1);
        assert_eq!(gcd(-26, 4), 2);
        assert_eq!(gcd(4, -26), 2);
    }

    #[test]
    fn test_egcd_at_i64_extremes() {
        assert!(matches!(egcd(i64::MIN, 0), Err(CryptoError::Overflow(_))));
        assert!(matches!(egcd(0, i64::MIN), Err(CryptoError::Overflow(_))));
        assert!(matches!(egcd(i64::MIN, i64::MIN), Err(CryptoError::Overflow(_))));
        assert_eq!(egcd(i64::MIN, -1).unwrap(), (1, 0, -1));

        let extremes = [i64::MIN, i64::MIN + 1, -1, 0, 1, 2, 3, i64::MAX - 1, i64::MAX];
        for &a in &extremes {
            for &b in &extremes {
                match egcd(a, b) {
                    Ok((g, x, y)) => {
                        assert_eq!(g as u64, gcd(a, b), "a={} b={}", a, b);
                        let lhs = a as i128 * x as i128 + b as i128 * y as i128;
                        assert_eq!(lhs, g as i128, "a={} b={}", a, b);
                    }
                    Err(CryptoError::Overflow(_)) => assert_eq!(gcd(a, b), 1u64 << 63),
                    Err(e) => panic!("unexpected error {}", e),
                }
            }
        }
    }

    #[test]
    fn test_gcd_of_min_is_representable() {
        assert_eq!(gcd(i64::MIN, 0), 1u64 << 63);
        assert_eq!(gcd(i64::MIN, i64::MIN), 1u64 << 63);
        assert_eq!(gcd(i64::MIN, 6), 2);
        assert_eq!(gcd(0, 0), 0);
    }

    #[test]
    fn test_modinv_at_i64_extremes() {
        assert_eq!(modinv(i64::MIN, 1).unwrap(), 0);
        assert_eq!(modinv(i64::MIN, 3).unwrap(), 1);
        assert_eq!(modinv(i64::MAX, i64::MAX - 1).unwrap(), 1);
        assert!(matches!(modinv(i64::MIN, 4), Err(CryptoError::NotInvertible { gcd: 4, .. })));
        let x = modinv(3, i64::MAX).unwrap();
        assert_eq!((3i128 * x as i128).rem_euclid(i64::MAX as i128), 1);
    }

    #[test]
    fn test_modinv_basic_and_failure() {
        assert_eq!(modinv(7, 26).unwrap(), 15);
        assert_eq!(modinv(-7, 26).unwrap(), 11);
        assert_eq!(
            modinv(2, 26),
            Err(CryptoError::NotInvertible { value: 2, modulus: 26, gcd: 2 })
        );
        assert_eq!(modinv(3, 0), Err(CryptoError::InvalidModulus(0)));
    }

    #[test]
    fn test_modinv_all_units_mod_26() {
        for a in 0..26 {
            match modinv(a, 26) {
                Ok(x) => {
                    assert!((0..26).contains(&x));
                    assert_eq!((a * x) % 26, 1);
                }
                Err(CryptoError::NotInvertible { gcd, .. }) => assert_ne!(gcd, 1),
                Err(e) => panic!("unexpected error {}", e),
            }
        }
    }

    #[test]
    fn test_modexp_vectors() {
        assert_eq!(modexp(13, 11, 19).unwrap(), 2);
        assert_eq!(modexp(123_456_789, 0, 97).unwrap(), 1);
        assert_eq!(modexp(5, 117, 19).unwrap(), 1);
        assert_eq!(modexp(42, 73, 101).unwrap(), naive_pow_mod(42, 73, 101));
        assert_eq!(modexp(-7, 9, 26).unwrap(), 5);
    }

    #[test]
    fn test_modexp_edge_cases() {
        assert_eq!(modexp(5, 3, 1).unwrap(), 0);
        assert_eq!(modexp(0, 0, 7).unwrap(), 1);
        assert_eq!(modexp(2, 3, 0), Err(CryptoError::InvalidModulus(0)));
        assert_eq!(modexp(2, -1, 7), Err(CryptoError::NegativeExponent(-1)));
    }

    #[test]
    fn test_modexp_matches_naive() {
        let mut rng = StdRng::seed_from_u64(0x40D);
        for _ in 0..200 {
            let base: i64 = rng.gen_range(-1_000..1_000);
            let exp: i64 = rng.gen_range(0..200);
            let modulus: i64 = rng.gen_range(1..5_000);
            assert_eq!(modexp(base, exp, modulus).unwrap(), naive_pow_mod(base, exp, modulus));
        }
    }

    #[test]
    fn test_modexp_large_modulus_no_overflow() {
        let p = 1_000_000_007i64;
        // Fermat: a^(p-1) ≡ 1 mod p
        assert_eq!(modexp(123_456_789, p - 1, p).unwrap(), 1);
    }
}
