// src/rsa.rs

//! Textbook RSA over small integers.
//!
//! Educational only: no padding, tiny primes, trial-division primality.

use cryptolab_core::arith::{gcd, modexp, modinv};
use cryptolab_core::{CryptoError, Result};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Public half: modulus and public exponent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsaPublicKey {
    /// Modulus `n = p·q`
    pub n: i64,
    /// Public exponent
    pub e: i64,
}

/// Private half: modulus and private exponent, zeroized on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RsaPrivateKey {
    n: i64,
    d: i64,
}

impl std::fmt::Debug for RsaPrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RsaPrivateKey {{ n: {}, d: [REDACTED] }}", self.n)
    }
}

impl RsaPrivateKey {
    /// Modulus `n`
    pub fn modulus(&self) -> i64 {
        self.n
    }

    /// Private exponent `d`
    pub fn exponent(&self) -> i64 {
        self.d
    }
}

fn is_small_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut f = 3;
    while f * f <= n {
        if n % f == 0 {
            return false;
        }
        f += 2;
    }
    true
}

/// Generates a key pair from primes `p`, `q` and exponent `e`
///
/// # Errors
/// `InvalidKey` when `p == q`, either is not prime, `n` overflows, or `e`
/// is not a unit in `(1, φ)`
///
/// # Example
/// ```
/// use cryptolab_ciphers::rsa::keygen;
///
/// let (public, private) = keygen(61, 53, 17).unwrap();
/// assert_eq!(public.n, 3233);
/// assert_eq!(private.exponent(), 2753);
/// ```
pub fn keygen(p: i64, q: i64, e: i64) -> Result<(RsaPublicKey, RsaPrivateKey)> {
    if p == q {
        return Err(CryptoError::InvalidKey("p and q must be distinct primes".to_string()));
    }
    if !is_small_prime(p) || !is_small_prime(q) {
        return Err(CryptoError::InvalidKey("p and q must be prime (toy RSA)".to_string()));
    }
    let n = p
        .checked_mul(q)
        .ok_or_else(|| CryptoError::InvalidKey("modulus p*q overflows".to_string()))?;
    let phi = (p - 1) * (q - 1);
    if e <= 1 || e >= phi || gcd(e, phi) != 1 {
        return Err(CryptoError::InvalidKey(
            "public exponent e must satisfy 1 < e < phi and gcd(e, phi) = 1".to_string(),
        ));
    }
    let d = modinv(e, phi)?;
    Ok((RsaPublicKey { n, e }, RsaPrivateKey { n, d }))
}

/// `c = m^e mod n`; requires `0 <= m < n`
pub fn encrypt_int(m: i64, public: &RsaPublicKey) -> Result<i64> {
    if !(0..public.n).contains(&m) {
        return Err(CryptoError::Validation(
            "message integer must satisfy 0 <= m < n".to_string(),
        ));
    }
    modexp(m, public.e, public.n)
}

/// `m = c^d mod n`; requires `0 <= c < n`
pub fn decrypt_int(c: i64, private: &RsaPrivateKey) -> Result<i64> {
    if !(0..private.n).contains(&c) {
        return Err(CryptoError::Validation(
            "cipher integer must satisfy 0 <= c < n".to_string(),
        ));
    }
    modexp(c, private.d, private.n)
}

/// Textbook signature `s = m^d mod n`; requires `0 <= m < n`
///
/// No hashing or padding, so signatures are multiplicative:
/// `sign(m1)·sign(m2) mod n` is a valid signature on `m1·m2 mod n`.
pub fn sign_int(m: i64, private: &RsaPrivateKey) -> Result<i64> {
    decrypt_int(m, private)
}

/// True iff `s^e ≡ m (mod n)`
///
/// # Errors
/// `Validation` when `s` or `m` is outside `[0, n)`
pub fn verify_int(m: i64, s: i64, public: &RsaPublicKey) -> Result<bool> {
    if !(0..public.n).contains(&m) {
        return Err(CryptoError::Validation(
            "message integer must satisfy 0 <= m < n".to_string(),
        ));
    }
    Ok(encrypt_int(s, public)? == m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textbook_round_trip() {
        let (public, private) = keygen(61, 53, 17).unwrap();
        let c = encrypt_int(65, &public).unwrap();
        assert_eq!(c, 2790);
        assert_eq!(decrypt_int(c, &private).unwrap(), 65);
    }

    #[test]
    fn test_every_message_round_trips() {
        let (public, private) = keygen(11, 13, 7).unwrap();
        for m in 0..public.n {
            let c = encrypt_int(m, &public).unwrap();
            assert_eq!(decrypt_int(c, &private).unwrap(), m);
        }
    }

    #[test]
    fn test_keygen_rejects_bad_inputs() {
        assert!(keygen(61, 61, 17).is_err());
        assert!(keygen(60, 53, 17).is_err());
        // gcd(3, 60*52) = 3
        assert!(keygen(61, 53, 3).is_err());
        assert!(keygen(61, 53, 1).is_err());
    }

    #[test]
    fn test_range_checks() {
        let (public, private) = keygen(61, 53, 17).unwrap();
        assert!(encrypt_int(3233, &public).is_err());
        assert!(encrypt_int(-1, &public).is_err());
        assert!(decrypt_int(5000, &private).is_err());
    }

    #[test]
    fn test_sign_verify() {
        let (public, private) = keygen(61, 53, 17).unwrap();
        let s = sign_int(65, &private).unwrap();
        assert!(verify_int(65, s, &public).unwrap());
        assert!(!verify_int(66, s, &public).unwrap());
        assert!(verify_int(65, 3233, &public).is_err());
    }

    #[test]
    fn test_small_primes() {
        let primes: Vec<i64> = (0..30).filter(|&n| is_small_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_private_key_debug_redacted() {
        let (_, private) = keygen(61, 53, 17).unwrap();
        assert!(!format!("{:?}", private).contains("2753"));
    }
}
