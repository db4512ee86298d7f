// src/dh.rs

//! Toy finite-field Diffie–Hellman.
//!
//! `p` is not primality-checked; callers pick textbook parameters.

use cryptolab_core::arith::modexp;
use cryptolab_core::{CryptoError, Result};

/// Public value `A = g^a mod p`
///
/// # Errors
/// `Validation` unless `1 < g < p` and `1 <= a < p`
///
/// # Example
/// ```
/// use cryptolab_ciphers::dh::{public_from_secret, shared_secret};
///
/// let (p, g) = (23, 5);
/// let alice = public_from_secret(g, p, 6).unwrap();
/// let bob = public_from_secret(g, p, 15).unwrap();
/// assert_eq!(shared_secret(bob, p, 6).unwrap(), shared_secret(alice, p, 15).unwrap());
/// ```
pub fn public_from_secret(g: i64, p: i64, a: i64) -> Result<i64> {
    if !(1 < g && g < p) {
        return Err(CryptoError::Validation("Require 1 < g < p".to_string()));
    }
    check_secret(a, p)?;
    modexp(g, a, p)
}

/// Shared secret `s = peer^a mod p`
///
/// # Errors
/// `Validation` unless `1 <= peer < p` and `1 <= a < p`
pub fn shared_secret(peer_public: i64, p: i64, a: i64) -> Result<i64> {
    if !(1..p).contains(&peer_public) {
        return Err(CryptoError::Validation(
            "peer public must be in [1, p - 1]".to_string(),
        ));
    }
    check_secret(a, p)?;
    modexp(peer_public, a, p)
}

fn check_secret(a: i64, p: i64) -> Result<()> {
    if !(1..p).contains(&a) {
        return Err(CryptoError::Validation("Require 1 <= secret < p".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textbook_exchange() {
        let (p, g) = (23, 5);
        let a_pub = public_from_secret(g, p, 6).unwrap();
        let b_pub = public_from_secret(g, p, 15).unwrap();
        assert_eq!(a_pub, 8);
        assert_eq!(b_pub, 19);
        assert_eq!(shared_secret(b_pub, p, 6).unwrap(), 2);
        assert_eq!(shared_secret(a_pub, p, 15).unwrap(), 2);
    }

    #[test]
    fn test_parameter_validation() {
        assert!(public_from_secret(1, 23, 6).is_err());
        assert!(public_from_secret(23, 23, 6).is_err());
        assert!(public_from_secret(5, 23, 0).is_err());
        assert!(shared_secret(0, 23, 6).is_err());
        assert!(shared_secret(8, 23, 23).is_err());
    }
}
