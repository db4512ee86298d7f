// src/ufcma.rs

//! Existential forgery under chosen-message attack.
//!
//! The attacker may ask for signatures on messages of its choice and wins
//! by producing a valid signature on a message it never asked about.
//! Textbook RSA loses immediately because it is multiplicative; Ed25519
//! does not fall to guessing.

use cryptolab_ciphers::rsa::{self, RsaPublicKey};
use cryptolab_ciphers::sig::{self, VerifyingKey, SIGNATURE_LENGTH};
use cryptolab_core::{CryptoError, Result};
use rand::Rng;
use serde::Serialize;
use tracing::info;

/// Transcript of a multiplicative forgery
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RsaForgery {
    /// First queried message
    pub m1: i64,
    /// Oracle signature on `m1`
    pub s1: i64,
    /// Second queried message
    pub m2: i64,
    /// Oracle signature on `m2`
    pub s2: i64,
    /// Forged message `m1·m2 mod n`
    pub message: i64,
    /// Forged signature `s1·s2 mod n`
    pub signature: i64,
    /// The forged pair passes verification
    pub verifies: bool,
}

impl RsaForgery {
    /// Verifies and targets a message that was never queried
    pub fn is_existential(&self) -> bool {
        self.verifies && self.message != self.m1 && self.message != self.m2
    }
}

/// Forges a textbook RSA signature from two oracle queries
///
/// # Arguments
/// * `public` - Victim's public key
/// * `oracle` - Signs any integer in `[0, n)`
/// * `m1`, `m2` - The two messages to query
///
/// # Errors
/// Whatever the oracle or verification reports for out-of-range input
pub fn forge_rsa_textbook<F>(public: &RsaPublicKey, oracle: F, m1: i64, m2: i64) -> Result<RsaForgery>
where
    F: Fn(i64) -> Result<i64>,
{
    let n = public.n as i128;
    let s1 = oracle(m1)?;
    let s2 = oracle(m2)?;
    let product = |a: i64, b: i64| ((a as i128 * b as i128).rem_euclid(n)) as i64;
    let message = product(m1, m2);
    let signature = product(s1, s2);
    let verifies = rsa::verify_int(message, signature, public)?;
    info!(message, signature, verifies, "textbook rsa forgery");
    Ok(RsaForgery { m1, s1, m2, s2, message, signature, verifies })
}

/// Runs the forgery against a fresh toy key `(p, q, e)` with queries 2 and 3
///
/// # Errors
/// `InvalidKey` when `(p, q, e)` is not a valid toy RSA key
pub fn forge_rsa_textbook_demo(p: i64, q: i64, e: i64) -> Result<RsaForgery> {
    let (public, private) = rsa::keygen(p, q, e)?;
    if public.n <= 6 {
        return Err(CryptoError::InvalidKey(format!(
            "modulus {} too small for queries 2 and 3",
            public.n
        )));
    }
    forge_rsa_textbook(&public, |m| rsa::sign_int(m, &private), 2, 3)
}

/// Tries one uniformly random 64-byte signature on `msg`
///
/// Returns true iff the guess verifies, which for Ed25519 it should not.
pub fn random_ed25519_forgery(verifying: &VerifyingKey, msg: &[u8]) -> bool {
    let mut guess = [0u8; SIGNATURE_LENGTH];
    rand::thread_rng().fill(&mut guess[..]);
    let forged = sig::verify(verifying, msg, &guess);
    info!(forged, "random ed25519 forgery attempt");
    forged
}
