// src/sig.rs

//! Ed25519 signatures.
//!
//! Keygen, sign and verify over `ed25519-dalek`. Verification never errors:
//! malformed or wrong signatures simply fail to verify.

use ed25519_dalek::{Signature, Signer, Verifier};
use rand::Rng;
use zeroize::Zeroize;

pub use ed25519_dalek::{SigningKey, VerifyingKey, SIGNATURE_LENGTH};

/// Generates a fresh key pair from a random seed
pub fn keygen() -> (SigningKey, VerifyingKey) {
    let mut seed: [u8; 32] = rand::thread_rng().gen();
    let keys = keypair_from_seed(&seed);
    seed.zeroize();
    keys
}

/// Derives the key pair for a 32-byte secret seed
pub fn keypair_from_seed(seed: &[u8; 32]) -> (SigningKey, VerifyingKey) {
    let signing = SigningKey::from_bytes(seed);
    let verifying = signing.verifying_key();
    (signing, verifying)
}

/// Signature bytes for `msg`
pub fn sign(signing: &SigningKey, msg: &[u8]) -> [u8; SIGNATURE_LENGTH] {
    signing.sign(msg).to_bytes()
}

/// True iff `sig` is a valid signature on `msg` under `verifying`
///
/// # Example
/// ```
/// use cryptolab_ciphers::sig::{keygen, sign, verify};
///
/// let (sk, pk) = keygen();
/// let sig = sign(&sk, b"hello world");
/// assert!(verify(&pk, b"hello world", &sig));
/// assert!(!verify(&pk, b"hello world!", &sig));
/// ```
pub fn verify(verifying: &VerifyingKey, msg: &[u8], sig: &[u8]) -> bool {
    Signature::from_slice(sig)
        .map(|s| verifying.verify(msg, &s).is_ok())
        .unwrap_or(false)
}
