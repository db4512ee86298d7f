// src/modes.rs

//! Raw AES block modes: ECB and CTR.
//!
//! Neither mode authenticates anything. ECB maps equal plaintext blocks to
//! equal ciphertext blocks, and CTR turns AES into a keystream that must
//! never be reused under one `(key, nonce)`. Both exist so the misuse
//! attacks have real ciphertext to work on; use `aead` for actual data.

use crate::AES_BLOCK_SIZE;
use aes::cipher::{generic_array::GenericArray, BlockDecrypt, BlockEncrypt, KeyInit, KeyIvInit, StreamCipher};
use aes::{Aes128, Aes192, Aes256};
use cryptolab_core::{CryptoError, Result};
use rand::Rng;

/// CTR nonce (initial counter block) size in bytes
pub const CTR_NONCE_SIZE: usize = AES_BLOCK_SIZE;

type Aes128Ctr = ctr::Ctr128BE<Aes128>;
type Aes192Ctr = ctr::Ctr128BE<Aes192>;
type Aes256Ctr = ctr::Ctr128BE<Aes256>;

fn bad_key_size(n: usize) -> CryptoError {
    CryptoError::InvalidKey(format!("Invalid AES key size: expected 16, 24 or 32, got {}", n))
}

fn check_whole_blocks(data: &[u8]) -> Result<()> {
    if data.len() % AES_BLOCK_SIZE != 0 {
        return Err(CryptoError::Validation(format!(
            "ECB input must be a multiple of {} bytes, got {}",
            AES_BLOCK_SIZE,
            data.len()
        )));
    }
    Ok(())
}

fn ecb_encrypt_with<C: BlockEncrypt + KeyInit>(key: &[u8], data: &mut [u8]) -> Result<()> {
    let cipher = C::new_from_slice(key).map_err(|_| bad_key_size(key.len()))?;
    for block in data.chunks_exact_mut(AES_BLOCK_SIZE) {
        cipher.encrypt_block(GenericArray::from_mut_slice(block));
    }
    Ok(())
}

fn ecb_decrypt_with<C: BlockDecrypt + KeyInit>(key: &[u8], data: &mut [u8]) -> Result<()> {
    let cipher = C::new_from_slice(key).map_err(|_| bad_key_size(key.len()))?;
    for block in data.chunks_exact_mut(AES_BLOCK_SIZE) {
        cipher.decrypt_block(GenericArray::from_mut_slice(block));
    }
    Ok(())
}

/// AES-ECB encryption without padding
///
/// # Errors
/// * `InvalidKey` unless the key is 16, 24 or 32 bytes
/// * `Validation` unless the plaintext is a whole number of blocks
///
/// # Example
/// ```
/// use cryptolab_ciphers::modes::ecb_encrypt;
///
/// let ct = ecb_encrypt(&[7u8; 16], &[b'A'; 32]).unwrap();
/// assert_eq!(ct[..16], ct[16..]);
/// ```
pub fn ecb_encrypt(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    check_whole_blocks(plaintext)?;
    let mut out = plaintext.to_vec();
    match key.len() {
        16 => ecb_encrypt_with::<Aes128>(key, &mut out)?,
        24 => ecb_encrypt_with::<Aes192>(key, &mut out)?,
        32 => ecb_encrypt_with::<Aes256>(key, &mut out)?,
        n => return Err(bad_key_size(n)),
    }
    Ok(out)
}

/// AES-ECB decryption without padding
///
/// # Errors
/// Same as [`ecb_encrypt`]
pub fn ecb_decrypt(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    check_whole_blocks(ciphertext)?;
    let mut out = ciphertext.to_vec();
    match key.len() {
        16 => ecb_decrypt_with::<Aes128>(key, &mut out)?,
        24 => ecb_decrypt_with::<Aes192>(key, &mut out)?,
        32 => ecb_decrypt_with::<Aes256>(key, &mut out)?,
        n => return Err(bad_key_size(n)),
    }
    Ok(out)
}

fn ctr_apply<S: KeyIvInit + StreamCipher>(key: &[u8], nonce: &[u8], data: &mut [u8]) -> Result<()> {
    let mut cipher = S::new_from_slices(key, nonce).map_err(|_| bad_key_size(key.len()))?;
    cipher.apply_keystream(data);
    Ok(())
}

/// Fresh random CTR nonce
pub fn random_nonce() -> [u8; CTR_NONCE_SIZE] {
    let mut nonce = [0u8; CTR_NONCE_SIZE];
    rand::thread_rng().fill(&mut nonce[..]);
    nonce
}

/// AES-CTR with a full 16-byte initial counter block
///
/// The counter is the whole block, incremented big-endian. Encryption and
/// decryption are the same operation.
///
/// # Errors
/// * `InvalidKey` unless the key is 16, 24 or 32 bytes
/// * `Validation` unless the nonce is 16 bytes
pub fn ctr_encrypt(key: &[u8], nonce: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    if nonce.len() != CTR_NONCE_SIZE {
        return Err(CryptoError::Validation(format!(
            "CTR nonce must be {} bytes for AES block size, got {}",
            CTR_NONCE_SIZE,
            nonce.len()
        )));
    }
    let mut out = plaintext.to_vec();
    match key.len() {
        16 => ctr_apply::<Aes128Ctr>(key, nonce, &mut out)?,
        24 => ctr_apply::<Aes192Ctr>(key, nonce, &mut out)?,
        32 => ctr_apply::<Aes256Ctr>(key, nonce, &mut out)?,
        n => return Err(bad_key_size(n)),
    }
    Ok(out)
}

/// Inverse of [`ctr_encrypt`]
pub fn ctr_decrypt(key: &[u8], nonce: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    ctr_encrypt(key, nonce, ciphertext)
}
