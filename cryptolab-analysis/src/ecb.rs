// src/ecb.rs

//! ECB pattern leakage.
//!
//! ECB encrypts equal plaintext blocks to equal ciphertext blocks, so a
//! repeated block in the ciphertext betrays structure in the plaintext.

use cryptolab_core::{CryptoError, Result};
use std::collections::HashSet;

pub use cryptolab_ciphers::AES_BLOCK_SIZE;

/// Number of blocks that duplicate an earlier block
///
/// A trailing partial block counts as a block of its own.
///
/// # Errors
/// `Validation` for a zero block size
pub fn repeated_block_count(ciphertext: &[u8], block: usize) -> Result<usize> {
    if block == 0 {
        return Err(CryptoError::Validation("block size must be positive".to_string()));
    }
    let mut seen = HashSet::new();
    Ok(ciphertext.chunks(block).filter(|b| !seen.insert(*b)).count())
}

/// True iff any two blocks of `ciphertext` are identical
///
/// # Example
/// ```
/// use cryptolab_analysis::ecb::has_repeated_blocks;
///
/// let ct = [[0xAB; 16], [0x01; 16], [0xAB; 16]].concat();
/// assert!(has_repeated_blocks(&ct, 16).unwrap());
/// ```
pub fn has_repeated_blocks(ciphertext: &[u8], block: usize) -> Result<bool> {
    Ok(repeated_block_count(ciphertext, block)? > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cryptolab_ciphers::modes::{ctr_encrypt, ecb_encrypt};

    #[test]
    fn test_aes_ecb_of_repeated_plaintext() {
        let pt = [b'A'; AES_BLOCK_SIZE * 4];
        let ct = ecb_encrypt(&[0x42; 16], &pt).unwrap();
        assert!(has_repeated_blocks(&ct, AES_BLOCK_SIZE).unwrap());
        assert_eq!(repeated_block_count(&ct, AES_BLOCK_SIZE).unwrap(), 3);
    }

    #[test]
    fn test_aes_ctr_hides_repeats() {
        let pt = [b'A'; AES_BLOCK_SIZE * 4];
        let ct = ctr_encrypt(&[0x42; 16], &[0u8; 16], &pt).unwrap();
        assert!(!has_repeated_blocks(&ct, AES_BLOCK_SIZE).unwrap());
    }

    #[test]
    fn test_detects_repeats() {
        let ct = [0x41u8; AES_BLOCK_SIZE * 4];
        assert!(has_repeated_blocks(&ct, AES_BLOCK_SIZE).unwrap());
        assert_eq!(repeated_block_count(&ct, AES_BLOCK_SIZE).unwrap(), 3);
    }

    #[test]
    fn test_distinct_blocks() {
        let ct: Vec<u8> = (0..64u8).collect();
        assert!(!has_repeated_blocks(&ct, AES_BLOCK_SIZE).unwrap());
        assert!(!has_repeated_blocks(&[], AES_BLOCK_SIZE).unwrap());
    }

    #[test]
    fn test_partial_tail_block() {
        // 0..16 then a 4-byte tail that matches no full block
        let mut ct: Vec<u8> = (0..16u8).collect();
        ct.extend_from_slice(&[0, 1, 2, 3]);
        assert!(!has_repeated_blocks(&ct, AES_BLOCK_SIZE).unwrap());
    }

    #[test]
    fn test_zero_block_size() {
        assert!(has_repeated_blocks(b"abc", 0).is_err());
    }
}
