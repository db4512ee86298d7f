// src/two_time_pad.rs

//! Keystream reuse attacks.
//!
//! Encrypting two messages with the same pad (or the same CTR key and
//! nonce) gives `c1 ⊕ c2 = m1 ⊕ m2`: the key cancels out. A guessed
//! fragment of one message then reveals the other at the same offset.

use cryptolab_ciphers::otp::xor_bytes;
use cryptolab_core::{CryptoError, Result};

/// `c1 ⊕ c2`, which equals `m1 ⊕ m2` under a reused pad
pub fn c1_xor_c2(c1: &[u8], c2: &[u8]) -> Result<Vec<u8>> {
    xor_bytes(c1, c2)
}

/// Recovers the segment of `m2` at `pos` given the matching segment of `m1`
///
/// # Errors
/// `Validation` when the ciphertext lengths differ or the crib runs past
/// the end of the ciphertexts
pub fn recover_with_crib(c1: &[u8], c2: &[u8], crib: &[u8], pos: usize) -> Result<Vec<u8>> {
    let x = c1_xor_c2(c1, c2)?;
    let window = pos
        .checked_add(crib.len())
        .and_then(|end| x.get(pos..end))
        .ok_or_else(|| {
            CryptoError::Validation(format!(
                "crib of {} bytes at {} exceeds ciphertext length {}",
                crib.len(),
                pos,
                x.len()
            ))
        })?;
    xor_bytes(window, crib)
}

/// Slides `crib` across every offset and keeps the printable-ASCII hits
///
/// Each hit is `(offset, fragment of the other message)`.
pub fn drag_crib(c1: &[u8], c2: &[u8], crib: &[u8]) -> Result<Vec<(usize, Vec<u8>)>> {
    let x = c1_xor_c2(c1, c2)?;
    if crib.is_empty() || crib.len() > x.len() {
        return Ok(Vec::new());
    }
    Ok(x.windows(crib.len())
        .enumerate()
        .filter_map(|(pos, window)| {
            let fragment: Vec<u8> = window.iter().zip(crib).map(|(a, b)| a ^ b).collect();
            let printable = fragment.iter().all(|b| b.is_ascii_graphic() || *b == b' ');
            printable.then_some((pos, fragment))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cryptolab_ciphers::otp::{encrypt, Pad};

    #[test]
    fn test_xor_cancels_pad() {
        let m1 = b"ATTACK AT DAWN";
        let m2 = b"ATTACK AT DUSK";
        let pad = Pad::random(m1.len());
        let c1 = encrypt(m1, &pad).unwrap();
        let c2 = encrypt(m2, &pad).unwrap();
        assert_eq!(c1_xor_c2(&c1, &c2).unwrap(), xor_bytes(m1, m2).unwrap());
    }

    #[test]
    fn test_crib_recovers_other_message() {
        let m1 = b"MEET AT THE OLD MILL";
        let m2 = b"BRING THE GOLD COINS";
        let pad = Pad::random(m1.len());
        let c1 = encrypt(m1, &pad).unwrap();
        let c2 = encrypt(m2, &pad).unwrap();
        assert_eq!(recover_with_crib(&c1, &c2, b"THE OLD", 8).unwrap(), b"E GOLD ");
    }

    #[test]
    fn test_crib_out_of_range() {
        let c = [0u8; 4];
        assert!(recover_with_crib(&c, &c, b"ABC", 2).is_err());
        assert!(recover_with_crib(&c, &c, b"A", usize::MAX).is_err());
        assert!(recover_with_crib(&c, &[0u8; 3], b"A", 0).is_err());
    }

    #[test]
    fn test_drag_crib_finds_true_offset() {
        let m1 = b"SEND MORE TROOPS TO THE RIVER";
        let m2 = b"WE HOLD THE BRIDGE UNTIL DUSK";
        let pad = Pad::random(m1.len());
        let c1 = encrypt(m1, &pad).unwrap();
        let c2 = encrypt(m2, &pad).unwrap();
        let hits = drag_crib(&c1, &c2, b"TROOPS").unwrap();
        assert!(hits.iter().any(|(pos, frag)| *pos == 10 && frag == b"E BRID"));
    }
}
