// src/hashing.rs

//! Hex digests for quick integrity checks in demos.

use sha3::{Digest, Keccak256};

/// BLAKE3 digest as 64 lowercase hex characters
///
/// # Example
/// ```
/// use cryptolab_ciphers::hashing::blake3_hexdigest;
///
/// assert_eq!(blake3_hexdigest(b"abc").len(), 64);
/// ```
pub fn blake3_hexdigest(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Keccak-256 digest as 64 lowercase hex characters
pub fn keccak256_hexdigest(data: &[u8]) -> String {
    hex::encode(Keccak256::digest(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keccak_empty_vector() {
        assert_eq!(
            keccak256_hexdigest(b""),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_blake3_empty_vector() {
        assert_eq!(
            blake3_hexdigest(b""),
            "af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262"
        );
    }

    #[test]
    fn test_digests_differ() {
        assert_ne!(blake3_hexdigest(b"data1"), blake3_hexdigest(b"data2"));
        assert_ne!(blake3_hexdigest(b"same"), keccak256_hexdigest(b"same"));
    }
}
