// src/config.rs

//! Demo configuration.

use crate::errors::{DemoError, Result};
use cryptolab_core::Mat2;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete demo configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Caesar walkthrough
    pub caesar: CaesarConfig,

    /// Vigenère walkthrough
    pub vigenere: VigenereConfig,

    /// Hill walkthrough
    pub hill: HillConfig,

    /// Playfair walkthrough
    pub playfair: PlayfairConfig,

    /// Toy RSA walkthrough
    pub rsa: RsaConfig,

    /// Toy Diffie-Hellman walkthrough
    pub dh: DhConfig,

    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
}

/// Caesar configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaesarConfig {
    /// Message to encrypt
    pub plaintext: String,

    /// Shift, any integer
    pub shift: i64,
}

/// Vigenère configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VigenereConfig {
    /// Message to encrypt
    pub plaintext: String,

    /// Letter key
    pub key: String,

    /// How many copies of `plaintext` to encrypt
    pub repeat: usize,
}

/// Hill configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HillConfig {
    /// Key matrix, row-major
    pub key: Mat2,

    /// Message to encrypt
    pub plaintext: String,

    /// First known plaintext digraph
    pub p1: String,

    /// Second known plaintext digraph
    pub p2: String,
}

/// Playfair configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayfairConfig {
    /// Keyword for the square
    pub key: String,

    /// Message to encrypt
    pub plaintext: String,
}

/// Toy RSA configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RsaConfig {
    /// First prime
    pub p: i64,

    /// Second prime
    pub q: i64,

    /// Public exponent
    pub e: i64,

    /// Integer message, `0 <= message < p*q`
    pub message: i64,
}

/// Toy Diffie-Hellman configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DhConfig {
    /// Prime modulus
    pub p: i64,

    /// Generator
    pub g: i64,

    /// Alice's secret
    pub a: i64,

    /// Bob's secret
    pub b: i64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            caesar: CaesarConfig {
                plaintext: "The quick brown fox jumps over the lazy dog.".to_string(),
                shift: 19,
            },
            vigenere: VigenereConfig {
                plaintext: "Alice was beginning to get very tired of sitting by her sister on the bank, \
                    and of having nothing to do: once or twice she had peeped into the book her \
                    sister was reading, but it had no pictures or conversations in it, 'and what \
                    is the use of a book,' thought Alice 'without pictures or conversation?' "
                    .to_string(),
                key: "MAGNUM".to_string(),
                repeat: 3,
            },
            hill: HillConfig {
                key: Mat2::new(3, 3, 2, 5),
                plaintext: "SECRETMESSAGE".to_string(),
                p1: "HE".to_string(),
                p2: "LP".to_string(),
            },
            playfair: PlayfairConfig {
                key: "MONARCHY".to_string(),
                plaintext: "Hide the gold in the tree stump".to_string(),
            },
            rsa: RsaConfig {
                p: 61,
                q: 53,
                e: 17,
                message: 65,
            },
            dh: DhConfig {
                p: 23,
                g: 5,
                a: 6,
                b: 15,
            },
            log_level: "info".to_string(),
        }
    }
}

impl DemoConfig {
    /// Loads configuration from file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents)
            .map_err(|e| DemoError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Saves configuration to file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
