// src/playfair.rs

//! Playfair digraph cipher on a 5×5 square (I and J merged).

use cryptolab_core::alphabet::clean;
use cryptolab_core::{CryptoError, Result};
use std::collections::HashMap;

/// The 25-letter Playfair alphabet (no J)
const SQUARE_ALPHABET: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";

const FILLER: char = 'X';

/// A keyed 5×5 Playfair square, row-major
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Square {
    letters: Vec<char>,
    positions: HashMap<char, (usize, usize)>,
}

impl Square {
    /// Builds the square: key letters first (deduplicated, J→I), then the rest
    ///
    /// # Errors
    /// `Validation` when the key has no `A`–`Z` letters
    pub fn new(key: &str) -> Result<Self> {
        let key = normalize(key);
        if key.is_empty() {
            return Err(CryptoError::Validation(
                "Playfair key must contain at least one A-Z letter".to_string(),
            ));
        }
        let mut letters = Vec::with_capacity(25);
        for ch in key.chars().chain(SQUARE_ALPHABET.chars()) {
            if !letters.contains(&ch) {
                letters.push(ch);
            }
        }
        let positions = letters
            .iter()
            .enumerate()
            .map(|(i, &ch)| (ch, (i / 5, i % 5)))
            .collect();
        Ok(Self { letters, positions })
    }

    /// Row-major square as a 25-character string
    pub fn as_string(&self) -> String {
        self.letters.iter().collect()
    }

    fn at(&self, row: usize, col: usize) -> char {
        self.letters[(row % 5) * 5 + (col % 5)]
    }

    fn locate(&self, ch: char) -> (usize, usize) {
        // every normalized letter is in the square
        self.positions.get(&ch).copied().unwrap_or((0, 0))
    }

    /// Applies the Playfair rules to one digraph; `step` is 1 to encrypt
    /// and 4 (i.e. -1 mod 5) to decrypt
    fn substitute(&self, a: char, b: char, step: usize) -> [char; 2] {
        let (ra, ca) = self.locate(a);
        let (rb, cb) = self.locate(b);
        if ra == rb {
            [self.at(ra, ca + step), self.at(rb, cb + step)]
        } else if ca == cb {
            [self.at(ra + step, ca), self.at(rb + step, cb)]
        } else {
            [self.at(ra, cb), self.at(rb, ca)]
        }
    }
}

fn normalize(text: &str) -> String {
    clean(text).replace('J', "I")
}

/// Splits text into digraphs: A–Z only, J→I, `X` between doubled letters,
/// trailing single padded with `X`
///
/// # Example
/// ```
/// use cryptolab_ciphers::playfair::prepare_pairs;
///
/// let joined: String = prepare_pairs("BALLOON").iter().flat_map(|p| p.iter()).collect();
/// assert_eq!(joined, "BALXLOON");
/// ```
pub fn prepare_pairs(text: &str) -> Vec<[char; 2]> {
    let s: Vec<char> = normalize(text).chars().collect();
    let mut pairs = Vec::with_capacity(s.len() / 2 + 1);
    let mut i = 0;
    while i < s.len() {
        let a = s[i];
        match s.get(i + 1) {
            None => {
                pairs.push([a, FILLER]);
                i += 1;
            }
            Some(&b) if b == a => {
                pairs.push([a, FILLER]);
                i += 1;
            }
            Some(&b) => {
                pairs.push([a, b]);
                i += 2;
            }
        }
    }
    pairs
}

/// Encrypts: same row → right, same column → down, rectangle → swap columns
///
/// # Errors
/// `Validation` when the key has no letters
pub fn encrypt(plaintext: &str, key: &str) -> Result<String> {
    let square = Square::new(key)?;
    Ok(prepare_pairs(plaintext)
        .into_iter()
        .flat_map(|[a, b]| square.substitute(a, b, 1))
        .collect())
}

/// Decrypts: same row → left, same column → up, rectangle → swap columns
///
/// Inserted fillers are kept in the output.
///
/// # Errors
/// `Validation` when the key has no letters
pub fn decrypt(ciphertext: &str, key: &str) -> Result<String> {
    let square = Square::new(key)?;
    let mut s: Vec<char> = normalize(ciphertext).chars().collect();
    if s.len() % 2 == 1 {
        s.push(FILLER);
    }
    Ok(s.chunks_exact(2)
        .flat_map(|pair| square.substitute(pair[0], pair[1], 4))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(pairs: &[[char; 2]]) -> String {
        pairs.iter().flat_map(|p| p.iter()).collect()
    }

    #[test]
    fn test_build_square_has_25_unique_no_j() {
        let sq = Square::new("MONARCHY").unwrap().as_string();
        assert_eq!(sq.len(), 25);
        assert!(sq.starts_with("MONARCHYB"));
        assert!(!sq.contains('J'));
        let mut letters: Vec<char> = sq.chars().collect();
        letters.sort_unstable();
        letters.dedup();
        assert_eq!(letters.len(), 25);
    }

    #[test]
    fn test_prepare_pairs_inserts_x_and_pads() {
        assert_eq!(joined(&prepare_pairs("BALLOON")), "BALXLOON");
        assert_eq!(joined(&prepare_pairs("HELLO")), "HELXLO");
        assert_eq!(joined(&prepare_pairs("JAM")), "IAMX");
    }

    #[test]
    fn test_known_vector() {
        // classic MONARCHY example
        assert_eq!(encrypt("instruments", "monarchy").unwrap(), "GATLMZCLRQXA");
    }

    #[test]
    fn test_round_trip_keeps_inserted_x() {
        let msg = "Hide the gold in the tree stump";
        let c = encrypt(msg, "MONARCHY").unwrap();
        assert_eq!(decrypt(&c, "MONARCHY").unwrap(), joined(&prepare_pairs(msg)));
    }

    #[test]
    fn test_symmetry_many() {
        let key = "PLAYFAIREXAMPLE";
        for m in ["ATTACKATDAWN", "BALLOON", "MEETMEATNINE", "X", "ABC", "JIGSAW PUZZLE!!"] {
            let c = encrypt(m, key).unwrap();
            assert_eq!(decrypt(&c, key).unwrap(), joined(&prepare_pairs(m)));
        }
    }

    #[test]
    fn test_empty_key() {
        assert!(matches!(encrypt("HELLO", ""), Err(CryptoError::Validation(_))));
    }
}
