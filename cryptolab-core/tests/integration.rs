// tests/integration.rs

//! Integration tests for the arithmetic kernel and frequency model.

use cryptolab_core::arith::{egcd, modexp, modinv};
use cryptolab_core::frequency::{chi_square, ENGLISH};
use cryptolab_core::{alphabet, CryptoError, HillKey, Mat2, PeriodicKey};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_egcd_scenario() {
    let (g, x, y) = egcd(99, 78).unwrap();
    assert_eq!(g, 3);
    assert_eq!(99 * x + 78 * y, 3);
}

#[test]
fn test_modinv_property() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..300 {
        let n: i64 = rng.gen_range(1..10_000);
        let a: i64 = rng.gen_range(-50_000..50_000);
        let (g, _, _) = egcd(a, n).unwrap();
        match modinv(a, n) {
            Ok(x) => {
                assert_eq!(g, 1);
                assert_eq!((a * x).rem_euclid(n), 1 % n);
            }
            Err(CryptoError::NotInvertible { .. }) => assert_ne!(g, 1),
            Err(e) => panic!("unexpected error: {}", e),
        }
    }
}

#[test]
fn test_rsa_style_exponent_round_trip() {
    // n = 61 * 53, e = 17, d = e^-1 mod phi
    let n = 61 * 53;
    let phi = 60 * 52;
    let d = modinv(17, phi).unwrap();
    assert_eq!(d, 2753);
    let c = modexp(65, 17, n).unwrap();
    assert_eq!(modexp(c, d, n).unwrap(), 65);
}

#[test]
fn test_random_invertible_matrices() {
    let mut rng = StdRng::seed_from_u64(26);
    let identity = Mat2::new(1, 0, 0, 1);
    let mut seen = 0;
    while seen < 100 {
        let m = Mat2::new(
            rng.gen_range(0..26),
            rng.gen_range(0..26),
            rng.gen_range(0..26),
            rng.gen_range(0..26),
        );
        if let Ok(key) = HillKey::new(m) {
            assert_eq!(key.matrix() * key.inverse(), identity);
            seen += 1;
        } else {
            assert!(!m.is_invertible());
        }
    }
}

#[test]
fn test_clean_then_score() {
    let text = alphabet::clean("It was the best of times, it was the worst of times.");
    let key = PeriodicKey::from_letters("KEY").unwrap();
    let garbled: String = alphabet::to_indices(&text)
        .iter()
        .enumerate()
        .map(|(i, &c)| alphabet::index_letter(c as i64 + key.shift_at(i) as i64))
        .collect();
    assert!(chi_square(&text, &ENGLISH) < chi_square(&garbled, &ENGLISH));
}
