// src/runner.rs

//! Runs every walkthrough and collects the results.
//!
//! Each section encrypts with the configured key, then (for the breakable
//! ciphers) attacks the ciphertext and records whether the attack landed.

use crate::config::{CaesarConfig, DemoConfig, DhConfig, HillConfig, PlayfairConfig, RsaConfig, VigenereConfig};
use crate::errors::Result;
use cryptolab_analysis::{
    compress_period, crack_caesar, crack_vigenere, ctr_nonce_reuse, ecb, recover_hill_key, two_time_pad, ufcma,
};
use cryptolab_ciphers::{aead, caesar, dh, hashing, hill, modes, otp, playfair, rsa, sig, vigenere};
use cryptolab_core::alphabet::clean;
use cryptolab_core::{HillKey, Mat2, ShiftKey};
use serde::Serialize;
use tracing::{info, warn};

/// Caesar results
#[derive(Clone, Debug, Serialize)]
pub struct CaesarReport {
    /// Ciphertext under the configured shift
    pub ciphertext: String,
    /// Shift found by the attack
    pub recovered_shift: ShiftKey,
    /// Plaintext found by the attack
    pub recovered_plaintext: String,
    /// Attack matched the configured shift mod 26
    pub success: bool,
}

/// Vigenère results
#[derive(Clone, Debug, Serialize)]
pub struct VigenereReport {
    /// Number of ciphertext letters attacked
    pub letters: usize,
    /// Key found by the attack
    pub recovered_key: String,
    /// Attack matched the configured key after compression
    pub success: bool,
}

/// Hill results
#[derive(Clone, Debug, Serialize)]
pub struct HillReport {
    /// Ciphertext of the configured message
    pub ciphertext: String,
    /// Decryption, including any pad letter
    pub decrypted: String,
    /// Key solved from the two known digraphs
    pub recovered_key: Mat2,
    /// Recovered key is congruent to the configured one
    pub success: bool,
}

/// Playfair results
#[derive(Clone, Debug, Serialize)]
pub struct PlayfairReport {
    /// The 5×5 square, row by row
    pub square: String,
    /// Ciphertext of the configured message
    pub ciphertext: String,
    /// Decryption, fillers kept
    pub decrypted: String,
}

/// Toy RSA results
#[derive(Clone, Debug, Serialize)]
pub struct RsaReport {
    /// Public key
    pub public: rsa::RsaPublicKey,
    /// `message^e mod n`
    pub ciphertext: i64,
    /// Decryption of `ciphertext`
    pub decrypted: i64,
}

/// Toy Diffie-Hellman results
#[derive(Clone, Debug, Serialize)]
pub struct DhReport {
    /// `g^a mod p`
    pub alice_public: i64,
    /// `g^b mod p`
    pub bob_public: i64,
    /// Both sides derived the same secret
    pub agreed: bool,
}

/// Key-reuse and mode-misuse results
#[derive(Clone, Debug, Serialize)]
pub struct MisuseReport {
    /// Fragment of the second message revealed by a crib in the first
    pub two_time_pad_leak: String,
    /// Second message recovered from AES-CTR under a reused nonce
    pub ctr_reuse_leak: String,
    /// AES-ECB ciphertext of a repetitive message shows repeated blocks
    pub ecb_repeats: bool,
    /// AES-CTR ciphertext of the same message shows none
    pub ctr_repeats: bool,
    /// AES-GCM round trip succeeded
    pub aead_round_trip: bool,
    /// AES-GCM rejected a flipped ciphertext bit
    pub aead_rejects_tamper: bool,
    /// BLAKE3 of the Caesar plaintext
    pub blake3: String,
    /// Keccak-256 of the Caesar plaintext
    pub keccak256: String,
}

/// Signature and forgery results
#[derive(Clone, Debug, Serialize)]
pub struct SignatureReport {
    /// Ed25519 public key, hex
    pub ed25519_public: String,
    /// Honest Ed25519 signature verified
    pub ed25519_valid: bool,
    /// Ed25519 rejected a signature with a flipped bit
    pub ed25519_rejects_tamper: bool,
    /// A random 64-byte guess verified (expected false)
    pub ed25519_random_forgery: bool,
    /// Multiplicative forgery against textbook RSA
    pub rsa_forgery: ufcma::RsaForgery,
}

/// Everything the demo produced
#[derive(Clone, Debug, Serialize)]
pub struct DemoReport {
    /// Caesar section
    pub caesar: CaesarReport,
    /// Vigenère section
    pub vigenere: VigenereReport,
    /// Hill section
    pub hill: HillReport,
    /// Playfair section
    pub playfair: PlayfairReport,
    /// RSA section
    pub rsa: RsaReport,
    /// Diffie-Hellman section
    pub dh: DhReport,
    /// Misuse section
    pub misuse: MisuseReport,
    /// Signature section
    pub signatures: SignatureReport,
}

impl DemoReport {
    /// True when every attack recovered its key
    pub fn all_attacks_succeeded(&self) -> bool {
        self.caesar.success && self.vigenere.success && self.hill.success && self.signatures.rsa_forgery.is_existential()
    }
}

/// Runs the Caesar walkthrough
pub fn run_caesar(config: &CaesarConfig) -> Result<CaesarReport> {
    let ciphertext = caesar::encrypt(&config.plaintext, config.shift);
    let (recovered_shift, recovered_plaintext) = crack_caesar(&ciphertext)?;
    let success = recovered_shift == ShiftKey::new(config.shift);
    info!(shift = config.shift, recovered = recovered_shift.value(), success, "caesar");
    Ok(CaesarReport {
        ciphertext,
        recovered_shift,
        recovered_plaintext,
        success,
    })
}

/// Runs the Vigenère walkthrough
pub fn run_vigenere(config: &VigenereConfig) -> Result<VigenereReport> {
    let plaintext = config.plaintext.repeat(config.repeat.max(1));
    let ciphertext = vigenere::encrypt(&plaintext, &config.key)?;
    let (recovered_key, _) = crack_vigenere(&ciphertext)?;
    let success = recovered_key == compress_period(&config.key)?;
    info!(key = %config.key, recovered = %recovered_key, success, "vigenere");
    Ok(VigenereReport {
        letters: ciphertext.len(),
        recovered_key,
        success,
    })
}

/// Runs the Hill walkthrough
pub fn run_hill(config: &HillConfig) -> Result<HillReport> {
    let key = HillKey::new(config.key)?;
    let ciphertext = hill::encrypt(&config.plaintext, &key);
    let decrypted = hill::decrypt(&ciphertext, &key);

    let c1 = hill::encrypt(&config.p1, &key);
    let c2 = hill::encrypt(&config.p2, &key);
    let recovered_key = recover_hill_key(&config.p1, &config.p2, &c1, &c2)?;
    let success = recovered_key.congruent(&config.key);
    info!(key = %config.key, recovered = %recovered_key, success, "hill");
    Ok(HillReport {
        ciphertext,
        decrypted,
        recovered_key,
        success,
    })
}

/// Runs the Playfair walkthrough
pub fn run_playfair(config: &PlayfairConfig) -> Result<PlayfairReport> {
    let square = playfair::Square::new(&config.key)?;
    let ciphertext = playfair::encrypt(&config.plaintext, &config.key)?;
    let decrypted = playfair::decrypt(&ciphertext, &config.key)?;
    info!(key = %config.key, %ciphertext, "playfair");
    Ok(PlayfairReport {
        square: square.as_string(),
        ciphertext,
        decrypted,
    })
}

/// Runs the toy RSA walkthrough
pub fn run_rsa(config: &RsaConfig) -> Result<RsaReport> {
    let (public, private) = rsa::keygen(config.p, config.q, config.e)?;
    let ciphertext = rsa::encrypt_int(config.message, &public)?;
    let decrypted = rsa::decrypt_int(ciphertext, &private)?;
    info!(n = public.n, e = public.e, ciphertext, decrypted, "rsa");
    Ok(RsaReport {
        public,
        ciphertext,
        decrypted,
    })
}

/// Runs the toy Diffie-Hellman walkthrough
pub fn run_dh(config: &DhConfig) -> Result<DhReport> {
    let alice_public = dh::public_from_secret(config.g, config.p, config.a)?;
    let bob_public = dh::public_from_secret(config.g, config.p, config.b)?;
    let alice_shared = dh::shared_secret(bob_public, config.p, config.a)?;
    let bob_shared = dh::shared_secret(alice_public, config.p, config.b)?;
    let agreed = alice_shared == bob_shared;
    info!(alice_public, bob_public, agreed, "diffie-hellman");
    Ok(DhReport {
        alice_public,
        bob_public,
        agreed,
    })
}

/// Runs the key-reuse and mode-misuse walkthrough
///
/// `sample` is hashed and reused as the ECB message.
pub fn run_misuse(sample: &str) -> Result<MisuseReport> {
    let m1 = b"TRANSFER FUNDS AT NOON";
    let m2 = b"THE VAULT CODE IS 4471";
    let pad = otp::Pad::random(m1.len());
    let c1 = otp::encrypt(m1, &pad)?;
    let c2 = otp::encrypt(m2, &pad)?;
    let leak = two_time_pad::recover_with_crib(&c1, &c2, b"TRANSFER", 0)?;
    let two_time_pad_leak = String::from_utf8_lossy(&leak).into_owned();
    info!(leak = %two_time_pad_leak, "two-time pad");

    let block_key = aead::generate_key(16)?;
    let nonce = modes::random_nonce();
    let p1 = b"WIRE 500 TO ACCOUNT 7731 TODAY";
    let p2 = b"MEET AT THE OLD MILL AT MIDNIGHT";
    let r1 = modes::ctr_encrypt(&block_key, &nonce, p1)?;
    let r2 = modes::ctr_encrypt(&block_key, &nonce, p2)?;
    let recovered = ctr_nonce_reuse::recover_with_known_plaintext(&r1, p1, &r2)?;
    let ctr_reuse_leak = String::from_utf8_lossy(&recovered).into_owned();
    info!(leak = %ctr_reuse_leak, "aes-ctr nonce reuse");

    let mut block = clean(sample).into_bytes();
    block.resize(ecb::AES_BLOCK_SIZE, b'X');
    let repeated = block.repeat(4);
    let ecb_ct = modes::ecb_encrypt(&block_key, &repeated)?;
    let ecb_repeats = ecb::has_repeated_blocks(&ecb_ct, ecb::AES_BLOCK_SIZE)?;
    let ctr_ct = modes::ctr_encrypt(&block_key, &nonce, &repeated)?;
    let ctr_repeats = ecb::has_repeated_blocks(&ctr_ct, ecb::AES_BLOCK_SIZE)?;
    info!(ecb_repeats, ctr_repeats, "block modes");

    let key = aead::generate_key(32)?;
    let (nonce, mut ciphertext) = aead::encrypt(&key, sample.as_bytes(), b"cryptolab")?;
    let aead_round_trip = aead::decrypt(&key, &nonce, &ciphertext, b"cryptolab")? == sample.as_bytes();
    if let Some(byte) = ciphertext.first_mut() {
        *byte ^= 1;
    }
    let aead_rejects_tamper = aead::decrypt(&key, &nonce, &ciphertext, b"cryptolab").is_err();
    info!(nonce = %hex::encode(nonce), aead_round_trip, aead_rejects_tamper, "aes-gcm");

    Ok(MisuseReport {
        two_time_pad_leak,
        ctr_reuse_leak,
        ecb_repeats,
        ctr_repeats,
        aead_round_trip,
        aead_rejects_tamper,
        blake3: hashing::blake3_hexdigest(sample.as_bytes()),
        keccak256: hashing::keccak256_hexdigest(sample.as_bytes()),
    })
}

/// Runs the signature walkthrough
///
/// Ed25519 signs `sample`; the RSA forgery reuses the configured toy key.
pub fn run_signatures(config: &RsaConfig, sample: &str) -> Result<SignatureReport> {
    let (signing, verifying) = sig::keygen();
    let mut signature = sig::sign(&signing, sample.as_bytes());
    let ed25519_valid = sig::verify(&verifying, sample.as_bytes(), &signature);
    signature[0] ^= 1;
    let ed25519_rejects_tamper = !sig::verify(&verifying, sample.as_bytes(), &signature);
    let ed25519_random_forgery = ufcma::random_ed25519_forgery(&verifying, sample.as_bytes());
    info!(ed25519_valid, ed25519_rejects_tamper, ed25519_random_forgery, "ed25519");

    let rsa_forgery = ufcma::forge_rsa_textbook_demo(config.p, config.q, config.e)?;
    Ok(SignatureReport {
        ed25519_public: hex::encode(verifying.to_bytes()),
        ed25519_valid,
        ed25519_rejects_tamper,
        ed25519_random_forgery,
        rsa_forgery,
    })
}

/// Runs every walkthrough in order
pub fn run(config: &DemoConfig) -> Result<DemoReport> {
    let report = DemoReport {
        caesar: run_caesar(&config.caesar)?,
        vigenere: run_vigenere(&config.vigenere)?,
        hill: run_hill(&config.hill)?,
        playfair: run_playfair(&config.playfair)?,
        rsa: run_rsa(&config.rsa)?,
        dh: run_dh(&config.dh)?,
        misuse: run_misuse(&config.caesar.plaintext)?,
        signatures: run_signatures(&config.rsa, &config.caesar.plaintext)?,
    };
    if !report.all_attacks_succeeded() {
        warn!("at least one attack did not recover its key; try a longer sample");
    }
    Ok(report)
}
