//! Encryption session
//!
//! A [`Session`] owns the keypairs, the RNG and the current message's
//! ciphertext. It moves through `Idle -> Encrypted -> Decrypted`; encrypting a
//! new message from any state starts over at `Encrypted`.

use crate::benchmark::{self, TimingReport, TraditionalBaseline};
use crate::cipher::{CURVE_COUNT, TripleCiphertext, TripleCurveCipher};
use crate::config::SessionConfig;
use crate::elliptic_curve::Point;
use crate::error::{EccError, EccResult};
use crate::keypair::KeyPair;
use num_bigint::BigInt;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Where the current message is in its lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// No message encrypted yet
    Idle,
    /// A ciphertext is held and has not been decrypted
    Encrypted,
    /// The held ciphertext has been decrypted
    Decrypted,
}

pub struct Session {
    config: SessionConfig,
    cipher: TripleCurveCipher,
    keypairs: [KeyPair; CURVE_COUNT],
    baseline: TraditionalBaseline,
    rng: ChaCha20Rng,
    state: SessionState,
    ciphertext: Option<TripleCiphertext>,
    decrypted: Option<[String; CURVE_COUNT]>,
}

impl Session {
    /// Creates a session over the built-in curves and generates its keys
    pub fn new(config: SessionConfig) -> EccResult<Self> {
        Self::with_cipher(config, TripleCurveCipher::standard())
    }

    /// Creates a session over the curves of `cipher`
    ///
    /// The cipher's parallel flag is replaced by `config.parallel`.
    pub fn with_cipher(config: SessionConfig, cipher: TripleCurveCipher) -> EccResult<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        };
        let cipher = cipher.with_parallel(config.parallel);
        let keypairs = cipher.generate_keypairs(&mut rng)?;
        let baseline = TraditionalBaseline::generate(&mut rng)?;

        log::info!(
            "session ready: {} curves, parallel={}, seeded={}",
            CURVE_COUNT,
            config.parallel,
            config.seed.is_some()
        );

        Ok(Self {
            config,
            cipher,
            keypairs,
            baseline,
            rng,
            state: SessionState::Idle,
            ciphertext: None,
            decrypted: None,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn cipher(&self) -> &TripleCurveCipher {
        &self.cipher
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn keypairs(&self) -> &[KeyPair; CURVE_COUNT] {
        &self.keypairs
    }

    pub fn public_keys(&self) -> [Point; CURVE_COUNT] {
        self.keypairs.each_ref().map(|k| k.public_key().clone())
    }

    fn private_keys(&self) -> [BigInt; CURVE_COUNT] {
        self.keypairs.each_ref().map(|k| k.private_key().clone())
    }

    /// Ciphertext of the current message, if any
    pub fn ciphertext(&self) -> Option<&TripleCiphertext> {
        self.ciphertext.as_ref()
    }

    /// Per-curve plaintexts of the current message, once decrypted
    pub fn decrypted(&self) -> Option<&[String; CURVE_COUNT]> {
        self.decrypted.as_ref()
    }

    /// Encrypts `message` under the session's public keys
    ///
    /// On failure the session keeps its previous state and data.
    pub fn encrypt(&mut self, message: &str) -> EccResult<&TripleCiphertext> {
        let public_keys = self.public_keys();
        let ciphertext = self.cipher.encrypt(message, &public_keys, &mut self.rng)?;

        log::debug!(
            "{:?} -> Encrypted ({} characters)",
            self.state,
            ciphertext.char_count()
        );
        self.state = SessionState::Encrypted;
        self.decrypted = None;
        Ok(self.ciphertext.insert(ciphertext))
    }

    /// Decrypts the current ciphertext with the session's private keys
    ///
    /// # Errors
    /// Returns [`EccError::NotYetEncrypted`] while the session is idle.
    pub fn decrypt(&mut self) -> EccResult<&[String; CURVE_COUNT]> {
        let Some(ciphertext) = self.ciphertext.as_ref() else {
            return Err(EccError::NotYetEncrypted);
        };
        let plaintexts = self.cipher.decrypt(ciphertext, &self.private_keys())?;

        log::debug!("{:?} -> Decrypted", self.state);
        self.state = SessionState::Decrypted;
        Ok(self.decrypted.insert(plaintexts))
    }

    /// Times triple-curve encryption of `message` against a single-curve baseline
    ///
    /// Does not touch the held ciphertext or the session state.
    pub fn compare_security(&mut self, message: &str) -> EccResult<TimingReport> {
        let public_keys = self.public_keys();
        benchmark::compare_security(
            &self.cipher,
            &public_keys,
            &self.baseline,
            message,
            self.config.benchmark_runs,
            &mut self.rng,
        )
    }
}
