/*
    Copyright Michael Lodder. All Rights Reserved.
    SPDX-License-Identifier: Apache-2.0
*/
use crate::{error::*, Ciphertext, DecryptionKey, EncryptionKey, KeyGenConfig, Plaintext};
use rand::{rngs::OsRng, CryptoRng, RngCore};
use unknown_order::BigNumber;

/// A Paillier instance that owns one key pair.
///
/// Encryption and decryption borrow the instance immutably and can be shared
/// across threads. Replacing the key pair needs exclusive access through
/// [`Cryptosystem::rotate_keys`] and invalidates every ciphertext issued before.
#[derive(Clone, Debug)]
pub struct Cryptosystem {
    config: KeyGenConfig,
    sk: DecryptionKey,
}

impl Cryptosystem {
    /// Create an instance with a fresh 256-bit prime key pair
    pub fn new() -> PaillierResult<Self> {
        Self::with_config(KeyGenConfig::default())
    }

    /// Create an instance generating its key pair with `config`
    pub fn with_config(config: KeyGenConfig) -> PaillierResult<Self> {
        Self::with_config_and_rng(config, &mut OsRng)
    }

    /// Create an instance generating its key pair with `config` and `rng`
    pub fn with_config_and_rng<R>(config: KeyGenConfig, rng: &mut R) -> PaillierResult<Self>
    where
        R: RngCore + CryptoRng,
    {
        let sk = DecryptionKey::random_with_rng(rng, &config)?;
        Ok(Self { config, sk })
    }

    /// Wrap an existing key, later rotations use the default parameters
    pub fn from_decryption_key(sk: DecryptionKey) -> Self {
        Self {
            config: KeyGenConfig::default(),
            sk,
        }
    }

    /// Replace the key pair with a freshly generated one.
    ///
    /// Ciphertexts produced under the previous key no longer decrypt.
    /// If generation fails the current key pair is kept.
    pub fn rotate_keys(&mut self) -> PaillierResult<()> {
        self.rotate_keys_with_rng(&mut OsRng)
    }

    /// Same as [`Cryptosystem::rotate_keys`] drawing primes from `rng`
    pub fn rotate_keys_with_rng<R>(&mut self, rng: &mut R) -> PaillierResult<()>
    where
        R: RngCore + CryptoRng,
    {
        let sk = DecryptionKey::random_with_rng(rng, &self.config)?;
        self.sk = sk;
        tracing::info!(prime_bits = self.config.bits(), "rotated paillier key pair");
        Ok(())
    }

    /// The public modulus N, N^2 is available from [`Cryptosystem::encryption_key`]
    pub fn public_modulus(&self) -> &BigNumber {
        self.sk.n()
    }

    /// The public key needed to encrypt and combine ciphertexts
    pub fn encryption_key(&self) -> &EncryptionKey {
        self.sk.encryption_key()
    }

    /// The secret key
    pub fn decryption_key(&self) -> &DecryptionKey {
        &self.sk
    }

    /// The parameters used for key generation
    pub fn config(&self) -> &KeyGenConfig {
        &self.config
    }

    /// Encrypt `m` in [0, N)
    pub fn encrypt(&self, m: &BigNumber) -> PaillierResult<Ciphertext> {
        self.sk.pk.encrypt(m)
    }

    /// Encrypt `m` in [0, N) drawing the nonce from `rng`
    pub fn encrypt_with_rng<R>(&self, m: &BigNumber, rng: &mut R) -> PaillierResult<Ciphertext>
    where
        R: RngCore + CryptoRng,
    {
        self.sk.pk.encrypt_with_rng(m, rng)
    }

    /// Decrypt `c` in [0, N^2)
    pub fn decrypt(&self, c: &Ciphertext) -> PaillierResult<Plaintext> {
        self.sk.decrypt(c)
    }
}
