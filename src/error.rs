/*
    Copyright Michael Lodder. All Rights Reserved.
    SPDX-License-Identifier: Apache-2.0
*/
use thiserror::Error;

/// Errors produced by the Paillier scheme
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PaillierError {
    /// Prime generation failed or the supplied primes cannot form a key
    #[error("Key generation failed: {0}")]
    KeyGeneration(String),
    /// Invalid key generation parameters
    #[error("Invalid prime size: must be at least {min} bits, got {actual}")]
    InvalidConfig {
        /// The smallest accepted prime size
        min: usize,
        /// The requested prime size
        actual: usize,
    },
    /// Plaintext is not in [0, N)
    #[error("Invalid plaintext, must be in [0, N)")]
    InvalidPlaintext,
    /// Ciphertext is not in [0, N^2) or cannot be decrypted with this key
    #[error("Invalid ciphertext, unable to decrypt")]
    InvalidCiphertext,
    /// Nonce is not a unit mod N
    #[error("Invalid nonce, must be in [1, N) and coprime to N")]
    InvalidNonce,
    /// Homomorphic scalar is not in [0, N)
    #[error("Invalid ciphertext multiply inputs")]
    InvalidScalar,
    /// L(g^lambda mod N^2) is not invertible mod N
    #[error("Invalid decryption key")]
    DecryptionKey,
}

/// Paillier results
pub type PaillierResult<T> = Result<T, PaillierError>;
