/*
    Copyright Michael Lodder. All Rights Reserved.
    SPDX-License-Identifier: Apache-2.0
*/
use crate::error::*;

/// Parameters for generating a Paillier key pair.
///
/// Both primes are drawn with the same bit length, which is what makes the
/// `g = N + 1` generator valid for every generated key.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeyGenConfig {
    prime_bits: usize,
    max_prime_attempts: usize,
}

impl KeyGenConfig {
    /// Default size of each prime, N is twice this
    pub const DEFAULT_PRIME_BITS: usize = 256;
    /// Smallest prime size accepted for generated keys
    pub const MIN_PRIME_BITS: usize = 64;
    /// Default number of prime candidates drawn before giving up
    pub const DEFAULT_MAX_PRIME_ATTEMPTS: usize = 64;

    /// Create a config with default parameters.
    pub fn new() -> Self {
        Self {
            prime_bits: Self::DEFAULT_PRIME_BITS,
            max_prime_attempts: Self::DEFAULT_MAX_PRIME_ATTEMPTS,
        }
    }

    /// Set the bit length of each prime.
    pub fn prime_bits(mut self, bits: usize) -> Self {
        self.prime_bits = bits;
        self
    }

    /// Set how many prime candidates may be drawn per prime,
    /// also bounds the redraws when `p == q`.
    pub fn max_prime_attempts(mut self, attempts: usize) -> Self {
        self.max_prime_attempts = attempts;
        self
    }

    /// The configured bit length of each prime
    pub fn bits(&self) -> usize {
        self.prime_bits
    }

    /// The configured retry budget
    pub fn attempts(&self) -> usize {
        self.max_prime_attempts
    }

    pub(crate) fn validate(&self) -> PaillierResult<()> {
        if self.prime_bits < Self::MIN_PRIME_BITS {
            return Err(PaillierError::InvalidConfig {
                min: Self::MIN_PRIME_BITS,
                actual: self.prime_bits,
            });
        }
        Ok(())
    }
}

impl Default for KeyGenConfig {
    fn default() -> Self {
        Self::new()
    }
}
