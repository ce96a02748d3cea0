/*
    Copyright Michael Lodder. All Rights Reserved.
    SPDX-License-Identifier: Apache-2.0
*/
use crate::{arith, error::*, utils::*, Ciphertext, DecryptionKey, Nonce};
use rand::{rngs::OsRng, CryptoRng, RngCore};
use unknown_order::BigNumber;

/// A Paillier encryption key
#[derive(Clone, Debug, PartialEq)]
pub struct EncryptionKey {
    pub(crate) n: BigNumber,  // N = p * q, where p,q are primes
    pub(crate) nn: BigNumber, // N^2
}

impl From<&DecryptionKey> for EncryptionKey {
    fn from(sk: &DecryptionKey) -> EncryptionKey {
        sk.pk.clone()
    }
}

impl EncryptionKey {
    pub(crate) fn with_modulus(n: BigNumber) -> Self {
        let nn = &n * &n;
        Self { n, nn }
    }

    /// l computes a residuosity class of N^2: (x - 1) / n
    /// where it is the quotient x - 1 divided by N not modular multiplication of x - 1 times
    /// the modular multiplication inverse of N. The function comes from Paillier's 99 paper.
    pub(crate) fn l(&self, x: &BigNumber) -> Option<BigNumber> {
        let one = BigNumber::one();
        // Ensure x = 1 mod N
        if x % &self.n != one {
            return None;
        }

        // Ensure x \in [1..N^2]
        if !mod_in(x, &self.nn) {
            return None;
        }

        //(x - 1) / N
        Some((x - &one) / &self.n)
    }

    /// Encrypt `m` using a fresh nonce from the operating system's CSPRNG.
    /// `m` must be in [0, N)
    pub fn encrypt(&self, m: &BigNumber) -> PaillierResult<Ciphertext> {
        self.encrypt_with_rng(m, &mut OsRng)
    }

    /// Encrypt `m` drawing the nonce from `rng`.
    /// `m` must be in [0, N)
    pub fn encrypt_with_rng<R>(&self, m: &BigNumber, rng: &mut R) -> PaillierResult<Ciphertext>
    where
        R: RngCore + CryptoRng,
    {
        if !residue_in(m, &self.n) {
            return Err(PaillierError::InvalidPlaintext);
        }
        let r = arith::sample_coprime(rng, &self.n);
        Ok(self.encrypt_unchecked(m, &r))
    }

    /// Encrypt `m` with a caller chosen nonce. The same `m` and `r`
    /// always produce the same ciphertext.
    /// `m` must be in [0, N) and `r` a unit in [1, N)
    pub fn encrypt_with_nonce(&self, m: &BigNumber, r: &Nonce) -> PaillierResult<Ciphertext> {
        if !residue_in(m, &self.n) {
            return Err(PaillierError::InvalidPlaintext);
        }
        if !mod_in(r, &self.n) || arith::gcd(r, &self.n) != BigNumber::one() {
            return Err(PaillierError::InvalidNonce);
        }
        Ok(self.encrypt_unchecked(m, r))
    }

    pub(crate) fn encrypt_unchecked(&self, m: &BigNumber, r: &Nonce) -> Ciphertext {
        debug_assert!(mod_in(r, &self.n));

        // g^m mod N^2 = (N + 1)^m mod N^2 = m N + 1 mod N^2
        // See Prop 11.26, Pg. 385 of Intro to Modern Cryptography
        let g_m = m
            .modmul(&self.n, &self.nn)
            .modadd(&BigNumber::one(), &self.nn);

        // r^N mod N^2
        let r_n = arith::mod_pow(r, &self.n, &self.nn);

        // c = g^m r^n mod N^2
        g_m.modmul(&r_n, &self.nn)
    }

    /// Combines two Paillier ciphertexts
    /// commonly denoted in text as c1 \bigoplus c2.
    /// The result decrypts to m1 + m2 mod N
    pub fn add(&self, c1: &Ciphertext, c2: &Ciphertext) -> PaillierResult<Ciphertext> {
        let c1_check = residue_in(c1, &self.nn);
        let c2_check = residue_in(c2, &self.nn);
        if !c1_check | !c2_check {
            return Err(PaillierError::InvalidCiphertext);
        }

        Ok(c1.modmul(c2, &self.nn))
    }

    /// Raises a ciphertext to a public scalar.
    /// The result decrypts to m * k mod N
    pub fn mul(&self, c: &Ciphertext, k: &BigNumber) -> PaillierResult<Ciphertext> {
        if !residue_in(c, &self.nn) {
            return Err(PaillierError::InvalidCiphertext);
        }
        if !residue_in(k, &self.n) {
            return Err(PaillierError::InvalidScalar);
        }

        Ok(arith::mod_pow(c, k, &self.nn))
    }

    /// The Paillier modulus
    pub fn n(&self) -> &BigNumber {
        &self.n
    }

    /// The Paillier modulus squared
    pub fn nn(&self) -> &BigNumber {
        &self.nn
    }

    /// The generator, always N + 1
    pub fn g(&self) -> BigNumber {
        &self.n + 1
    }
}
