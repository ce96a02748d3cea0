/*
    Copyright Michael Lodder. All Rights Reserved.
    SPDX-License-Identifier: Apache-2.0
*/
//! The arbitrary precision integer operations the scheme is built from.
//!
//! Everything here is a thin layer over [`BigNumber`] so the key types only
//! ever talk to one interface, whichever `unknown_order` backend is enabled.

use crate::{error::*, utils::mod_in};
use rand::{CryptoRng, RngCore};
use unknown_order::BigNumber;

/// Draw a probable prime of exactly `bit_length` bits.
///
/// Candidates that fail the primality test or come back with the wrong size
/// are discarded. After `max_attempts` discarded candidates this gives up.
pub fn generate_probable_prime<R>(
    rng: &mut R,
    bit_length: usize,
    max_attempts: usize,
) -> PaillierResult<BigNumber>
where
    R: RngCore + CryptoRng,
{
    for attempt in 1..=max_attempts {
        let candidate = BigNumber::prime_from_rng(bit_length, &mut *rng);
        if candidate.bit_length() == bit_length && candidate.is_prime() {
            return Ok(candidate);
        }
        tracing::debug!(attempt, bit_length, "discarding prime candidate");
    }
    Err(PaillierError::KeyGeneration(format!(
        "no {}-bit prime after {} attempts",
        bit_length, max_attempts
    )))
}

/// base^exponent mod modulus
pub fn mod_pow(base: &BigNumber, exponent: &BigNumber, modulus: &BigNumber) -> BigNumber {
    base.modpow(exponent, modulus)
}

/// value^-1 mod modulus, `None` when gcd(value, modulus) != 1
pub fn mod_inverse(value: &BigNumber, modulus: &BigNumber) -> Option<BigNumber> {
    value.invert(modulus)
}

/// Greatest common divisor
pub fn gcd(a: &BigNumber, b: &BigNumber) -> BigNumber {
    a.gcd(b)
}

/// Least common multiple
pub fn lcm(a: &BigNumber, b: &BigNumber) -> BigNumber {
    a.lcm(b)
}

/// Sample uniformly from [1, modulus) until the value is coprime to `modulus`.
///
/// `modulus` must be greater than 1.
pub fn sample_coprime<R>(rng: &mut R, modulus: &BigNumber) -> BigNumber
where
    R: RngCore + CryptoRng,
{
    debug_assert!(modulus > &BigNumber::one());
    let one = BigNumber::one();
    loop {
        let r = BigNumber::from_rng(modulus, &mut *rng);
        if mod_in(&r, modulus) && gcd(&r, modulus) == one {
            return r;
        }
    }
}
