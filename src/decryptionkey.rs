/*
    Copyright Michael Lodder. All Rights Reserved.
    SPDX-License-Identifier: Apache-2.0
*/
use crate::{arith, error::*, utils::*, Ciphertext, EncryptionKey, KeyGenConfig, Plaintext};
use core::fmt::{self, Debug, Formatter};
use rand::{rngs::OsRng, CryptoRng, RngCore};
use unknown_order::BigNumber;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A Paillier decryption key
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DecryptionKey {
    #[zeroize(skip)]
    pub(crate) pk: EncryptionKey,
    /// The prime `p`
    pub(crate) p: BigNumber,
    /// The prime `q`
    pub(crate) q: BigNumber,
    /// lcm(P - 1, Q - 1)
    pub(crate) lambda: BigNumber,
    /// L((N + 1)^lambda mod N^2)-1 mod N
    pub(crate) u: BigNumber,
}

impl Debug for DecryptionKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecryptionKey")
            .field("pk", &self.pk)
            .finish_non_exhaustive()
    }
}

impl DecryptionKey {
    /// Create a new random key with the default parameters
    pub fn random() -> PaillierResult<Self> {
        Self::random_with_rng(&mut OsRng, &KeyGenConfig::default())
    }

    /// Create a new random key drawing primes from `rng`
    pub fn random_with_rng<R>(rng: &mut R, config: &KeyGenConfig) -> PaillierResult<Self>
    where
        R: RngCore + CryptoRng,
    {
        config.validate()?;
        tracing::debug!(prime_bits = config.bits(), "generating paillier key");

        for _ in 0..config.attempts() {
            let mut p = arith::generate_probable_prime(rng, config.bits(), config.attempts())?;
            let mut q = arith::generate_probable_prime(rng, config.bits(), config.attempts())?;
            if p == q {
                tracing::debug!("p == q, drawing new primes");
                p.zeroize();
                q.zeroize();
                continue;
            }
            let res = Self::with_primes_unchecked(&p, &q);
            // Make sure the primes are zero'd
            p.zeroize();
            q.zeroize();
            return res;
        }
        Err(PaillierError::KeyGeneration(format!(
            "no distinct primes after {} attempts",
            config.attempts()
        )))
    }

    /// Create a new key from two primes.
    /// `p` and `q` are checked if prime
    pub fn with_primes(p: &BigNumber, q: &BigNumber) -> PaillierResult<Self> {
        if !p.is_prime() || !q.is_prime() {
            return Err(PaillierError::KeyGeneration(
                "p and q must be prime".to_string(),
            ));
        }
        Self::with_primes_unchecked(p, q)
    }

    /// Create a new key from two primes,
    /// `p` and `q` are not checked to see if they are prime
    #[allow(clippy::many_single_char_names)]
    pub fn with_primes_unchecked(p: &BigNumber, q: &BigNumber) -> PaillierResult<Self> {
        // Paillier doesn't work if p == q
        if p == q {
            return Err(PaillierError::KeyGeneration(
                "p and q must be distinct".to_string(),
            ));
        }
        let pm1: BigNumber = p - 1;
        let qm1: BigNumber = q - 1;
        let n = p * q;
        let totient = &pm1 * &qm1;

        // g = N + 1 only generates the N-th residue classes when gcd(N, totient) = 1,
        // which always holds for primes of equal length
        if arith::gcd(&n, &totient) != BigNumber::one() {
            return Err(PaillierError::KeyGeneration(
                "gcd(N, (p - 1)(q - 1)) != 1".to_string(),
            ));
        }
        let lambda = arith::lcm(&pm1, &qm1);
        if lambda.is_zero() {
            return Err(PaillierError::KeyGeneration("lambda is zero".to_string()));
        }

        let pk = EncryptionKey::with_modulus(n);

        // (N+1)^lambda mod N^2
        let tt = arith::mod_pow(&pk.g(), &lambda, &pk.nn);

        // L((N+1)^lambda mod N^2)^-1 mod N
        let u = pk
            .l(&tt)
            .and_then(|l| arith::mod_inverse(&l, &pk.n))
            .ok_or(PaillierError::DecryptionKey)?;

        Ok(DecryptionKey {
            pk,
            p: p.clone(),
            q: q.clone(),
            lambda,
            u,
        })
    }

    /// Reverse ciphertext to plaintext
    pub fn decrypt(&self, c: &Ciphertext) -> PaillierResult<Plaintext> {
        if !residue_in(c, &self.pk.nn) {
            return Err(PaillierError::InvalidCiphertext);
        }

        // a = c^\lambda mod n^2
        let a = arith::mod_pow(c, &self.lambda, &self.pk.nn);
        // ell = L(a, N), undefined unless c is a unit mod N
        let l = self.pk.l(&a).ok_or(PaillierError::InvalidCiphertext)?;
        // m = lu = L(a)*u = L(c^\lamba*)u mod n
        Ok(l.modmul(&self.u, &self.pk.n))
    }

    /// The public half of this key
    pub fn encryption_key(&self) -> &EncryptionKey {
        &self.pk
    }

    /// The Paillier modulus
    pub fn n(&self) -> &BigNumber {
        self.pk.n()
    }

    /// The Paillier `lambda`
    pub fn lambda(&self) -> &BigNumber {
        &self.lambda
    }

    /// The Paillier `u`
    pub fn u(&self) -> &BigNumber {
        &self.u
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn toy() -> DecryptionKey {
        DecryptionKey::with_primes(&BigNumber::from(7), &BigNumber::from(11)).unwrap()
    }

    #[test]
    fn toy_parameters() {
        let sk = toy();
        assert_eq!(sk.n(), &BigNumber::from(77));
        assert_eq!(sk.encryption_key().nn(), &BigNumber::from(5929));
        assert_eq!(sk.encryption_key().g(), BigNumber::from(78));
        assert_eq!(sk.lambda(), &BigNumber::from(30));
        assert_eq!(sk.u(), &BigNumber::from(18));
    }

    #[test]
    fn toy_round_trip_all_plaintexts() {
        let sk = toy();
        let pk = EncryptionKey::from(&sk);
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        for m in 0..77 {
            let m = BigNumber::from(m);
            let c = pk.encrypt_with_rng(&m, &mut rng).unwrap();
            assert_eq!(sk.decrypt(&c).unwrap(), m);
        }
    }

    #[test]
    fn rejects_bad_primes() {
        let seven = BigNumber::from(7);
        assert!(matches!(
            DecryptionKey::with_primes(&seven, &seven),
            Err(PaillierError::KeyGeneration(_))
        ));
        assert!(matches!(
            DecryptionKey::with_primes(&BigNumber::from(8), &BigNumber::from(11)),
            Err(PaillierError::KeyGeneration(_))
        ));
        // N = 21, (p - 1)(q - 1) = 12
        assert!(matches!(
            DecryptionKey::with_primes(&BigNumber::from(3), &seven),
            Err(PaillierError::KeyGeneration(_))
        ));
    }

    #[test]
    fn rejects_bad_ciphertexts() {
        let sk = toy();
        let nn = sk.encryption_key().nn().clone();
        let minus_one = BigNumber::from(-1i64);
        for c in [nn.clone(), &nn + 1, minus_one, BigNumber::zero(), BigNumber::from(7)] {
            assert_eq!(sk.decrypt(&c), Err(PaillierError::InvalidCiphertext));
        }
    }

    #[test]
    fn random_key_has_requested_size() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let config = KeyGenConfig::new().prime_bits(64);
        let sk = DecryptionKey::random_with_rng(&mut rng, &config).unwrap();
        assert_eq!(sk.p.bit_length(), 64);
        assert_eq!(sk.q.bit_length(), 64);
        assert_ne!(sk.p, sk.q);
        assert_eq!(sk.n(), &(&sk.p * &sk.q));

        let m = BigNumber::from(1234567);
        let c = sk.encryption_key().encrypt_with_rng(&m, &mut rng).unwrap();
        assert_eq!(sk.decrypt(&c).unwrap(), m);
    }

    #[test]
    fn random_keys_from_many_seeds() {
        let config = KeyGenConfig::new().prime_bits(64);
        for seed in 0..20 {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            let sk = DecryptionKey::random_with_rng(&mut rng, &config).unwrap();
            let pk = sk.encryption_key();
            let top: BigNumber = pk.n() - 1;
            for m in [BigNumber::zero(), BigNumber::one(), top] {
                let c = pk.encrypt_with_rng(&m, &mut rng).unwrap();
                assert_eq!(sk.decrypt(&c).unwrap(), m);
            }
        }
    }

    #[test]
    fn random_rejects_small_config() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let config = KeyGenConfig::new().prime_bits(16);
        assert_eq!(
            DecryptionKey::random_with_rng(&mut rng, &config).unwrap_err(),
            PaillierError::InvalidConfig { min: 64, actual: 16 }
        );
    }

    #[test]
    fn debug_hides_secrets() {
        let sk = toy();
        let s = format!("{:?}", sk);
        assert!(s.starts_with("DecryptionKey"));
        assert!(!s.contains("lambda"));
        assert!(s.ends_with(".. }"));
    }
}
