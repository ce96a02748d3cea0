/*
    Copyright Michael Lodder. All Rights Reserved.
    SPDX-License-Identifier: Apache-2.0
*/
//! Paillier's cryptosystem (1999)
//! Public-Key Cryptosystems based on composite degree residuosity class.
//! See <http://citeseerx.ist.psu.edu/download?doi=10.1.1.4035&rep=rep1&type=pdf>
//!
//! Ciphertexts can be combined without decrypting them:
//!
//! * `c1 * c2 mod N^2` decrypts to `m1 + m2 mod N`
//! * `c^k mod N^2` decrypts to `m * k mod N`
//!
//! ```no_run
//! use paillier_cryptosystem::{unknown_order::BigNumber, Cryptosystem};
//!
//! let cs = Cryptosystem::new().expect("key generation failed");
//! let pk = cs.encryption_key();
//! let c1 = cs.encrypt(&BigNumber::from(5)).unwrap();
//! let c2 = cs.encrypt(&BigNumber::from(13)).unwrap();
//! let sum = pk.add(&c1, &c2).unwrap();
//! assert_eq!(cs.decrypt(&sum).unwrap(), BigNumber::from(18));
//! ```
#![deny(
    warnings,
    missing_docs,
    unused_import_braces,
    unused_qualifications,
    trivial_casts,
    trivial_numeric_casts
)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod arith;
mod config;
mod cryptosystem;
mod decryptionkey;
mod encryptionkey;
mod error;
mod utils;

pub use unknown_order;

use unknown_order::BigNumber;

/// A Paillier Plaintext, an integer in [0, N)
pub type Plaintext = BigNumber;
/// A Paillier Ciphertext, an integer in [0, N^2)
pub type Ciphertext = BigNumber;
/// A Paillier nonce used during encryption
pub type Nonce = BigNumber;

pub use config::*;
pub use cryptosystem::*;
pub use decryptionkey::*;
pub use encryptionkey::*;
pub use error::*;
