#![warn(missing_docs, unused_imports)]

//! _This is a part of **liftcrypt**. For more information, head to the
//! [liftcrypt](https://crates.io/crates/liftcrypt) crate homepage._
//!
//! General traits for additively homomorphic cryptosystems: key generation, encryption,
//! decryption and homomorphic combination of ciphertexts.

/// Random number generation that is consistent with the dependencies' requirements.
pub mod randomness;

/// Concepts expressing the security level of a given cryptosystem.
pub mod security;

/// General notion of a cryptosystem
pub mod cryptosystems;

/// Homomorphic operations on ciphertexts that are associated with a public key.
pub mod homomorphic;

/// The error type shared by all liftcrypt crates.
pub mod error;

pub use error::{Error, Result};
