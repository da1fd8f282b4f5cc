#![warn(missing_docs, unused_imports)]

//! _This is a part of **liftcrypt**. For more information, head to the
//! [liftcrypt](https://crates.io/crates/liftcrypt) crate homepage._
//!
//! Additively homomorphic cryptosystems for small integers.

/// Additively homomorphic cryptosystems with one key.
pub mod cryptosystems;

pub use liftcrypt_dlog;
pub use liftcrypt_traits;
