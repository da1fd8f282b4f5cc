#![warn(missing_docs, unused_imports)]

//! _This is a part of **liftcrypt**. For more information, head to the
//! [liftcrypt](https://crates.io/crates/liftcrypt) crate homepage._
//!
//! Lifted encoding of small integers as Ristretto points, $m \mapsto m \cdot G$, and recovery of
//! $m$ from $m \cdot G$ by a bounded discrete logarithm search. The search is pluggable through
//! the [`DiscreteLog`] trait: a [`LinearScan`] for small message spaces and a
//! [`BabyStepGiantStep`] table that trades memory for decoding time.

use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::scalar::Scalar;
use thiserror::Error;

/// Baby-step giant-step search backed by a precomputed table.
pub mod bsgs;
/// The message codec and its configuration.
pub mod codec;
/// Exhaustive search over the message space.
pub mod linear;

pub use bsgs::BabyStepGiantStep;
pub use codec::{DecodeParams, MessageCodec, SearchStrategy, DEFAULT_BOUND};
pub use linear::LinearScan;

/// Largest number of group operations a single decoding may take. Bounds that need more are
/// rejected when the solver is built.
pub const MAX_SEARCH_STEPS: u64 = 1 << 24;

/// Lifts a plaintext into the group by computing $m \cdot G$.
pub fn encode(plaintext: u64) -> RistrettoPoint {
    RistrettoPoint::mul_base(&Scalar::from(plaintext))
}

/// A bounded discrete logarithm solver with respect to the Ristretto base point.
///
/// Implementations must return `Some(m)` exactly when `m < self.bound()` and
/// `encode(m) == *point`.
pub trait DiscreteLog: Send + Sync {
    /// Exclusive upper bound of the exponents this solver searches.
    fn bound(&self) -> u64;

    /// Finds the exponent of `point`, if it lies below the bound.
    fn solve(&self, point: &RistrettoPoint) -> Option<u64>;
}

/// The point is not the encoding of any plaintext below `bound`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no discrete logarithm below {bound}")]
pub struct DecodeError {
    /// Exclusive upper bound of the search.
    pub bound: u64,
}

impl From<DecodeError> for liftcrypt_traits::Error {
    fn from(error: DecodeError) -> Self {
        liftcrypt_traits::Error::DecryptionFailed { bound: error.bound }
    }
}
