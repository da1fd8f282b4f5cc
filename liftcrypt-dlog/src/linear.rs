use crate::{DiscreteLog, MAX_SEARCH_STEPS};
use curve25519_dalek::constants::RISTRETTO_BASEPOINT_POINT;
use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::traits::Identity;
use liftcrypt_traits::{Error, Result};

/// Walks through $0, G, 2G, \ldots$ until the point is found or the bound is reached. Requires no
/// memory, but decoding takes time linear in the bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearScan {
    bound: u64,
}

impl LinearScan {
    /// Creates a scan over `[0, bound)`.
    pub fn new(bound: u64) -> Result<Self> {
        if bound > MAX_SEARCH_STEPS {
            return Err(Error::InvalidParameters(format!(
                "a linear scan over {} plaintexts exceeds the maximum of {}",
                bound, MAX_SEARCH_STEPS
            )));
        }

        Ok(LinearScan { bound })
    }
}

impl DiscreteLog for LinearScan {
    fn bound(&self) -> u64 {
        self.bound
    }

    fn solve(&self, point: &RistrettoPoint) -> Option<u64> {
        let mut candidate = RistrettoPoint::identity();
        for exponent in 0..self.bound {
            if candidate == *point {
                return Some(exponent);
            }
            candidate += &RISTRETTO_BASEPOINT_POINT;
        }

        None
    }
}
