use crate::{encode, BabyStepGiantStep, DecodeError, DiscreteLog, LinearScan};
use curve25519_dalek::ristretto::RistrettoPoint;
use liftcrypt_traits::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::time::Instant;
use tracing::info;

/// Default exclusive upper bound on plaintexts.
pub const DEFAULT_BOUND: u64 = 1 << 16;

/// How the codec searches for discrete logarithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum SearchStrategy {
    /// Try every plaintext in turn. No precomputation.
    Linear,
    /// Precompute a baby-step table once and decode with giant steps.
    BabyStepGiantStep {
        /// Number of baby steps; defaults to the square root of the bound.
        #[serde(default)]
        step: Option<u64>,
    },
}

impl Default for SearchStrategy {
    fn default() -> Self {
        SearchStrategy::BabyStepGiantStep { step: None }
    }
}

/// Configuration of the message space and the decoding strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeParams {
    /// Plaintexts must lie in `[0, bound)`. This is a hard cap: sums that reach it no longer
    /// decrypt.
    pub bound: u64,
    /// The discrete logarithm search used during decryption.
    pub strategy: SearchStrategy,
}

impl DecodeParams {
    /// Parameters with the given bound and the default strategy.
    pub fn with_bound(bound: u64) -> Self {
        DecodeParams {
            bound,
            ..Default::default()
        }
    }
}

impl Default for DecodeParams {
    fn default() -> Self {
        DecodeParams {
            bound: DEFAULT_BOUND,
            strategy: SearchStrategy::default(),
        }
    }
}

/// Maps plaintexts to group elements and back.
pub struct MessageCodec {
    solver: Box<dyn DiscreteLog>,
}

impl MessageCodec {
    /// Builds the codec described by `params`, including any precomputed tables.
    pub fn new(params: &DecodeParams) -> Result<Self> {
        if params.bound == 0 {
            return Err(Error::InvalidParameters(
                "the message space must contain at least one plaintext".to_string(),
            ));
        }

        let start = Instant::now();
        let (codec, table_size) = match params.strategy {
            SearchStrategy::Linear => (Self::with_solver(LinearScan::new(params.bound)?), 0),
            SearchStrategy::BabyStepGiantStep { step } => {
                let table = match step {
                    Some(step) => BabyStepGiantStep::with_step(params.bound, step)?,
                    None => BabyStepGiantStep::new(params.bound)?,
                };
                let table_size = table.table_size();
                (Self::with_solver(table), table_size)
            }
        };
        info!(
            bound = params.bound,
            strategy = ?params.strategy,
            table_size,
            "built message codec in {:?}",
            start.elapsed()
        );

        Ok(codec)
    }

    /// Wraps any discrete logarithm solver.
    pub fn with_solver<S: DiscreteLog + 'static>(solver: S) -> Self {
        MessageCodec {
            solver: Box::new(solver),
        }
    }

    /// Exclusive upper bound on plaintexts.
    pub fn bound(&self) -> u64 {
        self.solver.bound()
    }

    /// Lifts a plaintext into the group.
    pub fn encode(&self, plaintext: u64) -> RistrettoPoint {
        encode(plaintext)
    }

    /// Recovers the plaintext encoded by `point`.
    pub fn decode(&self, point: &RistrettoPoint) -> std::result::Result<u64, DecodeError> {
        self.solver.solve(point).ok_or(DecodeError {
            bound: self.bound(),
        })
    }
}

impl Debug for MessageCodec {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageCodec")
            .field("bound", &self.bound())
            .finish()
    }
}
